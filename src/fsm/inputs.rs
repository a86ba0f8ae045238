//! The 3-bit sensor input vector.
//!
//! Bit layout (also the column order of every transition row):
//!
//! ```text
//!  bit 2      bit 1        bit 0
//!  PEDESTRIAN SOUTH_CAR    WEST_CAR
//! ```
//!
//! Column `0b101` therefore means "pedestrian waiting and a car on the west
//! approach".  Every row of the table is authored against this ordering.

use bitflags::bitflags;

bitflags! {
    /// Sampled presence sensors.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Sensors: u8 {
        /// A car is waiting on the west approach.
        const WEST_CAR   = 0b001;
        /// A car is waiting on the south approach.
        const SOUTH_CAR  = 0b010;
        /// A pedestrian has requested the crossing.
        const PEDESTRIAN = 0b100;
    }
}

impl Sensors {
    /// Number of distinct input vectors, and the width of every transition row.
    pub const COMBINATIONS: usize = 8;

    /// Build a vector from the three individual sensor levels.
    pub const fn from_levels(pedestrian: bool, south_car: bool, west_car: bool) -> Self {
        Self::from_bits_truncate(
            (pedestrian as u8) << 2 | (south_car as u8) << 1 | west_car as u8,
        )
    }

    /// Build a vector from a raw port value; bits above bit 2 are ignored.
    pub const fn from_raw(raw: u8) -> Self {
        Self::from_bits_truncate(raw)
    }

    /// Column index into a transition row.
    pub const fn index(self) -> usize {
        self.bits() as usize
    }

    pub const fn pedestrian(self) -> bool {
        self.contains(Self::PEDESTRIAN)
    }

    pub const fn south_car(self) -> bool {
        self.contains(Self::SOUTH_CAR)
    }

    pub const fn west_car(self) -> bool {
        self.contains(Self::WEST_CAR)
    }

    /// Every possible input vector, in column order.
    pub fn every() -> impl Iterator<Item = Self> {
        (0..Self::COMBINATIONS as u8).map(Self::from_raw)
    }
}
