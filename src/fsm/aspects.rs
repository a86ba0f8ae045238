//! Signal head aspects.
//!
//! A street head has red, yellow and green lamps; a walk head has a walk
//! lamp and a don't-walk lamp, so it never shows yellow.  Each aspect maps
//! to exactly one lit lamp, or none for `Off`.

/// The two street approaches controlled by the intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Street {
    West,
    South,
}

/// Aspect shown by a vehicular signal head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StreetAspect {
    #[default]
    Off,
    Red,
    Green,
    Yellow,
}

impl StreetAspect {
    /// Lamp levels as `(red, yellow, green)`.
    pub const fn lamps(self) -> (bool, bool, bool) {
        match self {
            Self::Off => (false, false, false),
            Self::Red => (true, false, false),
            Self::Yellow => (false, true, false),
            Self::Green => (false, false, true),
        }
    }

    /// `true` while traffic on this approach may enter the intersection.
    pub const fn grants_right_of_way(self) -> bool {
        matches!(self, Self::Green | Self::Yellow)
    }

    pub const fn is_green(self) -> bool {
        matches!(self, Self::Green)
    }

    pub const fn is_yellow(self) -> bool {
        matches!(self, Self::Yellow)
    }

    pub const fn is_red(self) -> bool {
        matches!(self, Self::Red)
    }
}

/// Aspect shown by the pedestrian signal head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WalkAspect {
    #[default]
    Off,
    /// Don't walk.
    Red,
    /// Walk.
    Green,
}

impl WalkAspect {
    /// Lamp levels as `(walk, dont_walk)`.
    pub const fn lamps(self) -> (bool, bool) {
        match self {
            Self::Off => (false, false),
            Self::Red => (false, true),
            Self::Green => (true, false),
        }
    }

    pub const fn is_green(self) -> bool {
        matches!(self, Self::Green)
    }
}

/// The full output of one intersection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Heads {
    pub west: StreetAspect,
    pub south: StreetAspect,
    pub walk: WalkAspect,
}

impl Heads {
    pub const fn new(west: StreetAspect, south: StreetAspect, walk: WalkAspect) -> Self {
        Self { west, south, walk }
    }

    /// Aspect of the given street's head.
    pub const fn street(&self, street: Street) -> StreetAspect {
        match street {
            Street::West => self.west,
            Street::South => self.south,
        }
    }

    /// `true` if either street head is GREEN.
    pub const fn any_street_green(&self) -> bool {
        self.west.is_green() || self.south.is_green()
    }
}
