//! Hardware adapter — bridges real pins to domain port traits.
//!
//! Owns the [`SensorBank`] and the three signal heads, exposing them
//! through [`SensorPort`] and [`SignalPort`].  This is the only module in
//! the system that touches GPIO.  Generic over `embedded-hal` pins, so
//! the same adapter runs on `PinDriver`s and on test doubles.

use embedded_hal::digital::{InputPin, OutputPin};

use crate::app::ports::{SensorPort, SignalPort};
use crate::config::SystemConfig;
use crate::drivers::sensor_bank::SensorBank;
use crate::drivers::signal_head::{StreetHead, WalkHead};
use crate::error::{SensorError, SignalError};
use crate::fsm::aspects::{StreetAspect, WalkAspect};
use crate::fsm::inputs::Sensors;

/// Concrete adapter that combines all intersection hardware behind the ports.
pub struct HardwareAdapter<I, O> {
    sensors: SensorBank<I>,
    west: StreetHead<O>,
    south: StreetHead<O>,
    walk: WalkHead<O>,
}

impl<I: InputPin, O: OutputPin> HardwareAdapter<I, O> {
    pub fn new(
        sensors: SensorBank<I>,
        west: StreetHead<O>,
        south: StreetHead<O>,
        walk: WalkHead<O>,
    ) -> Self {
        Self {
            sensors,
            west,
            south,
            walk,
        }
    }

    /// Wire up raw pins using the polarity settings in `config`.
    ///
    /// Lamp order per street head is red, yellow, green; sensor order is
    /// pedestrian, south car, west car.
    pub fn from_pins(
        config: &SystemConfig,
        [pedestrian, south_car, west_car]: [I; 3],
        [west_r, west_y, west_g]: [O; 3],
        [south_r, south_y, south_g]: [O; 3],
        [walk, dont_walk]: [O; 2],
    ) -> Self {
        let lamps = config.lamps_active_low;
        Self::new(
            SensorBank::new(pedestrian, south_car, west_car, config.sensors_active_low),
            StreetHead::new(west_r, west_y, west_g, lamps),
            StreetHead::new(south_r, south_y, south_g, lamps),
            WalkHead::new(walk, dont_walk, lamps),
        )
    }

    /// Aspects currently shown, as last written.
    pub fn shown(&self) -> (StreetAspect, StreetAspect, WalkAspect) {
        (self.west.current(), self.south.current(), self.walk.current())
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<I: InputPin, O: OutputPin> SensorPort for HardwareAdapter<I, O> {
    fn read_inputs(&mut self) -> Result<Sensors, SensorError> {
        self.sensors.read()
    }
}

// ── SignalPort implementation ─────────────────────────────────

impl<I: InputPin, O: OutputPin> SignalPort for HardwareAdapter<I, O> {
    fn write_heads(
        &mut self,
        west: StreetAspect,
        south: StreetAspect,
        walk: WalkAspect,
    ) -> Result<(), SignalError> {
        self.west.show(west)?;
        self.south.show(south)?;
        self.walk.show(walk)
    }
}
