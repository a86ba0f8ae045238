//! Presence sensor inputs.
//!
//! Pedestrian push-button and the two car detectors, each on its own GPIO.
//! Levels are packed into [`Sensors`] in one pass so the controller sees a
//! single consistent sample.  The detectors debounce in hardware; this
//! driver reads the pins exactly once per call.

use embedded_hal::digital::{Error as _, InputPin};
use log::warn;

use crate::error::SensorError;
use crate::fsm::inputs::Sensors;

pub struct SensorBank<P> {
    pedestrian: P,
    south_car: P,
    west_car: P,
    active_low: bool,
}

impl<P: InputPin> SensorBank<P> {
    pub fn new(pedestrian: P, south_car: P, west_car: P, active_low: bool) -> Self {
        Self {
            pedestrian,
            south_car,
            west_car,
            active_low,
        }
    }

    /// Sample all three sensors.
    pub fn read(&mut self) -> Result<Sensors, SensorError> {
        let pedestrian = Self::level(&mut self.pedestrian, self.active_low)?;
        let south_car = Self::level(&mut self.south_car, self.active_low)?;
        let west_car = Self::level(&mut self.west_car, self.active_low)?;
        Ok(Sensors::from_levels(pedestrian, south_car, west_car))
    }

    fn level(pin: &mut P, active_low: bool) -> Result<bool, SensorError> {
        let high = pin.is_high().map_err(|e| {
            warn!("sensor read failed: {:?}", e.kind());
            SensorError::GpioReadFailed
        })?;
        Ok(high != active_low)
    }
}
