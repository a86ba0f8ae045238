//! Signal head lamp drivers.
//!
//! A street head is three discrete lamps (red, yellow, green); a walk head
//! is two (walk, don't walk).  Each aspect lights exactly one lamp, or none
//! for `Off`.  Lamps are written dark-first so that two lamps of the same
//! head are never lit together, even for the instant between two writes.
//!
//! ## Dual-target design
//!
//! Generic over any `embedded_hal::digital::OutputPin`: on ESP-IDF these
//! are `PinDriver`s, on host/test they are in-memory pins.

use embedded_hal::digital::{Error as _, OutputPin, PinState};
use log::warn;

use crate::error::SignalError;
use crate::fsm::aspects::{StreetAspect, WalkAspect};

/// Drive one lamp, honouring wiring polarity.
fn drive<P: OutputPin>(pin: &mut P, lit: bool, active_low: bool) -> Result<(), SignalError> {
    pin.set_state(PinState::from(lit != active_low)).map_err(|e| {
        warn!("lamp write failed: {:?}", e.kind());
        SignalError::GpioWriteFailed
    })
}

/// Write a group of lamps, unlit ones first.
fn drive_group<P: OutputPin>(
    lamps: &mut [(&mut P, bool)],
    active_low: bool,
) -> Result<(), SignalError> {
    for (pin, lit) in lamps.iter_mut().filter(|(_, lit)| !*lit) {
        drive(&mut **pin, *lit, active_low)?;
    }
    for (pin, lit) in lamps.iter_mut().filter(|(_, lit)| *lit) {
        drive(&mut **pin, *lit, active_low)?;
    }
    Ok(())
}

// ── Street head ───────────────────────────────────────────────

pub struct StreetHead<P> {
    red: P,
    yellow: P,
    green: P,
    active_low: bool,
    current: StreetAspect,
}

impl<P: OutputPin> StreetHead<P> {
    pub fn new(red: P, yellow: P, green: P, active_low: bool) -> Self {
        Self {
            red,
            yellow,
            green,
            active_low,
            current: StreetAspect::Off,
        }
    }

    pub fn show(&mut self, aspect: StreetAspect) -> Result<(), SignalError> {
        let (r, y, g) = aspect.lamps();
        drive_group(
            &mut [
                (&mut self.red, r),
                (&mut self.yellow, y),
                (&mut self.green, g),
            ],
            self.active_low,
        )?;
        self.current = aspect;
        Ok(())
    }

    /// Last aspect successfully shown.
    pub fn current(&self) -> StreetAspect {
        self.current
    }
}

// ── Walk head ─────────────────────────────────────────────────

pub struct WalkHead<P> {
    walk: P,
    dont_walk: P,
    active_low: bool,
    current: WalkAspect,
}

impl<P: OutputPin> WalkHead<P> {
    pub fn new(walk: P, dont_walk: P, active_low: bool) -> Self {
        Self {
            walk,
            dont_walk,
            active_low,
            current: WalkAspect::Off,
        }
    }

    pub fn show(&mut self, aspect: WalkAspect) -> Result<(), SignalError> {
        let (walk, dont_walk) = aspect.lamps();
        drive_group(
            &mut [(&mut self.walk, walk), (&mut self.dont_walk, dont_walk)],
            self.active_low,
        )?;
        self.current = aspect;
        Ok(())
    }

    pub fn current(&self) -> WalkAspect {
        self.current
    }
}
