//! Mock hardware for integration tests.
//!
//! Two layers of doubles:
//! - [`MockIntersection`] implements the port traits directly and records
//!   every call, for controller-level tests.
//! - [`MockLamp`] / [`MockSensor`] implement the `embedded-hal` pin traits,
//!   for driving the real `HardwareAdapter` without GPIO.

use std::cell::Cell;
use std::collections::VecDeque;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};

use trafficlight::app::ports::{SensorPort, SignalPort};
use trafficlight::error::{SensorError, SignalError};
use trafficlight::fsm::aspects::{Heads, StreetAspect, WalkAspect};
use trafficlight::fsm::inputs::Sensors;

// ── Port call record ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PortCall {
    Write(Heads),
    Read(Sensors),
}

// ── MockIntersection ──────────────────────────────────────────

pub struct MockIntersection {
    pub calls: Vec<PortCall>,
    inputs: VecDeque<u8>,
    /// Fail the write with this 0-based index.
    pub fail_write_at: Option<usize>,
    writes: usize,
}

impl MockIntersection {
    pub fn new(inputs: &[u8]) -> Self {
        Self {
            calls: Vec::new(),
            inputs: inputs.iter().copied().collect(),
            fail_write_at: None,
            writes: 0,
        }
    }

    /// Same vector repeated `n` times.
    pub fn constant(raw: u8, n: usize) -> Self {
        Self::new(&vec![raw; n])
    }

    pub fn writes(&self) -> Vec<Heads> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                PortCall::Write(h) => Some(*h),
                PortCall::Read(_) => None,
            })
            .collect()
    }
}

impl SensorPort for MockIntersection {
    fn read_inputs(&mut self) -> Result<Sensors, SensorError> {
        let s = self
            .inputs
            .pop_front()
            .map(Sensors::from_raw)
            .ok_or(SensorError::Exhausted)?;
        self.calls.push(PortCall::Read(s));
        Ok(s)
    }
}

impl SignalPort for MockIntersection {
    fn write_heads(
        &mut self,
        west: StreetAspect,
        south: StreetAspect,
        walk: WalkAspect,
    ) -> Result<(), SignalError> {
        let n = self.writes;
        self.writes += 1;
        if self.fail_write_at == Some(n) {
            return Err(SignalError::GpioWriteFailed);
        }
        self.calls.push(PortCall::Write(Heads::new(west, south, walk)));
        Ok(())
    }
}

// ── RecordingDelay ────────────────────────────────────────────

/// `DelayNs` that returns immediately and remembers each request.
#[derive(Default)]
pub struct RecordingDelay {
    pub waits_ms: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}

// ── Mock pins ─────────────────────────────────────────────────

/// Output pin whose level is visible through a shared cell.
#[derive(Clone, Default)]
pub struct MockLamp {
    level: Rc<Cell<bool>>,
    /// Sticky fault: every write fails once set.
    fault: Rc<Cell<bool>>,
}

impl MockLamp {
    pub fn is_high(&self) -> bool {
        self.level.get()
    }

    pub fn break_wire(&self) {
        self.fault.set(true);
    }
}

#[derive(Debug)]
pub struct PinFault;

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl ErrorType for MockLamp {
    type Error = PinFault;
}

impl OutputPin for MockLamp {
    fn set_low(&mut self) -> Result<(), PinFault> {
        if self.fault.get() {
            return Err(PinFault);
        }
        self.level.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), PinFault> {
        if self.fault.get() {
            return Err(PinFault);
        }
        self.level.set(true);
        Ok(())
    }
}

/// Input pin driven from the test through a shared cell.
#[derive(Clone, Default)]
pub struct MockSensor {
    level: Rc<Cell<bool>>,
    /// Number of times the pin was sampled.
    pub samples: Rc<Cell<u32>>,
}

impl MockSensor {
    pub fn set(&self, high: bool) {
        self.level.set(high);
    }
}

impl ErrorType for MockSensor {
    type Error = Infallible;
}

impl InputPin for MockSensor {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        self.samples.set(self.samples.get() + 1);
        Ok(self.level.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        self.is_high().map(|h| !h)
    }
}
