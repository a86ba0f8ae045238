//! Unified error types for the intersection controller.
//!
//! A single `Error` enum that every subsystem converts into, keeping the
//! control loop's `?` propagation uniform.  All variants are `Copy` so they
//! can be returned from `const fn` table checks and passed around without
//! allocation.

use core::fmt;

use crate::fsm::aspects::Street;
use crate::fsm::StateId;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the controller funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A sensor input could not be sampled.
    Sensor(SensorError),
    /// A signal head could not be driven.
    Signal(SignalError),
    /// The transition table is malformed.
    Table(TableError),
    /// Configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Signal(e) => write!(f, "signal: {e}"),
            Self::Table(e) => write!(f, "table: {e}"),
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// GPIO read returned an error.
    GpioReadFailed,
    /// The scripted input source has nothing more to give.
    Exhausted,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioReadFailed => write!(f, "GPIO read failed"),
            Self::Exhausted => write!(f, "input script exhausted"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Signal errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalError {
    /// GPIO set failed.
    GpioWriteFailed,
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
        }
    }
}

impl From<SignalError> for Error {
    fn from(e: SignalError) -> Self {
        Self::Signal(e)
    }
}

// ---------------------------------------------------------------------------
// Table construction defects
// ---------------------------------------------------------------------------

/// A defect in an authored transition table.
///
/// These are never produced while the controller runs: the shipped table is
/// checked in a `const` item, so a defective table does not compile.  The
/// variants exist so that tests can point at exactly which row is wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// Row `row` does not describe the state whose index is `row`.
    RowOutOfOrder { row: usize, found: StateId },
    /// A state holds its outputs for zero time.
    ZeroDwell { state: StateId },
    /// Walk is GREEN while a street head is not RED.
    WalkConflict { state: StateId },
    /// Both street heads grant right-of-way (GREEN or YELLOW) at once.
    StreetConflict { state: StateId },
    /// A street head would jump from YELLOW straight to GREEN.
    YellowToGreen { state: StateId, inputs: u8, street: Street },
    /// A street head would drop from GREEN without showing YELLOW.
    SkippedYellow { state: StateId, inputs: u8, street: Street },
    /// A walk-GREEN state hands right-of-way straight to a street.
    WalkNotCleared { state: StateId, inputs: u8 },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowOutOfOrder { row, found } => {
                write!(f, "row {row} holds {found:?}")
            }
            Self::ZeroDwell { state } => write!(f, "{state:?} has zero dwell"),
            Self::WalkConflict { state } => {
                write!(f, "{state:?} shows walk while a street is not red")
            }
            Self::StreetConflict { state } => {
                write!(f, "{state:?} grants both streets at once")
            }
            Self::YellowToGreen {
                state,
                inputs,
                street,
            } => write!(
                f,
                "{state:?} on 0b{inputs:03b}: {street:?} goes yellow -> green"
            ),
            Self::SkippedYellow {
                state,
                inputs,
                street,
            } => write!(
                f,
                "{state:?} on 0b{inputs:03b}: {street:?} leaves green without yellow"
            ),
            Self::WalkNotCleared { state, inputs } => write!(
                f,
                "{state:?} on 0b{inputs:03b}: street green straight after walk"
            ),
        }
    }
}

impl From<TableError> for Error {
    fn from(e: TableError) -> Self {
        Self::Table(e)
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from configuration loading and validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Controller-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
