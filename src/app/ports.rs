//! Port traits — the boundary between the controller and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Controller (domain)
//! ```
//!
//! Driven adapters (sensor inputs, signal heads) implement these traits.
//! The [`Controller`](super::service::Controller) consumes them via
//! generics, so the state machine never touches hardware directly.  Timing
//! is not a port of its own: the controller takes any
//! [`embedded_hal::delay::DelayNs`].
//!
//! Port errors are typed and propagated as-is; the controller never retries
//! or masks a hardware fault.

use crate::error::{SensorError, SignalError};
use crate::fsm::aspects::{StreetAspect, WalkAspect};
use crate::fsm::inputs::Sensors;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the controller calls this once per step, right after
/// the dwell completes.
pub trait SensorPort {
    /// Sample pedestrian, south-car and west-car presence as one vector.
    /// Implementations debounce if the wiring needs it.
    fn read_inputs(&mut self) -> Result<Sensors, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Signal port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the controller calls this once per step, before the
/// dwell starts.
pub trait SignalPort {
    /// Command all three heads.  Implementations write west, then south,
    /// then walk, and return only after every head has been set.
    fn write_heads(
        &mut self,
        west: StreetAspect,
        south: StreetAspect,
        walk: WalkAspect,
    ) -> Result<(), SignalError>;
}
