//! Controller — the run loop that drives the table against real time.
//!
//! [`Controller`] owns the FSM.  All I/O flows through port traits passed
//! in at call sites, making the loop testable with mock adapters.
//!
//! ```text
//!  SensorPort ──▶ ┌────────────────────────┐
//!                 │       Controller        │ ◀── DelayNs
//!  SignalPort ◀── │  write → wait → sample  │
//!                 └────────────────────────┘
//! ```
//!
//! One step is: command the current state's heads, hold them for the
//! state's dwell, sample the sensors exactly once, look up the next state.
//! The dwell is the only blocking call and is never cut short.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use log::{error, info};

use crate::config::SystemConfig;
use crate::error::Result;
use crate::fsm::aspects::Heads;
use crate::fsm::states::INTERSECTION;
use crate::fsm::table::TransitionTable;
use crate::fsm::{Fsm, StateId};

use super::ports::{SensorPort, SignalPort};

// ───────────────────────────────────────────────────────────────
// Controller
// ───────────────────────────────────────────────────────────────

/// The intersection controller.
pub struct Controller {
    fsm: Fsm,
    /// Milliseconds per dwell unit (from config).
    dwell_unit_ms: u32,
}

impl Controller {
    /// Controller over the shipped intersection table, in its initial state.
    pub fn new(config: &SystemConfig) -> Self {
        Self::with_table(&INTERSECTION, config)
    }

    /// Controller over an arbitrary (already checked) table.
    pub fn with_table(table: &'static TransitionTable, config: &SystemConfig) -> Self {
        Self {
            fsm: Fsm::new(table, StateId::INITIAL),
            dwell_unit_ms: config.dwell_unit_ms,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Log the starting configuration.  [`run`](Self::run) calls this.
    pub fn start(&self) {
        self.fsm.start();
        info!(
            "Controller started in {:?} (dwell unit {} ms)",
            self.fsm.current_state(),
            self.dwell_unit_ms
        );
    }

    /// Drive the intersection forever.
    ///
    /// Never returns `Ok`.  A collaborator fault ends the loop and is handed
    /// to the caller unchanged; the controller does not try to recover.
    pub fn run(
        mut self,
        hw: &mut (impl SensorPort + SignalPort),
        delay: &mut impl DelayNs,
    ) -> Result<Infallible> {
        self.start();
        loop {
            if let Err(e) = self.step(hw, delay) {
                error!(
                    "Controller halted in {:?} after {} steps: {}",
                    self.fsm.current_state(),
                    self.fsm.steps(),
                    e
                );
                return Err(e);
            }
        }
    }

    // ── Per-step orchestration ────────────────────────────────

    /// Run one full cycle: outputs → dwell → sample → lookup.
    ///
    /// The `hw` parameter satisfies **both** [`SensorPort`] and
    /// [`SignalPort`] — this avoids a double mutable borrow while keeping
    /// the port boundary explicit.  Returns the state now current.
    pub fn step(
        &mut self,
        hw: &mut (impl SensorPort + SignalPort),
        delay: &mut impl DelayNs,
    ) -> Result<StateId> {
        // 1. Outputs are a function of the current state only.
        let heads = self.fsm.heads();
        hw.write_heads(heads.west, heads.south, heads.walk)?;

        // 2. Hold them for the full dwell.
        delay.delay_ms(self.fsm.dwell().as_millis(self.dwell_unit_ms));

        // 3. One sample, taken after the dwell.
        let inputs = hw.read_inputs()?;

        // 4. Table lookup.
        Ok(self.fsm.advance(inputs))
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn current_state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// Heads the next step will command.
    pub fn heads(&self) -> Heads {
        self.fsm.heads()
    }

    pub fn steps(&self) -> u64 {
        self.fsm.steps()
    }

    pub fn steps_in_current_state(&self) -> u64 {
        self.fsm.steps_in_current_state()
    }

    pub fn dwell_unit_ms(&self) -> u32 {
        self.dwell_unit_ms
    }
}
