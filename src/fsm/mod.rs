//! Table-driven Moore finite state machine.
//!
//! Classic embedded FSM pattern expressed in Rust:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │  TransitionTable                                                     │
//! │  ┌────────────┬──────┬───────┬──────┬───────┬─────────────────────┐  │
//! │  │ StateId    │ west │ south │ walk │ dwell │ next[000 .. 111]    │  │
//! │  ├────────────┼──────┼───────┼──────┼───────┼─────────────────────┤  │
//! │  │ Startup    │ R    │ R     │ off  │ 1     │ [..8 StateIds..]    │  │
//! │  │ AllRed     │ R    │ R     │ R    │ 1     │ [..8 StateIds..]    │  │
//! │  │ ...        │      │       │      │       │                     │  │
//! │  └────────────┴──────┴───────┴──────┴───────┴─────────────────────┘  │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Outputs depend only on the current row, never on the input that caused
//! the transition, so the heads are fixed for the whole dwell.  The next
//! state is a plain lookup: `row.next[inputs]`.  All policy (pedestrian
//! priority, south before west, yellow clearance) lives in the shape of the
//! table in [`states`], not in code.

pub mod aspects;
pub mod inputs;
pub mod states;
pub mod table;

use aspects::Heads;
use inputs::Sensors;
use log::{debug, info};
use table::TransitionTable;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Enumeration of all intersection states.
/// Row `i` of a [`TransitionTable`] must describe the state with index `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateId {
    /// Power-on: streets red, walk head dark while the heads settle.
    Startup = 0,
    /// Settling state: everything red, no right-of-way granted.
    AllRed = 1,
    WestGo = 2,
    WestWait = 3,
    SouthGo = 4,
    SouthWait = 5,
    Walk = 6,
    /// Pedestrian clearance, don't-walk dark.
    WalkFlashOff = 7,
    /// Pedestrian clearance, don't-walk lit.
    WalkFlashOn = 8,
}

impl StateId {
    /// Total number of states — used to size the table array.
    pub const COUNT: usize = 9;

    /// Every state, in index order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Startup,
        Self::AllRed,
        Self::WestGo,
        Self::WestWait,
        Self::SouthGo,
        Self::SouthWait,
        Self::Walk,
        Self::WalkFlashOff,
        Self::WalkFlashOn,
    ];

    /// The state the controller enters on every power-up.
    pub const INITIAL: Self = Self::Startup;

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert an index back to `StateId`; `None` if out of range.
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < Self::COUNT {
            Some(Self::ALL[idx])
        } else {
            None
        }
    }
}

// ---------------------------------------------------------------------------
// Row contents
// ---------------------------------------------------------------------------

/// How long a state holds its outputs, in dwell units.
///
/// The length of one unit comes from
/// [`SystemConfig::dwell_unit_ms`](crate::config::SystemConfig::dwell_unit_ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dwell(pub u16);

impl Dwell {
    /// The shortest legal hold.
    pub const UNIT: Self = Self(1);

    /// Hold time in milliseconds for a given unit length.
    pub const fn as_millis(self, unit_ms: u32) -> u32 {
        (self.0 as u32).saturating_mul(unit_ms)
    }
}

/// Successor of a state for each of the 8 input vectors, in column order
/// `0b000 ..= 0b111` (see [`inputs`] for the bit layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transitions(pub [StateId; Sensors::COMBINATIONS]);

impl Transitions {
    /// Every input vector leads to `state`.
    pub const fn always(state: StateId) -> Self {
        Self([state; Sensors::COMBINATIONS])
    }

    pub const fn get(&self, inputs: Sensors) -> StateId {
        self.0[inputs.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.0.iter().copied()
    }
}

/// Static descriptor for a single intersection state.
/// Stored in a fixed-size array — no heap, no `dyn`.
#[derive(Debug, Clone, Copy)]
pub struct StateDescriptor {
    pub id: StateId,
    pub name: &'static str,
    pub heads: Heads,
    pub dwell: Dwell,
    pub next: Transitions,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

/// The lookup engine: a table reference plus the one mutable cell of the
/// whole controller, the current state.
pub struct Fsm {
    table: &'static TransitionTable,
    current: StateId,
    /// Monotonically increasing step counter.
    step_count: u64,
    /// Step at which the current state was entered.
    state_entry_step: u64,
}

impl Fsm {
    /// Construct a new FSM over `table`, starting in `initial`.
    pub fn new(table: &'static TransitionTable, initial: StateId) -> Self {
        Self {
            table,
            current: initial,
            step_count: 0,
            state_entry_step: 0,
        }
    }

    /// Log the starting state.  Call once after construction.
    pub fn start(&self) {
        info!("FSM starting in state: {}", self.descriptor().name);
    }

    /// Advance by one lookup using the sampled `inputs`.
    pub fn advance(&mut self, inputs: Sensors) -> StateId {
        self.step_count += 1;
        let next = self.table.next_state(self.current, inputs);

        if next == self.current {
            debug!(
                "FSM hold: {} on 0b{:03b}",
                self.descriptor().name,
                inputs.bits()
            );
        } else {
            info!(
                "FSM transition: {} -> {} on 0b{:03b}",
                self.descriptor().name,
                self.table.row(next).name,
                inputs.bits()
            );
            self.current = next;
            self.state_entry_step = self.step_count;
        }

        next
    }

    /// The current state's identity.
    pub fn current_state(&self) -> StateId {
        self.current
    }

    /// The current state's row.
    pub fn descriptor(&self) -> &'static StateDescriptor {
        self.table.row(self.current)
    }

    /// Heads commanded by the current state.
    pub fn heads(&self) -> Heads {
        self.descriptor().heads
    }

    /// Hold time of the current state.
    pub fn dwell(&self) -> Dwell {
        self.descriptor().dwell
    }

    /// Total number of lookups performed.
    pub fn steps(&self) -> u64 {
        self.step_count
    }

    /// How many lookups the FSM has stayed in the current state.
    pub fn steps_in_current_state(&self) -> u64 {
        self.step_count - self.state_entry_step
    }
}
