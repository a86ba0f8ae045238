//! The transition table container and its construction-time checks.
//!
//! [`TransitionTable::check`] is a `const fn`, so the authored table in
//! [`states`](super::states) is validated by the compiler: a row that lets
//! walk run against traffic, or a yellow that snaps back to green, is a
//! build failure rather than something the controller has to notice.

use super::aspects::{Heads, Street, StreetAspect};
use super::inputs::Sensors;
use super::{Dwell, StateDescriptor, StateId};
use crate::error::TableError;

/// Fixed-size table indexed by `StateId as usize`.
#[derive(Debug)]
pub struct TransitionTable {
    rows: [StateDescriptor; StateId::COUNT],
}

/// How a single street head may not move between two consecutive states.
enum StreetFault {
    YellowToGreen,
    SkippedYellow,
}

const fn street_step(from: StreetAspect, to: StreetAspect) -> Option<StreetFault> {
    if from.is_yellow() && to.is_green() {
        return Some(StreetFault::YellowToGreen);
    }
    if from.is_green() && !to.grants_right_of_way() {
        return Some(StreetFault::SkippedYellow);
    }
    None
}

const fn street_error(fault: StreetFault, state: StateId, inputs: u8, street: Street) -> TableError {
    match fault {
        StreetFault::YellowToGreen => TableError::YellowToGreen {
            state,
            inputs,
            street,
        },
        StreetFault::SkippedYellow => TableError::SkippedYellow {
            state,
            inputs,
            street,
        },
    }
}

impl TransitionTable {
    pub const fn new(rows: [StateDescriptor; StateId::COUNT]) -> Self {
        Self { rows }
    }

    /// The row describing `id`.
    pub const fn row(&self, id: StateId) -> &StateDescriptor {
        &self.rows[id as usize]
    }

    pub const fn heads(&self, id: StateId) -> Heads {
        self.row(id).heads
    }

    pub const fn dwell(&self, id: StateId) -> Dwell {
        self.row(id).dwell
    }

    /// Total transition function: defined for every state and every input.
    pub const fn next_state(&self, id: StateId, inputs: Sensors) -> StateId {
        self.row(id).next.get(inputs)
    }

    pub fn rows(&self) -> impl Iterator<Item = &StateDescriptor> {
        self.rows.iter()
    }

    /// Copy of the rows, for building variants of a table in tests.
    pub const fn to_rows(&self) -> [StateDescriptor; StateId::COUNT] {
        self.rows
    }

    /// Verify every row against the intersection safety rules.
    ///
    /// Returns the first defect found, scanning rows in index order and each
    /// row's columns in input order.
    pub const fn check(&self) -> Result<(), TableError> {
        // Pass 1: successors are looked up by index, so order must hold first.
        let mut row = 0;
        while row < StateId::COUNT {
            let found = self.rows[row].id;
            if found as usize != row {
                return Err(TableError::RowOutOfOrder { row, found });
            }
            row += 1;
        }

        // Pass 2: per-row outputs and per-column transitions.
        let mut row = 0;
        while row < StateId::COUNT {
            let desc = &self.rows[row];
            let state = desc.id;
            let heads = desc.heads;

            if desc.dwell.0 == 0 {
                return Err(TableError::ZeroDwell { state });
            }
            if heads.walk.is_green() && !(heads.west.is_red() && heads.south.is_red()) {
                return Err(TableError::WalkConflict { state });
            }
            if heads.west.grants_right_of_way() && heads.south.grants_right_of_way() {
                return Err(TableError::StreetConflict { state });
            }

            let mut col = 0;
            while col < Sensors::COMBINATIONS {
                let inputs = col as u8;
                let next = self.rows[desc.next.0[col] as usize].heads;

                if let Some(fault) = street_step(heads.west, next.west) {
                    return Err(street_error(fault, state, inputs, Street::West));
                }
                if let Some(fault) = street_step(heads.south, next.south) {
                    return Err(street_error(fault, state, inputs, Street::South));
                }
                if heads.walk.is_green() && next.any_street_green() {
                    return Err(TableError::WalkNotCleared { state, inputs });
                }
                col += 1;
            }
            row += 1;
        }

        Ok(())
    }

    /// Every state reachable from `start`, in breadth-first order.
    pub fn reachable_from(&self, start: StateId) -> heapless::Vec<StateId, { StateId::COUNT }> {
        let mut seen: heapless::Vec<StateId, { StateId::COUNT }> = heapless::Vec::new();
        // Capacity equals the number of distinct states, so pushes never fail.
        let _ = seen.push(start);

        let mut cursor = 0;
        while cursor < seen.len() {
            let state = seen[cursor];
            cursor += 1;
            for next in self.row(state).next.iter() {
                if !seen.contains(&next) {
                    let _ = seen.push(next);
                }
            }
        }
        seen
    }
}
