//! The authored intersection table.
//!
//! Policy, in order: pedestrians first, then south, then west.  Every green
//! leaves through its yellow, every yellow leaves to red, and a walk phase
//! always ends with a flashing don't-walk clearance before any street goes
//! green.  After a phase is served, waiting traffic on the other approaches
//! is served before the same phase comes round again, so constant demand on
//! all three sensors cycles walk → south → west.  A waiting pedestrian is
//! passed over at a hand-over only in two cases: all three sensors are
//! active, or the walk phase has just ended and a car is waiting.
//!
//! ```text
//!            ┌──[ped]──────────────────────────────▶ WALK ──[car]──▶ FLASH OFF
//!            │                                         ▲                 │
//!  STARTUP ─▶ ALL RED ──[south]──▶ SOUTH GO ─▶ SOUTH WAIT                ▼
//!            │   ▲                     ▲           │  ▲              FLASH ON
//!            │   └─────────────────────┼───────────┘  │                 │
//!            └──[west]──▶ WEST GO ─▶ WEST WAIT ───────┘ ◀───[cars]──────┘
//! ```

use super::aspects::{Heads, StreetAspect, WalkAspect};
use super::table::TransitionTable;
use super::{Dwell, StateDescriptor, StateId, Transitions};

use super::StateId::{
    AllRed, SouthGo, SouthWait, Startup, Walk, WalkFlashOff, WalkFlashOn, WestGo, WestWait,
};

const RED: StreetAspect = StreetAspect::Red;
const YELLOW: StreetAspect = StreetAspect::Yellow;
const GREEN: StreetAspect = StreetAspect::Green;

const fn row(
    id: StateId,
    name: &'static str,
    west: StreetAspect,
    south: StreetAspect,
    walk: WalkAspect,
    next: [StateId; 8],
) -> StateDescriptor {
    StateDescriptor {
        id,
        name,
        heads: Heads::new(west, south, walk),
        dwell: Dwell::UNIT,
        next: Transitions(next),
    }
}

#[rustfmt::skip]
const ROWS: TransitionTable = TransitionTable::new([
    //  state         name            west    south   walk                 000          001           010           011           100           101           110           111
    row(Startup,      "Startup",      RED,    RED,    WalkAspect::Off,   [AllRed,      WestGo,       SouthGo,      SouthGo,      Walk,         Walk,         Walk,         Walk]),
    row(AllRed,       "AllRed",       RED,    RED,    WalkAspect::Red,   [AllRed,      WestGo,       SouthGo,      SouthGo,      Walk,         Walk,         Walk,         Walk]),
    row(WestGo,       "WestGo",       GREEN,  RED,    WalkAspect::Red,   [WestGo,      WestGo,       WestWait,     WestWait,     WestWait,     WestWait,     WestWait,     WestWait]),
    row(WestWait,     "WestWait",     YELLOW, RED,    WalkAspect::Red,   [AllRed,      AllRed,       SouthGo,      SouthGo,      Walk,         Walk,         Walk,         Walk]),
    row(SouthGo,      "SouthGo",      RED,    GREEN,  WalkAspect::Red,   [SouthGo,     SouthWait,    SouthGo,      SouthWait,    SouthWait,    SouthWait,    SouthWait,    SouthWait]),
    row(SouthWait,    "SouthWait",    RED,    YELLOW, WalkAspect::Red,   [AllRed,      WestGo,       AllRed,       WestGo,       Walk,         Walk,         Walk,         WestGo]),
    row(Walk,         "Walk",         RED,    RED,    WalkAspect::Green, [Walk,        WalkFlashOff, WalkFlashOff, WalkFlashOff, Walk,         WalkFlashOff, WalkFlashOff, WalkFlashOff]),
    row(WalkFlashOff, "WalkFlashOff", RED,    RED,    WalkAspect::Off,   [WalkFlashOn, WalkFlashOn,  WalkFlashOn,  WalkFlashOn,  WalkFlashOn,  WalkFlashOn,  WalkFlashOn,  WalkFlashOn]),
    row(WalkFlashOn,  "WalkFlashOn",  RED,    RED,    WalkAspect::Red,   [AllRed,      WestGo,       SouthGo,      SouthGo,      Walk,         WestGo,       SouthGo,      SouthGo]),
]);

const _: () = match ROWS.check() {
    Ok(()) => (),
    Err(_) => panic!("intersection table violates a signal safety rule"),
};

/// The intersection table, checked at compile time.
pub static INTERSECTION: TransitionTable = ROWS;
