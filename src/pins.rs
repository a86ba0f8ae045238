//! GPIO pin assignments for the intersection controller board.
//!
//! Single source of truth — `main` builds every `PinDriver` from these
//! numbers rather than hard-coding them.  Change a pin here and the
//! on-target wiring follows.

// ---------------------------------------------------------------------------
// West street head
// ---------------------------------------------------------------------------

pub const WEST_RED_GPIO: i32 = 4;
pub const WEST_YELLOW_GPIO: i32 = 5;
pub const WEST_GREEN_GPIO: i32 = 6;

// ---------------------------------------------------------------------------
// South street head
// ---------------------------------------------------------------------------

pub const SOUTH_RED_GPIO: i32 = 7;
pub const SOUTH_YELLOW_GPIO: i32 = 15;
pub const SOUTH_GREEN_GPIO: i32 = 16;

// ---------------------------------------------------------------------------
// Pedestrian head
// ---------------------------------------------------------------------------

/// Walk lamp (white figure).
pub const WALK_GPIO: i32 = 17;
/// Don't-walk lamp (red hand).
pub const DONT_WALK_GPIO: i32 = 18;

// ---------------------------------------------------------------------------
// Presence sensors
// ---------------------------------------------------------------------------

/// Push-button, pulled down; HIGH while pressed.
pub const PEDESTRIAN_BUTTON_GPIO: i32 = 1;
/// Loop detector output, HIGH while a car is present.
pub const SOUTH_CAR_GPIO: i32 = 2;
pub const WEST_CAR_GPIO: i32 = 3;
