//! Signal head and sensor drivers over `embedded-hal` pins.

pub mod sensor_bank;
pub mod signal_head;
