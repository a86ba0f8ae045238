//! Application core — the controller loop and its collaborator ports.
//!
//! All interaction with hardware happens through the **port traits**
//! defined in [`ports`], keeping this layer fully testable without real
//! peripherals.

pub mod ports;
pub mod service;
