//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements            | Connects to                   |
//! |------------|-----------------------|-------------------------------|
//! | `hardware` | SensorPort            | GPIO inputs via `SensorBank`  |
//! |            | SignalPort            | GPIO lamps via signal heads   |
//! | `sim`      | SensorPort            | Scripted sensor vectors       |
//! |            | SignalPort            | In-memory head history        |
//! | `time`     | `DelayNs`             | `std::thread::sleep` (host)   |

pub mod hardware;
pub mod sim;
#[cfg(not(target_os = "espidf"))]
pub mod time;
