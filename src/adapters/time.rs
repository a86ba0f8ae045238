//! Host delay adapter.
//!
//! On ESP-IDF the controller is handed `esp_idf_hal::delay::FreeRtos`,
//! which already implements `DelayNs`.  Host builds use this thread-sleep
//! equivalent so the simulator runs in real time.

use std::time::Duration;

use embedded_hal::delay::DelayNs;

/// `DelayNs` backed by `std::thread::sleep`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostDelay;

impl HostDelay {
    pub fn new() -> Self {
        Self
    }
}

impl DelayNs for HostDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
