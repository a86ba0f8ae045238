//! Fuzz target: controller over arbitrary sensor byte streams
//!
//! Each input byte is one sensor sample (high bits included, to exercise
//! truncation).  Verifies:
//! - No panics for any sequence
//! - Walk is never green while a street is green
//! - At most one street holds right-of-way
//! - No street goes yellow -> green or green -> red
//!
//! cargo fuzz run fuzz_sensor_sequence

#![no_main]

use embedded_hal::delay::DelayNs;
use libfuzzer_sys::fuzz_target;
use trafficlight::adapters::sim::SimHardware;
use trafficlight::app::service::Controller;
use trafficlight::config::SystemConfig;

struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

fuzz_target!(|data: &[u8]| {
    let mut ctl = Controller::new(&SystemConfig::default());
    let mut hw = SimHardware::new(data);

    for _ in data {
        if ctl.step(&mut hw, &mut NoDelay).is_err() {
            return;
        }
    }

    for h in hw.history() {
        assert!(!(h.walk.is_green() && h.any_street_green()));
        assert!(!(h.west.grants_right_of_way() && h.south.grants_right_of_way()));
    }
    for pair in hw.history().windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(!(a.west.is_yellow() && b.west.is_green()));
        assert!(!(a.south.is_yellow() && b.south.is_green()));
        assert!(!(a.west.is_green() && b.west.is_red()));
        assert!(!(a.south.is_green() && b.south.is_red()));
    }
});
