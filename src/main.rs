//! Intersection Controller — Main Entry Point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  HardwareAdapter (ESP32)      SimHardware (host)         │
//! │  FreeRtos delay               HostDelay                  │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────       │
//! │                                                          │
//! │   ┌──────────────────────────────────────────────┐       │
//! │   │  Controller  ·  Fsm  ·  INTERSECTION table   │       │
//! │   └──────────────────────────────────────────────┘       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! On the ESP32 the controller runs forever and any GPIO fault is fatal.
//! On the host the binary replays a scenario file (first argument) or the
//! built-in demo and stops once every sample has been consumed.

#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

#[cfg(target_os = "espidf")]
fn main() -> Result<()> {
    use esp_idf_hal::delay::FreeRtos;
    use esp_idf_hal::gpio::{AnyInputPin, AnyOutputPin, Input, Output, PinDriver};

    use trafficlight::adapters::hardware::HardwareAdapter;
    use trafficlight::app::service::Controller;
    use trafficlight::config::SystemConfig;
    use trafficlight::pins;

    fn input(gpio: i32) -> Result<PinDriver<'static, AnyInputPin, Input>> {
        // SAFETY: every number in `pins` is distinct and claimed only here.
        Ok(PinDriver::input(unsafe { AnyInputPin::new(gpio) })?)
    }

    fn output(gpio: i32) -> Result<PinDriver<'static, AnyOutputPin, Output>> {
        // SAFETY: as above.
        Ok(PinDriver::output(unsafe { AnyOutputPin::new(gpio) })?)
    }

    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Intersection controller v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Config ─────────────────────────────────────────────
    let config = SystemConfig::default();
    config.validate()?;

    // ── 3. Hardware ───────────────────────────────────────────
    let mut hw = HardwareAdapter::from_pins(
        &config,
        [
            input(pins::PEDESTRIAN_BUTTON_GPIO)?,
            input(pins::SOUTH_CAR_GPIO)?,
            input(pins::WEST_CAR_GPIO)?,
        ],
        [
            output(pins::WEST_RED_GPIO)?,
            output(pins::WEST_YELLOW_GPIO)?,
            output(pins::WEST_GREEN_GPIO)?,
        ],
        [
            output(pins::SOUTH_RED_GPIO)?,
            output(pins::SOUTH_YELLOW_GPIO)?,
            output(pins::SOUTH_GREEN_GPIO)?,
        ],
        [output(pins::WALK_GPIO)?, output(pins::DONT_WALK_GPIO)?],
    );

    // ── 4. Run forever ────────────────────────────────────────
    // `run` has already logged the fault.
    match Controller::new(&config).run(&mut hw, &mut FreeRtos) {
        Ok(never) => match never {},
        Err(e) => Err(e.into()),
    }
}

#[cfg(not(target_os = "espidf"))]
fn main() -> Result<()> {
    use trafficlight::adapters::sim::{Scenario, SimHardware};
    use trafficlight::adapters::time::HostDelay;
    use trafficlight::app::service::Controller;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let scenario = match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading scenario from {}", path);
            Scenario::load(&path)?
        }
        None => {
            info!("No scenario given, running built-in demo");
            Scenario::demo()
        }
    };
    scenario.config.validate()?;

    let mut hw = SimHardware::from_scenario(&scenario);
    let mut delay = HostDelay::new();
    let mut controller = Controller::new(&scenario.config);
    controller.start();

    while hw.remaining() > 0 {
        controller.step(&mut hw, &mut delay)?;
    }

    info!(
        "Scenario finished in {:?}: {} samples, {} head commands",
        controller.current_state(),
        hw.reads(),
        hw.history().len()
    );
    Ok(())
}
