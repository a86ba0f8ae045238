//! Controller → ports pipeline: ordering, timing, fault propagation and
//! the end-to-end behaviour of the shipped table.

use crate::mock_hw::{MockIntersection, PortCall, RecordingDelay};

use trafficlight::app::service::Controller;
use trafficlight::config::SystemConfig;
use trafficlight::error::{Error, SensorError, SignalError};
use trafficlight::fsm::aspects::{Heads, StreetAspect, WalkAspect};
use trafficlight::fsm::inputs::Sensors;
use trafficlight::fsm::states::INTERSECTION;
use trafficlight::fsm::table::TransitionTable;
use trafficlight::fsm::{Dwell, StateId};

const ALL_RED_WALK_OFF: Heads = Heads::new(StreetAspect::Red, StreetAspect::Red, WalkAspect::Off);

fn config(unit_ms: u32) -> SystemConfig {
    SystemConfig {
        dwell_unit_ms: unit_ms,
        ..SystemConfig::default()
    }
}

/// Run one step per scripted sample and return the controller.
fn drive(inputs: &[u8]) -> (Controller, MockIntersection, RecordingDelay) {
    let mut ctl = Controller::new(&config(100));
    let mut hw = MockIntersection::new(inputs);
    let mut delay = RecordingDelay::default();
    for _ in inputs {
        ctl.step(&mut hw, &mut delay).unwrap();
    }
    (ctl, hw, delay)
}

// ── End-to-end scenario ───────────────────────────────────────

#[test]
fn end_to_end_scenario() {
    let mut ctl = Controller::new(&config(100));
    let mut hw = MockIntersection::new(&[0b000, 0b000, 0b100, 0b000, 0b010, 0b000]);
    let mut delay = RecordingDelay::default();

    // Power-up: all red, walk dark.
    assert_eq!(ctl.heads(), ALL_RED_WALK_OFF);

    // Nothing waiting: settle into all-red and stay there.
    assert_eq!(ctl.step(&mut hw, &mut delay).unwrap(), StateId::AllRed);
    assert_eq!(ctl.step(&mut hw, &mut delay).unwrap(), StateId::AllRed);

    // Button pushed: walk green, both streets red.
    assert_eq!(ctl.step(&mut hw, &mut delay).unwrap(), StateId::Walk);
    let h = ctl.heads();
    assert_eq!(h.walk, WalkAspect::Green);
    assert_eq!(h.west, StreetAspect::Red);
    assert_eq!(h.south, StreetAspect::Red);

    // Crossing held until traffic shows up, then cleared.
    assert_eq!(ctl.step(&mut hw, &mut delay).unwrap(), StateId::Walk);
    assert_eq!(ctl.step(&mut hw, &mut delay).unwrap(), StateId::WalkFlashOff);
    assert_eq!(ctl.step(&mut hw, &mut delay).unwrap(), StateId::WalkFlashOn);

    assert_eq!(hw.writes()[0], ALL_RED_WALK_OFF);
    assert_eq!(delay.waits_ms, vec![100; 6]);
}

#[test]
fn south_car_from_all_red_gets_green() {
    let (ctl, _, _) = drive(&[0b000, 0b010]);
    assert_eq!(ctl.current_state(), StateId::SouthGo);
    assert_eq!(ctl.heads().south, StreetAspect::Green);
    assert_eq!(ctl.heads().west, StreetAspect::Red);
}

#[test]
fn settled_idle_intersection_is_idempotent() {
    let (ctl, hw, _) = drive(&[0b000; 20]);
    assert_eq!(ctl.current_state(), StateId::AllRed);
    assert_eq!(ctl.steps_in_current_state(), 19);
    let writes = hw.writes();
    assert!(writes[1..].iter().all(|h| *h == writes[1]));
}

// ── Step ordering and timing ──────────────────────────────────

#[test]
fn every_step_is_write_then_read() {
    let (_, hw, delay) = drive(&[0b001, 0b011, 0b011, 0b100]);
    assert_eq!(hw.calls.len(), 8);
    for pair in hw.calls.chunks(2) {
        assert!(matches!(pair, [PortCall::Write(_), PortCall::Read(_)]));
    }
    assert_eq!(delay.waits_ms.len(), 4);
}

#[test]
fn sample_is_taken_once_per_step() {
    let (_, hw, _) = drive(&[0b111; 10]);
    let reads = hw
        .calls
        .iter()
        .filter(|c| matches!(c, PortCall::Read(_)))
        .count();
    assert_eq!(reads, 10);
}

#[test]
fn dwell_delay_is_units_times_unit_ms() {
    let mut rows = INTERSECTION.to_rows();
    rows[StateId::AllRed.index()].dwell = Dwell(3);
    let table: &'static TransitionTable = Box::leak(Box::new(TransitionTable::new(rows)));
    assert_eq!(table.check(), Ok(()));

    let mut ctl = Controller::with_table(table, &config(250));
    let mut hw = MockIntersection::new(&[0b000, 0b000, 0b001]);
    let mut delay = RecordingDelay::default();
    for _ in 0..3 {
        ctl.step(&mut hw, &mut delay).unwrap();
    }
    // Startup (1 unit), AllRed (3 units) twice.
    assert_eq!(delay.waits_ms, vec![250, 750, 750]);
    assert_eq!(ctl.current_state(), StateId::WestGo);
}

#[test]
fn dwell_is_never_cut_short_by_input() {
    let (_, _, delay) = drive(&[0b100, 0b111, 0b000, 0b010]);
    assert!(delay.waits_ms.iter().all(|&ms| ms == 100));
}

// ── Fault propagation ─────────────────────────────────────────

#[test]
fn signal_fault_stops_run_unchanged() {
    let ctl = Controller::new(&config(10));
    let mut hw = MockIntersection::constant(0b000, 10);
    hw.fail_write_at = Some(3);
    let mut delay = RecordingDelay::default();

    let err = ctl.run(&mut hw, &mut delay).unwrap_err();
    assert_eq!(err, Error::Signal(SignalError::GpioWriteFailed));
    assert_eq!(hw.writes().len(), 3);
    assert_eq!(delay.waits_ms.len(), 3);
}

#[test]
fn sensor_fault_stops_run_unchanged() {
    let ctl = Controller::new(&config(10));
    let mut hw = MockIntersection::new(&[0b001, 0b001]);
    let mut delay = RecordingDelay::default();

    let err = ctl.run(&mut hw, &mut delay).unwrap_err();
    assert_eq!(err, Error::Sensor(SensorError::Exhausted));
    assert_eq!(err.to_string(), "sensor: input script exhausted");
}

#[test]
fn fault_leaves_state_untouched() {
    let mut ctl = Controller::new(&config(10));
    let mut hw = MockIntersection::new(&[0b010]);
    let mut delay = RecordingDelay::default();

    ctl.step(&mut hw, &mut delay).unwrap();
    assert_eq!(ctl.current_state(), StateId::SouthGo);
    assert!(ctl.step(&mut hw, &mut delay).is_err());
    assert_eq!(ctl.current_state(), StateId::SouthGo);
    assert_eq!(ctl.steps(), 1);
}

// ── Fairness ──────────────────────────────────────────────────

#[test]
fn constant_full_demand_serves_everyone() {
    let (_, hw, _) = drive(&[0b111; 40]);
    let writes = hw.writes();

    // Every approach gets its go aspect within any window of 12 steps.
    for window in writes.windows(12).skip(1) {
        assert!(window.iter().any(|h| h.walk == WalkAspect::Green));
        assert!(window.iter().any(|h| h.south == StreetAspect::Green));
        assert!(window.iter().any(|h| h.west == StreetAspect::Green));
    }
}

#[test]
fn sensors_bits_match_call_log() {
    let (_, hw, _) = drive(&[0b101]);
    assert_eq!(
        hw.calls[1],
        PortCall::Read(Sensors::PEDESTRIAN | Sensors::WEST_CAR)
    );
}
