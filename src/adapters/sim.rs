//! Host simulator adapter.
//!
//! Replays a scripted sequence of sensor vectors and records every head
//! command, so the controller can be exercised on a workstation.  A
//! scenario is a JSON document:
//!
//! ```json
//! { "config": { "dwell_unit_ms": 50 }, "inputs": [0, 0, 4, 2, 7] }
//! ```
//!
//! `config` is optional and falls back to [`SystemConfig::default`].  Each
//! entry of `inputs` is one sample in `0b<ped><south><west>` order; bits
//! above the third are ignored.  Once the script runs out, the next read
//! fails with [`SensorError::Exhausted`], which ends the run.

use std::collections::VecDeque;
use std::path::Path;

use anyhow::Context;
use log::info;
use serde::{Deserialize, Serialize};

use crate::app::ports::{SensorPort, SignalPort};
use crate::config::SystemConfig;
use crate::error::{SensorError, SignalError};
use crate::fsm::aspects::{Heads, StreetAspect, WalkAspect};
use crate::fsm::inputs::Sensors;

/// A scripted simulator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub config: SystemConfig,
    pub inputs: Vec<u8>,
}

impl Scenario {
    /// Read a scenario from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading scenario {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing scenario {}", path.display()))
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Built-in demo: idle, west traffic, south arrives, a pedestrian
    /// pushes the button, then every sensor stays active for a while.
    pub fn demo() -> Self {
        Self {
            config: SystemConfig::default(),
            inputs: vec![
                0b000, 0b000, // settle
                0b001, 0b001, // west car
                0b011, 0b011, 0b010, // south arrives
                0b000, 0b000, // clear
                0b100, 0b100, 0b000, 0b000, // pedestrian
                0b111, 0b111, 0b111, 0b111, 0b111, 0b111, 0b111, 0b111, 0b111, 0b111, // rush
                0b000, 0b000,
            ],
        }
    }
}

/// Scripted sensors plus a record of commanded heads.
pub struct SimHardware {
    inputs: VecDeque<Sensors>,
    reads: usize,
    history: Vec<Heads>,
}

impl SimHardware {
    pub fn new(inputs: &[u8]) -> Self {
        Self {
            inputs: inputs.iter().copied().map(Sensors::from_raw).collect(),
            reads: 0,
            history: Vec::new(),
        }
    }

    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::new(&scenario.inputs)
    }

    /// Every head command, oldest first.
    pub fn history(&self) -> &[Heads] {
        &self.history
    }

    /// Samples served so far.
    pub fn reads(&self) -> usize {
        self.reads
    }

    /// Samples left in the script.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl SensorPort for SimHardware {
    fn read_inputs(&mut self) -> Result<Sensors, SensorError> {
        let sample = self.inputs.pop_front().ok_or(SensorError::Exhausted)?;
        self.reads += 1;
        Ok(sample)
    }
}

impl SignalPort for SimHardware {
    fn write_heads(
        &mut self,
        west: StreetAspect,
        south: StreetAspect,
        walk: WalkAspect,
    ) -> Result<(), SignalError> {
        info!("heads: west={:?} south={:?} walk={:?}", west, south, walk);
        self.history.push(Heads::new(west, south, walk));
        Ok(())
    }
}
