//! Scripted device for exercising pipelines without hardware.

use serde::{Deserialize, Serialize};

use fw_core::{Options, State};
use fw_flow::{Hub, Wheel};

use crate::device::{Device, DeviceMeta};
use crate::error::{DeviceError, DeviceResult};

/// Mock device configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MockConfig {
    /// Values replayed by `poll`, cyclically. Must not be empty.
    pub cycle: Vec<f64>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            cycle: vec![0.0, 1.0],
        }
    }
}

/// Device whose pin binding is replaced by a fixed repeating sequence.
///
/// `poll` walks the configured cycle forever; `commit` records the
/// unit's state instead of touching hardware, so tests can observe
/// exactly what an actuator would have been told, and in what order.
#[derive(Debug)]
pub struct Mock {
    hub: Hub,
    config: MockConfig,
    at: usize,
    meta: DeviceMeta,
    committed: Vec<State>,
}

impl Mock {
    pub fn new(cycle: Vec<f64>) -> DeviceResult<Self> {
        Self::with_config(MockConfig { cycle })
    }

    pub fn with_config(config: MockConfig) -> DeviceResult<Self> {
        if config.cycle.is_empty() {
            return Err(DeviceError::InvalidArg {
                what: "mock cycle must not be empty",
            });
        }
        Ok(Self {
            hub: Hub::default(),
            config,
            at: 0,
            meta: DeviceMeta {
                unit_name: "mock",
                unit: "unknown",
                symbol: "?",
            },
            committed: Vec::new(),
        })
    }

    /// Pose as another device kind.
    pub fn with_meta(mut self, meta: DeviceMeta) -> Self {
        self.meta = meta;
        self
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.hub.options = options;
        self
    }

    pub fn config(&self) -> &MockConfig {
        &self.config
    }

    /// States observed by `commit`, in call order.
    pub fn committed(&self) -> &[State] {
        &self.committed
    }
}

impl Wheel for Mock {
    fn state(&self) -> &State {
        &self.hub.state
    }

    fn state_mut(&mut self) -> &mut State {
        &mut self.hub.state
    }

    fn options(&self) -> &Options {
        &self.hub.options
    }
}

impl Device for Mock {
    fn meta(&self) -> DeviceMeta {
        self.meta
    }

    fn poll(&mut self) -> DeviceResult<State> {
        let value = self.config.cycle[self.at];
        self.at = (self.at + 1) % self.config.cycle.len();
        Ok(State::of(value))
    }

    fn commit(&mut self, _fields: &State) -> DeviceResult<()> {
        self.committed.push(self.state().clone());
        Ok(())
    }
}
