//! Bounded moving average with a strict cold start.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use fw_core::{Options, State, mean};

use crate::error::{FlowError, FlowResult};
use crate::taylor::Taylor;
use crate::wheel::{Hub, Wheel};

/// Moving-average window configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AverageConfig {
    /// Number of most recent values averaged. Must be at least 1.
    pub window: usize,
}

impl Default for AverageConfig {
    fn default() -> Self {
        Self { window: 10 }
    }
}

/// Averages the `window` most recent upstream values.
///
/// Strict cold start: with window `n`, the first `n - 1` inputs are
/// consumed without producing output. Once the window is full every
/// input forwards the mean of exactly the last `n` values. Unknown or
/// non-finite inputs never enter the window; they are suppressed.
#[derive(Debug)]
pub struct Average {
    hub: Hub,
    config: AverageConfig,
    history: VecDeque<f64>,
}

impl Average {
    pub fn new(window: usize) -> FlowResult<Self> {
        Self::with_config(AverageConfig { window })
    }

    pub fn with_config(config: AverageConfig) -> FlowResult<Self> {
        if config.window == 0 {
            return Err(FlowError::InvalidArg {
                what: "average window must be at least 1",
            });
        }
        Ok(Self {
            hub: Hub::default(),
            config,
            history: VecDeque::with_capacity(config.window),
        })
    }

    pub fn config(&self) -> AverageConfig {
        self.config
    }

    /// Values currently held, most recent first.
    pub fn history(&self) -> impl Iterator<Item = f64> + '_ {
        self.history.iter().copied()
    }
}

impl Wheel for Average {
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

impl Taylor for Average {
    fn process(&mut self, _state: State, value: Option<f64>) -> bool {
        let Some(v) = value else {
            return false;
        };
        if !v.is_finite() {
            return false;
        }
        self.history.push_front(v);
        self.history.truncate(self.config.window);
        if self.history.len() < self.config.window {
            return false;
        }
        match mean(self.history.iter().copied()) {
            Some(m) => {
                self.hub.state = State::of(m);
                true
            }
            None => false,
        }
    }
}
