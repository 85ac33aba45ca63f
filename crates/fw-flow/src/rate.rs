//! Rate throttle: forward at most once per period.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use fw_core::{Options, State};

use crate::taylor::Taylor;
use crate::wheel::{Hub, Wheel};

/// Throttle configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateConfig {
    /// Minimum wall-clock gap between forwarded snapshots.
    pub period: Duration,
}

/// Forwards the first input, then suppresses inputs arriving within
/// `period` of the last forwarded one. Useful in front of a chatty
/// sensor when downstream only needs occasional updates.
#[derive(Debug)]
pub struct Rate {
    hub: Hub,
    config: RateConfig,
    last: Option<Instant>,
}

impl Rate {
    pub fn new(period: Duration) -> Self {
        Self {
            hub: Hub::default(),
            config: RateConfig { period },
            last: None,
        }
    }

    pub fn config(&self) -> RateConfig {
        self.config
    }
}

impl Wheel for Rate {
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

impl Taylor for Rate {
    fn process(&mut self, state: State, _value: Option<f64>) -> bool {
        let now = Instant::now();
        if let Some(last) = self.last {
            if now.duration_since(last) < self.config.period {
                return false;
            }
        }
        self.last = Some(now);
        self.hub.state = state;
        true
    }
}
