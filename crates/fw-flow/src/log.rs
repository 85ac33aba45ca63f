//! Passthrough stage that logs each snapshot as it flows by.

use fw_core::{Options, State};
use tracing::{Level, debug, error, info, trace, warn};

use crate::taylor::Taylor;
use crate::wheel::{Hub, Wheel};

/// Forwards every input unchanged, logging it on the way through.
#[derive(Debug)]
pub struct Log {
    hub: Hub,
    level: Level,
}

impl Log {
    pub fn new() -> Self {
        Self {
            hub: Hub::default(),
            level: Level::INFO,
        }
    }

    /// Log at a different level.
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

impl Default for Log {
    fn default() -> Self {
        Self::new()
    }
}

impl Wheel for Log {
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

impl Taylor for Log {
    fn process(&mut self, state: State, _value: Option<f64>) -> bool {
        // event! requires a const level, hence the arms.
        if self.level == Level::ERROR {
            error!(%state, "state observed");
        } else if self.level == Level::WARN {
            warn!(%state, "state observed");
        } else if self.level == Level::INFO {
            info!(%state, "state observed");
        } else if self.level == Level::DEBUG {
            debug!(%state, "state observed");
        } else {
            trace!(%state, "state observed");
        }
        self.hub.state = state;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forwards_unchanged() {
        let mut log = Log::new();
        let input = State::of(2.5).with_field("reading", 100.0);
        assert!(log.process(input.clone(), Some(2.5)));
        assert_eq!(log.state(), &input);
    }

    #[test]
    fn forwards_unknown_too() {
        let mut log = Log::new().with_level(Level::DEBUG);
        assert!(log.process(State::unknown(), None));
        assert_eq!(log.value(), None);
    }
}
