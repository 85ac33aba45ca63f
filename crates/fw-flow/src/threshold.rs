//! Threshold gate: forward only when the value clears a bound.

use serde::{Deserialize, Serialize};

use fw_core::{Options, State, ensure_finite};

use crate::error::FlowResult;
use crate::taylor::Taylor;
use crate::wheel::{Hub, Wheel};

/// Threshold gate configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    /// Bound the primary value is compared against.
    pub threshold: f64,
    /// Pass values below the bound instead of at-or-above it.
    pub invert: bool,
}

/// Forwards an input unchanged when its value is at or above the bound
/// (below, when inverted); suppresses otherwise. Unknown and non-finite
/// values never pass.
#[derive(Debug)]
pub struct Threshold {
    hub: Hub,
    config: ThresholdConfig,
}

impl Threshold {
    pub fn new(threshold: f64) -> FlowResult<Self> {
        Self::with_config(ThresholdConfig {
            threshold,
            invert: false,
        })
    }

    pub fn with_config(config: ThresholdConfig) -> FlowResult<Self> {
        ensure_finite(config.threshold, "threshold")?;
        Ok(Self {
            hub: Hub::default(),
            config,
        })
    }

    pub fn config(&self) -> ThresholdConfig {
        self.config
    }
}

impl Wheel for Threshold {
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

impl Taylor for Threshold {
    fn process(&mut self, state: State, value: Option<f64>) -> bool {
        let Some(v) = value else {
            return false;
        };
        if !v.is_finite() {
            return false;
        }
        let above = v >= self.config.threshold;
        if above != self.config.invert {
            self.hub.state = state;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FlowError;

    #[test]
    fn non_finite_bound_is_rejected() {
        let err = Threshold::new(f64::NAN).unwrap_err();
        assert!(matches!(err, FlowError::NonFinite { .. }));
    }

    #[test]
    fn passes_at_or_above_bound() {
        let mut gate = Threshold::new(0.5).unwrap();
        assert!(!gate.process(State::of(0.4), Some(0.4)));
        assert!(gate.process(State::of(0.5), Some(0.5)));
        assert!(gate.process(State::of(0.9), Some(0.9)));
        assert_eq!(gate.value(), Some(0.9));
    }

    #[test]
    fn inverted_gate_passes_below_bound() {
        let mut gate = Threshold::with_config(ThresholdConfig {
            threshold: 0.5,
            invert: true,
        })
        .unwrap();
        assert!(gate.config().invert);
        assert!(gate.process(State::of(0.2), Some(0.2)));
        assert!(!gate.process(State::of(0.7), Some(0.7)));
    }

    #[test]
    fn unknown_value_never_passes() {
        let mut gate = Threshold::new(0.0).unwrap();
        assert!(!gate.process(State::unknown(), None));
    }

    #[test]
    fn passing_snapshot_keeps_auxiliary_fields() {
        let mut gate = Threshold::new(1.0).unwrap();
        let input = State::of(2.0).with_field("reading", 819.0);
        assert!(gate.process(input.clone(), Some(2.0)));
        assert_eq!(gate.state(), &input);
    }
}
