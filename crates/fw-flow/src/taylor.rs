//! Filter/transform stages and the adapter that applies them to a flow.

use fw_core::State;

use crate::error::FlowResult;
use crate::flow::{Flow, Pull};
use crate::wheel::Wheel;

/// A filter/transform stage.
///
/// `process` digests one upstream snapshot together with its extracted
/// primary value, updates the stage's own state, and decides whether the
/// stage forwards this turn. Returning `false` suppresses the element;
/// the pipeline stays alive and the next pull brings the next input.
pub trait Taylor: Wheel {
    /// Digest one upstream snapshot; return whether to forward.
    fn process(&mut self, state: State, value: Option<f64>) -> bool;
}

/// Flow adapter that routes an upstream flow through a stage.
///
/// One upstream pull per downstream pull: when the stage declines to
/// forward, the pull reports `Suppressed` instead of silently pulling
/// again, so the external driver stays in control of pacing.
#[derive(Debug)]
pub struct Through<S, T> {
    source: S,
    stage: T,
}

impl<S, T> Through<S, T> {
    pub fn new(source: S, stage: T) -> Self {
        Self { source, stage }
    }

    /// The wrapped stage, e.g. to inspect its state after a run.
    pub fn stage(&self) -> &T {
        &self.stage
    }

    /// Unwrap into source and stage.
    pub fn into_parts(self) -> (S, T) {
        (self.source, self.stage)
    }
}

impl<S, T> Flow for Through<S, T>
where
    S: Flow,
    T: Taylor,
{
    fn pull(&mut self) -> FlowResult<Pull> {
        match self.source.pull()? {
            Pull::Ready(state) => {
                let value = state.value;
                if self.stage.process(state, value) {
                    Ok(Pull::Ready(self.stage.state().clone()))
                } else {
                    Ok(Pull::Suppressed)
                }
            }
            Pull::Suppressed => Ok(Pull::Suppressed),
            Pull::Exhausted => Ok(Pull::Exhausted),
        }
    }
}

#[cfg(test)]
mod tests {
    use fw_core::Options;

    use super::*;
    use crate::wheel::Hub;

    struct Repeat {
        state: State,
    }

    impl Flow for Repeat {
        fn pull(&mut self) -> FlowResult<Pull> {
            Ok(Pull::Ready(self.state.clone()))
        }
    }

    /// Forwards every other input.
    struct Decimate {
        hub: Hub,
        seen: usize,
    }

    impl Wheel for Decimate {
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

    impl Taylor for Decimate {
        fn process(&mut self, state: State, _value: Option<f64>) -> bool {
            self.seen += 1;
            if self.seen % 2 == 0 {
                self.hub.state = state;
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn suppression_surfaces_per_pull() {
        let source = Repeat {
            state: State::of(4.0),
        };
        let stage = Decimate {
            hub: Hub::default(),
            seen: 0,
        };
        let mut flow = source.pipe(stage);
        assert_eq!(flow.pull().unwrap(), Pull::Suppressed);
        assert_eq!(flow.pull().unwrap(), Pull::Ready(State::of(4.0)));
        assert_eq!(flow.pull().unwrap(), Pull::Suppressed);
        assert_eq!(flow.pull().unwrap(), Pull::Ready(State::of(4.0)));
    }

    #[test]
    fn forwarded_snapshot_is_the_stage_state() {
        let source = Repeat {
            state: State::of(1.0).with_field("reading", 512.0),
        };
        let stage = Decimate {
            hub: Hub::default(),
            seen: 1,
        };
        let mut flow = source.pipe(stage);
        let state = flow.pull().unwrap().into_state().unwrap();
        assert_eq!(state.field("reading"), Some(512.0));
        assert_eq!(flow.stage().value(), Some(1.0));
    }
}
