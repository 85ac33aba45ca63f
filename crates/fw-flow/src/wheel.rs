//! Base unit contract: configuration options plus a current state.

use fw_core::{Options, State};

use crate::error::FlowResult;
use crate::flow::{Flow, Pull};

/// Storage every unit embeds: bound options and the current state.
#[derive(Debug, Clone, Default)]
pub struct Hub {
    pub options: Options,
    pub state: State,
}

impl Hub {
    /// Fresh storage with the given options and an unknown state.
    pub fn new(options: Options) -> Self {
        Self {
            options,
            state: State::unknown(),
        }
    }
}

/// Base contract shared by every pipeline unit.
///
/// A unit owns configuration fixed at construction and a current state
/// snapshot updated only by its own processing. Specializations layer the
/// behavior on top: filter stages add `process`, devices add
/// `poll`/`commit`.
pub trait Wheel {
    /// Current state snapshot.
    fn state(&self) -> &State;

    /// Mutable state access for the unit's own processing.
    fn state_mut(&mut self) -> &mut State;

    /// Configuration bound at construction.
    fn options(&self) -> &Options;

    /// Shorthand for the primary value of the current state.
    fn value(&self) -> Option<f64> {
        self.state().value
    }

    /// Unbounded flow republishing the current state on every pull.
    fn republish(&self) -> Republish<'_, Self>
    where
        Self: Sized,
    {
        Republish { unit: self }
    }
}

/// Infinite flow that snapshots the owning unit's current state per pull.
#[derive(Debug)]
pub struct Republish<'a, W> {
    unit: &'a W,
}

impl<W: Wheel> Flow for Republish<'_, W> {
    fn pull(&mut self) -> FlowResult<Pull> {
        Ok(Pull::Ready(self.unit.state().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plain {
        hub: Hub,
    }

    impl Wheel for Plain {
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

    #[test]
    fn value_mirrors_state() {
        let mut unit = Plain {
            hub: Hub::default(),
        };
        assert_eq!(unit.value(), None);
        unit.state_mut().value = Some(3.5);
        assert_eq!(unit.value(), Some(3.5));
    }

    #[test]
    fn republish_repeats_current_state() {
        let mut unit = Plain {
            hub: Hub::default(),
        };
        unit.state_mut().value = Some(1.0);
        let mut flow = unit.republish();
        for _ in 0..3 {
            assert_eq!(flow.pull().unwrap(), Pull::Ready(State::of(1.0)));
        }
    }

    #[test]
    fn republished_snapshots_are_owned() {
        let mut unit = Plain {
            hub: Hub::new(Options::new()),
        };
        unit.state_mut().value = Some(2.0);
        let snapshot = unit.republish().pull().unwrap().into_state().unwrap();
        unit.state_mut().value = Some(9.0);
        assert_eq!(snapshot.value, Some(2.0));
    }
}
