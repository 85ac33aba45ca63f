//! Stage applying a caller-supplied function to each input.

use std::fmt;

use fw_core::{Options, State};

use crate::taylor::Taylor;
use crate::wheel::{Hub, Wheel};

/// Custom map-or-suppress stage.
///
/// The function receives each upstream snapshot and its primary value.
/// Returning `Some(state)` makes that state the stage's new state and
/// forwards it; returning `None` suppresses the element.
pub struct Function<F> {
    hub: Hub,
    f: F,
}

impl<F> Function<F>
where
    F: FnMut(&State, Option<f64>) -> Option<State>,
{
    pub fn new(f: F) -> Self {
        Self {
            hub: Hub::default(),
            f,
        }
    }
}

fn forward(state: &State, _value: Option<f64>) -> Option<State> {
    Some(state.clone())
}

/// A stage that forwards every input unchanged.
pub fn identity() -> Function<fn(&State, Option<f64>) -> Option<State>> {
    Function::new(forward)
}

impl<F> fmt::Debug for Function<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("hub", &self.hub)
            .finish_non_exhaustive()
    }
}

impl<F> Wheel for Function<F> {
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

impl<F> Taylor for Function<F>
where
    F: FnMut(&State, Option<f64>) -> Option<State>,
{
    fn process(&mut self, state: State, value: Option<f64>) -> bool {
        match (self.f)(&state, value) {
            Some(next) => {
                self.hub.state = next;
                true
            }
            None => false,
        }
    }
}
