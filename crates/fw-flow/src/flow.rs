//! Pull-based lazy sequences of state snapshots.
//!
//! Pipelines advance only when the outermost stage is pulled: nothing runs
//! in the background, and each pull moves exactly one element through each
//! stage. A pull can produce a snapshot, produce nothing this turn
//! (suppressed), or report that the source is finished (exhausted). The
//! latter two stay distinct so a driver can tell a quiet filter from a
//! drained source.

use fw_core::State;

use crate::error::FlowResult;
use crate::taylor::{Taylor, Through};

/// Outcome of pulling a flow once.
#[derive(Debug, Clone, PartialEq)]
pub enum Pull {
    /// A state snapshot was produced.
    Ready(State),
    /// The element was consumed without being forwarded (filter cold
    /// start, gate closed, throttled). Later pulls may still produce.
    Suppressed,
    /// The source is finished; no further pull will produce a snapshot.
    Exhausted,
}

impl Pull {
    /// The produced snapshot, if any.
    pub fn into_state(self) -> Option<State> {
        match self {
            Pull::Ready(state) => Some(state),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Pull::Ready(_))
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Pull::Exhausted)
    }
}

/// A pull-based lazy sequence of state snapshots.
///
/// Implementors hand out an owned snapshot per pull; no reference into a
/// unit's live state crosses this seam, so a caller can hold earlier
/// results without seeing them change retroactively.
pub trait Flow {
    /// Advance the sequence by one element.
    fn pull(&mut self) -> FlowResult<Pull>;

    /// Route this flow through a filter/transform stage.
    fn pipe<T>(self, stage: T) -> Through<Self, T>
    where
        Self: Sized,
        T: Taylor,
    {
        Through::new(self, stage)
    }

    /// Truncate to at most `n` produced snapshots.
    ///
    /// Suppressed pulls do not count against the limit.
    fn limit(self, n: usize) -> Limit<Self>
    where
        Self: Sized,
    {
        Limit {
            inner: self,
            remaining: n,
        }
    }

    /// Bridge into a standard iterator.
    ///
    /// Suppressed pulls are skipped internally, so loops see only produced
    /// snapshots; on an endless all-suppressing flow `next` will not
    /// return. An error is yielded once and ends the iteration.
    fn iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter {
            inner: self,
            done: false,
        }
    }
}

impl<F: Flow + ?Sized> Flow for &mut F {
    fn pull(&mut self) -> FlowResult<Pull> {
        (**self).pull()
    }
}

/// Flow adapter that ends the sequence after `n` produced snapshots.
#[derive(Debug)]
pub struct Limit<F> {
    inner: F,
    remaining: usize,
}

impl<F: Flow> Flow for Limit<F> {
    fn pull(&mut self) -> FlowResult<Pull> {
        if self.remaining == 0 {
            return Ok(Pull::Exhausted);
        }
        let pulled = self.inner.pull()?;
        if pulled.is_ready() {
            self.remaining -= 1;
        }
        Ok(pulled)
    }
}

/// Iterator bridge over a flow.
#[derive(Debug)]
pub struct Iter<F> {
    inner: F,
    done: bool,
}

impl<F: Flow> Iterator for Iter<F> {
    type Item = FlowResult<State>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            match self.inner.pull() {
                Ok(Pull::Ready(state)) => return Some(Ok(state)),
                Ok(Pull::Suppressed) => continue,
                Ok(Pull::Exhausted) => {
                    self.done = true;
                    return None;
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Replay {
        states: Vec<State>,
        at: usize,
    }

    impl Replay {
        fn of(values: &[f64]) -> Self {
            Self {
                states: values.iter().copied().map(State::of).collect(),
                at: 0,
            }
        }
    }

    impl Flow for Replay {
        fn pull(&mut self) -> FlowResult<Pull> {
            match self.states.get(self.at) {
                Some(state) => {
                    self.at += 1;
                    Ok(Pull::Ready(state.clone()))
                }
                None => Ok(Pull::Exhausted),
            }
        }
    }

    #[test]
    fn limit_ends_after_n_snapshots() {
        let mut flow = Replay::of(&[1.0, 2.0, 3.0, 4.0]).limit(2);
        assert_eq!(flow.pull().unwrap(), Pull::Ready(State::of(1.0)));
        assert_eq!(flow.pull().unwrap(), Pull::Ready(State::of(2.0)));
        assert!(flow.pull().unwrap().is_exhausted());
        assert!(flow.pull().unwrap().is_exhausted());
    }

    #[test]
    fn iter_stops_on_exhaustion() {
        let values: Vec<f64> = Replay::of(&[5.0, 6.0])
            .iter()
            .map(|s| s.unwrap().value.unwrap())
            .collect();
        assert_eq!(values, vec![5.0, 6.0]);
    }

    fn first_value<F: Flow>(mut flow: F) -> Option<f64> {
        match flow.pull() {
            Ok(Pull::Ready(state)) => state.value,
            _ => None,
        }
    }

    #[test]
    fn pull_through_mut_reference() {
        let mut source = Replay::of(&[7.0, 8.0]);
        assert_eq!(first_value(&mut source), Some(7.0));
        assert_eq!(first_value(&mut source), Some(8.0));
    }
}
