//! Core trait for hardware-backed units.

use serde::Serialize;

use fw_core::State;
use fw_flow::{Flow, FlowResult, Pull, Wheel};

use crate::error::DeviceResult;

/// Static descriptive metadata for a device kind.
///
/// Purely informational: drivers and front ends use it for labeling, the
/// core never branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceMeta {
    /// Name of the measured or driven quantity.
    pub unit_name: &'static str,
    /// Unit of measure, spelled out.
    pub unit: &'static str,
    /// Short symbol for display.
    pub symbol: &'static str,
}

/// Trait for units bound to a physical input/output.
///
/// A device owns its pin binding exclusively; no two devices may share
/// one. Sensors implement `poll` and inherit the no-op `commit`;
/// actuators additionally override `commit` to push state to hardware.
pub trait Device: Wheel {
    /// Descriptive metadata for this device kind.
    fn meta(&self) -> DeviceMeta;

    /// Read the physical input and return the measured fields.
    ///
    /// Does not touch the unit's state; callers that want the state
    /// updated go through `read`.
    ///
    /// # Returns
    /// Fields measured this instant (primary value plus auxiliaries such
    /// as the raw count).
    fn poll(&mut self) -> DeviceResult<State>;

    /// Push fields to hardware so they take physical effect.
    ///
    /// Called after the fields have been merged into the unit's state, so
    /// implementations read the up-to-date `state()`. Default is a no-op,
    /// appropriate for pure sensors.
    fn commit(&mut self, _fields: &State) -> DeviceResult<()> {
        Ok(())
    }

    /// Merge `fields` into the unit's state, then optionally commit.
    ///
    /// The merge happens before the commit call, so commit handlers see
    /// the already-updated state.
    fn apply(&mut self, fields: &State, commit: bool) -> DeviceResult<()> {
        self.state_mut().merge(fields);
        if commit {
            self.commit(fields)?;
        }
        Ok(())
    }

    /// Poll, fold the measurement into the unit's state, and return the
    /// updated snapshot. The standard "read and react" entry point.
    fn read(&mut self) -> DeviceResult<State> {
        let fields = self.poll()?;
        self.apply(&fields, true)?;
        Ok(self.state().clone())
    }

    /// Lazy sequence of readings from this device.
    ///
    /// Each pull performs `read`, or `poll` only when `dry` is true (no
    /// state mutation, no commit). With `limit` the sequence produces
    /// exactly that many snapshots then exhausts; without it the sequence
    /// never ends on its own.
    fn states(&mut self, limit: Option<usize>, dry: bool) -> Readings<'_, Self>
    where
        Self: Sized,
    {
        Readings {
            device: self,
            remaining: limit,
            dry,
        }
    }

    /// Sink an upstream flow into this device.
    ///
    /// Each produced upstream snapshot is applied (with `commit` deciding
    /// whether it takes physical effect) and the device's updated state is
    /// yielded, so the device remains composable as a producer for
    /// further stages.
    fn iterate<S>(&mut self, source: S, commit: bool) -> Drive<'_, Self, S>
    where
        Self: Sized,
        S: Flow,
    {
        Drive {
            device: self,
            source,
            commit,
        }
    }
}

/// Flow of readings pulled from a device.
#[derive(Debug)]
pub struct Readings<'a, D> {
    device: &'a mut D,
    remaining: Option<usize>,
    dry: bool,
}

impl<D: Device> Flow for Readings<'_, D> {
    fn pull(&mut self) -> FlowResult<Pull> {
        if self.remaining == Some(0) {
            return Ok(Pull::Exhausted);
        }
        let state = if self.dry {
            self.device.poll()?
        } else {
            self.device.read()?
        };
        if let Some(n) = self.remaining.as_mut() {
            *n -= 1;
        }
        Ok(Pull::Ready(state))
    }
}

/// Flow that applies upstream snapshots to a device.
#[derive(Debug)]
pub struct Drive<'a, D, S> {
    device: &'a mut D,
    source: S,
    commit: bool,
}

impl<D: Device, S: Flow> Flow for Drive<'_, D, S> {
    fn pull(&mut self) -> FlowResult<Pull> {
        match self.source.pull()? {
            Pull::Ready(state) => {
                self.device.apply(&state, self.commit)?;
                Ok(Pull::Ready(self.device.state().clone()))
            }
            Pull::Suppressed => Ok(Pull::Suppressed),
            Pull::Exhausted => Ok(Pull::Exhausted),
        }
    }
}
