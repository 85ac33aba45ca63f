//! Boolean level device: logic-level sensor and on/off actuator in one.

use serde::{Deserialize, Serialize};
use tracing::warn;

use fw_core::{Options, State};
use fw_flow::{Hub, Wheel};

use crate::device::{Device, DeviceMeta};
use crate::error::DeviceResult;
use crate::hal::{InputPin, OutputPin, Pin};

/// Level device configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Electrical low means logical on (active-low wiring).
    pub invert: bool,
}

/// On/off device on a single digital pin.
///
/// Polling maps the electrical level to a logical 0/1 value; committing
/// drives the pin from the current logical value. `invert` flips the
/// electrical sense in both directions, so active-low wiring stays an
/// electrical detail and the pipeline only ever sees logical levels.
#[derive(Debug)]
pub struct Level<P> {
    hub: Hub,
    config: LevelConfig,
    pin: P,
}

impl<P> Level<P>
where
    P: InputPin + OutputPin,
{
    pub fn new(pin: P) -> Self {
        Self::with_config(pin, LevelConfig::default())
    }

    pub fn with_config(pin: P, config: LevelConfig) -> Self {
        Self {
            hub: Hub::default(),
            config,
            pin,
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.hub.options = options;
        self
    }

    pub fn config(&self) -> LevelConfig {
        self.config
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P> Wheel for Level<P>
where
    P: InputPin + OutputPin,
{
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

impl<P> Device for Level<P>
where
    P: InputPin + OutputPin,
{
    fn meta(&self) -> DeviceMeta {
        DeviceMeta {
            unit_name: "logic level",
            unit: "binary",
            symbol: "!!",
        }
    }

    fn poll(&mut self) -> DeviceResult<State> {
        let raw = self.pin.read_raw()?;
        let on = (raw != 0) != self.config.invert;
        Ok(State::of(if on { 1.0 } else { 0.0 }))
    }

    fn commit(&mut self, _fields: &State) -> DeviceResult<()> {
        let Some(value) = self.value().filter(|v| v.is_finite()) else {
            warn!(pin = %self.pin.id(), "skipping commit, level not usable");
            return Ok(());
        };
        let on = value != 0.0;
        let electrical = on != self.config.invert;
        self.pin.write_raw(u16::from(electrical))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::MemoryPin;

    #[test]
    fn poll_maps_electrical_to_logical() {
        let mut level = Level::new(MemoryPin::new(1).with_raw(1));
        assert_eq!(level.poll().unwrap().value, Some(1.0));
        let mut level = Level::new(MemoryPin::new(1));
        assert_eq!(level.poll().unwrap().value, Some(0.0));
    }

    #[test]
    fn inverted_poll_flips_sense() {
        let mut level = Level::with_config(
            MemoryPin::new(1).with_raw(0),
            LevelConfig { invert: true },
        );
        assert!(level.config().invert);
        assert_eq!(level.poll().unwrap().value, Some(1.0));
    }

    #[test]
    fn commit_drives_pin_from_state() {
        let mut level = Level::new(MemoryPin::new(2));
        level.apply(&State::of(1.0), true).unwrap();
        assert_eq!(level.pin().raw(), 1);
        level.apply(&State::of(0.0), true).unwrap();
        assert_eq!(level.pin().raw(), 0);
        assert_eq!(level.pin().writes(), 2);
    }

    #[test]
    fn inverted_commit_drives_opposite_level() {
        let mut level =
            Level::with_config(MemoryPin::new(2), LevelConfig { invert: true });
        level.apply(&State::of(1.0), true).unwrap();
        assert_eq!(level.pin().raw(), 0);
    }

    #[test]
    fn unknown_level_skips_hardware() {
        let mut level = Level::new(MemoryPin::new(3));
        level.commit(&State::unknown()).unwrap();
        assert_eq!(level.pin().writes(), 0);
    }

    #[test]
    fn read_round_trips_through_commit() {
        let mut level = Level::new(MemoryPin::new(4).with_raw(1));
        let state = level.read().unwrap();
        assert_eq!(state.value, Some(1.0));
        assert_eq!(level.value(), Some(1.0));
        // Commit echoed the logical level back out.
        assert_eq!(level.pin().raw(), 1);
    }
}
