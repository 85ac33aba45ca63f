//! Capacitive touch sensor.

use fw_core::{Options, State};
use fw_flow::{Hub, Wheel};

use crate::device::{Device, DeviceMeta};
use crate::error::DeviceResult;
use crate::hal::InputPin;

/// 10-bit touch controller full scale.
const FULL_SCALE: f64 = 1023.0;

/// Touch sensor on a single input pin.
///
/// The raw count is normalized to a 0..1 level; the count itself rides
/// along in the `reading` field for calibration work.
#[derive(Debug)]
pub struct Touch<P> {
    hub: Hub,
    pin: P,
}

impl<P> Touch<P>
where
    P: InputPin,
{
    pub fn new(pin: P) -> Self {
        Self {
            hub: Hub::default(),
            pin,
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.hub.options = options;
        self
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P> Wheel for Touch<P>
where
    P: InputPin,
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

impl<P> Device for Touch<P>
where
    P: InputPin,
{
    fn meta(&self) -> DeviceMeta {
        DeviceMeta {
            unit_name: "level",
            unit: "",
            symbol: "",
        }
    }

    fn poll(&mut self) -> DeviceResult<State> {
        let raw = f64::from(self.pin.read_raw()?);
        Ok(State::of(raw / FULL_SCALE).with_field("reading", raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::MemoryPin;

    #[test]
    fn poll_normalizes_raw_count() {
        let mut touch = Touch::new(MemoryPin::new(5).with_raw(1023));
        let state = touch.poll().unwrap();
        assert_eq!(state.value, Some(1.0));
        assert_eq!(state.field("reading"), Some(1023.0));
    }

    #[test]
    fn read_updates_state_without_hardware_writes() {
        let mut touch = Touch::new(MemoryPin::new(5).with_raw(512));
        let state = touch.read().unwrap();
        let level = state.value.unwrap();
        assert!((level - 512.0 / 1023.0).abs() < 1e-12);
        assert_eq!(touch.value(), Some(level));
        assert_eq!(touch.pin().writes(), 0);
    }
}
