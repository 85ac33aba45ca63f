//! MQ-2 smoke/combustible-gas sensor.

use fw_core::{Options, State};
use fw_flow::{Hub, Wheel};

use crate::device::{Device, DeviceMeta};
use crate::error::DeviceResult;
use crate::hal::InputPin;

/// 12-bit ADC full scale.
const ADC_FULL_SCALE: f64 = 4095.0;

/// MQ-2 sensor on an ADC pin.
///
/// The element's response is nonlinear and uncalibrated, so the value is
/// just the raw count normalized to 0..1; pair with a threshold stage
/// for alarm-style use.
#[derive(Debug)]
pub struct Mq2<P> {
    hub: Hub,
    pin: P,
}

impl<P> Mq2<P>
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

impl<P> Wheel for Mq2<P>
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

impl<P> Device for Mq2<P>
where
    P: InputPin,
{
    fn meta(&self) -> DeviceMeta {
        DeviceMeta {
            unit_name: "smoke",
            unit: "unknown",
            symbol: ":(",
        }
    }

    fn poll(&mut self) -> DeviceResult<State> {
        let raw = f64::from(self.pin.read_raw()?);
        Ok(State::of(raw / ADC_FULL_SCALE).with_field("reading", raw))
    }
}
