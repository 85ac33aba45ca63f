//! PWM actuator (LED dimming, motor drive).

use tracing::warn;

use fw_core::{Options, State};
use fw_flow::{Hub, Wheel};

use crate::device::{Device, DeviceMeta};
use crate::error::DeviceResult;
use crate::hal::{InputPin, OutputPin, Pin};

/// 10-bit duty resolution.
const MAX_DUTY: u16 = 1023;

/// PWM device on a single pin.
///
/// The pipeline-facing value is a 0..1 duty ratio; conversion to and
/// from the raw duty count stays inside the device. Committing clamps
/// out-of-range ratios rather than rejecting them.
#[derive(Debug)]
pub struct Pwm<P> {
    hub: Hub,
    pin: P,
}

impl<P> Pwm<P>
where
    P: InputPin + OutputPin,
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

impl<P> Wheel for Pwm<P>
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

impl<P> Device for Pwm<P>
where
    P: InputPin + OutputPin,
{
    fn meta(&self) -> DeviceMeta {
        DeviceMeta {
            unit_name: "duty cycle",
            unit: "ratio",
            symbol: "%",
        }
    }

    fn poll(&mut self) -> DeviceResult<State> {
        let duty = self.pin.read_raw()?;
        let ratio = f64::from(duty) / f64::from(MAX_DUTY);
        Ok(State::of(ratio).with_field("duty", f64::from(duty)))
    }

    fn commit(&mut self, _fields: &State) -> DeviceResult<()> {
        let Some(value) = self.value().filter(|v| v.is_finite()) else {
            warn!(pin = %self.pin.id(), "skipping commit, duty not usable");
            return Ok(());
        };
        let duty = (value.clamp(0.0, 1.0) * f64::from(MAX_DUTY)).round() as u16;
        self.pin.write_raw(duty)
    }
}
