//! TMP36 analog temperature sensor.

use fw_core::{Options, State};
use fw_flow::{Hub, Wheel};

use crate::device::{Device, DeviceMeta};
use crate::error::DeviceResult;
use crate::hal::InputPin;

/// 12-bit ADC full scale.
const ADC_FULL_SCALE: f64 = 4095.0;
/// Reference voltage used unless overridden with the `vref` option.
const DEFAULT_VREF: f64 = 3.6;
/// TMP36 output at 0 degrees Celsius.
const ZERO_C_VOLTS: f64 = 0.5;
/// TMP36 slope.
const VOLTS_PER_DEGREE: f64 = 0.01;

/// TMP36 temperature sensor on an ADC pin.
///
/// Converts the raw count to volts against the reference, then to
/// degrees Celsius along the sensor's linear response. The raw count and
/// the voltage ride along as `reading` and `voltage` fields.
#[derive(Debug)]
pub struct Tmp36<P> {
    hub: Hub,
    pin: P,
}

impl<P> Tmp36<P>
where
    P: InputPin,
{
    pub fn new(pin: P) -> Self {
        Self {
            hub: Hub::default(),
            pin,
        }
    }

    /// Bind extra options, e.g. `vref` for a board with a different
    /// ADC reference.
    pub fn with_options(mut self, options: Options) -> Self {
        self.hub.options = options;
        self
    }

    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P> Wheel for Tmp36<P>
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

impl<P> Device for Tmp36<P>
where
    P: InputPin,
{
    fn meta(&self) -> DeviceMeta {
        DeviceMeta {
            unit_name: "temperature",
            unit: "degree Celsius",
            symbol: "'C",
        }
    }

    fn poll(&mut self) -> DeviceResult<State> {
        let raw = f64::from(self.pin.read_raw()?);
        let vref = self.options().get_f64("vref", DEFAULT_VREF);
        let volts = raw / ADC_FULL_SCALE * vref;
        let celsius = (volts - ZERO_C_VOLTS) / VOLTS_PER_DEGREE;
        Ok(State::of(celsius)
            .with_field("reading", raw)
            .with_field("voltage", volts))
    }
}
