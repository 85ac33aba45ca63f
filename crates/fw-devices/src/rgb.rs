//! RGB composite actuator: three PWM channels behind one unit.

use serde::{Deserialize, Serialize};
use tracing::warn;

use fw_core::{Options, State};
use fw_flow::{Hub, Wheel};

use crate::device::{Device, DeviceMeta};
use crate::error::DeviceResult;
use crate::hal::{InputPin, OutputPin, Pin};

/// 10-bit duty resolution per channel.
const MAX_DUTY: u16 = 1023;

/// RGB device configuration.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RgbConfig {
    /// Common-anode wiring: drive each channel with the complement duty.
    pub invert: bool,
}

/// Composite device driving three PWM pins as one color.
///
/// Channel ratios live in the `r`/`g`/`b` fields; the primary value is
/// their mean, which doubles as a white-dimming shortcut: committing a
/// state that only carries a value drives all three channels to it.
/// Channels without a usable ratio are skipped individually.
#[derive(Debug)]
pub struct Rgb<P> {
    hub: Hub,
    config: RgbConfig,
    red: P,
    green: P,
    blue: P,
}

impl<P> Rgb<P>
where
    P: InputPin + OutputPin,
{
    pub fn new(red: P, green: P, blue: P) -> Self {
        Self::with_config(red, green, blue, RgbConfig::default())
    }

    pub fn with_config(red: P, green: P, blue: P, config: RgbConfig) -> Self {
        Self {
            hub: Hub::default(),
            config,
            red,
            green,
            blue,
        }
    }

    pub fn with_options(mut self, options: Options) -> Self {
        self.hub.options = options;
        self
    }

    pub fn config(&self) -> RgbConfig {
        self.config
    }

    pub fn pins(&self) -> [&P; 3] {
        [&self.red, &self.green, &self.blue]
    }

    fn ratio_from(raw: u16, invert: bool) -> f64 {
        let duty = if invert { MAX_DUTY - raw.min(MAX_DUTY) } else { raw };
        f64::from(duty) / f64::from(MAX_DUTY)
    }

    fn drive(pin: &mut P, channel: &'static str, state: &State, invert: bool) -> DeviceResult<()> {
        let ratio = state.field(channel).or(state.value);
        let Some(ratio) = ratio.filter(|v| v.is_finite()) else {
            warn!(pin = %pin.id(), channel, "skipping commit, channel not usable");
            return Ok(());
        };
        let duty = (ratio.clamp(0.0, 1.0) * f64::from(MAX_DUTY)).round() as u16;
        pin.write_raw(if invert { MAX_DUTY - duty } else { duty })
    }
}

impl<P> Wheel for Rgb<P>
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

impl<P> Device for Rgb<P>
where
    P: InputPin + OutputPin,
{
    fn meta(&self) -> DeviceMeta {
        DeviceMeta {
            unit_name: "color",
            unit: "ratio",
            symbol: "#",
        }
    }

    fn poll(&mut self) -> DeviceResult<State> {
        let invert = self.config.invert;
        let r = Self::ratio_from(self.red.read_raw()?, invert);
        let g = Self::ratio_from(self.green.read_raw()?, invert);
        let b = Self::ratio_from(self.blue.read_raw()?, invert);
        Ok(State::of((r + g + b) / 3.0)
            .with_field("r", r)
            .with_field("g", g)
            .with_field("b", b))
    }

    fn commit(&mut self, _fields: &State) -> DeviceResult<()> {
        let state = self.state().clone();
        let invert = self.config.invert;
        Self::drive(&mut self.red, "r", &state, invert)?;
        Self::drive(&mut self.green, "g", &state, invert)?;
        Self::drive(&mut self.blue, "b", &state, invert)?;
        Ok(())
    }
}
