//! fw-devices: hardware-backed pipeline units.
//!
//! Contains:
//! - hal (pin seam + in-memory backend)
//! - device (Device trait, readings/drive flow adapters)
//! - sensors: touch, tmp36, mq2
//! - actuators: level, pwm, rgb
//! - mock (scripted device for pipelines without hardware)

pub mod device;
pub mod error;
pub mod hal;
pub mod level;
pub mod mock;
pub mod mq2;
pub mod pwm;
pub mod rgb;
pub mod tmp36;
pub mod touch;

pub use device::{Device, DeviceMeta, Drive, Readings};
pub use error::{DeviceError, DeviceResult};
pub use hal::{InputPin, MemoryPin, OutputPin, Pin, PinId};
pub use level::{Level, LevelConfig};
pub use mock::{Mock, MockConfig};
pub use mq2::Mq2;
pub use pwm::Pwm;
pub use rgb::{Rgb, RgbConfig};
pub use tmp36::Tmp36;
pub use touch::Touch;
