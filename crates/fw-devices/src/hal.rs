//! Pin seam between devices and the hardware backend.
//!
//! Devices own their pins exclusively and talk to them in raw counts
//! only; every conversion to engineering values happens in the device.
//! `MemoryPin` is the host-side backend for tests and demos.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DeviceResult;

/// Identifier of a physical pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PinId(pub u8);

impl fmt::Display for PinId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for PinId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

/// A bound hardware pin.
pub trait Pin {
    /// Identity of the underlying pin.
    fn id(&self) -> PinId;
}

/// A pin that can be sampled.
pub trait InputPin: Pin {
    /// Read the current raw count (ADC count or logic level).
    fn read_raw(&mut self) -> DeviceResult<u16>;
}

/// A pin that can be driven.
pub trait OutputPin: Pin {
    /// Drive a raw count (duty count or logic level).
    fn write_raw(&mut self, raw: u16) -> DeviceResult<()>;
}

/// In-memory pin backend.
///
/// Reads return whatever was last written (or seeded); writes are counted
/// so tests can assert how often a device touched the hardware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryPin {
    id: PinId,
    raw: u16,
    writes: usize,
}

impl MemoryPin {
    pub fn new(id: impl Into<PinId>) -> Self {
        Self {
            id: id.into(),
            raw: 0,
            writes: 0,
        }
    }

    /// Seed the raw count, builder style.
    pub fn with_raw(mut self, raw: u16) -> Self {
        self.raw = raw;
        self
    }

    /// Current raw count.
    pub fn raw(&self) -> u16 {
        self.raw
    }

    /// Overwrite the raw count, as if the outside world changed.
    pub fn set_raw(&mut self, raw: u16) {
        self.raw = raw;
    }

    /// How many writes the owning device has issued.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Pin for MemoryPin {
    fn id(&self) -> PinId {
        self.id
    }
}

impl InputPin for MemoryPin {
    fn read_raw(&mut self) -> DeviceResult<u16> {
        Ok(self.raw)
    }
}

impl OutputPin for MemoryPin {
    fn write_raw(&mut self, raw: u16) -> DeviceResult<()> {
        self.raw = raw;
        self.writes += 1;
        Ok(())
    }
}
