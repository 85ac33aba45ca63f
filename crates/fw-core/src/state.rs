//! State snapshots exchanged between pipeline stages.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A snapshot of a unit's observable condition at one instant.
///
/// Every stage in a pipeline produces and consumes `State` values. The
/// primary reading or setting lives in `value`; auxiliary named scalars
/// (raw ADC counts, per-channel duties, intermediate voltages) live in
/// `extra`. Stages exchange owned snapshots, never references into a
/// unit's live state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct State {
    /// Primary reading or setting. `None` means "not yet known".
    pub value: Option<f64>,
    /// Auxiliary named fields. Sorted map so display and serialization
    /// order are deterministic.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, f64>,
}

impl State {
    /// A state whose value has not been determined yet.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// A state carrying a known primary value and no auxiliary fields.
    pub fn of(value: f64) -> Self {
        Self {
            value: Some(value),
            extra: BTreeMap::new(),
        }
    }

    /// Attach an auxiliary field, builder style.
    pub fn with_field(mut self, name: impl Into<String>, value: f64) -> Self {
        self.extra.insert(name.into(), value);
        self
    }

    /// Look up an auxiliary field.
    pub fn field(&self, name: &str) -> Option<f64> {
        self.extra.get(name).copied()
    }

    /// Insert or replace an auxiliary field.
    pub fn set_field(&mut self, name: impl Into<String>, value: f64) {
        self.extra.insert(name.into(), value);
    }

    /// Merge `fields` into this state, key-wise.
    ///
    /// Keys present in `fields` overwrite; keys absent from `fields` are
    /// preserved. A `None` primary value counts as absent, so merging a
    /// fields-only snapshot (say per-channel duties) never erases a known
    /// primary value.
    pub fn merge(&mut self, fields: &State) {
        if fields.value.is_some() {
            self.value = fields.value;
        }
        for (name, value) in &fields.extra {
            self.extra.insert(name.clone(), *value);
        }
    }

    /// True when no primary value has been determined.
    pub fn is_unknown(&self) -> bool {
        self.value.is_none()
    }
}

impl From<f64> for State {
    fn from(value: f64) -> Self {
        Self::of(value)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "value={v}")?,
            None => write!(f, "value=?")?,
        }
        for (name, value) in &self.extra {
            write!(f, " {name}={value}")?;
        }
        Ok(())
    }
}
