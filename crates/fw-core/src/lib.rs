//! fw-core: shared vocabulary for flywheel pipelines.
//!
//! Contains:
//! - state (the snapshot record every pipeline stage exchanges)
//! - options (free-form per-unit configuration with typed accessors)
//! - numeric (scalar helpers: tolerances, means, finiteness checks)
//! - error (crate error enum + result alias)

pub mod error;
pub mod numeric;
pub mod options;
pub mod state;

// Re-exports so downstream crates can write fw_core::State directly
pub use error::{CoreError, CoreResult};
pub use numeric::*;
pub use options::Options;
pub use state::State;
