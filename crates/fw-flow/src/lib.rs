//! fw-flow: composable pull-based pipelines.
//!
//! Contains:
//! - flow (the pull seam: Ready/Suppressed/Exhausted, limit/iter adapters)
//! - wheel (base unit contract: options + current state + republish)
//! - taylor (filter/transform contract and the Through adapter)
//! - stage variants: log, function, average, threshold, rate

pub mod average;
pub mod error;
pub mod flow;
pub mod function;
pub mod log;
pub mod rate;
pub mod taylor;
pub mod threshold;
pub mod wheel;

pub use average::{Average, AverageConfig};
pub use error::{FlowError, FlowResult};
pub use flow::{Flow, Iter, Limit, Pull};
pub use function::{Function, identity};
pub use log::Log;
pub use rate::{Rate, RateConfig};
pub use taylor::{Taylor, Through};
pub use threshold::{Threshold, ThresholdConfig};
pub use wheel::{Hub, Republish, Wheel};
