//! Scalar helpers shared by filters, devices and their tests.

use crate::error::{CoreError, CoreResult};

/// Scalar type carried by states, histories and configuration.
pub type Real = f64;

/// Combined absolute and relative tolerance for comparing readings.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

/// True when `a` and `b` agree within `tol`: absolute bound first, then
/// relative to the larger magnitude.
pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Arithmetic mean, `None` for an empty sequence.
pub fn mean<I>(values: I) -> Option<Real>
where
    I: IntoIterator<Item = Real>,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for v in values {
        sum += v;
        count += 1;
    }
    (count > 0).then(|| sum / count as Real)
}

/// Reject NaN and infinities before they enter a window or a config.
pub fn ensure_finite(v: Real, what: &'static str) -> CoreResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CoreError::NonFinite { what, value: v })
    }
}
