use crate::base::{PnmError, Result};
use serde::{Deserialize, Serialize};

/// Defines the pressure thresholds visited by a percolation run
///
/// The generated schedules span the range of throat entry pressures, from the minimum to
/// the maximum (inclusive). With a single point, the only threshold is the maximum.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(tag = "spacing", rename_all = "snake_case")]
pub enum Thresholds {
    /// Caller-supplied values (finite and non-decreasing)
    Explicit { values: Vec<f64> },

    /// Linearly spaced values
    Linear { npts: usize },

    /// Logarithmically spaced values (requires positive entry pressures)
    Log { npts: usize },
}

impl Thresholds {
    /// Generates the ascending list of thresholds
    ///
    /// # Input
    ///
    /// * `min` -- smallest entry pressure
    /// * `max` -- largest entry pressure
    pub fn generate(&self, min: f64, max: f64) -> Result<Vec<f64>> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(PnmError::config("the range of entry pressures is invalid"));
        }
        match self {
            Thresholds::Explicit { values } => {
                if values.is_empty() {
                    return Err(PnmError::config("the list of thresholds must not be empty"));
                }
                if values.iter().any(|v| !v.is_finite()) {
                    return Err(PnmError::config("thresholds must be finite"));
                }
                if values.windows(2).any(|w| w[1] < w[0]) {
                    return Err(PnmError::config("thresholds must be non-decreasing"));
                }
                Ok(values.clone())
            }
            Thresholds::Linear { npts } => {
                let n = check_npts(*npts)?;
                if n == 1 {
                    return Ok(vec![max]);
                }
                let mut values: Vec<f64> = (0..n)
                    .map(|i| min + (max - min) * (i as f64) / ((n - 1) as f64))
                    .collect();
                values[n - 1] = max;
                Ok(values)
            }
            Thresholds::Log { npts } => {
                let n = check_npts(*npts)?;
                if min <= 0.0 {
                    return Err(PnmError::config(format!(
                        "log spacing requires positive entry pressures (min = {:e})",
                        min
                    )));
                }
                if n == 1 {
                    return Ok(vec![max]);
                }
                let (a, b) = (f64::ln(min), f64::ln(max));
                let mut values: Vec<f64> = (0..n)
                    .map(|i| f64::exp(a + (b - a) * (i as f64) / ((n - 1) as f64)))
                    .collect();
                values[0] = min;
                values[n - 1] = max;
                // rounding of exp(ln(x)) may break the ordering when min ≈ max
                for i in 1..n {
                    if values[i] < values[i - 1] {
                        values[i] = values[i - 1];
                    }
                }
                Ok(values)
            }
        }
    }
}

fn check_npts(npts: usize) -> Result<usize> {
    if npts < 1 {
        return Err(PnmError::config("the number of thresholds must be ≥ 1"));
    }
    Ok(npts)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
