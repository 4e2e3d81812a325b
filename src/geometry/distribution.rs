use crate::base::{ParamDistribution, PnmError, Result};

/// Implements statistical distributions through their inverse cumulative distribution function
#[derive(Clone, Copy, Debug)]
pub struct Distribution {
    param: ParamDistribution,
}

impl Distribution {
    /// Allocates a new instance
    pub fn new(param: &ParamDistribution) -> Result<Self> {
        match *param {
            ParamDistribution::WeibullMin { shape, loc, scale } => {
                if !(shape > 0.0) {
                    return Err(PnmError::config("shape parameter of the Weibull distribution must be > 0.0"));
                }
                if !(scale > 0.0) {
                    return Err(PnmError::config("scale parameter of the Weibull distribution must be > 0.0"));
                }
                if !loc.is_finite() {
                    return Err(PnmError::config("location parameter of the Weibull distribution must be finite"));
                }
            }
            ParamDistribution::Uniform { lower, upper } => {
                if !lower.is_finite() || !upper.is_finite() || !(upper > lower) {
                    return Err(PnmError::config("bounds of the uniform distribution must satisfy lower < upper"));
                }
            }
        }
        Ok(Distribution { param: *param })
    }

    /// Calculates the percent point function (inverse CDF) at q ∈ [0,1)
    pub fn ppf(&self, q: f64) -> f64 {
        match self.param {
            // F(x) = 1 - exp(-((x - loc)/scale)^shape)
            ParamDistribution::WeibullMin { shape, loc, scale } => {
                loc + scale * f64::powf(-f64::ln(1.0 - q), 1.0 / shape)
            }
            ParamDistribution::Uniform { lower, upper } => lower + q * (upper - lower),
        }
    }

    /// Calculates the cumulative distribution function
    pub fn cdf(&self, x: f64) -> f64 {
        match self.param {
            ParamDistribution::WeibullMin { shape, loc, scale } => {
                if x <= loc {
                    0.0
                } else {
                    1.0 - f64::exp(-f64::powf((x - loc) / scale, shape))
                }
            }
            ParamDistribution::Uniform { lower, upper } => f64::min(f64::max((x - lower) / (upper - lower), 0.0), 1.0),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
