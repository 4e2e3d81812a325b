use crate::base::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds one point of a capillary pressure curve
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct CurvePoint {
    /// Applied pressure (threshold)
    pub pressure: f64,

    /// Invading-phase saturation in [0,1]
    pub saturation: f64,
}

/// Holds the capillary pressure curve (saturation versus applied pressure)
///
/// The points are sorted by pressure and the saturation is non-decreasing.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Curve {
    points: Vec<CurvePoint>,
}

impl Curve {
    /// Allocates a new instance from matching lists of pressures and saturations
    pub(crate) fn new(pressures: &[f64], saturations: &[f64]) -> Self {
        Curve {
            points: pressures
                .iter()
                .zip(saturations)
                .map(|(&pressure, &saturation)| CurvePoint { pressure, saturation })
                .collect(),
        }
    }

    /// Returns the points
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Returns the number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Indicates whether the curve has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the applied pressures
    pub fn pressures(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.pressure).collect()
    }

    /// Returns the saturations
    pub fn saturations(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.saturation).collect()
    }

    /// Returns the last saturation (or zero if empty)
    pub fn final_saturation(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.saturation)
    }

    /// Returns the number of distinct saturation values
    pub fn n_levels(&self) -> usize {
        let mut levels = 0;
        let mut last = None;
        for p in &self.points {
            if last != Some(p.saturation) {
                levels += 1;
                last = Some(p.saturation);
            }
        }
        levels
    }

    /// Writes the curve as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.points)?)
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>14} {:>12}\n", "pressure", "saturation")?;
        for p in &self.points {
            write!(f, "{:>14.6e} {:>12.6}\n", p.pressure, p.saturation)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
