use super::{PnmError, Result, DEFAULT_PRESSURE, DEFAULT_TEMPERATURE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the thermodynamic state at which fluid properties are evaluated
///
/// The state is uniform over the network, thus every resolved property is a scalar.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ThermoState {
    /// Absolute temperature [K]
    pub temperature: f64,

    /// Absolute pressure [Pa]
    pub pressure: f64,
}

impl ThermoState {
    /// Allocates a new instance
    pub fn new(temperature: f64, pressure: f64) -> Result<Self> {
        if !(temperature > 0.0) {
            return Err(PnmError::config("temperature must be > 0.0"));
        }
        if !(pressure > 0.0) {
            return Err(PnmError::config("pressure must be > 0.0"));
        }
        Ok(ThermoState { temperature, pressure })
    }
}

impl Default for ThermoState {
    fn default() -> Self {
        ThermoState {
            temperature: DEFAULT_TEMPERATURE,
            pressure: DEFAULT_PRESSURE,
        }
    }
}

impl fmt::Display for ThermoState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T = {:?} K, P = {:?} Pa", self.temperature, self.pressure)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ThermoState;

    #[test]
    fn new_captures_wrong_input() {
        assert_eq!(
            ThermoState::new(0.0, 1.0).err().map(|e| e.to_string()),
            Some("configuration error: temperature must be > 0.0".to_string())
        );
        assert_eq!(
            ThermoState::new(300.0, -1.0).err().map(|e| e.to_string()),
            Some("configuration error: pressure must be > 0.0".to_string())
        );
        assert!(ThermoState::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn default_and_display_work() {
        let state = ThermoState::default();
        assert_eq!(state, ThermoState::new(298.0, 101325.0).unwrap());
        assert_eq!(format!("{}", state), "T = 298.0 K, P = 101325.0 Pa");
    }
}
