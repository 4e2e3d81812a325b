/// Defines the default temperature of fluids [K]
pub const DEFAULT_TEMPERATURE: f64 = 298.0;

/// Defines the default (atmospheric) pressure of fluids [Pa]
pub const DEFAULT_PRESSURE: f64 = 101325.0;

/// Defines the minimum number of pores for an invasion to be meaningful
pub const MIN_PORES_FOR_INVASION: usize = 2;
