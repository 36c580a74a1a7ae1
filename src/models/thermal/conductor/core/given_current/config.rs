use twine_solvers::equation::bisection;
use uom::si::{f64::TemperatureInterval, temperature_interval::kelvin as delta_kelvin};

use crate::support::units::{LinearHeatRate, watt_per_meter};

/// Solver configuration for finding the temperature a current produces.
#[derive(Debug, Clone, Copy)]
pub struct GivenCurrentConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the conductor temperature.
    pub temp_tol: TemperatureInterval,

    /// Absolute tolerance on the heat balance residual.
    pub heat_tol: LinearHeatRate,

    /// Upper end of the search, measured from the ambient temperature.
    pub max_temperature_rise: TemperatureInterval,
}

impl Default for GivenCurrentConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-4),
            heat_tol: watt_per_meter(1e-9),
            max_temperature_rise: TemperatureInterval::new::<delta_kelvin>(500.0),
        }
    }
}

impl GivenCurrentConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.heat_tol.value,
        }
    }
}
