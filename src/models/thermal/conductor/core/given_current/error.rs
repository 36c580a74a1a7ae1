use thiserror::Error;
use twine_solvers::equation::bisection;

use crate::{
    models::thermal::conductor::core::solar::SolarError, support::units::LinearHeatRate,
};

/// Errors that can occur while solving for the temperature a current produces.
#[derive(Debug, Error)]
pub enum GivenCurrentError {
    /// The sun could not be located.
    #[error("solar geometry failed")]
    Solar(#[from] SolarError),

    /// The bisection solver encountered an error.
    ///
    /// An invalid bracket means the current heats the conductor beyond
    /// [`GivenCurrentConfig::max_temperature_rise`](super::GivenCurrentConfig).
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best heat balance residual achieved.
        residual: LinearHeatRate,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
