//! Steady-state thermal rating of bare overhead conductors.
//!
//! The heat balance follows IEEE 738: Joule heating plus solar gain equals
//! radiated plus convective loss. [`SteadyStateConductor`] solves it in
//! either direction, giving the current that holds a conductor at a
//! temperature or the temperature a current produces.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_ampacity::models::thermal::conductor::{
//!     ConductorState, Given, Input, SteadyStateConductor,
//! };
//! use uom::si::electric_current::ampere;
//!
//! let state = ConductorState::with_defaults("Drake ACSR")?;
//! let model = SteadyStateConductor::default();
//!
//! let rating = model.call(&Input {
//!     state,
//!     given: Given::MaxAllowableTemperature,
//! })?;
//!
//! assert!((rating.current.get::<ampere>() - 1025.7).abs() < 1.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod core;

pub use self::core::{
    AcResistance, AirProperties, Atmosphere, ConductorPreset, ConductorSpec, ConductorState,
    DRAKE_ACSR, ForcedConvection, GivenCurrentConfig, GivenCurrentError, HeatBalance, PRESETS,
    Rating, RatingError, RatingStatus, ReferencePoint, Scenario, SolarContext, SolarError,
    SolarPosition, StateError, SurfaceCondition, Weather, rate,
};

use thiserror::Error;
use twine_core::Model;
use uom::si::f64::{ElectricCurrent, ThermodynamicTemperature};

use crate::support::constraint::{Constrained, NonNegative};

/// The known side of the heat balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Given {
    /// Rate the conductor at this temperature.
    ConductorTemperature(ThermodynamicTemperature),

    /// Rate the conductor at its maximum allowable temperature.
    MaxAllowableTemperature,

    /// Find the temperature this current produces.
    Current(Constrained<ElectricCurrent, NonNegative>),
}

/// Input to [`SteadyStateConductor`].
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub state: ConductorState,
    pub given: Given,
}

/// Errors from [`SteadyStateConductor`].
#[derive(Debug, Error)]
pub enum ConductorError {
    #[error("rating failed")]
    Rating(#[from] RatingError),

    #[error("temperature solve failed")]
    GivenCurrent(#[from] GivenCurrentError),
}

/// Steady-state conductor model.
///
/// Forward cases are closed form. The [`Given::Current`] case is solved
/// iteratively using `config`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SteadyStateConductor {
    pub config: GivenCurrentConfig,
}

impl SteadyStateConductor {
    #[must_use]
    pub fn new(config: GivenCurrentConfig) -> Self {
        Self { config }
    }
}

impl Model for SteadyStateConductor {
    type Input = Input;
    type Output = Rating;
    type Error = ConductorError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let state = &input.state;
        match input.given {
            Given::ConductorTemperature(temperature) => Ok(state.current_at(temperature)?),
            Given::MaxAllowableTemperature => Ok(state.ampacity()?),
            Given::Current(current) => Ok(state.conductor_temperature(current, self.config)?),
        }
    }
}
