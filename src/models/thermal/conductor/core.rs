//! Steady-state heat balance of a bare overhead conductor.
//!
//! Joule heating and solar gain are balanced against radiated and convective
//! losses per unit length of conductor. All derived quantities are computed
//! views over a [`ConductorState`]; nothing is cached.

mod air;
mod balance;
mod given_current;
mod heat;
mod preset;
mod rating;
mod solar;
mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use air::AirProperties;
pub use balance::HeatBalance;
pub use given_current::{GivenCurrentConfig, GivenCurrentError};
pub use heat::ForcedConvection;
pub use preset::{ConductorPreset, DRAKE_ACSR, PRESETS, Scenario};
pub use rating::{Rating, RatingError, RatingStatus, rate};
pub use solar::{SolarError, SolarPosition};
pub use state::{
    AcResistance, Atmosphere, ConductorSpec, ConductorState, ReferencePoint, SolarContext,
    StateError, SurfaceCondition, Weather,
};
