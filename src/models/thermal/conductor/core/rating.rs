//! Forward rating: the current that holds a conductor at a given temperature.

use thiserror::Error;
use tracing::warn;
use uom::si::{
    electric_current::ampere,
    f64::{ElectricCurrent, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::{LinearHeatRate, LinearResistance};

use super::{balance::HeatBalance, solar::SolarError, state::ConductorState};

/// How the current of a [`Rating`] relates to its heat balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingStatus {
    /// Joule heating exactly closes the balance.
    Balanced,

    /// Solar gain alone exceeds the conductor's losses at this temperature.
    ///
    /// No current can hold the conductor there, so the rated current is zero.
    SolarGainExceedsLosses {
        /// Solar gain minus radiated and convective losses.
        excess: LinearHeatRate,
    },
}

/// A conductor temperature and the steady-state current that produces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rating {
    pub conductor_temperature: ThermodynamicTemperature,
    pub current: ElectricCurrent,
    pub balance: HeatBalance,
    pub status: RatingStatus,
}

/// Errors that can occur while rating a conductor.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RatingError {
    /// The sun could not be located.
    #[error("solar geometry failed")]
    Solar(#[from] SolarError),

    /// The extrapolated AC resistance is not positive at the rating temperature.
    #[error("non-positive resistance {resistance:?} at {temperature:?}")]
    NonPositiveResistance {
        temperature: ThermodynamicTemperature,
        resistance: LinearResistance,
    },
}

/// Rates a conductor held at `temperature`.
///
/// Solves `I²R(T) = q_r + q_c - q_s` for the current. When the solar gain
/// exceeds the losses the current is clamped to zero and the excess is
/// reported in [`Rating::status`].
///
/// # Errors
///
/// Returns a [`RatingError`] if the sun cannot be located or the resistance
/// at `temperature` is not positive.
pub fn rate(
    state: &ConductorState,
    temperature: ThermodynamicTemperature,
) -> Result<Rating, RatingError> {
    let balance = HeatBalance::evaluate(state, temperature)?;

    let resistance = balance.resistance.value;
    if resistance.is_nan() || resistance <= 0.0 {
        return Err(RatingError::NonPositiveResistance {
            temperature,
            resistance: balance.resistance,
        });
    }

    let net_loss = balance.net_loss();
    let status = if net_loss.value < 0.0 {
        warn!(
            conductor_c = temperature.get::<degree_celsius>(),
            excess_w_per_m = -net_loss.value,
            "solar gain exceeds losses, rating clamped to zero current"
        );
        RatingStatus::SolarGainExceedsLosses { excess: -net_loss }
    } else {
        RatingStatus::Balanced
    };

    let current = (net_loss.value.max(0.0) / resistance).sqrt();

    Ok(Rating {
        conductor_temperature: temperature,
        current: ElectricCurrent::new::<ampere>(current),
        balance,
        status,
    })
}

/// Forward rating views.
impl ConductorState {
    /// Rates the conductor at its maximum allowable temperature.
    ///
    /// # Errors
    ///
    /// See [`rate`].
    pub fn ampacity(&self) -> Result<Rating, RatingError> {
        rate(self, self.conductor.max_allowable_temperature)
    }

    /// Rates the conductor at an arbitrary operating temperature.
    ///
    /// # Errors
    ///
    /// See [`rate`].
    pub fn current_at(&self, temperature: ThermodynamicTemperature) -> Result<Rating, RatingError> {
        rate(self, temperature)
    }
}
