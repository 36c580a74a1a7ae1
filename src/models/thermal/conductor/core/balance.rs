use uom::si::f64::{ElectricCurrent, ThermodynamicTemperature};

use crate::support::units::{LinearHeatRate, LinearResistance};

use super::{
    air::AirProperties,
    heat::{ForcedConvection, natural_convection, radiated_heat_loss},
    solar::SolarError,
    state::ConductorState,
};

/// Every heat term of a conductor at one isothermal operating temperature.
///
/// The conductor surface and core are both taken to be at
/// `conductor_temperature`, so the air film and the AC resistance move with it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatBalance {
    pub conductor_temperature: ThermodynamicTemperature,
    pub resistance: LinearResistance,
    pub radiated: LinearHeatRate,
    pub natural_convection: LinearHeatRate,
    pub forced_convection: LinearHeatRate,
    pub solar_gain: LinearHeatRate,
}

impl HeatBalance {
    /// Evaluates every heat term at `conductor_temperature`.
    ///
    /// # Errors
    ///
    /// Returns a [`SolarError`] if the sun cannot be located.
    pub fn evaluate(
        state: &ConductorState,
        conductor_temperature: ThermodynamicTemperature,
    ) -> Result<Self, SolarError> {
        let solar_gain = state.solar_heat_gain()?;
        Ok(Self::with_solar_gain(state, conductor_temperature, solar_gain))
    }

    /// Evaluates the temperature-dependent terms around a known solar gain.
    ///
    /// Solar gain does not depend on conductor temperature, so iterative
    /// solvers compute it once and reuse it here.
    pub(crate) fn with_solar_gain(
        state: &ConductorState,
        conductor_temperature: ThermodynamicTemperature,
        solar_gain: LinearHeatRate,
    ) -> Self {
        let ambient = state.weather.ambient_temperature;
        let diameter = state.diameter();
        let air = AirProperties::new(conductor_temperature, ambient, state.weather.elevation);

        let forced = ForcedConvection::new(
            diameter,
            &air,
            *state.weather.wind_speed.as_ref(),
            state.weather.wind_direction,
            conductor_temperature,
            ambient,
        );

        Self {
            conductor_temperature,
            resistance: state.conductor.resistance.at(conductor_temperature),
            radiated: radiated_heat_loss(
                diameter,
                *state.surface.emissivity.as_ref(),
                conductor_temperature,
                ambient,
            ),
            natural_convection: natural_convection(diameter, &air, conductor_temperature, ambient),
            forced_convection: forced.governing(),
            solar_gain,
        }
    }

    /// Governing convective loss, the larger of natural and forced convection.
    #[must_use]
    pub fn convective(&self) -> LinearHeatRate {
        if self.forced_convection.value >= self.natural_convection.value {
            self.forced_convection
        } else {
            self.natural_convection
        }
    }

    /// Heat the conductor sheds beyond what the sun supplies, `q_r + q_c - q_s`.
    #[must_use]
    pub fn net_loss(&self) -> LinearHeatRate {
        self.radiated + self.convective() - self.solar_gain
    }

    #[must_use]
    pub fn joule_heating(&self, current: ElectricCurrent) -> LinearHeatRate {
        current * current * self.resistance
    }

    /// Balance residual `net_loss - I²R`, positive when the conductor would cool.
    #[must_use]
    pub fn residual(&self, current: ElectricCurrent) -> LinearHeatRate {
        self.net_loss() - self.joule_heating(current)
    }
}

/// Resistance and balance views.
impl ConductorState {
    /// AC resistance at the strand-layer average temperature.
    #[must_use]
    pub fn resistance(&self) -> LinearResistance {
        self.conductor.resistance.at(self.surface.average_temperature)
    }

    #[must_use]
    pub fn resistance_at(&self, temperature: ThermodynamicTemperature) -> LinearResistance {
        self.conductor.resistance.at(temperature)
    }

    /// Joule heating `I²R` at the strand-layer average temperature.
    #[must_use]
    pub fn joule_heating(&self, current: ElectricCurrent) -> LinearHeatRate {
        current * current * self.resistance()
    }

    /// Governing convective loss at the surface temperature.
    #[must_use]
    pub fn convective_heat_loss(&self) -> LinearHeatRate {
        let natural = self.natural_convective_heat_loss();
        let forced = self.forced_convective_heat_loss();
        if forced.value >= natural.value {
            forced
        } else {
            natural
        }
    }

    /// Heat balance at the surface temperature.
    ///
    /// # Errors
    ///
    /// Returns a [`SolarError`] if the sun cannot be located.
    pub fn heat_balance(&self) -> Result<HeatBalance, SolarError> {
        HeatBalance::evaluate(self, self.surface.temperature)
    }
}
