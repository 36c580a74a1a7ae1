//! Heat gained and lost per unit length of conductor.
//!
//! Each term is a pure function of its inputs. The [`ConductorState`] views
//! at the bottom evaluate them at the state's surface temperature.

use uom::si::{
    angle::radian,
    dynamic_viscosity::pascal_second,
    f64::{Angle, HeatFluxDensity, Length, Ratio, ThermodynamicTemperature, Velocity},
    heat_flux_density::watt_per_square_meter,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::support::units::{LinearHeatRate, TemperatureDifference, watt_per_meter};

use super::{
    air::AirProperties,
    solar::{SolarError, SolarPosition},
    state::ConductorState,
};

/// Radiated heat loss from the conductor surface to its surroundings.
#[must_use]
pub fn radiated_heat_loss(
    diameter: Length,
    emissivity: Ratio,
    surface: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
) -> LinearHeatRate {
    let d = diameter.get::<meter>();
    let e = emissivity.get::<ratio>();
    let ts = (surface.get::<degree_celsius>() + 273.0) / 100.0;
    let ta = (ambient.get::<degree_celsius>() + 273.0) / 100.0;
    watt_per_meter(17.8 * d * e * (ts.powi(4) - ta.powi(4)))
}

/// Wind direction factor `K_angle`.
///
/// `wind_direction` is the angle between the wind and the conductor axis,
/// so a perpendicular wind (90°) gives a factor of one.
#[must_use]
pub fn wind_direction_factor(wind_direction: Angle) -> f64 {
    let phi = wind_direction.get::<radian>();
    1.194 - phi.cos() + 0.194 * (2.0 * phi).cos() + 0.368 * (2.0 * phi).sin()
}

/// Reynolds number of the crossflow around the conductor.
#[must_use]
pub fn reynolds_number(diameter: Length, air: &AirProperties, wind_speed: Velocity) -> f64 {
    diameter.get::<meter>()
        * air.density.get::<kilogram_per_cubic_meter>()
        * wind_speed.get::<meter_per_second>()
        / air.viscosity.get::<pascal_second>()
}

/// Natural (free) convection heat loss in still air.
///
/// Keeps the sign of the surface-to-ambient difference, so a conductor
/// colder than the air gains heat instead of producing `NaN`.
#[must_use]
pub fn natural_convection(
    diameter: Length,
    air: &AirProperties,
    surface: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
) -> LinearHeatRate {
    let rise = surface.minus(ambient).get::<delta_kelvin>();
    let rho = air.density.get::<kilogram_per_cubic_meter>();
    let d = diameter.get::<meter>();
    watt_per_meter(3.645 * rho.sqrt() * d.powf(0.75) * rise.signum() * rise.abs().powf(1.25))
}

/// Forced convection heat loss from the low- and high-wind correlations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForcedConvection {
    /// `q_c1`, the correlation that governs at low Reynolds numbers.
    pub low_wind: LinearHeatRate,
    /// `q_c2`, the correlation that governs at high Reynolds numbers.
    pub high_wind: LinearHeatRate,
}

impl ForcedConvection {
    #[must_use]
    pub fn new(
        diameter: Length,
        air: &AirProperties,
        wind_speed: Velocity,
        wind_direction: Angle,
        surface: ThermodynamicTemperature,
        ambient: ThermodynamicTemperature,
    ) -> Self {
        let re = reynolds_number(diameter, air, wind_speed);
        let k_angle = wind_direction_factor(wind_direction);
        let k_f = air.thermal_conductivity.get::<watt_per_meter_kelvin>();
        let rise = surface.minus(ambient).get::<delta_kelvin>();

        Self {
            low_wind: watt_per_meter(k_angle * (1.05 + 1.35 * re.powf(0.52)) * k_f * rise),
            high_wind: watt_per_meter(k_angle * 0.754 * re.powf(0.6) * k_f * rise),
        }
    }

    /// The larger of the two correlations.
    #[must_use]
    pub fn governing(&self) -> LinearHeatRate {
        if self.low_wind.value >= self.high_wind.value {
            self.low_wind
        } else {
            self.high_wind
        }
    }
}

/// Solar heat gain on the projected conductor area.
///
/// Zero while the sun is at or below the horizon. Negative intensities from
/// the polynomial fit just above the horizon are treated as zero.
#[must_use]
pub fn solar_heat_gain(
    diameter: Length,
    absorptivity: Ratio,
    intensity: HeatFluxDensity,
    sun: &SolarPosition,
    conductor_azimuth: Angle,
) -> LinearHeatRate {
    let altitude = sun.altitude.get::<radian>();
    if altitude <= 0.0 {
        return watt_per_meter(0.0);
    }

    let bearing = (sun.azimuth - conductor_azimuth).get::<radian>();
    let theta = (altitude.cos() * bearing.cos()).acos();
    let q_se = intensity.get::<watt_per_square_meter>().max(0.0);

    watt_per_meter(absorptivity.get::<ratio>() * q_se * theta.sin() * diameter.get::<meter>())
}

/// Heat term views, evaluated at the surface temperature.
impl ConductorState {
    #[must_use]
    pub fn radiated_heat_loss(&self) -> LinearHeatRate {
        radiated_heat_loss(
            self.diameter(),
            *self.surface.emissivity.as_ref(),
            self.surface.temperature,
            self.weather.ambient_temperature,
        )
    }

    #[must_use]
    pub fn wind_direction_factor(&self) -> f64 {
        wind_direction_factor(self.weather.wind_direction)
    }

    #[must_use]
    pub fn reynolds_number(&self) -> f64 {
        reynolds_number(self.diameter(), &self.air(), *self.weather.wind_speed.as_ref())
    }

    #[must_use]
    pub fn natural_convective_heat_loss(&self) -> LinearHeatRate {
        natural_convection(
            self.diameter(),
            &self.air(),
            self.surface.temperature,
            self.weather.ambient_temperature,
        )
    }

    #[must_use]
    pub fn forced_convection(&self) -> ForcedConvection {
        ForcedConvection::new(
            self.diameter(),
            &self.air(),
            *self.weather.wind_speed.as_ref(),
            self.weather.wind_direction,
            self.surface.temperature,
            self.weather.ambient_temperature,
        )
    }

    /// Forced convection loss, the larger of `q_c1` and `q_c2`.
    #[must_use]
    pub fn forced_convective_heat_loss(&self) -> LinearHeatRate {
        self.forced_convection().governing()
    }

    /// # Errors
    ///
    /// Returns [`SolarError::AzimuthQuadrant`] if the sun cannot be located.
    pub fn solar_heat_gain(&self) -> Result<LinearHeatRate, SolarError> {
        Ok(solar_heat_gain(
            self.diameter(),
            *self.surface.solar_absorptivity.as_ref(),
            self.solar_heat_intensity(),
            &self.solar_position()?,
            self.solar.conductor_azimuth,
        ))
    }
}
