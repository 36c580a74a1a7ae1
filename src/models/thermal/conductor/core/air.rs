//! Properties of the air film around the conductor.
//!
//! Correlations are evaluated at the film temperature, the mean of the
//! conductor and ambient temperatures, in degrees Celsius.

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, Length, MassDensity, ThermalConductivity, ThermodynamicTemperature},
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use super::state::ConductorState;

/// Air properties at one film temperature and elevation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirProperties {
    pub film_temperature: ThermodynamicTemperature,
    pub density: MassDensity,
    pub viscosity: DynamicViscosity,
    pub thermal_conductivity: ThermalConductivity,
}

impl AirProperties {
    /// Evaluates the air film between a conductor and the ambient air.
    #[must_use]
    pub fn new(
        conductor: ThermodynamicTemperature,
        ambient: ThermodynamicTemperature,
        elevation: Length,
    ) -> Self {
        let film_temperature = film_temperature(conductor, ambient);
        Self {
            film_temperature,
            density: density(film_temperature, elevation),
            viscosity: viscosity(film_temperature),
            thermal_conductivity: thermal_conductivity(film_temperature),
        }
    }
}

/// Mean of the conductor and ambient temperatures.
#[must_use]
pub fn film_temperature(
    conductor: ThermodynamicTemperature,
    ambient: ThermodynamicTemperature,
) -> ThermodynamicTemperature {
    let mean = 0.5 * (conductor.get::<kelvin>() + ambient.get::<kelvin>());
    ThermodynamicTemperature::new::<kelvin>(mean)
}

/// Air density, corrected for elevation above sea level.
#[must_use]
pub fn density(film: ThermodynamicTemperature, elevation: Length) -> MassDensity {
    let t = film.get::<degree_celsius>();
    let z = elevation.get::<meter>();
    let rho = (1.293 - 1.525e-4 * z + 6.379e-9 * z * z) / (1.0 + 0.00367 * t);
    MassDensity::new::<kilogram_per_cubic_meter>(rho)
}

/// Absolute (dynamic) viscosity of air.
#[must_use]
pub fn viscosity(film: ThermodynamicTemperature) -> DynamicViscosity {
    let t = film.get::<degree_celsius>();
    let mu = 1.458e-6 * (t + 273.0).powf(1.5) / (t + 383.4);
    DynamicViscosity::new::<pascal_second>(mu)
}

/// Thermal conductivity of air.
#[must_use]
pub fn thermal_conductivity(film: ThermodynamicTemperature) -> ThermalConductivity {
    let t = film.get::<degree_celsius>();
    let k = 2.424e-2 + 7.477e-5 * t - 4.407e-9 * t * t;
    ThermalConductivity::new::<watt_per_meter_kelvin>(k)
}

/// Air film views, evaluated at the surface temperature.
impl ConductorState {
    #[must_use]
    pub fn air(&self) -> AirProperties {
        AirProperties::new(
            self.surface.temperature,
            self.weather.ambient_temperature,
            self.weather.elevation,
        )
    }

    #[must_use]
    pub fn film_temperature(&self) -> ThermodynamicTemperature {
        film_temperature(self.surface.temperature, self.weather.ambient_temperature)
    }

    #[must_use]
    pub fn air_density(&self) -> MassDensity {
        density(self.film_temperature(), self.weather.elevation)
    }

    #[must_use]
    pub fn air_viscosity(&self) -> DynamicViscosity {
        viscosity(self.film_temperature())
    }

    #[must_use]
    pub fn air_thermal_conductivity(&self) -> ThermalConductivity {
        thermal_conductivity(self.film_temperature())
    }
}
