//! Named conductor data and the standard rating scenario.
//!
//! Presets are plain data: adding a conductor means adding a row to
//! [`PRESETS`]. Values are stored as bare numbers in the units named by each
//! field and converted to [`uom`] quantities when a state is built.

use jiff::civil::{DateTime, datetime};
use uom::si::{
    angle::degree,
    f64::{Angle, Length, Ratio, ThermodynamicTemperature, Velocity},
    length::meter,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{NonNegative, StrictlyPositive, UnitInterval},
    units::ohm_per_meter,
};

use super::state::{
    AcResistance, Atmosphere, ConductorSpec, ConductorState, ReferencePoint, SolarContext,
    StateError, SurfaceCondition, Weather,
};

/// Tabulated properties of a stranded conductor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConductorPreset {
    pub name: &'static str,
    pub size_kcmil: f64,
    pub outside_diameter_m: f64,
    pub low_temperature_c: f64,
    pub high_temperature_c: f64,
    pub ac_resistance_low_ohm_per_m: f64,
    pub ac_resistance_high_ohm_per_m: f64,
    pub max_allowable_temperature_c: f64,
}

/// 795 kcmil 26/7 ACSR "Drake".
pub const DRAKE_ACSR: ConductorPreset = ConductorPreset {
    name: "Drake ACSR",
    size_kcmil: 795.0,
    outside_diameter_m: 0.02814,
    low_temperature_c: 25.0,
    high_temperature_c: 75.0,
    ac_resistance_low_ohm_per_m: 7.283e-5,
    ac_resistance_high_ohm_per_m: 8.688e-5,
    max_allowable_temperature_c: 100.0,
};

/// All registered presets, searched by [`ConductorPreset::lookup`].
pub const PRESETS: &[ConductorPreset] = &[DRAKE_ACSR];

impl ConductorPreset {
    /// Finds a preset by name, ignoring ASCII case.
    #[must_use]
    pub fn lookup(name: &str) -> Option<&'static ConductorPreset> {
        PRESETS
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }

    /// Builds the conductor geometry and material described by this preset.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] if the tabulated values violate a conductor invariant.
    pub fn spec(&self) -> Result<ConductorSpec, StateError> {
        let outside_diameter = StrictlyPositive::new(Length::new::<meter>(self.outside_diameter_m))
            .map_err(StateError::constraint("outside diameter"))?;

        let low = ReferencePoint::new(
            ThermodynamicTemperature::new::<degree_celsius>(self.low_temperature_c),
            StrictlyPositive::new(ohm_per_meter(self.ac_resistance_low_ohm_per_m))
                .map_err(StateError::constraint("low temperature resistance"))?,
        );
        let high = ReferencePoint::new(
            ThermodynamicTemperature::new::<degree_celsius>(self.high_temperature_c),
            StrictlyPositive::new(ohm_per_meter(self.ac_resistance_high_ohm_per_m))
                .map_err(StateError::constraint("high temperature resistance"))?,
        );

        Ok(ConductorSpec {
            name: self.name.to_owned(),
            outside_diameter,
            resistance: AcResistance::new(low, high)?,
            max_allowable_temperature: ThermodynamicTemperature::new::<degree_celsius>(
                self.max_allowable_temperature_c,
            ),
        })
    }
}

/// Weather, sun, and surface inputs for a rating study.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario {
    pub latitude_deg: f64,
    pub elevation_m: f64,
    pub ambient_temperature_c: f64,
    pub wind_speed_m_per_s: f64,
    pub wind_direction_deg: f64,
    pub conductor_azimuth_deg: f64,
    pub date: DateTime,
    pub atmosphere: Atmosphere,
    pub emissivity: f64,
    pub solar_absorptivity: f64,
}

impl Scenario {
    /// Mid-latitude summer late morning with a light crosswind and clear sky.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            latitude_deg: 30.0,
            elevation_m: 0.0,
            ambient_temperature_c: 40.0,
            wind_speed_m_per_s: 0.61,
            wind_direction_deg: 90.0,
            conductor_azimuth_deg: 90.0,
            date: datetime(2023, 6, 10, 11, 0, 0, 0),
            atmosphere: Atmosphere::Clear,
            emissivity: 0.8,
            solar_absorptivity: 0.8,
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::standard()
    }
}

impl ConductorState {
    /// Builds a state from a conductor preset and a scenario.
    ///
    /// The conductor starts at its maximum allowable temperature.
    ///
    /// # Errors
    ///
    /// Returns a [`StateError`] if any preset or scenario value violates an invariant.
    pub fn from_preset(preset: &ConductorPreset, scenario: &Scenario) -> Result<Self, StateError> {
        let conductor = preset.spec()?;
        let operating = conductor.max_allowable_temperature;

        let surface = SurfaceCondition {
            emissivity: UnitInterval::new(Ratio::new::<ratio>(scenario.emissivity))
                .map_err(StateError::constraint("emissivity"))?,
            solar_absorptivity: UnitInterval::new(Ratio::new::<ratio>(
                scenario.solar_absorptivity,
            ))
            .map_err(StateError::constraint("solar absorptivity"))?,
            temperature: operating,
            average_temperature: operating,
        };

        let weather = Weather {
            wind_speed: NonNegative::new(Velocity::new::<meter_per_second>(
                scenario.wind_speed_m_per_s,
            ))
            .map_err(StateError::constraint("wind speed"))?,
            wind_direction: Angle::new::<degree>(scenario.wind_direction_deg),
            ambient_temperature: ThermodynamicTemperature::new::<degree_celsius>(
                scenario.ambient_temperature_c,
            ),
            elevation: Length::new::<meter>(scenario.elevation_m),
            atmosphere: scenario.atmosphere,
        };

        let solar = SolarContext {
            date: scenario.date,
            latitude: Angle::new::<degree>(scenario.latitude_deg),
            conductor_azimuth: Angle::new::<degree>(scenario.conductor_azimuth_deg),
        };

        Ok(Self::new(conductor, surface, weather, solar))
    }

    /// Builds a state from a named preset under the [`Scenario::standard`] conditions.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::UnknownPreset`] if no preset has this name.
    pub fn with_defaults(name: &str) -> Result<Self, StateError> {
        let preset = ConductorPreset::lookup(name).ok_or_else(|| StateError::UnknownPreset {
            name: name.to_owned(),
        })?;
        Self::from_preset(preset, &Scenario::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(ConductorPreset::lookup("drake acsr"), Some(&DRAKE_ACSR));
        assert_eq!(ConductorPreset::lookup("Cardinal ACSR"), None);
    }

    #[test]
    fn drake_defaults() {
        let state = ConductorState::with_defaults("Drake ACSR").unwrap();

        assert_eq!(state.conductor.name, "Drake ACSR");
        assert_relative_eq!(state.diameter().get::<meter>(), 0.02814);
        assert_relative_eq!(
            state.conductor.resistance.low().resistance.as_ref().value,
            7.283e-5
        );
        assert_relative_eq!(
            state.surface.temperature.get::<degree_celsius>(),
            100.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            state.weather.wind_speed.as_ref().get::<meter_per_second>(),
            0.61
        );
        assert_relative_eq!(state.solar.latitude.get::<degree>(), 30.0, epsilon = 1e-12);
        assert_eq!(state.weather.atmosphere, Atmosphere::Clear);
    }

    #[test]
    fn unknown_preset() {
        assert!(matches!(
            ConductorState::with_defaults("Unobtainium"),
            Err(StateError::UnknownPreset { name }) if name == "Unobtainium"
        ));
    }

    #[test]
    fn invalid_scenario_is_rejected() {
        let scenario = Scenario {
            emissivity: 1.2,
            ..Scenario::standard()
        };
        assert!(matches!(
            ConductorState::from_preset(&DRAKE_ACSR, &scenario),
            Err(StateError::Constraint {
                context: "emissivity",
                ..
            })
        ));

        let scenario = Scenario {
            wind_speed_m_per_s: -1.0,
            ..Scenario::standard()
        };
        assert!(ConductorState::from_preset(&DRAKE_ACSR, &scenario).is_err());
    }

    #[test]
    fn invalid_preset_is_rejected() {
        let swapped = ConductorPreset {
            low_temperature_c: 75.0,
            high_temperature_c: 25.0,
            ..DRAKE_ACSR
        };
        assert!(matches!(
            swapped.spec(),
            Err(StateError::ReferenceTemperatureOrder { .. })
        ));
    }
}
