//! Base state of an overhead conductor.
//!
//! [`ConductorState`] is the only data the model owns. Every derived
//! quantity (air properties, solar position, heat terms, ratings) is a
//! computed view over it and is re-evaluated on each access, so mutating a
//! field takes effect immediately.

mod resistance;

pub use resistance::{AcResistance, ReferencePoint};

use jiff::civil::DateTime;
use thiserror::Error;
use uom::si::f64::{Angle, Length, Ratio, ThermodynamicTemperature, Velocity};

use crate::support::constraint::{
    Constrained, ConstraintError, NonNegative, StrictlyPositive, UnitInterval,
};

/// Errors that can occur while building a [`ConductorState`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    /// Resistance reference temperatures must satisfy `low < high`.
    #[error("reference temperatures out of order: low={low:?}, high={high:?}")]
    ReferenceTemperatureOrder {
        low: ThermodynamicTemperature,
        high: ThermodynamicTemperature,
    },

    /// A numeric input violated its constraint.
    #[error("invalid input: {context}")]
    Constraint {
        context: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// No conductor preset is registered under the requested name.
    #[error("unknown conductor preset: {name}")]
    UnknownPreset { name: String },
}

impl StateError {
    /// Wraps a constraint violation with the name of the offending input.
    pub(crate) fn constraint(context: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::Constraint { context, source }
    }
}

/// Geometry and material of a bare stranded conductor.
#[derive(Debug, Clone, PartialEq)]
pub struct ConductorSpec {
    /// Descriptive name, such as a code word and stranding.
    pub name: String,

    /// Outside diameter of the stranded conductor.
    pub outside_diameter: Constrained<Length, StrictlyPositive>,

    /// AC resistance at the two reference temperatures.
    pub resistance: AcResistance,

    /// Highest conductor temperature the line is rated for.
    pub max_allowable_temperature: ThermodynamicTemperature,
}

/// Condition and temperature of the conductor surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceCondition {
    pub emissivity: Constrained<Ratio, UnitInterval>,
    pub solar_absorptivity: Constrained<Ratio, UnitInterval>,

    /// Surface temperature, used for radiation, convection, and the film temperature.
    pub temperature: ThermodynamicTemperature,

    /// Average temperature of the aluminum strand layers, used for Joule heating.
    pub average_temperature: ThermodynamicTemperature,
}

/// Sky condition selecting the solar heat intensity correlation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Atmosphere {
    #[default]
    Clear,
    Industrial,
}

/// Ambient weather around the span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weather {
    pub wind_speed: Constrained<Velocity, NonNegative>,

    /// Angle between the wind and the conductor axis.
    pub wind_direction: Angle,

    pub ambient_temperature: ThermodynamicTemperature,

    /// Conductor elevation above sea level.
    pub elevation: Length,

    pub atmosphere: Atmosphere,
}

/// Date, time, and orientation used to place the sun.
///
/// Only the day of year and the local hour of `date` are used.
/// No time zone or longitude correction is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarContext {
    pub date: DateTime,
    pub latitude: Angle,

    /// Azimuth of the line, measured clockwise from north.
    pub conductor_azimuth: Angle,
}

/// Complete input state for a steady-state conductor rating.
#[derive(Debug, Clone, PartialEq)]
pub struct ConductorState {
    pub conductor: ConductorSpec,
    pub surface: SurfaceCondition,
    pub weather: Weather,
    pub solar: SolarContext,
}

impl ConductorState {
    /// Assembles a state from its parts.
    #[must_use]
    pub fn new(
        conductor: ConductorSpec,
        surface: SurfaceCondition,
        weather: Weather,
        solar: SolarContext,
    ) -> Self {
        Self {
            conductor,
            surface,
            weather,
            solar,
        }
    }

    /// Sets both the surface and the strand-layer average temperature.
    ///
    /// The rating solvers treat the conductor as isothermal; this puts a
    /// state at the same operating point they evaluate.
    pub fn set_conductor_temperature(&mut self, temperature: ThermodynamicTemperature) {
        self.surface.temperature = temperature;
        self.surface.average_temperature = temperature;
    }

    /// Returns the outside diameter.
    #[must_use]
    pub fn diameter(&self) -> Length {
        *self.conductor.outside_diameter.as_ref()
    }
}
