use uom::si::{f64::ThermodynamicTemperature, temperature_interval::kelvin as delta_kelvin};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::{LinearResistance, TemperatureDifference},
};

use super::StateError;

/// A tabulated AC resistance at one conductor temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePoint {
    pub temperature: ThermodynamicTemperature,
    pub resistance: Constrained<LinearResistance, StrictlyPositive>,
}

impl ReferencePoint {
    #[must_use]
    pub fn new(
        temperature: ThermodynamicTemperature,
        resistance: Constrained<LinearResistance, StrictlyPositive>,
    ) -> Self {
        Self {
            temperature,
            resistance,
        }
    }
}

/// AC resistance per unit length, linear in conductor temperature.
///
/// Defined by two reference points with `low.temperature < high.temperature`.
/// Values outside the reference range are extrapolated, not clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcResistance {
    low: ReferencePoint,
    high: ReferencePoint,
}

impl AcResistance {
    /// Creates a resistance model from a low and a high reference point.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::ReferenceTemperatureOrder`] unless
    /// `low.temperature < high.temperature`.
    pub fn new(low: ReferencePoint, high: ReferencePoint) -> Result<Self, StateError> {
        if low.temperature < high.temperature {
            Ok(Self { low, high })
        } else {
            Err(StateError::ReferenceTemperatureOrder {
                low: low.temperature,
                high: high.temperature,
            })
        }
    }

    #[must_use]
    pub fn low(&self) -> ReferencePoint {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> ReferencePoint {
        self.high
    }

    /// Returns the resistance at `temperature`.
    ///
    /// Exact at both reference points.
    #[must_use]
    pub fn at(&self, temperature: ThermodynamicTemperature) -> LinearResistance {
        let span = self
            .high
            .temperature
            .minus(self.low.temperature)
            .get::<delta_kelvin>();
        let offset = temperature
            .minus(self.low.temperature)
            .get::<delta_kelvin>();
        let fraction = offset / span;

        let r_low = *self.low.resistance.as_ref();
        let r_high = *self.high.resistance.as_ref();
        r_low * (1.0 - fraction) + r_high * fraction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    use crate::support::{constraint::StrictlyPositive, units::ohm_per_meter};

    fn point(celsius: f64, ohm_per_m: f64) -> ReferencePoint {
        ReferencePoint::new(
            ThermodynamicTemperature::new::<degree_celsius>(celsius),
            StrictlyPositive::new(ohm_per_meter(ohm_per_m)).unwrap(),
        )
    }

    fn drake() -> AcResistance {
        AcResistance::new(point(25.0, 7.283e-5), point(75.0, 8.688e-5)).unwrap()
    }

    fn at_celsius(resistance: &AcResistance, celsius: f64) -> f64 {
        resistance
            .at(ThermodynamicTemperature::new::<degree_celsius>(celsius))
            .value
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn exact_at_reference_points() {
        let r = drake();
        assert_eq!(r.at(r.low().temperature), *r.low().resistance.as_ref());
        assert_eq!(r.at(r.high().temperature), *r.high().resistance.as_ref());
    }

    #[test]
    fn linear_between_and_beyond() {
        let r = drake();
        assert_relative_eq!(at_celsius(&r, 50.0), 7.9855e-5, max_relative = 1e-9);
        assert_relative_eq!(at_celsius(&r, 100.0), 9.3905e-5, max_relative = 1e-9);
        assert_relative_eq!(at_celsius(&r, 0.0), 6.578e-5, max_relative = 1e-9);
    }

    #[test]
    fn monotonic_between_reference_points() {
        let r = drake();
        let samples: Vec<f64> = (25..=75).map(|t| at_celsius(&r, f64::from(t))).collect();
        assert!(samples.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn rejects_unordered_reference_points() {
        assert!(matches!(
            AcResistance::new(point(75.0, 8.688e-5), point(25.0, 7.283e-5)),
            Err(StateError::ReferenceTemperatureOrder { .. })
        ));
        assert!(AcResistance::new(point(25.0, 7.283e-5), point(25.0, 8.688e-5)).is_err());
    }
}
