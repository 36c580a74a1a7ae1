use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// This trait provides a [`minus`](Self::minus) method that subtracts two
/// [`ThermodynamicTemperature`] values (absolute temperatures) and returns a
/// [`TemperatureInterval`] (temperature difference), such as the rise of a
/// conductor above ambient air.
///
/// For background on this distinction and why this extension is needed:
/// [#380](https://github.com/iliekturtles/uom/issues/380),
/// [#289](https://github.com/iliekturtles/uom/issues/289),
/// [#403](https://github.com/iliekturtles/uom/issues/403).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermodynamicTemperature,
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    };

    #[test]
    fn conductor_rise_above_ambient() {
        let ambient = ThermodynamicTemperature::new::<degree_celsius>(40.0);
        let conductor = ThermodynamicTemperature::new::<degree_celsius>(100.0);

        assert_relative_eq!(
            conductor.minus(ambient).get::<delta_celsius>(),
            60.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            ambient.minus(conductor).get::<delta_kelvin>(),
            -60.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn mixed_scales_agree() {
        // 104°F is the 40°C default ambient.
        let t_in_c = ThermodynamicTemperature::new::<degree_celsius>(40.0);
        let t_in_f = ThermodynamicTemperature::new::<degree_fahrenheit>(104.0);
        assert_relative_eq!(
            t_in_f.minus(t_in_c).get::<delta_celsius>(),
            0.0,
            epsilon = 1e-9
        );
    }
}
