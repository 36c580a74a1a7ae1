use uom::{
    si::{
        ISQ, Quantity, SI,
        electrical_resistance::ohm,
        f64::{ElectricalResistance, Length, Power},
        length::meter,
        power::watt,
    },
    typenum::{N2, N3, P1, Z0},
};

/// Electrical resistance per unit length, Ω/m in SI.
pub type LinearResistance = Quantity<ISQ<P1, P1, N3, N2, Z0, Z0, Z0>, SI<f64>, f64>;

/// Heat transfer rate per unit length, W/m in SI.
pub type LinearHeatRate = Quantity<ISQ<P1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`LinearResistance`] from a value in ohms per meter.
#[must_use]
pub fn ohm_per_meter(value: f64) -> LinearResistance {
    ElectricalResistance::new::<ohm>(value) / Length::new::<meter>(1.0)
}

/// Creates a [`LinearHeatRate`] from a value in watts per meter.
#[must_use]
pub fn watt_per_meter(value: f64) -> LinearHeatRate {
    Power::new::<watt>(value) / Length::new::<meter>(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{electric_current::ampere, f64::ElectricCurrent};

    #[test]
    fn per_meter_values_are_si() {
        assert_relative_eq!(ohm_per_meter(7.283e-5).value, 7.283e-5);
        assert_relative_eq!(watt_per_meter(39.11).value, 39.11);
    }

    #[test]
    fn joule_heating_has_heat_rate_units() {
        let current = ElectricCurrent::new::<ampere>(1025.0);
        let heating: LinearHeatRate = current * current * ohm_per_meter(9.3905e-5);
        assert_relative_eq!(heating.value, 1025.0 * 1025.0 * 9.3905e-5, max_relative = 1e-12);
    }
}
