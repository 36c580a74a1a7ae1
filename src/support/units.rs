//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, length, current).
//! This module provides extensions that are useful for conductor rating but aren't
//! included in [`uom`].
//!
//! ## Per-unit-length quantities
//!
//! Conductor heat balances are written per unit length of line.
//! [`LinearResistance`] (Ω/m) and [`LinearHeatRate`] (W/m) fill that gap, with
//! [`ohm_per_meter`] and [`watt_per_meter`] as constructors:
//!
//! ```
//! use twine_ampacity::support::units::{ohm_per_meter, watt_per_meter};
//! use uom::si::{electric_current::ampere, f64::ElectricCurrent};
//!
//! let resistance = ohm_per_meter(8.0e-5);
//! let current = ElectricCurrent::new::<ampere>(1000.0);
//!
//! // Joule heating per meter of conductor.
//! let joule = current * current * resistance;
//! assert!((joule.value - watt_per_meter(80.0).value).abs() < 1e-9);
//! ```
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use twine_ampacity::support::units::TemperatureDifference;
//!
//! let conductor = ThermodynamicTemperature::new::<degree_celsius>(100.0);
//! let ambient = ThermodynamicTemperature::new::<degree_celsius>(40.0);
//! let rise = conductor.minus(ambient);
//! // rise is a TemperatureInterval, not a ThermodynamicTemperature
//! ```
//!
//! This extension trait is currently needed due to limitations in [`uom`].
//! See [`TemperatureDifference`] for details.

mod quantities;
mod temperature_difference;

pub use quantities::{LinearHeatRate, LinearResistance, ohm_per_meter, watt_per_meter};
pub use temperature_difference::TemperatureDifference;
