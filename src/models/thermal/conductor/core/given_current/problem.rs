//! Problem formulation for finding the temperature a current produces.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{ElectricCurrent, ThermodynamicTemperature},
    thermodynamic_temperature::kelvin,
};

use crate::{
    models::thermal::conductor::core::{HeatBalance, state::ConductorState},
    support::units::LinearHeatRate,
};

/// Evaluates the heat balance at a trial conductor temperature.
///
/// The solar gain is fixed for the duration of a solve.
pub(super) struct HeatBalanceModel<'a> {
    state: &'a ConductorState,
    solar_gain: LinearHeatRate,
}

impl<'a> HeatBalanceModel<'a> {
    pub(super) fn new(state: &'a ConductorState, solar_gain: LinearHeatRate) -> Self {
        Self { state, solar_gain }
    }
}

impl Model for HeatBalanceModel<'_> {
    type Input = ThermodynamicTemperature;
    type Output = HeatBalance;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(HeatBalance::with_solar_gain(
            self.state,
            *input,
            self.solar_gain,
        ))
    }
}

/// Equation problem definition for a known current.
///
/// Computes the residual as `net_loss - I²R`, which rises with temperature.
pub(super) struct GivenCurrentProblem {
    current: ElectricCurrent,
}

impl GivenCurrentProblem {
    pub(super) fn new(current: ElectricCurrent) -> Self {
        Self { current }
    }
}

impl EquationProblem<1> for GivenCurrentProblem {
    type Input = ThermodynamicTemperature;
    type Output = HeatBalance;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.residual(self.current).value])
    }
}
