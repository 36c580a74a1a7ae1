//! Iterative solver for the temperature a known current produces.
//!
//! The heat balance residual `q_r + q_c - q_s - I²R(T)` is negative at the
//! ambient temperature and grows with conductor temperature, so bisection
//! above ambient finds the steady-state operating point.

mod config;
mod error;
mod problem;

pub use config::GivenCurrentConfig;
pub use error::GivenCurrentError;

use tracing::{debug, trace};
use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        electric_current::ampere,
        f64::ElectricCurrent,
        thermodynamic_temperature::{degree_celsius, kelvin},
    },
};

use crate::support::{
    constraint::{Constrained, NonNegative},
    units::{LinearHeatRate, watt_per_meter},
};

use super::{
    HeatBalance,
    rating::{Rating, RatingStatus},
    state::ConductorState,
};

use problem::{GivenCurrentProblem, HeatBalanceModel};

/// Solves for the conductor temperature at which `current` is in steady state.
///
/// Uses bisection over `[T_ambient, T_ambient + max_temperature_rise]`.
/// The conductor is treated as isothermal at each trial temperature.
///
/// # Errors
///
/// Returns [`GivenCurrentError`] if the sun cannot be located, the current
/// heats the conductor beyond the search range, or the solver fails to converge.
pub(super) fn given_current(
    state: &ConductorState,
    current: Constrained<ElectricCurrent, NonNegative>,
    config: GivenCurrentConfig,
) -> Result<Rating, GivenCurrentError> {
    let current = current.into_inner();
    let ambient = state.weather.ambient_temperature;
    let solar_gain = state.solar_heat_gain()?;

    if current == ElectricCurrent::ZERO && solar_gain == LinearHeatRate::ZERO {
        return Ok(Rating {
            conductor_temperature: ambient,
            current,
            balance: HeatBalance::with_solar_gain(state, ambient, solar_gain),
            status: RatingStatus::Balanced,
        });
    }

    let model = HeatBalanceModel::new(state, solar_gain);
    let problem = GivenCurrentProblem::new(current);

    let low = ambient.get::<kelvin>();
    let high = (ambient + config.max_temperature_rise).get::<kelvin>();

    let solution = bisection::solve(
        &model,
        &problem,
        [low, high],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            trace!(trial_k = event.x(), ok = event.result().is_ok(), "heat balance");
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(GivenCurrentError::MaxIters {
            residual: watt_per_meter(solution.residual),
            iters: solution.iters,
        });
    }

    let balance = solution.snapshot.output;
    debug!(
        current_a = current.get::<ampere>(),
        conductor_c = balance.conductor_temperature.get::<degree_celsius>(),
        iters = solution.iters,
        "solved conductor temperature"
    );

    Ok(Rating {
        conductor_temperature: balance.conductor_temperature,
        current,
        balance,
        status: RatingStatus::Balanced,
    })
}

/// Reverse rating view.
impl ConductorState {
    /// Finds the steady-state conductor temperature for a known current.
    ///
    /// The state itself is not modified.
    ///
    /// # Errors
    ///
    /// See [`GivenCurrentError`].
    pub fn conductor_temperature(
        &self,
        current: Constrained<ElectricCurrent, NonNegative>,
        config: GivenCurrentConfig,
    ) -> Result<Rating, GivenCurrentError> {
        given_current(self, current, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use jiff::civil::datetime;
    use uom::si::{
        f64::{TemperatureInterval, ThermodynamicTemperature},
        temperature_interval::kelvin as delta_kelvin,
    };

    use crate::models::thermal::conductor::core::test_support::drake;

    fn amps(value: f64) -> Constrained<ElectricCurrent, NonNegative> {
        NonNegative::new(ElectricCurrent::new::<ampere>(value)).unwrap()
    }

    #[test]
    fn roundtrip() {
        let state = drake();
        let target = state.ampacity().unwrap();

        let result = state
            .conductor_temperature(
                NonNegative::new(target.current).unwrap(),
                GivenCurrentConfig::default(),
            )
            .expect("temperature solve should succeed");

        assert_relative_eq!(
            result.conductor_temperature.get::<degree_celsius>(),
            100.0,
            epsilon = 1e-3
        );
        assert_eq!(result.status, RatingStatus::Balanced);
        assert_relative_eq!(result.balance.residual(result.current).value, 0.0, epsilon = 1e-2);
    }

    #[test]
    fn roundtrip_at_other_temperatures() {
        let state = drake();

        for celsius in [55.0, 75.0, 119.6, 150.0] {
            let temperature = ThermodynamicTemperature::new::<degree_celsius>(celsius);
            let rating = state.current_at(temperature).unwrap();

            let result = state
                .conductor_temperature(
                    NonNegative::new(rating.current).unwrap(),
                    GivenCurrentConfig::default(),
                )
                .unwrap();

            assert_relative_eq!(
                result.conductor_temperature.get::<degree_celsius>(),
                celsius,
                epsilon = 1e-3
            );
        }
    }

    #[test]
    fn zero_current_at_night_stays_at_ambient() {
        let mut state = drake();
        state.solar.date = datetime(2023, 6, 10, 23, 0, 0, 0);

        let result = state
            .conductor_temperature(NonNegative::zero(), GivenCurrentConfig::default())
            .expect("zero current solve should succeed");

        assert_eq!(result.conductor_temperature, state.weather.ambient_temperature);
        assert_eq!(result.balance.solar_gain, LinearHeatRate::ZERO);
    }

    #[test]
    fn sun_alone_warms_the_conductor() {
        let state = drake();

        let result = state
            .conductor_temperature(NonNegative::zero(), GivenCurrentConfig::default())
            .unwrap();

        assert!(result.conductor_temperature > state.weather.ambient_temperature);
        assert!(result.conductor_temperature.get::<degree_celsius>() < 60.0);
    }

    #[test]
    fn does_not_modify_state() {
        let state = drake();
        let before = state.clone();

        state
            .conductor_temperature(amps(800.0), GivenCurrentConfig::default())
            .unwrap();

        assert_eq!(state, before);
    }

    #[test]
    fn current_beyond_search_range_fails() {
        let config = GivenCurrentConfig {
            max_temperature_rise: TemperatureInterval::new::<delta_kelvin>(50.0),
            ..GivenCurrentConfig::default()
        };

        assert!(matches!(
            drake().conductor_temperature(amps(2000.0), config),
            Err(GivenCurrentError::Bisection(_))
        ));
    }

    #[test]
    fn reports_max_iters() {
        let config = GivenCurrentConfig {
            max_iters: 3,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-12),
            heat_tol: watt_per_meter(1e-12),
            ..GivenCurrentConfig::default()
        };

        let Err(GivenCurrentError::MaxIters { residual, iters }) =
            drake().conductor_temperature(amps(1000.0), config)
        else {
            panic!("expected the iteration limit to be reached");
        };

        assert_eq!(iters, 3);
        assert!(residual.value.abs() > 0.0);
    }
}
