//! Sun position and incident solar heat intensity.
//!
//! All angles are degrees at the API boundary (held as [`Angle`]) and
//! converted to radians only for trigonometric evaluation. The solar time is
//! the local clock hour: there is no longitude or equation-of-time correction.

use std::f64::consts::PI;

use jiff::civil::DateTime;
use thiserror::Error;
use uom::si::{
    angle::{degree, radian},
    f64::{Angle, HeatFluxDensity, Length},
    heat_flux_density::watt_per_square_meter,
    length::meter,
};

use super::state::{Atmosphere, ConductorState};

/// Errors raised while locating the sun.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SolarError {
    /// The azimuth quadrant correction has no case for these inputs.
    ///
    /// Occurs when the hour angle lies outside `[-180°, 180°)` or an input
    /// angle is not a number.
    #[error("no azimuth quadrant for hour_angle={hour_angle:?}, x={x}")]
    AzimuthQuadrant { hour_angle: Angle, x: f64 },
}

/// Position of the sun at one date, time, and latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    pub declination: Angle,
    pub hour_angle: Angle,
    pub altitude: Angle,
    pub azimuth: Angle,
}

impl SolarPosition {
    /// Locates the sun.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::AzimuthQuadrant`] if the azimuth cannot be resolved.
    pub fn new(date: DateTime, latitude: Angle) -> Result<Self, SolarError> {
        let declination = declination(day_of_year(date));
        let hour_angle = hour_angle(date);
        Ok(Self {
            declination,
            hour_angle,
            altitude: altitude(latitude, declination, hour_angle),
            azimuth: azimuth(latitude, declination, hour_angle)?,
        })
    }
}

/// Day of the year, starting at 1 on January 1.
#[must_use]
pub fn day_of_year(date: DateTime) -> i16 {
    date.day_of_year()
}

/// Solar declination for a day of the year.
#[must_use]
pub fn declination(day_of_year: i16) -> Angle {
    let phase = 360.0 * (284.0 + f64::from(day_of_year)) / 365.0;
    Angle::new::<degree>(23.45 * phase.to_radians().sin())
}

/// Hour angle from the local clock hour, 15° per hour from noon.
#[must_use]
pub fn hour_angle(date: DateTime) -> Angle {
    Angle::new::<degree>((f64::from(date.hour()) - 12.0) * 15.0)
}

/// Solar altitude above the horizon.
#[must_use]
pub fn altitude(latitude: Angle, declination: Angle, hour_angle: Angle) -> Angle {
    let lat = latitude.get::<radian>();
    let dec = declination.get::<radian>();
    let w = hour_angle.get::<radian>();

    let sin_altitude = lat.cos() * dec.cos() * w.cos() + lat.sin() * dec.sin();
    Angle::new::<radian>(sin_altitude.clamp(-1.0, 1.0).asin())
}

/// Solar azimuth, measured clockwise from north.
///
/// # Errors
///
/// Returns [`SolarError::AzimuthQuadrant`] if the hour angle is outside
/// `[-180°, 180°)` or an input angle is not a number.
#[allow(clippy::float_cmp)]
pub fn azimuth(latitude: Angle, declination: Angle, hour_angle: Angle) -> Result<Angle, SolarError> {
    let lat = latitude.get::<radian>();
    let dec = declination.get::<radian>();
    let w = hour_angle.get::<radian>();

    // On the meridian `X` is zero, including a sun at the zenith where the
    // denominator vanishes too.
    let sin_w = w.sin();
    let x = if sin_w == 0.0 {
        0.0
    } else {
        sin_w / (lat.sin() * w.cos() - lat.cos() * dec.tan())
    };

    let quadrant = XSign::of(x)
        .zip(HourHalf::of(w))
        .ok_or(SolarError::AzimuthQuadrant { hour_angle, x })?;

    Ok(Angle::new::<degree>(
        azimuth_constant(quadrant) + x.atan().to_degrees(),
    ))
}

/// Sign of the azimuth variable `X`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum XSign {
    NonNegative,
    Negative,
}

impl XSign {
    fn of(x: f64) -> Option<Self> {
        match x.partial_cmp(&0.0)? {
            std::cmp::Ordering::Less => Some(Self::Negative),
            _ => Some(Self::NonNegative),
        }
    }
}

/// Half of the hour angle range, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HourHalf {
    /// `-180° ≤ ω < 0°`
    Morning,
    /// `0° ≤ ω < 180°`
    Afternoon,
}

impl HourHalf {
    fn of(w: f64) -> Option<Self> {
        if (-PI..0.0).contains(&w) {
            Some(Self::Morning)
        } else if (0.0..PI).contains(&w) {
            Some(Self::Afternoon)
        } else {
            None
        }
    }
}

/// Azimuth constant `C`, in degrees.
fn azimuth_constant(quadrant: (XSign, HourHalf)) -> f64 {
    match quadrant {
        (XSign::NonNegative, HourHalf::Morning) => 0.0,
        (XSign::NonNegative, HourHalf::Afternoon) | (XSign::Negative, HourHalf::Morning) => 180.0,
        (XSign::Negative, HourHalf::Afternoon) => 360.0,
    }
}

/// Coefficients `A` through `G` of the sea-level intensity polynomial in altitude (degrees).
fn intensity_coefficients(atmosphere: Atmosphere) -> [f64; 7] {
    match atmosphere {
        Atmosphere::Clear => [
            -42.2391,
            63.8044,
            -1.9220,
            3.46921e-2,
            -3.61118e-4,
            1.94318e-6,
            -4.07608e-9,
        ],
        Atmosphere::Industrial => [
            53.1821,
            14.2110,
            6.6138e-1,
            -3.1658e-2,
            5.4654e-4,
            -4.3446e-6,
            1.3236e-8,
        ],
    }
}

/// Total solar and sky radiated heat intensity at sea level.
///
/// The clear-sky fit dips below zero just above the horizon; the result is
/// never negative.
#[must_use]
pub fn intensity_at_sea_level(altitude: Angle, atmosphere: Atmosphere) -> HeatFluxDensity {
    let h = altitude.get::<degree>();
    let q = intensity_coefficients(atmosphere)
        .iter()
        .rev()
        .fold(0.0, |acc, c| acc * h + c);
    HeatFluxDensity::new::<watt_per_square_meter>(q.max(0.0))
}

/// Multiplier applied to sea-level intensity for the conductor elevation.
#[must_use]
pub fn elevation_correction_factor(elevation: Length) -> f64 {
    let z = elevation.get::<meter>();
    1.0 + 1.148e-4 * z - 1.108e-8 * z * z
}

/// Solar views of the state.
impl ConductorState {
    #[must_use]
    pub fn day_of_year(&self) -> i16 {
        day_of_year(self.solar.date)
    }

    #[must_use]
    pub fn solar_declination(&self) -> Angle {
        declination(self.day_of_year())
    }

    #[must_use]
    pub fn hour_angle(&self) -> Angle {
        hour_angle(self.solar.date)
    }

    #[must_use]
    pub fn solar_altitude(&self) -> Angle {
        altitude(
            self.solar.latitude,
            self.solar_declination(),
            self.hour_angle(),
        )
    }

    /// # Errors
    ///
    /// Returns [`SolarError::AzimuthQuadrant`] if the azimuth cannot be resolved.
    pub fn solar_azimuth(&self) -> Result<Angle, SolarError> {
        azimuth(
            self.solar.latitude,
            self.solar_declination(),
            self.hour_angle(),
        )
    }

    /// # Errors
    ///
    /// Returns [`SolarError::AzimuthQuadrant`] if the azimuth cannot be resolved.
    pub fn solar_position(&self) -> Result<SolarPosition, SolarError> {
        SolarPosition::new(self.solar.date, self.solar.latitude)
    }

    #[must_use]
    pub fn solar_heat_intensity_at_sea_level(&self) -> HeatFluxDensity {
        intensity_at_sea_level(self.solar_altitude(), self.weather.atmosphere)
    }

    #[must_use]
    pub fn elevation_correction_factor(&self) -> f64 {
        elevation_correction_factor(self.weather.elevation)
    }

    /// Solar and sky heat intensity corrected for elevation.
    #[must_use]
    pub fn solar_heat_intensity(&self) -> HeatFluxDensity {
        self.solar_heat_intensity_at_sea_level() * self.elevation_correction_factor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use jiff::civil::datetime;

    use crate::models::thermal::conductor::core::test_support::drake;

    fn deg(value: f64) -> Angle {
        Angle::new::<degree>(value)
    }

    #[test]
    fn drake_scenario_sun() {
        let state = drake();

        assert_eq!(state.day_of_year(), 161);
        assert_relative_eq!(state.solar_declination().get::<degree>(), 23.01, epsilon = 0.01);
        assert_relative_eq!(state.hour_angle().get::<degree>(), -15.0, epsilon = 1e-9);
        assert_relative_eq!(state.solar_altitude().get::<degree>(), 74.9, epsilon = 0.1);
        assert_relative_eq!(
            state.solar_azimuth().unwrap().get::<degree>(),
            114.0,
            epsilon = 1.0
        );
        assert_relative_eq!(
            state.solar_heat_intensity().get::<watt_per_square_meter>(),
            1027.0,
            epsilon = 1.0
        );
    }

    #[test]
    fn position_bundle_matches_views() {
        let state = drake();
        let position = state.solar_position().unwrap();

        assert_eq!(position.altitude, state.solar_altitude());
        assert_eq!(position.azimuth, state.solar_azimuth().unwrap());
        assert_eq!(position.declination, state.solar_declination());
    }

    #[test]
    fn day_of_year_counts_from_january_first() {
        assert_eq!(day_of_year(datetime(2023, 1, 1, 23, 0, 0, 0)), 1);
        assert_eq!(day_of_year(datetime(2023, 12, 31, 0, 0, 0, 0)), 365);
        assert_eq!(day_of_year(datetime(2024, 12, 31, 0, 0, 0, 0)), 366);
    }

    #[test]
    fn hour_angle_uses_clock_hour_only() {
        assert_relative_eq!(
            hour_angle(datetime(2023, 6, 10, 11, 59, 59, 0)).get::<degree>(),
            -15.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            hour_angle(datetime(2023, 6, 10, 0, 0, 0, 0)).get::<degree>(),
            -180.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn azimuth_quadrants() {
        let lat = deg(30.0);
        let dec = deg(23.0);

        // Morning sun in the east, afternoon sun in the west.
        let morning = azimuth(lat, dec, deg(-45.0)).unwrap().get::<degree>();
        let afternoon = azimuth(lat, dec, deg(45.0)).unwrap().get::<degree>();
        assert!((0.0..180.0).contains(&morning));
        assert!((180.0..360.0).contains(&afternoon));
        assert_relative_eq!(morning + afternoon, 360.0, epsilon = 1e-9);

        // Midnight opens the morning half of the range.
        assert!(azimuth(lat, dec, deg(-180.0)).is_ok());
    }

    #[test]
    fn azimuth_outside_hour_range_is_an_error() {
        let lat = deg(30.0);
        let dec = deg(23.0);

        assert!(matches!(
            azimuth(lat, dec, deg(180.0)),
            Err(SolarError::AzimuthQuadrant { .. })
        ));
        assert!(matches!(
            azimuth(lat, dec, deg(-200.0)),
            Err(SolarError::AzimuthQuadrant { .. })
        ));
    }

    #[test]
    fn industrial_atmosphere_is_dimmer_at_high_sun() {
        let clear = intensity_at_sea_level(deg(75.0), Atmosphere::Clear);
        let industrial = intensity_at_sea_level(deg(75.0), Atmosphere::Industrial);
        assert!(industrial < clear);
    }

    #[test]
    fn sea_level_intensity_values() {
        let at = |altitude: f64, atmosphere| {
            intensity_at_sea_level(deg(altitude), atmosphere).get::<watt_per_square_meter>()
        };

        assert_relative_eq!(at(30.0, Atmosphere::Clear), 830.52, epsilon = 0.01);
        assert_relative_eq!(at(75.0, Atmosphere::Clear), 1027.37, epsilon = 0.01);
        assert_relative_eq!(at(0.5, Atmosphere::Industrial), 60.45, epsilon = 0.01);
        assert_relative_eq!(at(30.0, Atmosphere::Industrial), 566.76, epsilon = 0.01);
        assert_relative_eq!(at(75.0, Atmosphere::Industrial), 822.20, epsilon = 0.01);
    }

    #[test]
    fn intensity_is_never_negative_near_the_horizon() {
        assert_relative_eq!(
            intensity_at_sea_level(deg(0.5), Atmosphere::Clear).get::<watt_per_square_meter>(),
            0.0
        );

        let mut state = drake();
        state.solar.latitude = deg(85.0);
        state.solar.date = datetime(2023, 12, 21, 12, 0, 0, 0);
        assert!(state.solar_altitude().get::<degree>() < 0.0);
        assert!(state.solar_heat_intensity().get::<watt_per_square_meter>() >= 0.0);
    }

    #[test]
    fn sun_at_the_zenith() {
        let lat = deg(23.0);
        assert_relative_eq!(
            azimuth(lat, lat, deg(0.0)).unwrap().get::<degree>(),
            180.0,
            epsilon = 1e-9
        );

        let mut state = drake();
        state.solar.date = datetime(2023, 6, 10, 12, 0, 0, 0);
        state.solar.latitude = state.solar_declination();

        assert_relative_eq!(state.solar_altitude().get::<degree>(), 90.0, epsilon = 1e-5);
        assert!(state.solar_position().is_ok());

        // Overhead sun strikes the full projected width.
        let expected = 0.8
            * state.solar_heat_intensity().get::<watt_per_square_meter>()
            * state.diameter().get::<meter>();
        assert_relative_eq!(state.solar_heat_gain().unwrap().value, expected, epsilon = 1e-6);
        assert!(state.ampacity().is_ok());
    }

    #[test]
    fn elevation_raises_intensity() {
        assert_relative_eq!(elevation_correction_factor(Length::new::<meter>(0.0)), 1.0);
        let factor = elevation_correction_factor(Length::new::<meter>(1000.0));
        assert_relative_eq!(factor, 1.0 + 0.1148 - 0.01108, epsilon = 1e-12);

        let mut state = drake();
        let sea_level = state.solar_heat_intensity();
        state.weather.elevation = Length::new::<meter>(1000.0);
        assert!(state.solar_heat_intensity() > sea_level);
    }
}
