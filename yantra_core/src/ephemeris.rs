//! # Solar Ephemeris
//!
//! Low-precision solar position formulas, good to a fraction of a degree,
//! which is all instrument layout needs. Everything is a closed-form
//! expression; nothing here allocates or fails except input validation in
//! [`SolarSnapshot::compute`].
//!
//! ## Conventions
//!
//! - Angles are decimal degrees at the API boundary ([`Degrees`]); radians are
//!   used only inside the trig.
//! - Time is local *solar* time in hours, noon = 12.0.
//! - Azimuth is measured clockwise from north.
//! - Inverse-trig arguments are clamped, so polar day/night and other
//!   boundary geometry produce boundary angles rather than NaN.
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::ephemeris::{declination, solstice_extrema};
//!
//! let dec = declination(172); // June 21
//! assert!((dec.value() - 23.44).abs() < 0.1);
//!
//! let (max, min) = solstice_extrema(0.0);
//! assert!((max.value() - 66.56).abs() < 1e-9);
//! assert!((min.value() - 66.56).abs() < 1e-9);
//! ```

use std::f64::consts::PI;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::coordinates::validate_coordinates;
use crate::errors::{CalcError, CalcResult};
use crate::units::{Degrees, Radians};

/// Maximum solar declination used by the declination formula (degrees)
pub const SOLSTICE_DECLINATION: f64 = 23.44;

/// Hour angle advance per hour of solar time
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// June 21
pub const SUMMER_SOLSTICE_DAY: u32 = 172;

/// December 21
pub const WINTER_SOLSTICE_DAY: u32 = 355;

/// March 21
pub const SPRING_EQUINOX_DAY: u32 = 80;

/// Ujjain (Dongla), the prime meridian of classical Indian astronomy
pub const UJJAIN_LATITUDE: f64 = 23.1793;
pub const UJJAIN_LONGITUDE: f64 = 75.7849;

/// Historical Indian standard meridian (degrees east)
pub const UJJAIN_REFERENCE_MERIDIAN: f64 = 75.0;

/// Solar declination for a day of the year.
///
/// `23.44° · sin(2π·(284 + day)/365)`. The formula is periodic, so days
/// outside 1..=366 still return a finite value; [`SolarSnapshot::compute`]
/// is the validated entry point.
pub fn declination(day_of_year: u32) -> Degrees {
    let phase = 2.0 * PI * (284.0 + day_of_year as f64) / 365.0;
    Degrees(SOLSTICE_DECLINATION * phase.sin())
}

/// Equation of time in minutes (apparent minus mean solar time).
pub fn equation_of_time(day_of_year: u32) -> f64 {
    let b = 2.0 * PI * (day_of_year as f64 - 81.0) / 365.0;
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Hour angle for a local solar time: `15° · (t - 12)`.
pub fn hour_angle(local_solar_time: f64) -> Degrees {
    Degrees(DEGREES_PER_HOUR * (local_solar_time - 12.0))
}

/// Solar elevation above the horizon.
///
/// `asin(sin φ · sin δ + cos φ · cos δ · cos h)` with the argument clamped to
/// [-1, 1].
pub fn solar_elevation(latitude: Degrees, declination: Degrees, hour_angle: Degrees) -> Degrees {
    let lat: Radians = latitude.into();
    let dec: Radians = declination.into();
    let h: Radians = hour_angle.into();

    let sin_elevation = lat.sin() * dec.sin() + lat.cos() * dec.cos() * h.cos();
    Radians::asin_clamped(sin_elevation).into()
}

/// Solar azimuth, clockwise from north, for a known elevation.
///
/// Afternoon hour angles (h > 0) are mirrored to `360 - az`. With the sun at
/// the zenith or nadir the azimuth is undefined and 0 is returned.
pub fn solar_azimuth(
    latitude: Degrees,
    declination: Degrees,
    hour_angle: Degrees,
    elevation: Degrees,
) -> Degrees {
    let lat: Radians = latitude.into();
    let dec: Radians = declination.into();
    let h: Radians = hour_angle.into();
    let elev: Radians = elevation.into();

    let cos_elevation = elev.cos();
    if cos_elevation.abs() < 1e-12 {
        return Degrees(0.0);
    }

    let cos_azimuth = (dec.sin() * lat.cos() - dec.cos() * lat.sin() * h.cos()) / cos_elevation;
    let azimuth: Degrees = Radians::acos_clamped(cos_azimuth).into();

    if hour_angle.value() > 0.0 {
        Degrees(360.0) - azimuth
    } else {
        azimuth
    }
}

/// Noon solar elevation at both solstices: `(max_sun_elevation, min_sun_elevation)`.
///
/// Evaluated at hour angle 0 with declination +23.44° and -23.44°. The
/// larger of the two is reported as the maximum, so the pair reads the same
/// way in both hemispheres (in the south the December solstice is the high
/// one).
pub fn solstice_extrema(latitude: f64) -> (Degrees, Degrees) {
    let noon = Degrees(0.0);
    let june = solar_elevation(Degrees(latitude), Degrees(SOLSTICE_DECLINATION), noon);
    let december = solar_elevation(Degrees(latitude), Degrees(-SOLSTICE_DECLINATION), noon);

    if june >= december {
        (june, december)
    } else {
        (december, june)
    }
}

/// Sunrise and sunset in local solar hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunriseSunset {
    pub sunrise: f64,
    pub sunset: f64,
}

impl SunriseSunset {
    pub fn daylight_hours(&self) -> f64 {
        self.sunset - self.sunrise
    }
}

/// Sunrise/sunset for a latitude and day.
///
/// Polar day returns (0, 24) and polar night (12, 12), i.e. 24 and 0 hours of
/// daylight.
pub fn sunrise_sunset(latitude: f64, day_of_year: u32) -> SunriseSunset {
    let lat: Radians = Degrees(latitude).into();
    let dec: Radians = declination(day_of_year).into();

    let cos_hour_angle = -lat.tan() * dec.tan();
    if cos_hour_angle < -1.0 {
        return SunriseSunset {
            sunrise: 0.0,
            sunset: 24.0,
        };
    }
    if cos_hour_angle > 1.0 {
        return SunriseSunset {
            sunrise: 12.0,
            sunset: 12.0,
        };
    }

    let half_day: Degrees = Radians(cos_hour_angle.acos()).into();
    let hours = half_day.value() / DEGREES_PER_HOUR;
    SunriseSunset {
        sunrise: 12.0 - hours,
        sunset: 12.0 + hours,
    }
}

/// Day of year (1 = January 1) for a calendar date.
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Convert local solar time at `longitude` to the Ujjain meridian.
pub fn to_ujjain_time(longitude: f64, local_time: f64) -> f64 {
    local_time - (longitude - UJJAIN_LONGITUDE) / DEGREES_PER_HOUR
}

/// Full set of solar coordinates for one location, day and time.
///
/// ## JSON Example
///
/// ```json
/// {
///   "latitude": 26.9247,
///   "longitude": 75.8244,
///   "day_of_year": 172,
///   "local_solar_time": 12.0,
///   "solar_declination": 23.44,
///   "equation_of_time": -1.4,
///   "hour_angle": 0.0,
///   "solar_elevation": 86.5,
///   "solar_azimuth": 0.0,
///   "sunrise_time": 5.1,
///   "sunset_time": 18.9,
///   "daylight_hours": 13.8
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarSnapshot {
    pub latitude: f64,
    pub longitude: f64,
    pub day_of_year: u32,
    pub local_solar_time: f64,
    /// Degrees
    pub solar_declination: f64,
    /// Minutes
    pub equation_of_time: f64,
    /// Degrees
    pub hour_angle: f64,
    /// Degrees above the horizon
    pub solar_elevation: f64,
    /// Degrees clockwise from north
    pub solar_azimuth: f64,
    /// Local solar hours
    pub sunrise_time: f64,
    /// Local solar hours
    pub sunset_time: f64,
    pub daylight_hours: f64,
}

impl SolarSnapshot {
    /// Compute the snapshot, validating every input.
    pub fn compute(latitude: f64, longitude: f64, day_of_year: u32, local_solar_time: f64) -> CalcResult<Self> {
        validate_coordinates(latitude, longitude)?;
        if !(1..=366).contains(&day_of_year) {
            return Err(CalcError::validation("day_of_year", day_of_year.to_string(), "1 to 366"));
        }
        if !(0.0..=24.0).contains(&local_solar_time) {
            return Err(CalcError::validation(
                "local_solar_time",
                local_solar_time.to_string(),
                "0 to 24 hours",
            ));
        }

        let dec = declination(day_of_year);
        let h = hour_angle(local_solar_time);
        let elevation = solar_elevation(Degrees(latitude), dec, h);
        let azimuth = solar_azimuth(Degrees(latitude), dec, h, elevation);
        let sun = sunrise_sunset(latitude, day_of_year);

        Ok(SolarSnapshot {
            latitude,
            longitude,
            day_of_year,
            local_solar_time,
            solar_declination: dec.value(),
            equation_of_time: equation_of_time(day_of_year),
            hour_angle: h.value(),
            solar_elevation: elevation.value(),
            solar_azimuth: azimuth.value(),
            sunrise_time: sun.sunrise,
            sunset_time: sun.sunset,
            daylight_hours: sun.daylight_hours(),
        })
    }
}
