//! # Coordinate Math
//!
//! Input validation and degree/DMS conversion.
//!
//! [`Location`] is the validated input triple every calculation starts from.
//! It can only be built through [`Location::new`] (or deserialized, which runs
//! the same checks), so downstream code never re-validates.
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::coordinates::{to_dms, parse_dms, Axis, Location};
//!
//! let jaipur = Location::new(26.9247, 75.8244, 1.0).unwrap();
//! assert_eq!(to_dms(jaipur.latitude(), Axis::Latitude), "26°55'29\"N");
//!
//! let back = parse_dms("26°55'29\"N").unwrap();
//! assert!((back - 26.9247).abs() < 1.0 / 3600.0);
//!
//! assert!(Location::new(91.0, 0.0, 1.0).is_err());
//! ```

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Valid latitudes in degrees (inclusive)
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitudes in degrees (inclusive)
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Valid scale factors (inclusive)
pub const SCALE_RANGE: RangeInclusive<f64> = 0.1..=10.0;

/// Scale used when a caller does not supply one
pub const DEFAULT_SCALE: f64 = 1.0;

/// Check a latitude/longitude/scale triple against the allowed ranges.
///
/// Fields are checked in that order and the first violation is reported.
/// NaN never lies inside a range, so it is rejected as well.
pub fn validate(latitude: f64, longitude: f64, scale: f64) -> CalcResult<()> {
    validate_coordinates(latitude, longitude)?;
    if !SCALE_RANGE.contains(&scale) {
        return Err(CalcError::validation("scale", scale.to_string(), "0.1 to 10.0"));
    }
    Ok(())
}

/// Latitude and longitude checks alone (catalog entries carry no scale).
pub fn validate_coordinates(latitude: f64, longitude: f64) -> CalcResult<()> {
    if !LATITUDE_RANGE.contains(&latitude) {
        return Err(CalcError::validation(
            "latitude",
            latitude.to_string(),
            "-90 to 90 degrees",
        ));
    }
    if !LONGITUDE_RANGE.contains(&longitude) {
        return Err(CalcError::validation(
            "longitude",
            longitude.to_string(),
            "-180 to 180 degrees",
        ));
    }
    Ok(())
}

/// A validated geographic location plus instrument scale factor.
///
/// ## JSON Example
///
/// ```json
/// { "latitude": 26.9247, "longitude": 75.8244, "scale": 1.0 }
/// ```
///
/// `scale` may be omitted on input and defaults to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LocationInput")]
pub struct Location {
    latitude: f64,
    longitude: f64,
    scale: f64,
}

#[derive(Deserialize)]
struct LocationInput {
    latitude: f64,
    longitude: f64,
    #[serde(default = "default_scale")]
    scale: f64,
}

fn default_scale() -> f64 {
    DEFAULT_SCALE
}

impl TryFrom<LocationInput> for Location {
    type Error = CalcError;

    fn try_from(input: LocationInput) -> CalcResult<Self> {
        Location::new(input.latitude, input.longitude, input.scale)
    }
}

impl Location {
    /// Create a location, rejecting any out-of-range field.
    pub fn new(latitude: f64, longitude: f64, scale: f64) -> CalcResult<Self> {
        validate(latitude, longitude, scale)?;
        Ok(Location {
            latitude,
            longitude,
            scale,
        })
    }

    /// Latitude in decimal degrees, north positive
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees, east positive
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Dimensionless instrument scale factor
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

// ============================================================================
// DMS
// ============================================================================

/// Which coordinate an angle belongs to; decides the hemisphere letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn hemisphere(self, negative: bool) -> Hemisphere {
        match (self, negative) {
            (Axis::Latitude, false) => Hemisphere::North,
            (Axis::Latitude, true) => Hemisphere::South,
            (Axis::Longitude, false) => Hemisphere::East,
            (Axis::Longitude, true) => Hemisphere::West,
        }
    }

    fn max_degrees(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }
}

/// Hemisphere suffix of a DMS string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hemisphere {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

impl Hemisphere {
    pub fn as_char(self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
            Hemisphere::East => 'E',
            Hemisphere::West => 'W',
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'N' | 'n' => Some(Hemisphere::North),
            'S' | 's' => Some(Hemisphere::South),
            'E' | 'e' => Some(Hemisphere::East),
            'W' | 'w' => Some(Hemisphere::West),
            _ => None,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Hemisphere::North | Hemisphere::South => Axis::Latitude,
            Hemisphere::East | Hemisphere::West => Axis::Longitude,
        }
    }

    pub fn is_negative(self) -> bool {
        matches!(self, Hemisphere::South | Hemisphere::West)
    }
}

/// Degrees-minutes-seconds representation, canonical after rounding:
/// `minutes` and `seconds` are always below 60.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u8,
    pub seconds: u8,
    pub hemisphere: Hemisphere,
}

impl Dms {
    /// Convert signed decimal degrees, rounding to the nearest arc-second.
    ///
    /// Rounding works on the total arc-second count, so 59.6" rolls into the
    /// next minute (and possibly the next degree) instead of printing 60".
    /// A value that rounds to zero takes the positive hemisphere.
    pub fn from_degrees(decimal_degrees: f64, axis: Axis) -> Self {
        let total_seconds = (decimal_degrees.abs() * 3600.0).round() as u64;
        let negative = decimal_degrees < 0.0 && total_seconds > 0;
        Dms {
            degrees: (total_seconds / 3600) as u32,
            minutes: ((total_seconds % 3600) / 60) as u8,
            seconds: (total_seconds % 60) as u8,
            hemisphere: axis.hemisphere(negative),
        }
    }

    /// Back to signed decimal degrees.
    pub fn to_degrees(&self) -> f64 {
        let magnitude =
            self.degrees as f64 + self.minutes as f64 / 60.0 + self.seconds as f64 / 3600.0;
        if self.hemisphere.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°{}'{}\"{}",
            self.degrees,
            self.minutes,
            self.seconds,
            self.hemisphere.as_char()
        )
    }
}

/// Format signed decimal degrees as a DMS string, e.g. `26°55'29"N`.
pub fn to_dms(decimal_degrees: f64, axis: Axis) -> String {
    Dms::from_degrees(decimal_degrees, axis).to_string()
}

/// Parse a DMS string (as produced by [`to_dms`]) back to signed degrees.
///
/// Seconds may carry a fractional part (`10.8"`). Minutes and seconds must be
/// below 60 and the magnitude must fit the axis implied by the hemisphere.
pub fn parse_dms(text: &str) -> CalcResult<f64> {
    let invalid = || CalcError::validation("dms", text, "D°M'S\" followed by N, S, E or W");

    let trimmed = text.trim();
    let hemisphere = trimmed
        .chars()
        .last()
        .and_then(Hemisphere::from_char)
        .ok_or_else(invalid)?;
    let body = &trimmed[..trimmed.len() - 1];

    let (deg_part, rest) = body.split_once('°').ok_or_else(invalid)?;
    let (min_part, rest) = rest.split_once('\'').ok_or_else(invalid)?;
    let sec_part = rest.strip_suffix('"').ok_or_else(invalid)?;

    let degrees: u32 = deg_part.trim().parse().map_err(|_| invalid())?;
    let minutes: u32 = min_part.trim().parse().map_err(|_| invalid())?;
    let seconds: f64 = sec_part.trim().parse().map_err(|_| invalid())?;

    if minutes >= 60 || !(0.0..60.0).contains(&seconds) {
        return Err(invalid());
    }

    let magnitude = degrees as f64 + minutes as f64 / 60.0 + seconds / 3600.0;
    if magnitude > hemisphere.axis().max_degrees() {
        return Err(invalid());
    }

    Ok(if hemisphere.is_negative() {
        -magnitude
    } else {
        magnitude
    })
}

/// The latitude/longitude pair rendered as DMS strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinatesDms {
    pub latitude_dms: String,
    pub longitude_dms: String,
}

/// DMS strings for a coordinate pair.
pub fn coordinates_dms(latitude: f64, longitude: f64) -> CoordinatesDms {
    CoordinatesDms {
        latitude_dms: to_dms(latitude, Axis::Latitude),
        longitude_dms: to_dms(longitude, Axis::Longitude),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_boundaries_are_valid() {
        assert!(validate(90.0, 180.0, 10.0).is_ok());
        assert!(validate(-90.0, -180.0, 0.1).is_ok());
    }

    #[test]
    fn test_out_of_range_fields_are_named() {
        let err = validate(91.0, 0.0, 1.0).unwrap_err();
        assert_eq!(err.field(), Some("latitude"));

        let err = validate(0.0, -180.5, 1.0).unwrap_err();
        assert_eq!(err.field(), Some("longitude"));

        let err = validate(0.0, 0.0, 0.05).unwrap_err();
        assert_eq!(err.field(), Some("scale"));

        let err = validate(0.0, 0.0, 10.01).unwrap_err();
        assert_eq!(err.field(), Some("scale"));
    }

    #[test]
    fn test_nan_rejected() {
        assert!(Location::new(f64::NAN, 0.0, 1.0).is_err());
        assert!(Location::new(0.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_location_deserialization_validates() {
        let ok: Location = serde_json::from_str(r#"{"latitude": 26.9247, "longitude": 75.8244}"#).unwrap();
        assert_eq!(ok.scale(), DEFAULT_SCALE);

        let bad = serde_json::from_str::<Location>(r#"{"latitude": 91, "longitude": 0, "scale": 1}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_location_serialization() {
        let loc = Location::new(28.6269, 77.2164, 2.0).unwrap();
        let json = serde_json::to_string(&loc).unwrap();
        assert_eq!(json, r#"{"latitude":28.6269,"longitude":77.2164,"scale":2.0}"#);
        let roundtrip: Location = serde_json::from_str(&json).unwrap();
        assert_eq!(loc, roundtrip);
    }

    #[test]
    fn test_jaipur_dms() {
        assert_eq!(to_dms(26.9247, Axis::Latitude), "26°55'29\"N");
        assert_eq!(to_dms(75.8244, Axis::Longitude), "75°49'28\"E");
    }

    #[test]
    fn test_hemisphere_suffixes() {
        assert_eq!(to_dms(-33.8688, Axis::Latitude), "33°52'8\"S");
        assert_eq!(to_dms(-151.2093, Axis::Longitude), "151°12'33\"W");
        assert_eq!(to_dms(0.0, Axis::Latitude), "0°0'0\"N");
        assert_eq!(to_dms(-0.00001, Axis::Longitude), "0°0'0\"E");
    }

    #[test]
    fn test_seconds_carry_into_minutes_and_degrees() {
        // 59.9999° = 59°59'59.64" which rounds up to 60°0'0"
        let dms = Dms::from_degrees(59.9999, Axis::Latitude);
        assert_eq!((dms.degrees, dms.minutes, dms.seconds), (60, 0, 0));
        assert_eq!(dms.to_string(), "60°0'0\"N");

        // 10°29'59.7" rounds into the next minute only
        let dms = Dms::from_degrees(10.0 + 29.0 / 60.0 + 59.7 / 3600.0, Axis::Longitude);
        assert_eq!((dms.degrees, dms.minutes, dms.seconds), (10, 30, 0));
    }

    #[test]
    fn test_parse_dms() {
        assert!((parse_dms("23°51'10.8\"N").unwrap() - 23.853).abs() < 1e-9);
        assert!((parse_dms("33°52'8\"S").unwrap() + 33.868_888_9).abs() < 1e-6);
        assert_eq!(parse_dms(" 0°0'0\"E ").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_dms_rejects_malformed() {
        assert!(parse_dms("").is_err());
        assert!(parse_dms("26°55'29\"").is_err());
        assert!(parse_dms("26°60'0\"N").is_err());
        assert!(parse_dms("26°5'60\"N").is_err());
        assert!(parse_dms("91°0'0\"N").is_err());
        assert!(parse_dms("26 55 29 N").is_err());
    }

    #[test]
    fn test_coordinates_dms() {
        let dms = coordinates_dms(23.1793, 75.7849);
        assert_eq!(dms.latitude_dms, "23°10'45\"N");
        assert_eq!(dms.longitude_dms, "75°47'6\"E");
    }

    proptest! {
        #[test]
        fn prop_dms_roundtrip_within_one_arcsecond(lat in -90.0..=90.0f64, lon in -180.0..=180.0f64) {
            let lat_back = parse_dms(&to_dms(lat, Axis::Latitude)).unwrap();
            let lon_back = parse_dms(&to_dms(lon, Axis::Longitude)).unwrap();
            prop_assert!((lat_back - lat).abs() <= 1.0 / 3600.0);
            prop_assert!((lon_back - lon).abs() <= 1.0 / 3600.0);
        }

        #[test]
        fn prop_dms_is_canonical(deg in -180.0..=180.0f64) {
            let dms = Dms::from_degrees(deg, Axis::Longitude);
            prop_assert!(dms.minutes < 60);
            prop_assert!(dms.seconds < 60);
        }
    }
}
