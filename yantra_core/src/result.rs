//! # Calculation Results
//!
//! The `calculate` entry point: every yantra archetype for one location plus
//! an astronomical site analysis, assembled into a single serializable
//! [`CalculationResult`].
//!
//! Results are a pure function of the input triple. Any archetype failure
//! fails the whole call; there are no partial results.
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::coordinates::Location;
//! use yantra_core::result::calculate;
//! use yantra_core::yantras::YantraType;
//!
//! let location = Location::new(26.9247, 75.8244, 1.0).unwrap();
//! let result = calculate(&location).unwrap();
//!
//! assert_eq!(result.yantras.len(), 4);
//! assert_eq!(result.yantras[&YantraType::Samrat].dimension("gnomon_height"), Some(27.4));
//! assert_eq!(result.site_analysis.coordinates_dms.latitude_dms, "26°55'29\"N");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::coordinates::{coordinates_dms, CoordinatesDms, Location};
use crate::ephemeris::{
    solstice_extrema, SolarSnapshot, SPRING_EQUINOX_DAY, SUMMER_SOLSTICE_DAY, WINTER_SOLSTICE_DAY,
};
use crate::errors::CalcResult;
use crate::sites::{HistoricalSite, SiteCatalog};
use crate::yantras::{calculate_all, YantraSpec, YantraType};

const SOLAR_NOON: f64 = 12.0;

/// Sun-path summary for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AstronomicalSummary {
    /// Higher of the two solstice noon elevations, degrees (the June
    /// solstice in the north, the December solstice in the south)
    pub max_sun_elevation: f64,
    /// Lower of the two solstice noon elevations, degrees
    pub min_sun_elevation: f64,
    pub coordinates_dms: CoordinatesDms,
    /// Noon on day 172 (June solstice)
    pub summer_solstice: SolarSnapshot,
    /// Noon on day 355 (December solstice)
    pub winter_solstice: SolarSnapshot,
    /// Noon on day 80
    pub spring_equinox: SolarSnapshot,
}

impl AstronomicalSummary {
    fn compute(latitude: f64, longitude: f64) -> CalcResult<Self> {
        let (max_elev, min_elev) = solstice_extrema(latitude);
        let noon = |day| SolarSnapshot::compute(latitude, longitude, day, SOLAR_NOON);

        Ok(AstronomicalSummary {
            max_sun_elevation: max_elev.value(),
            min_sun_elevation: min_elev.value(),
            coordinates_dms: coordinates_dms(latitude, longitude),
            summer_solstice: noon(SUMMER_SOLSTICE_DAY)?,
            winter_solstice: noon(WINTER_SOLSTICE_DAY)?,
            spring_equinox: noon(SPRING_EQUINOX_DAY)?,
        })
    }
}

/// General siting guidance that applies to every location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionConsiderations {
    pub magnetic_declination: String,
    pub foundation_requirements: String,
    pub alignment_precision: String,
    pub material_weathering: String,
}

impl Default for ConstructionConsiderations {
    fn default() -> Self {
        ConstructionConsiderations {
            magnetic_declination: "Requires local survey".to_string(),
            foundation_requirements: "Stable, level stone foundation".to_string(),
            alignment_precision: "±1 arc-minute for optimal accuracy".to_string(),
            material_weathering: "Consider local climate conditions".to_string(),
        }
    }
}

/// Location-level analysis accompanying the yantra specifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteAnalysis {
    pub location: Location,
    pub coordinates_dms: CoordinatesDms,
    pub astronomical_data: AstronomicalSummary,
    pub construction_considerations: ConstructionConsiderations,
}

/// Everything computed for one location.
///
/// `yantras` serializes as an object keyed by lower-case archetype name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub location: Location,
    pub yantras: BTreeMap<YantraType, YantraSpec>,
    pub site_analysis: SiteAnalysis,
}

/// Compute all yantras and the site analysis for a validated location.
///
/// # Errors
///
/// [`CalcError::GeometryUndefined`](crate::errors::CalcError::GeometryUndefined)
/// when the latitude is on the equator.
pub fn calculate(location: &Location) -> CalcResult<CalculationResult> {
    let (latitude, longitude) = (location.latitude(), location.longitude());
    tracing::debug!(latitude, longitude, scale = location.scale(), "calculating yantras");

    let yantras = calculate_all(latitude, location.scale())?;
    let astronomical_data = AstronomicalSummary::compute(latitude, longitude)?;

    Ok(CalculationResult {
        location: *location,
        yantras,
        site_analysis: SiteAnalysis {
            location: *location,
            coordinates_dms: astronomical_data.coordinates_dms.clone(),
            astronomical_data,
            construction_considerations: ConstructionConsiderations::default(),
        },
    })
}

/// Validate a raw triple, then [`calculate`].
///
/// # Errors
///
/// [`CalcError::Validation`](crate::errors::CalcError::Validation) naming the
/// first out-of-range field, or any error from [`calculate`].
pub fn calculate_raw(latitude: f64, longitude: f64, scale: f64) -> CalcResult<CalculationResult> {
    calculate(&Location::new(latitude, longitude, scale)?)
}

/// A catalog site together with its calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteDetails {
    pub site: HistoricalSite,
    pub result: CalculationResult,
}

/// Resolve one catalog site and calculate it at `scale`.
pub fn site_details(catalog: &SiteCatalog, name: &str, scale: f64) -> CalcResult<SiteDetails> {
    let site = catalog.resolve(name)?;
    let location = Location::new(site.latitude, site.longitude, scale)?;
    Ok(SiteDetails {
        site: site.clone(),
        result: calculate(&location)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    #[test]
    fn test_all_archetypes_present() {
        let result = calculate_raw(26.9247, 75.8244, 1.0).unwrap();
        let keys: Vec<YantraType> = result.yantras.keys().copied().collect();
        assert_eq!(keys, YantraType::ALL.to_vec());
    }

    #[test]
    fn test_idempotent() {
        let location = Location::new(-33.8688, 151.2093, 2.5).unwrap();
        let a = serde_json::to_string(&calculate(&location).unwrap()).unwrap();
        let b = serde_json::to_string(&calculate(&location).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_latitude_out_of_range() {
        let err = calculate_raw(91.0, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, CalcError::Validation { .. }));
        assert_eq!(err.field(), Some("latitude"));
    }

    #[test]
    fn test_scale_out_of_range() {
        let err = calculate_raw(26.9, 75.8, 0.05).unwrap_err();
        assert_eq!(err.field(), Some("scale"));
    }

    #[test]
    fn test_equator_fails_without_partial_result() {
        let err = calculate_raw(0.0, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, CalcError::GeometryUndefined { .. }));
    }

    #[test]
    fn test_site_analysis() {
        let result = calculate_raw(26.9247, 75.8244, 1.0).unwrap();
        let analysis = &result.site_analysis;
        assert_eq!(analysis.coordinates_dms.longitude_dms, "75°49'28\"E");
        assert_eq!(analysis.location, result.location);

        let astro = &analysis.astronomical_data;
        assert!((astro.max_sun_elevation - 86.5153).abs() < 1e-3);
        assert!((astro.min_sun_elevation - 39.6353).abs() < 1e-3);
        assert!(astro.summer_solstice.daylight_hours > astro.winter_solstice.daylight_hours);
        assert_eq!(astro.spring_equinox.day_of_year, 80);
        assert_eq!(astro.summer_solstice.local_solar_time, 12.0);
    }

    #[test]
    fn test_southern_extrema_follow_december_solstice() {
        let result = calculate_raw(-33.8688, 151.2093, 1.0).unwrap();
        let astro = &result.site_analysis.astronomical_data;
        assert!((astro.max_sun_elevation - astro.winter_solstice.solar_elevation).abs() < 0.1);
        assert!((astro.min_sun_elevation - astro.summer_solstice.solar_elevation).abs() < 0.1);
        assert!(astro.max_sun_elevation > astro.min_sun_elevation);
    }

    #[test]
    fn test_json_shape() {
        let result = calculate_raw(28.6269, 77.2164, 1.0).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["location"]["scale"], 1.0);
        assert_eq!(json["yantras"]["samrat"]["name"], "Samrat Yantra");
        assert_eq!(json["yantras"]["dhruva"]["angles"]["pole_inclination_angle"], 28.6269);
        assert_eq!(
            json["site_analysis"]["construction_considerations"]["alignment_precision"],
            "±1 arc-minute for optimal accuracy"
        );
    }

    #[test]
    fn test_site_details() {
        let details = site_details(SiteCatalog::builtin(), "Varanasi", 0.5).unwrap();
        assert_eq!(details.site.display_name, "Jantar Mantar, Varanasi");
        assert_eq!(details.result.location.scale(), 0.5);
        assert_eq!(
            details.result.yantras[&YantraType::Samrat].dimension("gnomon_height"),
            Some(13.7)
        );
    }

    #[test]
    fn test_site_details_unknown() {
        let err = site_details(SiteCatalog::builtin(), "Atlantis", 1.0).unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_SITE");
    }
}
