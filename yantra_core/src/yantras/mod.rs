//! # Yantra Geometry
//!
//! One geometry function per instrument archetype. Each follows the pattern:
//!
//! - base linear dimensions declared in meters at scale 1, multiplied by the
//!   scale factor
//! - angles that are either design constants or a direct function of latitude
//! - a fixed materials list and construction notes describing the archetype
//!
//! `calculate(latitude, scale)` in each submodule is pure: identical inputs
//! give identical output.
//!
//! ## Available Archetypes
//!
//! - [`samrat`] - Equatorial sundial (gnomon inclined at the latitude)
//! - [`rama`] - Altitude-azimuth cylinder
//! - [`digamsa`] - Azimuth-finding platform
//! - [`dhruva`] - Polar alignment instrument
//!
//! ## Unit convention
//!
//! Presentation code infers units from dimension key names rather than an
//! explicit unit field; [`DimensionUnit::from_key`] is the single source of
//! that rule.
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::yantras::YantraType;
//!
//! let samrat = YantraType::Samrat.spec(26.9247, 1.0).unwrap();
//! assert_eq!(samrat.angle("gnomon_angle"), Some(26.9247));
//! assert_eq!(samrat.dimension("gnomon_height"), Some(27.4));
//! ```

pub mod dhruva;
pub mod digamsa;
pub mod rama;
pub mod samrat;

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{Degrees, Meters};

/// The closed set of instrument archetypes.
///
/// Adding an archetype means adding a variant here and an arm in
/// [`YantraType::spec`]; the compiler flags every other match that needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YantraType {
    Samrat,
    Rama,
    Digamsa,
    Dhruva,
}

impl YantraType {
    /// Every archetype, in display order
    pub const ALL: [YantraType; 4] = [
        YantraType::Samrat,
        YantraType::Rama,
        YantraType::Digamsa,
        YantraType::Dhruva,
    ];

    /// Lower-case identifier used in JSON keys
    pub fn as_str(self) -> &'static str {
        match self {
            YantraType::Samrat => "samrat",
            YantraType::Rama => "rama",
            YantraType::Digamsa => "digamsa",
            YantraType::Dhruva => "dhruva",
        }
    }

    /// Compute this archetype's specification.
    pub fn spec(self, latitude: f64, scale: f64) -> CalcResult<YantraSpec> {
        match self {
            YantraType::Samrat => samrat::calculate(latitude, scale),
            YantraType::Rama => Ok(rama::calculate(latitude, scale)),
            YantraType::Digamsa => Ok(digamsa::calculate(latitude, scale)),
            YantraType::Dhruva => Ok(dhruva::calculate(latitude, scale)),
        }
    }
}

impl fmt::Display for YantraType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for YantraType {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        YantraType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::validation("yantra", s, "samrat, rama, digamsa or dhruva"))
    }
}

/// Compute every archetype. Fails as a whole if any archetype fails.
pub fn calculate_all(latitude: f64, scale: f64) -> CalcResult<BTreeMap<YantraType, YantraSpec>> {
    YantraType::ALL
        .into_iter()
        .map(|yantra| Ok((yantra, yantra.spec(latitude, scale)?)))
        .collect()
}

/// Unit of a dimension value, inferred from its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DimensionUnit {
    Meters,
    Degrees,
    Count,
}

impl DimensionUnit {
    /// Keys containing "angle" or "inclination" are degrees, keys containing
    /// "count" or "divisions" are unitless integers, everything else is meters.
    pub fn from_key(key: &str) -> Self {
        if key.contains("angle") || key.contains("inclination") {
            DimensionUnit::Degrees
        } else if key.contains("count") || key.contains("divisions") {
            DimensionUnit::Count
        } else {
            DimensionUnit::Meters
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            DimensionUnit::Meters => "m",
            DimensionUnit::Degrees => "°",
            DimensionUnit::Count => "",
        }
    }
}

/// Construction specification for one instrument at one location and scale.
///
/// ## JSON Example (abridged)
///
/// ```json
/// {
///   "name": "Samrat Yantra",
///   "description": "Giant sundial and primary timekeeping instrument",
///   "dimensions": { "gnomon_height": 27.4, "hour_markings_count": 24.0 },
///   "angles": { "gnomon_angle": 26.9247 },
///   "materials": ["Red sandstone (traditional)"],
///   "construction_notes": "The Samrat Yantra must be precisely aligned to true north. ..."
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YantraSpec {
    /// Display name
    pub name: String,

    /// One-line description of the instrument's purpose
    pub description: String,

    /// Dimension key -> value; see [`DimensionUnit::from_key`] for units.
    /// Every value is strictly positive.
    pub dimensions: BTreeMap<String, f64>,

    /// Angle key -> degrees
    pub angles: BTreeMap<String, f64>,

    /// Traditional and modern materials
    pub materials: Vec<String>,

    /// Free-text construction guidance for the archetype
    pub construction_notes: String,
}

impl YantraSpec {
    pub(crate) fn builder(name: &str, description: &str) -> SpecBuilder {
        SpecBuilder {
            spec: YantraSpec {
                name: name.to_string(),
                description: description.to_string(),
                dimensions: BTreeMap::new(),
                angles: BTreeMap::new(),
                materials: Vec::new(),
                construction_notes: String::new(),
            },
        }
    }

    /// Look up a dimension by key
    pub fn dimension(&self, key: &str) -> Option<f64> {
        self.dimensions.get(key).copied()
    }

    /// Look up an angle by key
    pub fn angle(&self, key: &str) -> Option<f64> {
        self.angles.get(key).copied()
    }

    /// Dimensions paired with their inferred unit
    pub fn dimensions_with_units(&self) -> impl Iterator<Item = (&str, f64, DimensionUnit)> + '_ {
        self.dimensions
            .iter()
            .map(|(key, value)| (key.as_str(), *value, DimensionUnit::from_key(key)))
    }
}

/// Assembles a [`YantraSpec`], checking each key against the unit convention.
pub(crate) struct SpecBuilder {
    spec: YantraSpec,
}

impl SpecBuilder {
    pub(crate) fn length(mut self, key: &str, value: Meters) -> Self {
        debug_assert_eq!(DimensionUnit::from_key(key), DimensionUnit::Meters, "{key}");
        self.spec.dimensions.insert(key.to_string(), value.value());
        self
    }

    pub(crate) fn count(mut self, key: &str, value: u32) -> Self {
        debug_assert_eq!(DimensionUnit::from_key(key), DimensionUnit::Count, "{key}");
        self.spec.dimensions.insert(key.to_string(), f64::from(value));
        self
    }

    pub(crate) fn angle(mut self, key: &str, value: Degrees) -> Self {
        self.spec.angles.insert(key.to_string(), value.value());
        self
    }

    pub(crate) fn materials(mut self, materials: &[&str]) -> Self {
        self.spec.materials = materials.iter().map(|m| m.to_string()).collect();
        self
    }

    pub(crate) fn notes(mut self, notes: &str) -> Self {
        self.spec.construction_notes = notes.to_string();
        self
    }

    pub(crate) fn build(self) -> YantraSpec {
        self.spec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_unit_inference() {
        assert_eq!(DimensionUnit::from_key("gnomon_angle"), DimensionUnit::Degrees);
        assert_eq!(DimensionUnit::from_key("pole_inclination_angle"), DimensionUnit::Degrees);
        assert_eq!(DimensionUnit::from_key("gnomon_inclination"), DimensionUnit::Degrees);
        assert_eq!(DimensionUnit::from_key("hour_markings_count"), DimensionUnit::Count);
        assert_eq!(DimensionUnit::from_key("radial_divisions"), DimensionUnit::Count);
        assert_eq!(DimensionUnit::from_key("base_radius"), DimensionUnit::Meters);
    }

    #[test]
    fn test_all_types_calculated() {
        let all = calculate_all(26.9247, 1.0).unwrap();
        assert_eq!(all.len(), 4);
        for yantra in YantraType::ALL {
            assert!(all.contains_key(&yantra), "missing {}", yantra);
        }
    }

    #[test]
    fn test_equator_fails_as_a_whole() {
        let err = calculate_all(0.0, 1.0).unwrap_err();
        assert_eq!(err.error_code(), "GEOMETRY_UNDEFINED");
    }

    #[test]
    fn test_yantra_type_parsing() {
        assert_eq!("samrat".parse::<YantraType>().unwrap(), YantraType::Samrat);
        assert_eq!("Dhruva".parse::<YantraType>().unwrap(), YantraType::Dhruva);
        assert!("jai_prakash".parse::<YantraType>().is_err());
    }

    #[test]
    fn test_yantra_type_serialization() {
        let json = serde_json::to_string(&YantraType::Digamsa).unwrap();
        assert_eq!(json, "\"digamsa\"");
    }

    #[test]
    fn test_counts_are_whole_and_lengths_positive() {
        for spec in calculate_all(-33.8688, 0.1).unwrap().values() {
            for (key, value, unit) in spec.dimensions_with_units() {
                assert!(value > 0.0, "{} {} = {}", spec.name, key, value);
                if unit == DimensionUnit::Count {
                    assert_eq!(value.fract(), 0.0, "{} {}", spec.name, key);
                }
            }
        }
    }

    #[test]
    fn test_fixed_text_does_not_vary_with_input() {
        let a = calculate_all(10.0, 0.5).unwrap();
        let b = calculate_all(60.0, 7.0).unwrap();
        for yantra in YantraType::ALL {
            assert_eq!(a[&yantra].materials, b[&yantra].materials);
            assert_eq!(a[&yantra].construction_notes, b[&yantra].construction_notes);
        }
    }

    fn latitude_off_equator() -> impl Strategy<Value = f64> {
        prop_oneof![0.01..=90.0f64, -90.0..=-0.01f64]
    }

    proptest! {
        #[test]
        fn prop_lengths_scale_linearly(
            lat in latitude_off_equator(),
            s1 in 0.1..=10.0f64,
            s2 in 0.1..=10.0f64,
        ) {
            let first = calculate_all(lat, s1).unwrap();
            let second = calculate_all(lat, s2).unwrap();

            for yantra in YantraType::ALL {
                let (a, b) = (&first[&yantra], &second[&yantra]);
                prop_assert_eq!(&a.angles, &b.angles);

                for (key, value, unit) in a.dimensions_with_units() {
                    let other = b.dimension(key).unwrap();
                    match unit {
                        DimensionUnit::Meters => {
                            let ratio = other / value;
                            prop_assert!((ratio - s2 / s1).abs() <= 1e-9 * (s2 / s1), "{} {}", yantra, key);
                        }
                        DimensionUnit::Count | DimensionUnit::Degrees => prop_assert_eq!(value, other),
                    }
                }
            }
        }

        #[test]
        fn prop_calculation_is_deterministic(lat in latitude_off_equator(), scale in 0.1..=10.0f64) {
            let a = serde_json::to_string(&calculate_all(lat, scale).unwrap()).unwrap();
            let b = serde_json::to_string(&calculate_all(lat, scale).unwrap()).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
