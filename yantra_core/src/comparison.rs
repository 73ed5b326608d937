//! # Site Comparison
//!
//! Cross-site summary of key yantra metrics for a list of named historical
//! sites. Names are resolved against an explicit [`SiteCatalog`]; a single
//! unknown name fails the whole request before anything is computed.
//!
//! The Samrat Yantra is the reference archetype, computed at scale 1.
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::comparison::compare_sites;
//! use yantra_core::sites::SiteCatalog;
//!
//! let table = compare_sites(SiteCatalog::builtin(), &["Delhi", "Jaipur"]).unwrap();
//! assert_eq!(table.names().collect::<Vec<_>>(), vec!["Delhi", "Jaipur"]);
//! assert_eq!(table.get("Jaipur").unwrap().samrat_gnomon_angle, 26.9247);
//! ```

use std::collections::HashSet;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::coordinates::DEFAULT_SCALE;
use crate::ephemeris::solstice_extrema;
use crate::errors::{CalcError, CalcResult};
use crate::sites::{HistoricalSite, SiteCatalog};
use crate::yantras::{rama, samrat};

/// Key metrics of one site.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteMetrics {
    pub latitude: f64,
    pub longitude: f64,
    /// Meters
    pub samrat_gnomon_height: f64,
    /// Degrees
    pub samrat_gnomon_angle: f64,
    /// Meters
    pub rama_base_radius: f64,
    /// Degrees
    pub dhruva_pole_angle: f64,
    /// Higher of the two solstice noon elevations, degrees
    pub max_sun_elevation: f64,
    /// Lower of the two solstice noon elevations, degrees
    pub min_sun_elevation: f64,
}

impl SiteMetrics {
    fn for_site(site: &HistoricalSite) -> CalcResult<Self> {
        // Rejects equatorial sites
        samrat::calculate(site.latitude, DEFAULT_SCALE)?;
        let (max_elev, min_elev) = solstice_extrema(site.latitude);

        // Gnomon and pole are both inclined at the latitude
        Ok(SiteMetrics {
            latitude: site.latitude,
            longitude: site.longitude,
            samrat_gnomon_height: (samrat::GNOMON_HEIGHT * DEFAULT_SCALE).value(),
            samrat_gnomon_angle: site.latitude,
            rama_base_radius: (rama::BASE_RADIUS * DEFAULT_SCALE).value(),
            dhruva_pole_angle: site.latitude,
            max_sun_elevation: max_elev.value(),
            min_sun_elevation: min_elev.value(),
        })
    }
}

/// Site name -> [`SiteMetrics`], in the order the names were requested.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComparisonTable {
    rows: Vec<(String, SiteMetrics)>,
}

impl ComparisonTable {
    pub fn get(&self, name: &str) -> Option<&SiteMetrics> {
        self.rows
            .iter()
            .find(|(row_name, _)| row_name == name)
            .map(|(_, metrics)| metrics)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SiteMetrics)> {
        self.rows.iter().map(|(name, metrics)| (name.as_str(), metrics))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Serialize for ComparisonTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for (name, metrics) in &self.rows {
            map.serialize_entry(name, metrics)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ComparisonTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TableVisitor;

        impl<'de> Visitor<'de> for TableVisitor {
            type Value = ComparisonTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of site name to site metrics")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut rows = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, metrics)) = access.next_entry::<String, SiteMetrics>()? {
                    rows.push((name, metrics));
                }
                Ok(ComparisonTable { rows })
            }
        }

        deserializer.deserialize_map(TableVisitor)
    }
}

/// Compare the named sites.
///
/// A repeated name appears once, at its first position. An empty list gives
/// an empty table.
///
/// # Errors
///
/// - [`CalcError::UnknownSite`] listing every name missing from `catalog`
///   (input order, no repeats)
/// - [`CalcError::GeometryUndefined`] if a catalog site lies on the equator
pub fn compare_sites<S: AsRef<str>>(catalog: &SiteCatalog, site_names: &[S]) -> CalcResult<ComparisonTable> {
    let mut seen = HashSet::new();
    let requested: Vec<&str> = site_names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| seen.insert(*name))
        .collect();

    let unknown: Vec<&str> = requested
        .iter()
        .copied()
        .filter(|name| !catalog.contains(name))
        .collect();
    if !unknown.is_empty() {
        tracing::debug!(?unknown, "comparison rejected");
        return Err(CalcError::unknown_sites(unknown));
    }

    let rows = requested
        .into_iter()
        .map(|name| {
            let site = catalog.resolve(name)?;
            Ok((name.to_string(), SiteMetrics::for_site(site)?))
        })
        .collect::<CalcResult<Vec<_>>>()?;

    tracing::debug!(sites = rows.len(), "compared sites");
    Ok(ComparisonTable { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::HistoricalSite;
    use crate::yantras::YantraType;

    #[test]
    fn test_unknown_site_fails_whole_request() {
        let err = compare_sites(SiteCatalog::builtin(), &["Jaipur", "Atlantis"]).unwrap_err();
        assert_eq!(err, CalcError::unknown_sites(["Atlantis"]));
        assert!(err.to_string().contains("Atlantis"));
    }

    #[test]
    fn test_every_unknown_name_listed_once() {
        let names = ["Lemuria", "Jaipur", "Atlantis", "Lemuria", "jaipur"];
        let err = compare_sites(SiteCatalog::builtin(), &names).unwrap_err();
        assert_eq!(err, CalcError::unknown_sites(["Lemuria", "Atlantis", "jaipur"]));
    }

    #[test]
    fn test_empty_input() {
        let table = compare_sites::<&str>(SiteCatalog::builtin(), &[]).unwrap();
        assert!(table.is_empty());
        assert_eq!(serde_json::to_string(&table).unwrap(), "{}");
    }

    #[test]
    fn test_preserves_input_order() {
        let names = ["Mathura", "Jaipur", "Ujjain", "Jaipur"];
        let table = compare_sites(SiteCatalog::builtin(), &names).unwrap();
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["Mathura", "Jaipur", "Ujjain"]);

        let json = serde_json::to_string(&table).unwrap();
        let mathura = json.find("\"Mathura\"").unwrap();
        let jaipur = json.find("\"Jaipur\"").unwrap();
        let ujjain = json.find("\"Ujjain\"").unwrap();
        assert!(mathura < jaipur && jaipur < ujjain, "{}", json);
    }

    #[test]
    fn test_metrics_for_jaipur() {
        let table = compare_sites(SiteCatalog::builtin(), &["Jaipur".to_string()]).unwrap();
        let jaipur = table.get("Jaipur").unwrap();
        assert_eq!(jaipur.samrat_gnomon_height, 27.4);
        assert_eq!(jaipur.samrat_gnomon_angle, 26.9247);
        assert_eq!(jaipur.dhruva_pole_angle, 26.9247);
        assert_eq!(jaipur.rama_base_radius, 6.0);
        assert!((jaipur.max_sun_elevation - 86.5153).abs() < 1e-3);
        assert!((jaipur.min_sun_elevation - 39.6353).abs() < 1e-3);
    }

    #[test]
    fn test_metrics_agree_with_full_specs() {
        let table = compare_sites(SiteCatalog::builtin(), &SiteCatalog::builtin().names().collect::<Vec<_>>()).unwrap();
        assert_eq!(table.len(), 5);

        for (name, metrics) in table.iter() {
            let lat = metrics.latitude;
            let samrat = YantraType::Samrat.spec(lat, 1.0).unwrap();
            let rama = YantraType::Rama.spec(lat, 1.0).unwrap();
            let dhruva = YantraType::Dhruva.spec(lat, 1.0).unwrap();

            assert_eq!(samrat.dimension("gnomon_height"), Some(metrics.samrat_gnomon_height), "{}", name);
            assert_eq!(samrat.angle("gnomon_angle"), Some(metrics.samrat_gnomon_angle), "{}", name);
            assert_eq!(rama.dimension("base_radius"), Some(metrics.rama_base_radius), "{}", name);
            assert_eq!(dhruva.angle("pole_inclination_angle"), Some(metrics.dhruva_pole_angle), "{}", name);
        }
    }

    #[test]
    fn test_southern_site_extrema_order() {
        let catalog = SiteCatalog::new(vec![HistoricalSite {
            name: "Sydney".into(),
            display_name: String::new(),
            latitude: -33.8688,
            longitude: 151.2093,
            description: String::new(),
        }])
        .unwrap();
        let table = compare_sites(&catalog, &["Sydney"]).unwrap();
        let sydney = table.get("Sydney").unwrap();
        assert!(sydney.max_sun_elevation > sydney.min_sun_elevation);
    }

    #[test]
    fn test_equatorial_catalog_site() {
        let catalog = SiteCatalog::new(vec![HistoricalSite {
            name: "Equator".into(),
            display_name: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            description: String::new(),
        }])
        .unwrap();
        let err = compare_sites(&catalog, &["Equator"]).unwrap_err();
        assert_eq!(err.error_code(), "GEOMETRY_UNDEFINED");
    }

    #[test]
    fn test_table_json_round_trip_keeps_order() {
        let table = compare_sites(SiteCatalog::builtin(), &["Varanasi", "Delhi"]).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        let back: ComparisonTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back.names().collect::<Vec<_>>(), vec!["Varanasi", "Delhi"]);
        assert_eq!(back.get("Delhi").unwrap().samrat_gnomon_angle, 28.6269);
    }
}
