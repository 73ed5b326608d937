//! # Historical Site Catalog
//!
//! A read-only mapping from site name to coordinates. The engine never reads
//! a global catalog: callers pass a [`SiteCatalog`] explicitly, either the
//! built-in one or one loaded from TOML/JSON.
//!
//! ## TOML Format
//!
//! ```toml
//! [[sites]]
//! name = "Jaipur"
//! display_name = "Jantar Mantar, Jaipur"
//! latitude = 26.9247
//! longitude = 75.8244
//! description = "Largest and best-preserved yantra collection"
//! ```
//!
//! `display_name` defaults to `name` and `description` to empty.
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::sites::SiteCatalog;
//!
//! let catalog = SiteCatalog::builtin();
//! let jaipur = catalog.get("Jaipur").unwrap();
//! assert_eq!(jaipur.latitude, 26.9247);
//! assert!(catalog.get("jaipur").is_none());
//! ```

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::coordinates::validate_coordinates;
use crate::errors::{CalcError, CalcResult};

/// A named location of a historical observatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSite {
    /// Lookup key (exact, case-sensitive)
    pub name: String,

    #[serde(default)]
    pub display_name: String,

    /// Decimal degrees, north positive
    pub latitude: f64,

    /// Decimal degrees, east positive
    pub longitude: f64,

    #[serde(default)]
    pub description: String,
}

impl HistoricalSite {
    fn new(name: &str, display_name: &str, latitude: f64, longitude: f64, description: &str) -> Self {
        HistoricalSite {
            name: name.to_string(),
            display_name: display_name.to_string(),
            latitude,
            longitude,
            description: description.to_string(),
        }
    }
}

/// Ordered, validated collection of [`HistoricalSite`]s with unique names.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile")]
pub struct SiteCatalog {
    sites: Vec<HistoricalSite>,
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    sites: Vec<HistoricalSite>,
}

impl TryFrom<CatalogFile> for SiteCatalog {
    type Error = CalcError;

    fn try_from(file: CatalogFile) -> CalcResult<Self> {
        SiteCatalog::new(file.sites)
    }
}

static BUILTIN: Lazy<SiteCatalog> = Lazy::new(|| SiteCatalog {
    sites: vec![
        HistoricalSite::new(
            "Jaipur",
            "Jantar Mantar, Jaipur",
            26.9247,
            75.8244,
            "Largest and best-preserved yantra collection",
        ),
        HistoricalSite::new(
            "Delhi",
            "Jantar Mantar, Delhi",
            28.6269,
            77.2164,
            "Historic observatory in the capital",
        ),
        HistoricalSite::new(
            "Varanasi",
            "Jantar Mantar, Varanasi",
            25.3181,
            83.0104,
            "Ancient astronomical observatory",
        ),
        HistoricalSite::new(
            "Ujjain",
            "Jantar Mantar, Ujjain",
            23.1793,
            75.7849,
            "Reference point for ancient Indian timekeeping",
        ),
        HistoricalSite::new(
            "Mathura",
            "Jantar Mantar, Mathura",
            27.4924,
            77.6737,
            "Lesser-known but historically significant site",
        ),
    ],
});

impl SiteCatalog {
    /// Build a catalog, validating every site's coordinates and rejecting
    /// empty or duplicate names.
    pub fn new(sites: Vec<HistoricalSite>) -> CalcResult<Self> {
        let mut seen = HashSet::new();
        let mut sites = sites;

        for site in &mut sites {
            if site.name.trim().is_empty() {
                return Err(CalcError::validation("name", &site.name, "a non-empty site name"));
            }
            if !seen.insert(site.name.clone()) {
                return Err(CalcError::validation("name", &site.name, "unique site names"));
            }
            validate_coordinates(site.latitude, site.longitude)?;
            if site.display_name.is_empty() {
                site.display_name = site.name.clone();
            }
        }

        Ok(SiteCatalog { sites })
    }

    /// The five Jantar Mantar observatories.
    pub fn builtin() -> &'static SiteCatalog {
        &BUILTIN
    }

    /// Parse a catalog from TOML text.
    ///
    /// Malformed text is a [`CalcError::Serialization`]; a bad site entry is
    /// a [`CalcError::Validation`] naming the offending field.
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        let file: CatalogFile = toml::from_str(text)?;
        let catalog = SiteCatalog::new(file.sites)?;
        tracing::debug!(sites = catalog.len(), "loaded site catalog from TOML");
        Ok(catalog)
    }

    /// Parse a catalog from JSON text (`{"sites": [...]}`).
    pub fn from_json_str(text: &str) -> CalcResult<Self> {
        let file: CatalogFile = serde_json::from_str(text)?;
        let catalog = SiteCatalog::new(file.sites)?;
        tracing::debug!(sites = catalog.len(), "loaded site catalog from JSON");
        Ok(catalog)
    }

    /// Exact, case-sensitive lookup
    pub fn get(&self, name: &str) -> Option<&HistoricalSite> {
        self.sites.iter().find(|site| site.name == name)
    }

    /// Lookup that reports a missing name as [`CalcError::UnknownSite`].
    pub fn resolve(&self, name: &str) -> CalcResult<&HistoricalSite> {
        self.get(name).ok_or_else(|| CalcError::unknown_sites([name]))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoricalSite> {
        self.sites.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sites.iter().map(|site| site.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}
