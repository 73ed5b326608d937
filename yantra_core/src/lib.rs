//! # yantra_core - Yantra Construction Calculator
//!
//! `yantra_core` derives physical construction specifications for historical
//! astronomical instruments (yantras) from a geographic location and a scale
//! factor, together with the solar-position quantities that justify them.
//! All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All outward types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Deterministic**: Identical inputs give bit-identical output
//!
//! ## Quick Start
//!
//! ```rust
//! use yantra_core::{calculate_raw, compare_sites, SiteCatalog, YantraType};
//!
//! // Every yantra for Jantar Mantar, Jaipur at full scale
//! let result = calculate_raw(26.9247, 75.8244, 1.0).unwrap();
//! let samrat = &result.yantras[&YantraType::Samrat];
//! assert_eq!(samrat.angle("gnomon_angle"), Some(26.9247));
//!
//! // Cross-site comparison
//! let table = compare_sites(SiteCatalog::builtin(), &["Jaipur", "Delhi"]).unwrap();
//! assert_eq!(table.len(), 2);
//! ```
//!
//! ## Modules
//!
//! - [`coordinates`] - Validated locations and DMS conversion
//! - [`ephemeris`] - Solar declination, elevation, azimuth and sunrise/sunset
//! - [`yantras`] - Geometry of each instrument archetype
//! - [`sites`] - Historical site catalog
//! - [`comparison`] - Cross-site metric table
//! - [`result`] - The `calculate` entry point
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod comparison;
pub mod coordinates;
pub mod ephemeris;
pub mod errors;
pub mod result;
pub mod sites;
pub mod units;
pub mod yantras;

// Re-export commonly used types at crate root for convenience
pub use comparison::{compare_sites, ComparisonTable, SiteMetrics};
pub use coordinates::{to_dms, Axis, Location};
pub use errors::{CalcError, CalcResult};
pub use result::{calculate, calculate_raw, site_details, CalculationResult, SiteDetails};
pub use sites::{HistoricalSite, SiteCatalog};
pub use yantras::{DimensionUnit, YantraSpec, YantraType};
