//! # Error Types
//!
//! Structured error types for yantra_core. Every error is a local,
//! recoverable condition: the engine holds no state that could be left
//! corrupted, so there is no fatal variant. Each error carries enough context
//! for a caller to report it verbatim or branch on [`CalcError::error_code`].
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::errors::{CalcError, CalcResult};
//!
//! fn check_day(day_of_year: u32) -> CalcResult<()> {
//!     if !(1..=366).contains(&day_of_year) {
//!         return Err(CalcError::validation(
//!             "day_of_year",
//!             day_of_year.to_string(),
//!             "1 to 366",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(check_day(400).unwrap_err().error_code(), "VALIDATION_ERROR");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for yantra_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for engine operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is outside its allowed range or malformed
    #[error("Invalid value for '{field}': {value} (allowed: {allowed})")]
    Validation {
        field: String,
        value: String,
        allowed: String,
    },

    /// The latitude makes an archetype's formula mathematically undefined
    #[error("Geometry undefined for {yantra} at latitude {latitude}: {reason}")]
    GeometryUndefined {
        yantra: String,
        latitude: f64,
        reason: String,
    },

    /// One or more requested sites are absent from the catalog
    #[error("Unknown site(s): {}", .names.join(", "))]
    UnknownSite { names: Vec<String> },

    /// Catalog or configuration text could not be parsed
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

impl CalcError {
    /// Create a Validation error
    pub fn validation(field: impl Into<String>, value: impl Into<String>, allowed: impl Into<String>) -> Self {
        CalcError::Validation {
            field: field.into(),
            value: value.into(),
            allowed: allowed.into(),
        }
    }

    /// Create a GeometryUndefined error
    pub fn geometry_undefined(yantra: impl Into<String>, latitude: f64, reason: impl Into<String>) -> Self {
        CalcError::GeometryUndefined {
            yantra: yantra.into(),
            latitude,
            reason: reason.into(),
        }
    }

    /// Create an UnknownSite error listing every unresolved name
    pub fn unknown_sites<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CalcError::UnknownSite {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a Serialization error
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::Serialization {
            reason: reason.into(),
        }
    }

    /// The offending field, for validation failures
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::Validation { .. } => "VALIDATION_ERROR",
            CalcError::GeometryUndefined { .. } => "GEOMETRY_UNDEFINED",
            CalcError::UnknownSite { .. } => "UNKNOWN_SITE",
            CalcError::Serialization { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

impl From<toml::de::Error> for CalcError {
    fn from(err: toml::de::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::validation("latitude", "91", "-90 to 90 degrees");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"Validation\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::validation("scale", "0", "0.1 to 10").error_code(), "VALIDATION_ERROR");
        assert_eq!(
            CalcError::geometry_undefined("Samrat Yantra", 0.0, "equator").error_code(),
            "GEOMETRY_UNDEFINED"
        );
        assert_eq!(CalcError::unknown_sites(["Atlantis"]).error_code(), "UNKNOWN_SITE");
        assert_eq!(CalcError::serialization("bad toml").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_unknown_site_lists_every_name() {
        let error = CalcError::unknown_sites(["Atlantis", "Lemuria"]);
        assert_eq!(error.to_string(), "Unknown site(s): Atlantis, Lemuria");
    }

    #[test]
    fn test_validation_message_names_field_and_range() {
        let error = CalcError::validation("latitude", "91", "-90 to 90 degrees");
        assert_eq!(error.field(), Some("latitude"));
        let msg = error.to_string();
        assert!(msg.contains("latitude"));
        assert!(msg.contains("-90 to 90"));
    }
}
