//! CLI configuration file.
//!
//! ```toml
//! default_scale = 0.5
//! catalog = "sites.toml"
//! json = true
//! ```
//!
//! Every key is optional. Command-line flags override file values.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use yantra_core::coordinates::{DEFAULT_SCALE, SCALE_RANGE};
use yantra_core::{CalcError, SiteCatalog};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Scale used when `--scale` is not given
    pub default_scale: f64,

    /// Site catalog file (TOML, or JSON by `.json` extension); built-in
    /// catalog when absent
    pub catalog: Option<PathBuf>,

    /// Emit JSON instead of text
    pub json: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            default_scale: DEFAULT_SCALE,
            catalog: None,
            json: false,
        }
    }
}

impl CliConfig {
    /// Read the config file, or use defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(CliConfig::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config = CliConfig::from_toml_str(&text)
            .with_context(|| format!("invalid config file {}", path.display()))?;

        // Relative catalog paths are relative to the config file
        if let (Some(catalog), Some(dir)) = (&config.catalog, path.parent()) {
            if catalog.is_relative() {
                config.catalog = Some(dir.join(catalog));
            }
        }

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: CliConfig = toml::from_str(text).map_err(CalcError::from)?;
        if !SCALE_RANGE.contains(&config.default_scale) {
            return Err(CalcError::validation(
                "default_scale",
                config.default_scale.to_string(),
                "0.1 to 10.0",
            )
            .into());
        }
        Ok(config)
    }

    /// The catalog named by `override_path`, else by the config, else the
    /// built-in one.
    pub fn site_catalog(&self, override_path: Option<&Path>) -> Result<SiteCatalog> {
        let Some(path) = override_path.or(self.catalog.as_deref()) else {
            return Ok(SiteCatalog::builtin().clone());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read site catalog {}", path.display()))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let catalog = if is_json {
            SiteCatalog::from_json_str(&text)
        } else {
            SiteCatalog::from_toml_str(&text)
        }
        .with_context(|| format!("invalid site catalog {}", path.display()))?;

        tracing::info!(path = %path.display(), sites = catalog.len(), "loaded site catalog");
        Ok(catalog)
    }
}
