//! Layered configuration for GraphKit.
//!
//! Sources, lowest priority first:
//! 1. built-in defaults
//! 2. an optional TOML file
//! 3. environment variables prefixed `GRAPHKIT_`, nested keys split on `__`
//!    (e.g. `GRAPHKIT_GENERATOR__SEED=7`)
//!
//! ```toml
//! [graph]
//! node_capacity = 1024
//!
//! [generator]
//! seed = 42
//! edge_weight = 0.0
//!
//! [lang]
//! edge_weight = 1.0
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "GRAPHKIT_";

/// Graph store settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Pre-allocation hint for the node list and adjacency indices.
    pub node_capacity: usize,
}

/// Random/regular generator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed for the generator RNG. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Weight given to every generated edge.
    pub edge_weight: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            edge_weight: 0.0,
        }
    }
}

/// Graph text language settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LangConfig {
    /// Weight given to every edge created from text.
    pub edge_weight: f32,
}

impl Default for LangConfig {
    fn default() -> Self {
        Self { edge_weight: 1.0 }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphKitConfig {
    /// Graph store settings.
    pub graph: GraphConfig,
    /// Generator settings.
    pub generator: GeneratorConfig,
    /// Text language settings.
    pub lang: LangConfig,
}

impl GraphKitConfig {
    /// Loads defaults, then `path` (if given and present), then `GRAPHKIT_*`
    /// environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::extract(&figment)
    }

    /// Parses configuration from a TOML string layered over the defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let figment =
            Figment::from(Serialized::defaults(Self::default())).merge(Toml::string(toml));
        Self::extract(&figment)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    fn extract(figment: &Figment) -> Result<Self> {
        let config: Self = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects non-finite edge weights.
    pub fn validate(&self) -> Result<()> {
        if !self.generator.edge_weight.is_finite() {
            return Err(Error::Config(format!(
                "generator.edge_weight must be finite, got {}",
                self.generator.edge_weight
            )));
        }
        if !self.lang.edge_weight.is_finite() {
            return Err(Error::Config(format!(
                "lang.edge_weight must be finite, got {}",
                self.lang.edge_weight
            )));
        }
        Ok(())
    }
}
