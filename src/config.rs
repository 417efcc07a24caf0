use std::collections::HashMap;

use config::{Config as ConfigLib, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::transform::XPathFilterParameterSpec;

const DEFAULT_XPATH: &str = "self::node()";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub filter: FilterSettings,
}

/// XPath filter parameters as they appear in settings sources.
///
/// Values are kept untyped until [`FilterSettings::to_params`] so a
/// non-string namespace URI surfaces as a type mismatch rather than a
/// generic deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterSettings {
    pub xpath: Option<Value>,
    pub namespaces: Option<Value>,
}

impl FilterSettings {
    pub fn to_params(&self) -> Result<XPathFilterParameterSpec> {
        match &self.namespaces {
            Some(namespaces) => XPathFilterParameterSpec::from_untyped_with_namespaces(
                self.xpath.as_ref(),
                Some(namespaces),
            ),
            None => XPathFilterParameterSpec::from_untyped(self.xpath.as_ref()),
        }
    }
}

impl Config {
    pub fn load() -> std::result::Result<Self, ConfigError> {
        Self::load_with_sources(None)
    }

    pub fn load_with_sources(
        env_vars: Option<HashMap<String, String>>,
    ) -> std::result::Result<Self, ConfigError> {
        let mut builder = ConfigLib::builder()
            .set_default("filter.xpath", DEFAULT_XPATH)?
            .add_source(File::with_name("config/settings").required(false));

        // Overrides replace the process environment so tests stay isolated
        if let Some(vars) = env_vars {
            for (key, value) in vars {
                builder = builder.set_override(&key, value)?;
            }
        } else {
            // Format: APP_FILTER__XPATH or APP_FILTER__NAMESPACES__DS
            builder = builder.add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            );
        }

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(?config.filter, "Loaded filter settings");
        Ok(config)
    }
}
