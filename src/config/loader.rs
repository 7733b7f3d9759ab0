//! Descriptor construction paths.
//!
//! Two ways a descriptor enters the system: built-in profile literals
//! ([`load_config`], pure, no I/O) and declarative TOML files
//! ([`load_file`], the only filesystem touch in the crate). Both funnel
//! through validation and come out as [`ValidatedConfig`].

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::profiles::DeploymentProfile;
use crate::config::schema::SiteConfig;
use crate::config::validation::{ValidatedConfig, ValidationError};

/// Error type for descriptor construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the descriptor file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not valid TOML for the descriptor schema.
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// The descriptor could not be rendered back to TOML.
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The descriptor parsed but violates semantic invariants.
    #[error("descriptor failed validation with {} violation(s)", .0.len())]
    Validation(Vec<ValidationError>),
}

/// Construct and validate the descriptor for a built-in deployment profile.
///
/// Pure computation over profile literals: no network, no disk I/O, no side
/// effects beyond the returned value. The environment variables the
/// descriptor names are resolved later by the external framework, never
/// here. Only [`ConfigError::Validation`] is reachable from this path.
pub fn load_config(profile: DeploymentProfile) -> Result<ValidatedConfig, ConfigError> {
    validate(profile.descriptor())
}

/// Parse and validate a descriptor from its declarative TOML form.
pub fn from_toml_str(input: &str) -> Result<ValidatedConfig, ConfigError> {
    let config: SiteConfig = toml::from_str(input)?;
    validate(config)
}

/// Load and validate a descriptor file.
pub fn load_file(path: &Path) -> Result<ValidatedConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    from_toml_str(&content)
}

/// Render a validated descriptor to its declarative TOML form.
///
/// Reloading the output through [`from_toml_str`] yields an identical
/// descriptor.
pub fn to_toml_string(config: &ValidatedConfig) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}

fn validate(config: SiteConfig) -> Result<ValidatedConfig, ConfigError> {
    ValidatedConfig::new(config).map_err(ConfigError::Validation)
}
