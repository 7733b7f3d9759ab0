//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Enforce the deployment-shape invariants (adapter vs site/base)
//! - Enforce the secrecy invariants on declared secrets
//! - Check secret name uniqueness
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is pure: SiteConfig → Result<(), Vec<ValidationError>>
//! - Runs before a descriptor is accepted anywhere else in the system;
//!   [`ValidatedConfig`] is the proof it ran

use std::collections::HashSet;
use std::ops::Deref;

use serde::Serialize;
use thiserror::Error;
use url::Url;

use crate::config::schema::{OutputMode, SecretAccess, SecretContext, SiteConfig};

/// A single semantic violation found in a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Adapter deployment and path-based static hosting were both declared.
    #[error("adapter conflicts with site/base: a deployment is either adapter-hosted or static under a base path, never both")]
    AdapterSiteConflict,

    /// An adapter was declared for static output.
    #[error("adapter `{adapter}` requires server output, descriptor declares static")]
    AdapterOnStaticOutput { adapter: String },

    /// `site` declared on a server-output descriptor.
    #[error("site `{site}` is only valid for static output")]
    SiteOnServerOutput { site: String },

    /// `base` declared on a server-output descriptor.
    #[error("base `{base}` is only valid for static output")]
    BaseOnServerOutput { base: String },

    /// `site` requires an accompanying `base`.
    #[error("site `{site}` declared without a base path")]
    SiteWithoutBase { site: String },

    /// `base` requires an accompanying `site`.
    #[error("base `{base}` declared without a site URL")]
    BaseWithoutSite { base: String },

    /// `site` is not an absolute URL with a host.
    #[error("site `{site}` is not an absolute URL: {reason}")]
    SiteNotAbsolute { site: String, reason: String },

    /// `base` does not start with `/`.
    #[error("base `{base}` must start with `/`")]
    BaseMissingLeadingSlash { base: String },

    /// `base` is not a single repository-name segment.
    #[error("base `{base}` must be `/` followed by one repository-name segment")]
    BaseNotRepoSegment { base: String },

    /// A secret is referencable outside server context.
    #[error("secret `{name}`: context must be `server`, got `{context}`")]
    SecretNotServerContext { name: String, context: SecretContext },

    /// A secret would be included in public bundles.
    #[error("secret `{name}`: access must be `secret`, got `{access}`")]
    SecretNotSecretAccess { name: String, access: SecretAccess },

    /// Two secrets share a name.
    #[error("secret `{name}` is declared more than once")]
    DuplicateSecretName { name: String },
}

/// Check every semantic invariant on `config`, collecting all violations.
pub fn validate_config(config: &SiteConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_deployment_shape(config, &mut errors);
    check_secrets(config, &mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_deployment_shape(config: &SiteConfig, errors: &mut Vec<ValidationError>) {
    if config.adapter.is_some() && (config.site.is_some() || config.base.is_some()) {
        errors.push(ValidationError::AdapterSiteConflict);
    }

    if let Some(adapter) = &config.adapter {
        if config.output == OutputMode::Static {
            errors.push(ValidationError::AdapterOnStaticOutput {
                adapter: adapter.as_str().to_string(),
            });
        }
    }

    if config.output == OutputMode::Server {
        if let Some(site) = &config.site {
            errors.push(ValidationError::SiteOnServerOutput { site: site.clone() });
        }
        if let Some(base) = &config.base {
            errors.push(ValidationError::BaseOnServerOutput { base: base.clone() });
        }
    }

    // site and base only come as a pair.
    match (&config.site, &config.base) {
        (Some(site), None) => errors.push(ValidationError::SiteWithoutBase { site: site.clone() }),
        (None, Some(base)) => errors.push(ValidationError::BaseWithoutSite { base: base.clone() }),
        _ => {}
    }

    if let Some(site) = &config.site {
        check_site_url(site, errors);
    }

    if let Some(base) = &config.base {
        check_base_path(base, errors);
    }
}

fn check_site_url(site: &str, errors: &mut Vec<ValidationError>) {
    match Url::parse(site) {
        Ok(url) if url.host_str().is_some() => {}
        Ok(_) => errors.push(ValidationError::SiteNotAbsolute {
            site: site.to_string(),
            reason: "URL has no host".to_string(),
        }),
        Err(e) => errors.push(ValidationError::SiteNotAbsolute {
            site: site.to_string(),
            reason: e.to_string(),
        }),
    }
}

fn check_base_path(base: &str, errors: &mut Vec<ValidationError>) {
    let Some(segment) = base.strip_prefix('/') else {
        errors.push(ValidationError::BaseMissingLeadingSlash {
            base: base.to_string(),
        });
        return;
    };

    // One non-empty repository-name segment: the GitHub repo charset.
    let is_repo_segment = !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if !is_repo_segment {
        errors.push(ValidationError::BaseNotRepoSegment {
            base: base.to_string(),
        });
    }
}

fn check_secrets(config: &SiteConfig, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();

    for secret in &config.secrets {
        if secret.context != SecretContext::Server {
            errors.push(ValidationError::SecretNotServerContext {
                name: secret.name.clone(),
                context: secret.context,
            });
        }
        if secret.access != SecretAccess::Secret {
            errors.push(ValidationError::SecretNotSecretAccess {
                name: secret.name.clone(),
                access: secret.access,
            });
        }
        if !seen.insert(secret.name.as_str()) {
            errors.push(ValidationError::DuplicateSecretName {
                name: secret.name.clone(),
            });
        }
    }
}

/// A descriptor that passed [`validate_config`].
///
/// The only state a descriptor can hold after construction: valid and
/// immutable. The framework boundary accepts this type only. Serializes
/// exactly like the inner [`SiteConfig`]; deliberately not deserializable,
/// so every descriptor entering the system goes through validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedConfig(SiteConfig);

impl ValidatedConfig {
    /// Validate `config`, wrapping it on success.
    pub fn new(config: SiteConfig) -> Result<Self, Vec<ValidationError>> {
        validate_config(&config)?;
        Ok(Self(config))
    }

    /// Consume the wrapper, returning the inner descriptor.
    pub fn into_inner(self) -> SiteConfig {
        self.0
    }
}

impl Deref for ValidatedConfig {
    type Target = SiteConfig;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<SiteConfig> for ValidatedConfig {
    type Error = Vec<ValidationError>;

    fn try_from(config: SiteConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}
