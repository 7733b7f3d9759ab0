//! Built-in deployment profiles.
//!
//! The project ships three peer variants of the descriptor rather than one
//! evolving file; each is modeled as a named profile and none supersedes
//! the others. `hosted-server` is the default because it is the variant the
//! deployed tree actually carries.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::config::schema::{
    AdapterRef, OutputMode, SecretSpec, SiteConfig, TURSO_AUTH_TOKEN, TURSO_DATABASE_URL,
};

/// Adapter provider used by the hosted-server variant.
const HOSTED_ADAPTER: &str = "cloudflare";

/// Site and base path the Pages variant publishes under.
const PAGES_SITE: &str = "https://yashawanthbg2001.github.io";
const PAGES_BASE: &str = "/knownow";

/// Named descriptor literal, one per deployment variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeploymentProfile {
    /// Server output behind the hosting platform adapter, secrets declared.
    #[default]
    HostedServer,

    /// Static output published under a site URL and repository base path.
    StaticWithBasePath,

    /// Static output with no adapter, site, or secrets declared.
    PlainStatic,
}

impl DeploymentProfile {
    /// All built-in profiles, in presentation order.
    pub fn all() -> [DeploymentProfile; 3] {
        [
            DeploymentProfile::HostedServer,
            DeploymentProfile::StaticWithBasePath,
            DeploymentProfile::PlainStatic,
        ]
    }

    /// Stable kebab-case profile name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeploymentProfile::HostedServer => "hosted-server",
            DeploymentProfile::StaticWithBasePath => "static-with-base-path",
            DeploymentProfile::PlainStatic => "plain-static",
        }
    }

    /// One-line summary for CLI listings.
    pub fn summary(&self) -> &'static str {
        match self {
            DeploymentProfile::HostedServer => {
                "server output behind the cloudflare adapter, Turso secrets declared"
            }
            DeploymentProfile::StaticWithBasePath => {
                "static output under a GitHub Pages site/base pair, Turso secrets declared"
            }
            DeploymentProfile::PlainStatic => {
                "static output with no adapter, site, or secrets"
            }
        }
    }

    /// The descriptor literal for this profile.
    ///
    /// Construction is infallible; validation happens in
    /// [`load_config`](crate::config::loader::load_config).
    pub fn descriptor(&self) -> SiteConfig {
        match self {
            DeploymentProfile::HostedServer => SiteConfig {
                output: OutputMode::Server,
                adapter: Some(AdapterRef::new(HOSTED_ADAPTER)),
                secrets: turso_secrets(),
                ..SiteConfig::default()
            },
            DeploymentProfile::StaticWithBasePath => SiteConfig {
                output: OutputMode::Static,
                site: Some(PAGES_SITE.to_string()),
                base: Some(PAGES_BASE.to_string()),
                secrets: turso_secrets(),
                ..SiteConfig::default()
            },
            DeploymentProfile::PlainStatic => SiteConfig::default(),
        }
    }
}

/// The two Turso credentials every database-backed variant declares.
fn turso_secrets() -> Vec<SecretSpec> {
    vec![
        SecretSpec::server_secret(TURSO_DATABASE_URL),
        SecretSpec::server_secret(TURSO_AUTH_TOKEN),
    ]
}

impl fmt::Display for DeploymentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for profile names that match no built-in profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown profile `{0}`, expected one of: hosted-server, static-with-base-path, plain-static")]
pub struct UnknownProfile(String);

impl FromStr for DeploymentProfile {
    type Err = UnknownProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hosted-server" => Ok(DeploymentProfile::HostedServer),
            "static-with-base-path" => Ok(DeploymentProfile::StaticWithBasePath),
            "plain-static" => Ok(DeploymentProfile::PlainStatic),
            other => Err(UnknownProfile(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::validation::validate_config;

    #[test]
    fn test_every_profile_descriptor_validates() {
        for profile in DeploymentProfile::all() {
            assert_eq!(
                validate_config(&profile.descriptor()),
                Ok(()),
                "profile {profile} must produce a valid descriptor"
            );
        }
    }

    #[test]
    fn test_hosted_server_shape() {
        let descriptor = DeploymentProfile::HostedServer.descriptor();
        assert_eq!(descriptor.output, OutputMode::Server);
        assert_eq!(descriptor.adapter.unwrap().as_str(), "cloudflare");
        assert!(descriptor.site.is_none());
        assert!(descriptor.base.is_none());
        assert_eq!(
            descriptor.secrets.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            vec![TURSO_DATABASE_URL, TURSO_AUTH_TOKEN]
        );
    }

    #[test]
    fn test_static_with_base_path_shape() {
        let descriptor = DeploymentProfile::StaticWithBasePath.descriptor();
        assert_eq!(descriptor.output, OutputMode::Static);
        assert!(descriptor.adapter.is_none());
        assert_eq!(descriptor.site.as_deref(), Some(PAGES_SITE));
        assert_eq!(descriptor.base.as_deref(), Some(PAGES_BASE));
        assert_eq!(descriptor.secrets.len(), 2);
    }

    #[test]
    fn test_plain_static_is_the_default_descriptor() {
        assert_eq!(
            DeploymentProfile::PlainStatic.descriptor(),
            SiteConfig::default()
        );
    }

    #[test]
    fn test_profile_names_round_trip() {
        for profile in DeploymentProfile::all() {
            assert_eq!(profile.as_str().parse::<DeploymentProfile>(), Ok(profile));
        }
    }

    #[test]
    fn test_unknown_profile_name_is_rejected() {
        let err = "staging".parse::<DeploymentProfile>().unwrap_err();
        assert!(err.to_string().contains("unknown profile `staging`"));
    }

    #[test]
    fn test_default_profile_is_hosted_server() {
        assert_eq!(
            DeploymentProfile::default(),
            DeploymentProfile::HostedServer
        );
    }
}
