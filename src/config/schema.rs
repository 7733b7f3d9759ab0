//! Configuration schema definitions.
//!
//! This module defines the deployment descriptor structure for the site
//! build. All types derive Serde traits for (de)serialization from the
//! declarative descriptor form.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Environment variable carrying the Turso database URL at runtime.
pub const TURSO_DATABASE_URL: &str = "TURSO_DATABASE_URL";

/// Environment variable carrying the Turso auth token at runtime.
pub const TURSO_AUTH_TOKEN: &str = "TURSO_AUTH_TOKEN";

/// Root deployment descriptor for the site build.
///
/// Constructed once from a profile literal or a descriptor file, validated,
/// and then read-only until the build ends. The environment variables named
/// in `secrets` are resolved later by the external framework; this crate
/// only declares their existence and secrecy class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    /// Build output mode (`server` or `static`).
    pub output: OutputMode,

    /// Deployment adapter for hosted server output. Opaque to this crate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapter: Option<AdapterRef>,

    /// Absolute site URL for path-based static hosting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    /// Base path under `site`, e.g. `/knownow`. Always paired with `site`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Environment-provided secret declarations, in declaration order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub secrets: Vec<SecretSpec>,
}

/// Build output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// A running server process renders each request, deployed via an adapter.
    Server,

    /// Fixed files produced at build time, no rendering at request time.
    #[default]
    Static,
}

impl OutputMode {
    /// Lowercase name as it appears in the descriptor form.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Server => "server",
            OutputMode::Static => "static",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque reference to an externally-owned deployment adapter.
///
/// The descriptor records the provider name (e.g. `"cloudflare"`) and hands
/// it through unchanged; adapter internals are never inspected here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AdapterRef(String);

impl AdapterRef {
    /// Reference an adapter by provider name.
    pub fn new(provider: impl Into<String>) -> Self {
        Self(provider.into())
    }

    /// Provider name as declared.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AdapterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declaration of one environment-provided credential.
///
/// Omitted `type`/`context`/`access` fields default to the safe values
/// (`string`/`server`/`secret`), so a minimal declaration is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SecretSpec {
    /// Environment variable name supplying the value at runtime.
    pub name: String,

    /// Value type. Fixed to `string` in this schema.
    #[serde(rename = "type", default)]
    pub kind: SecretKind,

    /// Where the value may be referenced. Must be `server` to validate.
    #[serde(default)]
    pub context: SecretContext,

    /// Bundle visibility class. Must be `secret` to validate.
    #[serde(default)]
    pub access: SecretAccess,
}

impl SecretSpec {
    /// Canonical server-only secret declaration for `name`.
    pub fn server_secret(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: SecretKind::String,
            context: SecretContext::Server,
            access: SecretAccess::Secret,
        }
    }
}

/// Value type of a declared secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SecretKind {
    /// Plain string value.
    #[default]
    String,
}

impl SecretKind {
    /// Lowercase name as it appears in the descriptor form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretKind::String => "string",
        }
    }
}

impl fmt::Display for SecretKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a declared secret may be referenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SecretContext {
    /// Server-side code only.
    #[default]
    Server,

    /// Client-side code. Parsed so validation can reject it.
    Client,
}

impl SecretContext {
    /// Lowercase name as it appears in the descriptor form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretContext::Server => "server",
            SecretContext::Client => "client",
        }
    }
}

impl fmt::Display for SecretContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bundle visibility class of a declared secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SecretAccess {
    /// Excluded from public build output.
    #[default]
    Secret,

    /// Included in public bundles. Parsed so validation can reject it.
    Public,
}

impl SecretAccess {
    /// Lowercase name as it appears in the descriptor form.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretAccess::Secret => "secret",
            SecretAccess::Public => "public",
        }
    }
}

impl fmt::Display for SecretAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_plain_static() {
        let config = SiteConfig::default();
        assert_eq!(config.output, OutputMode::Static);
        assert!(config.adapter.is_none());
        assert!(config.site.is_none());
        assert!(config.base.is_none());
        assert!(config.secrets.is_empty());
    }

    #[test]
    fn test_output_mode_descriptor_names() {
        assert_eq!(OutputMode::Server.to_string(), "server");
        assert_eq!(OutputMode::Static.to_string(), "static");
    }

    #[test]
    fn test_minimal_toml_uses_defaults() {
        let config: SiteConfig = toml::from_str("output = \"server\"").unwrap();
        assert_eq!(config.output, OutputMode::Server);
        assert!(config.adapter.is_none());
        assert!(config.secrets.is_empty());
    }

    #[test]
    fn test_empty_toml_is_default_descriptor() {
        let config: SiteConfig = toml::from_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_secret_declaration_defaults_are_safe() {
        let toml_str = r#"
[[secrets]]
name = "TURSO_DATABASE_URL"
"#;
        let config: SiteConfig = toml::from_str(toml_str).unwrap();
        let secret = &config.secrets[0];
        assert_eq!(secret.kind, SecretKind::String);
        assert_eq!(secret.context, SecretContext::Server);
        assert_eq!(secret.access, SecretAccess::Secret);
    }

    #[test]
    fn test_secret_type_field_uses_reserved_word() {
        let toml_str = r#"
[[secrets]]
name = "TURSO_AUTH_TOKEN"
type = "string"
context = "server"
access = "secret"
"#;
        let config: SiteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.secrets[0], SecretSpec::server_secret(TURSO_AUTH_TOKEN));
    }

    #[test]
    fn test_unsafe_secret_values_parse_for_validation() {
        // Syntactically fine; rejecting these is validation's job.
        let toml_str = r#"
[[secrets]]
name = "LEAKY"
context = "client"
access = "public"
"#;
        let config: SiteConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.secrets[0].context, SecretContext::Client);
        assert_eq!(config.secrets[0].access, SecretAccess::Public);
    }

    #[test]
    fn test_absent_optionals_are_omitted_from_toml() {
        let toml_str = toml::to_string_pretty(&SiteConfig::default()).unwrap();
        assert!(!toml_str.contains("adapter"), "None adapter must be omitted");
        assert!(!toml_str.contains("site"), "None site must be omitted");
        assert!(!toml_str.contains("base"), "None base must be omitted");
        assert!(!toml_str.contains("secrets"), "empty secrets must be omitted");
    }

    #[test]
    fn test_descriptor_round_trips_through_toml() {
        let config = SiteConfig {
            output: OutputMode::Static,
            adapter: None,
            site: Some("https://example.github.io".to_string()),
            base: Some("/myrepo".to_string()),
            secrets: vec![
                SecretSpec::server_secret(TURSO_DATABASE_URL),
                SecretSpec::server_secret(TURSO_AUTH_TOKEN),
            ],
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let restored: SiteConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, restored);
    }
}
