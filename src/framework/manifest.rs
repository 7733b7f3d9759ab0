//! Framework manifest rendering.
//!
//! The external framework consumes the descriptor through its config entry
//! point; this module renders a validated descriptor into exactly the
//! object shape that call expects. Serialize-only: the manifest leaves the
//! crate and is never read back.

use serde::ser::Serializer;
use serde::Serialize;

use crate::config::schema::{AdapterRef, OutputMode, SecretAccess, SecretContext, SecretKind};
use crate::config::validation::ValidatedConfig;

/// The framework-facing configuration shape.
///
/// Absent optionals are omitted; the `env` block is omitted entirely when
/// no secrets are declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameworkConfig {
    /// Build output mode, `"server"` or `"static"`.
    pub output: OutputMode,

    /// Opaque adapter reference, for hosted server deployments.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adapter: Option<AdapterRef>,

    /// Absolute site URL, for path-based static hosting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    /// Base path under `site`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Environment-variable schema block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<EnvBlock>,
}

impl FrameworkConfig {
    /// Render `config` into the shape the framework expects.
    pub fn render(config: &ValidatedConfig) -> Self {
        let env = if config.secrets.is_empty() {
            None
        } else {
            let entries = config
                .secrets
                .iter()
                .map(|secret| {
                    (
                        secret.name.clone(),
                        SecretField {
                            kind: secret.kind,
                            context: secret.context,
                            access: secret.access,
                        },
                    )
                })
                .collect();
            Some(EnvBlock {
                schema: SecretSchema(entries),
            })
        };

        Self {
            output: config.output,
            adapter: config.adapter.clone(),
            site: config.site.clone(),
            base: config.base.clone(),
            env,
        }
    }

    /// Pretty JSON form of the manifest.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Environment block of the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvBlock {
    /// Secret declarations keyed by environment variable name.
    pub schema: SecretSchema,
}

/// Ordered name → declaration map.
///
/// Serialized as a JSON object whose keys follow descriptor declaration
/// order, which `serde_json`'s default map type would not preserve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretSchema(Vec<(String, SecretField)>);

impl SecretSchema {
    /// Declared entries in order.
    pub fn entries(&self) -> &[(String, SecretField)] {
        &self.0
    }
}

impl Serialize for SecretSchema {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter().map(|(name, field)| (name, field)))
    }
}

/// One secret declaration as the framework sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SecretField {
    /// Value type.
    #[serde(rename = "type")]
    pub kind: SecretKind,

    /// Reference context.
    pub context: SecretContext,

    /// Bundle visibility class.
    pub access: SecretAccess,
}
