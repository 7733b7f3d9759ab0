//! Hand-off seam between descriptor and framework.
//!
//! The framework's config entry point accepts the rendered object and
//! returns it unchanged; modelling the call as a trait keeps that boundary
//! mockable in tests without touching the real framework.

use crate::config::validation::ValidatedConfig;
use crate::framework::manifest::FrameworkConfig;

/// A consumer of validated descriptors.
///
/// The only implementation shipped here renders the manifest shape;
/// test doubles can record or reshape the hand-off instead.
pub trait Framework {
    /// Accept a validated descriptor and produce the framework's view of it.
    fn define_config(&self, config: &ValidatedConfig) -> FrameworkConfig;
}

/// The identity hand-off: render the descriptor and pass it through.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestFramework;

impl Framework for ManifestFramework {
    fn define_config(&self, config: &ValidatedConfig) -> FrameworkConfig {
        FrameworkConfig::render(config)
    }
}
