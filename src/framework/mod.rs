//! Framework boundary.
//!
//! Validated descriptors cross into the external framework here: `manifest`
//! renders the object shape its config entry point expects, and `boundary`
//! models the call itself so tests can stand in for the real consumer.

pub mod boundary;
pub mod manifest;

pub use boundary::{Framework, ManifestFramework};
pub use manifest::{EnvBlock, FrameworkConfig, SecretField, SecretSchema};
