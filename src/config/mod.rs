//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! descriptor file (TOML)          built-in profile
//!     → loader.rs (parse)             → profiles.rs (literal)
//!     → validation.rs (semantic checks)
//!     → ValidatedConfig (validated, immutable)
//!     → handed as-is to the framework boundary
//! ```
//!
//! # Design Decisions
//! - A descriptor is immutable once constructed; there is no reload path
//! - All fields default, so the minimal descriptor is the plain-static one
//! - Validation separates syntactic (serde) from semantic checks
//! - Every violation is reported, not just the first

pub mod loader;
pub mod profiles;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use profiles::DeploymentProfile;
pub use schema::SiteConfig;
pub use validation::{ValidatedConfig, ValidationError};
