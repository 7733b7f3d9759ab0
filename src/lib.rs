//! Site Deployment Configuration Library

pub mod config;
pub mod framework;

pub use config::loader::load_config;
pub use config::profiles::DeploymentProfile;
pub use config::schema::SiteConfig;
pub use config::validation::ValidatedConfig;
