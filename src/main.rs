//! Descriptor inspection CLI.
//!
//! Thin shell over the library: every subcommand resolves a descriptor and
//! prints one of its two serialized forms. Logs go to stderr so stdout
//! stays parseable.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use site_config::config::loader::{self, ConfigError};
use site_config::framework::{Framework, ManifestFramework};
use site_config::{load_config, DeploymentProfile, ValidatedConfig};

#[derive(Parser)]
#[command(name = "site-config")]
#[command(about = "Inspect and validate site deployment descriptors", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List built-in deployment profiles
    Profiles,
    /// Print a profile's descriptor in declarative form
    Show {
        #[arg(short, long, default_value = "hosted-server")]
        profile: DeploymentProfile,
    },
    /// Check a descriptor file against the validation rules
    Validate {
        /// Path to a TOML descriptor
        file: PathBuf,
    },
    /// Print the framework manifest for a profile or descriptor file
    Emit {
        #[arg(short, long, default_value = "hosted-server", conflicts_with = "file")]
        profile: DeploymentProfile,

        /// Path to a TOML descriptor
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "site_config=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            if let Some(ConfigError::Validation(violations)) = err.downcast_ref::<ConfigError>() {
                for violation in violations {
                    eprintln!("  - {violation}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Profiles => {
            for profile in DeploymentProfile::all() {
                println!("{:<24} {}", profile.as_str(), profile.summary());
            }
        }
        Commands::Show { profile } => {
            let config = load_config(profile)?;
            report_loaded(&config);
            print!("{}", loader::to_toml_string(&config)?);
        }
        Commands::Validate { file } => {
            let config = loader::load_file(&file)?;
            report_loaded(&config);
            println!("OK: {} ({} secret(s))", file.display(), config.secrets.len());
        }
        Commands::Emit { profile, file } => {
            let config = match file {
                Some(path) => loader::load_file(&path)?,
                None => load_config(profile)?,
            };
            report_loaded(&config);
            let manifest = ManifestFramework.define_config(&config);
            println!("{}", manifest.to_json_string()?);
        }
    }
    Ok(())
}

fn report_loaded(config: &ValidatedConfig) {
    tracing::info!(
        output = %config.output,
        secrets = config.secrets.len(),
        "Descriptor loaded"
    );
}
