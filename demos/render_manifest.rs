use site_config::framework::{Framework, ManifestFramework};
use site_config::{load_config, DeploymentProfile};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    for profile in DeploymentProfile::all() {
        let config = load_config(profile)?;
        let manifest = ManifestFramework.define_config(&config);

        println!("# {profile}");
        println!("{}", manifest.to_json_string()?);
        println!();
    }

    Ok(())
}
