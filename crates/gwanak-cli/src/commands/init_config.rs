use std::path::Path;

use anyhow::{bail, Result};
use tracing::info;

use gwanak_core::AppConfig;

pub fn run(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config already exists at {}\nUse --force to overwrite it.",
            path.display()
        );
    }

    AppConfig::default().save_to(path)?;
    info!("Wrote default config to {}", path.display());
    println!("Wrote default configuration to {}", path.display());

    Ok(())
}
