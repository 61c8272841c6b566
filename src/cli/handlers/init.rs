use crate::config::{AtlasConfig, AtlasSettings, CONFIG_FILE_NAME};
use crate::error::AtlasError;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init(path: String) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(AtlasError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = AtlasConfig {
        atlas: AtlasSettings {
            path,
            ..AtlasSettings::default()
        },
        ..AtlasConfig::default()
    };

    // Create data directory
    let data_path = config.data_path(&cwd);
    std::fs::create_dir_all(&data_path)?;

    // Save config
    config.save(&config_path)?;

    println!(
        "{} atlas project in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!("  Data:   {}", data_path.display());

    Ok(())
}
