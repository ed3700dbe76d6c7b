//! `parley config`: Configuration management commands.

use std::path::Path;
use parley_config::AppConfig;

pub fn init(force: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = AppConfig::config_path();
    if write_default(&config_path, force)? {
        println!("Created config.toml at: {}", config_path.display());
        println!();
        println!("Next steps:");
        println!("   1. Make sure Ollama is running, or set provider/api_key for a hosted model");
        println!("   2. Run: parley chat");
    } else {
        println!("Config already exists at: {}", config_path.display());
        println!("   Edit it manually or re-run with --force.");
    }
    Ok(())
}

pub fn show() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    if config.api_key.is_some() {
        config.api_key = Some("[REDACTED]".into());
    }
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

pub fn path() {
    println!("{}", AppConfig::config_path().display());
}

/// Write the default config to `path`. Returns false when a file is already
/// there and `force` is not set.
fn write_default(path: &Path, force: bool) -> std::io::Result<bool> {
    if path.exists() && !force {
        return Ok(false);
    }
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, AppConfig::default_toml())?;
    Ok(true)
}
