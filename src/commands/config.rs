use anyhow::Result;
use colored::Colorize;
use reno_quote::config::{self, Config};
use tracing::info;

/// Execute the config show command
///
/// Displays the current configuration with secrets masked
pub fn show(config_path: Option<&str>) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;
    let sanitized = sanitize_secrets(&cfg);

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&sanitized)?;
    println!("{}", toml_string);

    info!("Configuration displayed successfully");
    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: Option<&str>) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());
    info!("Validating configuration file");

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    if cfg.ai.enabled && !cfg.ai.is_configured() {
        println!(
            "{}",
            format!("  ai.enabled is set but no api_key was found; set {}__AI__API_KEY", config::ENV_PREFIX).yellow()
        );
    }

    info!("Configuration validation successful");
    Ok(())
}

/// Sanitize secrets in configuration for safe display
fn sanitize_secrets(cfg: &Config) -> Config {
    let mut sanitized = cfg.clone();
    sanitized.ai.api_key = sanitized.ai.api_key.as_deref().map(mask_api_key);
    sanitized
}

/// Keep a short vendor prefix and the last four characters, e.g. "sk-...cdef".
/// Keys too short to hide anything are fully masked.
fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() < 12 {
        return "***".to_string();
    }

    let prefix: String = match chars.iter().position(|c| *c == '-') {
        Some(dash) if dash < 8 => chars[..=dash].iter().collect(),
        _ => String::new(),
    };
    let suffix: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", prefix, suffix)
}
