use crate::config::Config;
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;

pub const THEME_ENV_VAR: &str = "PROMPT_POWERLINE_THEME";
pub const STYLE_ENV_VAR: &str = "PROMPT_POWERLINE_STYLE";
pub const CONFIG_ENV_VAR: &str = "PROMPT_POWERLINE_CONFIG";

/// Load configuration with priority: Env vars > Config files > Defaults.
/// CLI flags are applied on top by the caller.
pub async fn load_config(config_path: Option<PathBuf>) -> Result<Config> {
    let mut config = if let Some(path) = config_path {
        load_config_file(&path).await?
    } else {
        load_config_from_default_locations().await
    };

    apply_env_overrides(&mut config);

    Ok(config)
}

async fn load_config_from_default_locations() -> Config {
    for path in get_config_search_paths() {
        if !path.exists() {
            continue;
        }
        match load_config_file(&path).await {
            Ok(config) => return config,
            Err(e) => {
                eprintln!("Warning: Failed to load config from {}: {:#}", path.display(), e);
            }
        }
    }

    Config::default()
}

/// Get list of paths to search for configuration files
pub fn get_config_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(".prompt-powerline.json")];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("prompt-powerline").join("config.json"));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".config").join("prompt-powerline").join("config.json"));
    }

    paths.dedup();
    paths
}

/// Load configuration from a specific file
pub async fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    Ok(config)
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(theme) = env::var(THEME_ENV_VAR) {
        config.theme = theme;
    }

    if let Ok(style) = env::var(STYLE_ENV_VAR) {
        config.style = style;
    }
}
