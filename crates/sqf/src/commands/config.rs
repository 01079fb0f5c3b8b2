//! Config command implementation.
//!
//! View and create configuration settings.
//! Config file is located at ~/.config/sqf/config.toml.

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use sqlfilter_rs::FilterTranslator;
use tracing::debug;

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Default config file contents.
const DEFAULT_CONFIG: &str = r#"# sqf - filter expression translator configuration

# Config schema version (do not modify)
version = 1

# Output preferences
[output]
# color = true              # Enable colors

# SQL column overrides, keyed by field name
[columns]
# TITLE = "ARTICLE.TITLE"
# NAME = "ARTICLE.NAME"
# WEIGHT = "ARTICLE.WEIGHT"
# POSTDATE = "ARTICLE_POST_DATE"
"#;

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// SQL column overrides, keyed by field name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub columns: BTreeMap<String, String>,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            output: OutputConfig::default(),
            columns: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Builds a translator with this config's column overrides applied.
    pub fn translator(&self) -> Result<FilterTranslator> {
        self.columns
            .iter()
            .try_fold(FilterTranslator::new(), |translator, (field, column)| {
                translator
                    .with_column(field, column.as_str())
                    .map_err(|e| CommandError::Config(format!("Invalid [columns] entry: {}", e)))
            })
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Gets the config directory path.
/// Uses XDG-style paths: ~/.config/sqf/ on all platforms.
fn get_config_dir() -> Result<PathBuf> {
    // Use XDG_CONFIG_HOME if set, otherwise ~/.config/sqf
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("sqf"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("sqf"))
        .ok_or_else(|| {
            CommandError::Config("Could not determine config directory".to_string())
        })
}

/// Gets the config file path.
///
/// An explicit path (`--config` or `SQF_CONFIG`) wins over the default location.
pub fn get_config_path(ctx: &CommandContext) -> Result<PathBuf> {
    if let Some(path) = &ctx.config_path {
        return Ok(path.clone());
    }

    let config_dir = get_config_dir()?;
    Ok(config_dir.join("config.toml"))
}

/// Loads the configuration from disk.
pub fn load_config(ctx: &CommandContext) -> Result<Config> {
    let path = get_config_path(ctx)?;

    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    debug!(path = %path.display(), columns = config.columns.len(), "loaded config");
    migrate_config(config)
}

/// Migrates config to current version if needed.
/// Returns the config as-is if already at current version.
fn migrate_config(mut config: Config) -> Result<Config> {
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config(ctx)?;
    let path = get_config_path(ctx)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        use owo_colors::OwoColorize;

        let header = "Configuration";
        if ctx.colors_enabled(&config) {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        if path.exists() {
            println!("[output]");
            if let Some(color) = config.output.color {
                println!("  color: {}", color);
            }

            println!("\n[columns]");
            for (field, column) in &config.columns {
                println!("  {} = {}", field, column);
            }
        } else {
            println!("(No config file exists. Run 'sqf config init' to create one.)");
        }
    }

    Ok(())
}

/// Executes the config init command.
pub fn execute_init(ctx: &CommandContext, force: bool) -> Result<()> {
    let path = get_config_path(ctx)?;

    if path.exists() && !force {
        return Err(CommandError::Config(format!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| CommandError::Config(format!("Failed to create config directory: {}", e)))?;
    }

    fs::write(&path, DEFAULT_CONFIG)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Created default config at: {}", path.display());
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path(ctx)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "path": path.display().to_string(),
            "exists": path.exists(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", path.display());
    }

    Ok(())
}
