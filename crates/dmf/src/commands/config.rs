//! Config command implementation.
//!
//! View and manage configuration settings.
//! Config file is located at ~/.config/dmf/config.toml.

use std::env;
use std::fs;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CommandContext, CommandError, Result};

/// Current config file version. Increment when making breaking changes to schema.
const CONFIG_VERSION: u32 = 1;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "DMF_CONFIG";

/// Configuration file structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Config schema version for migrations.
    /// Defaults to current version when not present in file.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Default JSON file with demo records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<PathBuf>,

    /// Directory containing the demo files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_dir: Option<PathBuf>,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Returns the current config version (used by serde default).
fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            records: None,
            demo_dir: None,
            output: OutputConfig::default(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// Gets the config file path.
///
/// Resolution order: `$DMF_CONFIG`, `$XDG_CONFIG_HOME/dmf/config.toml`,
/// `~/.config/dmf/config.toml`.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(path) = env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg_config).join("dmf").join("config.toml"));
    }

    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config").join("dmf").join("config.toml"))
        .ok_or_else(|| CommandError::Config("Could not determine config directory".to_string()))
}

/// Loads the configuration from disk.
///
/// A missing file yields the default configuration.
pub fn load_config() -> Result<Config> {
    let path = get_config_path()?;

    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| CommandError::Config(format!("Failed to read config: {}", e)))?;

    let mut config: Config = toml::from_str(&content)
        .map_err(|e| CommandError::Config(format!("Failed to parse config: {}", e)))?;

    // Version 1 is the only schema so far
    config.version = CONFIG_VERSION;
    Ok(config)
}

/// Saves the configuration to disk.
fn save_config(config: &Config) -> Result<()> {
    let path = get_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| CommandError::Config(format!("Failed to create config directory: {}", e)))?;
    }

    let content = toml::to_string_pretty(config)
        .map_err(|e| CommandError::Config(format!("Failed to serialize config: {}", e)))?;

    fs::write(&path, content)
        .map_err(|e| CommandError::Config(format!("Failed to write config: {}", e)))?;

    Ok(())
}

/// Executes the config show command.
pub fn execute_show(ctx: &CommandContext) -> Result<()> {
    let config = load_config()?;
    let path = get_config_path()?;

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
        if ctx.use_colors {
            println!("{}\n", header.green().bold());
        } else {
            println!("{}\n", header);
        }

        println!("File: {}", path.display());
        println!("Exists: {}\n", path.exists());

        if path.exists() {
            println!("Settings:");
            if let Some(ref records) = config.records {
                println!("  records: {}", records.display());
            }
            if let Some(ref demo_dir) = config.demo_dir {
                println!("  demo_dir: {}", demo_dir.display());
            }

            println!("\n[output]");
            if let Some(color) = config.output.color {
                println!("  color: {}", color);
            }
        } else {
            println!("(No config file exists. Run 'dmf config set <key> <value>' to create one.)");
        }
    }

    Ok(())
}

/// Options for the config set command.
pub struct ConfigSetOptions {
    /// Configuration key.
    pub key: String,
    /// Configuration value.
    pub value: String,
}

/// Applies one `key = value` setting to a config.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "records" => config.records = Some(PathBuf::from(value)),
        "demo_dir" => config.demo_dir = Some(PathBuf::from(value)),
        "output.color" => config.output.color = Some(parse_bool(value)?),
        _ => {
            return Err(CommandError::Config(format!(
                "Unknown config key '{}'. Valid keys: records, demo_dir, output.color",
                key
            )));
        }
    }
    Ok(())
}

/// Executes the config set command.
pub fn execute_set(ctx: &CommandContext, opts: &ConfigSetOptions) -> Result<()> {
    let mut config = load_config()?;
    let path = get_config_path()?;

    apply_setting(&mut config, &opts.key, &opts.value)?;
    save_config(&config)?;

    if ctx.json_output {
        let output = serde_json::json!({
            "status": "success",
            "key": opts.key,
            "value": opts.value,
            "path": path.display().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else if !ctx.quiet {
        println!("Set {} = {}", opts.key, opts.value);
    }

    Ok(())
}

/// Executes the config path command.
pub fn execute_path(ctx: &CommandContext) -> Result<()> {
    let path = get_config_path()?;

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

/// Parses a boolean value from string.
fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(CommandError::Config(format!(
            "Invalid boolean value '{}'. Use true/false, yes/no, 1/0, or on/off",
            value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    /// Points `DMF_CONFIG` at `path` for the duration of `f`.
    fn with_config_path<T>(path: &std::path::Path, f: impl FnOnce() -> T) -> T {
        let original = env::var(CONFIG_ENV).ok();
        env::set_var(CONFIG_ENV, path);
        let result = f();
        match original {
            Some(val) => env::set_var(CONFIG_ENV, val),
            None => env::remove_var(CONFIG_ENV),
        }
        result
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.records.is_none());
        assert!(config.demo_dir.is_none());
        assert!(config.output.color.is_none());
    }

    #[test]
    fn test_parse_config_toml() {
        let config: Config = toml::from_str(
            r#"
records = "/data/records.json"
demo_dir = "/data/demos"

[output]
color = false
"#,
        )
        .unwrap();
        assert_eq!(config.version, CONFIG_VERSION);
        assert_eq!(config.records, Some(PathBuf::from("/data/records.json")));
        assert_eq!(config.demo_dir, Some(PathBuf::from("/data/demos")));
        assert_eq!(config.output.color, Some(false));
    }

    #[test]
    fn test_parse_bool() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool("ON").unwrap());
        assert!(!parse_bool("no").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(parse_bool("maybe").is_err());
    }

    #[test]
    fn test_apply_setting_unknown_key() {
        let mut config = Config::default();
        let err = apply_setting(&mut config, "token", "x").unwrap_err();
        assert!(err.to_string().contains("Unknown config key 'token'"));
    }

    #[test]
    fn test_apply_setting_known_keys() {
        let mut config = Config::default();
        apply_setting(&mut config, "records", "r.json").unwrap();
        apply_setting(&mut config, "demo_dir", "/demos").unwrap();
        apply_setting(&mut config, "output.color", "off").unwrap();
        assert_eq!(config.records, Some(PathBuf::from("r.json")));
        assert_eq!(config.demo_dir, Some(PathBuf::from("/demos")));
        assert_eq!(config.output.color, Some(false));
    }

    #[test]
    #[serial]
    fn test_config_path_from_env() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        let resolved = with_config_path(&path, get_config_path).unwrap();
        assert_eq!(resolved, path);
    }

    #[test]
    #[serial]
    fn test_load_missing_config_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");
        let config = with_config_path(&path, load_config).unwrap();
        assert!(config.records.is_none());
    }

    #[test]
    #[serial]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let loaded = with_config_path(&path, || {
            let mut config = Config::default();
            config.demo_dir = Some(PathBuf::from("/srv/demos"));
            config.output.color = Some(true);
            save_config(&config)?;
            load_config()
        })
        .unwrap();

        assert!(path.exists());
        assert_eq!(loaded.demo_dir, Some(PathBuf::from("/srv/demos")));
        assert_eq!(loaded.output.color, Some(true));
    }

    #[test]
    #[serial]
    fn test_load_invalid_config_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "records = [not valid").unwrap();

        let result = with_config_path(&path, load_config);
        assert!(matches!(result, Err(CommandError::Config(_))));
    }
}
