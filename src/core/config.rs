use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_users_path")]
    pub users: PathBuf,
    #[serde(default = "default_companies_path")]
    pub companies: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            users: default_users_path(),
            companies: default_companies_path(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: default_console(),
        }
    }
}

// Default value functions
fn default_users_path() -> PathBuf {
    PathBuf::from("input/users.json")
}

fn default_companies_path() -> PathBuf {
    PathBuf::from("input/companies.json")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output/output.txt")
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "console".to_string()
}

fn default_console() -> bool {
    false
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Resolve the config for a run.
    ///
    /// An explicit path must exist. Without one, `config.toml` in the working
    /// directory is used when present and the built-in defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let fallback = Path::new("config.toml");
        if fallback.exists() {
            Self::from_file(fallback)
        } else {
            let config = Config::default();
            config.validate()?;
            Ok(config)
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.input.users.as_os_str().is_empty() {
            bail!("input.users must not be empty");
        }

        if self.input.companies.as_os_str().is_empty() {
            bail!("input.companies must not be empty");
        }

        if self.output.path.as_os_str().is_empty() {
            bail!("output.path must not be empty");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}
