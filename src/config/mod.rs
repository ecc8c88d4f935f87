use crate::core::form::FormDefaults;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_hhmm;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_start")]
    pub start: String,
    #[serde(default = "default_end")]
    pub end: String,
    #[serde(default = "default_break")]
    pub break_time: String,
    #[serde(default = "default_colored_output")]
    pub colored_output: bool,
}

fn default_start() -> String {
    "09:00".to_string()
}
fn default_end() -> String {
    "18:00".to_string()
}
fn default_break() -> String {
    "01:00".to_string()
}
fn default_colored_output() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: default_end(),
            break_time: default_break(),
            colored_output: default_colored_output(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.rworkhours`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".rworkhours")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworkhours.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        info!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    /// Check that every time string is a valid `HH:MM`
    pub fn validate(&self) -> AppResult<()> {
        self.form_defaults().map(|_| ())
    }

    /// Initial values for the work form
    pub fn form_defaults(&self) -> AppResult<FormDefaults> {
        let parse = |name: &str, value: &str| {
            parse_hhmm(value).ok_or_else(|| {
                AppError::Config(format!("'{}' is not a valid HH:MM value: {}", name, value))
            })
        };

        Ok(FormDefaults {
            start: parse("start", &self.start)?,
            end: parse("end", &self.end)?,
            break_time: parse("break_time", &self.break_time)?,
        })
    }

    /// Write the configuration as YAML, creating parent directories
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
