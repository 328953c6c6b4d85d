use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration shared with the external tray shell.
/// The core only consumes `database`; `hotkey` and `auto_start` are
/// persisted on behalf of the GUI collaborator and drive nothing here.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_hotkey")]
    pub hotkey: String,
    #[serde(default)]
    pub auto_start: bool,
    #[serde(default)]
    pub database: String,
}

fn default_hotkey() -> String {
    "Win+Shift+L".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hotkey: default_hotkey(),
            auto_start: false,
            database: Self::database_file().to_string_lossy().to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("worklog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("worklog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("failed to read {}: {e}", path.display())))?;

        let mut cfg: Config = if content.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("failed to parse {}: {e}", path.display())))?
        };

        cfg.normalize();
        Ok(cfg)
    }

    /// Write the configuration file, creating the directory if needed.
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(Self::config_file(), yaml)?;
        Ok(())
    }

    /// Initialize configuration: create the directory, resolve the database
    /// path (user provided or default) and write the config file unless
    /// running in test mode.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let cfg = Config {
            hotkey: default_hotkey(),
            auto_start: false,
            database: db_path.to_string_lossy().to_string(),
        };

        if !is_test {
            cfg.save()?;
        }

        Ok(cfg)
    }

    /// Fill blank fields with defaults and resolve a relative database path
    /// against the config directory, mirroring what the tray shell expects.
    fn normalize(&mut self) {
        if self.hotkey.trim().is_empty() {
            self.hotkey = default_hotkey();
        }
        if self.database.trim().is_empty() {
            self.database = Self::database_file().to_string_lossy().to_string();
        } else if Path::new(&self.database).is_relative() {
            self.database = Self::config_dir()
                .join(&self.database)
                .to_string_lossy()
                .to_string();
        }
    }
}
