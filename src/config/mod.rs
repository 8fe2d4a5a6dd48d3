use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub log_dir: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
    #[serde(default = "default_poll_initial_delay")]
    pub poll_initial_delay_secs: u64,
    #[serde(default)]
    pub max_records: Option<usize>,
}

fn default_poll_interval() -> u64 {
    120
}
fn default_poll_initial_delay() -> u64 {
    120
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: Self::default_log_dir().to_string_lossy().to_string(),
            poll_interval_secs: default_poll_interval(),
            poll_initial_delay_secs: default_poll_initial_delay(),
            max_records: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rconnlogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rconnlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rconnlogger.conf")
    }

    /// Default directory holding `connection_logs.json`
    pub fn default_log_dir() -> PathBuf {
        Self::config_dir().join("logs")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A broken config file is logged and ignored; monitoring must not
    /// die on a config parse error.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                log::warn!("invalid config {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                log::warn!("unreadable config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn poll_initial_delay(&self) -> Duration {
        Duration::from_secs(self.poll_initial_delay_secs)
    }

    /// The log location as a directory path.
    pub fn log_location(&self) -> PathBuf {
        expand_tilde(&self.log_dir)
    }

    /// Initialize configuration file and log directory.
    pub fn init_all(custom_dir: Option<String>) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Log dir: user provided or default
        let log_dir = if let Some(name) = custom_dir {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::default_log_dir()
        };

        let config = Config {
            log_dir: log_dir.to_string_lossy().to_string(),
            ..Default::default()
        };

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| AppError::Config(format!("serialize config: {}", e)))?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        log::info!("config file: {}", Self::config_file().display());

        fs::create_dir_all(&log_dir)?;
        log::info!("log directory: {}", log_dir.display());

        Ok(())
    }
}
