use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::{flog_debug, Error, Result};

const DEFAULT_USER: &str = "guest";
const DEFAULT_HOST: &str = "folio";
const DEFAULT_RESUME: &str = "cv.me.pdf";
const DEFAULT_FRAME_INTERVAL_MS: u64 = 300;
const MIN_FRAME_INTERVAL_MS: u64 = 16;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub user: Option<String>,
    pub host: Option<String>,
    /// Resume URL or local path handed to the opener.
    pub resume: Option<String>,
    /// Command used to open URLs; the platform opener when unset.
    pub opener: Option<String>,
    #[serde(default)]
    pub skip_boot: bool,
    pub frame_interval_ms: Option<u64>,
}

impl Config {
    pub fn folio_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".folio"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::folio_dir()?.join("folio.toml"))
    }

    pub fn effective_user(&self) -> &str {
        self.user.as_deref().unwrap_or(DEFAULT_USER)
    }

    pub fn effective_host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn effective_resume(&self) -> &str {
        self.resume.as_deref().unwrap_or(DEFAULT_RESUME)
    }

    /// Animation interval, clamped so a typo can't spin the logic thread.
    pub fn frame_interval(&self) -> Duration {
        let ms = self
            .frame_interval_ms
            .unwrap_or(DEFAULT_FRAME_INTERVAL_MS)
            .max(MIN_FRAME_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        flog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            flog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(path)?)?;
        config.validate()?;
        flog_debug!(
            "Config loaded: user={} host={} resume={} opener={:?} skip_boot={}",
            config.effective_user(),
            config.effective_host(),
            config.effective_resume(),
            config.opener,
            config.skip_boot
        );
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                flog_debug!("Creating config directory: {}", parent.display());
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        flog_debug!("Config saved to {}", path.display());
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        for (key, value) in [("user", &self.user), ("host", &self.host)] {
            if let Some(v) = value {
                if v.is_empty() || v.chars().any(char::is_whitespace) {
                    return Err(Error::Validation(format!(
                        "{key} must be a non-empty word, got {v:?}"
                    )));
                }
            }
        }
        if matches!(self.opener.as_deref(), Some(o) if o.trim().is_empty()) {
            return Err(Error::Validation("opener must not be blank".to_string()));
        }
        Ok(())
    }
}
