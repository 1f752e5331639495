use super::Config;
use crate::error::ConfigError;
use crate::media::types::MAX_FILE_SIZE_MB_CEILING;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::Path;

impl Config {
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        let stylemind_dir = home.join(".stylemind");

        if !stylemind_dir.exists() {
            fs::create_dir_all(&stylemind_dir).context("Failed to create .stylemind directory")?;
        }

        Self::load_or_init_at(&stylemind_dir.join("config.toml"))
    }

    /// Load `config_path`, writing a default file there first if it is missing.
    pub fn load_or_init_at(config_path: &Path) -> Result<Self> {
        let mut config = if config_path.exists() {
            let contents = fs::read_to_string(config_path).context("Failed to read config file")?;
            let mut config: Config =
                toml::from_str(&contents).context("Failed to parse config file")?;
            config.config_path = config_path.to_path_buf();
            config
        } else {
            let config = Self {
                config_path: config_path.to_path_buf(),
                ..Self::default()
            };
            config.save()?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let parsed = url::Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::Validation(format!("api.base_url {:?}: {e}", self.api.base_url))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "api.base_url must be http or https, got {}",
                parsed.scheme()
            )));
        }

        if self.api.connect_timeout_secs == 0
            || self.api.analyze_timeout_secs == 0
            || self.api.generate_timeout_secs == 0
        {
            return Err(ConfigError::Validation(
                "api timeouts must be at least one second".into(),
            ));
        }

        if self.media.max_file_size_mb == 0 {
            return Err(ConfigError::Validation(
                "media.max_file_size_mb must be positive".into(),
            ));
        }
        if self.media.max_file_size_mb > MAX_FILE_SIZE_MB_CEILING {
            return Err(ConfigError::Validation(format!(
                "media.max_file_size_mb must be at most {MAX_FILE_SIZE_MB_CEILING}, got {}",
                self.media.max_file_size_mb
            )));
        }

        Ok(())
    }
}
