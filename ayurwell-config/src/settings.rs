// Registration settings

use crate::{ConfigManager, ConfigValidator, Result, Validate};
use ayurwell_validation::PasswordPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment prefix for every setting (`AYURWELL_SUBMIT_DELAY_MS`, ...).
pub const ENV_PREFIX: &str = "AYURWELL";

/// Longest simulated submission delay accepted.
pub const MAX_SUBMIT_DELAY_MS: u64 = 60_000;

/// Settings consumed by the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistrationSettings {
    /// Product name shown in the welcome notification
    pub app_name: String,

    /// How long the simulated backend takes to answer
    pub submit_delay_ms: u64,

    /// Password rule set
    pub password_policy: PasswordPolicy,
}

impl Default for RegistrationSettings {
    fn default() -> Self {
        Self {
            app_name: "AyurWellness".to_string(),
            submit_delay_ms: 2000,
            password_policy: PasswordPolicy::Strict,
        }
    }
}

impl RegistrationSettings {
    /// Build settings from a populated manager, falling back to defaults for
    /// missing keys. String values (from env or `.env` files) are parsed.
    pub fn from_manager(manager: &ConfigManager) -> Result<Self> {
        let defaults = Self::default();

        let settings = Self {
            app_name: manager
                .get_parsed("app_name")?
                .unwrap_or(defaults.app_name),
            submit_delay_ms: manager
                .get_parsed("submit_delay_ms")?
                .unwrap_or(defaults.submit_delay_ms),
            password_policy: manager
                .get_parsed("password_policy")?
                .unwrap_or(defaults.password_policy),
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings with precedence defaults < `config_file` < `.env` <
    /// process environment.
    pub fn load(config_file: Option<&str>) -> Result<Self> {
        let manager = ConfigManager::with_prefix(ENV_PREFIX.to_string());

        if let Some(path) = config_file {
            manager.load_file_auto(path)?;
        }
        manager.load_dotenv(None)?;

        let settings = Self::from_manager(&manager)?;
        ayurwell_log::debug!(
            "registration settings: delay={}ms policy={}",
            settings.submit_delay_ms,
            settings.password_policy
        );
        Ok(settings)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

impl Validate for RegistrationSettings {
    fn validate(&self) -> Result<()> {
        ConfigValidator::not_empty(&self.app_name, "app_name")?;
        ConfigValidator::in_range(
            self.submit_delay_ms,
            0,
            MAX_SUBMIT_DELAY_MS,
            "submit_delay_ms",
        )?;
        Ok(())
    }
}
