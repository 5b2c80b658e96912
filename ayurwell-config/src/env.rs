// Environment variable loading

use crate::{ConfigError, Result};
use std::collections::HashMap;
use std::env;

/// Reads environment variables, optionally restricted to a prefix.
///
/// With prefix `AYURWELL`, the variable `AYURWELL_SUBMIT_DELAY_MS` is
/// exposed under the key `submit_delay_ms`.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    prefix: Option<String>,
}

impl EnvLoader {
    pub fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    /// All matching variables, keyed by lowercase name with the prefix removed.
    pub fn load(&self) -> Result<HashMap<String, String>> {
        let vars = env::vars().filter_map(|(key, value)| match &self.prefix {
            Some(prefix) => key
                .strip_prefix(prefix.as_str())
                .and_then(|rest| rest.strip_prefix('_'))
                .map(|rest| (rest.to_lowercase(), value)),
            None => Some((key.to_lowercase(), value)),
        });

        Ok(vars.collect())
    }

    /// A single variable, looked up by its unprefixed name.
    pub fn load_var(&self, key: &str) -> Result<String> {
        env::var(self.full_key(key)).map_err(ConfigError::EnvError)
    }

    /// A single variable, or `default` when it is unset.
    pub fn load_var_or(&self, key: &str, default: &str) -> String {
        self.load_var(key).unwrap_or_else(|_| default.to_string())
    }

    fn full_key(&self, key: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}_{}", prefix, key.to_uppercase()),
            None => key.to_uppercase(),
        }
    }
}
