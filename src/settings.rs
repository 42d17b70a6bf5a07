// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Settings
//!
//! The resolved application settings produced by `SettingsBuilder`.
//!
//! Every value is the raw string taken from the environment, or the documented default
//! when the variable was not set. Nothing is parsed or validated here: a `db_port` of
//! `"not-a-port"` is passed through to whichever component consumes it.

use crate::env_keys::{
    DB_ENGINE_DEFAULT, DB_ENGINE_ENV_KEY, DB_HOST_DEFAULT, DB_HOST_ENV_KEY, DB_NAME_DEFAULT,
    DB_NAME_ENV_KEY, DB_PASS_DEFAULT, DB_PASS_ENV_KEY, DB_PORT_DEFAULT, DB_PORT_ENV_KEY,
    DB_USER_DEFAULT, DB_USER_ENV_KEY, FLASK_APP_DEFAULT, FLASK_APP_ENV_KEY, FLASK_DEBUG_DEFAULT,
    FLASK_DEBUG_ENV_KEY, FLASK_ENV_DEFAULT, FLASK_ENV_ENV_KEY, FLASK_HOST_DEFAULT,
    FLASK_HOST_ENV_KEY, FLASK_LOG_LEVEL_DEFAULT, FLASK_LOG_LEVEL_ENV_KEY, FLASK_PORT_DEFAULT,
    FLASK_PORT_ENV_KEY, FLASK_SECRET_KEY_DEFAULT, FLASK_SECRET_KEY_ENV_KEY, REDACTED,
    TELEMETRY_ENABLED_DEFAULT, TELEMETRY_ENABLED_ENV_KEY, TELEMETRY_URL_DEFAULT,
    TELEMETRY_URL_ENV_KEY, X_API_KEY_DEFAULT, X_API_KEY_ENV_KEY,
};
use serde::Serialize;
use std::fmt;

/// Resolved application settings.
///
/// Built once at startup and handed to the components that need it. Every field always
/// holds a value, so lookups never come back empty for a recognized name.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    // General
    pub flask_app: String,
    pub flask_env: String,
    pub flask_debug: String,
    pub flask_host: String,
    pub flask_port: String,
    pub log_level: String,

    // APIs
    pub secret_key: String,
    pub x_api_key: String,

    // Telemetry
    pub telemetry_enabled: String,
    pub telemetry_url: String,

    // Database
    pub db_engine: String,
    pub db_user: String,
    pub db_pass: String,
    pub db_host: String,
    pub db_port: String,
    pub db_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            flask_app: FLASK_APP_DEFAULT.into(),
            flask_env: FLASK_ENV_DEFAULT.into(),
            flask_debug: FLASK_DEBUG_DEFAULT.into(),
            flask_host: FLASK_HOST_DEFAULT.into(),
            flask_port: FLASK_PORT_DEFAULT.into(),
            log_level: FLASK_LOG_LEVEL_DEFAULT.into(),
            secret_key: FLASK_SECRET_KEY_DEFAULT.into(),
            x_api_key: X_API_KEY_DEFAULT.into(),
            telemetry_enabled: TELEMETRY_ENABLED_DEFAULT.into(),
            telemetry_url: TELEMETRY_URL_DEFAULT.into(),
            db_engine: DB_ENGINE_DEFAULT.into(),
            db_user: DB_USER_DEFAULT.into(),
            db_pass: DB_PASS_DEFAULT.into(),
            db_host: DB_HOST_DEFAULT.into(),
            db_port: DB_PORT_DEFAULT.into(),
            db_name: DB_NAME_DEFAULT.into(),
        }
    }
}

impl Settings {
    /// Looks up a setting by the environment variable it is read from.
    ///
    /// Returns `None` only for names that are not one of the recognized variables.
    ///
    /// # Example
    ///
    /// ```rust
    /// use settings_builder::Settings;
    ///
    /// let settings = Settings::default();
    /// assert_eq!(settings.get("DB_PORT"), Some("5432"));
    /// assert_eq!(settings.get("UNKNOWN"), None);
    /// ```
    pub fn get(&self, env_key: &str) -> Option<&str> {
        let value = match env_key {
            FLASK_APP_ENV_KEY => &self.flask_app,
            FLASK_ENV_ENV_KEY => &self.flask_env,
            FLASK_DEBUG_ENV_KEY => &self.flask_debug,
            FLASK_HOST_ENV_KEY => &self.flask_host,
            FLASK_PORT_ENV_KEY => &self.flask_port,
            FLASK_LOG_LEVEL_ENV_KEY => &self.log_level,
            FLASK_SECRET_KEY_ENV_KEY => &self.secret_key,
            X_API_KEY_ENV_KEY => &self.x_api_key,
            TELEMETRY_ENABLED_ENV_KEY => &self.telemetry_enabled,
            TELEMETRY_URL_ENV_KEY => &self.telemetry_url,
            DB_ENGINE_ENV_KEY => &self.db_engine,
            DB_USER_ENV_KEY => &self.db_user,
            DB_PASS_ENV_KEY => &self.db_pass,
            DB_HOST_ENV_KEY => &self.db_host,
            DB_PORT_ENV_KEY => &self.db_port,
            DB_NAME_ENV_KEY => &self.db_name,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Iterates over all settings as `(env_key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        crate::env_keys::ALL_ENV_KEYS
            .into_iter()
            .filter_map(move |key| self.get(key).map(|value| (key, value)))
    }

    /// Returns a copy with the session secret, API key and database password masked.
    pub fn redacted(&self) -> Settings {
        Settings {
            secret_key: REDACTED.into(),
            x_api_key: REDACTED.into(),
            db_pass: REDACTED.into(),
            ..self.clone()
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = self.redacted();
        let mut s = f.debug_struct("Settings");
        for (key, value) in redacted.iter() {
            s.field(key, &value);
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env_keys::ALL_ENV_KEYS;

    #[test]
    fn defaults_match_documented_values() {
        let settings = Settings::default();

        assert_eq!(settings.flask_app, "app.py");
        assert_eq!(settings.flask_env, "production");
        assert_eq!(settings.flask_debug, "False");
        assert_eq!(settings.flask_host, "localhost");
        assert_eq!(settings.flask_port, "5000");
        assert_eq!(settings.log_level, "DEBUG");
        assert_eq!(settings.secret_key, "you-will-never-guess-me");
        assert_eq!(settings.x_api_key, "you-will-never-guess-me");
        assert_eq!(settings.telemetry_enabled, "True");
        assert_eq!(settings.telemetry_url, "http://localhost:3000/telemetry");
        assert_eq!(settings.db_engine, "pg");
        assert_eq!(settings.db_user, "root");
        assert_eq!(settings.db_pass, "password");
        assert_eq!(settings.db_host, "127.0.0.1");
        assert_eq!(settings.db_port, "5432");
        assert_eq!(settings.db_name, "database");
    }

    #[test]
    fn every_recognized_key_has_a_value() {
        let settings = Settings::default();
        for key in ALL_ENV_KEYS {
            assert!(settings.get(key).is_some(), "{key} has no value");
        }
        assert_eq!(settings.iter().count(), ALL_ENV_KEYS.len());
    }

    #[test]
    fn get_is_keyed_by_env_var_not_field_name() {
        let settings = Settings {
            log_level: "INFO".into(),
            ..Settings::default()
        };
        assert_eq!(settings.get("FLASK_LOG_LEVEL"), Some("INFO"));
        assert_eq!(settings.get("log_level"), None);
    }

    #[test]
    fn redacted_masks_only_secrets() {
        let settings = Settings {
            secret_key: "s3cret".into(),
            x_api_key: "api-key".into(),
            db_pass: "hunter2".into(),
            db_user: "admin".into(),
            ..Settings::default()
        };

        let redacted = settings.redacted();
        assert_eq!(redacted.secret_key, REDACTED);
        assert_eq!(redacted.x_api_key, REDACTED);
        assert_eq!(redacted.db_pass, REDACTED);
        assert_eq!(redacted.db_user, "admin");
        assert_eq!(redacted.db_port, settings.db_port);
    }

    #[test]
    fn debug_output_does_not_leak_secrets() {
        let settings = Settings {
            db_pass: "hunter2".into(),
            ..Settings::default()
        };
        let printed = format!("{settings:?}");
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("DB_HOST"));
    }
}
