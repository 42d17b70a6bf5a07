// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Settings Builder
//!
//! This module provides the `SettingsBuilder`, which resolves the application `Settings`
//! from the process environment and an optional environment definition file.
//!
//! ## Resolution
//!
//! The builder works in two phases:
//!
//! 1. **Environment Loading**: the nearest `.env` file, searched for from the working
//!    directory upward, is copied into the environment. Variables that are already set
//!    are left untouched, so values exported by the launcher win over the file. A missing,
//!    unreadable or malformed file is logged and otherwise ignored.
//!
//! 2. **Settings Building**: every recognized variable present in the environment
//!    overwrites the corresponding default. Variables that are not set keep the literal
//!    defaults listed in the `env_keys` module.
//!
//! Each setting is read from a single variable name. Values are copied verbatim without
//! parsing or validation.

use crate::{
    env_file::{apply_env_file, find_env_file},
    env_keys::{
        DB_ENGINE_ENV_KEY, DB_HOST_ENV_KEY, DB_NAME_ENV_KEY, DB_PASS_ENV_KEY, DB_PORT_ENV_KEY,
        DB_USER_ENV_KEY, ENV_FILE_NAME, FLASK_APP_ENV_KEY, FLASK_DEBUG_ENV_KEY, FLASK_ENV_ENV_KEY,
        FLASK_HOST_ENV_KEY, FLASK_LOG_LEVEL_ENV_KEY, FLASK_PORT_ENV_KEY, FLASK_SECRET_KEY_ENV_KEY,
        TELEMETRY_ENABLED_ENV_KEY, TELEMETRY_URL_ENV_KEY, X_API_KEY_ENV_KEY,
    },
    environment::{Environment, ProcessEnvironment},
    settings::Settings,
};
use std::{env, path::PathBuf};
use tracing::{debug, warn};

/// Builder that resolves `Settings` from an environment.
///
/// By default the builder looks for a file named `.env` starting at the current working
/// directory. Both the file name and the starting directory can be changed, and the file
/// step can be turned off entirely.
///
/// # Example
///
/// ```rust,no_run
/// use settings_builder::SettingsBuilder;
///
/// let settings = SettingsBuilder::new().build();
/// println!("listening on {}:{}", settings.flask_host, settings.flask_port);
/// ```
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    env_file_name: Option<String>,
    search_from: Option<PathBuf>,
    skip_env_file: bool,
    envs_already_loaded: bool,
}

impl SettingsBuilder {
    /// Creates a new builder with `.env` lookup from the working directory enabled.
    pub fn new() -> SettingsBuilder {
        SettingsBuilder::default()
    }

    /// Uses `name` instead of `.env` as the environment file name.
    ///
    /// # Example
    ///
    /// ```rust
    /// use settings_builder::SettingsBuilder;
    ///
    /// let builder = SettingsBuilder::new().env_file_name(".env.local");
    /// ```
    pub fn env_file_name(mut self, name: impl Into<String>) -> Self {
        self.env_file_name = Some(name.into());
        self
    }

    /// Starts the environment file search at `dir` instead of the working directory.
    pub fn search_from(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_from = Some(dir.into());
        self
    }

    /// Disables the environment file step. Settings then come from the environment and
    /// the defaults only.
    pub fn without_env_file(mut self) -> Self {
        self.skip_env_file = true;
        self
    }

    /// Loads the environment definition file into `env`.
    ///
    /// The nearest file with the configured name is searched for from the starting
    /// directory upward. Its pairs are added to `env` only for keys that are not already
    /// set. If the file does not exist, or cannot be read or parsed, the failure is logged
    /// and `env` is left unchanged.
    ///
    /// # Note
    ///
    /// This method is called automatically by `build()` and `build_from()` the first time
    /// they run, so manual invocation is usually unnecessary.
    pub fn load_envs<E>(&self, env: &mut E)
    where
        E: Environment + ?Sized,
    {
        if self.skip_env_file {
            return;
        }

        let file_name = self.env_file_name.as_deref().unwrap_or(ENV_FILE_NAME);
        let start = match &self.search_from {
            Some(dir) => dir.clone(),
            None => match env::current_dir() {
                Ok(dir) => dir,
                Err(err) => {
                    warn!(error = err.to_string(), "failed to read working directory");
                    return;
                }
            },
        };

        let Some(path) = find_env_file(&start, file_name) else {
            debug!(
                file_name = file_name,
                start = ?start,
                "env file not found, using environment and defaults"
            );
            return;
        };

        match apply_env_file(&path, env) {
            Ok(added) => debug!(path = ?path, added = added, "env file loaded"),
            Err(err) => warn!(
                path = ?path,
                error = ?err,
                "ignoring env file that could not be loaded"
            ),
        }
    }

    /// Resolves the settings from the process environment.
    ///
    /// Loads the environment file into the process environment first, unless it was
    /// already loaded by this builder or the file step is disabled.
    pub fn build(&mut self) -> Settings {
        self.build_from(&mut ProcessEnvironment::new())
    }

    /// Resolves the settings from `env`.
    ///
    /// 1. Loads the environment file into `env` if this builder has not done so yet
    /// 2. Starts from `Settings::default()`
    /// 3. Overwrites each setting whose variable is present in `env`
    ///
    /// Resolution never fails. Running it again against an unchanged environment yields
    /// an identical `Settings`.
    pub fn build_from<E>(&mut self, env: &mut E) -> Settings
    where
        E: Environment + ?Sized,
    {
        if !self.envs_already_loaded {
            self.load_envs(env);
            self.envs_already_loaded = true;
        }

        let mut cfg = Settings::default();

        for (key, value) in env.vars() {
            if self.fill_general(&mut cfg, &key, &value) {
                continue;
            };
            if self.fill_api(&mut cfg, &key, &value) {
                continue;
            };
            if self.fill_telemetry(&mut cfg, &key, &value) {
                continue;
            };
            if self.fill_database(&mut cfg, &key, &value) {
                continue;
            };
        }

        cfg
    }
}

// Settings filling methods
impl SettingsBuilder {
    /// Fills the general application settings.
    ///
    /// # Environment Variables
    ///
    /// - `FLASK_APP`: application entry reference (default: "app.py")
    /// - `FLASK_ENV`: environment mode (default: "production")
    /// - `FLASK_DEBUG`: debug flag (default: "False")
    /// - `FLASK_HOST`: bind host (default: "localhost")
    /// - `FLASK_PORT`: bind port (default: "5000")
    /// - `FLASK_LOG_LEVEL`: log level (default: "DEBUG")
    ///
    /// # Returns
    ///
    /// `true` if the key was recognized and applied, `false` otherwise.
    fn fill_general(&self, cfg: &mut Settings, key: &str, value: &str) -> bool {
        match key {
            FLASK_APP_ENV_KEY => {
                cfg.flask_app = value.into();
                true
            }
            FLASK_ENV_ENV_KEY => {
                cfg.flask_env = value.into();
                true
            }
            FLASK_DEBUG_ENV_KEY => {
                cfg.flask_debug = value.into();
                true
            }
            FLASK_HOST_ENV_KEY => {
                cfg.flask_host = value.into();
                true
            }
            FLASK_PORT_ENV_KEY => {
                cfg.flask_port = value.into();
                true
            }
            FLASK_LOG_LEVEL_ENV_KEY => {
                cfg.log_level = value.into();
                true
            }
            _ => false,
        }
    }

    /// Fills the API credentials.
    ///
    /// # Environment Variables
    ///
    /// - `FLASK_SECRET_KEY`: session signing secret (default: "you-will-never-guess-me")
    /// - `X_API_KEY`: key expected in the `X-API-KEY` header (default: "you-will-never-guess-me")
    fn fill_api(&self, cfg: &mut Settings, key: &str, value: &str) -> bool {
        match key {
            FLASK_SECRET_KEY_ENV_KEY => {
                cfg.secret_key = value.into();
                true
            }
            X_API_KEY_ENV_KEY => {
                cfg.x_api_key = value.into();
                true
            }
            _ => false,
        }
    }

    /// Fills the telemetry settings.
    ///
    /// # Environment Variables
    ///
    /// - `TELEMETRY_ENABLED`: whether telemetry is sent (default: "True")
    /// - `TELEMETRY_URL`: collector endpoint (default: "http://localhost:3000/telemetry")
    fn fill_telemetry(&self, cfg: &mut Settings, key: &str, value: &str) -> bool {
        match key {
            TELEMETRY_ENABLED_ENV_KEY => {
                cfg.telemetry_enabled = value.into();
                true
            }
            TELEMETRY_URL_ENV_KEY => {
                cfg.telemetry_url = value.into();
                true
            }
            _ => false,
        }
    }

    /// Fills the database connection settings.
    ///
    /// # Environment Variables
    ///
    /// - `DB_ENGINE`: database engine (default: "pg")
    /// - `DB_USER`: user name (default: "root")
    /// - `DB_PASS`: password (default: "password")
    /// - `DB_HOST`: host (default: "127.0.0.1")
    /// - `DB_PORT`: port, kept as a string (default: "5432")
    /// - `DB_NAME`: database name (default: "database")
    fn fill_database(&self, cfg: &mut Settings, key: &str, value: &str) -> bool {
        match key {
            DB_ENGINE_ENV_KEY => {
                cfg.db_engine = value.into();
                true
            }
            DB_USER_ENV_KEY => {
                cfg.db_user = value.into();
                true
            }
            DB_PASS_ENV_KEY => {
                cfg.db_pass = value.into();
                true
            }
            DB_HOST_ENV_KEY => {
                cfg.db_host = value.into();
                true
            }
            DB_PORT_ENV_KEY => {
                cfg.db_port = value.into();
                true
            }
            DB_NAME_ENV_KEY => {
                cfg.db_name = value.into();
                true
            }
            _ => false,
        }
    }
}
