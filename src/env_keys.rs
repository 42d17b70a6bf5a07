// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Environment Keys
//!
//! This module contains the environment variable names read by the `SettingsBuilder`
//! together with the literal value each setting falls back to when its variable is unset.
//!
//! Every setting is read from exactly one variable. Values are kept as strings, so a
//! default such as `DB_PORT_DEFAULT` is `"5432"`, not a number.

/// Conventional name of the environment definition file searched for upward from the
/// working directory.
pub const ENV_FILE_NAME: &str = ".env";

/// General
pub const FLASK_APP_ENV_KEY: &str = "FLASK_APP";
pub const FLASK_APP_DEFAULT: &str = "app.py";
pub const FLASK_ENV_ENV_KEY: &str = "FLASK_ENV";
pub const FLASK_ENV_DEFAULT: &str = "production";
pub const FLASK_DEBUG_ENV_KEY: &str = "FLASK_DEBUG";
pub const FLASK_DEBUG_DEFAULT: &str = "False";
pub const FLASK_HOST_ENV_KEY: &str = "FLASK_HOST";
pub const FLASK_HOST_DEFAULT: &str = "localhost";
pub const FLASK_PORT_ENV_KEY: &str = "FLASK_PORT";
pub const FLASK_PORT_DEFAULT: &str = "5000";
pub const FLASK_LOG_LEVEL_ENV_KEY: &str = "FLASK_LOG_LEVEL";
pub const FLASK_LOG_LEVEL_DEFAULT: &str = "DEBUG";

/// APIs
pub const FLASK_SECRET_KEY_ENV_KEY: &str = "FLASK_SECRET_KEY";
pub const FLASK_SECRET_KEY_DEFAULT: &str = "you-will-never-guess-me";
pub const X_API_KEY_ENV_KEY: &str = "X_API_KEY";
pub const X_API_KEY_DEFAULT: &str = "you-will-never-guess-me";

/// Telemetry
pub const TELEMETRY_ENABLED_ENV_KEY: &str = "TELEMETRY_ENABLED";
pub const TELEMETRY_ENABLED_DEFAULT: &str = "True";
pub const TELEMETRY_URL_ENV_KEY: &str = "TELEMETRY_URL";
pub const TELEMETRY_URL_DEFAULT: &str = "http://localhost:3000/telemetry";

/// Database
pub const DB_ENGINE_ENV_KEY: &str = "DB_ENGINE";
pub const DB_ENGINE_DEFAULT: &str = "pg";
pub const DB_USER_ENV_KEY: &str = "DB_USER";
pub const DB_USER_DEFAULT: &str = "root";
pub const DB_PASS_ENV_KEY: &str = "DB_PASS";
pub const DB_PASS_DEFAULT: &str = "password";
pub const DB_HOST_ENV_KEY: &str = "DB_HOST";
pub const DB_HOST_DEFAULT: &str = "127.0.0.1";
pub const DB_PORT_ENV_KEY: &str = "DB_PORT";
pub const DB_PORT_DEFAULT: &str = "5432";
pub const DB_NAME_ENV_KEY: &str = "DB_NAME";
pub const DB_NAME_DEFAULT: &str = "database";

/// Every recognized variable name, in the order settings are listed.
pub const ALL_ENV_KEYS: [&str; 16] = [
    FLASK_APP_ENV_KEY,
    FLASK_ENV_ENV_KEY,
    FLASK_DEBUG_ENV_KEY,
    FLASK_HOST_ENV_KEY,
    FLASK_PORT_ENV_KEY,
    FLASK_LOG_LEVEL_ENV_KEY,
    FLASK_SECRET_KEY_ENV_KEY,
    X_API_KEY_ENV_KEY,
    TELEMETRY_ENABLED_ENV_KEY,
    TELEMETRY_URL_ENV_KEY,
    DB_ENGINE_ENV_KEY,
    DB_USER_ENV_KEY,
    DB_PASS_ENV_KEY,
    DB_HOST_ENV_KEY,
    DB_PORT_ENV_KEY,
    DB_NAME_ENV_KEY,
];

/// Replacement text used when printing secret values.
pub const REDACTED: &str = "[REDACTED]";
