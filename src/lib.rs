// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Settings Builder
//!
//! `settings_builder` resolves the settings of a web application from environment variables,
//! optionally seeded from a `.env` file found by walking upward from the working directory.
//!
//! Resolution happens once at startup. The resulting `Settings` value is passed to the
//! components that need it rather than being looked up through global state.
//!
//! ## Features
//!
//! - One environment variable per setting, with a literal default when it is unset
//! - Optional `.env` file whose values never override variables that are already set
//! - Injectable `Environment` so resolution can run against an in-memory mapping
//! - Values kept as raw strings, without parsing or validation
//!
//! ## Example
//!
//! ```rust,no_run
//! let settings = settings_builder::load();
//!
//! println!("database {}:{}", settings.db_host, settings.db_port);
//! ```

pub mod env_file;
pub mod env_keys;
pub mod environment;
pub mod errors;
mod settings;
mod settings_builder;

pub use environment::{Environment, MapEnvironment, ProcessEnvironment};
pub use settings::Settings;
pub use settings_builder::SettingsBuilder;

/// Resolves the settings from the process environment and the nearest `.env` file.
///
/// Shorthand for `SettingsBuilder::new().build()`.
pub fn load() -> Settings {
    SettingsBuilder::new().build()
}
