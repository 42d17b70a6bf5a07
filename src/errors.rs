// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Errors
//!
//! Error types for the settings_builder crate.
//!
//! Settings resolution itself never fails: an unreadable or malformed environment file
//! is logged and then treated as absent. These errors are returned by the lower level
//! functions in `env_file` so the file step can be exercised on its own.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading an environment definition file.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The file was found but could not be opened.
    #[error("failed to open env file `{path}`")]
    EnvFileOpen {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// A line in the file does not follow the `KEY=VALUE` grammar.
    ///
    /// The whole file is rejected; none of its pairs are applied.
    #[error("failed to parse env file `{path}`")]
    EnvFileParse {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}
