// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Environment
//!
//! Abstraction over the environment variable mapping that settings are resolved from.
//!
//! `ProcessEnvironment` reads and writes the real process environment. `MapEnvironment`
//! keeps everything in memory, which lets the env file step and the resolver be tested
//! without touching global process state. `${VAR}` references inside an env file are
//! still expanded from the process environment, see `env_file::read_env_file`.

use std::{collections::BTreeMap, env};

/// Read and additive write access to a set of environment variables.
pub trait Environment {
    /// Returns the value of `key`, or `None` when it is not set.
    fn var(&self, key: &str) -> Option<String>;

    /// Sets `key` to `value`, replacing any previous value.
    fn set_var(&mut self, key: &str, value: &str);

    /// Returns every variable currently set.
    fn vars(&self) -> Vec<(String, String)>;

    /// Returns `true` when `key` is set, whatever its value.
    fn contains(&self, key: &str) -> bool {
        self.var(key).is_some()
    }
}

/// The environment of the running process.
///
/// Names or values that are not valid Unicode are not returned by `var` or `vars`, but
/// `contains` still reports them, so an env file never overwrites them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn contains(&self, key: &str) -> bool {
        env::var_os(key).is_some()
    }

    /// Writes to the process environment.
    ///
    /// Settings are resolved once during startup, before the application spawns any
    /// thread that could read the environment concurrently.
    fn set_var(&mut self, key: &str, value: &str) {
        // SAFETY: only called from settings resolution, which runs single threaded at
        // process start.
        unsafe { env::set_var(key, value) };
    }

    fn vars(&self) -> Vec<(String, String)> {
        env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }
}

/// An in-memory environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnvironment {
    vars: BTreeMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for MapEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set_var(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_owned(), value.to_owned());
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
