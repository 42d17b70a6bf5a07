// Copyright (c) 2025, The Ruskit Authors
// MIT License
// All rights reserved.

//! # Environment File
//!
//! Discovery and application of the environment definition file (`.env`).
//!
//! The file is searched for in the starting directory and then in each parent directory.
//! Its pairs are copied into the target environment only for keys that are not already
//! set, so variables exported by the launcher always take precedence over the file.

use crate::{environment::Environment, errors::SettingsError};
use std::{
    collections::BTreeMap,
    path::{self, Path, PathBuf},
};
use tracing::debug;

/// Looks for a regular file named `file_name` in `start` and then in every ancestor of
/// `start`, returning the nearest match.
///
/// A relative `start` is resolved against the working directory first, so `"."` walks
/// up through the real parent directories.
pub fn find_env_file(start: &Path, file_name: &str) -> Option<PathBuf> {
    let start = match start.canonicalize() {
        Ok(dir) => dir,
        Err(_) => path::absolute(start).ok()?,
    };

    start
        .ancestors()
        .map(|dir| dir.join(file_name))
        .find(|candidate| candidate.is_file())
}

/// Parses the file at `path` into its `KEY=VALUE` pairs, in file order.
///
/// Parsing follows the usual `.env` grammar: blank lines and `#` comments are skipped,
/// values may be quoted, an `export ` prefix is accepted and `${VAR}` is substituted.
///
/// Substitution looks `VAR` up in earlier lines of the same file and then in the process
/// environment. It never consults an injected `Environment`.
///
/// # Errors
///
/// - `SettingsError::EnvFileOpen` if the file cannot be opened
/// - `SettingsError::EnvFileParse` on the first line that cannot be parsed
pub fn read_env_file(path: &Path) -> Result<Vec<(String, String)>, SettingsError> {
    let iter = dotenvy::from_path_iter(path).map_err(|source| SettingsError::EnvFileOpen {
        path: path.to_path_buf(),
        source,
    })?;

    iter.map(|item| {
        item.map_err(|source| SettingsError::EnvFileParse {
            path: path.to_path_buf(),
            source,
        })
    })
    .collect()
}

/// Copies the pairs of the file at `path` into `env`, skipping keys that are already set.
///
/// When the file defines a key more than once the last definition wins. Whether a key is
/// already set is decided against `env` as it was before the file was applied. Nothing is
/// applied unless the whole file parses.
///
/// Returns the number of variables added to `env`.
pub fn apply_env_file<E>(path: &Path, env: &mut E) -> Result<usize, SettingsError>
where
    E: Environment + ?Sized,
{
    let pairs: BTreeMap<String, String> = read_env_file(path)?.into_iter().collect();

    let mut added = 0;
    for (key, value) in pairs {
        if env.contains(&key) {
            debug!(key = key, "env file value ignored, variable already set");
            continue;
        }
        env.set_var(&key, &value);
        added += 1;
    }

    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::MapEnvironment;
    use std::fs;

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn finds_file_in_start_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), ".env", "DB_NAME=app\n");

        assert_eq!(find_env_file(dir.path(), ".env"), Some(path.canonicalize().unwrap()));
    }

    #[test]
    fn finds_file_in_ancestor_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), ".env", "DB_NAME=app\n");
        let nested = dir.path().join("service").join("src");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_env_file(&nested, ".env"), Some(path.canonicalize().unwrap()));
    }

    #[test]
    fn nearest_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), ".env", "DB_NAME=outer\n");
        let nested = dir.path().join("service");
        fs::create_dir_all(&nested).unwrap();
        let inner = write_file(&nested, ".env", "DB_NAME=inner\n");

        assert_eq!(find_env_file(&nested, ".env"), Some(inner.canonicalize().unwrap()));
    }

    #[test]
    fn directory_with_env_file_name_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("service");
        fs::create_dir_all(nested.join(".env.custom")).unwrap();
        let path = write_file(dir.path(), ".env.custom", "DB_NAME=app\n");

        assert_eq!(
            find_env_file(&nested, ".env.custom"),
            Some(path.canonicalize().unwrap())
        );
    }

    #[test]
    fn reads_pairs_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            ".env",
            "# local overrides\nFLASK_PORT=8080\n\nexport DB_USER=\"admin\"\nDB_PASS='p@ss word'\n",
        );

        let pairs = read_env_file(&path).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("FLASK_PORT".to_string(), "8080".to_string()),
                ("DB_USER".to_string(), "admin".to_string()),
                ("DB_PASS".to_string(), "p@ss word".to_string()),
            ]
        );
    }

    #[test]
    fn substitution_reads_earlier_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            dir.path(),
            ".env",
            "DB_HOST=db.local\nTELEMETRY_URL=http://${DB_HOST}:3000/telemetry\n",
        );

        let pairs = read_env_file(&path).unwrap();
        assert_eq!(pairs[1].1, "http://db.local:3000/telemetry");
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_env_file(&dir.path().join(".env")).unwrap_err();
        assert!(matches!(err, SettingsError::EnvFileOpen { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error_and_applies_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), ".env", "DB_NAME=app\nthis is not a pair\n");
        let mut env = MapEnvironment::new();

        let err = apply_env_file(&path, &mut env).unwrap_err();
        assert!(matches!(err, SettingsError::EnvFileParse { .. }));
        assert!(env.vars().is_empty());
    }

    #[test]
    fn existing_variables_are_not_overridden() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), ".env", "DB_PORT=7777\nDB_HOST=db.local\n");
        let mut env: MapEnvironment = [("DB_PORT", "6543")].into_iter().collect();

        let added = apply_env_file(&path, &mut env).unwrap();

        assert_eq!(added, 1);
        assert_eq!(env.var("DB_PORT").as_deref(), Some("6543"));
        assert_eq!(env.var("DB_HOST").as_deref(), Some("db.local"));
    }

    #[test]
    fn last_duplicate_key_in_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), ".env", "DB_USER=first\nDB_USER=second\n");
        let mut env = MapEnvironment::new();

        let added = apply_env_file(&path, &mut env).unwrap();

        assert_eq!(added, 1);
        assert_eq!(env.var("DB_USER").as_deref(), Some("second"));
    }
}
