//! Runtime settings from environment variables.
//!
//! Values are read after `.env` has been loaded, so they can come from either
//! the process environment or the `.env` file. Every setting has a default.

use crate::errors::{Error, Result};
use std::{
    env::{self, VarError},
    path::PathBuf,
};

/// Default location of the catalog file
pub const DEFAULT_CATALOG_PATH: &str = "catalog.toml";

/// Default size of the "last added" summary
pub const DEFAULT_RECENT_LINES: usize = 3;

/// Settings for the driver binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Where to read the catalog from (`GROCERY_CATALOG_PATH`)
    pub catalog_path: PathBuf,
    /// How many lines the recent summary shows (`GROCERY_RECENT_LINES`)
    pub recent_lines: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            recent_lines: DEFAULT_RECENT_LINES,
        }
    }
}

impl Settings {
    /// Reads settings from the environment, falling back to defaults.
    ///
    /// # Errors
    /// Returns an error if a variable holds invalid unicode or
    /// `GROCERY_RECENT_LINES` is set but is not a number.
    pub fn from_env() -> Result<Self> {
        let catalog_path = env_value(env::var("GROCERY_CATALOG_PATH"))?;
        let recent_lines = env_value(env::var("GROCERY_RECENT_LINES"))?;
        Self::from_lookup(|key| match key {
            "GROCERY_CATALOG_PATH" => catalog_path.clone(),
            "GROCERY_RECENT_LINES" => recent_lines.clone(),
            _ => None,
        })
    }

    /// Builds settings from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns an error if `GROCERY_RECENT_LINES` is set but is not a number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = lookup("GROCERY_CATALOG_PATH")
            .map_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH), PathBuf::from);

        let recent_lines = match lookup("GROCERY_RECENT_LINES") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|e| Error::Config {
                message: format!("GROCERY_RECENT_LINES must be a non-negative number, got '{raw}': {e}"),
            })?,
            None => DEFAULT_RECENT_LINES,
        };

        Ok(Self {
            catalog_path,
            recent_lines,
        })
    }
}

/// An unset variable is `None`; a value that is not unicode is an error.
fn env_value(value: std::result::Result<String, VarError>) -> Result<Option<String>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(Error::EnvVar(e)),
    }
}
