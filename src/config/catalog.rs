//! Catalog configuration loading from catalog.toml
//!
//! The product catalog and the favorites allow-list are read from a TOML file.
//! A copy of the stock catalog is compiled into the binary and used whenever
//! no file exists at the configured path.

use crate::{
    core::catalog::Catalog,
    entities::{Product, ProductId},
    errors::{Error, Result},
};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

const BUILTIN_CATALOG: &str = include_str!("../../catalog.toml");

/// Configuration structure representing the entire catalog.toml file
#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// Product ids offered when search is opened with an empty query
    #[serde(default)]
    pub favorites: Vec<ProductId>,
    /// Every purchasable product, in display order
    pub products: Vec<Product>,
}

impl CatalogConfig {
    /// Validates the configuration and builds the catalog.
    ///
    /// # Errors
    /// Returns an error if the products or favorites violate catalog invariants.
    pub fn into_catalog(self) -> Result<Catalog> {
        Catalog::new(self.products, self.favorites)
    }
}

/// Parses catalog configuration from TOML text.
///
/// # Errors
/// Returns an error if the TOML syntax is invalid or required fields are missing.
pub fn parse_catalog_config(contents: &str) -> Result<CatalogConfig> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog: {e}"),
    })
}

/// Loads catalog configuration from a TOML file
///
/// # Arguments
/// * `path` - Path to the catalog file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_catalog_config<P: AsRef<Path>>(path: P) -> Result<CatalogConfig> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file {}: {e}", path.display()),
    })?;
    parse_catalog_config(&contents)
}

/// The stock catalog compiled into the crate.
///
/// # Errors
/// Returns an error only if the embedded catalog is malformed.
pub fn builtin_catalog() -> Result<Catalog> {
    parse_catalog_config(BUILTIN_CATALOG)?.into_catalog()
}

/// Loads the catalog from `path`, falling back to the built-in one when the
/// file does not exist.
///
/// # Errors
/// Returns an error if an existing file cannot be read, parsed or validated.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let catalog = if path.exists() {
        load_catalog_config(path)?.into_catalog()?
    } else {
        info!(
            "No catalog at {}, using the built-in catalog",
            path.display()
        );
        builtin_catalog()?
    };
    info!("Loaded catalog with {} products", catalog.len());
    Ok(catalog)
}
