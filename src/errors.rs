//! Unified error types for catalog construction and configuration loading.
//!
//! Basket and shopping-list operations are total and never fail; every variant
//! here belongs to the boundary where a catalog or an initial basket is built.

use thiserror::Error;

/// Errors raised while loading configuration or constructing a model.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Two catalog entries share the same product id
    #[error("Duplicate product id in catalog: {id}")]
    DuplicateProductId {
        /// The repeated id
        id: String,
    },

    /// The favorites allow-list names an id that is not in the catalog
    #[error("Favorite product id not found in catalog: {id}")]
    UnknownFavorite {
        /// The missing id
        id: String,
    },

    /// A catalog price is negative
    #[error("Invalid price for product {product_id}")]
    InvalidPrice {
        /// Id of the offending product
        product_id: String,
    },

    /// A product name does not resolve to any catalog entry
    #[error("Product not found: {name}")]
    ProductNotFound {
        /// Name that was looked up
        name: String,
    },

    /// An initial basket line carries a quantity that cannot be stored
    #[error("Invalid quantity {quantity} for {name}")]
    InvalidQuantity {
        /// Product name of the line
        name: String,
        /// Rejected quantity
        quantity: u32,
    },

    /// An initial basket names the same product twice
    #[error("Duplicate basket line for {name}")]
    DuplicateBasketLine {
        /// Product name that appears more than once
        name: String,
    },

    /// A driver command could not be parsed
    #[error("Command error: {message}")]
    Command {
        /// What was wrong with the input
        message: String,
    },

    /// I/O failure outside of configuration parsing
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable could not be read
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
