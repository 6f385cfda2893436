//! Catalog business logic - The static product set and search over it.
//!
//! A catalog is validated once at construction and never changes afterwards.
//! Search and favorites are recomputed on every call; at tens of products a
//! linear scan is all that is needed.

use crate::{
    entities::{Product, ProductId},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Immutable, validated product catalog plus the favorites allow-list
#[derive(Clone, Debug)]
pub struct Catalog {
    products: Vec<Product>,
    favorite_ids: Vec<ProductId>,
}

impl Catalog {
    /// Builds a catalog, checking id uniqueness, prices and the favorites allow-list.
    ///
    /// Products sharing a display name are accepted, but only the first one is
    /// reachable through name lookups; a warning is logged for each repeat.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Two products share a `product_id`
    /// - A price is negative
    /// - A favorite id does not name a catalog product
    pub fn new(products: Vec<Product>, favorite_ids: Vec<ProductId>) -> Result<Self> {
        let mut seen_ids = HashSet::new();
        let mut seen_names = HashSet::new();

        for product in &products {
            if product.price < Decimal::ZERO {
                return Err(Error::InvalidPrice {
                    product_id: product.product_id.to_string(),
                });
            }
            if !seen_ids.insert(product.product_id.as_str()) {
                return Err(Error::DuplicateProductId {
                    id: product.product_id.to_string(),
                });
            }
            if !seen_names.insert(product.name.as_str()) {
                warn!(
                    "Product name '{}' (id {}) is already used by another catalog entry; basket lookups resolve to the first",
                    product.name, product.product_id
                );
            }
        }

        if let Some(missing) = favorite_ids
            .iter()
            .find(|id| !seen_ids.contains(id.as_str()))
        {
            return Err(Error::UnknownFavorite {
                id: missing.to_string(),
            });
        }

        debug!(
            "Catalog built with {} products and {} favorites",
            products.len(),
            favorite_ids.len()
        );

        Ok(Self {
            products,
            favorite_ids,
        })
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// First product with exactly this display name.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.name == name)
    }

    /// Product with this id.
    #[must_use]
    pub fn find_by_id(&self, product_id: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|product| product.product_id.as_str() == product_id)
    }

    /// Case-insensitive substring search over product name and brand.
    ///
    /// An empty query yields no results. Matches keep catalog order and are
    /// not limited in number.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Product> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.to_lowercase();
        let matches: Vec<&Product> = self
            .products
            .iter()
            .filter(|product| product.matches_lowercase(&needle))
            .collect();

        debug!("Search '{}' matched {} products", query, matches.len());
        matches
    }

    /// Products on the favorites allow-list, in catalog order.
    #[must_use]
    pub fn favorites(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| self.is_favorite(&product.product_id))
            .collect()
    }

    /// Whether the id is on the favorites allow-list.
    #[must_use]
    pub fn is_favorite(&self, product_id: &ProductId) -> bool {
        self.favorite_ids.contains(product_id)
    }
}
