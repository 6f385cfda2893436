//! Product entity - Represents an immutable entry of the static catalog.
//!
//! Products carry a unit price and a category. The display-only fields (package
//! description, original price, badge, rating) have no behavior attached except
//! `info`, which feeds weight extraction in the report helpers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog identifier of a product (e.g., `"104041100011"`)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wraps a raw id string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Aisle a product belongs to. Declaration order is the basket grouping order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Milk, yogurt, cheese, cream, butter and eggs
    DairyAndEggs,
    /// Fresh produce and juices
    FruitsAndVegetables,
    /// Dry pasta
    Pasta,
    /// Condiments, garlic and canned food
    CondimentsAndCanned,
    /// Bread and bakery
    Bread,
}

impl Category {
    /// Every category, in grouping order.
    pub const ALL: [Self; 5] = [
        Self::DairyAndEggs,
        Self::FruitsAndVegetables,
        Self::Pasta,
        Self::CondimentsAndCanned,
        Self::Bread,
    ];

    /// Section heading shown above the category's basket lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::DairyAndEggs => "Dairy & Eggs",
            Self::FruitsAndVegetables => "Fruits & Vegetables",
            Self::Pasta => "Pasta",
            Self::CondimentsAndCanned => "Condiments & Canned Food",
            Self::Bread => "Bread & Bakery",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A purchasable catalog entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier within the catalog
    pub product_id: ProductId,
    /// Display name, also the basket key
    pub name: String,
    /// Brand, absent for unbranded produce
    #[serde(default)]
    pub brand: Option<String>,
    /// Unit price
    pub price: Decimal,
    /// Aisle used for basket grouping
    pub category: Category,
    /// Package description (e.g., "1L für eine Flasche von diesem Produkt")
    #[serde(default)]
    pub info: Option<String>,
    /// Price before discount, if discounted
    #[serde(default)]
    pub original_price: Option<Decimal>,
    /// Badge text such as "Bio" or "New"
    #[serde(default)]
    pub badge: Option<String>,
    /// Average customer rating
    #[serde(default)]
    pub rating_average: Option<f32>,
    /// Number of customer ratings
    #[serde(default)]
    pub rating_count: Option<u32>,
}

impl Product {
    /// Creates a product with no brand and no display-only details.
    pub fn new(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Decimal,
        category: Category,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            brand: None,
            price,
            category,
            info: None,
            original_price: None,
            badge: None,
            rating_average: None,
            rating_count: None,
        }
    }

    /// Sets the brand.
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Sets the package description.
    #[must_use]
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    /// True when an original price above the current price is recorded.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.original_price.is_some_and(|original| original > self.price)
    }

    /// Case-insensitive substring match against name or brand.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .brand
                .as_deref()
                .is_some_and(|brand| brand.to_lowercase().contains(needle))
    }
}
