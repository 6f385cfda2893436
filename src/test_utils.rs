//! Shared test utilities.
//!
//! This module provides a small catalog with sensible defaults and helpers for
//! turning product lists into names for assertions.

use crate::{
    core::{BasketModel, Catalog},
    entities::{Category, Product},
};
use rust_decimal::Decimal;

/// Products used by most tests, in catalog order.
///
/// * Semi-skimmed Milk (Migros, 2.80, dairy)
/// * Bananas (no brand, 3.50, fruits)
/// * Oat Milk (Migros Bio, 3.90, dairy)
/// * White Bread (Migros, 2.50, bread)
/// * Bio Garlic (Migros Bio, 3.50, condiments)
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("104041100001", "Semi-skimmed Milk", Decimal::new(280, 2), Category::DairyAndEggs)
            .with_brand("Migros")
            .with_info("1L für eine Flasche von diesem Produkt"),
        Product::new("104041100011", "Bananas", Decimal::new(350, 2), Category::FruitsAndVegetables)
            .with_info("1kg für eine Packung von diesem Produkt"),
        Product::new("104041100008", "Oat Milk", Decimal::new(390, 2), Category::DairyAndEggs)
            .with_brand("Migros Bio")
            .with_info("1L für eine Flasche von diesem Produkt"),
        Product::new("104041100018", "White Bread", Decimal::new(250, 2), Category::Bread)
            .with_brand("Migros")
            .with_info("500g für eine Stange von diesem Produkt"),
        Product::new("104041100035", "Bio Garlic", Decimal::new(350, 2), Category::CondimentsAndCanned)
            .with_brand("Migros Bio")
            .with_info("200g für eine Packung von diesem Produkt"),
    ]
}

/// The sample catalog with Bananas as the only favorite.
///
/// # Panics
/// Never; the sample products satisfy every catalog invariant.
#[must_use]
#[allow(clippy::expect_used)]
pub fn sample_catalog() -> Catalog {
    Catalog::new(sample_products(), vec!["104041100011".into()])
        .expect("sample catalog is valid")
}

/// An empty basket over the sample catalog.
#[must_use]
pub fn sample_basket() -> BasketModel {
    BasketModel::new(sample_catalog())
}

/// Product names, for readable assertions.
#[must_use]
pub fn names<'a>(products: &[&'a Product]) -> Vec<&'a str> {
    products.iter().map(|product| product.name.as_str()).collect()
}
