//! Basket business logic - Reconciles quantity changes into basket lines.
//!
//! The basket holds at most one line per product name. Setting a positive
//! quantity creates or replaces the line with a fresh catalog price snapshot,
//! setting zero removes it. Grouped and filtered views are derived on every
//! read rather than maintained as separate indexes.

use crate::{
    core::catalog::Catalog,
    entities::{BasketLine, Category},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use std::collections::HashSet;
use tracing::debug;

/// A basket line together with the tick of its last write.
#[derive(Clone, Debug)]
struct Slot {
    line: BasketLine,
    touched: u64,
}

/// The online basket for one shopping session
#[derive(Clone, Debug)]
pub struct BasketModel {
    catalog: Catalog,
    slots: Vec<Slot>,
    clock: u64,
}

impl BasketModel {
    /// Creates an empty basket over the given catalog.
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            slots: Vec::new(),
            clock: 0,
        }
    }

    /// Creates a basket pre-filled with `(product name, quantity)` lines.
    ///
    /// Prices are snapped from the catalog. Lines keep the given order, which
    /// is also their touch order (the last one counts as most recent).
    ///
    /// # Errors
    /// Returns an error if:
    /// - A name does not resolve to a catalog product
    /// - A quantity is zero
    /// - The same name appears twice
    pub fn with_lines<I, S>(catalog: Catalog, initial: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut basket = Self::new(catalog);
        let mut seen = HashSet::new();

        for (name, quantity) in initial {
            let name = name.into();
            if quantity == 0 {
                return Err(Error::InvalidQuantity { name, quantity });
            }
            if basket.catalog.find_by_name(&name).is_none() {
                return Err(Error::ProductNotFound { name });
            }
            if !seen.insert(name.clone()) {
                return Err(Error::DuplicateBasketLine { name });
            }
            basket.set_quantity(&name, quantity);
        }

        Ok(basket)
    }

    /// The catalog this basket draws prices and categories from.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Sets the quantity of a product, creating, replacing or removing its line.
    ///
    /// - existing line, `quantity > 0`: replaced in place with the current catalog price
    /// - existing line, `quantity == 0`: removed
    /// - no line, `quantity > 0`: appended at the tail
    /// - no line, `quantity == 0`: nothing happens
    ///
    /// A name that is not in the catalog is ignored.
    pub fn set_quantity(&mut self, product_name: &str, quantity: u32) {
        let position = self.position(product_name);

        if quantity == 0 {
            match position {
                Some(index) => {
                    self.slots.remove(index);
                    debug!("Removed '{}' from basket", product_name);
                }
                None => debug!("'{}' not in basket, nothing to remove", product_name),
            }
            return;
        }

        let Some(product) = self.catalog.find_by_name(product_name) else {
            debug!("'{}' is not in the catalog, ignoring quantity {}", product_name, quantity);
            return;
        };

        let line = BasketLine::new(product.name.clone(), quantity, product.price);
        self.clock += 1;
        let slot = Slot {
            line,
            touched: self.clock,
        };

        match position {
            Some(index) => {
                self.slots[index] = slot;
                debug!("Updated '{}' to quantity {}", product_name, quantity);
            }
            None => {
                self.slots.push(slot);
                debug!("Added '{}' with quantity {}", product_name, quantity);
            }
        }
    }

    /// Basket lines in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = &BasketLine> {
        self.slots.iter().map(|slot| &slot.line)
    }

    /// The line for a product name, if present.
    #[must_use]
    pub fn line(&self, product_name: &str) -> Option<&BasketLine> {
        self.position(product_name)
            .map(|index| &self.slots[index].line)
    }

    /// Current quantity for a product name, zero when absent.
    #[must_use]
    pub fn quantity_of(&self, product_name: &str) -> u32 {
        self.line(product_name).map_or(0, |line| line.quantity)
    }

    /// Lines grouped by product category.
    ///
    /// Categories follow their declaration order and only those with at least
    /// one line are included. Lines inside a group keep insertion order.
    #[must_use]
    pub fn basket_grouped_by_category(&self) -> Vec<(Category, Vec<&BasketLine>)> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let lines: Vec<&BasketLine> = self
                    .lines()
                    .filter(|line| self.category_of(line) == Some(category))
                    .collect();
                (!lines.is_empty()).then_some((category, lines))
            })
            .collect()
    }

    /// `unit_price * quantity` for one line.
    #[must_use]
    pub fn line_total(line: &BasketLine) -> Decimal {
        line.total()
    }

    /// The most recently added or updated lines, most recent first.
    #[must_use]
    pub fn recent_lines(&self, max_count: usize) -> Vec<&BasketLine> {
        let mut slots: Vec<&Slot> = self.slots.iter().collect();
        slots.sort_by(|a, b| b.touched.cmp(&a.touched));
        slots
            .into_iter()
            .take(max_count)
            .map(|slot| &slot.line)
            .collect()
    }

    /// Lines whose product name contains `query`, case-insensitively.
    ///
    /// An empty query returns every line.
    #[must_use]
    pub fn filter_lines(&self, query: &str) -> Vec<&BasketLine> {
        let needle = query.to_lowercase();
        self.lines()
            .filter(|line| needle.is_empty() || line.product_name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines().map(BasketLine::total).sum()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines().map(|line| u64::from(line.quantity)).sum()
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the basket holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Removes every line.
    pub fn clear(&mut self) {
        debug!("Clearing basket with {} lines", self.slots.len());
        self.slots.clear();
    }

    fn position(&self, product_name: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.line.product_name == product_name)
    }

    fn category_of(&self, line: &BasketLine) -> Option<Category> {
        self.catalog
            .find_by_name(&line.product_name)
            .map(|product| product.category)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::Product;
    use crate::test_utils::*;

    #[test]
    fn test_bananas_scenario() {
        let catalog = Catalog::new(
            vec![
                Product::new("1", "Bananas", Decimal::new(350, 2), Category::FruitsAndVegetables),
                Product::new("2", "Milk", Decimal::new(280, 2), Category::DairyAndEggs),
            ],
            Vec::new(),
        )
        .unwrap();
        let mut basket = BasketModel::new(catalog);

        basket.set_quantity("Bananas", 2);

        let line = basket.line("Bananas").unwrap();
        assert_eq!(BasketModel::line_total(line), Decimal::new(700, 2));

        let grouped = basket.basket_grouped_by_category();
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].0, Category::FruitsAndVegetables);
        assert_eq!(grouped[0].1.len(), 1);
        assert_eq!(grouped[0].1[0].product_name, "Bananas");
        assert_eq!(grouped[0].1[0].quantity, 2);
    }

    #[test]
    fn test_set_zero_removes_line() {
        let mut basket = sample_basket();
        basket.set_quantity("Bananas", 4);
        basket.set_quantity("Bananas", 0);
        assert!(basket.line("Bananas").is_none());
        assert_eq!(basket.quantity_of("Bananas"), 0);
    }

    #[test]
    fn test_set_zero_on_absent_line_is_noop() {
        let mut basket = sample_basket();
        basket.set_quantity("Oat Milk", 1);
        basket.set_quantity("Bananas", 0);
        assert_eq!(basket.len(), 1);
        assert_eq!(basket.recent_lines(5)[0].product_name, "Oat Milk");
    }

    #[test]
    fn test_update_replaces_rather_than_accumulates() {
        let mut basket = sample_basket();
        basket.set_quantity("Bananas", 2);
        basket.set_quantity("Bananas", 5);

        assert_eq!(basket.len(), 1);
        let line = basket.line("Bananas").unwrap();
        assert_eq!(line.quantity, 5);
        assert_eq!(line.unit_price, Decimal::new(350, 2));
    }

    #[test]
    fn test_update_keeps_insertion_position() {
        let mut basket = sample_basket();
        basket.set_quantity("Bananas", 1);
        basket.set_quantity("Oat Milk", 1);
        basket.set_quantity("Bananas", 3);

        let order: Vec<&str> = basket.lines().map(BasketLine::key).collect();
        assert_eq!(order, vec!["Bananas", "Oat Milk"]);
    }

    #[test]
    fn test_unknown_product_is_ignored() {
        let mut basket = sample_basket();
        basket.set_quantity("Caviar", 2);
        assert!(basket.is_empty());
    }

    #[test]
    fn test_grouping_follows_category_order() {
        let mut basket = sample_basket();
        basket.set_quantity("White Bread", 1);
        basket.set_quantity("Bananas", 2);
        basket.set_quantity("Semi-skimmed Milk", 1);
        basket.set_quantity("Oat Milk", 2);

        let grouped = basket.basket_grouped_by_category();
        let categories: Vec<Category> = grouped.iter().map(|(category, _)| *category).collect();
        assert_eq!(
            categories,
            vec![
                Category::DairyAndEggs,
                Category::FruitsAndVegetables,
                Category::Bread
            ]
        );

        let dairy: Vec<&str> = grouped[0].1.iter().map(|line| line.key()).collect();
        assert_eq!(dairy, vec!["Semi-skimmed Milk", "Oat Milk"]);
        assert!(grouped.iter().all(|(_, lines)| !lines.is_empty()));
    }

    #[test]
    fn test_grouping_empty_basket() {
        let basket = sample_basket();
        assert!(basket.basket_grouped_by_category().is_empty());
    }

    #[test]
    fn test_recent_lines_most_recent_first() {
        let mut basket = sample_basket();
        basket.set_quantity("Bananas", 1);
        basket.set_quantity("Oat Milk", 1);
        basket.set_quantity("White Bread", 1);
        basket.set_quantity("Bananas", 2);

        let recent: Vec<&str> = basket.recent_lines(2).iter().map(|line| line.key()).collect();
        assert_eq!(recent, vec!["Bananas", "White Bread"]);
        assert_eq!(basket.recent_lines(10).len(), 3);
        assert!(basket.recent_lines(0).is_empty());
    }

    #[test]
    fn test_filter_lines() {
        let mut basket = sample_basket();
        basket.set_quantity("Semi-skimmed Milk", 1);
        basket.set_quantity("Oat Milk", 1);
        basket.set_quantity("Bananas", 1);

        assert_eq!(basket.filter_lines("MILK").len(), 2);
        assert_eq!(basket.filter_lines("").len(), 3);
        assert!(basket.filter_lines("bread").is_empty());
    }

    #[test]
    fn test_totals() {
        let mut basket = sample_basket();
        basket.set_quantity("Bananas", 2); // 7.00
        basket.set_quantity("White Bread", 3); // 7.50

        assert_eq!(basket.total(), Decimal::new(1450, 2));
        assert_eq!(basket.item_count(), 5);

        basket.clear();
        assert_eq!(basket.total(), Decimal::ZERO);
        assert!(basket.is_empty());
    }

    #[test]
    fn test_with_lines_snaps_prices() {
        let basket =
            BasketModel::with_lines(sample_catalog(), [("Bananas", 2), ("White Bread", 1)]).unwrap();
        assert_eq!(basket.len(), 2);
        assert_eq!(basket.line("White Bread").unwrap().unit_price, Decimal::new(250, 2));
        assert_eq!(basket.recent_lines(1)[0].product_name, "White Bread");
    }

    #[test]
    fn test_with_lines_validation() {
        let result = BasketModel::with_lines(sample_catalog(), [("Caviar", 1)]);
        assert!(matches!(result, Err(Error::ProductNotFound { name }) if name == "Caviar"));

        let result = BasketModel::with_lines(sample_catalog(), [("Bananas", 0)]);
        assert!(matches!(result, Err(Error::InvalidQuantity { quantity: 0, .. })));

        let result = BasketModel::with_lines(sample_catalog(), [("Bananas", 1), ("Bananas", 2)]);
        assert!(matches!(result, Err(Error::DuplicateBasketLine { .. })));
    }
}
