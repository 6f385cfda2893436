//! Report formatting helpers.
//!
//! Turns basket data into display strings: prices, line summaries, grouped
//! basket listings and package weights scaled by quantity. Nothing here
//! mutates the model.

use crate::{
    core::basket::BasketModel,
    entities::{BasketLine, Product},
};
use regex::Regex;
use rust_decimal::Decimal;
use std::{fmt, fmt::Write as _, sync::LazyLock};
use tracing::warn;

// Tried in this order; the first pattern that matches anywhere wins.
const WEIGHT_UNIT_PATTERNS: [&str; 4] = [
    r"(\d+)\s*(g)",
    r"(\d+)\s*(kg)",
    r"(\d+)\s*(L)",
    r"(\d+)\s*(ml)",
];

static WEIGHT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    WEIGHT_UNIT_PATTERNS
        .into_iter()
        .filter_map(|pattern| {
            Regex::new(pattern)
                .inspect_err(|e| warn!("Skipping weight pattern '{}': {}", pattern, e))
                .ok()
        })
        .collect()
});

/// A package weight or volume such as `500g` or `1L`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weight {
    /// Numeric part
    pub amount: u64,
    /// Unit suffix (`g`, `kg`, `L` or `ml`)
    pub unit: String,
}

impl Weight {
    /// The weight of `quantity` packages.
    #[must_use]
    pub fn scaled(&self, quantity: u32) -> Self {
        Self {
            amount: self.amount.saturating_mul(u64::from(quantity)),
            unit: self.unit.clone(),
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit)
    }
}

/// Formats a price with two decimals, e.g. `7.00`.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

/// Finds the package weight in a product description.
///
/// # Returns
/// `None` when the description has no recognizable weight or volume
#[must_use]
pub fn extract_weight(info: &str) -> Option<Weight> {
    WEIGHT_PATTERNS.iter().find_map(|pattern| {
        let captures = pattern.captures(info)?;
        Some(Weight {
            amount: captures[1].parse().ok()?,
            unit: captures[2].to_string(),
        })
    })
}

/// Total weight of `quantity` packages of `product`, e.g. `1500g`.
#[must_use]
pub fn total_weight(product: &Product, quantity: u32) -> Option<String> {
    let weight = extract_weight(product.info.as_deref()?)?;
    Some(weight.scaled(quantity).to_string())
}

/// One-line summary: `2x Bananas @ 3.50 = 7.00`.
#[must_use]
pub fn format_line(line: &BasketLine) -> String {
    format!(
        "{}x {} @ {} = {}",
        line.quantity,
        line.product_name,
        format_price(line.unit_price),
        format_price(BasketModel::line_total(line))
    )
}

/// Multi-line listing of the basket grouped by category, with a total.
#[must_use]
pub fn format_grouped_basket(basket: &BasketModel) -> String {
    if basket.is_empty() {
        return "Basket is empty".to_string();
    }

    let mut out = String::new();
    for (category, lines) in basket.basket_grouped_by_category() {
        let _ = writeln!(out, "{category}");
        for line in lines {
            let _ = write!(out, "  {}", format_line(line));
            let weight = basket
                .catalog()
                .find_by_name(&line.product_name)
                .and_then(|product| total_weight(product, line.quantity));
            if let Some(weight) = weight {
                let _ = write!(out, " ({weight})");
            }
            out.push('\n');
        }
    }
    let _ = write!(
        out,
        "Total: {} ({} items)",
        format_price(basket.total()),
        basket.item_count()
    );
    out
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::Category;
    use crate::test_utils::*;

    #[test]
    fn test_weight_patterns_all_compile() {
        assert_eq!(WEIGHT_PATTERNS.len(), WEIGHT_UNIT_PATTERNS.len());
        for (regex, pattern) in WEIGHT_PATTERNS.iter().zip(WEIGHT_UNIT_PATTERNS) {
            assert_eq!(regex.as_str(), pattern);
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(7, 0)), "7.00");
        assert_eq!(format_price(Decimal::new(295, 2)), "2.95");
        assert_eq!(format_price(Decimal::new(35, 1)), "3.50");
    }

    #[test]
    fn test_extract_weight_units() {
        let weight = extract_weight("500g für eine Packung").unwrap();
        assert_eq!(weight.amount, 500);
        assert_eq!(weight.unit, "g");

        assert_eq!(extract_weight("1kg für eine Packung").unwrap().to_string(), "1kg");
        assert_eq!(extract_weight("1L für eine Flasche").unwrap().to_string(), "1L");
        assert_eq!(extract_weight("250ml für eine Packung").unwrap().to_string(), "250ml");
        assert_eq!(extract_weight("500 g lose").unwrap().to_string(), "500g");
    }

    #[test]
    fn test_extract_weight_missing() {
        assert!(extract_weight("6 Stück von diesem Produkt").is_none());
        assert!(extract_weight("").is_none());
    }

    #[test]
    fn test_total_weight_scales_by_quantity() {
        let product = Product::new("1", "Tomatoes", Decimal::new(450, 2), Category::FruitsAndVegetables)
            .with_info("500g für eine Packung von diesem Produkt");
        assert_eq!(total_weight(&product, 3).unwrap(), "1500g");

        let plain = Product::new("2", "Lettuce", Decimal::new(290, 2), Category::FruitsAndVegetables);
        assert!(total_weight(&plain, 3).is_none());
    }

    #[test]
    fn test_format_line() {
        let mut basket = sample_basket();
        basket.set_quantity("Bananas", 2);
        let line = basket.line("Bananas").unwrap();
        assert_eq!(format_line(line), "2x Bananas @ 3.50 = 7.00");
    }

    #[test]
    fn test_format_grouped_basket() {
        let mut basket = sample_basket();
        assert_eq!(format_grouped_basket(&basket), "Basket is empty");

        basket.set_quantity("Bananas", 2);
        basket.set_quantity("White Bread", 1);
        let text = format_grouped_basket(&basket);
        assert!(text.starts_with("Fruits & Vegetables\n  2x Bananas @ 3.50 = 7.00 (2kg)\n"));
        assert!(text.contains("Bread & Bakery\n  1x White Bread @ 2.50 = 2.50 (500g)\n"));
        assert!(text.ends_with("Total: 9.50 (3 items)"));
    }
}
