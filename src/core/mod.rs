//! Core business logic - framework-agnostic catalog, basket, shopping list and
//! session operations. Nothing in here performs I/O.

/// Basket lines, quantity reconciliation and derived views
pub mod basket;
/// Static product catalog, search and favorites
pub mod catalog;
/// Display formatting for prices, weights and basket listings
pub mod report;
/// Session state: mode toggle and search panel
pub mod session;
/// In-store shopping list
pub mod shopping_list;

pub use basket::BasketModel;
pub use catalog::Catalog;
pub use session::{ActiveView, SearchPanel, Session};
pub use shopping_list::ShoppingList;
