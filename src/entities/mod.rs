//! Entity module - Contains the plain data types shared by the model layer.
//! Products are immutable catalog entries; basket lines and shopping list
//! entries are the mutable records owned by the basket and the list.

pub mod basket_line;
pub mod mode;
pub mod product;
pub mod shopping_list_entry;

pub use basket_line::BasketLine;
pub use mode::Mode;
pub use product::{Category, Product, ProductId};
pub use shopping_list_entry::{EntryId, EntryStatus, ShoppingListEntry};
