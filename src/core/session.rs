//! Session business logic - One shopper's basket, shopping list and mode.
//!
//! The session is the single owner of both collections. Switching mode only
//! changes which of them is presented; neither is cleared or merged.

use crate::{
    core::{basket::BasketModel, shopping_list::ShoppingList},
    entities::{Mode, Product},
};
use tracing::debug;

/// What the search panel should display
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPanel<'a> {
    /// Search is not active
    Hidden,
    /// Search is active but nothing has been typed yet
    Favorites(Vec<&'a Product>),
    /// Products matching the query
    Results(Vec<&'a Product>),
    /// The query matched nothing
    NoMatches,
}

/// Which collection the current mode presents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    /// Online mode
    Basket,
    /// In-store mode
    ShoppingList,
}

/// A shopping session
#[derive(Debug, Clone)]
pub struct Session {
    basket: BasketModel,
    shopping_list: ShoppingList,
    mode: Mode,
    search_active: bool,
    query: String,
}

impl Session {
    /// Starts a session in online mode with an empty shopping list.
    #[must_use]
    pub fn new(basket: BasketModel) -> Self {
        Self::with_shopping_list(basket, ShoppingList::new())
    }

    /// Starts a session from existing collections.
    #[must_use]
    pub fn with_shopping_list(basket: BasketModel, shopping_list: ShoppingList) -> Self {
        Self {
            basket,
            shopping_list,
            mode: Mode::default(),
            search_active: false,
            query: String::new(),
        }
    }

    /// The basket.
    #[must_use]
    pub const fn basket(&self) -> &BasketModel {
        &self.basket
    }

    /// Mutable access to the basket.
    pub fn basket_mut(&mut self) -> &mut BasketModel {
        &mut self.basket
    }

    /// The shopping list.
    #[must_use]
    pub const fn shopping_list(&self) -> &ShoppingList {
        &self.shopping_list
    }

    /// Mutable access to the shopping list.
    pub fn shopping_list_mut(&mut self) -> &mut ShoppingList {
        &mut self.shopping_list
    }

    /// Current mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Switches to the given mode.
    pub fn set_mode(&mut self, mode: Mode) {
        debug!("Mode {} -> {}", self.mode, mode);
        self.mode = mode;
    }

    /// Flips between in-store and online and returns the new mode.
    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// The collection the current mode presents.
    #[must_use]
    pub const fn view(&self) -> ActiveView {
        match self.mode {
            Mode::Online => ActiveView::Basket,
            Mode::InStore => ActiveView::ShoppingList,
        }
    }

    /// Activates the search panel.
    pub fn open_search(&mut self) {
        self.search_active = true;
    }

    /// Hides the search panel and forgets the query.
    pub fn close_search(&mut self) {
        self.search_active = false;
        self.query.clear();
    }

    /// Replaces the search query, activating search.
    pub fn set_query(&mut self, query: &str) {
        self.search_active = true;
        query.clone_into(&mut self.query);
    }

    /// Current search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the search panel is active.
    #[must_use]
    pub const fn is_search_active(&self) -> bool {
        self.search_active
    }

    /// Sets a quantity picked from a search result card.
    ///
    /// When this adds a new basket line the query is cleared so the panel
    /// returns to favorites; search stays open. Updates and removals keep
    /// the query.
    pub fn add_from_search(&mut self, product_name: &str, quantity: u32) {
        let is_new = self.basket.line(product_name).is_none();
        self.basket.set_quantity(product_name, quantity);
        if is_new && self.basket.line(product_name).is_some() {
            debug!("Added {} from search, clearing query", product_name);
            self.query.clear();
        }
    }

    /// Content of the search panel for the current search state.
    #[must_use]
    pub fn search_panel(&self) -> SearchPanel<'_> {
        if !self.search_active {
            return SearchPanel::Hidden;
        }
        if self.query.is_empty() {
            return SearchPanel::Favorites(self.basket.catalog().favorites());
        }

        let results = self.basket.catalog().search(&self.query);
        if results.is_empty() {
            SearchPanel::NoMatches
        } else {
            SearchPanel::Results(results)
        }
    }
}
