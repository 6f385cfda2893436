//! Text commands for the interactive driver.
//!
//! Each input line is parsed into a [`Command`] and executed against a
//! [`Session`], producing the text to print. Parsing failures are reported
//! back to the user; they never end the session.

use crate::{
    config::Settings,
    core::{
        Session,
        basket::BasketModel,
        report::{format_grouped_basket, format_line, format_price, total_weight},
        session::SearchPanel,
    },
    entities::{EntryId, Mode, Product, ShoppingListEntry},
    errors::{Error, Result},
};

/// Help text listing every command
pub const HELP_TEXT: &str = "Available commands:\n\
    `search [query]` - Open search (favorites when no query)\n\
    `close` - Close search\n\
    `set <quantity> <product name>` - Set a basket quantity (0 removes)\n\
    `basket` - Show the basket grouped by category\n\
    `recent` - Show the last added products\n\
    `total` - Show the basket total\n\
    `mode [online|instore]` - Switch or show the mode\n\
    `add <text>` - Add a shopping list entry\n\
    `toggle <id>` - Move a shopping list entry between planning and done\n\
    `list` - Show the shopping list\n\
    `quit` - Exit";

/// A parsed driver command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open search with the given (possibly empty) query
    Search(String),
    /// Close search
    CloseSearch,
    /// Set the quantity of a product
    Set {
        /// New quantity
        quantity: u32,
        /// Product display name
        name: String,
    },
    /// Show the grouped basket
    Basket,
    /// Show the most recently touched lines
    Recent,
    /// Show the basket total
    Total,
    /// Switch to a mode, or toggle when `None`
    Mode(Option<Mode>),
    /// Add a shopping list entry
    Add(String),
    /// Toggle a shopping list entry
    Toggle(EntryId),
    /// Show the shopping list
    List,
    /// Show help
    Help,
    /// Leave the driver
    Quit,
}

fn command_error(message: impl Into<String>) -> Error {
    Error::Command {
        message: message.into(),
    }
}

/// Parses one input line.
///
/// # Errors
/// Returns [`Error::Command`] for unknown commands or malformed arguments.
pub fn parse_command(input: &str) -> Result<Command> {
    let input = input.trim();
    let (word, rest) = input
        .split_once(char::is_whitespace)
        .map_or((input, ""), |(word, rest)| (word, rest.trim()));

    match word.to_lowercase().as_str() {
        "search" => Ok(Command::Search(rest.to_string())),
        "favorites" => Ok(Command::Search(String::new())),
        "close" => Ok(Command::CloseSearch),
        "set" => parse_set(rest),
        "basket" => Ok(Command::Basket),
        "recent" => Ok(Command::Recent),
        "total" => Ok(Command::Total),
        "mode" if rest.is_empty() => Ok(Command::Mode(None)),
        "mode" => rest.parse::<Mode>().map(|mode| Command::Mode(Some(mode))).map_err(command_error),
        "add" if rest.is_empty() => Err(command_error("Shopping list entry cannot be empty")),
        "add" => Ok(Command::Add(rest.to_string())),
        "toggle" => rest
            .parse::<u64>()
            .map(|raw| Command::Toggle(EntryId::new(raw)))
            .map_err(|_| command_error(format!("Invalid entry id '{rest}'"))),
        "list" => Ok(Command::List),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err(command_error("Empty command, type `help` for a list")),
        other => Err(command_error(format!(
            "Unknown command '{other}', type `help` for a list"
        ))),
    }
}

fn parse_set(rest: &str) -> Result<Command> {
    let Some((raw_quantity, name)) = rest.split_once(char::is_whitespace) else {
        return Err(command_error("Usage: set <quantity> <product name>"));
    };

    let quantity: i64 = raw_quantity
        .parse()
        .map_err(|_| command_error(format!("Invalid quantity '{raw_quantity}'")))?;
    if quantity < 0 {
        return Err(command_error("Quantity cannot be negative"));
    }
    let quantity =
        u32::try_from(quantity).map_err(|_| command_error(format!("Quantity {quantity} is too large")))?;

    Ok(Command::Set {
        quantity,
        name: name.trim().to_string(),
    })
}

/// Runs a command against the session and returns the text to show.
///
/// `Quit` is left to the caller and produces an empty string.
pub fn execute(session: &mut Session, command: &Command, settings: &Settings) -> String {
    match command {
        Command::Search(query) => {
            session.set_query(query);
            render_search_panel(session)
        }
        Command::CloseSearch => {
            session.close_search();
            "Search closed".to_string()
        }
        Command::Set { quantity, name } => set_quantity(session, name, *quantity),
        Command::Basket => format_grouped_basket(session.basket()),
        Command::Recent => render_recent(session.basket(), settings.recent_lines),
        Command::Total => format!(
            "Total: {} ({} items)",
            format_price(session.basket().total()),
            session.basket().item_count()
        ),
        Command::Mode(None) => format!("Mode: {}", session.toggle_mode()),
        Command::Mode(Some(mode)) => {
            session.set_mode(*mode);
            format!("Mode: {mode}")
        }
        Command::Add(text) => match session.shopping_list_mut().add_entry(text) {
            Some(id) => format!("✅ Added #{id} {}", text.trim()),
            None => "❌ Shopping list entry cannot be empty.".to_string(),
        },
        Command::Toggle(id) => match session.shopping_list_mut().toggle_entry(*id) {
            Some(status) => format!("✅ Moved #{id} to {status:?}"),
            None => format!("❌ No shopping list entry #{id}"),
        },
        Command::List => render_shopping_list(session),
        Command::Help => HELP_TEXT.to_string(),
        Command::Quit => String::new(),
    }
}

fn set_quantity(session: &mut Session, name: &str, quantity: u32) -> String {
    if session.basket().catalog().find_by_name(name).is_none() {
        return format!("❌ Product '{name}' not found.");
    }

    if session.is_search_active() {
        session.add_from_search(name, quantity);
    } else {
        session.basket_mut().set_quantity(name, quantity);
    }
    match session.basket().line(name) {
        Some(line) => format!("✅ {}", format_line(line)),
        None => format!("✅ Removed {name}"),
    }
}

fn render_product(product: &Product, in_basket: u32) -> String {
    let mut text = format!("{} - {}", product.name, format_price(product.price));
    if let Some(brand) = &product.brand {
        text.push_str(&format!(" ({brand})"));
    }
    if in_basket > 0 {
        text.push_str(&format!(" [{in_basket} in basket"));
        if let Some(weight) = total_weight(product, in_basket) {
            text.push_str(&format!(", {weight}"));
        }
        text.push(']');
    }
    text
}

fn render_products(basket: &BasketModel, heading: &str, products: &[&Product]) -> String {
    let mut lines = vec![heading.to_string()];
    lines.extend(
        products
            .iter()
            .map(|product| format!("  {}", render_product(product, basket.quantity_of(&product.name)))),
    );
    lines.join("\n")
}

fn render_search_panel(session: &Session) -> String {
    match session.search_panel() {
        SearchPanel::Hidden => "Search is closed".to_string(),
        SearchPanel::Favorites(products) => render_products(session.basket(), "favorites", &products),
        SearchPanel::Results(products) => render_products(
            session.basket(),
            &format!("{} results for '{}'", products.len(), session.query()),
            &products,
        ),
        SearchPanel::NoMatches => format!("No products found for '{}'", session.query()),
    }
}

fn render_recent(basket: &BasketModel, max_count: usize) -> String {
    if basket.is_empty() {
        return "Basket is empty".to_string();
    }
    let recent = basket.recent_lines(max_count);
    if recent.is_empty() {
        return format!("{} lines in basket, recent summary is turned off", basket.len());
    }
    recent
        .into_iter()
        .map(format_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_entries(heading: &str, entries: &[ShoppingListEntry]) -> String {
    let mut lines = vec![format!("{heading} ({})", entries.len())];
    lines.extend(
        entries
            .iter()
            .map(|entry| format!("  #{} {}", entry.id, entry.text)),
    );
    lines.join("\n")
}

fn render_shopping_list(session: &Session) -> String {
    let list = session.shopping_list();
    format!(
        "{}\n{}",
        render_entries("Planning", list.planning()),
        render_entries("Done", list.done())
    )
}
