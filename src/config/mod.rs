/// Product catalog loading from catalog.toml
pub mod catalog;

/// Runtime settings from environment variables
pub mod settings;

pub use catalog::load_catalog;
pub use settings::Settings;
