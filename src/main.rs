use dotenvy::dotenv;
use grocery_basket::{
    commands::{self, Command, HELP_TEXT},
    config::{self, Settings},
    core::{BasketModel, Session},
    errors::Result,
};
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    // 2. Load .env file (non-fatal, env vars can be set externally)
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Settings and catalog
    let settings = Settings::from_env().inspect_err(|e| error!("Invalid settings: {}", e))?;
    let catalog = config::load_catalog(&settings.catalog_path)
        .inspect_err(|e| error!("Failed to load catalog: {}", e))?;

    // 4. Run the session loop
    let mut session = Session::new(BasketModel::new(catalog));
    println!("{HELP_TEXT}");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match commands::parse_command(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => println!("{}", commands::execute(&mut session, &command, &settings)),
            Err(e) => {
                warn!("Rejected input '{}': {}", line, e);
                println!("❌ {e}");
            }
        }
        stdout.flush()?;
    }

    info!(
        "Session ended with {} basket lines and {} shopping list entries",
        session.basket().len(),
        session.shopping_list().len()
    );
    Ok(())
}
