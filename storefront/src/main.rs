use storefront::{Config, Storefront, print_banner, setup_environment, ui};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Environment (dotenv, logging, log cleanup)
    setup_environment()?;

    print_banner();

    tracing::info!("Abeer Hotel storefront starting...");

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize the controller (opens the state store, rehydrates state)
    let app = Storefront::initialize(&config)?;

    // 4. Run the terminal UI until the user quits
    if let Err(e) = ui::run(app) {
        tracing::error!("UI error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
