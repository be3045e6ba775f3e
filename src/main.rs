use ticket_registry::{api::Server, config::Config, data};
use tracing::{info, warn};

/// The main entry point for the ticket registry service.
///
/// Initializes logging, loads the configuration and the seed data, reports
/// any number registered to several holders, then starts the API server.
#[tokio::main] // Marks the async main function to be run by the Tokio runtime.
async fn main() -> anyhow::Result<()> {
    // Initialize logging using tracing_subscriber.
    // This sets up a default formatter that prints logs to stdout.
    tracing_subscriber::fmt::init();

    // Load the configuration, from the first argument or the default path.
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| Config::DEFAULT_PATH.to_string());
    let config = Config::load(&config_path)?;
    info!("Ticket registry starting with config: {:?}", config);

    // Load the registry and the prize list.
    // Unset paths fall back to the data compiled into the binary.
    let registry = data::load_registry(config.data.registry_path.as_deref())?;
    let prizes = data::load_prizes(config.data.prizes_path.as_deref())?;

    // Scan for numbers registered to several holders.
    // They are still served; verification of those numbers is refused.
    for report in registry.detect_duplicates() {
        warn!(
            "Number {} is registered to several holders: {}",
            report.number,
            report.holders.join(", ")
        );
    }

    // Create the API server over the loaded data and start it.
    // The `?` operator propagates any error from binding the listener.
    let server = Server::new(config, registry, prizes);
    server.start().await?;

    Ok(())
}
