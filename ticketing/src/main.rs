use ticketing::{ServiceConfig, TicketingService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        r#"Ticketing Service - customers, partners, events and ticket reservations

USAGE:
    ticketing [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration (and seed data) from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    HOST                Server host (default: 0.0.0.0), ignored with --config
    PORT                Server port (default: 8080), ignored with --config
    RUST_LOG            Log level filter

EXAMPLES:
    # Run with defaults
    ticketing

    # Run with config file
    ticketing --config ticketing.json

    # Run with custom port
    PORT=9000 ticketing
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ticketing=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("--config requires a path argument");
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                print_help();
                anyhow::bail!("unknown argument: {}", arg);
            }
        }
        i += 1;
    }

    let config = if let Some(path) = config_path {
        tracing::info!("Loading configuration from: {}", path);
        ServiceConfig::from_file(&path)?
    } else {
        tracing::info!("Using default configuration");
        ServiceConfig::from_env()
    };

    let service = TicketingService::from_config(config).await?;

    tracing::info!("Starting {}", service.config.name);
    tracing::info!("Available endpoints:");
    tracing::info!("  GET  /ping");
    tracing::info!("  POST /customers");
    tracing::info!("  GET  /customers/{{id}}");
    tracing::info!("  POST /partners");
    tracing::info!("  GET  /partners/{{id}}");
    tracing::info!("  POST /events");
    tracing::info!("  POST /events/{{id}}/subscribe");

    service.run().await?;

    Ok(())
}
