use phishguard::{PhishGuard, ServiceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        r#"PhishGuard - URL phishing classification service

USAGE:
    phishguard [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    HOST                Server host (default: 0.0.0.0)
    PORT                Server port (default: 8080)
    MODEL_PATH          Classifier artifact path (default: phishing_model.json)
    RUST_LOG            Log level filter

EXAMPLES:
    # Run with defaults
    phishguard

    # Run with config file
    phishguard --config config.json

    # Run with custom port
    PORT=9000 phishguard
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "phishguard=info,tower_http=debug".into()),
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
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            ServiceConfig::from_file(&path)?
        }
        None => ServiceConfig::default(),
    };

    // Environment overrides
    if let Ok(host) = std::env::var("HOST") {
        config.server.host = host;
    }
    if let Ok(port) = std::env::var("PORT") {
        config.server.port = port.parse().unwrap_or(config.server.port);
    }
    if let Ok(model_path) = std::env::var("MODEL_PATH") {
        config.model_path = model_path;
    }

    tracing::info!("Starting {}", config.name);
    tracing::info!("Model artifact: {}", config.model_path);
    tracing::info!("Available endpoints:");
    tracing::info!("  GET  /");
    tracing::info!("  POST /predict");

    let service = PhishGuard::new(config);
    service.run().await.map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}
