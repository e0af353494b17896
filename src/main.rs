use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use isbn_service::{config, server};

#[tokio::main]
async fn main() {
    // Load configuration
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "isbn_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = config::Config::from_env();

    // Check for --port CLI argument
    let args: Vec<String> = std::env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--port") {
        match args.get(pos + 1).map(|val| val.parse::<u16>()) {
            Some(Ok(port)) => config.port = port,
            _ => tracing::warn!("Ignoring invalid --port argument"),
        }
    }

    if let Err(e) = server::run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
