//! Chain Payments Gateway - Main Entry Point

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chain_payments_gateway::infrastructure::driven_adapters::config::AppConfig;
use chain_payments_gateway::infrastructure::driving_adapters::api_rest::{self, Adapters, AppState};

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "chain_payments_gateway=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!(
        default_network = %config.contract.default_network,
        artifact = %config.contract.artifact_path,
        "Configuration loaded successfully"
    );

    let adapters = Adapters::from_config(&config);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, adapters)?;

    // Deploy the default network's contract without holding up the listener
    let registry = state.registry.clone();
    tokio::spawn(async move {
        if registry.initialize_default_network().await.is_none() {
            tracing::warn!(
                network = %registry.default_network(),
                "Default network contract not deployed; it will be deployed on first use"
            );
        }
    });

    let app = api_rest::router(state);

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
