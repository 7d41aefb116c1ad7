use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tutor_api::{build_router, AppState, Config};
use tutor_completion::CompletionGateway;
use tutor_llm::ProviderClient;
use tutor_persist::{PersistClient, ThreadRepo};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_logging(&config);

    tracing::info!("Starting tutor API server");
    tracing::info!("Config loaded: {}:{}", config.server.host, config.server.port);

    tracing::info!("Initializing provider client");
    let provider = Arc::new(ProviderClient::new(&config.openai_api_key)?);

    tracing::info!("Connecting to MongoDB");
    let persist = PersistClient::connect(&config.mongodb_uri, &config.mongodb.database).await?;
    let thread_repo: Arc<dyn ThreadRepo> = Arc::new(persist.threads().clone());
    tracing::info!("MongoDB connected");

    let gateway = CompletionGateway::from_config(&config.gateway_config(), thread_repo)?;

    let state = Arc::new(AppState::new(config, gateway, provider));
    let app = build_router(state.clone());

    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry.with(tracing_subscriber::fmt::layer().json()).init();
        }
        _ => {
            registry.with(tracing_subscriber::fmt::layer().pretty()).init();
        }
    }
}
