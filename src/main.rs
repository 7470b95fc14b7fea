use std::env;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contract_analyzer::config::Config;
use contract_analyzer::handlers::{create_router, AppState};
use contract_analyzer::services::GeminiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contract_analyzer=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting Contract Analyzer Service");
    tracing::info!("Max file size: {}MB", config.max_file_size_mb);
    if config.retain_uploads {
        tracing::info!("Uploaded files are kept in the temp directory after each request");
    }

    let analyzer = GeminiClient::new(config.gemini.clone());
    tracing::info!("Gemini model: {}", analyzer.model());

    let state = AppState::new(analyzer, &config);
    let app = create_router(state);

    // Hosting platforms hand the port over as PORT.
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(config.server_port);

    let addr = format!("{}:{}", config.server_host, port);

    tracing::info!("Server listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
