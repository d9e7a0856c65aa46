use std::sync::Arc;

use tokenomics_be::api;
use tokenomics_be::clients::create_completion_provider;
use tokenomics_be::config::Config;
use tokenomics_be::services::TokenomicsService;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tokenomics_be=debug,tower_http=info".into()),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let provider = create_completion_provider(&config.provider)?;
    tracing::info!(
        provider = provider.provider_name(),
        model = %config.provider.model,
        "Completion provider ready"
    );

    let app_state = Arc::new(api::AppState {
        tokenomics: Arc::new(TokenomicsService::new(provider)),
    });

    let app = api::create_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
