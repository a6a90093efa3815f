pub mod api; // HTTP surface of the analysis service
pub mod client; // Blocking client for embedding surfaces
pub mod config;
pub mod form; // Typed intake form + coercion
pub mod models;
pub mod presentation; // Tier mapping + render-ready report view
pub mod scoring; // Prompt assembly, chat backend, response parsing
pub mod session; // Screen-level state machine

use tracing_subscriber::EnvFilter;

/// Starts the analysis server and blocks until it exits.
pub async fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let ctx = api::ApiContext::from_env();
    match &ctx.backend {
        Some(_) => tracing::info!("Chat backend configured, model {}", config::GROQ_MODEL),
        None => tracing::warn!(
            "{} not set; scoring requests will be rejected",
            config::GROQ_API_KEY_ENV
        ),
    }

    let addr = std::env::var(config::LISTEN_ADDR_ENV)
        .unwrap_or_else(|_| config::DEFAULT_LISTEN_ADDR.to_string());
    let app = api::analysis_router(ctx);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind analysis server address");
    tracing::info!("Analysis service listening on {addr}");

    axum::serve(listener, app)
        .await
        .expect("Analysis server error");
}
