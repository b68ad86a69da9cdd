use axum::{Router, middleware, routing::get};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;
use trivia_api::{config::ApiConfig, state::ApiState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration from environment variables
    dotenvy::dotenv().ok();
    let config = ApiConfig::from_env()?;

    trivia_api::tracing::init_tracing(config.env);

    let state = ApiState::from_config(&config).await?;

    let cors = trivia_api::middleware::cors::create_cors_layer(&config.parsed_allowed_origins());

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let mut app = trivia_api::router::router();
    if config.metrics_enabled {
        let metrics_handle = trivia_api::metrics::init_metrics()?;
        let metrics_app: Router<ApiState> = Router::new()
            .route("/metrics", get(trivia_api::metrics::metrics_handler))
            .with_state(metrics_handle);
        app = app.merge(metrics_app);
        tracing::info!("Prometheus metrics exposed at /metrics");
    }

    let app = app
        .with_state(state)
        .layer(cors)
        .layer(trace_layer)
        .layer(middleware::from_fn(trivia_api::metrics::track_metrics))
        .layer(middleware::from_fn(
            trivia_api::middleware::request_id::request_id_middleware,
        ));

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, environment = ?config.env, "Trivia API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    tracing::info!("Shutting down");
}
