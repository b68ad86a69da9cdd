//! Prometheus metrics for request traffic and quiz play.

use std::{sync::LazyLock, time::Instant};

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use regex::Regex;

static NUMERIC_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/-?\d+").expect("valid regex"));

/// Install the Prometheus recorder and return a handle for rendering
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5],
        )?
        .install_recorder()?;

    Ok(handle)
}

/// Middleware recording count, latency and in-flight requests
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = normalize_path(req.uri().path());

    let in_flight = gauge!(
        "http_requests_in_flight",
        "method" => method.clone(),
        "path" => path.clone()
    );
    in_flight.increment(1.0);
    let response = next.run(req).await;
    in_flight.decrement(1.0);

    let status = response.status().as_u16().to_string();
    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.clone()
    )
    .increment(1);
    histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path,
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());

    response
}

/// Replace numeric ids with `:id` to keep label cardinality bounded
fn normalize_path(path: &str) -> String {
    NUMERIC_SEGMENT.replace_all(path, "/:id").into_owned()
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (StatusCode::OK, handle.render())
}

/// Record the outcome of a quiz draw (`question` or `exhausted`)
pub fn record_quiz_draw(outcome: &'static str) {
    counter!("quiz_draws_total", "outcome" => outcome).increment(1);
}
