use axum::{extract::Request, http::header::CONTENT_LENGTH, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

/// Logs every request and its response with the elapsed handler time.
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    info!("➡️ [Request] {method} {uri}");

    let started = Instant::now();
    let response = next.run(request).await;
    let elapsed = started.elapsed();

    let size = response
        .headers()
        .get(CONTENT_LENGTH)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    info!(
        "⬅️ [Response] {method} {uri} - Status: {} - Time: {}ms - Size: {size} bytes",
        response.status(),
        elapsed.as_millis()
    );

    response
}
