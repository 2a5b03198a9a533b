//! Middleware for logging requests and responses.

use axum::{body::Bytes, extract::Request, middleware::Next, response::Response};

/// The maximum number of body bytes written to the info-level log per
/// request or response.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is truncated
/// and the full body is logged at the `debug` level instead. Expense
/// payloads can carry base64 receipt photos and export responses are binary
/// files, so the limit does real work here.
///
/// The original bytes are passed through untouched; only the log output is
/// lossily decoded.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body_bytes) = extract_request_parts(request).await;
    log_request(&parts, &body_bytes);

    let request = Request::from_parts(parts, body_bytes.into());
    let response = next.run(request).await;

    let (parts, body_bytes) = extract_response_parts(response).await;
    log_response(&parts, &body_bytes);

    Response::from_parts(parts, body_bytes.into())
}

async fn extract_request_parts(request: Request) -> (axum::http::request::Parts, Bytes) {
    let (parts, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();

    (parts, body_bytes)
}

async fn extract_response_parts(response: Response) -> (axum::http::response::Parts, Bytes) {
    let (parts, body) = response.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();

    (parts, body_bytes)
}

fn log_request(parts: &axum::http::request::Parts, body: &[u8]) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        let truncated = String::from_utf8_lossy(&body[..LOG_BODY_LENGTH_LIMIT]);
        tracing::info!(
            "Received request: {} {}\nbody: {truncated}...",
            parts.method,
            parts.uri,
        );
        tracing::debug!("Full request body: {:?}", String::from_utf8_lossy(body));
    } else {
        tracing::info!(
            "Received request: {} {}\nbody: {:?}",
            parts.method,
            parts.uri,
            String::from_utf8_lossy(body)
        );
    }
}

fn log_response(parts: &axum::http::response::Parts, body: &[u8]) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        let truncated = String::from_utf8_lossy(&body[..LOG_BODY_LENGTH_LIMIT]);
        tracing::info!("Sending response: {}\nbody: {truncated}...", parts.status);
        tracing::debug!("Full response body: {:?}", String::from_utf8_lossy(body));
    } else {
        tracing::info!(
            "Sending response: {}\nbody: {:?}",
            parts.status,
            String::from_utf8_lossy(body)
        );
    }
}
