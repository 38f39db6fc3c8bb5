//! Correlation ids for till requests.
//!
//! Each request to the till carries an `x-request-id`. A clerk's browser
//! never sends one, so the till usually mints a UUID v4; an id set by a
//! fronting proxy is kept when it is short visible ASCII. The id lands on
//! the `http_request` span, on the Sentry scope for that request and on
//! the response, so a bill or refused cart action can be traced from the
//! log line back to the page the clerk saw.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Span;
use uuid::Uuid;

/// Header carrying the correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest incoming id the till will reuse.
const MAX_INCOMING_LEN: usize = 128;

/// Tag the request with a correlation id and echo it on the response.
pub async fn tag_request(request: Request, next: Next) -> Response {
    let id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(reusable_id)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    Span::current().record("request_id", id.as_str());
    sentry::configure_scope(|scope| scope.set_tag("request_id", &id));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

/// An upstream id worth keeping: non-empty, bounded and visible ASCII.
fn reusable_id(value: &HeaderValue) -> Option<String> {
    let text = value.to_str().ok()?;
    let keep = !text.is_empty()
        && text.len() <= MAX_INCOMING_LEN
        && text.bytes().all(|b| b.is_ascii_graphic());
    keep.then(|| text.to_owned())
}
