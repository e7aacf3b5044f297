//! Response construction: success envelopes, redirects, and error shaping.
//!
//! Success responses carry `Content-Type: application/vnd.git-lfs+json` and
//! `Cache-Control: no-store` — a signed URL embeds a fixed expiry, so a
//! cached batch response would hand out URLs that die under the client.
//! Error responses are shaped entirely by the [`LfsError`] taxonomy: status
//! code, optional `Allow` header, and a JSON message body only where the
//! protocol defines one.

use lfsgate_model::batch::{BatchResponse, LFS_MEDIA_TYPE};
use lfsgate_model::error::LfsError;

use crate::body::LfsResponseBody;

/// Build the 200 response for a translated batch.
#[must_use]
pub fn batch_success(batch: &BatchResponse) -> http::Response<LfsResponseBody> {
    let Ok(body) = serde_json::to_vec(batch) else {
        return error_response(&LfsError::Signing(
            "batch response serialization failed".to_owned(),
        ));
    };

    http::Response::builder()
        .status(http::StatusCode::OK)
        .header(http::header::CONTENT_TYPE, LFS_MEDIA_TYPE)
        .header(http::header::CACHE_CONTROL, "no-store")
        .body(LfsResponseBody::from_bytes(body))
        .expect("static response parts should be valid")
}

/// Build the error response for any pipeline failure: exact status, `Allow`
/// header on 405, JSON message body only when the error defines one.
#[must_use]
pub fn error_response(err: &LfsError) -> http::Response<LfsResponseBody> {
    let mut builder = http::Response::builder().status(err.status_code());

    if let Some(allow) = err.allow_header() {
        builder = builder.header(http::header::ALLOW, allow.as_str());
    }

    let body = match err.message_body() {
        Some(message) => {
            builder = builder.header(http::header::CONTENT_TYPE, LFS_MEDIA_TYPE);
            LfsResponseBody::from_bytes(serde_json::to_vec(&message).unwrap_or_default())
        }
        None => LfsResponseBody::empty(),
    };

    builder
        .body(body)
        .expect("static response parts should be valid")
}

/// Build the 302 redirect for `GET /`.
#[must_use]
pub fn redirect(location: &'static str) -> http::Response<LfsResponseBody> {
    http::Response::builder()
        .status(http::StatusCode::FOUND)
        .header(http::header::LOCATION, location)
        .body(LfsResponseBody::empty())
        .expect("static response parts should be valid")
}

/// Build the health probe response.
#[must_use]
pub fn health() -> http::Response<LfsResponseBody> {
    http::Response::builder()
        .status(http::StatusCode::OK)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(LfsResponseBody::from_string(
            r#"{"status":"running","service":"lfsgate"}"#,
        ))
        .expect("static health response should be valid")
}
