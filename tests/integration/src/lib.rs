//! Integration tests for the lfsgate server.
//!
//! These tests require a running lfsgate server at `localhost:8080` in
//! client-supplied credential mode. They are marked `#[ignore]` so they
//! don't run during normal `cargo test`.
//!
//! Run them with:
//! ```text
//! cargo test -p lfsgate-integration -- --ignored
//! ```

use std::sync::Once;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Base URL for the gateway under test.
#[must_use]
pub fn gateway_url() -> String {
    std::env::var("LFSGATE_URL").unwrap_or_else(|_| "http://localhost:8080".to_owned())
}

/// An HTTP client that does not follow redirects, so the homepage 302 stays
/// observable.
#[must_use]
pub fn client() -> reqwest::Client {
    init_tracing();

    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("client construction should not fail")
}

/// The `Authorization` header value for the test credentials.
#[must_use]
pub fn basic_auth() -> String {
    format!("Basic {}", BASE64.encode("test-access-key:test-secret-key"))
}

/// The batch endpoint URL for a bucket path, with optional leading override
/// segments.
#[must_use]
pub fn batch_url(prefix: &str) -> String {
    format!("{}/{prefix}/objects/batch", gateway_url())
}

/// A download batch body for the given oids.
#[must_use]
pub fn download_batch(oids: &[&str]) -> serde_json::Value {
    let objects: Vec<serde_json::Value> = oids
        .iter()
        .enumerate()
        .map(|(idx, oid)| serde_json::json!({ "oid": oid, "size": (idx + 1) * 100 }))
        .collect();
    serde_json::json!({ "operation": "download", "objects": objects })
}

mod test_auth;
mod test_batch;
mod test_routing;
