//! The hyper `Service` running the full translation pipeline.
//!
//! Request lifecycle:
//!
//! 1. Health check interception (`GET /_health`)
//! 2. Route resolution (`/` redirect vs `**/objects/batch`)
//! 3. Credential resolution (fixed or client Basic auth)
//! 4. Path decomposition (overrides + bucket path)
//! 5. Body collection and batch translation
//! 6. Error shaping
//!
//! The service's error type is `Infallible`: every failure a request can
//! hit is converted into a correctly-shaped HTTP response, and nothing
//! internal escapes as an unstructured fault. Requests are handled
//! independently — there is no shared mutable state, only the read-only
//! configuration.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::body::Incoming;
use hyper::service::Service;
use tracing::{debug, info, warn};
use uuid::Uuid;

use lfsgate_auth::credentials::resolve_identity;
use lfsgate_auth::error::AuthError;
use lfsgate_model::error::LfsError;

use crate::body::LfsResponseBody;
use crate::config::ProxyConfig;
use crate::path::decompose;
use crate::response::{batch_success, error_response, health, redirect};
use crate::router::{HOMEPAGE, Route, resolve};
use crate::translate::translate;

/// The LFS gateway service.
#[derive(Debug, Clone)]
pub struct LfsService {
    config: Arc<ProxyConfig>,
}

impl LfsService {
    /// Create a service from the gateway configuration.
    #[must_use]
    pub fn new(config: ProxyConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Service<http::Request<Incoming>> for LfsService {
    type Response = http::Response<LfsResponseBody>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, req: http::Request<Incoming>) -> Self::Future {
        let config = Arc::clone(&self.config);

        Box::pin(async move {
            let request_id = Uuid::new_v4().to_string();
            Ok(process_request(req, &config, &request_id).await)
        })
    }
}

/// Run one request through the pipeline, converting every failure into a
/// shaped response.
async fn process_request<B>(
    req: http::Request<B>,
    config: &ProxyConfig,
    request_id: &str,
) -> http::Response<LfsResponseBody>
where
    B: http_body::Body,
    B::Error: std::fmt::Display,
{
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    debug!(%method, %path, request_id, "processing request");

    if method == http::Method::GET && path == "/_health" {
        return health();
    }

    let route = match resolve(&method, &path) {
        Ok(route) => route,
        Err(err) => {
            debug!(%method, %path, error = %err, request_id, "request did not route");
            return error_response(&err);
        }
    };

    match route {
        Route::HomeRedirect => redirect(HOMEPAGE),
        Route::Batch { prefix } => match translate_batch(req, &prefix, config, request_id).await {
            Ok(response) => response,
            Err(err) => {
                warn!(%path, error = %err, request_id, "batch translation failed");
                error_response(&err)
            }
        },
    }
}

/// The batch pipeline proper: credentials, path, body, translation.
async fn translate_batch<B>(
    req: http::Request<B>,
    prefix: &str,
    config: &ProxyConfig,
    request_id: &str,
) -> Result<http::Response<LfsResponseBody>, LfsError>
where
    B: http_body::Body,
    B::Error: std::fmt::Display,
{
    let (parts, body) = req.into_parts();

    let identity =
        resolve_identity(&parts.headers, &config.credential_mode).map_err(auth_to_lfs)?;

    let decomposed = decompose(prefix).map_err(|err| {
        debug!(error = %err, request_id, "path decomposition failed");
        LfsError::MalformedBody
    })?;

    let body = collect_body(body).await?;

    let batch = translate(
        &body,
        identity,
        &decomposed.options,
        &decomposed.bucket_path,
        config.default_expiry,
    )
    .await?;

    info!(
        request_id,
        bucket_path = %decomposed.bucket_path,
        objects = batch.objects.len(),
        "translated batch request"
    );

    Ok(batch_success(&batch))
}

/// Collect the full request body into contiguous bytes.
async fn collect_body<B>(body: B) -> Result<Bytes, LfsError>
where
    B: http_body::Body,
    B::Error: std::fmt::Display,
{
    let collected = body.collect().await.map_err(|err| {
        warn!(error = %err, "failed to read request body");
        LfsError::MalformedBody
    })?;
    Ok(collected.to_bytes())
}

/// Map credential resolution failures into the protocol taxonomy.
fn auth_to_lfs(err: AuthError) -> LfsError {
    match err {
        AuthError::MissingAuthHeader => LfsError::AuthMissing,
        AuthError::MalformedAuthHeader => LfsError::AuthMalformed,
        AuthError::MissingServerCredentials => LfsError::Configuration,
    }
}
