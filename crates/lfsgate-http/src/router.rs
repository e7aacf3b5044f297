//! Route resolution: two routes and their method constraints.
//!
//! - `GET /` redirects to the project homepage; any other method on `/` is
//!   405 with `Allow: GET`.
//! - `POST <overrides>/<bucket-path>/objects/batch` runs the translation
//!   pipeline; any other method on such a path is 405 with `Allow: POST`.
//! - Anything else is 404.

use lfsgate_model::LfsError;

/// Where `GET /` redirects to.
pub const HOMEPAGE: &str = "https://github.com/lfsgate/lfsgate";

/// The fixed suffix that marks a batch endpoint.
const BATCH_SUFFIX: &str = "/objects/batch";

/// A resolved route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `GET /`: redirect to [`HOMEPAGE`].
    HomeRedirect,
    /// `POST **/objects/batch`: translate the batch. Carries the raw path
    /// ahead of the suffix (overrides + bucket path, undecoded).
    Batch {
        /// Path portion before `/objects/batch`.
        prefix: String,
    },
}

/// Resolve a method and path to a route.
///
/// # Errors
///
/// [`LfsError::RouteNotFound`] for unknown paths,
/// [`LfsError::MethodNotAllowed`] for known paths with the wrong method.
pub fn resolve(method: &http::Method, path: &str) -> Result<Route, LfsError> {
    if path == "/" {
        return if method == http::Method::GET {
            Ok(Route::HomeRedirect)
        } else {
            Err(LfsError::MethodNotAllowed {
                allow: http::Method::GET,
            })
        };
    }

    if let Some(prefix) = path.strip_suffix(BATCH_SUFFIX) {
        return if method == http::Method::POST {
            Ok(Route::Batch {
                prefix: prefix.to_owned(),
            })
        } else {
            Err(LfsError::MethodNotAllowed {
                allow: http::Method::POST,
            })
        };
    }

    Err(LfsError::RouteNotFound)
}
