//! Git LFS batch API wire shapes.
//!
//! A batch request names an operation (`upload` or `download`), an optional
//! hash algorithm, and a list of objects identified by content digest. The
//! batch response echoes each object back with a signed action URL attached.
//!
//! Request:
//!
//! ```json
//! {
//!   "operation": "download",
//!   "hash_algo": "sha256",
//!   "objects": [{ "oid": "31d6...", "size": 1024 }]
//! }
//! ```
//!
//! Response:
//!
//! ```json
//! {
//!   "transfer": "basic",
//!   "hash_algo": "sha256",
//!   "objects": [{
//!     "oid": "31d6...",
//!     "size": 1024,
//!     "authenticated": true,
//!     "actions": { "download": { "href": "https://...", "expires_in": 3600 } }
//!   }]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// The media type for LFS batch request and response bodies.
pub const LFS_MEDIA_TYPE: &str = "application/vnd.git-lfs+json";

/// The only hash algorithm the gateway accepts.
pub const SHA256: &str = "sha256";

/// The LFS batch operation requested by the client.
///
/// The enum is exhaustive: any other value fails deserialization, so an
/// unrecognized operation is rejected before it can reach the URL signer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Client wants to upload objects (signed PUT URLs).
    Upload,
    /// Client wants to download objects (signed GET URLs).
    Download,
}

impl Operation {
    /// The HTTP method the signed URL must authorize.
    #[must_use]
    pub fn http_method(self) -> http::Method {
        match self {
            Self::Upload => http::Method::PUT,
            Self::Download => http::Method::GET,
        }
    }

    /// The operation name as it appears on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Download => "download",
        }
    }
}

/// One object in a batch request: an opaque content digest and a byte count.
///
/// The `oid` is expected to be a hex digest but is not validated as such; the
/// `size` is echoed back unchanged and plays no part in signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestObject {
    /// Content identifier of the object.
    pub oid: String,
    /// Size of the object in bytes.
    pub size: u64,
}

/// A parsed LFS batch request body.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    /// The requested operation.
    pub operation: Operation,
    /// The hash algorithm naming the objects. Defaults to `sha256`.
    #[serde(default = "default_hash_algo")]
    pub hash_algo: String,
    /// The objects to negotiate transfer URLs for.
    pub objects: Vec<RequestObject>,
}

fn default_hash_algo() -> String {
    SHA256.to_owned()
}

/// A single signed action: where to transfer the object and for how long the
/// URL remains valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObjectAction {
    /// The presigned URL.
    pub href: String,
    /// Validity window of the URL in seconds.
    pub expires_in: u64,
}

/// The action set attached to a response object, keyed by operation name.
///
/// Exactly one of the fields is populated per response entry; absent actions
/// are omitted from the JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Actions {
    /// Signed download action, present for `download` batches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<ObjectAction>,
    /// Signed upload action, present for `upload` batches.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload: Option<ObjectAction>,
}

impl Actions {
    /// Build an action set carrying `action` under the given operation's key.
    #[must_use]
    pub fn for_operation(operation: Operation, action: ObjectAction) -> Self {
        match operation {
            Operation::Download => Self {
                download: Some(action),
                ..Self::default()
            },
            Operation::Upload => Self {
                upload: Some(action),
                ..Self::default()
            },
        }
    }
}

/// One entry in a batch response, echoing the request object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseObject {
    /// Content identifier, echoed from the request.
    pub oid: String,
    /// Object size in bytes, echoed from the request.
    pub size: u64,
    /// Always `true`: the href embeds its own authentication.
    pub authenticated: bool,
    /// The signed action for the requested operation.
    pub actions: Actions,
}

/// A complete LFS batch response.
#[derive(Debug, Clone, Serialize)]
pub struct BatchResponse {
    /// The transfer adapter. Only `basic` is supported.
    pub transfer: String,
    /// The hash algorithm naming the objects.
    pub hash_algo: String,
    /// One entry per requested object.
    pub objects: Vec<ResponseObject>,
}

impl BatchResponse {
    /// Assemble a `basic`/`sha256` response from signed object entries.
    #[must_use]
    pub fn basic(objects: Vec<ResponseObject>) -> Self {
        Self {
            transfer: "basic".to_owned(),
            hash_algo: SHA256.to_owned(),
            objects,
        }
    }
}

/// A protocol-level error body, e.g. the 409 unsupported-hash-algorithm
/// rejection. This is the only error shape that carries a message; all other
/// failures are signaled by status code alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Human-readable description the LFS client is expected to surface.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_deserialize_batch_request() {
        let body = r#"{
            "operation": "download",
            "objects": [
                { "oid": "abc123", "size": 42 },
                { "oid": "def456", "size": 0 }
            ]
        }"#;

        let req: BatchRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.operation, Operation::Download);
        assert_eq!(req.hash_algo, "sha256");
        assert_eq!(req.objects.len(), 2);
        assert_eq!(req.objects[0].oid, "abc123");
        assert_eq!(req.objects[1].size, 0);
    }

    #[test]
    fn test_should_default_hash_algo_to_sha256() {
        let body = r#"{ "operation": "upload", "objects": [] }"#;
        let req: BatchRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.hash_algo, SHA256);
    }

    #[test]
    fn test_should_keep_explicit_hash_algo() {
        let body = r#"{ "operation": "upload", "hash_algo": "sha1", "objects": [] }"#;
        let req: BatchRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.hash_algo, "sha1");
    }

    #[test]
    fn test_should_reject_unknown_operation() {
        let body = r#"{ "operation": "delete", "objects": [] }"#;
        let result: Result<BatchRequest, _> = serde_json::from_str(body);
        assert!(result.is_err(), "unknown operation must fail to parse");
    }

    #[test]
    fn test_should_map_operations_to_http_methods() {
        assert_eq!(Operation::Upload.http_method(), http::Method::PUT);
        assert_eq!(Operation::Download.http_method(), http::Method::GET);
    }

    #[test]
    fn test_should_serialize_actions_under_operation_key() {
        let action = ObjectAction {
            href: "https://example.com/obj".to_owned(),
            expires_in: 3600,
        };
        let actions = Actions::for_operation(Operation::Upload, action);
        let json = serde_json::to_value(&actions).unwrap();

        assert!(json.get("upload").is_some());
        assert!(json.get("download").is_none());
    }

    #[test]
    fn test_should_serialize_response_envelope() {
        let response = BatchResponse::basic(vec![ResponseObject {
            oid: "abc".to_owned(),
            size: 7,
            authenticated: true,
            actions: Actions::for_operation(
                Operation::Download,
                ObjectAction {
                    href: "https://bucket.example/abc".to_owned(),
                    expires_in: 900,
                },
            ),
        }]);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["transfer"], "basic");
        assert_eq!(json["hash_algo"], "sha256");
        assert_eq!(json["objects"][0]["oid"], "abc");
        assert_eq!(json["objects"][0]["size"], 7);
        assert_eq!(json["objects"][0]["authenticated"], true);
        assert_eq!(json["objects"][0]["actions"]["download"]["expires_in"], 900);
    }
}
