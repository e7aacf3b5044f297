//! Batch translation integration tests.

#[cfg(test)]
mod tests {
    use crate::{basic_auth, batch_url, client, download_batch};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_one_signed_entry_per_object() {
        let client = client();

        let resp = client
            .post(batch_url("bucket.example.com"))
            .header("Authorization", basic_auth())
            .json(&download_batch(&["aaa111", "bbb222", "ccc333"]))
            .send()
            .await
            .expect("request should reach the gateway");

        assert_eq!(resp.status(), 200);
        assert_eq!(
            resp.headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("application/vnd.git-lfs+json")
        );
        assert_eq!(
            resp.headers()
                .get("cache-control")
                .and_then(|v| v.to_str().ok()),
            Some("no-store")
        );

        let json: serde_json::Value = resp.json().await.expect("valid JSON body");
        assert_eq!(json["transfer"], "basic");
        assert_eq!(json["hash_algo"], "sha256");

        let objects = json["objects"].as_array().expect("objects array");
        assert_eq!(objects.len(), 3);

        for (idx, entry) in objects.iter().enumerate() {
            assert_eq!(entry["authenticated"], true);
            assert_eq!(entry["size"], (idx + 1) * 100);

            let href = entry["actions"]["download"]["href"]
                .as_str()
                .expect("download href");
            assert!(href.starts_with("https://bucket.example.com/"));
            assert!(href.contains("X-Amz-Signature="));
            assert!(href.contains("X-Amz-Expires=3600"));
        }
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_sign_uploads_with_put_semantics() {
        let client = client();

        let body = serde_json::json!({
            "operation": "upload",
            "objects": [{ "oid": "abc123", "size": 42 }]
        });

        let resp = client
            .post(batch_url("bucket.example.com"))
            .header("Authorization", basic_auth())
            .json(&body)
            .send()
            .await
            .expect("request should reach the gateway");

        assert_eq!(resp.status(), 200);
        let json: serde_json::Value = resp.json().await.expect("valid JSON body");
        let entry = &json["objects"][0];
        assert!(entry["actions"]["upload"]["href"].is_string());
        assert!(entry["actions"]["download"].is_null());
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_conflict_on_sha1() {
        let client = client();

        let body = serde_json::json!({
            "operation": "download",
            "hash_algo": "sha1",
            "objects": [{ "oid": "abc123", "size": 1 }]
        });

        let resp = client
            .post(batch_url("bucket.example.com"))
            .header("Authorization", basic_auth())
            .json(&body)
            .send()
            .await
            .expect("request should reach the gateway");

        assert_eq!(resp.status(), 409);
        let json: serde_json::Value = resp.json().await.expect("valid JSON body");
        let message = json["message"].as_str().expect("message field");
        assert!(message.contains("'sha1'"));
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_honor_expiry_and_region_overrides() {
        let client = client();

        let resp = client
            .post(batch_url("region=eu-west-2/expiry=900/bucket.example.com"))
            .header("Authorization", basic_auth())
            .json(&download_batch(&["abc123"]))
            .send()
            .await
            .expect("request should reach the gateway");

        assert_eq!(resp.status(), 200);
        let json: serde_json::Value = resp.json().await.expect("valid JSON body");
        let action = &json["objects"][0]["actions"]["download"];
        assert_eq!(action["expires_in"], 900);
        let href = action["href"].as_str().expect("href");
        assert!(href.contains("X-Amz-Expires=900"));
        assert!(href.contains("eu-west-2"));
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_unknown_override_key() {
        let client = client();

        let resp = client
            .post(batch_url("acl=public/bucket.example.com"))
            .header("Authorization", basic_auth())
            .json(&download_batch(&["abc123"]))
            .send()
            .await
            .expect("request should reach the gateway");

        assert_eq!(resp.status(), 400);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_malformed_body() {
        let client = client();

        let resp = client
            .post(batch_url("bucket.example.com"))
            .header("Authorization", basic_auth())
            .header("Content-Type", "application/vnd.git-lfs+json")
            .body("{not json")
            .send()
            .await
            .expect("request should reach the gateway");

        assert_eq!(resp.status(), 400);
    }
}
