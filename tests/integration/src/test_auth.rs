//! Credential resolution integration tests.
//!
//! These assume the server runs in client-supplied credential mode.

#[cfg(test)]
mod tests {
    use crate::{batch_url, client, download_batch};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_unauthorize_missing_credentials() {
        let client = client();

        let resp = client
            .post(batch_url("bucket.example.com"))
            .json(&download_batch(&["abc123"]))
            .send()
            .await
            .expect("request should reach the gateway");

        assert_eq!(resp.status(), 401);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_non_basic_scheme() {
        let client = client();

        let resp = client
            .post(batch_url("bucket.example.com"))
            .header("Authorization", "Bearer some-token")
            .json(&download_batch(&["abc123"]))
            .send()
            .await
            .expect("request should reach the gateway");

        assert_eq!(resp.status(), 400);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_undecodable_credentials() {
        let client = client();

        let resp = client
            .post(batch_url("bucket.example.com"))
            .header("Authorization", "Basic %%%invalid%%%")
            .json(&download_batch(&["abc123"]))
            .send()
            .await
            .expect("request should reach the gateway");

        assert_eq!(resp.status(), 400);
    }
}
