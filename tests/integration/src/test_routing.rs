//! Routing and error-shape integration tests.

#[cfg(test)]
mod tests {
    use crate::{client, gateway_url};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_redirect_root_to_homepage() {
        let client = client();

        let resp = client
            .get(gateway_url())
            .send()
            .await
            .expect("request should reach the gateway");

        assert_eq!(resp.status(), 302);
        let location = resp
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .expect("Location header");
        assert!(location.starts_with("https://"));
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_post_on_root() {
        let client = client();

        let resp = client
            .post(gateway_url())
            .send()
            .await
            .expect("request should reach the gateway");

        assert_eq!(resp.status(), 405);
        assert_eq!(
            resp.headers().get("allow").and_then(|v| v.to_str().ok()),
            Some("GET")
        );
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_not_found_unknown_paths() {
        let client = client();

        let resp = client
            .get(format!("{}/foo", gateway_url()))
            .send()
            .await
            .expect("request should reach the gateway");

        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_get_on_batch_endpoint() {
        let client = client();

        let resp = client
            .get(format!("{}/bucket/objects/batch", gateway_url()))
            .send()
            .await
            .expect("request should reach the gateway");

        assert_eq!(resp.status(), 405);
        assert_eq!(
            resp.headers().get("allow").and_then(|v| v.to_str().ok()),
            Some("POST")
        );
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_answer_health_probe() {
        let client = client();

        let resp = client
            .get(format!("{}/_health", gateway_url()))
            .send()
            .await
            .expect("request should reach the gateway");

        assert_eq!(resp.status(), 200);
        let json: serde_json::Value = resp.json().await.expect("valid JSON body");
        assert_eq!(json["service"], "lfsgate");
    }
}
