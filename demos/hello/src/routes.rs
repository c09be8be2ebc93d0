use axum::{Router, routing::get};
use wrapp_axum::Inject;
use wrapp_config::config::Config;

use crate::{
    config::HelloConfig,
    injection::{ConfigParam, OtherParam, ProviderParam, RequestId, RequestParam, Token, TokenParam},
};

pub fn router() -> Router {
    Router::new()
        .route("/tokens", get(tokens))
        .route("/health", get(health))
}

/// Lists the token every binding produced for this call
async fn tokens(
    token: Inject<TokenParam, Token>,
    other: Inject<OtherParam, Token>,
    provider: Inject<ProviderParam, Token>,
    fallback: Inject<ConfigParam, Token>,
    config: Inject<ConfigParam, Config<HelloConfig>>,
    request_id: Inject<RequestParam, RequestId>,
) -> String {
    tracing::info!(request_id = %request_id.0.0, "Serving tokens");
    format!(
        "request: {}\ntoken: {}\nother: {}\nprovider: {}\nanonymous: {}\nserved by: {}\n",
        request_id.0.0,
        token.0.0,
        other.0.0,
        provider.0.0,
        fallback.0.0,
        config.address(),
    )
}

async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use wrapp_axum::with_injection;
    use wrapp_config::provider::ConfigProvider;

    use super::*;
    use crate::injection::resolvers;

    fn app() -> Router {
        let mut configs = ConfigProvider::initialize();
        configs.add_config(HelloConfig::default()).unwrap();
        with_injection(router(), resolvers(&configs).unwrap())
    }

    async fn body_of(request: Request<Body>) -> (StatusCode, String) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn tokens_come_from_their_tagged_bindings() {
        let request = Request::builder()
            .uri("/tokens")
            .header("date", "Fri, 16 Oct 2026 10:00:00 GMT")
            .header("x-request-id", "req-42")
            .body(Body::empty())
            .unwrap();

        let (status, body) = body_of(request).await;
        assert_eq!(status, StatusCode::OK);

        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines[0], "request: req-42");
        assert!(lines[1].starts_with("token: token-"), "{body}");
        assert!(lines[2].starts_with("other: other-"), "{body}");
        assert_eq!(lines[3], "provider: Fri, 16 Oct 2026 10:00:00 GMT");
        assert!(lines[4].starts_with("anonymous: anon-"), "{body}");
        assert_eq!(lines[5], "served by: 127.0.0.1:8080");
    }

    #[tokio::test]
    async fn provider_token_is_empty_without_date_header() {
        let request = Request::builder().uri("/tokens").body(Body::empty()).unwrap();
        let (status, body) = body_of(request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("provider: \n"), "{body}");
    }

    #[tokio::test]
    async fn health_is_ok() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = body_of(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "ok");
    }
}
