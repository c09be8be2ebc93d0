use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    routing::get,
};
use http_body_util::BodyExt;
use tower::ServiceExt;
use wrapp_axum::{
    Inject, RequestContext, Strategy, builder::WrappAxumStrategyBuilder, serve::DynError,
    with_injection,
};
use wrapp_inject::{Injector, MarkerTag, ResolverChain, TagSet, single};

#[derive(Debug, Clone)]
struct Token(String);
#[derive(Debug)]
struct Gadget;
#[derive(Debug)]
struct RequestNumber(usize);

struct TokenParam;
impl MarkerTag for TokenParam {}
struct OtherParam;
impl MarkerTag for OtherParam {}
struct HeaderParam;
impl MarkerTag for HeaderParam {}
struct CountParam;
impl MarkerTag for CountParam {}
struct UnknownParam;
impl MarkerTag for UnknownParam {}

fn token_injector() -> Injector {
    let mut builder = Injector::builder(TagSet::of::<(TokenParam, OtherParam, HeaderParam)>());
    builder.register_anonymous(|| Token("anon".to_string()));
    builder
        .register_tagged::<TokenParam, _>(|| Token("token".to_string()))
        .unwrap()
        .register_tagged::<HeaderParam, _>(|| {
            Token(RequestContext::header("x-token").unwrap_or_default())
        })
        .unwrap();
    builder.build()
}

async fn tokens(
    token: Inject<TokenParam, Token>,
    other: Inject<OtherParam, Token>,
    header: Inject<HeaderParam, Token>,
) -> String {
    format!("{} {} {}", token.0.0, other.0.0, header.0.0)
}

async fn gadget(_gadget: Inject<TokenParam, Gadget>) -> &'static str {
    "unreachable"
}

async fn unknown(_token: Inject<UnknownParam, Token>) -> &'static str {
    "unreachable"
}

async fn maybe_unknown(token: Option<Inject<UnknownParam, Token>>) -> String {
    match token {
        Some(token) => token.into_inner().0,
        None => "none".to_string(),
    }
}

async fn count(
    first: Inject<CountParam, RequestNumber>,
    second: Inject<CountParam, RequestNumber>,
) -> String {
    format!("{} {}", first.0.0, second.0.0)
}

fn app(counter: Arc<AtomicUsize>) -> Router {
    let routes = Router::new()
        .route("/tokens", get(tokens))
        .route("/gadget", get(gadget))
        .route("/unknown", get(unknown))
        .route("/maybe-unknown", get(maybe_unknown))
        .route("/count", get(count));

    let counting =
        single::<CountParam, _>(move || RequestNumber(counter.fetch_add(1, Ordering::SeqCst)));
    let resolvers = ResolverChain::new().with(token_injector()).with(counting);
    with_injection(routes, resolvers)
}

async fn call(router: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn parameters_resolve_by_their_tag() {
    let request = Request::builder()
        .uri("/tokens")
        .header("x-token", "from-header")
        .body(Body::empty())
        .unwrap();

    let (status, body) = call(app(Arc::default()), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "token anon from-header");
}

#[tokio::test]
async fn missing_binding_is_a_server_error() {
    let (status, body) = call(app(Arc::default()), get_request("/gadget")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("No factory registered"), "{body}");
}

#[tokio::test]
async fn unclaimed_tag_is_a_server_error() {
    let (status, body) = call(app(Arc::default()), get_request("/unknown")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("No injector claims"), "{body}");
}

#[tokio::test]
async fn optional_parameter_accepts_unclaimed_tag() {
    let (status, body) = call(app(Arc::default()), get_request("/maybe-unknown")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "none");
}

#[tokio::test]
async fn every_parameter_gets_a_fresh_value() {
    let counter = Arc::new(AtomicUsize::new(0));
    let router = app(counter.clone());

    let (_, first) = call(router.clone(), get_request("/count")).await;
    let (_, second) = call(router, get_request("/count")).await;
    assert_eq!(first, "0 1");
    assert_eq!(second, "2 3");
    assert_eq!(counter.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn router_without_resolvers_rejects() {
    let router = Router::new().route("/tokens", get(tokens));
    let (status, body) = call(router, get_request("/tokens")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("No resolvers"), "{body}");
}

#[tokio::test]
async fn strategy_installs_resolvers_on_its_router() {
    let strategy = WrappAxumStrategyBuilder::new()
        .router(Router::new().route("/tokens", get(tokens)))
        .resolvers(token_injector())
        .custom_listener(|| async {
            Ok::<_, DynError>(tokio::net::TcpListener::bind("127.0.0.1:0").await?)
        })
        .build();

    let request = Request::builder()
        .uri("/tokens")
        .header("x-token", "abc")
        .body(Body::empty())
        .unwrap();
    let (status, body) = call(strategy.into_router(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "token anon abc");
}

#[tokio::test]
async fn custom_serve_receives_router_with_injection() {
    let served: Arc<Mutex<Option<(StatusCode, String)>>> = Arc::default();
    let captured = served.clone();

    let strategy = WrappAxumStrategyBuilder::new()
        .router(Router::new().route("/tokens", get(tokens)))
        .resolvers(token_injector())
        .custom_listener(|| async {
            Ok::<_, DynError>(tokio::net::TcpListener::bind("127.0.0.1:0").await?)
        })
        .custom_serve(
            move |listener: tokio::net::TcpListener, router: Router| async move {
                listener.local_addr()?;
                let request = Request::builder()
                    .uri("/tokens")
                    .header("x-token", "served")
                    .body(Body::empty())?;
                let response = call(router, request).await;
                *captured.lock().unwrap() = Some(response);
                Ok::<_, DynError>(())
            },
        )
        .build();

    strategy.serve().await.unwrap();

    let (status, body) = served.lock().unwrap().take().unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "token anon served");
}
