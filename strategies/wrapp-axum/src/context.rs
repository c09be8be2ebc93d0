use std::future::Future;

use axum::{
    extract::Request,
    http::{HeaderMap, Method, Uri},
    middleware::Next,
    response::Response,
};

tokio::task_local! {
    static CURRENT: RequestContext;
}

/// Ambient state of the request currently being handled
///
/// Producers take no arguments, so those which depend on the request read it from here.
/// Only available while a request runs through the [request_context] middleware.
///
/// ```rust,ignore
/// builder.register_tagged::<ProviderParam, _>(|| {
///     Token(RequestContext::header("date").unwrap_or_default())
/// })?;
/// ```
#[derive(Debug, Clone)]
pub struct RequestContext {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
}

impl RequestContext {
    pub fn new(method: Method, uri: Uri, headers: HeaderMap) -> Self {
        RequestContext {
            method,
            uri,
            headers,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Runs `future` with this context as the current one
    pub async fn scope<F: Future>(self, future: F) -> F::Output {
        CURRENT.scope(self, future).await
    }

    /// Calls `f` with the current context, `None` outside of a request
    pub fn with_current<R>(f: impl FnOnce(&RequestContext) -> R) -> Option<R> {
        CURRENT.try_with(f).ok()
    }

    /// A clone of the current context
    pub fn current() -> Option<RequestContext> {
        Self::with_current(RequestContext::clone)
    }

    /// Value of a header of the current request, if it is present and valid UTF-8
    pub fn header(name: &str) -> Option<String> {
        Self::with_current(|ctx| {
            ctx.headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        })
        .flatten()
    }
}

/// Middleware making the [RequestContext] available to producers for the rest of the request
pub async fn request_context(request: Request, next: Next) -> Response {
    let context = RequestContext::new(
        request.method().clone(),
        request.uri().clone(),
        request.headers().clone(),
    );
    context.scope(next.run(request)).await
}
