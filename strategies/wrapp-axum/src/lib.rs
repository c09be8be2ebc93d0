//! Axum strategy for Wrapp
//!
//! Serves an axum [Router] whose handlers receive tag injected parameters through
//! [Inject](extract::Inject). The strategy publishes the frozen [ResolverChain] to every request
//! and scopes the [RequestContext](context::RequestContext) around it, so producers can read
//! the current request.

use axum::{Extension, Router, middleware};
use wrapp_inject::ResolverChain;

use crate::serve::{DynError, MakeAxumListener, ServeAxum};

pub mod builder;
pub mod context;
pub mod extract;
pub mod serve;

pub use context::RequestContext;
pub use extract::{Inject, InjectRejection};

// #####################################################
// Generic Strategy code

/// A Strategy is any component which can serve requests, be it HTTP, gRPC, Kafka, etc.
///
/// How the Strategy serves requests is up to the Strategy implementation.
#[allow(async_fn_in_trait)]
pub trait Strategy {
    /// Tries to start serving the Strategy, will be called once during startup.
    ///
    /// If the Strategy fails to start, it should return an error.
    /// After the Strategy has started, run until the application is shut down.
    async fn serve(self) -> Result<(), DynError>;
}

// #####################################################
// Axum specific code

/// Adds everything `Inject` needs to a router
///
/// The resolvers are shared read-only by all requests.
pub fn with_injection(router: Router, resolvers: ResolverChain) -> Router {
    router
        .layer(middleware::from_fn(context::request_context))
        .layer(Extension(resolvers))
}

pub struct WrappAxumStrategy<MakeListenerFn, ServeFn>
where
    MakeListenerFn: MakeAxumListener,
    ServeFn: ServeAxum<MakeListenerFn::ListenerType>,
{
    listener_fn: MakeListenerFn,
    serve_function: ServeFn,
    router: Router,
    resolvers: ResolverChain,
}

impl<A, B> WrappAxumStrategy<A, B>
where
    A: MakeAxumListener,
    B: ServeAxum<A::ListenerType>,
{
    /// The router as it will be served, without binding a listener
    pub fn into_router(self) -> Router {
        with_injection(self.router, self.resolvers)
    }
}

impl<MakeListenerFn, ServeFn> Strategy for WrappAxumStrategy<MakeListenerFn, ServeFn>
where
    MakeListenerFn: MakeAxumListener,
    ServeFn: ServeAxum<MakeListenerFn::ListenerType>,
{
    async fn serve(self) -> Result<(), DynError> {
        let listener = self.listener_fn.create_listener().await?;
        let router = with_injection(self.router, self.resolvers);
        self.serve_function.serve(listener, router).await
    }
}
