use axum::Router;
use wrapp_inject::ResolverChain;

use crate::{
    WrappAxumStrategy,
    serve::{DefaultServeAxum, DynError, MakeAxumListener, ServeAxum},
};

pub struct WrappAxumStrategyBuilder<MakeListenerFn, ServeFn> {
    listener_fn: MakeListenerFn,
    serve_function: ServeFn,
    router: Router,
    resolvers: ResolverChain,
}
impl Default for WrappAxumStrategyBuilder<(), ()> {
    fn default() -> Self {
        Self::new()
    }
}
// Initial builder state, no listener or serve function bound yet
impl WrappAxumStrategyBuilder<(), ()> {
    pub fn new() -> WrappAxumStrategyBuilder<(), ()> {
        WrappAxumStrategyBuilder {
            listener_fn: (),
            serve_function: (),
            router: Router::new(),
            resolvers: ResolverChain::new(),
        }
    }
}
// Routes and resolvers can be set in any state
impl<MakeListenerFn, ServeFn> WrappAxumStrategyBuilder<MakeListenerFn, ServeFn> {
    /// Routes to serve, replaces any router set before
    pub fn router(mut self, router: Router) -> Self {
        self.router = router;
        self
    }

    /// The frozen injectors used to resolve `Inject` parameters
    pub fn resolvers(mut self, resolvers: impl Into<ResolverChain>) -> Self {
        self.resolvers = resolvers.into();
        self
    }
}
// Only allow setting listener if no Serve function is set yet
impl<AnyListener> WrappAxumStrategyBuilder<AnyListener, ()> {
    /// Will bind the Axum application to the given TCP address
    pub fn listener_tcp(
        self,
        addr: impl tokio::net::ToSocketAddrs + Send + 'static,
    ) -> WrappAxumStrategyBuilder<
        impl MakeAxumListener<ListenerType = tokio::net::TcpListener>,
        DefaultServeAxum<tokio::net::TcpListener>,
    > {
        self.custom_listener(move || async move {
            let listener = tokio::net::TcpListener::bind(addr).await?;
            Ok::<_, DynError>(listener)
        })
    }

    /// Set a custom function to create the listener for the Axum application
    /// This function will be called once during startup to create the listener.
    ///
    /// Example:
    /// ```no_run
    /// use wrapp_axum::{builder::WrappAxumStrategyBuilder, serve::DynError};
    ///
    /// let strategy = WrappAxumStrategyBuilder::new()
    ///     .custom_listener(|| async {
    ///         Ok::<_, DynError>(tokio::net::TcpListener::bind("127.0.0.1:3000").await?)
    ///     })
    ///     .build();
    /// ```
    pub fn custom_listener<MakeListenerFn: MakeAxumListener>(
        self,
        listener_fn: MakeListenerFn,
    ) -> WrappAxumStrategyBuilder<MakeListenerFn, DefaultServeAxum<MakeListenerFn::ListenerType>>
    {
        WrappAxumStrategyBuilder {
            listener_fn,
            serve_function: DefaultServeAxum::new(),
            router: self.router,
            resolvers: self.resolvers,
        }
    }
}
// Only allow setting serve function if it accepts the correct listener type
impl<MakeListenerFn, AnyServe> WrappAxumStrategyBuilder<MakeListenerFn, AnyServe>
where
    MakeListenerFn: MakeAxumListener,
{
    /// Set the function which starts serving the Axum application
    pub fn custom_serve<ServeFn: ServeAxum<MakeListenerFn::ListenerType>>(
        self,
        serve_function: ServeFn,
    ) -> WrappAxumStrategyBuilder<MakeListenerFn, ServeFn> {
        WrappAxumStrategyBuilder {
            listener_fn: self.listener_fn,
            serve_function,
            router: self.router,
            resolvers: self.resolvers,
        }
    }
}
// Only allow building if both listener and serve function are set
impl<MakeListenerFn, ServeFn> WrappAxumStrategyBuilder<MakeListenerFn, ServeFn>
where
    MakeListenerFn: MakeAxumListener,
    ServeFn: ServeAxum<MakeListenerFn::ListenerType>,
{
    pub fn build(self) -> WrappAxumStrategy<MakeListenerFn, ServeFn> {
        tracing::debug!(
            "Building axum strategy with {} injectors",
            self.resolvers.injectors().len()
        );
        WrappAxumStrategy {
            listener_fn: self.listener_fn,
            serve_function: self.serve_function,
            router: self.router,
            resolvers: self.resolvers,
        }
    }
}
