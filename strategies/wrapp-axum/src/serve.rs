use std::{fmt::Debug, future::Future, marker::PhantomData};

use axum::{Router, serve::Listener};

/// A boxed error type for convenience
pub type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Creates the Listener, called once when the strategy starts serving
///
/// Implemented for any `FnOnce() -> impl Future<Output = Result<Listener, DynError>>`
pub trait MakeAxumListener {
    type ListenerType: Listener<Addr: Debug> + Send + 'static;

    fn create_listener(self) -> impl Future<Output = Result<Self::ListenerType, DynError>> + Send;
}
impl<Listen, Fun, FunFuture> MakeAxumListener for Fun
where
    Listen: Listener + Send + 'static,
    Listen::Addr: Debug, // Required by axum::serve
    Fun: FnOnce() -> FunFuture,
    FunFuture: Future<Output = Result<Listen, DynError>> + Send,
{
    type ListenerType = Listen;

    #[allow(refining_impl_trait)]
    fn create_listener(self) -> FunFuture {
        self()
    }
}

/// Serves the router, which already carries the resolvers and the request context layer
///
/// Implemented for any `FnOnce(Listener, Router) -> impl Future<Output = Result<(), DynError>>`
pub trait ServeAxum<L: Listener + Send + 'static> {
    fn serve(self, listener: L, router: Router) -> impl Future<Output = Result<(), DynError>>;
}
impl<L, Fun, FunFuture> ServeAxum<L> for Fun
where
    L: Listener + Send + 'static,
    Fun: FnOnce(L, Router) -> FunFuture,
    FunFuture: Future<Output = Result<(), DynError>> + Send,
{
    #[allow(refining_impl_trait)]
    fn serve(self, listener: L, router: Router) -> FunFuture {
        self(listener, router)
    }
}

/// Serves with `axum::serve` until Ctrl+C is received
pub struct DefaultServeAxum<L> {
    _marker: PhantomData<fn() -> L>,
}
impl<L> DefaultServeAxum<L> {
    pub(crate) fn new() -> Self {
        DefaultServeAxum {
            _marker: PhantomData,
        }
    }
}
impl<L> ServeAxum<L> for DefaultServeAxum<L>
where
    L: Listener + Send + 'static,
    L::Addr: Debug,
{
    async fn serve(self, listener: L, router: Router) -> Result<(), DynError> {
        match listener.local_addr() {
            Ok(addr) => tracing::info!("Serving on {addr:?}"),
            Err(e) => tracing::warn!("Serving on unknown address: {e}"),
        }

        axum::serve(listener, router.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C, shutting down: {e}");
    }
}
