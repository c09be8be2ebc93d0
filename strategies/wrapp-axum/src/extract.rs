use std::{marker::PhantomData, ops::Deref};

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use wrapp_inject::{Injectable, MarkerTag, ResolveError, ResolverChain, TagInfo};

/// Extractor injecting a `T` for a handler parameter tagged with `Tag`
///
/// The value is produced by the [ResolverChain] the strategy installed on the router.
/// Use `Option<Inject<Tag, T>>` if no injector claiming `Tag` is acceptable.
///
/// ```rust,ignore
/// async fn get_tokens(
///     token: Inject<TokenParam, Token>,
///     other: Inject<OtherParam, Token>,
/// ) -> String {
///     format!("{} {}", token.0, other.0)
/// }
/// ```
pub struct Inject<Tag, T>(pub T, PhantomData<fn() -> Tag>);

impl<Tag, T> Inject<Tag, T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}
impl<Tag, T> Deref for Inject<Tag, T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl<Tag: MarkerTag, T: std::fmt::Debug> std::fmt::Debug for Inject<Tag, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Inject")
            .field(&Tag::name())
            .field(&self.0)
            .finish()
    }
}

fn resolvers(parts: &Parts) -> Result<&ResolverChain, InjectRejection> {
    parts.extensions.get::<ResolverChain>().ok_or_else(|| {
        tracing::error!("No ResolverChain installed, was the router built by the strategy?");
        InjectRejection::MissingResolvers
    })
}

impl<S, Tag, T> FromRequestParts<S> for Inject<Tag, T>
where
    S: Send + Sync,
    Tag: MarkerTag,
    T: Injectable,
{
    type Rejection = InjectRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = resolvers(parts)?.require::<T>(&[TagInfo::of::<Tag>()])?;
        Ok(Inject(value, PhantomData))
    }
}

impl<S, Tag, T> OptionalFromRequestParts<S> for Inject<Tag, T>
where
    S: Send + Sync,
    Tag: MarkerTag,
    T: Injectable,
{
    type Rejection = InjectRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        let value = resolvers(parts)?.resolve::<T>(&[TagInfo::of::<Tag>()])?;
        Ok(value.map(|value| Inject(value, PhantomData)))
    }
}

/// Injection failed, always a server side misconfiguration
#[derive(thiserror::Error, Debug)]
pub enum InjectRejection {
    #[error("No resolvers are installed on this router")]
    MissingResolvers,
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

impl IntoResponse for InjectRejection {
    fn into_response(self) -> Response {
        tracing::error!("Parameter injection failed: {self}");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Parameter injection failed: {self}"),
        )
            .into_response()
    }
}
