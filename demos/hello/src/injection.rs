use uuid::Uuid;
use wrapp_axum::{RequestContext, serve::DynError};
use wrapp_config::provider::ConfigProvider;
use wrapp_inject::{Injector, MarkerTag, ResolverChain, TagSet, single};

use crate::config::HelloConfig;

/// Token injected into handlers, its prefix shows which binding produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Token(pub String);

/// Id of the current call, from the `x-request-id` header or freshly generated
#[derive(Debug, Clone, PartialEq)]
pub struct RequestId(pub String);

pub struct TokenParam;
impl MarkerTag for TokenParam {}

pub struct OtherParam;
impl MarkerTag for OtherParam {}

/// Token taken from the request's `date` header
pub struct ProviderParam;
impl MarkerTag for ProviderParam {}

pub struct ConfigParam;
impl MarkerTag for ConfigParam {}

pub struct RequestParam;
impl MarkerTag for RequestParam {}

/// Tokens and configs
pub fn app_injector(configs: &ConfigProvider) -> Result<Injector, DynError> {
    let mut builder =
        Injector::builder(TagSet::of::<(TokenParam, OtherParam, ProviderParam, ConfigParam)>());

    builder.register_anonymous(|| Token(format!("anon-{}", Uuid::new_v4())));
    builder
        .register_tagged::<TokenParam, _>(|| Token(format!("token-{}", Uuid::new_v4())))?
        .register_tagged::<OtherParam, _>(|| Token(format!("other-{}", Uuid::new_v4())))?
        .register_tagged::<ProviderParam, _>(|| {
            Token(RequestContext::header("date").unwrap_or_default())
        })?
        .register_tagged::<ConfigParam, _>(configs.config_producer::<HelloConfig>()?)?;

    Ok(builder.build())
}

/// Separate injector only claiming `RequestParam`
pub fn request_injector() -> Injector {
    single::<RequestParam, _>(|| {
        let id = RequestContext::header("x-request-id")
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        RequestId(id)
    })
}

pub fn resolvers(configs: &ConfigProvider) -> Result<ResolverChain, DynError> {
    Ok(ResolverChain::new()
        .with(app_injector(configs)?)
        .with(request_injector()))
}
