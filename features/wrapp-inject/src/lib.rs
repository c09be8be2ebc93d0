//! Tag scoped parameter injection
//!
//! Handler parameters are resolved by the marker tags attached to them, not only by their type.
//! An [Injector] is built once with a fixed [TagSet], binds (tag, type) pairs or anonymous
//! defaults to [Producer]s and is then shared read-only with request handlers.
//!
//! Resolving a parameter:
//! 1. None of the injector's tags attached - `Ok(None)`, some other injector may claim it
//! 2. The first recognized tag in tag set order is chosen
//! 3. The tagged binding for the parameter type is used, else the anonymous one
//! 4. Neither exists - [ResolveError::MissingBinding]
//!
//! ```rust
//! use wrapp_inject::{Injector, MarkerTag, ParamSpec, TagInfo, TagSet};
//!
//! struct Token(String);
//!
//! struct TokenParam;
//! impl MarkerTag for TokenParam {}
//! struct OtherParam;
//! impl MarkerTag for OtherParam {}
//!
//! let mut builder = Injector::builder(TagSet::of::<(TokenParam, OtherParam)>());
//! builder.register_anonymous(|| Token("anon".into()));
//! builder
//!     .register_tagged::<TokenParam, _>(|| Token("token".into()))
//!     .unwrap();
//! let injector = builder.build();
//!
//! let token: Token = injector.resolve(&[TagInfo::of::<TokenParam>()]).unwrap().unwrap();
//! assert_eq!(token.0, "token");
//! let other: Token = injector.resolve(&[TagInfo::of::<OtherParam>()]).unwrap().unwrap();
//! assert_eq!(other.0, "anon");
//! assert!(injector.resolve::<Token>(&[]).unwrap().is_none());
//! ```

pub mod builder;
pub mod chain;
pub mod errors;
pub mod injector;
pub mod param;
pub mod producer;
pub mod registry;
pub mod single;
pub mod tags;
pub mod types;

pub use builder::InjectorBuilder;
pub use chain::ResolverChain;
pub use errors::{ConfigurationError, ResolveError};
pub use injector::{BindingSource, Injector, ResolvedFactory};
pub use param::ParamSpec;
pub use producer::Producer;
pub use registry::BindingKey;
pub use single::single;
pub use tags::{MarkerTag, TagInfo, TagList, TagSet};
pub use types::{Injectable, Produced, TypeInfo};
