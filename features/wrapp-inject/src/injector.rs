use std::{any::type_name, fmt::Debug, sync::Arc};

use crate::{
    builder::InjectorBuilder,
    errors::ResolveError,
    param::ParamSpec,
    producer::DynProducer,
    registry::{BindingKey, Registry},
    tags::{TagInfo, TagSet},
    types::{Injectable, Produced, TypeInfo},
};

/// Frozen set of bindings, resolving handler parameters by their tags
///
/// Cheap to clone and safe to share between request handlers, it is never written to after
/// [InjectorBuilder::build].
#[derive(Clone)]
pub struct Injector(Arc<InjectorInner>);
struct InjectorInner {
    tags: TagSet,
    registry: Registry,
}
impl Debug for Injector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tags: Vec<_> = self.0.tags.iter().map(ToString::to_string).collect();
        let mut bindings: Vec<_> = self.0.registry.keys().map(ToString::to_string).collect();
        bindings.sort();
        f.debug_struct("Injector")
            .field("tags", &tags)
            .field("bindings", &bindings)
            .finish()
    }
}

/// Where a resolved producer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingSource {
    /// Bound for exactly this tag
    Tagged(TagInfo),
    /// Fallback binding without a tag
    Anonymous,
}

/// The producer selected for a parameter
#[derive(Clone)]
pub struct ResolvedFactory {
    tag: TagInfo,
    source: BindingSource,
    producer: Arc<dyn DynProducer>,
}
impl Debug for ResolvedFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedFactory")
            .field("tag", &self.tag)
            .field("source", &self.source)
            .field("supplies", &self.supplies().type_name)
            .finish()
    }
}
impl ResolvedFactory {
    /// The tag which selected this factory
    pub fn tag(&self) -> TagInfo {
        self.tag
    }

    pub fn source(&self) -> BindingSource {
        self.source
    }

    pub fn supplies(&self) -> TypeInfo {
        self.producer.supplies()
    }

    /// Invokes the producer, every call yields a fresh value
    pub fn produce(&self) -> Produced {
        self.producer.produce()
    }
}

impl Injector {
    pub(crate) fn new(tags: TagSet, registry: Registry) -> Self {
        Self(Arc::new(InjectorInner { tags, registry }))
    }

    pub fn builder(tags: TagSet) -> InjectorBuilder {
        InjectorBuilder::new(tags)
    }

    /// Tags this injector claims parameters for
    pub fn tags(&self) -> &TagSet {
        &self.0.tags
    }

    /// All registered bindings, in no particular order
    pub fn bindings(&self) -> impl Iterator<Item = &BindingKey> {
        self.0.registry.keys()
    }

    /// True if the parameter carries at least one of this injector's tags
    pub fn claims(&self, param: &ParamSpec) -> bool {
        self.0.tags.first_applicable(&param.tags).is_some()
    }

    /// Selects the producer for a parameter
    ///
    /// - `Ok(None)` if the parameter carries none of this injector's tags
    /// - The binding for the first applicable tag (in tag set order), else the anonymous binding
    /// - [ResolveError::MissingBinding] if neither exists
    pub fn resolve_factory(
        &self,
        param: &ParamSpec,
    ) -> Result<Option<ResolvedFactory>, ResolveError> {
        let Some(tag) = self.0.tags.first_applicable(&param.tags) else {
            tracing::trace!("No applicable tag on {}, deferring", param.target);
            return Ok(None);
        };

        let registry = &self.0.registry;
        let tagged = registry
            .get(&BindingKey::tagged(tag, param.target))
            .map(|producer| (BindingSource::Tagged(tag), producer));
        // Fall back to the anonymous binding
        let resolved = tagged.or_else(|| {
            registry
                .get(&BindingKey::anonymous(param.target))
                .map(|producer| (BindingSource::Anonymous, producer))
        });

        match resolved {
            Some((source, producer)) => {
                tracing::trace!("Resolved {} for {tag} from {source:?}", param.target);
                Ok(Some(ResolvedFactory {
                    tag,
                    source,
                    producer: producer.clone(),
                }))
            }
            None => {
                tracing::error!(
                    "Parameter {} is tagged {tag} but no factory is registered for it",
                    param.target
                );
                Err(ResolveError::MissingBinding {
                    target: param.target,
                    tag,
                })
            }
        }
    }

    /// Resolves and invokes the producer for a parameter
    pub fn resolve_dyn(&self, param: &ParamSpec) -> Result<Option<Produced>, ResolveError> {
        Ok(self.resolve_factory(param)?.map(|factory| factory.produce()))
    }

    /// Resolves a value of type `T` for a parameter carrying `tags`
    pub fn resolve<T: Injectable>(&self, tags: &[TagInfo]) -> Result<Option<T>, ResolveError> {
        let param = ParamSpec::new(TypeInfo::of::<T>(), tags.iter().copied());
        self.resolve_dyn(&param)?.map(downcast).transpose()
    }
}

pub(crate) fn downcast<T: Injectable>(produced: Produced) -> Result<T, ResolveError> {
    produced
        .downcast()
        .map_err(|actual_type| ResolveError::DowncastFailed {
            required_type: type_name::<T>(),
            actual_type,
        })
}
