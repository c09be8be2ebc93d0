use crate::{
    errors::ResolveError,
    injector::{downcast, Injector},
    param::ParamSpec,
    tags::TagInfo,
    types::{Injectable, Produced, TypeInfo},
};

/// Independent injectors asked in order
///
/// An injector which does not recognize any of a parameter's tags defers to the next one.
/// The first injector claiming the parameter decides, errors are never skipped.
#[derive(Debug, Clone, Default)]
pub struct ResolverChain {
    injectors: Vec<Injector>,
}

impl ResolverChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, injector: Injector) -> Self {
        self.injectors.push(injector);
        self
    }

    pub fn push(&mut self, injector: Injector) {
        self.injectors.push(injector);
    }

    pub fn injectors(&self) -> &[Injector] {
        &self.injectors
    }

    pub fn resolve_dyn(&self, param: &ParamSpec) -> Result<Option<Produced>, ResolveError> {
        for injector in &self.injectors {
            if let Some(produced) = injector.resolve_dyn(param)? {
                return Ok(Some(produced));
            }
        }
        Ok(None)
    }

    pub fn resolve<T: Injectable>(&self, tags: &[TagInfo]) -> Result<Option<T>, ResolveError> {
        let param = ParamSpec::new(TypeInfo::of::<T>(), tags.iter().copied());
        self.resolve_dyn(&param)?.map(downcast).transpose()
    }

    /// Like [ResolverChain::resolve], but a parameter nobody claims is an error
    pub fn require<T: Injectable>(&self, tags: &[TagInfo]) -> Result<T, ResolveError> {
        self.resolve(tags)?.ok_or_else(|| ResolveError::Unclaimed {
            target: TypeInfo::of::<T>(),
            tags: tags.to_vec(),
        })
    }
}
impl From<Injector> for ResolverChain {
    fn from(injector: Injector) -> Self {
        ResolverChain::new().with(injector)
    }
}
impl FromIterator<Injector> for ResolverChain {
    fn from_iter<I: IntoIterator<Item = Injector>>(iter: I) -> Self {
        ResolverChain {
            injectors: iter.into_iter().collect(),
        }
    }
}
