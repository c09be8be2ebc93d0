use std::{collections::HashMap, fmt, sync::Arc};

use crate::{producer::DynProducer, tags::TagInfo, types::TypeInfo};

/// Key of a single binding
///
/// `tag: None` is the anonymous binding, used when no tag specific one exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingKey {
    pub tag: Option<TagInfo>,
    pub target: TypeInfo,
}
impl BindingKey {
    pub fn anonymous(target: TypeInfo) -> Self {
        BindingKey { tag: None, target }
    }

    pub fn tagged(tag: TagInfo, target: TypeInfo) -> Self {
        BindingKey {
            tag: Some(tag),
            target,
        }
    }
}
impl fmt::Display for BindingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.tag {
            Some(tag) => write!(f, "{tag} {}", self.target),
            None => write!(f, "{}", self.target),
        }
    }
}

/// Flat table of all bindings of one injector
///
/// A single map keyed by (tag or none, type), so there is at most one producer per key.
#[derive(Default, Clone)]
pub(crate) struct Registry {
    bindings: HashMap<BindingKey, Arc<dyn DynProducer>>,
}

impl Registry {
    /// Returns true if an existing binding was replaced
    pub(crate) fn insert(&mut self, key: BindingKey, producer: Arc<dyn DynProducer>) -> bool {
        self.bindings.insert(key, producer).is_some()
    }

    pub(crate) fn get(&self, key: &BindingKey) -> Option<&Arc<dyn DynProducer>> {
        self.bindings.get(key)
    }

    pub(crate) fn contains(&self, key: &BindingKey) -> bool {
        self.bindings.contains_key(key)
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &BindingKey> {
        self.bindings.keys()
    }

    pub(crate) fn len(&self) -> usize {
        self.bindings.len()
    }
}
