use crate::{
    tags::{MarkerTag, TagInfo},
    types::TypeInfo,
};

/// A single handler parameter slot: its declared type and the tags attached to it
///
/// How tags are discovered is up to the request framework. The axum strategy derives them
/// from the extractor's type parameters, a test can simply list them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSpec {
    pub target: TypeInfo,
    pub tags: Vec<TagInfo>,
}

impl ParamSpec {
    /// An untagged parameter of type `T`
    pub fn of<T: 'static>() -> Self {
        ParamSpec {
            target: TypeInfo::of::<T>(),
            tags: Vec::new(),
        }
    }

    pub fn new(target: TypeInfo, tags: impl IntoIterator<Item = TagInfo>) -> Self {
        ParamSpec {
            target,
            tags: tags.into_iter().collect(),
        }
    }

    /// Attaches another tag
    pub fn tagged<Tag: MarkerTag>(self) -> Self {
        self.with_tag(TagInfo::of::<Tag>())
    }

    pub fn with_tag(mut self, tag: TagInfo) -> Self {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }
}
