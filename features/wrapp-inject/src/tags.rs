use std::{any::TypeId, fmt};

/// A classification marker which can be attached to a handler parameter
///
/// Marker tags carry no behaviour, only identity. They are usually empty structs:
///
/// ```rust
/// use wrapp_inject::MarkerTag;
///
/// pub struct TokenParam;
/// impl MarkerTag for TokenParam {}
/// ```
pub trait MarkerTag: 'static {
    /// Name used in logs and error messages
    fn name() -> &'static str {
        let full = std::any::type_name::<Self>();
        full.rsplit("::").next().unwrap_or(full)
    }
}

/// Runtime identity of a [MarkerTag]
///
/// Equality and hashing only look at the [TypeId].
#[derive(Debug, Clone, Copy)]
pub struct TagInfo {
    pub name: &'static str,
    pub type_id: TypeId,
}
impl TagInfo {
    pub fn of<Tag: MarkerTag>() -> TagInfo {
        TagInfo {
            name: Tag::name(),
            type_id: TypeId::of::<Tag>(),
        }
    }
}
impl PartialEq for TagInfo {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}
impl Eq for TagInfo {}
impl std::hash::Hash for TagInfo {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}
impl fmt::Display for TagInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)
    }
}

/// The ordered set of tags an injector is willing to resolve
///
/// Fixed at construction. The order decides which tag wins when a parameter
/// carries more than one recognized tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: Vec<TagInfo>,
}

impl TagSet {
    /// Duplicates keep the position of their first occurrence
    pub fn new(tags: impl IntoIterator<Item = TagInfo>) -> Self {
        let mut unique: Vec<TagInfo> = Vec::new();
        for tag in tags {
            if unique.contains(&tag) {
                tracing::debug!("Ignoring duplicate tag {tag} in tag set");
                continue;
            }
            unique.push(tag);
        }
        TagSet { tags: unique }
    }

    /// Builds the set from a tuple of marker types, e.g. `TagSet::of::<(TokenParam, OtherParam)>()`
    pub fn of<Tags: TagList>() -> Self {
        Self::new(Tags::tags())
    }

    pub fn contains(&self, tag: &TagInfo) -> bool {
        self.tags.contains(tag)
    }

    /// First tag, in configured order, which is also part of `attached`
    pub fn first_applicable(&self, attached: &[TagInfo]) -> Option<TagInfo> {
        self.tags.iter().find(|tag| attached.contains(tag)).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TagInfo> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// A compile time list of marker tags
pub trait TagList {
    fn tags() -> Vec<TagInfo>;
}

impl TagList for () {
    fn tags() -> Vec<TagInfo> {
        Vec::new()
    }
}

macro_rules! impl_tag_list {
    ($($tag:ident),+) => {
        impl<$($tag: MarkerTag),+> TagList for ($($tag,)+) {
            fn tags() -> Vec<TagInfo> {
                vec![$(TagInfo::of::<$tag>()),+]
            }
        }
    };
}

impl_tag_list!(T1);
impl_tag_list!(T1, T2);
impl_tag_list!(T1, T2, T3);
impl_tag_list!(T1, T2, T3, T4);
impl_tag_list!(T1, T2, T3, T4, T5);
impl_tag_list!(T1, T2, T3, T4, T5, T6);
impl_tag_list!(T1, T2, T3, T4, T5, T6, T7);
impl_tag_list!(T1, T2, T3, T4, T5, T6, T7, T8);
