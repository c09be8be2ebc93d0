use thiserror::Error;

use crate::{tags::TagInfo, types::TypeInfo};

/// Errors while registering bindings
///
/// Raised eagerly at registration so invalid configuration never reaches request handling.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The binding names tags this injector was not constructed with
    #[error("Cannot configure injection for unmapped tags: {}", TagNames(.tags))]
    UnmappedTags { tags: Vec<TagInfo> },
}

/// Errors when resolving a parameter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The parameter carries a recognized tag, but neither a tagged nor an anonymous binding exists
    #[error("No factory registered for '{target}' under tag '{tag}'")]
    MissingBinding { target: TypeInfo, tag: TagInfo },

    #[error("Failed to downcast, required: '{required_type}' actual: '{actual_type}'")]
    DowncastFailed {
        required_type: &'static str,
        actual_type: &'static str,
    },

    /// No injector in a chain recognized any of the parameter's tags
    #[error("No injector claims '{target}' tagged with [{}]", TagNames(.tags))]
    Unclaimed { target: TypeInfo, tags: Vec<TagInfo> },
}

struct TagNames<'a>(&'a [TagInfo]);
impl std::fmt::Display for TagNames<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        f.write_str(&names.join(", "))
    }
}
