//! Handles to attachment resources owned by the attachment store.

/// Identifier of an attachment resource.
///
/// This is a lookup key, not an owner: holding an `AttachmentRef` does not
/// keep the resource alive, and the resource may be deleted independently.
/// Resolution goes through [`crate::store::AttachmentStore`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttachmentRef(String);

impl AttachmentRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AttachmentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AttachmentRef {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AttachmentRef {
    fn from(id: String) -> Self {
        Self(id)
    }
}
