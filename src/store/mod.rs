//! Attachment store seam: resolving thumbnail handles to their resources.
//!
//! The store lives outside this crate and owns the thumbnail data; quoted
//! references only hold [`AttachmentRef`] handles into it.

use crate::error::Result;
use crate::model::attachment_ref::AttachmentRef;

/// Lookup of attachment resources by handle.
pub trait AttachmentStore {
    /// Whatever the store hands back for a resolved thumbnail.
    type Resource;

    /// Resolve `attachment_ref`, failing with
    /// [`crate::QuoteError::AttachmentNotFound`] if the resource is gone.
    fn resolve(&self, attachment_ref: &AttachmentRef) -> Result<&Self::Resource>;

    fn contains(&self, attachment_ref: &AttachmentRef) -> bool {
        self.resolve(attachment_ref).is_ok()
    }
}
