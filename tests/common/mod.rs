//! Shared helpers for integration tests.

use std::collections::HashMap;

use quoteref::store::AttachmentStore;
use quoteref::{AttachmentRef, QuoteError};

/// Thumbnail as a test store keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumb {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// In-memory stand-in for the client's attachment store.
#[derive(Default)]
pub struct FakeStore {
    thumbs: HashMap<AttachmentRef, Thumb>,
}

impl FakeStore {
    pub fn insert(&mut self, attachment_ref: AttachmentRef, content_type: &str, bytes: &[u8]) {
        self.thumbs.insert(
            attachment_ref,
            Thumb {
                content_type: content_type.to_string(),
                bytes: bytes.to_vec(),
            },
        );
    }

    pub fn remove(&mut self, attachment_ref: &AttachmentRef) -> Option<Thumb> {
        self.thumbs.remove(attachment_ref)
    }
}

impl AttachmentStore for FakeStore {
    type Resource = Thumb;

    fn resolve(&self, attachment_ref: &AttachmentRef) -> quoteref::Result<&Thumb> {
        self.thumbs
            .get(attachment_ref)
            .ok_or_else(|| QuoteError::AttachmentNotFound(attachment_ref.clone()))
    }
}
