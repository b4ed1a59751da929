//! `quoteref` — how a messaging client represents the attachment of a quoted message.
//!
//! When a reply quotes a message that carried an attachment, the preview shows
//! either a thumbnail generated from that attachment or a metadata-only stub.
//! This crate provides that reference model, plus a small lookup seam for
//! resolving thumbnail handles against an external attachment store.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod store;

pub use error::{QuoteError, Result};
pub use model::attachment_ref::AttachmentRef;
pub use model::legacy::LegacyAttachmentInfo;
pub use model::quoted::{QuotedAttachmentReference, StubPayload, ThumbnailPayload};
