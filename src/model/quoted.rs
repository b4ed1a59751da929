//! Attachment of a quoted (replied-to) message.
//!
//! A reply preview shows either a thumbnail derived from the quoted
//! attachment or, when none could be made (e.g. a generic file), a stub built
//! from the original's metadata. Which one applies is decided upstream; this
//! module only holds the outcome.

use tracing::debug;

use crate::config::StubConfig;
use crate::error::{QuoteError, Result};
use crate::store::AttachmentStore;

use super::attachment_ref::AttachmentRef;
use super::legacy::LegacyAttachmentInfo;

/// A reference to the attachment held by a quoted message reply.
///
/// Exactly one case is active. Not `#[non_exhaustive]`: consumers match
/// both cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuotedAttachmentReference {
    /// The quoted attachment was thumbnail-able and a thumbnail exists.
    Thumbnail(ThumbnailPayload),

    /// No thumbnail; only metadata of the original is kept to render a
    /// generic file placeholder.
    Stub(StubPayload),
}

/// A thumbnail generated from the quoted attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailPayload {
    attachment_ref: AttachmentRef,
    mime_type: Option<String>,
    source_filename: Option<String>,
}

/// Metadata-only placeholder for a quoted attachment.
///
/// Always carries a MIME type, a source filename, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubPayload {
    mime_type: Option<String>,
    source_filename: Option<String>,
}

impl ThumbnailPayload {
    /// `mime_type` and `source_filename` describe the _original_ attachment,
    /// not the thumbnail.
    pub fn new(
        attachment_ref: AttachmentRef,
        mime_type: Option<String>,
        source_filename: Option<String>,
    ) -> Self {
        Self {
            attachment_ref,
            mime_type,
            source_filename,
        }
    }

    /// Handle of the thumbnail in the attachment store.
    pub fn attachment_ref(&self) -> &AttachmentRef {
        &self.attachment_ref
    }

    /// MIME type of the original attachment.
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    /// Filename given by the original sender.
    pub fn source_filename(&self) -> Option<&str> {
        self.source_filename.as_deref()
    }
}

impl StubPayload {
    /// Build a stub, or `None` if both fields are absent.
    ///
    /// Only presence is checked: `Some("")` counts as present and values are
    /// kept verbatim.
    pub fn new(mime_type: Option<String>, source_filename: Option<String>) -> Option<Self> {
        if mime_type.is_none() && source_filename.is_none() {
            debug!("Rejected stub without MIME type or filename");
            return None;
        }
        Some(Self {
            mime_type,
            source_filename,
        })
    }

    /// Build a stub from a legacy record's `content_type` and `source_filename`.
    pub fn from_legacy(info: &LegacyAttachmentInfo) -> Option<Self> {
        Self::new(info.content_type.clone(), info.source_filename.clone())
    }

    /// Like [`StubPayload::new`], for callers propagating errors with `?`.
    pub fn try_new(mime_type: Option<String>, source_filename: Option<String>) -> Result<Self> {
        Self::new(mime_type, source_filename).ok_or(QuoteError::InvalidStub)
    }

    /// Like [`StubPayload::from_legacy`], for callers propagating errors with `?`.
    pub fn try_from_legacy(info: &LegacyAttachmentInfo) -> Result<Self> {
        Self::from_legacy(info).ok_or(QuoteError::InvalidStub)
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn source_filename(&self) -> Option<&str> {
        self.source_filename.as_deref()
    }
}

impl QuotedAttachmentReference {
    pub fn thumbnail(payload: ThumbnailPayload) -> Self {
        Self::Thumbnail(payload)
    }

    pub fn stub(payload: StubPayload) -> Self {
        Self::Stub(payload)
    }

    /// Stub case from a legacy record, if the record yields a valid stub.
    pub fn stub_from_legacy(info: &LegacyAttachmentInfo) -> Option<Self> {
        StubPayload::from_legacy(info).map(Self::Stub)
    }

    /// Stub case from a legacy record, folding empty fields to absent first
    /// when `config.treat_empty_as_absent` is set.
    pub fn stub_from_legacy_with(info: &LegacyAttachmentInfo, config: &StubConfig) -> Option<Self> {
        if config.treat_empty_as_absent {
            Self::stub_from_legacy(&info.normalized())
        } else {
            Self::stub_from_legacy(info)
        }
    }

    pub fn is_thumbnail(&self) -> bool {
        matches!(self, Self::Thumbnail(_))
    }

    pub fn is_stub(&self) -> bool {
        matches!(self, Self::Stub(_))
    }

    /// MIME type of the original attachment, whichever case is active.
    pub fn mime_type(&self) -> Option<&str> {
        match self {
            Self::Thumbnail(t) => t.mime_type(),
            Self::Stub(s) => s.mime_type(),
        }
    }

    /// Sender-supplied filename of the original attachment, whichever case is active.
    pub fn source_filename(&self) -> Option<&str> {
        match self {
            Self::Thumbnail(t) => t.source_filename(),
            Self::Stub(s) => s.source_filename(),
        }
    }

    /// Thumbnail handle; `None` for stubs.
    pub fn attachment_ref(&self) -> Option<&AttachmentRef> {
        match self {
            Self::Thumbnail(t) => Some(t.attachment_ref()),
            Self::Stub(_) => None,
        }
    }

    /// Look up the thumbnail resource in `store`.
    ///
    /// Stubs resolve to `Ok(None)`. A thumbnail whose resource is gone yields
    /// [`QuoteError::AttachmentNotFound`].
    pub fn resolve_thumbnail<'s, S>(&self, store: &'s S) -> Result<Option<&'s S::Resource>>
    where
        S: AttachmentStore + ?Sized,
    {
        match self {
            Self::Thumbnail(t) => store.resolve(t.attachment_ref()).map(Some),
            Self::Stub(_) => Ok(None),
        }
    }
}
