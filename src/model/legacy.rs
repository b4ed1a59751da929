//! Legacy attachment metadata.
//!
//! Older message records only kept the content type and the sender-supplied
//! filename of an attachment. That record is the construction source for
//! stubs when no thumbnail exists.

/// Metadata about an attachment from the pre-existing attachment-info records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LegacyAttachmentInfo {
    /// MIME content type (e.g. `"application/pdf"`), if recorded.
    pub content_type: Option<String>,

    /// Filename as supplied by the original sender, if recorded.
    pub source_filename: Option<String>,
}

impl LegacyAttachmentInfo {
    pub fn new(content_type: Option<String>, source_filename: Option<String>) -> Self {
        Self {
            content_type,
            source_filename,
        }
    }

    /// Copy with empty fields folded to `None`.
    ///
    /// For callers whose records use `""` to mean "unknown". Stub
    /// construction itself never does this.
    pub fn normalized(&self) -> Self {
        Self {
            content_type: normalize_metadata(self.content_type.clone()),
            source_filename: normalize_metadata(self.source_filename.clone()),
        }
    }
}

/// Fold `Some("")` to `None`. Any other value, whitespace included, is
/// returned untouched.
pub fn normalize_metadata(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
