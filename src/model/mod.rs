//! Core data model types for quoted-message attachments.

pub mod attachment_ref;
pub mod legacy;
pub mod quoted;
