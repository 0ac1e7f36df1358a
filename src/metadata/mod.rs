//! # Spectral Metadata Registry
//!
//! Schema-aware key/value store attached to every [`crate::spectrum::Spectrum`].
//!
//! The registry is built in two phases:
//!
//! 1. **Registration** ([`MetadataSchema`]): the fixed set of interchange
//!    labels is declared, each with its reserved/required flags.
//! 2. **Update** ([`Metadata`]): readers and writers replace values. A key
//!    that was never registered is added as a user-defined entry.
//!
//! Two render modes exist. Plain mode emits `label = value` for every
//! non-empty entry. Interchange mode emits `##LABEL= value` for reserved
//! labels and `##$LABEL= value` for user-defined ones, and keeps required
//! entries even when they are empty.

mod entry;
pub mod keys;
mod registry;
mod schema;

#[cfg(test)]
mod tests;

pub use entry::MetadataEntry;
pub use registry::{Metadata, RenderOptions};
pub use schema::MetadataSchema;

pub(crate) use entry::truncate_line;
