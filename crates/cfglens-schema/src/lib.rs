//! # cfglens-schema — Schema-Driven Configuration Inspection
//!
//! Reconciles a nested configuration document with a JSON-Schema-like
//! description of it, producing one schema-annotated record per leaf value.
//! The annotated view drives human-readable diagnostics and redaction of
//! sensitive fields.
//!
//! ## Core Walk (`annotate`)
//!
//! [`SchemaDocument::annotate`] walks the schema in parallel with the
//! configuration: it dereferences same-document `$ref` fragments, applies
//! per-index array item schemas, passes uncovered object keys through
//! `additionalProperties`, selects composite (`allOf`/`anyOf`/`oneOf`)
//! branches by sub-validating each one, and masks values under nodes
//! flagged `sensitive`.
//!
//! ## Validation (`validate`)
//!
//! The [`validate`] module wraps the `jsonschema` crate. Documents are
//! self-contained: a retriever refuses every external URI, so remote and
//! file `$ref`s can never be fetched. Violations are data, not errors —
//! they accumulate and never abort a walk.
//!
//! ## Crate Policy
//!
//! - Depends only on `cfglens-core` internally.
//! - A loaded [`SchemaDocument`] is immutable; resolution borrows into it
//!   and never copies.
//! - Malformed configuration shapes are tolerated by the walker and
//!   surfaced only through validation.

pub mod annotate;
pub mod document;
pub mod error;
pub mod format;
pub mod load;
pub mod node;
pub mod store;
pub mod validate;

pub use annotate::{LeafEntry, MASK};
pub use document::SchemaDocument;
pub use error::SchemaError;
pub use format::{format_errors, format_path};
pub use load::load_document;
pub use node::{SchemaNode, SchemaType};
pub use store::SchemaStore;
pub use validate::{validate_fragment, Violation};
