//! # Error Types
//!
//! Structured errors for schema loading, reference resolution, and the
//! annotation walk. All errors use `thiserror` for derive-based `Display`
//! and `Error` implementations.
//!
//! ## Design
//!
//! - Reference and schema-shape defects fail loudly and abort the walk.
//! - Validation violations are *not* errors: they are accumulated as data
//!   ([`crate::validate::Violation`]) and never abort anything.
//! - Configuration shape mismatches are tolerated silently by the walker
//!   and surfaced only through validation.

use thiserror::Error;

/// Error raised by schema loading, resolution, or annotation.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A `$ref` was malformed, or addressed a node that does not exist or
    /// cannot be indexed.
    #[error("invalid schema reference {reference:?}: {reason}")]
    InvalidReference {
        /// The reference text as written in the schema.
        reference: String,
        /// Why resolution failed.
        reason: String,
    },

    /// The walk reached a schema node it cannot dispatch: a `not`
    /// combinator, a composite with no recognized combinator, an unknown
    /// `type`, or a `$ref` surviving dereference.
    #[error("unsupported schema at '{at}': {reason}")]
    UnsupportedSchema {
        /// Display form of the configuration path where the node was reached.
        at: String,
        /// What made the node unsupported.
        reason: String,
    },

    /// The named schema does not exist in the store.
    #[error("no such schema: {name:?} (looked in {dir})")]
    SchemaNotFound {
        /// The requested schema name.
        name: String,
        /// The store directory that was searched.
        dir: String,
    },

    /// A schema file exists but could not be read or parsed.
    #[error("schema load error for '{name}': {reason}")]
    SchemaLoad {
        /// Schema name or filename.
        name: String,
        /// Reason the schema could not be loaded.
        reason: String,
    },

    /// The fragment validator could not be compiled from a schema node.
    #[error("validator build error: {reason}")]
    ValidatorBuild {
        /// Reason the validator could not be built.
        reason: String,
    },

    /// A configuration document could not be read or parsed.
    #[error("document load error for '{path}': {reason}")]
    DocumentLoad {
        /// Path to the document that failed to load.
        path: String,
        /// Reason the document could not be loaded.
        reason: String,
    },

    /// IO error reading a schema or document.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
