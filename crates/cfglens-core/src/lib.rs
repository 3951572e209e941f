//! # cfglens-core — Foundational Types for cfglens
//!
//! This crate is the bedrock of the cfglens workspace. It defines the
//! path-addressing primitives every other crate builds on: a totally
//! ordered configuration path type, runtime type tags for scalar values,
//! and the flattener that turns a nested configuration document into
//! path-keyed leaf records.
//!
//! ## Key Design Principles
//!
//! 1. **Paths are values, not strings.** `ConfigPath` is an ordered
//!    sequence of typed segments (object key or array index). String
//!    rendering happens only at the presentation edge.
//!
//! 2. **Total, stable path order.** Paths sort segment-wise: indices
//!    numerically, keys lexicographically, and an index always sorts
//!    before a key at the same position. This order is what makes the
//!    annotated output deterministic.
//!
//! 3. **One exhaustive `ValueType` enum.** Every scalar a configuration
//!    document can hold has exactly one tag; adding a variant forces
//!    every consumer to handle it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `cfglens-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod flatten;
pub mod path;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use flatten::{flatten, flatten_into};
pub use path::{ConfigPath, Segment, PATH_DELIM};
pub use value::ValueType;
