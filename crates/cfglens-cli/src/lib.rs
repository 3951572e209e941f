//! # cfglens-cli — Command Handlers
//!
//! One module per subcommand; `main.rs` assembles and dispatches.

pub mod inspect;
pub mod validate;
