//! Dodge! (workspace facade crate).
//!
//! Re-exports the member crates under `dodge::{core,input,term,types}` and
//! hosts the process-level configuration used by the `dodge` binary.

pub mod config;

pub use dodge_core as core;
pub use dodge_input as input;
pub use dodge_term as term;
pub use dodge_types as types;

pub use config::AppConfig;
