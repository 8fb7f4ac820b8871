//! Ten-pin bowling scorer (workspace facade crate).
//!
//! This package re-exports the workspace crates as
//! `tenpin::{core,input,term,types}` and adds the pieces shared by the
//! `tenpin` binary: environment configuration and action dispatch.

pub mod config;
pub mod play;

pub use tenpin_core as core;
pub use tenpin_input as input;
pub use tenpin_term as term;
pub use tenpin_types as types;

pub use config::{Config, OutputFormat};
