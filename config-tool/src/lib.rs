//! Bootstrapper for the remotely maintained project configuration tool.
//!
//! The binary performs a single fetch-then-execute sequence: download a
//! code fragment over HTTP, load it into an isolated script namespace,
//! and invoke its configuration entry point with the project dependency
//! names. All failures are reported on stdout and swallowed.

pub mod bootstrap;
pub mod error;
pub mod fetch;
pub mod script;

pub use error::ScriptError;
