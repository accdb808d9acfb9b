//! Command Line Interface (CLI) layer.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for batch processing. It wires
//! user-provided options to the underlying library functionality exposed
//! via `clahe::api`.
//!
//! If you are embedding the equalizer into another application, prefer
//! using the high-level `clahe::api` module instead of calling CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
