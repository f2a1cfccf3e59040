//! The tools module provides the user-facing glue around the transform
//! core.
//!
//! - cli: command line surface and log level plumbing.
//!
//! Nothing in here touches the engine's state; by the time the core runs,
//! the mode and file names have already been validated.
pub mod cli;
