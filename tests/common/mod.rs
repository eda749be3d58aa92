//! Common test utilities for projkit integration tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project directory plus helpers to run the CLI
//! - Fixtures: image writers and config snippets

pub mod env;
pub mod fixtures;

#[allow(unused_imports)]
pub use env::*;
#[allow(unused_imports)]
pub use fixtures::*;
