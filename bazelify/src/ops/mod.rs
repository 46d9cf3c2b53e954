//! Core operations.
//!
//! This module contains the business logic for bazelify commands,
//! separated from CLI argument parsing and output rendering.

pub mod bake;
pub mod check;
pub mod info;

pub use bake::bake;
pub use check::check;
pub use info::info;
