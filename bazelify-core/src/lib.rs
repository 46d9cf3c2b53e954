//! Core types for bazelify.
//!
//! This crate provides the [`BazelFile`] artifact produced by the
//! conversion crates, the [`ConversionMode`] shared by every layer, and the
//! writer that persists artifacts under an output root.

mod file;
mod mode;

pub use file::{BazelFile, WriteResult, write_all};
pub use mode::ConversionMode;
