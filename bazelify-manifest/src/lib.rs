//! bazelify.toml manifest parsing and validation.
//!
//! A manifest declares the modules to convert, any pre-rendered targets to
//! emit verbatim, the rule shims used by overlay mode, and output settings.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;
mod module;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    BazelifyToml, Manifest, OutputConfig, ParseContext, RESERVED_RULE_NAMES, parse_manifest,
};
pub use module::{ModuleDecl, PropertyValue, ShimDecl, TargetDecl};
