//! Conversion of a module graph into Bazel workspace files.
//!
//! The entry point is [`assemble`], which turns rendered targets and rule
//! shims into the complete, deterministically ordered list of
//! [`BazelFile`](bazelify_core::BazelFile) artifacts. Everything in this
//! crate is pure: no I/O, no shared mutable state.
//!
//! # Module Organization
//!
//! - [`properties`] - Which module properties may become attributes
//! - [`schema`] - Declarative schema of module-definition fields
//! - [`naming`] - Module type renaming for Bazel's test-rule semantics
//! - [`aggregate`] - Per-directory BUILD file serialization
//! - [`assemble`](mod@assemble) - Composition of the complete artifact list
//! - [`shims`] - Overlay-mode providers and aggregate module shim
//! - [`render`] - Rendering of module declarations into targets
//! - [`starlark`] - Starlark source building

pub mod aggregate;
pub mod assemble;
pub mod input;
pub mod naming;
pub mod paths;
pub mod properties;
pub mod render;
pub mod schema;
pub mod shims;
pub mod starlark;
pub mod target;

pub use aggregate::build_directory_files;
pub use assemble::assemble;
pub use input::ConversionInput;
pub use naming::canonicalize_module_type;
pub use properties::{IgnoreReason, ignore_reason, is_convertible};
pub use render::{DropReason, drop_reason, render_module};
pub use schema::{COMMON_PROPERTIES, FieldSchema, FieldSpec, is_eligible_field};
pub use target::{DirectoryTargets, RuleShim, Target, group_by_directory};
