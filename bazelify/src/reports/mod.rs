//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod bake;
mod check;
mod info;
mod output;

pub use bake::{BakeReport, BakeResult, PreviewResult, WrittenResult};
pub use check::{CheckReport, ManifestSummary};
pub use info::{DroppedProperty, InfoReport, ModuleTypeCount};
pub use output::{Report, TerminalOutput};
