//! Manifest types and parsing for bazelify.toml files.

mod file;
mod parse;
mod validate;

use std::collections::{BTreeMap, BTreeSet};

use bazelify_core::ConversionMode;
use indexmap::IndexMap;
use serde::Deserialize;

pub use file::BazelifyToml;
pub use parse::parse_manifest;
pub use validate::{ParseContext, RESERVED_RULE_NAMES};

use crate::{ModuleDecl, ShimDecl, TargetDecl};

/// Root manifest for bazelify.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Modules to render into targets
    #[serde(default)]
    pub modules: Vec<ModuleDecl>,

    /// Pre-rendered targets, emitted verbatim
    #[serde(default)]
    pub targets: Vec<TargetDecl>,

    /// Rule shims for overlay mode, keyed by shim name
    #[serde(default)]
    pub shims: IndexMap<String, ShimDecl>,
}

/// The `[output]` section.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub mode: ConversionMode,
}

impl Manifest {
    /// Every directory that will receive a BUILD.bazel file, sorted.
    pub fn directories(&self) -> BTreeSet<&str> {
        self.modules
            .iter()
            .map(|m| m.directory.as_str())
            .chain(self.targets.iter().map(|t| t.directory.as_str()))
            .collect()
    }

    /// Total number of targets the manifest produces.
    pub fn target_count(&self) -> usize {
        self.modules.len() + self.targets.len()
    }

    /// Target names declared more than once within the same directory,
    /// as sorted `(directory, name)` pairs.
    ///
    /// Duplicates are not an error: both targets are emitted.
    pub fn duplicate_names(&self) -> Vec<(&str, &str)> {
        let mut seen: BTreeMap<(&str, &str), usize> = BTreeMap::new();
        let names = self
            .modules
            .iter()
            .map(|m| (m.directory.as_str(), m.name.as_str()))
            .chain(
                self.targets
                    .iter()
                    .map(|t| (t.directory.as_str(), t.name.as_str())),
            );
        for key in names {
            *seen.entry(key).or_default() += 1;
        }
        seen.into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(key, _)| key)
            .collect()
    }
}
