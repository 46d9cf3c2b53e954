//! Check operation - manifest validation.
//!
//! Structural errors are reported while parsing; this collects what remains
//! legal but suspicious.

use std::path::Path;

use bazelify_manifest::Manifest;

use crate::reports::{CheckReport, ManifestSummary};

/// Execute the check operation.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    CheckReport {
        config_path: config_path.to_path_buf(),
        warnings: duplicate_warnings(manifest),
        summary: summarize(manifest),
    }
}

pub(crate) fn summarize(manifest: &Manifest) -> ManifestSummary {
    ManifestSummary {
        mode: manifest.output.mode,
        modules: manifest.modules.len(),
        targets: manifest.targets.len(),
        directories: manifest.directories().len(),
        shims: manifest.shims.len(),
    }
}

/// One warning per target name declared more than once in a directory.
pub(crate) fn duplicate_warnings(manifest: &Manifest) -> Vec<String> {
    manifest
        .duplicate_names()
        .into_iter()
        .map(|(directory, name)| {
            tracing::warn!(%directory, %name, "duplicate target name");
            format!(
                "target '{}' is declared more than once in //{}",
                name, directory
            )
        })
        .collect()
}
