//! Bake operation - workspace generation from manifest.

use std::path::Path;

use bazelify_convert::ConversionInput;
use bazelify_core::{ConversionMode, WriteResult, write_all};
use bazelify_manifest::Manifest;
use eyre::{Context, Result};

use super::check::duplicate_warnings;
use crate::reports::{BakeReport, BakeResult, PreviewResult, WrittenResult};

/// Options for the bake operation.
pub struct BakeOptions<'a> {
    /// Output root for generated files.
    pub output_dir: &'a Path,
    /// Conversion mode, already resolved against the manifest.
    pub mode: ConversionMode,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the bake operation.
///
/// Renders the manifest, assembles the workspace and either writes it under
/// the output root or returns it as a preview.
pub fn bake(manifest: &Manifest, opts: BakeOptions) -> Result<BakeReport> {
    let warnings = duplicate_warnings(manifest);

    let input = ConversionInput::from_manifest(manifest, opts.mode);
    let files = input.assemble();

    let result = if opts.dry_run {
        BakeResult::Preview(PreviewResult { files })
    } else {
        let results = write_all(&files, opts.output_dir).wrap_err_with(|| {
            format!(
                "failed to write workspace to '{}'",
                opts.output_dir.display()
            )
        })?;

        let written: Vec<String> = files
            .iter()
            .zip(&results)
            .filter(|(_, result)| **result == WriteResult::Written)
            .map(|(file, _)| file.relative_path().display().to_string())
            .collect();
        let unchanged = results.len() - written.len();

        tracing::debug!(written = written.len(), unchanged, "wrote workspace");

        BakeResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written,
            unchanged,
        })
    };

    Ok(BakeReport {
        mode: opts.mode,
        warnings,
        target_count: input.target_count(),
        result,
    })
}
