//! Bake command report data structures.

use std::path::PathBuf;

use bazelify_core::{BazelFile, ConversionMode};

use super::output::{Output, Report};

/// Report data from generation.
#[derive(Debug)]
pub struct BakeReport {
    /// Mode the workspace was generated in.
    pub mode: ConversionMode,
    /// Warning messages, e.g. duplicate target names.
    pub warnings: Vec<String>,
    /// Number of targets across all BUILD files.
    pub target_count: usize,
    /// Generation result (files written or preview).
    pub result: BakeResult,
}

/// Result of generation.
#[derive(Debug)]
pub enum BakeResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output root.
    pub output_dir: PathBuf,
    /// Files whose content changed, relative to the output root.
    pub written: Vec<String>,
    /// Number of files left untouched.
    pub unchanged: usize,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<BazelFile>,
}

impl Report for BakeReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        match &self.result {
            BakeResult::Written(written) => self.render_written(out, written),
            BakeResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl BakeReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!(
            "Generated {} targets ({} mode) into {}",
            self.target_count,
            self.mode,
            written.output_dir.display()
        ));

        if !written.written.is_empty() {
            out.newline();
            out.section("Written");
            for path in &written.written {
                out.added_item(path);
            }
        }

        if written.unchanged > 0 {
            out.newline();
            out.preformatted(&format!("{} files unchanged", written.unchanged));
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.relative_path().display().to_string());
            out.preformatted(file.contents());
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated ({} mode)",
            preview.files.len(),
            self.mode
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::BufferOutput;

    #[test]
    fn test_written_lists_changed_files() {
        let report = BakeReport {
            mode: ConversionMode::Native,
            warnings: vec!["target 'foo' is declared twice".into()],
            target_count: 2,
            result: BakeResult::Written(WrittenResult {
                output_dir: PathBuf::from("out"),
                written: vec!["pkg/BUILD.bazel".into()],
                unchanged: 3,
            }),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.stderr, vec!["warning: target 'foo' is declared twice"]);
        assert_eq!(out.stdout[0], "Generated 2 targets (native mode) into out");
        assert!(out.stdout.contains(&"  + pkg/BUILD.bazel".to_string()));
        assert_eq!(out.stdout.last().unwrap(), "3 files unchanged");
    }

    #[test]
    fn test_preview_shows_each_file() {
        let report = BakeReport {
            mode: ConversionMode::Overlay,
            warnings: Vec::new(),
            target_count: 0,
            result: BakeResult::Preview(PreviewResult {
                files: vec![
                    BazelFile::new("", "WORKSPACE", ""),
                    BazelFile::new("pkg", "BUILD.bazel", "# pkg"),
                ],
            }),
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.stdout[0], "── WORKSPACE ──");
        assert_eq!(out.stdout[2], "── pkg/BUILD.bazel ──");
        assert_eq!(out.stdout[3], "# pkg");
        assert_eq!(
            out.stdout.last().unwrap(),
            "2 files would be generated (overlay mode)"
        );
    }
}
