//! Check command report data structures.

use std::path::PathBuf;

use bazelify_core::ConversionMode;

use super::output::{Output, Report};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// What the manifest declares.
    pub summary: ManifestSummary,
}

/// Declaration counts of a manifest.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ManifestSummary {
    pub mode: ConversionMode,
    pub modules: usize,
    pub targets: usize,
    pub directories: usize,
    pub shims: usize,
}

fn count(n: usize, singular: &str, plural: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { plural })
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        let summary = &self.summary;
        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.preformatted(&format!("  {} mode", summary.mode));
        out.preformatted(&format!(
            "  {}, {} in {}",
            count(summary.modules, "module", "modules"),
            count(summary.targets, "pre-rendered target", "pre-rendered targets"),
            count(summary.directories, "directory", "directories"),
        ));
        if summary.shims > 0 {
            out.preformatted(&format!("  {}", count(summary.shims, "rule shim", "rule shims")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::testing::BufferOutput;

    #[test]
    fn test_render_summary() {
        let report = CheckReport {
            config_path: PathBuf::from("bazelify.toml"),
            warnings: Vec::new(),
            summary: ManifestSummary {
                mode: ConversionMode::Overlay,
                modules: 1,
                targets: 2,
                directories: 3,
                shims: 1,
            },
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert!(out.stderr.is_empty());
        assert_eq!(
            out.stdout,
            vec![
                "✓ bazelify.toml is valid",
                "",
                "  overlay mode",
                "  1 module, 2 pre-rendered targets in 3 directories",
                "  1 rule shim",
            ]
        );
    }

    #[test]
    fn test_render_warnings_and_single_directory() {
        let report = CheckReport {
            config_path: PathBuf::from("bazelify.toml"),
            warnings: vec!["duplicate".into()],
            summary: ManifestSummary {
                directories: 1,
                ..Default::default()
            },
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(out.stderr, vec!["warning: duplicate"]);
        assert_eq!(
            out.stdout[4],
            "  0 modules, 0 pre-rendered targets in 1 directory"
        );
    }
}
