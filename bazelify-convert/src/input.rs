//! Lowering of a manifest into assembler input.

use bazelify_core::{BazelFile, ConversionMode};
use bazelify_manifest::Manifest;

use crate::{
    assemble::assemble,
    render::render_module,
    target::{DirectoryTargets, RuleShim, Target, group_by_directory},
};

/// Everything the assembler needs: rendered targets by directory, rule shims
/// and the output mode.
#[derive(Debug, Clone)]
pub struct ConversionInput {
    pub mode: ConversionMode,
    pub directory_targets: DirectoryTargets,
    pub rule_shims: Vec<RuleShim>,
}

impl ConversionInput {
    /// Render the manifest's modules and collect its pre-rendered targets
    /// and shims. Modules come before pre-rendered targets in each directory
    /// group; the assembler sorts them anyway.
    pub fn from_manifest(manifest: &Manifest, mode: ConversionMode) -> Self {
        let targets = manifest
            .modules
            .iter()
            .map(|module| render_module(module, mode))
            .chain(manifest.targets.iter().map(Target::from));

        let rule_shims = manifest
            .shims
            .iter()
            .map(|(name, decl)| RuleShim::from_decl(name, decl))
            .collect();

        Self {
            mode,
            directory_targets: group_by_directory(targets),
            rule_shims,
        }
    }

    /// Number of targets across all directories.
    pub fn target_count(&self) -> usize {
        self.directory_targets.values().map(Vec::len).sum()
    }

    /// Assemble the complete artifact list.
    pub fn assemble(&self) -> Vec<BazelFile> {
        assemble(&self.rule_shims, &self.directory_targets, self.mode)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    const MANIFEST: &str = r##"
        [[modules]]
        name = "libfoo"
        type = "cc_library"
        directory = "pkg"

        [[targets]]
        name = "data"
        directory = "pkg"
        content = 'filegroup(name = "data")'

        [[targets]]
        name = "root"
        content = 'filegroup(name = "root")'

        [shims.cc]
        rules = ["cc_library"]
        content = "# cc"
    "##;

    #[test]
    fn test_from_manifest_groups_targets() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let input = ConversionInput::from_manifest(&manifest, ConversionMode::Native);

        assert_eq!(input.target_count(), 3);
        assert_eq!(input.directory_targets["pkg"].len(), 2);
        assert_eq!(input.directory_targets[""][0].name, "root");
        assert_eq!(input.rule_shims.len(), 1);
        assert_eq!(input.rule_shims[0].name, "cc");
    }

    #[test]
    fn test_assemble_native() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let files = ConversionInput::from_manifest(&manifest, ConversionMode::Native).assemble();

        // 3 scaffolding files plus BUILD.bazel for "" and "pkg"
        assert_eq!(files.len(), 5);
        assert_eq!(files[3].dir(), "");
        assert_eq!(
            files[4].contents(),
            "\n\nfilegroup(name = \"data\")\n\ncc_library(\n    name = \"libfoo\",\n)"
        );
    }

    #[test]
    fn test_assemble_overlay() {
        let manifest = Manifest::from_str(MANIFEST).unwrap();
        let files = ConversionInput::from_manifest(&manifest, ConversionMode::Overlay).assemble();

        // 3 scaffolding + providers + cc.bzl + soong_module.bzl + 2 BUILD.bazel
        assert_eq!(files.len(), 8);
        assert!(files[7].contents().contains("soong_module(\n    name = \"libfoo\","));
    }
}
