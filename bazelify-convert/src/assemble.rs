//! Composition of the complete artifact list.

use bazelify_core::{BazelFile, ConversionMode};

use crate::{
    aggregate::build_directory_files,
    paths::{
        PACKAGE_FILE, PROVIDERS_FILE, RULES_SUBDIR, SOONG_MODULE_FILE, WORKSPACE_FILE,
        shim_file_name,
    },
    shims::{PROVIDERS_BZL, generate_soong_module_bzl, sorted_shims},
    target::{DirectoryTargets, RuleShim},
};

/// Scaffolding files emitted besides shims and BUILD files: the workspace
/// marker, two package markers, providers and the aggregate shim.
const ADDITIONAL_FILES: usize = 5;

/// Assemble every file of the generated workspace.
///
/// The list always starts with the empty `WORKSPACE`, the root `BUILD` and
/// the rules directory `BUILD`. Overlay mode then adds `providers.bzl`, one
/// `<shim>.bzl` per rule shim in name order, and `soong_module.bzl`. The
/// per-directory BUILD files come last.
///
/// Nothing is written; the caller persists the result.
pub fn assemble(
    rule_shims: &[RuleShim],
    directory_targets: &DirectoryTargets,
    mode: ConversionMode,
) -> Vec<BazelFile> {
    let mut files =
        Vec::with_capacity(rule_shims.len() + directory_targets.len() + ADDITIONAL_FILES);

    files.push(BazelFile::new("", WORKSPACE_FILE, ""));
    files.push(BazelFile::new("", PACKAGE_FILE, ""));
    files.push(BazelFile::new(RULES_SUBDIR, PACKAGE_FILE, ""));

    if mode.is_overlay() {
        files.push(BazelFile::new(RULES_SUBDIR, PROVIDERS_FILE, PROVIDERS_BZL));
        for shim in sorted_shims(rule_shims) {
            files.push(BazelFile::new(
                RULES_SUBDIR,
                shim_file_name(&shim.name),
                shim.content.as_str(),
            ));
        }
        files.push(BazelFile::new(
            RULES_SUBDIR,
            SOONG_MODULE_FILE,
            generate_soong_module_bzl(rule_shims),
        ));
    }

    files.extend(build_directory_files(directory_targets, mode));

    tracing::debug!(
        %mode,
        files = files.len(),
        directories = directory_targets.len(),
        "assembled workspace"
    );
    files
}
