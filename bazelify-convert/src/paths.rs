//! Path constants for generated files.
//!
//! File names and directories that are part of the output contract live
//! here so that the assembler, the aggregator and the shim generator agree.

/// Directory holding generated rule definitions, relative to the workspace root.
pub const RULES_SUBDIR: &str = "build/bazel/queryview_rules";

/// Workspace marker at the root.
pub const WORKSPACE_FILE: &str = "WORKSPACE";

/// Package marker for the root and the rules directory.
pub const PACKAGE_FILE: &str = "BUILD";

/// Per-directory build file.
pub const BUILD_FILE: &str = "BUILD.bazel";

/// Extension of rule definition files.
pub const BZL_EXTENSION: &str = "bzl";

/// Providers definition, overlay mode only.
pub const PROVIDERS_FILE: &str = "providers.bzl";

/// Aggregate module shim, overlay mode only.
pub const SOONG_MODULE_FILE: &str = "soong_module.bzl";

/// File name of the rule shim called `name`.
pub fn shim_file_name(name: &str) -> String {
    format!("{}.{}", name, BZL_EXTENSION)
}
