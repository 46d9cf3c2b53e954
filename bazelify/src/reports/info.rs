//! Info command report data structures.

use std::path::PathBuf;

use super::{
    check::ManifestSummary,
    output::{Output, Report},
};

/// Report data from project info.
#[derive(Debug)]
pub struct InfoReport {
    /// Config file path.
    pub config_path: PathBuf,
    /// Declaration counts.
    pub summary: ManifestSummary,
    /// Number of files `bake` would produce.
    pub files: usize,
    /// Module types in use, sorted by type.
    pub module_types: Vec<ModuleTypeCount>,
    /// Module properties left out of the generated targets.
    pub dropped: Vec<DroppedProperty>,
}

/// How often a module type occurs and the rule it is rendered as.
#[derive(Debug, PartialEq, Eq)]
pub struct ModuleTypeCount {
    pub module_type: String,
    pub rule: String,
    pub count: usize,
}

/// A property that will not appear in the output.
#[derive(Debug, PartialEq, Eq)]
pub struct DroppedProperty {
    pub module: String,
    pub property: String,
    /// The declared value, as written in the manifest.
    pub value: String,
    pub reason: String,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        out.newline();
        out.key_value_indented("Config", &self.config_path.display().to_string());
        out.key_value_indented("Mode", self.summary.mode.as_str());
        out.newline();

        out.preformatted("  Statistics");
        out.preformatted("  ──────────");
        out.key_value_indented("Modules", &self.summary.modules.to_string());
        out.key_value_indented("Targets", &self.summary.targets.to_string());
        out.key_value_indented("Directories", &self.summary.directories.to_string());
        out.key_value_indented("Shims", &self.summary.shims.to_string());
        out.key_value_indented("Files", &self.files.to_string());
        out.newline();

        if !self.module_types.is_empty() {
            out.preformatted("  Module types");
            out.preformatted("  ────────────");
            for ty in &self.module_types {
                let rule = if ty.rule == ty.module_type {
                    String::new()
                } else {
                    format!(" as {}", ty.rule)
                };
                out.key_value_indented(&ty.module_type, &format!("{}{}", ty.count, rule));
            }
            out.newline();
        }

        if !self.dropped.is_empty() {
            out.section("Dropped properties");
            for dropped in &self.dropped {
                out.list_item(&format!(
                    "{}.{} = {} ({})",
                    dropped.module, dropped.property, dropped.value, dropped.reason
                ));
            }
        }
    }
}
