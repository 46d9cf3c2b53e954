//! Info operation - conversion overview.

use std::{collections::BTreeMap, path::Path};

use bazelify_convert::{ConversionInput, canonicalize_module_type, drop_reason};
use bazelify_manifest::Manifest;

use super::check::summarize;
use crate::reports::{DroppedProperty, InfoReport, ModuleTypeCount};

/// Execute the info operation.
///
/// Collects what a `bake` of the manifest would produce.
pub fn info(manifest: &Manifest, config_path: &Path) -> InfoReport {
    let mode = manifest.output.mode;
    let files = ConversionInput::from_manifest(manifest, mode)
        .assemble()
        .len();

    InfoReport {
        config_path: std::fs::canonicalize(config_path)
            .unwrap_or_else(|_| config_path.to_path_buf()),
        summary: summarize(manifest),
        files,
        module_types: collect_module_types(manifest),
        dropped: collect_dropped(manifest),
    }
}

fn collect_module_types(manifest: &Manifest) -> Vec<ModuleTypeCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for module in &manifest.modules {
        *counts.entry(module.module_type.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(module_type, count)| ModuleTypeCount {
            module_type: module_type.to_string(),
            rule: canonicalize_module_type(module_type),
            count,
        })
        .collect()
}

fn collect_dropped(manifest: &Manifest) -> Vec<DroppedProperty> {
    let mode = manifest.output.mode;
    manifest
        .modules
        .iter()
        .flat_map(|module| {
            module.properties.iter().filter_map(move |(property, value)| {
                drop_reason(property, mode).map(|reason| DroppedProperty {
                    module: module.name.clone(),
                    property: property.clone(),
                    value: value.to_string(),
                    reason: reason.to_string(),
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_info_collects_types_and_dropped_properties() {
        let manifest = Manifest::from_str(
            r##"
            [output]
            mode = "overlay"

            [[modules]]
            name = "foo_test"
            type = "cc_test"
            directory = "pkg"
            [modules.properties]
            srcs = ["foo_test.cc"]
            arch = "arm64"
            compile_os = "android"

            [[modules]]
            name = "libfoo"
            type = "cc_library"
            directory = "pkg"

            [shims.cc]
            rules = ["cc_library"]
            content = "# cc"
            "##,
        )
        .unwrap();

        let report = info(&manifest, Path::new("bazelify.toml"));

        // 3 scaffolding + providers + cc.bzl + soong_module.bzl + pkg/BUILD.bazel
        assert_eq!(report.files, 7);
        assert_eq!(report.summary.modules, 2);
        assert_eq!(
            report.module_types,
            vec![
                ModuleTypeCount {
                    module_type: "cc_library".into(),
                    rule: "cc_library".into(),
                    count: 1,
                },
                ModuleTypeCount {
                    module_type: "cc_test".into(),
                    rule: "cc_test_".into(),
                    count: 1,
                },
            ]
        );

        let dropped: Vec<&str> = report.dropped.iter().map(|d| d.property.as_str()).collect();
        assert_eq!(dropped, vec!["arch", "compile_os"]);
        assert!(report.dropped.iter().all(|d| d.module == "foo_test"));
        assert_eq!(report.dropped[0].value, "\"arm64\"");
    }
}
