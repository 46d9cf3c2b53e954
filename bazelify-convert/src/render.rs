//! Rendering of module declarations into Bazel targets.

use std::fmt;

use bazelify_core::ConversionMode;
use bazelify_manifest::{ModuleDecl, PropertyValue};

use crate::{
    naming::canonicalize_module_type,
    properties::{IgnoreReason, ignore_reason},
    schema::COMMON_PROPERTIES,
    starlark::StarlarkBuilder,
    target::Target,
};

/// Attributes written by the renderer itself in overlay mode.
const OVERLAY_ATTRIBUTES: &[&str] = &[
    "module_name",
    "module_type",
    "module_variant",
    "module_deps",
];

/// Attributes written by the renderer itself in native mode.
const NATIVE_ATTRIBUTES: &[&str] = &["deps"];

/// Why a module property is left out of the rendered target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    /// Denied by the property filter.
    Ignored(IgnoreReason),
    /// Internal or populated by a transformation phase.
    NotSettable,
    /// Clashes with an attribute the renderer generates.
    Generated,
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropReason::Ignored(reason) => write!(f, "{}", reason),
            DropReason::NotSettable => f.write_str("not settable from module definitions"),
            DropReason::Generated => f.write_str("generated attribute"),
        }
    }
}

/// Why `property` is dropped in `mode`, or `None` if it is rendered.
pub fn drop_reason(property: &str, mode: ConversionMode) -> Option<DropReason> {
    if let Some(reason) = ignore_reason(property) {
        return Some(DropReason::Ignored(reason));
    }
    if !COMMON_PROPERTIES.admits(property) {
        return Some(DropReason::NotSettable);
    }
    let generated = match mode {
        ConversionMode::Overlay => OVERLAY_ATTRIBUTES,
        ConversionMode::Native => NATIVE_ATTRIBUTES,
    };
    generated
        .contains(&property)
        .then_some(DropReason::Generated)
}

/// Name of the target rendered for `module`.
///
/// Overlay targets carry the variant (`libfoo__android_arm64`) so that
/// several variants of one module can live in the same package.
pub fn target_name(module: &ModuleDecl, mode: ConversionMode) -> String {
    if mode.is_overlay() && !module.variant.is_empty() {
        format!("{}__{}", module.name, module.variant)
    } else {
        module.name.clone()
    }
}

/// Render a module into a target.
///
/// Properties are emitted sorted by name; those with a [`drop_reason`] are
/// skipped.
pub fn render_module(module: &ModuleDecl, mode: ConversionMode) -> Target {
    let module_type = canonicalize_module_type(&module.module_type);
    let name = target_name(module, mode);

    let mut builder = StarlarkBuilder::new();
    match mode {
        ConversionMode::Overlay => {
            builder
                .push_line("soong_module(")
                .push_indent()
                .push_string_attr("name", &name)
                .push_string_attr("module_name", &module.name)
                .push_string_attr("module_type", &module_type)
                .push_string_attr("module_variant", &module.variant)
                .push_string_list_attr("module_deps", &module.deps);
        }
        ConversionMode::Native => {
            builder
                .push_line(&format!("{}(", module_type))
                .push_indent()
                .push_string_attr("name", &name);
            if !module.deps.is_empty() {
                builder.push_string_list_attr("deps", &module.deps);
            }
        }
    }

    for (property, value) in rendered_properties(module, mode) {
        builder.push_attr(property, value);
    }
    builder.push_dedent().push_line(")");

    tracing::debug!(
        module = %module.name,
        module_type = %module_type,
        directory = %module.directory,
        "rendered module"
    );

    Target::new(name, builder.build().trim_end(), &module.directory)
}

fn rendered_properties(module: &ModuleDecl, mode: ConversionMode) -> Vec<(&str, &PropertyValue)> {
    let mut properties: Vec<(&str, &PropertyValue)> = module
        .properties
        .iter()
        .filter(|(property, _)| match drop_reason(property, mode) {
            Some(reason) => {
                tracing::debug!(
                    module = %module.name,
                    property = %property,
                    %reason,
                    "dropped property"
                );
                false
            }
            None => true,
        })
        .map(|(property, value)| (property.as_str(), value))
        .collect();
    properties.sort_by(|a, b| a.0.cmp(b.0));
    properties
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use super::*;

    fn module(name: &str, module_type: &str) -> ModuleDecl {
        ModuleDecl {
            name: name.into(),
            module_type: module_type.into(),
            directory: "pkg/foo".into(),
            variant: String::new(),
            deps: Vec::new(),
            properties: IndexMap::new(),
        }
    }

    #[test]
    fn test_native_minimal() {
        let target = render_module(&module("libfoo", "cc_library"), ConversionMode::Native);

        assert_eq!(target.name, "libfoo");
        assert_eq!(target.directory, "pkg/foo");
        assert_eq!(target.content, "cc_library(\n    name = \"libfoo\",\n)");
    }

    #[test]
    fn test_native_canonicalizes_test_types() {
        let target = render_module(&module("foo_test", "cc_test"), ConversionMode::Native);
        assert!(target.content.starts_with("cc_test_(\n"));
    }

    #[test]
    fn test_native_properties_sorted_and_filtered() {
        let mut m = module("libfoo", "cc_library");
        m.deps = vec!["//pkg/bar:libbar".into()];
        m.properties
            .insert("srcs".into(), PropertyValue::List(vec![PropertyValue::String("foo.cc".into())]));
        m.properties
            .insert("name".into(), PropertyValue::String("ignored".into()));
        m.properties
            .insert("compile_os".into(), PropertyValue::String("linux".into()));
        m.properties.insert("enabled".into(), PropertyValue::Bool(true));
        m.properties.insert("deps".into(), PropertyValue::List(vec![]));

        let target = render_module(&m, ConversionMode::Native);

        assert_eq!(
            target.content,
            "cc_library(\n    name = \"libfoo\",\n    deps = [\n        \"//pkg/bar:libbar\",\n    ],\n    enabled = True,\n    srcs = [\n        \"foo.cc\",\n    ],\n)"
        );
    }

    #[test]
    fn test_overlay_target() {
        let mut m = module("foo_test", "cc_test");
        m.variant = "android_arm64".into();
        m.properties.insert("stl".into(), PropertyValue::String("none".into()));
        m.properties
            .insert("module_type".into(), PropertyValue::String("x".into()));

        let target = render_module(&m, ConversionMode::Overlay);

        assert_eq!(target.name, "foo_test__android_arm64");
        assert_eq!(
            target.content,
            "soong_module(\n    name = \"foo_test__android_arm64\",\n    module_name = \"foo_test\",\n    module_type = \"cc_test_\",\n    module_variant = \"android_arm64\",\n    module_deps = [],\n    stl = \"none\",\n)"
        );
    }

    #[test]
    fn test_target_name_without_variant() {
        let m = module("libfoo", "cc_library");
        assert_eq!(target_name(&m, ConversionMode::Overlay), "libfoo");
        assert_eq!(target_name(&m, ConversionMode::Native), "libfoo");
    }

    #[test]
    fn test_drop_reasons() {
        assert_eq!(
            drop_reason("visibility", ConversionMode::Native),
            Some(DropReason::Ignored(IgnoreReason::BuiltinAttribute))
        );
        assert_eq!(
            drop_reason("skip_install", ConversionMode::Native),
            Some(DropReason::NotSettable)
        );
        assert_eq!(
            drop_reason("deps", ConversionMode::Native),
            Some(DropReason::Generated)
        );
        assert_eq!(drop_reason("deps", ConversionMode::Overlay), None);
        assert_eq!(
            drop_reason("module_deps", ConversionMode::Overlay),
            Some(DropReason::Generated)
        );
        assert_eq!(drop_reason("srcs", ConversionMode::Native), None);
    }
}
