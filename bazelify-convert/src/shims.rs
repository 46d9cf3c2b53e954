//! Overlay-mode Starlark scaffolding: the providers file, the BUILD preamble
//! and the aggregate `soong_module.bzl` shim.

use crate::{
    paths::{RULES_SUBDIR, SOONG_MODULE_FILE, shim_file_name},
    starlark::quote,
    target::RuleShim,
};

/// Preamble of every overlay-mode BUILD file.
pub const SOONG_MODULE_LOAD: &str = r#"package(default_visibility = ["//visibility:public"])
load("//build/bazel/queryview_rules:soong_module.bzl", "soong_module")
"#;

/// Content of `providers.bzl`.
pub const PROVIDERS_BZL: &str = r#"SoongModuleInfo = provider(
    fields = {
        "name": "Name of module",
        "type": "Type of module",
        "variant": "Variant of module",
    },
)
"#;

const SOONG_MODULE_BZL_HEAD: &str = r#"load(":providers.bzl", "SoongModuleInfo")

def _generic_soong_module_impl(ctx):
    return [
        SoongModuleInfo(
            name = ctx.attr.module_name,
            type = ctx.attr.module_type,
            variant = ctx.attr.module_variant,
        ),
    ]

generic_soong_module = rule(
    implementation = _generic_soong_module_impl,
    attrs = {
        "module_name": attr.string(mandatory = True),
        "module_type": attr.string(mandatory = True),
        "module_variant": attr.string(),
        "module_deps": attr.label_list(providers = [SoongModuleInfo]),
    },
)
"#;

const SOONG_MODULE_BZL_TAIL: &str = r#"
_SUPPORTED_TYPES = ["bool", "int", "string"]

def _is_supported_type(value):
    if type(value) in _SUPPORTED_TYPES:
        return True
    elif type(value) == "list":
        supported = True
        for v in value:
            supported = supported and type(v) in _SUPPORTED_TYPES
        return supported
    else:
        return False

# Expands to the rule registered for module_type, or to generic_soong_module
# for module types without a rule shim.
def soong_module(name, module_type, **kwargs):
    soong_module_rule = soong_module_rule_map.get(module_type)

    if soong_module_rule == None:
        generic_soong_module(
            name = name,
            module_type = module_type,
            module_name = kwargs.pop("module_name", ""),
            module_variant = kwargs.pop("module_variant", ""),
            module_deps = kwargs.pop("module_deps", []),
        )
    else:
        supported_kwargs = dict()
        for key, value in kwargs.items():
            if _is_supported_type(value):
                supported_kwargs[key] = value
        soong_module_rule(
            name = name,
            **supported_kwargs
        )
"#;

/// Rule shims ordered by name.
pub(crate) fn sorted_shims(rule_shims: &[RuleShim]) -> Vec<&RuleShim> {
    let mut shims: Vec<&RuleShim> = rule_shims.iter().collect();
    shims.sort_by(|a, b| a.name.cmp(&b.name));
    shims
}

/// Render `soong_module.bzl`, loading every rule of every shim and mapping
/// each rule name to its rule.
///
/// Shims without rules are not loaded; Starlark rejects a `load` with no
/// symbols.
pub fn generate_soong_module_bzl(rule_shims: &[RuleShim]) -> String {
    let mut loads = String::new();
    let mut rule_map = String::new();

    for shim in sorted_shims(rule_shims) {
        if shim.rules.is_empty() {
            continue;
        }
        loads.push_str(&format!(
            "load({}",
            quote(&format!("//{}:{}", RULES_SUBDIR, shim_file_name(&shim.name)))
        ));
        for rule in &shim.rules {
            loads.push_str(&format!(", {}", quote(rule)));
            rule_map.push_str(&format!("    {}: {},\n", quote(rule), rule));
        }
        loads.push_str(")\n");
    }

    tracing::debug!(
        file = SOONG_MODULE_FILE,
        shims = rule_shims.len(),
        "generated aggregate module shim"
    );

    format!(
        "{loads}{SOONG_MODULE_BZL_HEAD}\nsoong_module_rule_map = {{\n{rule_map}}}\n{SOONG_MODULE_BZL_TAIL}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shim(name: &str, rules: &[&str]) -> RuleShim {
        RuleShim::new(
            name,
            rules.iter().map(|r| r.to_string()).collect(),
            format!("# {name}"),
        )
    }

    #[test]
    fn test_load_preamble_points_at_rules_dir() {
        assert!(SOONG_MODULE_LOAD.contains(&format!("//{}:{}", RULES_SUBDIR, SOONG_MODULE_FILE)));
    }

    #[test]
    fn test_loads_each_rule() {
        let bzl = generate_soong_module_bzl(&[shim("cc", &["cc_library", "cc_test_"])]);

        assert!(bzl.starts_with(
            "load(\"//build/bazel/queryview_rules:cc.bzl\", \"cc_library\", \"cc_test_\")\n"
        ));
        assert!(bzl.contains("    \"cc_library\": cc_library,\n"));
        assert!(bzl.contains("    \"cc_test_\": cc_test_,\n"));
    }

    #[test]
    fn test_shims_are_loaded_in_name_order() {
        let bzl = generate_soong_module_bzl(&[
            shim("java", &["java_library"]),
            shim("cc", &["cc_library"]),
        ]);

        let cc = bzl.find("cc.bzl").unwrap();
        let java = bzl.find("java.bzl").unwrap();
        assert!(cc < java);
    }

    #[test]
    fn test_shim_without_rules_is_not_loaded() {
        let bzl = generate_soong_module_bzl(&[shim("empty", &[])]);
        assert!(!bzl.contains("empty.bzl"));
        assert!(bzl.contains("soong_module_rule_map = {\n}\n"));
    }

    #[test]
    fn test_reserved_rule_names_are_globals() {
        let bzl = generate_soong_module_bzl(&[]);
        for name in bazelify_manifest::RESERVED_RULE_NAMES {
            assert!(
                bzl.contains(&format!("{name} = "))
                    || bzl.contains(&format!("def {name}("))
                    || bzl.contains(&format!("\"{name}\")")),
                "{name} is not defined by soong_module.bzl"
            );
        }
    }

    #[test]
    fn test_no_shims() {
        let bzl = generate_soong_module_bzl(&[]);
        assert!(bzl.starts_with("load(\":providers.bzl\", \"SoongModuleInfo\")"));
        assert!(bzl.contains("def soong_module(name, module_type, **kwargs):"));
    }
}
