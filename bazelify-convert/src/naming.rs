//! Module type names as seen by Bazel.

/// Suffix Bazel reserves for test rules.
///
/// Bazel marks rules ending in `_test` as test rules and requires everything
/// depending on them to be `testonly`. The source module graph has no such
/// constraint, so these types are renamed.
pub const TEST_RULE_SUFFIX: &str = "_test";

/// Rename a module type so that Bazel does not treat it as a test rule.
///
/// `foo_test` becomes `foo_test_`; every other name is returned unchanged.
pub fn canonicalize_module_type(module_type: &str) -> String {
    if module_type.ends_with(TEST_RULE_SUFFIX) {
        format!("{}_", module_type)
    } else {
        module_type.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_suffix_is_renamed() {
        assert_eq!(canonicalize_module_type("foo_test"), "foo_test_");
        assert_eq!(canonicalize_module_type("cc_test"), "cc_test_");
    }

    #[test]
    fn test_other_names_unchanged() {
        assert_eq!(canonicalize_module_type("foo_library"), "foo_library");
        assert_eq!(canonicalize_module_type("cc_test_host_config"), "cc_test_host_config");
        assert_eq!(canonicalize_module_type("test"), "test");
        assert_eq!(canonicalize_module_type(""), "");
    }

    #[test]
    fn test_rename_is_applied_once() {
        // Already canonical names do not end with the suffix anymore
        let once = canonicalize_module_type("java_test");
        assert_eq!(canonicalize_module_type(&once), once);
    }

    #[test]
    fn test_bare_suffix() {
        assert_eq!(canonicalize_module_type("_test"), "_test_");
    }
}
