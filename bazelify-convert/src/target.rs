//! Rendered targets and rule shims handed to the assembler.

use bazelify_manifest::{ShimDecl, TargetDecl};
use indexmap::IndexMap;

/// A rendered target destined for one directory's BUILD file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub content: String,
    pub directory: String,
}

impl Target {
    pub fn new(
        name: impl Into<String>,
        content: impl Into<String>,
        directory: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            directory: directory.into(),
        }
    }
}

impl From<&TargetDecl> for Target {
    fn from(decl: &TargetDecl) -> Self {
        Target::new(&decl.name, &decl.content, &decl.directory)
    }
}

/// A generated rule-definition fragment for overlay mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleShim {
    /// File stem of the fragment (`<name>.bzl`).
    pub name: String,
    /// Rule symbols the fragment defines.
    pub rules: Vec<String>,
    pub content: String,
}

impl RuleShim {
    pub fn new(name: impl Into<String>, rules: Vec<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules,
            content: content.into(),
        }
    }

    pub fn from_decl(name: &str, decl: &ShimDecl) -> Self {
        Self::new(name, decl.rules.clone(), &decl.content)
    }
}

/// Targets keyed by directory. Output never depends on the key order.
pub type DirectoryTargets = IndexMap<String, Vec<Target>>;

/// Group targets by their directory, keeping input order within each group.
pub fn group_by_directory(targets: impl IntoIterator<Item = Target>) -> DirectoryTargets {
    let mut grouped = DirectoryTargets::new();
    for target in targets {
        grouped
            .entry(target.directory.clone())
            .or_default()
            .push(target);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_directory() {
        let grouped = group_by_directory([
            Target::new("b", "b()", "pkg"),
            Target::new("x", "x()", "other"),
            Target::new("a", "a()", "pkg"),
        ]);

        assert_eq!(grouped.len(), 2);
        let names: Vec<&str> = grouped["pkg"].iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(grouped["other"][0].content, "x()");
    }

    #[test]
    fn test_group_empty() {
        assert!(group_by_directory(Vec::new()).is_empty());
    }

    #[test]
    fn test_from_target_decl() {
        let decl = TargetDecl {
            name: "raw".into(),
            directory: "pkg".into(),
            content: "filegroup(name = \"raw\")".into(),
        };
        let target = Target::from(&decl);
        assert_eq!(target, Target::new("raw", "filegroup(name = \"raw\")", "pkg"));
    }
}
