//! Declarations that make up a bazelify.toml manifest.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

/// A module from the source build graph.
///
/// Modules are rendered into Bazel targets by the converter; property values
/// are translated into Starlark literals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleDecl {
    /// Module name, used as the target name.
    pub name: String,

    /// Module type (e.g. `cc_library`).
    #[serde(rename = "type")]
    pub module_type: String,

    /// Directory of the module relative to the workspace root.
    #[serde(default)]
    pub directory: String,

    /// Build variant, only meaningful in overlay mode.
    #[serde(default)]
    pub variant: String,

    /// Dependency labels.
    #[serde(default)]
    pub deps: Vec<String>,

    /// Module properties, in declaration order.
    #[serde(default)]
    pub properties: IndexMap<String, PropertyValue>,
}

/// A target rendered by some other tool, emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetDecl {
    pub name: String,
    #[serde(default)]
    pub directory: String,
    pub content: String,
}

/// A rule-definition fragment loaded by overlay-mode BUILD files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShimDecl {
    /// Rule symbols defined by this fragment.
    #[serde(default)]
    pub rules: Vec<String>,
    /// Starlark source of the fragment.
    pub content: String,
}

/// Value of a module property.
///
/// Only scalars and (possibly nested) lists of scalars can be expressed as
/// static attributes; tables are rejected at parse time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Bool(bool),
    Int(i64),
    String(String),
    List(Vec<PropertyValue>),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Bool(b) => write!(f, "{}", b),
            PropertyValue::Int(i) => write!(f, "{}", i),
            PropertyValue::String(s) => write!(f, "{:?}", s),
            PropertyValue::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}
