//! Which module properties can become target attributes.

use std::fmt;

/// Why a property name is never converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The target's identity is generated separately for every target.
    Identity,
    /// Collides with a reserved Starlark keyword.
    ReservedKeyword,
    /// Interface-typed property, not representable as a static attribute.
    InterfaceType,
    /// Collides with an attribute Bazel defines natively.
    BuiltinAttribute,
}

impl IgnoreReason {
    pub fn description(&self) -> &'static str {
        match self {
            IgnoreReason::Identity => "generated for every target",
            IgnoreReason::ReservedKeyword => "reserved keyword",
            IgnoreReason::InterfaceType => "interface-typed property",
            IgnoreReason::BuiltinAttribute => "built-in Bazel attribute",
        }
    }
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Property names that are never emitted as attributes.
pub const IGNORED_PROPERTIES: &[(&str, IgnoreReason)] = &[
    ("name", IgnoreReason::Identity),
    ("from", IgnoreReason::ReservedKeyword),
    ("in", IgnoreReason::ReservedKeyword),
    ("arch", IgnoreReason::InterfaceType),
    ("multilib", IgnoreReason::InterfaceType),
    ("target", IgnoreReason::InterfaceType),
    // TODO: map to Bazel's own visibility once package groups are generated
    ("visibility", IgnoreReason::BuiltinAttribute),
    ("features", IgnoreReason::BuiltinAttribute),
];

/// Why `property` is never converted, or `None` if it may be.
pub fn ignore_reason(property: &str) -> Option<IgnoreReason> {
    IGNORED_PROPERTIES
        .iter()
        .find(|(name, _)| *name == property)
        .map(|(_, reason)| *reason)
}

/// Whether `property` may be converted into a target attribute.
pub fn is_convertible(property: &str) -> bool {
    ignore_reason(property).is_none()
}
