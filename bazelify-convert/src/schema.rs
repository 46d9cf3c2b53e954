//! Declarative schema of module-definition fields.
//!
//! Each field of a module definition is described once, statically, by a
//! [`FieldSpec`]. Whether a field may be set from a source module definition
//! is decided from its `FieldSpec` alone.

use crate::properties::is_convertible;

/// Whether a field is part of the module definition's public surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVisibility {
    /// Settable in module definitions.
    Public,
    /// Internal bookkeeping, never written by users.
    Internal,
}

/// Who populates a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrigin {
    /// Set from the module definition.
    Source,
    /// Populated by a later graph-transformation phase.
    Mutated,
}

/// A single field of a module definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub visibility: FieldVisibility,
    pub origin: FieldOrigin,
}

impl FieldSpec {
    /// A public field set from module definitions.
    pub const fn source(name: &'static str) -> Self {
        Self {
            name,
            visibility: FieldVisibility::Public,
            origin: FieldOrigin::Source,
        }
    }

    /// A public field filled in by a transformation phase.
    pub const fn mutated(name: &'static str) -> Self {
        Self {
            name,
            visibility: FieldVisibility::Public,
            origin: FieldOrigin::Mutated,
        }
    }

    /// An internal field.
    pub const fn internal(name: &'static str) -> Self {
        Self {
            name,
            visibility: FieldVisibility::Internal,
            origin: FieldOrigin::Source,
        }
    }
}

/// Whether `field` can legally be set from a source module definition.
pub fn is_eligible_field(field: &FieldSpec) -> bool {
    field.visibility == FieldVisibility::Public && field.origin == FieldOrigin::Source
}

/// The fields of one module-definition type.
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    fields: &'static [FieldSpec],
}

impl FieldSchema {
    pub const fn new(fields: &'static [FieldSpec]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether a property called `name` may be set from a module definition.
    ///
    /// Names the schema does not know are specific to a module type and are
    /// admitted.
    pub fn admits(&self, name: &str) -> bool {
        self.field(name).is_none_or(is_eligible_field)
    }

    /// Fields that are both eligible and convertible to attributes.
    pub fn convertible_fields(&self) -> impl Iterator<Item = &'static FieldSpec> {
        self.fields
            .iter()
            .filter(|f| is_eligible_field(f) && is_convertible(f.name))
    }
}

/// Fields shared by every module type.
pub const COMMON_PROPERTIES: FieldSchema = FieldSchema::new(&[
    FieldSpec::source("name"),
    FieldSpec::source("enabled"),
    FieldSpec::source("arch"),
    FieldSpec::source("multilib"),
    FieldSpec::source("target"),
    FieldSpec::source("visibility"),
    FieldSpec::source("owner"),
    FieldSpec::source("vendor"),
    FieldSpec::source("proprietary"),
    FieldSpec::source("soc_specific"),
    FieldSpec::source("device_specific"),
    FieldSpec::source("product_specific"),
    FieldSpec::source("system_ext_specific"),
    FieldSpec::source("recovery"),
    FieldSpec::source("init_rc"),
    FieldSpec::source("vintf_fragments"),
    FieldSpec::source("licenses"),
    FieldSpec::source("required"),
    FieldSpec::source("host_required"),
    FieldSpec::source("target_required"),
    FieldSpec::source("native_bridge_supported"),
    FieldSpec::mutated("compile_os"),
    FieldSpec::mutated("compile_target"),
    FieldSpec::mutated("compile_multi_targets"),
    FieldSpec::mutated("compile_primary"),
    FieldSpec::mutated("arch_specific"),
    FieldSpec::mutated("use_target_variants"),
    FieldSpec::mutated("default_multilib"),
    FieldSpec::mutated("skip_install"),
    FieldSpec::mutated("namespace_exported_to_make"),
    FieldSpec::mutated("missing_deps"),
    FieldSpec::internal("image_variation"),
    FieldSpec::internal("debug_name"),
]);
