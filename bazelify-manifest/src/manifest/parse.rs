//! Manifest parsing from files and strings.

use std::{collections::HashMap, str::FromStr};

use super::{Manifest, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "bazelify.toml")
    }
}

impl Manifest {
    /// Parse a bazelify.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    for module in &manifest.modules {
        let module_ctx = ctx.push(&module.name);
        module_ctx.validate_target_name(&module.name, "module")?;
        module_ctx.validate_identifier(&module.module_type, "module type")?;
        module_ctx.validate_directory(&module.directory)?;
        module_ctx.validate_variant(&module.variant)?;
        for dep in &module.deps {
            module_ctx.validate_label(dep, &module.name)?;
        }
        for key in module.properties.keys() {
            module_ctx.push(key).validate_property_key(key)?;
        }
    }

    for target in &manifest.targets {
        let target_ctx = ctx.push(&target.name);
        target_ctx.validate_target_name(&target.name, "target")?;
        target_ctx.validate_directory(&target.directory)?;
    }

    // Every rule is loaded into the one soong_module.bzl namespace.
    let mut rule_owners: HashMap<&str, &str> = HashMap::new();
    for (name, shim) in &manifest.shims {
        let shim_ctx = ctx.push(name);
        shim_ctx.validate_shim_name(name)?;
        for rule in &shim.rules {
            shim_ctx.validate_rule(rule)?;
            if let Some(owner) = rule_owners.insert(rule.as_str(), name.as_str()) {
                return Err(shim_ctx.duplicate_rule_error(rule, owner));
            }
        }
    }
    Ok(())
}
