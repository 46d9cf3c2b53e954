//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Error, Result, error::SourceContext};

/// Shim names whose `.bzl` file would collide with a generated one.
const RESERVED_SHIM_NAMES: &[&str] = &["providers", "soong_module"];

/// Globals of the generated `soong_module.bzl`. A loaded rule with one of
/// these names would be rebound.
pub const RESERVED_RULE_NAMES: &[&str] = &[
    "SoongModuleInfo",
    "_generic_soong_module_impl",
    "generic_soong_module",
    "soong_module_rule_map",
    "_SUPPORTED_TYPES",
    "_is_supported_type",
    "soong_module",
];

/// Parsing and validation context that carries source information.
///
/// Carries the source content and the path of the declaration being
/// validated (e.g. `["libfoo"]`), so nested checks can describe where a
/// problem is.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get a context description for error messages.
    ///
    /// For example: "rule in 'cc'" or just "module" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.len() <= 1 {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path[..self.path.len() - 1].join("."))
        }
    }

    /// Validate a Bazel target name.
    pub fn validate_target_name(&self, name: &str, kind: &str) -> Result<()> {
        match target_name_error(name) {
            Some(reason) => Err(self.source.invalid_name_error(
                name,
                self.context_for(kind),
                reason,
                find_value_span(self.source.src(), "name", name),
            )),
            None => Ok(()),
        }
    }

    /// Validate a Starlark identifier (module types, shim and rule names).
    pub fn validate_identifier(&self, name: &str, kind: &str) -> Result<()> {
        match identifier_error(name) {
            Some(reason) => Err(self.source.invalid_name_error(
                name,
                kind,
                reason,
                find_quoted_span(self.source.src(), name)
                    .or_else(|| find_table_span(self.source.src(), "shims", name)),
            )),
            None => Ok(()),
        }
    }

    /// Validate a shim name.
    pub fn validate_shim_name(&self, name: &str) -> Result<()> {
        self.validate_identifier(name, "shim")?;
        if RESERVED_SHIM_NAMES.contains(&name) {
            return Err(self.source.invalid_name_error(
                name,
                "shim",
                "name is reserved for a generated file",
                find_table_span(self.source.src(), "shims", name),
            ));
        }
        Ok(())
    }

    /// Validate a rule symbol exported by a shim.
    pub fn validate_rule(&self, rule: &str) -> Result<()> {
        self.validate_identifier(rule, "rule")?;
        if RESERVED_RULE_NAMES.contains(&rule) {
            return Err(self.source.invalid_name_error(
                rule,
                "rule",
                "name is defined by the generated soong_module.bzl",
                find_quoted_span(self.source.src(), rule),
            ));
        }
        Ok(())
    }

    /// Error for `rule` when shim `owner` already exports it.
    pub fn duplicate_rule_error(&self, rule: &str, owner: &str) -> Box<Error> {
        self.source.invalid_name_error(
            rule,
            "rule",
            format!("rule is already exported by shim '{}'", owner),
            find_last_quoted_span(self.source.src(), rule),
        )
    }

    /// Validate a property key; it becomes a Starlark keyword argument.
    pub fn validate_property_key(&self, key: &str) -> Result<()> {
        match identifier_error(key) {
            Some(reason) => Err(self.source.invalid_name_error(
                key,
                self.context_for("property"),
                reason,
                find_key_span(self.source.src(), key),
            )),
            None => Ok(()),
        }
    }

    /// Validate a module variant. Overlay mode appends it to the target
    /// name, so it follows target-name rules; empty means no variant.
    pub fn validate_variant(&self, variant: &str) -> Result<()> {
        if variant.is_empty() {
            return Ok(());
        }
        match target_name_error(variant) {
            Some(reason) => Err(self.source.invalid_name_error(
                variant,
                self.context_for("variant"),
                reason,
                find_value_span(self.source.src(), "variant", variant),
            )),
            None => Ok(()),
        }
    }

    /// Validate a directory relative to the workspace root.
    pub fn validate_directory(&self, directory: &str) -> Result<()> {
        match directory_error(directory) {
            Some(reason) => Err(self.source.invalid_directory_error(
                directory,
                reason,
                find_value_span(self.source.src(), "directory", directory),
            )),
            None => Ok(()),
        }
    }

    /// Validate a dependency label of `module`.
    pub fn validate_label(&self, label: &str, module: &str) -> Result<()> {
        if is_valid_label(label) {
            Ok(())
        } else {
            Err(self.source.invalid_label_error(
                label,
                module,
                find_quoted_span(self.source.src(), label),
            ))
        }
    }
}

/// Find the span of `value` in a `key = "value"` assignment.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("{} = \"{}\"", key, value),
        format!("{} = '{}'", key, value),
    ];

    for pattern in &patterns {
        if let Some(pos) = src.find(pattern.as_str()) {
            // Skip `key = "`
            let start = pos + key.len() + 4;
            return Some(SourceSpan::from((start, value.len())));
        }
    }
    None
}

/// Find the span of the first quoted occurrence of `value`.
pub(crate) fn find_quoted_span(src: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }
    [format!("\"{}\"", value), format!("'{}'", value)]
        .iter()
        .find_map(|pattern| src.find(pattern.as_str()))
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

/// Find the span of the last quoted occurrence of `value`.
pub(crate) fn find_last_quoted_span(src: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }
    [format!("\"{}\"", value), format!("'{}'", value)]
        .iter()
        .filter_map(|pattern| src.rfind(pattern.as_str()))
        .max()
        .map(|pos| SourceSpan::from((pos + 1, value.len())))
}

/// Find the span of `key` on the left of a `key = value` line. Quoted keys
/// are matched without their quotes.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let indent = line.len() - line.trim_start().len();
        let rest = &line[indent..];
        let (start, after) = match rest.chars().next() {
            Some(q @ ('"' | '\'')) => match rest[1..].strip_prefix(key) {
                Some(after) if after.starts_with(q) => (indent + 1, &after[1..]),
                _ => (0, ""),
            },
            _ => match rest.strip_prefix(key) {
                Some(after) => (indent, after),
                None => (0, ""),
            },
        };
        if !after.is_empty() && after.trim_start().starts_with('=') {
            return Some(SourceSpan::from((offset + start, key.len())));
        }
        offset += line.len();
    }
    None
}

/// Find the span of `name` in a `[table.name]` header.
pub(crate) fn find_table_span(src: &str, table: &str, name: &str) -> Option<SourceSpan> {
    let pattern = format!("[{}.{}]", table, name);
    src.find(&pattern)
        .map(|pos| SourceSpan::from((pos + table.len() + 2, name.len())))
}

/// Returns why `name` is not a valid target name, if it isn't.
pub(crate) fn target_name_error(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("target names cannot be empty");
    }
    if name.starts_with('/') || name.ends_with('/') {
        return Some("target names cannot start or end with '/'");
    }
    if name.contains(':') {
        return Some("target names cannot contain ':'");
    }
    if name.contains("//") {
        return Some("target names cannot contain '//'");
    }
    if name.chars().any(char::is_whitespace) {
        return Some("target names cannot contain whitespace");
    }
    if name.split('/').any(|segment| segment == "." || segment == "..") {
        return Some("target names cannot contain '.' or '..' segments");
    }
    None
}

/// Returns why `name` is not a valid Starlark identifier, if it isn't.
pub(crate) fn identifier_error(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        None
    } else {
        Some("name must contain only letters, numbers, and underscores")
    }
}

/// Returns why `directory` is not a valid package directory, if it isn't.
///
/// The empty string is the workspace root and is valid.
pub(crate) fn directory_error(directory: &str) -> Option<&'static str> {
    if directory.is_empty() {
        return None;
    }
    if directory.starts_with('/') {
        return Some("absolute directories are not allowed");
    }
    if directory.ends_with('/') {
        return Some("directories cannot end with '/'");
    }
    if directory.contains('\\') {
        return Some("use '/' as the path separator");
    }
    if directory.contains(':') {
        return Some("directories cannot contain ':'");
    }
    for segment in directory.split('/') {
        match segment {
            "" => return Some("directories cannot contain empty segments"),
            "." | ".." => return Some("directories cannot contain '.' or '..' segments"),
            _ => {}
        }
    }
    None
}

/// Check that `label` is an absolute (`//pkg:name`) or package-relative
/// (`:name`) label.
pub(crate) fn is_valid_label(label: &str) -> bool {
    if let Some(relative) = label.strip_prefix(':') {
        return target_name_error(relative).is_none();
    }
    let Some(absolute) = label.strip_prefix("//") else {
        return false;
    };
    match absolute.split_once(':') {
        Some((package, name)) => {
            directory_error(package).is_none() && target_name_error(name).is_none()
        }
        None => !absolute.is_empty() && directory_error(absolute).is_none(),
    }
}
