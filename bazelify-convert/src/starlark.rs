//! Starlark source building.

use bazelify_manifest::PropertyValue;

const INDENT: &str = "    ";

/// Line-oriented builder for Starlark source with 4-space indentation.
///
/// # Example
///
/// ```
/// use bazelify_convert::starlark::StarlarkBuilder;
///
/// let mut builder = StarlarkBuilder::new();
/// builder
///     .push_line("filegroup(")
///     .push_indent()
///     .push_string_attr("name", "srcs")
///     .push_dedent()
///     .push_line(")");
///
/// assert_eq!(builder.build(), "filegroup(\n    name = \"srcs\",\n)\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StarlarkBuilder {
    indent_level: usize,
    buffer: String,
}

impl StarlarkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a `name = "value",` keyword argument.
    pub fn push_string_attr(&mut self, name: &str, value: &str) -> &mut Self {
        self.push_line(&format!("{} = {},", name, quote(value)))
    }

    /// Add a list of strings, one element per line.
    pub fn push_string_list_attr(&mut self, name: &str, values: &[String]) -> &mut Self {
        let items: Vec<String> = values.iter().map(|v| quote(v)).collect();
        self.push_list(name, &items)
    }

    /// Add a keyword argument holding a property value.
    pub fn push_attr(&mut self, name: &str, value: &PropertyValue) -> &mut Self {
        match value {
            PropertyValue::List(items) => {
                let items: Vec<String> = items.iter().map(literal).collect();
                self.push_list(name, &items)
            }
            scalar => self.push_line(&format!("{} = {},", name, literal(scalar))),
        }
    }

    /// Consume the builder and return the generated source.
    pub fn build(self) -> String {
        self.buffer
    }

    fn push_list(&mut self, name: &str, items: &[String]) -> &mut Self {
        if items.is_empty() {
            return self.push_line(&format!("{} = [],", name));
        }
        self.push_line(&format!("{} = [", name)).push_indent();
        for item in items {
            self.push_line(&format!("{},", item));
        }
        self.push_dedent().push_line("],")
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}

/// Render a property value as a Starlark literal.
pub fn literal(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Bool(true) => "True".to_string(),
        PropertyValue::Bool(false) => "False".to_string(),
        PropertyValue::Int(i) => i.to_string(),
        PropertyValue::String(s) => quote(s),
        PropertyValue::List(items) => {
            let items: Vec<String> = items.iter().map(literal).collect();
            format!("[{}]", items.join(", "))
        }
    }
}

/// Quote a string as a double-quoted Starlark string literal.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote() {
        assert_eq!(quote("foo.cc"), r#""foo.cc""#);
        assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
        assert_eq!(quote("a\\b"), r#""a\\b""#);
        assert_eq!(quote("line\nbreak"), r#""line\nbreak""#);
        assert_eq!(quote(""), r#""""#);
    }

    #[test]
    fn test_literal_scalars() {
        assert_eq!(literal(&PropertyValue::Bool(true)), "True");
        assert_eq!(literal(&PropertyValue::Bool(false)), "False");
        assert_eq!(literal(&PropertyValue::Int(-3)), "-3");
        assert_eq!(literal(&PropertyValue::String("x".into())), r#""x""#);
    }

    #[test]
    fn test_literal_nested_list() {
        let value = PropertyValue::List(vec![
            PropertyValue::List(vec![PropertyValue::Int(1), PropertyValue::Int(2)]),
            PropertyValue::List(vec![]),
        ]);
        assert_eq!(literal(&value), "[[1, 2], []]");
    }

    #[test]
    fn test_push_list_attr() {
        let mut builder = StarlarkBuilder::new();
        builder.push_attr(
            "srcs",
            &PropertyValue::List(vec![
                PropertyValue::String("a.cc".into()),
                PropertyValue::String("b.cc".into()),
            ]),
        );
        assert_eq!(builder.build(), "srcs = [\n    \"a.cc\",\n    \"b.cc\",\n],\n");
    }

    #[test]
    fn test_push_empty_list() {
        let mut builder = StarlarkBuilder::new();
        builder.push_string_list_attr("deps", &[]);
        assert_eq!(builder.build(), "deps = [],\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = StarlarkBuilder::new();
        builder
            .push_line("rule(")
            .push_indent()
            .push_attr("shared", &PropertyValue::Bool(true))
            .push_dedent()
            .push_dedent()
            .push_line(")");
        assert_eq!(builder.build(), "rule(\n    shared = True,\n)\n");
    }
}
