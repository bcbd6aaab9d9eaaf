//! Template renderer for hummingbird.
//! Substitutes `{{ Name }}` placeholders against a flat JSON context. There
//! are no loops, conditionals or filters: a placeholder is either a known
//! field or an error.
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

static FIELD_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid field name pattern"));

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// Find-and-replace renderer for `{{ FieldName }}` placeholders.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for PlaceholderRenderer {
    /// Renders a template string by interpolating context fields.
    ///
    /// # Errors
    /// * `Error::TemplateError` if:
    ///   - a `{{` has no matching `}}`
    ///   - the text between the braces is not a field name
    ///   - the field is missing from the context or is not a scalar
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find(OPEN) {
            output.push_str(&rest[..start]);
            let offset = template.len() - rest.len() + start;
            let after_open = &rest[start + OPEN.len()..];

            let end = after_open.find(CLOSE).ok_or_else(|| {
                Error::TemplateError(format!(
                    "unclosed placeholder on line {}",
                    line_of(template, offset)
                ))
            })?;

            let raw = &after_open[..end];
            let name = raw.trim();
            if !FIELD_NAME.is_match(name) {
                return Err(Error::TemplateError(format!(
                    "malformed placeholder '{OPEN}{raw}{CLOSE}' on line {}",
                    line_of(template, offset)
                )));
            }

            output.push_str(&lookup(context, name)?);
            rest = &after_open[end + CLOSE.len()..];
        }

        output.push_str(rest);
        Ok(output)
    }
}

fn lookup(context: &serde_json::Value, name: &str) -> Result<String> {
    match context.get(name) {
        Some(serde_json::Value::String(value)) => Ok(value.clone()),
        Some(value @ (serde_json::Value::Number(_) | serde_json::Value::Bool(_))) => {
            Ok(value.to_string())
        }
        Some(serde_json::Value::Null) | None => Err(Error::TemplateError(format!(
            "undefined field '{name}'"
        ))),
        Some(_) => Err(Error::TemplateError(format!(
            "field '{name}' is not a scalar value"
        ))),
    }
}

fn line_of(template: &str, offset: usize) -> usize {
    template[..offset].matches('\n').count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_line_of() {
        let template = "a\nb\n{{ X";
        assert_eq!(line_of(template, 0), 1);
        assert_eq!(line_of(template, 4), 3);
    }

    #[test]
    fn test_lookup_scalars() {
        let context = json!({"Name": "demo", "Count": 3, "Flag": true, "Nothing": null});
        assert_eq!(lookup(&context, "Name").unwrap(), "demo");
        assert_eq!(lookup(&context, "Count").unwrap(), "3");
        assert_eq!(lookup(&context, "Flag").unwrap(), "true");
        assert!(lookup(&context, "Nothing").is_err());
        assert!(lookup(&context, "Missing").is_err());
    }
}
