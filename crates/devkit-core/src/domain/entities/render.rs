//! Variable substitution for template bodies.

use std::collections::HashMap;

/// Context for rendering a parameterized template body.
///
/// Holds the `{{VARIABLE}}` substitutions available to playground templates.
///
/// ## Built-in Variables
///
/// | Variable   | Example | Source                    |
/// |------------|---------|---------------------------|
/// | `PLATFORM` | "ios"   | Lower-cased platform name |
#[derive(Debug, Clone)]
pub struct RenderContext {
    variables: HashMap<&'static str, String>,
}

impl RenderContext {
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            variables: HashMap::from([("PLATFORM", platform.into())]),
        }
    }

    /// Render a template string by replacing `{{VARIABLE}}` placeholders.
    ///
    /// - `{{UNKNOWN}}` remains as the literal `{{UNKNOWN}}`
    /// - repeated placeholders are all replaced
    pub fn render(&self, template: &str) -> String {
        let mut result = template.to_string();

        for (key, value) in &self.variables {
            let placeholder = format!("{{{{{key}}}}}");
            result = result.replace(&placeholder, value);
        }

        result
    }
}
