//! Completion script generation.
//!
//! The output is a TypeScript module exporting the spec as its default
//! export. JSON keys are sorted at every depth so regenerating an unchanged
//! spec yields a byte-identical file.

use crate::icon::IconError;
use crate::spec::Spec;
use serde_json::Value;
use thiserror::Error;

/// Type annotation of the exported constant.
pub const DEFAULT_TYPE_NAME: &str = "Fig.Spec";

/// Error type for script generation.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error(transparent)]
    Icon(#[from] IconError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Renders a [`Spec`] as an importable module.
#[derive(Debug, Clone)]
pub struct ScriptGenerator {
    type_name: String,
}

impl ScriptGenerator {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Encode the spec as pretty-printed JSON with sorted keys.
    pub fn to_json(&self, spec: &Spec) -> Result<String, ScriptError> {
        spec.root.check_icons()?;
        let value = serde_json::to_value(spec)?;
        Ok(serde_json::to_string_pretty(&sort_keys(value))?)
    }

    /// Encode the spec and wrap it in the module template.
    pub fn generate(&self, spec: &Spec) -> Result<String, ScriptError> {
        let json = self.to_json(spec)?;
        Ok(format!(
            "const completionSpec: {} = {};\n\nexport default completionSpec;",
            self.type_name, json
        ))
    }
}

impl Default for ScriptGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TYPE_NAME)
    }
}

impl Spec {
    /// Render with the default [`ScriptGenerator`].
    pub fn script(&self) -> Result<String, ScriptError> {
        ScriptGenerator::default().generate(self)
    }
}

fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, sort_keys(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
