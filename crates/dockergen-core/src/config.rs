use std::path::Path;

use serde_json::{Map, Value};

/// Key holding the service name inside the generation context.
pub const SERVICE_NAME_KEY: &str = "service_name";

/// Service name used when the config does not set one.
pub const DEFAULT_SERVICE_NAME: &str = "default_service";

/// Generation context loaded from a JSON config file.
///
/// The generator does not know the schema: every key is forwarded to the
/// templates unchanged. Key order follows the source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    values: Map<String, Value>,
}

impl Context {
    pub fn new(values: Map<String, Value>) -> Self {
        Self { values }
    }

    /// Load a context from a JSON file.
    ///
    /// # Errors
    ///
    /// - [`Error::ConfigLoad`](crate::Error::ConfigLoad) if the file cannot be read
    /// - [`Error::ConfigParse`](crate::Error::ConfigParse) on malformed JSON
    /// - [`Error::ConfigNotObject`](crate::Error::ConfigNotObject) if the top level is not an object
    pub fn load(config_path: &Path) -> crate::Result<Self> {
        tracing::debug!(path = %config_path.display(), "loading config");

        let content =
            std::fs::read_to_string(config_path).map_err(|e| crate::Error::ConfigLoad {
                path: config_path.to_path_buf(),
                source: e,
            })?;
        let value: Value =
            serde_json::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path.to_path_buf(),
                source: e,
            })?;

        match value {
            Value::Object(values) => {
                tracing::debug!(keys = values.len(), "config loaded");
                Ok(Self { values })
            }
            other => Err(crate::Error::ConfigNotObject {
                path: config_path.to_path_buf(),
                found: json_type_name(&other),
            }),
        }
    }

    /// Returns the configured service name, or [`DEFAULT_SERVICE_NAME`].
    ///
    /// A `null` value counts as absent. Non-string values use their JSON text.
    pub fn resolve_service_name(&self) -> String {
        match self.values.get(SERVICE_NAME_KEY) {
            Some(Value::String(name)) => name.clone(),
            None | Some(Value::Null) => DEFAULT_SERVICE_NAME.to_owned(),
            Some(other) => other.to_string(),
        }
    }

    /// Writes `name` back under `service_name` unless the current value
    /// already resolves to it, in which case the original value is kept.
    pub fn set_service_name(&mut self, name: &str) {
        let unchanged = match self.values.get(SERVICE_NAME_KEY) {
            None | Some(Value::Null) => false,
            Some(_) => self.resolve_service_name() == name,
        };
        if !unchanged {
            self.values
                .insert(SERVICE_NAME_KEY.to_owned(), Value::String(name.to_owned()));
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
