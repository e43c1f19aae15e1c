use serde_json::{Map, Value};

use super::secret::SecretString;
use crate::domain::error::{FieldError, ValidationError};

/// Plain nested mapping handed to schema validation
pub type ConfigMapping = Map<String, Value>;

/// Root configuration, validated and immutable once constructed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    my_config_field: String,
    my_env: String,
    my_secret: SecretString,
}

/// Field names in declaration order
pub const CONFIG_FIELDS: [&str; 3] = ["my_config_field", "my_env", "my_secret"];

impl Config {
    /// Build a configuration from already-typed values
    pub fn new(
        my_config_field: impl Into<String>,
        my_env: impl Into<String>,
        my_secret: impl Into<SecretString>,
    ) -> Self {
        Self {
            my_config_field: my_config_field.into(),
            my_env: my_env.into(),
            my_secret: my_secret.into(),
        }
    }

    /// Validate a plain mapping and construct a configuration from it.
    ///
    /// All fields are checked before returning, so the error carries every
    /// failing field rather than only the first. Keys not in the schema are
    /// ignored.
    pub fn from_mapping(mapping: &ConfigMapping) -> Result<Self, ValidationError> {
        let mut errors = Vec::new();

        let my_config_field = collect(validate_string(mapping, "my_config_field"), &mut errors);
        let my_env = collect(validate_string(mapping, "my_env"), &mut errors);
        let my_secret = collect(validate_secret(mapping, "my_secret"), &mut errors);

        for key in mapping.keys().filter(|k| !CONFIG_FIELDS.contains(&k.as_str())) {
            tracing::debug!(key = %key, "ignoring unknown configuration key");
        }

        match (my_config_field, my_env, my_secret) {
            (Some(my_config_field), Some(my_env), Some(my_secret)) => Ok(Self {
                my_config_field,
                my_env,
                my_secret,
            }),
            _ => Err(ValidationError::new(errors)),
        }
    }

    /// Plain string field
    pub fn my_config_field(&self) -> &str {
        &self.my_config_field
    }

    /// Name of the deployment environment
    pub fn my_env(&self) -> &str {
        &self.my_env
    }

    /// Secret value; call [`SecretString::expose_secret`] for the raw text
    pub const fn my_secret(&self) -> &SecretString {
        &self.my_secret
    }
}

impl TryFrom<&ConfigMapping> for Config {
    type Error = ValidationError;

    fn try_from(mapping: &ConfigMapping) -> Result<Self, Self::Error> {
        Self::from_mapping(mapping)
    }
}

fn collect<T>(result: Result<T, FieldError>, errors: &mut Vec<FieldError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            errors.push(err);
            None
        }
    }
}

fn validate_string(mapping: &ConfigMapping, field: &'static str) -> Result<String, FieldError> {
    match mapping.get(field) {
        None => Err(FieldError::missing(field)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(FieldError::wrong_type(field, "string", type_name(other))),
    }
}

fn validate_secret(mapping: &ConfigMapping, field: &'static str) -> Result<SecretString, FieldError> {
    validate_string(mapping, field).map(SecretString::from)
}

const fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}
