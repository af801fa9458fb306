use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::bounds::{NumberConstraints, DEFAULT_STEP};
use crate::value::FieldValue;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Invalid form schema: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unknown form field: {0}")]
    MissingProperty(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumberType {
    #[default]
    Number,
    Integer,
}

/// Schema of a single numeric field.
///
/// Keys follow JSON Schema (`exclusiveMinimum`, `multipleOf`, ...). `x-step`
/// overrides the input increment when it should differ from `multipleOf`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberSchema {
    #[serde(rename = "type", default)]
    pub kind: NumberType,
    pub title: Option<String>,
    pub description: Option<String>,
    pub default: Option<f64>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: Option<f64>,
    pub exclusive_maximum: Option<f64>,
    pub multiple_of: Option<f64>,
    #[serde(rename = "x-step")]
    pub step: Option<f64>,
}

impl NumberSchema {
    pub fn constraints(&self) -> NumberConstraints {
        NumberConstraints {
            minimum: self.minimum,
            maximum: self.maximum,
            exclusive_minimum: self.exclusive_minimum,
            exclusive_maximum: self.exclusive_maximum,
            step: self.step.or(self.multiple_of).unwrap_or(DEFAULT_STEP),
            is_integer: self.kind == NumberType::Integer,
        }
    }

    pub fn initial_value(&self) -> FieldValue {
        self.default.map(FieldValue::Number).unwrap_or_default()
    }
}

/// An object schema whose properties are all numeric fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    pub title: Option<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, NumberSchema>,
    #[serde(default)]
    pub required: Vec<String>,
}

impl FormSchema {
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn property(&self, name: &str) -> Result<&NumberSchema, SchemaError> {
        self.properties
            .get(name)
            .ok_or_else(|| SchemaError::MissingProperty(name.to_string()))
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }

    pub fn initial_values(&self) -> BTreeMap<String, FieldValue> {
        self.properties
            .iter()
            .map(|(name, schema)| (name.clone(), schema.initial_value()))
            .collect()
    }
}
