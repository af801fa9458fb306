//! Form state shared by every field of a form.
//!
//! A `FormContext` is provided once per form; fields look it up by name and
//! get their value and change handler from it, so a component embedded in a
//! form never has to be wired by hand.

use std::collections::BTreeMap;

use leptos::*;
use shared::{FieldValue, FormSchema, NumberSchema, SchemaError};

/// Value and change handler of a single field.
#[derive(Clone, Copy)]
pub struct FieldBinding {
    pub value: Signal<FieldValue>,
    pub on_change: Callback<FieldValue>,
}

#[derive(Clone, Copy)]
pub struct FormContext {
    schema: StoredValue<FormSchema>,
    values: RwSignal<BTreeMap<String, FieldValue>>,
}

impl FormContext {
    pub fn new(schema: FormSchema) -> Self {
        let values = schema.initial_values();
        Self {
            schema: store_value(schema),
            values: create_rw_signal(values),
        }
    }

    pub fn title(&self) -> Option<String> {
        self.schema.with_value(|s| s.title.clone())
    }

    pub fn field_names(&self) -> Vec<String> {
        self.schema.with_value(|s| s.properties.keys().cloned().collect())
    }

    pub fn property(&self, name: &str) -> Result<NumberSchema, SchemaError> {
        self.schema.with_value(|s| s.property(name).cloned())
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.schema.with_value(|s| s.is_required(name))
    }

    /// Reactive value of a field. Unknown fields read as the default value.
    pub fn value(&self, name: &str) -> Signal<FieldValue> {
        let values = self.values;
        let name = name.to_string();
        Signal::derive(move || values.with(|v| v.get(&name).cloned().unwrap_or_default()))
    }

    pub fn set_value(&self, name: &str, value: FieldValue) {
        log::debug!("Field {} changed to {:?}", name, value);
        self.values.update(|v| {
            v.insert(name.to_string(), value);
        });
    }

    pub fn field(&self, name: &str) -> FieldBinding {
        let form = *self;
        let field_name = name.to_string();
        FieldBinding {
            value: self.value(name),
            on_change: Callback::new(move |value: FieldValue| form.set_value(&field_name, value)),
        }
    }

    /// Put every field back to its schema default.
    pub fn reset(&self) {
        let initial = self.schema.with_value(|s| s.initial_values());
        self.values.set(initial);
    }

    pub fn snapshot(&self) -> BTreeMap<String, FieldValue> {
        self.values.get()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        self.values.with(serde_json::to_string_pretty)
    }
}

/// Provide a form context to the children of the calling component.
pub fn provide_form(schema: FormSchema) -> FormContext {
    let form = FormContext::new(schema);
    provide_context(form);
    form
}

pub fn use_form() -> FormContext {
    expect_context::<FormContext>()
}
