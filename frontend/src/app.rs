use leptos::*;
use shared::FormSchema;

use crate::components::ConnectedInputNumber;
use crate::form::provide_form;

const DEMO_SCHEMA: &str = include_str!("../schema/demo.json");

/// Parse the embedded form schema, falling back to an empty form.
fn load_schema(json: &str) -> FormSchema {
    FormSchema::from_json(json).unwrap_or_else(|e| {
        log::error!("{}", e);
        FormSchema::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    let form = provide_form(load_schema(DEMO_SCHEMA));
    log::info!("Form loaded with {} field(s)", form.field_names().len());

    let values_json = move || {
        form.to_json().unwrap_or_else(|e| {
            log::error!("Failed to serialize form values: {}", e);
            String::new()
        })
    };

    view! {
        <main class="container">
            <form class="card" on:submit=|ev| ev.prevent_default()>
                {form.title().map(|title| view! { <h1>{title}</h1> })}
                {form
                    .field_names()
                    .into_iter()
                    .map(|name| view! { <ConnectedInputNumber name=name /> })
                    .collect_view()}
                <div class="action-bar">
                    <button type="button" class="btn" on:click=move |_| form.reset()>
                        "Reset"
                    </button>
                </div>
            </form>
            <pre class="form-values">{values_json}</pre>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::FieldValue;

    #[test]
    fn test_demo_schema_parses() {
        let schema = FormSchema::from_json(DEMO_SCHEMA).unwrap();
        assert_eq!(schema.properties.len(), 3);
        assert_eq!(
            schema.initial_values().get("concurrency"),
            Some(&FieldValue::Number(4.0))
        );
        assert!(schema.property("sample_rate").unwrap().constraints().step > 0.0);
    }

    #[test]
    fn test_load_schema_fallback() {
        let schema = load_schema("not json");
        assert!(schema.properties.is_empty());
        assert!(schema.title.is_none());
    }
}
