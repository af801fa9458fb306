use leptos::*;
use shared::{FieldValue, NumberConstraints, NumericBounds, DEFAULT_STEP};
use web_sys::HtmlInputElement;

use crate::components::form_group::FormGroup;
use crate::components::slider::Slider;
use crate::form::use_form;

/// Number input with an optional slider.
///
/// Bounds come from `minimum`/`maximum`, or from the exclusive variants moved
/// one `step` inwards. Typed values are floored when `is_integer` is set and
/// clamped into the bounds before `on_change` fires. Text that is not a
/// number yet is handed to `on_change` untouched. The slider appears once both
/// bounds are known.
#[component]
pub fn InputNumber(
    #[prop(into)] value: Signal<FieldValue>,
    #[prop(optional, into)] step: MaybeSignal<Option<f64>>,
    #[prop(optional, into)] is_integer: MaybeSignal<bool>,
    #[prop(optional, into)] minimum: MaybeSignal<Option<f64>>,
    #[prop(optional, into)] maximum: MaybeSignal<Option<f64>>,
    #[prop(optional, into)] exclusive_minimum: MaybeSignal<Option<f64>>,
    #[prop(optional, into)] exclusive_maximum: MaybeSignal<Option<f64>>,
    #[prop(optional, into)] on_change: Option<Callback<FieldValue>>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let constraints = create_memo(move |_| NumberConstraints {
        minimum: minimum.get(),
        maximum: maximum.get(),
        exclusive_minimum: exclusive_minimum.get(),
        exclusive_maximum: exclusive_maximum.get(),
        step: step.get().unwrap_or(DEFAULT_STEP),
        is_integer: is_integer.get(),
    });
    let bounds = create_memo(move |_| NumericBounds::derive(&constraints.get()));
    let show_slider = create_memo(move |_| bounds.get().has_slider());
    let step = Signal::derive(move || constraints.get().step);

    let full_class = match class {
        Some(extra) if !extra.is_empty() => format!("form-input {}", extra),
        _ => "form-input".to_string(),
    };

    // Only write the text when it shows something else, so "1.0" or a lone
    // "-" survive while the user is still typing.
    let input_ref = create_node_ref::<html::Input>();
    create_render_effect(move |_| {
        let current = value.get();
        if let Some(input) = input_ref.get() {
            if !current.matches_input(&input.value(), input.value_as_number()) {
                input.set_value(&current.to_string());
            }
        }
    });

    let on_slider_change = Callback::new(move |position: f64| {
        if let Some(callback) = on_change {
            callback.call(FieldValue::Number(position));
        }
    });

    view! {
        <div class="input-number" style="display: flex; align-items: flex-start; gap: 0.75rem;">
            <input
                node_ref=input_ref
                type="number"
                class=full_class
                style="flex: 1;"
                id=id
                name=name
                placeholder=placeholder
                required=required
                disabled=disabled
                step=move || step.get()
                min=move || bounds.get().min
                max=move || bounds.get().max
                on:input=move |ev| {
                    let input = event_target::<HtmlInputElement>(&ev);
                    let is_integer = constraints.with_untracked(|c| c.is_integer);
                    let next = bounds
                        .get_untracked()
                        .resolve(&input.value(), input.value_as_number(), is_integer);
                    if let Some(callback) = on_change {
                        callback.call(next);
                    }
                }
            />
            <Show when=move || show_slider.get()>
                <Slider
                    class="input-number-slider"
                    value=Signal::derive(move || value.get().slider_position())
                    min=Signal::derive(move || bounds.get().min.unwrap_or_default())
                    max=Signal::derive(move || bounds.get().max.unwrap_or_default())
                    step=step
                    disabled=disabled
                    on_change=on_slider_change
                />
            </Show>
        </div>
    }
}

/// `InputNumber` bound to a field of the surrounding form.
///
/// Value, change handler and range all come from the form context and the
/// field's schema. Unknown fields render nothing.
#[component]
pub fn ConnectedInputNumber(
    #[prop(into)] name: String,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let form = use_form();
    let schema = match form.property(&name) {
        Ok(schema) => schema,
        Err(e) => {
            log::warn!("{}", e);
            return view! {}.into_view();
        }
    };

    let binding = form.field(&name);
    let constraints = schema.constraints();
    let input_id = format!("field-{}", name);
    let label = schema.title.clone().unwrap_or_else(|| name.clone());
    let required = form.is_required(&name);

    view! {
        <FormGroup
            label=label
            for_id=Some(input_id.clone())
            hint=schema.description.clone()
            required=required
        >
            <InputNumber
                value=binding.value
                on_change=binding.on_change
                step=Some(constraints.step)
                is_integer=constraints.is_integer
                minimum=constraints.minimum
                maximum=constraints.maximum
                exclusive_minimum=constraints.exclusive_minimum
                exclusive_maximum=constraints.exclusive_maximum
                id=input_id
                name=name
                class=class.unwrap_or_default()
                disabled=disabled
            />
        </FormGroup>
    }
    .into_view()
}
