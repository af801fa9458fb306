use leptos::*;
use shared::forward_slider_value;
use web_sys::HtmlInputElement;

/// Range slider component.
///
/// Positions that land on zero are not reported through `on_change`.
#[component]
pub fn Slider(
    #[prop(into)] value: Signal<f64>,
    #[prop(into)] min: Signal<f64>,
    #[prop(into)] max: Signal<f64>,
    #[prop(into)] step: Signal<f64>,
    #[prop(optional, into)] on_change: Option<Callback<f64>>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let full_class = if let Some(extra) = class {
        format!("form-range {}", extra)
    } else {
        "form-range".to_string()
    };

    view! {
        <input
            type="range"
            class=full_class
            disabled=disabled
            min=move || min.get()
            max=move || max.get()
            step=move || step.get()
            prop:value=move || value.get().to_string()
            on:input=move |ev| {
                let position = event_target::<HtmlInputElement>(&ev).value_as_number();
                if let (Some(position), Some(callback)) = (forward_slider_value(position), on_change) {
                    callback.call(position);
                }
            }
        />
    }
}
