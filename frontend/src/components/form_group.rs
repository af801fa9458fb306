use leptos::*;

/// Label, field and hint of one form entry.
///
/// When `for_id` is given the hint gets the id `{for_id}-hint`.
#[component]
pub fn FormGroup(
    #[prop(into)] label: String,
    #[prop(optional_no_strip)] for_id: Option<String>,
    #[prop(optional_no_strip)] hint: Option<String>,
    #[prop(optional)] required: bool,
    children: Children,
) -> impl IntoView {
    let hint_id = for_id.as_ref().map(|id| format!("{}-hint", id));

    view! {
        <div class="form-group">
            <label class="form-label" for=for_id>
                {label}
                {required.then(|| view! { <span class="form-required">" *"</span> })}
            </label>
            {children()}
            {hint.map(|h| view! {
                <span class="form-hint" id=hint_id>{h}</span>
            })}
        </div>
    }
}
