//! Simple Field Widgets
//!
//! Yes/no, checkbox and free-text inputs of the dynamic form.

use leptos::prelude::*;

/// Fixed labels of the binary choice field
pub const YES_LABEL: &str = "Sim";
pub const NO_LABEL: &str = "Não";

/// Binary choice restricted to the two fixed labels
#[component]
pub fn YesNoField(
    #[prop(into)] label: String,
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="field yes-no-field">
            <FieldLabel label=label required=required />
            <div class="yes-no-options">
                {[YES_LABEL, NO_LABEL].into_iter().map(|option| {
                    let is_checked = move || value.get() == option;
                    view! {
                        <label class="radio-option">
                            <input
                                type="radio"
                                prop:checked=is_checked
                                on:change=move |_| on_change.run(option.to_string())
                            />
                            {option}
                        </label>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Boolean toggle
#[component]
pub fn CheckBoxField(
    #[prop(into)] label: String,
    value: Signal<bool>,
    #[prop(into)] on_change: Callback<bool>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="field checkbox-field">
            <label class="checkbox-option">
                <input
                    type="checkbox"
                    prop:checked=move || value.get()
                    on:change=move |ev| on_change.run(event_target_checked(&ev))
                />
                <FieldLabel label=label required=required />
            </label>
        </div>
    }
}

/// Free-text input; also the fail-soft fallback for unknown type codes
#[component]
pub fn TextInputField(
    #[prop(into)] label: String,
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="field text-field">
            <FieldLabel label=label required=required />
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}

/// Label text shared by the field widgets, with the required marker
#[component]
pub fn FieldLabel(#[prop(into)] label: String, #[prop(optional)] required: bool) -> impl IntoView {
    view! {
        <span class="field-label">
            {label}
            {required.then(|| view! { <span class="required-marker">"*"</span> })}
        </span>
    }
}
