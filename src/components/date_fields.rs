//! Date/Time Field Widgets
//!
//! Native date/time/datetime-local inputs. Values arrive as loose JSON and
//! are coerced through chrono; anything unparsable renders as unset.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use leptos::prelude::*;

use crate::components::field_inputs::FieldLabel;
use crate::datetime::{DATE_FORMAT, DATE_TIME_FORMAT, TIME_FORMAT};

#[component]
pub fn DateField(
    #[prop(into)] label: String,
    value: Signal<Option<NaiveDate>>,
    #[prop(into)] on_change: Callback<Option<String>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="field date-field">
            <FieldLabel label=label required=required />
            <input
                type="date"
                prop:value=move || {
                    value.get().map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
                }
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    on_change.run(if raw.is_empty() { None } else { Some(raw) });
                }
            />
        </div>
    }
}

#[component]
pub fn TimeField(
    #[prop(into)] label: String,
    value: Signal<Option<NaiveTime>>,
    #[prop(into)] on_change: Callback<Option<String>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="field time-field">
            <FieldLabel label=label required=required />
            <input
                type="time"
                prop:value=move || {
                    value.get().map(|t| t.format(TIME_FORMAT).to_string()).unwrap_or_default()
                }
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    on_change.run(if raw.is_empty() { None } else { Some(raw) });
                }
            />
        </div>
    }
}

#[component]
pub fn DateTimeField(
    #[prop(into)] label: String,
    value: Signal<Option<NaiveDateTime>>,
    #[prop(into)] on_change: Callback<Option<String>>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="field date-time-field">
            <FieldLabel label=label required=required />
            <input
                type="datetime-local"
                prop:value=move || {
                    value.get().map(|dt| dt.format(DATE_TIME_FORMAT).to_string()).unwrap_or_default()
                }
                on:change=move |ev| {
                    let raw = event_target_value(&ev);
                    on_change.run(if raw.is_empty() { None } else { Some(raw) });
                }
            />
        </div>
    }
}
