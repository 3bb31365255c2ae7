//! Snackbar Host
//!
//! Renders the one active transient notification from AppContext.

use leptos::prelude::*;

use crate::context::{AppContext, Severity};

#[component]
pub fn SnackbarHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.snack.get().map(|snack| {
            let class = match snack.severity {
                Severity::Success => "snackbar success",
                Severity::Error => "snackbar error",
            };
            view! {
                <div class=class>
                    <span class="snackbar-message">{snack.message.clone()}</span>
                    <button class="snackbar-close" on:click=move |_| ctx.dismiss_snack()>"×"</button>
                </div>
            }
        })}
    }
}
