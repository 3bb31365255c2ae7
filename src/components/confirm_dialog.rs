//! Confirm Dialog Component
//!
//! Modal yes/no confirmation used before destructive actions.

use leptos::prelude::*;

#[component]
pub fn ConfirmDialog(
    open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_cancel.run(())>
                <div class="modal-dialog" on:click=|ev| ev.stop_propagation()>
                    <h3 class="modal-title">{title.clone()}</h3>
                    <p class="modal-message">{message.clone()}</p>
                    <div class="modal-actions">
                        <button class="btn" on:click=move |_| on_cancel.run(())>"Não"</button>
                        <button class="btn danger" on:click=move |_| on_confirm.run(())>"Sim"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
