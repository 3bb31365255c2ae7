//! Login Page
//!
//! Credential form; failures surface the server's message inline.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::routes::Route;
use crate::session::{store_login, use_session};

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        let mail = email.get();
        let pass = password.get();
        spawn_local(async move {
            match api::login(&mail, &pass).await {
                Ok(response) => {
                    store_login(&session, response);
                    ctx.navigate(Route::Dashboard);
                }
                Err(message) => {
                    web_sys::console::error_1(&format!("[LOGIN] failed: {}", message).into());
                    set_error.set(Some(if message.is_empty() {
                        "Erro ao fazer login. Verifique suas credenciais.".to_string()
                    } else {
                        message
                    }));
                }
            }
        });
    };

    view! {
        <div class="login-screen">
            <div class="login-card">
                <h2 class="login-title">"Login"</h2>

                {move || error.get().map(|message| view! {
                    <div class="alert error">{message}</div>
                })}

                <form on:submit=on_submit>
                    <label class="editor-label">"Email"</label>
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <label class="editor-label">"Password"</label>
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn primary full-width">"Login"</button>
                </form>
            </div>
        </div>
    }
}
