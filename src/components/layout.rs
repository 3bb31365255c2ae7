//! Layout Component
//!
//! App bar with the user avatar menu, sidebar with role-filtered navigation,
//! and the main content slot.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::permissions::allowed_menu_items;
use crate::routes::Route;
use crate::session::{store_logout, use_session, SessionStateStoreFields};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let (menu_open, set_menu_open) = signal(false);

    let initials = move || {
        session
            .profile()
            .with(|p| p.as_ref().map(|p| p.initials()).unwrap_or_else(|| "??".to_string()))
    };

    let menu_items = move || {
        let profiles = session
            .profile()
            .with(|p| p.as_ref().map(|p| p.role_names()).unwrap_or_default());
        allowed_menu_items(&profiles)
    };

    let logout = move |_| {
        store_logout(&session);
        set_menu_open.set(false);
        ctx.navigate(Route::Login);
    };

    view! {
        <div class="app-shell">
            <header class="app-bar">
                <span class="app-title">"Checkfine"</span>
                <div class="app-bar-spacer"></div>
                <div class="avatar-menu">
                    <button
                        class="avatar-btn"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {initials}
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="avatar-dropdown">
                            <button class="menu-entry" on:click=move |_| set_menu_open.set(false)>
                                "Perfil"
                            </button>
                            <button class="menu-entry" on:click=logout>"Sair"</button>
                        </div>
                    </Show>
                </div>
            </header>

            <div class="app-body">
                <nav class="sidebar">
                    <For
                        each=menu_items
                        key=|item| item.path
                        children=move |item| {
                            let route = Route::from_path(item.path);
                            let is_active = move || Some(ctx.route.get()) == route;
                            view! {
                                <button
                                    class=move || {
                                        if is_active() { "nav-item active" } else { "nav-item" }
                                    }
                                    on:click=move |_| {
                                        if let Some(route) = route {
                                            ctx.navigate(route);
                                        }
                                    }
                                >
                                    {item.text}
                                </button>
                            }
                        }
                    />
                </nav>

                <main class="main-content">{children()}</main>
            </div>
        </div>
    }
}
