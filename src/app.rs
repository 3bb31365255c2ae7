//! Checkfine Admin App
//!
//! Root component: session bootstrap, route gating and page dispatch.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{Layout, LoginPage, SnackbarHost, TaskAdminPage, TreeAdminPage};
use crate::context::{AppContext, Snack};
use crate::routes::{resolve_route, route_from_hash, sync_hash, Route};
use crate::session::{load_session, role_names, SessionStore};

#[component]
pub fn App() -> impl IntoView {
    // Session restored from localStorage before anything renders
    let session: SessionStore = Store::new(load_session());
    provide_context(session);

    let (route, set_route) = signal(route_from_hash().unwrap_or(Route::Dashboard));
    let (snack, set_snack) = signal::<Option<Snack>>(None);
    provide_context(AppContext::new((route, set_route), (snack, set_snack)));

    // Fail-closed resolution: login when unauthenticated, dashboard when the
    // requested path is denied or unknown
    let resolved = Memo::new(move |_| {
        let profiles = role_names(&session);
        resolve_route(Some(route.get()), profiles.as_deref())
    });

    Effect::new(move |_| {
        sync_hash(resolved.get());
    });

    view! {
        <SnackbarHost />
        {move || match resolved.get() {
            Route::Login => view! { <LoginPage /> }.into_any(),
            page => view! {
                <Layout>
                    {match page {
                        Route::TaskAdmin => view! { <TaskAdminPage /> }.into_any(),
                        Route::TreeAdmin => view! { <TreeAdminPage /> }.into_any(),
                        Route::Users => view! {
                            <div class="placeholder">"Usuários (em construção)"</div>
                        }
                        .into_any(),
                        Route::Settings => view! {
                            <div class="placeholder">"Configurações (em construção)"</div>
                        }
                        .into_any(),
                        _ => view! {
                            <div class="placeholder">"Dashboard (em construção)"</div>
                        }
                        .into_any(),
                    }}
                </Layout>
            }
            .into_any(),
        }}
    }
}
