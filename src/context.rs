//! Application Context
//!
//! Navigation and notification signals provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::routes::{sync_hash, Route};

/// Notification severity, controls snackbar styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// One transient snackbar message
#[derive(Debug, Clone, PartialEq)]
pub struct Snack {
    pub message: String,
    pub severity: Severity,
    /// Generation stamp so a late dismiss timer never clears a newer message
    pub generation: u32,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current route - read
    pub route: ReadSignal<Route>,
    set_route: WriteSignal<Route>,
    /// Active snackbar, if any - read
    pub snack: ReadSignal<Option<Snack>>,
    set_snack: WriteSignal<Option<Snack>>,
    snack_generation: StoredValue<u32>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        snack: (ReadSignal<Option<Snack>>, WriteSignal<Option<Snack>>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            snack: snack.0,
            set_snack: snack.1,
            snack_generation: StoredValue::new(0),
        }
    }

    /// Navigate to a route and mirror it into the address bar
    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
        sync_hash(route);
    }

    /// Show a transient notification that auto-dismisses after a few seconds
    pub fn notify(&self, severity: Severity, message: impl Into<String>) {
        let generation = self.snack_generation.get_value() + 1;
        self.snack_generation.set_value(generation);
        self.set_snack.set(Some(Snack {
            message: message.into(),
            severity,
            generation,
        }));

        let set_snack = self.set_snack;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(4_000).await;
            set_snack.update(|current| {
                // Only clear if no newer message replaced this one
                if current.as_ref().map(|s| s.generation) == Some(generation) {
                    *current = None;
                }
            });
        });
    }

    pub fn notify_success(&self, message: impl Into<String>) {
        self.notify(Severity::Success, message);
    }

    pub fn notify_error(&self, message: impl Into<String>) {
        self.notify(Severity::Error, message);
    }

    /// Dismiss the current snackbar immediately
    pub fn dismiss_snack(&self) {
        self.set_snack.set(None);
    }
}
