//! Client-Side Routes
//!
//! The app navigates through a plain enum in a signal, mirrored into
//! `location.hash` so a reload lands on the same page. Resolution is
//! fail-closed: unauthenticated goes to login, denied or unknown paths go to
//! the dashboard.

use crate::permissions::has_route_access;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    TaskAdmin,
    TreeAdmin,
    Dashboard,
    Users,
    Settings,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::TaskAdmin => "/cadastrar-tarefa",
            Route::TreeAdmin => "/gerenciar-arvores",
            Route::Dashboard => "/dashboard",
            Route::Users => "/users",
            Route::Settings => "/settings",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/login" => Some(Route::Login),
            "/cadastrar-tarefa" => Some(Route::TaskAdmin),
            "/gerenciar-arvores" => Some(Route::TreeAdmin),
            "/dashboard" => Some(Route::Dashboard),
            "/users" => Some(Route::Users),
            "/settings" => Some(Route::Settings),
            _ => None,
        }
    }
}

/// Where a navigation request actually lands, given the session
pub fn resolve_route(requested: Option<Route>, profiles: Option<&[String]>) -> Route {
    let Some(profiles) = profiles else {
        return Route::Login;
    };
    match requested {
        Some(Route::Login) | None => Route::Dashboard,
        Some(route) => {
            if has_route_access(route.path(), profiles) {
                route
            } else {
                Route::Dashboard
            }
        }
    }
}

/// Current route from `location.hash`, e.g. "#/gerenciar-arvores"
pub fn route_from_hash() -> Option<Route> {
    let hash = web_sys::window()?.location().hash().ok()?;
    Route::from_path(hash.trim_start_matches('#'))
}

/// Mirror the active route into the address bar
pub fn sync_hash(route: Route) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(route.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sysa() -> Vec<String> {
        vec!["SYSA".to_string()]
    }

    fn oper() -> Vec<String> {
        vec!["OPER".to_string()]
    }

    #[test]
    fn test_paths_round_trip() {
        for route in [
            Route::Login,
            Route::TaskAdmin,
            Route::TreeAdmin,
            Route::Dashboard,
            Route::Users,
            Route::Settings,
        ] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
        assert_eq!(Route::from_path("/nao-existe"), None);
    }

    #[test]
    fn test_unauthenticated_always_lands_on_login() {
        assert_eq!(resolve_route(Some(Route::TreeAdmin), None), Route::Login);
        assert_eq!(resolve_route(None, None), Route::Login);
    }

    #[test]
    fn test_allowed_role_reaches_page() {
        let profiles = sysa();
        assert_eq!(resolve_route(Some(Route::TreeAdmin), Some(&profiles)), Route::TreeAdmin);
    }

    #[test]
    fn test_denied_or_unknown_redirects_to_dashboard() {
        let profiles = oper();
        assert_eq!(resolve_route(Some(Route::TreeAdmin), Some(&profiles)), Route::Dashboard);
        assert_eq!(resolve_route(None, Some(&profiles)), Route::Dashboard);
    }
}
