//! Route Permissions
//!
//! Static tables gating route and menu visibility by profile role names.
//! Unknown paths are denied (fail closed).

/// Route with the role names allowed to open it
pub struct RoutePermission {
    pub path: &'static str,
    pub allowed_profiles: &'static [&'static str],
}

/// Sidebar menu entry
pub struct MenuItem {
    pub text: &'static str,
    pub path: &'static str,
    pub allowed_profiles: &'static [&'static str],
}

pub const ROUTE_PERMISSIONS: &[RoutePermission] = &[
    RoutePermission { path: "/cadastrar-tarefa", allowed_profiles: &["SYSA"] },
    RoutePermission { path: "/gerenciar-arvores", allowed_profiles: &["SYSA"] },
    RoutePermission { path: "/dashboard", allowed_profiles: &["SYSA"] },
    RoutePermission { path: "/users", allowed_profiles: &["SYSA"] },
    RoutePermission { path: "/settings", allowed_profiles: &["SYSA"] },
];

pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem { text: "Gerenciar Tarefa", path: "/cadastrar-tarefa", allowed_profiles: &["SYSA"] },
    MenuItem { text: "Gerenciar Árvores", path: "/gerenciar-arvores", allowed_profiles: &["SYSA"] },
    MenuItem { text: "Dashboard", path: "/dashboard", allowed_profiles: &["SYSA"] },
    MenuItem { text: "Usuários", path: "/users", allowed_profiles: &["SYSA"] },
    MenuItem { text: "Configurações", path: "/settings", allowed_profiles: &["SYSA"] },
];

/// True iff the path is in the table and the session's roles intersect its
/// allow-list. Paths outside the table are always denied.
pub fn has_route_access(path: &str, profiles: &[String]) -> bool {
    let Some(route) = ROUTE_PERMISSIONS.iter().find(|r| r.path == path) else {
        return false;
    };
    route
        .allowed_profiles
        .iter()
        .any(|allowed| profiles.iter().any(|p| p == allowed))
}

/// Menu entries visible to the given roles
pub fn allowed_menu_items(profiles: &[String]) -> Vec<&'static MenuItem> {
    MENU_ITEMS
        .iter()
        .filter(|item| {
            item.allowed_profiles
                .iter()
                .any(|allowed| profiles.iter().any(|p| p == allowed))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_access_requires_intersection() {
        assert!(has_route_access("/gerenciar-arvores", &roles(&["SYSA"])));
        assert!(has_route_access("/cadastrar-tarefa", &roles(&["OPER", "SYSA"])));
        assert!(!has_route_access("/gerenciar-arvores", &roles(&["OPER"])));
        assert!(!has_route_access("/gerenciar-arvores", &roles(&[])));
    }

    #[test]
    fn test_unknown_paths_fail_closed() {
        assert!(!has_route_access("/nao-existe", &roles(&["SYSA"])));
        assert!(!has_route_access("", &roles(&["SYSA"])));
    }

    #[test]
    fn test_menu_filtering() {
        assert_eq!(allowed_menu_items(&roles(&["SYSA"])).len(), MENU_ITEMS.len());
        assert!(allowed_menu_items(&roles(&["OPER"])).is_empty());
    }
}
