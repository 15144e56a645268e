//! Route table and auth gating
//!
//! The table is static data. Which entries are reachable depends only on
//! whether a user is signed in; lookups walk the visible entries in table
//! order and fall back to the catch-all route.

/// Pages the shell can show
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppRoute {
    #[default]
    Main,
    About,
    Profile,
    NotFound,
}

impl AppRoute {
    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Main => "Main",
            AppRoute::About => "About",
            AppRoute::Profile => "Profile",
            AppRoute::NotFound => "Not found",
        }
    }
}

/// One entry of the route table
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub route: AppRoute,
    pub auth_only: bool,
    /// Shown in the sidebar
    pub in_sidebar: bool,
}

/// Matches any path
pub const FALLBACK_PATH: &str = "*";

pub const ROUTE_CONFIG: &[RouteDescriptor] = &[
    RouteDescriptor {
        path: "/",
        route: AppRoute::Main,
        auth_only: false,
        in_sidebar: true,
    },
    RouteDescriptor {
        path: "/about",
        route: AppRoute::About,
        auth_only: false,
        in_sidebar: true,
    },
    RouteDescriptor {
        path: "/profile",
        route: AppRoute::Profile,
        auth_only: true,
        in_sidebar: true,
    },
    RouteDescriptor {
        path: FALLBACK_PATH,
        route: AppRoute::NotFound,
        auth_only: false,
        in_sidebar: false,
    },
];

/// Entries of `table` reachable with the given auth state
pub fn visible_routes(table: &[RouteDescriptor], is_auth: bool) -> Vec<RouteDescriptor> {
    table
        .iter()
        .filter(|route| !route.auth_only || is_auth)
        .copied()
        .collect()
}

/// First visible entry whose path equals `path`, else the catch-all
pub fn resolve(visible: &[RouteDescriptor], path: &str) -> AppRoute {
    let path = normalize_path(path);
    visible
        .iter()
        .find(|route| route.path == path)
        .or_else(|| visible.iter().find(|route| route.path == FALLBACK_PATH))
        .map(|route| route.route)
        .unwrap_or(AppRoute::NotFound)
}

/// Trim whitespace and trailing slashes, ensure a leading slash
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::from("/")
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Visible routes memoized against the auth flag
#[derive(Clone, Debug)]
pub struct Router {
    table: &'static [RouteDescriptor],
    is_auth: bool,
    visible: Vec<RouteDescriptor>,
    recomputed: usize,
}

impl Router {
    pub fn new(table: &'static [RouteDescriptor], is_auth: bool) -> Self {
        Router {
            table,
            is_auth,
            visible: visible_routes(table, is_auth),
            recomputed: 1,
        }
    }

    /// Recompute the visible set if the auth flag changed
    pub fn set_auth(&mut self, is_auth: bool) {
        if self.is_auth != is_auth {
            tracing::debug!(is_auth, "Recomputing visible routes");
            self.is_auth = is_auth;
            self.visible = visible_routes(self.table, is_auth);
            self.recomputed += 1;
        }
    }

    pub fn resolve(&self, path: &str) -> AppRoute {
        resolve(&self.visible, path)
    }

    /// Routes listed in the sidebar
    pub fn sidebar_items(&self) -> Vec<RouteDescriptor> {
        self.visible.iter().filter(|r| r.in_sidebar).copied().collect()
    }

    pub fn is_visible(&self, route: AppRoute) -> bool {
        self.visible.iter().any(|r| r.route == route)
    }

    /// Number of times the visible set has been computed
    pub fn recompute_count(&self) -> usize {
        self.recomputed
    }
}
