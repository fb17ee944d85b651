//! Client-side route table

/// Pages reachable by URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    /// Login / register form at `/`
    Auth,
    /// Vigat Bahee ledger at `/bahee`, nested under the root layout
    Bahee,
}

impl AppRoute {
    pub const ALL: [AppRoute; 2] = [AppRoute::Auth, AppRoute::Bahee];

    /// Absolute path of the route
    pub fn path(self) -> &'static str {
        match self {
            AppRoute::Auth => "/",
            AppRoute::Bahee => "/bahee",
        }
    }

    /// Document title shown while the route is active
    pub fn title(self) -> &'static str {
        match self {
            AppRoute::Auth => "Vigat Bahee - Sign in",
            AppRoute::Bahee => "Vigat Bahee",
        }
    }

    /// Matches a request path, ignoring a trailing slash and any query or fragment
    pub fn resolve(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|r| r.path() == normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_routes() {
        assert_eq!(AppRoute::resolve("/"), Some(AppRoute::Auth));
        assert_eq!(AppRoute::resolve(""), Some(AppRoute::Auth));
        assert_eq!(AppRoute::resolve("/bahee"), Some(AppRoute::Bahee));
        assert_eq!(AppRoute::resolve("/bahee/"), Some(AppRoute::Bahee));
        assert_eq!(AppRoute::resolve("/bahee?page=2"), Some(AppRoute::Bahee));
    }

    #[test]
    fn test_resolve_unknown_routes() {
        assert_eq!(AppRoute::resolve("/login"), None);
        assert_eq!(AppRoute::resolve("/bahee/entry"), None);
        assert_eq!(AppRoute::resolve("/baheex"), None);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::resolve(route.path()), Some(route));
        }
    }
}
