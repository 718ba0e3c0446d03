//! Route table and in-page anchors.
//!
//! Routes are client-side paths handled by `leptos_router`; anchors are
//! element ids on the landing page used for same-page scrolling.

/// Client-side routes reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Services,
    About,
    Contact,
    Admin,
    Ngo,
    User,
}

impl AppRoute {
    pub const ALL: [AppRoute; 7] = [
        AppRoute::Home,
        AppRoute::Services,
        AppRoute::About,
        AppRoute::Contact,
        AppRoute::Admin,
        AppRoute::Ngo,
        AppRoute::User,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Services => "/services",
            AppRoute::About => "/about",
            AppRoute::Contact => "/contact",
            AppRoute::Admin => "/admin",
            AppRoute::Ngo => "/ngo",
            AppRoute::User => "/user",
        }
    }

    /// Whether this route should be highlighted for `current_path`.
    ///
    /// The root only matches exactly; every other route also matches its
    /// nested paths (`/services/pickup`), but never a sibling that merely
    /// shares a prefix (`/servicesx`).
    pub fn is_active(self, current_path: &str) -> bool {
        let path = self.path();
        if self == AppRoute::Home {
            return current_path == path;
        }
        match current_path.strip_prefix(path) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// Same-page anchors assigned to landing page sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    Home,
    About,
    Track,
    Form,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 5] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Track,
        Anchor::Form,
        Anchor::Contact,
    ];

    /// Element id (without the leading `#`).
    pub const fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Track => "track",
            Anchor::Form => "form",
            Anchor::Contact => "contact",
        }
    }

    pub const fn href(self) -> &'static str {
        match self {
            Anchor::Home => "#home",
            Anchor::About => "#about",
            Anchor::Track => "#track",
            Anchor::Form => "#form",
            Anchor::Contact => "#contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn root_matches_only_exactly() {
        assert!(AppRoute::Home.is_active("/"));
        assert!(!AppRoute::Home.is_active("/services"));
        assert!(!AppRoute::Home.is_active("/admin"));
    }

    #[test]
    fn nested_paths_keep_parent_active() {
        assert!(AppRoute::Services.is_active("/services"));
        assert!(AppRoute::Services.is_active("/services/pickup"));
        assert!(!AppRoute::Services.is_active("/servicesx"));
        assert!(!AppRoute::Services.is_active("/"));
    }

    #[test]
    fn exactly_one_route_active_for_each_known_path() {
        for route in AppRoute::ALL {
            let active: Vec<_> = AppRoute::ALL
                .into_iter()
                .filter(|candidate| candidate.is_active(route.path()))
                .collect();
            assert_eq!(active, vec![route]);
        }
    }

    #[test]
    fn anchor_href_is_hash_of_id() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.href(), format!("#{}", anchor.id()));
        }
    }
}
