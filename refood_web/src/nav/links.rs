//! Static link tables rendered by the navbar.

use crate::routes::AppRoute;

/// Which part of the navbar a link lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Desktop link row. Always visible above the breakpoint.
    Desktop,
    /// Role panel under "Login/Sign Up".
    Dropdown,
    /// Stacked list shown when the hamburger is open.
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub route: AppRoute,
    pub label: &'static str,
    pub placement: Placement,
}

impl NavLink {
    const fn new(route: AppRoute, label: &'static str, placement: Placement) -> Self {
        Self {
            route,
            label,
            placement,
        }
    }

    pub const fn href(&self) -> &'static str {
        self.route.path()
    }
}

pub const DESKTOP_LINKS: [NavLink; 4] = [
    NavLink::new(AppRoute::Home, "Home", Placement::Desktop),
    NavLink::new(AppRoute::Services, "Services", Placement::Desktop),
    NavLink::new(AppRoute::About, "About", Placement::Desktop),
    NavLink::new(AppRoute::Contact, "Contact", Placement::Desktop),
];

pub const ROLE_LINKS: [NavLink; 3] = [
    NavLink::new(AppRoute::Admin, "Admin", Placement::Dropdown),
    NavLink::new(AppRoute::Ngo, "NGO", Placement::Dropdown),
    NavLink::new(AppRoute::User, "User", Placement::Dropdown),
];

pub const MOBILE_LINKS: [NavLink; 7] = [
    NavLink::new(AppRoute::Home, "Home", Placement::Mobile),
    NavLink::new(AppRoute::Services, "Services", Placement::Mobile),
    NavLink::new(AppRoute::About, "About", Placement::Mobile),
    NavLink::new(AppRoute::Contact, "Contact", Placement::Mobile),
    NavLink::new(AppRoute::Admin, "Admin Login", Placement::Mobile),
    NavLink::new(AppRoute::Ngo, "NGO Login", Placement::Mobile),
    NavLink::new(AppRoute::User, "User Login", Placement::Mobile),
];
