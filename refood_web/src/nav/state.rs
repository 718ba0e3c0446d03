//! Navbar interaction state.
//!
//! Two independent flags: the role dropdown and the mobile menu. Nothing in
//! here touches the DOM; the view translates browser events into calls on
//! [`NavState`] so every transition is testable natively.

use super::links::{NavLink, Placement};

/// Viewport width (CSS pixels) at which the desktop layout takes over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoint(u32);

impl Breakpoint {
    /// Tailwind's `md` breakpoint, which the markup's `md:` classes use.
    pub const DESKTOP: Breakpoint = Breakpoint(768);

    pub const fn new(px: u32) -> Self {
        Self(px)
    }

    pub const fn px(self) -> u32 {
        self.0
    }

    pub fn is_desktop(self, viewport_width: f64) -> bool {
        viewport_width >= f64::from(self.0)
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self::DESKTOP
    }
}

/// Where a pointer-down landed relative to the dropdown region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    Inside,
    Outside,
    /// The region element is not mounted (yet).
    Unattached,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    dropdown_open: bool,
    mobile_menu_open: bool,
}

impl NavState {
    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn toggle_dropdown(&mut self) {
        self.dropdown_open = !self.dropdown_open;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Close the dropdown when a pointer-down lands outside of it.
    ///
    /// Returns whether the state changed.
    pub fn handle_outside_click(&mut self, target: Containment) -> bool {
        if self.dropdown_open && target == Containment::Outside {
            self.dropdown_open = false;
            return true;
        }
        false
    }

    /// Collapse the mobile menu once the viewport reaches desktop width.
    ///
    /// Returns whether the state changed.
    pub fn handle_resize(&mut self, viewport_width: f64, breakpoint: Breakpoint) -> bool {
        if breakpoint.is_desktop(viewport_width) && self.mobile_menu_open {
            self.mobile_menu_open = false;
            return true;
        }
        false
    }

    /// Close whatever contains `link` and hand back the href to follow.
    pub fn select_link(&mut self, link: &NavLink) -> &'static str {
        match link.placement {
            Placement::Dropdown => self.dropdown_open = false,
            Placement::Mobile => self.mobile_menu_open = false,
            Placement::Desktop => {}
        }
        link.href()
    }
}
