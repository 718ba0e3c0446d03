//! Fixed top navigation bar.
//!
//! Owns two independent UI flags (role dropdown, mobile menu) and the global
//! pointer-down / resize listeners that dismiss them.

mod links;
mod listeners;
mod state;
mod view;

pub use state::{Breakpoint, Containment, NavState};
pub use view::Navbar;
