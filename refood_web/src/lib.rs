//! # refood-web
//!
//! ReFood landing page, rendered client-side with Leptos 0.8.
//!
//! The page is a fixed navbar over a static stack of sections. The only
//! interactive state is in [`nav`]: a role dropdown and a mobile menu, each
//! dismissed by outside clicks, viewport resizes or link selection.
//!
//! - [`shell`] - router and section order
//! - [`nav`] - navbar state machine and view
//! - [`routes`] - route paths and in-page anchors
//! - [`config`] - embedded `site.toml`
//!
//! Developed by The ReFood Team (c)2025

pub mod config;
pub mod error;
pub mod logging;
pub mod nav;
pub mod routes;
pub mod sections;
pub mod shell;

pub use config::SiteConfig;
pub use error::SiteError;
pub use shell::App;
