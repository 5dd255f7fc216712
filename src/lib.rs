//! NAIN marketing site, client-side rendered with Leptos.
//!
//! Every page is a stateless view over the static records in [`content`];
//! the only state in the system is the router's current path and the nav
//! drawer's open flag.

pub mod app;
pub mod content;
pub mod pages;
pub mod routes;
pub mod sections;
pub mod ui;
