// src/views/mod.rs
// DOCUMENTATION: Server-rendered HTML
// PURPOSE: Page markup, kept separate from request handling

pub mod admin;
pub mod gallery;
pub mod layout;
pub mod pages;

/// Site stylesheet served at /static/site.css
pub const SITE_CSS: &str = include_str!("../../static/site.css");
