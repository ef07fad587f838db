// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod admin;
pub mod assets;
pub mod gallery;
pub mod health;
pub mod pages;

pub use admin::config as admin_config;
pub use assets::config as assets_config;
pub use gallery::config as gallery_config;
pub use health::config as health_config;
pub use pages::config as pages_config;
