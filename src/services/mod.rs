// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export store, gallery and admin components

pub mod admin_editor;
pub mod gallery;
#[cfg(test)]
pub mod memory_store;
pub mod photo_store;
pub mod storage_client;
pub mod upload;

pub use admin_editor::*;
pub use gallery::*;
pub use photo_store::*;
pub use storage_client::*;
