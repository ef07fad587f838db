// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export photo, contact and static content models

pub mod contact;
pub mod content;
pub mod photo;

pub use contact::*;
pub use photo::*;
