// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export the photo table repository

pub mod photo_repository;

pub use photo_repository::*;
