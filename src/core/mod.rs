//! Core domain logic for change classification
//!
//! Pure business logic; version control is reached only through a port trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Group, GroupSet, ChangedFile, results)
//! - `services/` - Enumeration, classification and checking
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
