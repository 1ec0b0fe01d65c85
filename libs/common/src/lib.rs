//! Common library for the Crewclock application
//!
//! This crate provides the functionality shared across Crewclock services:
//! the field validation rule set and the violation report surfaced to
//! clients when a payload is rejected.
//!
//! ```
//! use common::validation;
//!
//! assert!(validation::non_blank("Team name", "Platform").is_ok());
//! assert!(validation::email_format("user@example.com").is_ok());
//! assert!(validation::password_composition("Abcdefghijk1!").is_ok());
//! ```

pub mod error;
pub mod validation;
