//! HR service
//!
//! Validated request/response contract layer for the HR frontend: clock
//! entries, teams, and password resets, plus the development tooling the
//! frontend dev setup expects (daily dev log file, `/api` reverse proxy).

pub mod error;
pub mod extract;
pub mod models;
pub mod routes;
pub mod validation;

#[cfg(feature = "devtools")]
pub mod devlog;
#[cfg(feature = "devtools")]
pub mod proxy;
