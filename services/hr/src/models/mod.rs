//! HR service models

pub mod clock;
pub mod password;
pub mod team;
pub mod user;

// Re-export for convenience
pub use clock::{ClockEntry, ClockEntryInput, ClockEntryResponse};
pub use password::{ConfirmPasswordReset, RequestPasswordReset};
pub use team::{CreateTeamRequest, Team, TeamResponse, UpdateTeamRequest};
pub use user::{User, UserSummary};
