//! Authentication subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → middleware.rs (Authorization: Bearer <token>)
//!     → directory.rs (token → Principal)
//!     → Principal inserted into request extensions, or request stays anonymous
//! ```
//!
//! # Design Decisions
//! - Unknown or missing tokens never reject; views decide what anonymous users see
//! - The directory is built from config and shared via Arc

pub mod directory;
pub mod middleware;

use chrono::{DateTime, Utc};
use serde::Serialize;

pub use directory::UserDirectory;
pub use middleware::authenticate;

/// Authenticated user attached to a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Principal {
    pub id: u64,
    pub username: String,
    pub password_expires: DateTime<Utc>,
}
