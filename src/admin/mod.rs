//! Admin interface.
//!
//! # Data Flow
//! ```text
//! AdminSite::urls()             (route tree of the admin views)
//!     → routing::wrap_tree      (every leaf behind the password gate)
//!     → urls::build_routes      (strict password_change overrides first)
//!     → RouteTable mounted at /admin/
//! ```

pub mod forms;
pub mod site;
pub mod urls;
pub mod views;

use std::sync::Arc;

use chrono::Duration;

use crate::auth::UserDirectory;
use crate::gate::Clock;
use crate::routing::RouteNode;

pub use forms::PasswordChangeForm;
pub use site::DefaultAdminSite;
pub use urls::{admin_routes, build_routes};

/// Source of the admin interface's route tree.
pub trait AdminSite: Send + Sync {
    fn urls(&self) -> RouteNode;
}

/// Shared collaborators handed to admin views.
#[derive(Debug, Clone)]
pub struct AdminContext {
    pub directory: Arc<UserDirectory>,
    pub clock: Arc<dyn Clock>,
    /// Lifetime granted to a password on a successful change.
    pub password_max_age: Duration,
}
