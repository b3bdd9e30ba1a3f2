//! Password-expiration gate for an admin web interface.
//!
//! Every admin route is wrapped so that a signed-in user whose password has
//! expired is redirected to their password-change page. The
//! `password_change` and `password_change_done` routes are overridden to use
//! a stricter password form.

pub mod admin;
pub mod auth;
pub mod config;
pub mod gate;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::GateConfig;
pub use gate::PasswordGate;
pub use http::HttpServer;
