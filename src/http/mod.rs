//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request ID assigned (UUID v4) and echoed back
//!     → auth::authenticate (Principal attached)
//!     → dispatch (RouteTable lookup, gated handler)
//!     → Send to client
//! ```

pub mod server;

pub use server::{AppState, HttpServer};

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";
