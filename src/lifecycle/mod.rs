//! Lifecycle management.
//!
//! Ctrl+C stops accepting connections and lets in-flight requests finish.

pub mod signals;
