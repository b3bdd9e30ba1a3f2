//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GateConfig (validated, immutable)
//!     → shared via Arc to the gate and the admin site
//! ```
//!
//! # Design Decisions
//! - Config is loaded once at startup and never mutated
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::AdminConfig;
pub use schema::GateConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::PasswordExpirationConfig;
pub use schema::UserConfig;
