//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check user directory integrity (unique ids and tokens)
//! - Validate value ranges (timeouts > 0, password lifetime > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GateConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::GateConfig;

/// Upper bound on `password_expiration.max_age_days` (100 years).
pub const MAX_PASSWORD_AGE_DAYS: i64 = 36_500;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("whitelist entry {0:?} must be an absolute path")]
    RelativeWhitelistPath(String),

    #[error("duplicate user id {0}")]
    DuplicateUserId(u64),

    #[error("user {0} has an empty token")]
    EmptyToken(u64),

    #[error("token of user {0} is already assigned to another user")]
    DuplicateToken(u64),

    #[error("password_expiration.max_age_days must be positive, got {0}")]
    NonPositiveMaxAge(i64),

    #[error("password_expiration.max_age_days must be at most {}, got {}", MAX_PASSWORD_AGE_DAYS, .0)]
    MaxAgeTooLarge(i64),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroRequestTimeout,
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &GateConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for entry in &config.password_expiration.whitelist {
        if !entry.starts_with('/') {
            errors.push(ValidationError::RelativeWhitelistPath(entry.clone()));
        }
    }

    let max_age_days = config.password_expiration.max_age_days;
    if max_age_days <= 0 {
        errors.push(ValidationError::NonPositiveMaxAge(max_age_days));
    } else if max_age_days > MAX_PASSWORD_AGE_DAYS {
        errors.push(ValidationError::MaxAgeTooLarge(max_age_days));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    let mut ids = HashSet::new();
    let mut tokens = HashSet::new();
    for user in &config.users {
        if !ids.insert(user.id) {
            errors.push(ValidationError::DuplicateUserId(user.id));
        }
        if user.token.is_empty() {
            errors.push(ValidationError::EmptyToken(user.id));
        } else if !tokens.insert(user.token.as_str()) {
            errors.push(ValidationError::DuplicateToken(user.id));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
