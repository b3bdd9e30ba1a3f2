//! Allow-or-redirect decision.
//!
//! Rules are evaluated in order and the first match wins:
//! 1. whitelisted path
//! 2. no authenticated principal
//! 3. the principal's own password page
//! 4. password still valid (expiry strictly after now)
//!
//! Anything else redirects to the principal's password page.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::auth::Principal;
use crate::gate::paths::user_password_change_path;

/// Per-request inputs to the gate.
#[derive(Debug, Clone, Copy)]
pub struct GateContext<'a> {
    pub path: &'a str,
    pub principal: Option<&'a Principal>,
}

/// Why a request was let through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowReason {
    Whitelisted,
    Anonymous,
    OwnPasswordChange,
    PasswordValid,
}

/// Outcome of the gate for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow(AllowReason),
    Redirect { location: String },
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allow(_))
    }

    /// Metric label for this decision.
    pub fn outcome(&self) -> &'static str {
        match self {
            GateDecision::Allow(AllowReason::Whitelisted) => "whitelisted",
            GateDecision::Allow(AllowReason::Anonymous) => "anonymous",
            GateDecision::Allow(AllowReason::OwnPasswordChange) => "own_password_change",
            GateDecision::Allow(AllowReason::PasswordValid) => "password_valid",
            GateDecision::Redirect { .. } => "redirect",
        }
    }
}

pub fn decide(ctx: &GateContext<'_>, whitelist: &HashSet<String>, now: DateTime<Utc>) -> GateDecision {
    if whitelist.contains(ctx.path) {
        return GateDecision::Allow(AllowReason::Whitelisted);
    }

    let Some(principal) = ctx.principal else {
        return GateDecision::Allow(AllowReason::Anonymous);
    };

    let password_path = user_password_change_path(principal.id);
    if ctx.path == password_path {
        return GateDecision::Allow(AllowReason::OwnPasswordChange);
    }

    if principal.password_expires > now {
        return GateDecision::Allow(AllowReason::PasswordValid);
    }

    GateDecision::Redirect { location: password_path }
}
