//! Password-expiration gate.
//!
//! # Data Flow
//! ```text
//! Incoming request (path, Principal extension)
//!     → PasswordGate::check
//!     → decision.rs (whitelist → anonymous → own password page → expiry)
//!     → GateDecision::Allow(reason) | GateDecision::Redirect { location }
//! ```
//!
//! # Design Decisions
//! - The decision is a pure function of its inputs; the clock is injected
//! - Whitelist is built once at startup and only read afterwards
//! - Unauthenticated requests pass; the wrapped view enforces auth itself

pub mod clock;
pub mod decision;
pub mod paths;

use std::collections::HashSet;
use std::sync::Arc;

use axum::http::Request;

use crate::auth::Principal;
use crate::config::PasswordExpirationConfig;
use crate::observability::metrics;

pub use clock::{Clock, FixedClock, SystemClock};
pub use decision::{decide, AllowReason, GateContext, GateDecision};
pub use paths::{user_password_change_path, ADMIN_MOUNT};

/// Guard run in front of every gated admin view.
#[derive(Debug)]
pub struct PasswordGate {
    whitelist: HashSet<String>,
    clock: Arc<dyn Clock>,
}

impl PasswordGate {
    pub fn new(config: &PasswordExpirationConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            whitelist: config.whitelist.iter().cloned().collect(),
            clock,
        }
    }

    /// Decide whether `request` may reach the wrapped view.
    pub fn check<B>(&self, request: &Request<B>) -> GateDecision {
        let ctx = GateContext {
            path: request.uri().path(),
            principal: request.extensions().get::<Principal>(),
        };
        let decision = decide(&ctx, &self.whitelist, self.clock.now());

        match &decision {
            GateDecision::Allow(reason) => {
                tracing::debug!(path = %ctx.path, reason = ?reason, "Gate allowed request");
            }
            GateDecision::Redirect { location } => {
                tracing::info!(
                    path = %ctx.path,
                    user_id = ctx.principal.map(|p| p.id),
                    location = %location,
                    "Password expired, redirecting to password change"
                );
            }
        }
        metrics::record_gate_decision(decision.outcome());

        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use chrono::{Duration, TimeZone, Utc};

    fn gate() -> PasswordGate {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
        PasswordGate::new(
            &PasswordExpirationConfig::default(),
            Arc::new(FixedClock::new(now)),
        )
    }

    fn request(path: &str, principal: Option<Principal>) -> Request<Body> {
        let mut req = Request::builder().uri(path).body(Body::empty()).unwrap();
        if let Some(p) = principal {
            req.extensions_mut().insert(p);
        }
        req
    }

    #[test]
    fn test_reads_principal_from_extensions() {
        let gate = gate();
        let expired = Principal {
            id: 4,
            username: "kim".into(),
            password_expires: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap() - Duration::days(1),
        };

        assert_eq!(
            gate.check(&request("/admin/", Some(expired))),
            GateDecision::Redirect { location: "/admin/auth/user/4/password/".into() }
        );
        assert_eq!(
            gate.check(&request("/admin/", None)),
            GateDecision::Allow(AllowReason::Anonymous)
        );
    }

    #[test]
    fn test_query_string_is_not_part_of_path() {
        let gate = gate();
        assert_eq!(
            gate.check(&request("/admin/logout/?next=/admin/", None)),
            GateDecision::Allow(AllowReason::Whitelisted)
        );
    }
}
