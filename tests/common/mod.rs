//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use admin_gate::config::{GateConfig, UserConfig};
use admin_gate::gate::FixedClock;
use admin_gate::HttpServer;
use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use chrono::{DateTime, Duration, TimeZone, Utc};
use tower::ServiceExt;

pub const FRESH_TOKEN: &str = "fresh-token";
pub const STALE_TOKEN: &str = "stale-token";
pub const FRESH_ID: u64 = 1;
pub const STALE_ID: u64 = 2;

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap()
}

/// Config with one user whose password is valid and one whose password expired.
pub fn config() -> GateConfig {
    let mut config = GateConfig::default();
    config.users = vec![
        UserConfig {
            id: FRESH_ID,
            username: "alice".into(),
            token: FRESH_TOKEN.into(),
            password_expires: now() + Duration::days(30),
        },
        UserConfig {
            id: STALE_ID,
            username: "bob".into(),
            token: STALE_TOKEN.into(),
            password_expires: now() - Duration::days(1),
        },
    ];
    config
}

pub fn app(config: GateConfig) -> Router {
    HttpServer::with_clock(config, Arc::new(FixedClock::new(now()))).router()
}

pub async fn get(app: &Router, path: &str, token: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    app.clone().oneshot(builder.body(Body::empty()).unwrap()).await.unwrap()
}

pub async fn post_password(app: &Router, path: &str, token: &str, p1: &str, p2: &str) -> Response<Body> {
    let body = format!("new_password1={}&new_password2={}", p1, p2);
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

pub async fn json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
