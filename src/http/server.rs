//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Assemble the gated admin route table at startup
//! - Create Axum Router with the dispatch fallback
//! - Wire up middleware (request ID, tracing, timeout, auth)
//! - Bind server to listener

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use chrono::TimeDelta;
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::admin::{admin_routes, AdminContext, AdminSite, DefaultAdminSite};
use crate::auth::{authenticate, UserDirectory};
use crate::config::GateConfig;
use crate::gate::{Clock, PasswordGate, SystemClock, ADMIN_MOUNT};
use crate::http::X_REQUEST_ID;
use crate::lifecycle::signals::shutdown_signal;
use crate::observability::metrics;
use crate::routing::{ResolvedRoute, RouteTable};

/// Application state injected into the dispatcher.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
}

/// HTTP server for the gated admin interface.
pub struct HttpServer {
    router: Router,
    config: GateConfig,
    routes: Arc<RouteTable>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GateConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Create a server whose password expiry checks use `clock`.
    pub fn with_clock(config: GateConfig, clock: Arc<dyn Clock>) -> Self {
        let directory = Arc::new(UserDirectory::from_config(&config.users));
        let gate = Arc::new(PasswordGate::new(&config.password_expiration, clock.clone()));
        let ctx = AdminContext {
            directory: directory.clone(),
            clock,
            password_max_age: TimeDelta::try_days(config.password_expiration.max_age_days)
                .unwrap_or(TimeDelta::MAX),
        };

        let site = config.admin.installed.then(|| DefaultAdminSite::new(ctx.clone()));
        if site.is_none() {
            tracing::warn!("Admin application not installed, no routes exposed");
        }
        let nodes = admin_routes(site.as_ref().map(|s| s as &dyn AdminSite), &gate, &ctx);
        let routes = Arc::new(RouteTable::new(ADMIN_MOUNT, &nodes));

        tracing::info!(
            routes = routes.len(),
            whitelist = config.password_expiration.whitelist.len(),
            "Admin route table assembled"
        );

        let state = AppState {
            routes: routes.clone(),
        };
        let router = Self::build_router(&config, state, directory);
        Self {
            router,
            config,
            routes,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &GateConfig, state: AppState, directory: Arc<UserDirectory>) -> Router {
        Router::new()
            .fallback(dispatch)
            .with_state(state)
            .layer(middleware::from_fn_with_state(directory, authenticate))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                let request_id = request
                    .headers()
                    .get(X_REQUEST_ID)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("unknown");
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    path = %request.uri().path(),
                    request_id = %request_id,
                )
            }))
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn routes(&self) -> &Arc<RouteTable> {
        &self.routes
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }
}

/// Resolve the request against the route table and run the matched handler.
async fn dispatch(State(state): State<AppState>, request: Request<Body>) -> Response {
    let Some(ResolvedRoute { entry, params }) = state.routes.resolve(request.uri().path()) else {
        tracing::debug!(path = %request.uri().path(), "No route matched");
        metrics::record_unmatched();
        return (StatusCode::NOT_FOUND, "Not Found").into_response();
    };

    let handler = entry.handler.clone();
    handler.call(request, params).await
}
