//! Route handlers.
//!
//! A `Handler` is a view plus, once wrapped, the password gate that runs
//! in front of it.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header::LOCATION, Request, StatusCode},
    response::{IntoResponse, Response},
};
use futures_util::future::BoxFuture;

use crate::gate::{GateDecision, PasswordGate};
use crate::routing::PathParams;

type ViewFn = dyn Fn(Request<Body>, PathParams) -> BoxFuture<'static, Response> + Send + Sync;

/// Shareable async endpoint.
#[derive(Clone)]
pub struct View(Arc<ViewFn>);

impl View {
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(Request<Body>, PathParams) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        Self(Arc::new(
            move |req: Request<Body>, params: PathParams| -> BoxFuture<'static, Response> {
                Box::pin(f(req, params))
            },
        ))
    }

    pub async fn call(&self, request: Request<Body>, params: PathParams) -> Response {
        (self.0)(request, params).await
    }

    /// Whether both values refer to the same view.
    pub fn ptr_eq(&self, other: &View) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("View")
    }
}

#[derive(Clone, Debug)]
pub struct Handler {
    view: View,
    gate: Option<Arc<PasswordGate>>,
}

impl Handler {
    pub fn new(view: View) -> Self {
        Self { view, gate: None }
    }

    /// This handler with `gate` in front of it. A handler that is already
    /// guarded is returned unchanged.
    pub fn guarded(&self, gate: &Arc<PasswordGate>) -> Self {
        if self.gate.is_some() {
            return self.clone();
        }
        Self {
            view: self.view.clone(),
            gate: Some(Arc::clone(gate)),
        }
    }

    pub fn is_guarded(&self) -> bool {
        self.gate.is_some()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub async fn call(&self, request: Request<Body>, params: PathParams) -> Response {
        if let Some(gate) = &self.gate {
            if let GateDecision::Redirect { location } = gate.check(&request) {
                return (StatusCode::FOUND, [(LOCATION, location)]).into_response();
            }
        }
        self.view.call(request, params).await
    }
}

impl From<View> for Handler {
    fn from(view: View) -> Self {
        Handler::new(view)
    }
}
