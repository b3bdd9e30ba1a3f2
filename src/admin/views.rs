//! Admin views.
//!
//! Views enforce authentication themselves: anonymous requests are sent to
//! the login page. The password gate in front of them never rejects
//! anonymous users.

use axum::{
    body::Body,
    extract::{Form, FromRequest},
    http::{header::LOCATION, Method, Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use url::form_urlencoded;

use crate::admin::forms::{PasswordChangeForm, PasswordChangeSubmission};
use crate::admin::AdminContext;
use crate::auth::Principal;
use crate::gate::ADMIN_MOUNT;
use crate::routing::{PathParams, View};

fn current_user(request: &Request<Body>) -> Option<Principal> {
    request.extensions().get::<Principal>().cloned()
}

fn redirect(location: String) -> Response {
    (StatusCode::FOUND, [(LOCATION, location)]).into_response()
}

fn login_redirect(request: &Request<Body>) -> Response {
    let next: String = form_urlencoded::byte_serialize(request.uri().path().as_bytes()).collect();
    redirect(format!("{}login/?next={}", ADMIN_MOUNT, next))
}

fn user_id_param(params: &PathParams) -> Option<u64> {
    params.get("id").and_then(|id| id.parse().ok())
}

pub fn index(ctx: AdminContext) -> View {
    View::new(move |request, _params| {
        let ctx = ctx.clone();
        async move {
            let Some(user) = current_user(&request) else {
                return login_redirect(&request);
            };
            Json(json!({
                "user": user.username,
                "password_expires": user.password_expires,
                "users": ctx.directory.list().len(),
            }))
            .into_response()
        }
    })
}

pub fn login() -> View {
    View::new(|_request, _params| async {
        "Authenticate with an `Authorization: Bearer <token>` header.".into_response()
    })
}

pub fn logout() -> View {
    View::new(|_request, _params| async { "Logged out.".into_response() })
}

/// Password change for the requesting user.
pub fn password_change(form: PasswordChangeForm, ctx: AdminContext) -> View {
    View::new(move |request, _params| {
        let ctx = ctx.clone();
        async move {
            let Some(user) = current_user(&request) else {
                return login_redirect(&request);
            };
            let done = format!("{}password_change/done/", ADMIN_MOUNT);
            change_password(request, form, user.id, &ctx, done).await
        }
    })
}

pub fn password_change_done() -> View {
    View::new(|request, _params| async move {
        if current_user(&request).is_none() {
            return login_redirect(&request);
        }
        "Your password was changed.".into_response()
    })
}

pub fn user_changelist(ctx: AdminContext) -> View {
    View::new(move |request, _params| {
        let ctx = ctx.clone();
        async move {
            if current_user(&request).is_none() {
                return login_redirect(&request);
            }
            Json(ctx.directory.list()).into_response()
        }
    })
}

pub fn user_change(ctx: AdminContext) -> View {
    View::new(move |request, params| {
        let ctx = ctx.clone();
        async move {
            if current_user(&request).is_none() {
                return login_redirect(&request);
            }
            match user_id_param(&params).and_then(|id| ctx.directory.get(id)) {
                Some(user) => Json(user).into_response(),
                None => StatusCode::NOT_FOUND.into_response(),
            }
        }
    })
}

/// Password change of the user named in the path. Users may only change
/// their own password here.
pub fn user_password_change(form: PasswordChangeForm, ctx: AdminContext) -> View {
    View::new(move |request, params| {
        let ctx = ctx.clone();
        async move {
            let Some(user) = current_user(&request) else {
                return login_redirect(&request);
            };
            let Some(target) = user_id_param(&params).filter(|id| ctx.directory.get(*id).is_some()) else {
                return StatusCode::NOT_FOUND.into_response();
            };
            if target != user.id {
                tracing::warn!(user_id = user.id, target_id = target, "Refused password change for another user");
                return StatusCode::FORBIDDEN.into_response();
            }
            let changed = format!("{}auth/user/{}/", ADMIN_MOUNT, target);
            change_password(request, form, target, &ctx, changed).await
        }
    })
}

async fn change_password(
    request: Request<Body>,
    form: PasswordChangeForm,
    target: u64,
    ctx: &AdminContext,
    success_location: String,
) -> Response {
    let method = request.method().clone();

    if method == Method::GET || method == Method::HEAD {
        return Json(json!({
            "form": form.name(),
            "user_id": target,
            "min_length": form.min_length(),
        }))
        .into_response();
    }
    if method != Method::POST {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let Form(submission) = match Form::<PasswordChangeSubmission>::from_request(request, &()).await {
        Ok(form) => form,
        Err(rejection) => return rejection.into_response(),
    };

    if let Err(errors) = form.validate(&submission) {
        tracing::debug!(user_id = target, form = form.name(), errors = errors.len(), "Password change rejected");
        let errors: Vec<String> = errors.iter().map(ToString::to_string).collect();
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "form": form.name(), "errors": errors })),
        )
            .into_response();
    }

    let Some(expires) = ctx.clock.now().checked_add_signed(ctx.password_max_age) else {
        tracing::error!(user_id = target, max_age = %ctx.password_max_age, "Password expiry out of range");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };
    if !ctx.directory.set_password_expiry(target, expires) {
        return StatusCode::NOT_FOUND.into_response();
    }

    tracing::info!(user_id = target, form = form.name(), %expires, "Password changed");
    redirect(success_location)
}
