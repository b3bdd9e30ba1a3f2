//! Built-in admin site.

use crate::admin::forms::PasswordChangeForm;
use crate::admin::{views, AdminContext, AdminSite};
use crate::routing::RouteNode;

/// Admin site serving user management views under the `admin` namespace.
#[derive(Debug, Clone)]
pub struct DefaultAdminSite {
    ctx: AdminContext,
}

impl DefaultAdminSite {
    pub fn new(ctx: AdminContext) -> Self {
        Self { ctx }
    }
}

impl AdminSite for DefaultAdminSite {
    fn urls(&self) -> RouteNode {
        let ctx = &self.ctx;
        RouteNode::namespaced(
            "",
            "admin",
            vec![
                RouteNode::leaf("", "index", views::index(ctx.clone())),
                RouteNode::leaf("login/", "login", views::login()),
                RouteNode::leaf("logout/", "logout", views::logout()),
                RouteNode::leaf(
                    "password_change/",
                    "password_change",
                    views::password_change(PasswordChangeForm::Standard, ctx.clone()),
                ),
                RouteNode::leaf("password_change/done/", "password_change_done", views::password_change_done()),
                RouteNode::group(
                    "auth/user/",
                    vec![
                        RouteNode::leaf("", "auth_user_changelist", views::user_changelist(ctx.clone())),
                        RouteNode::leaf("{id}/", "auth_user_change", views::user_change(ctx.clone())),
                        RouteNode::leaf(
                            "{id}/password/",
                            "auth_user_password_change",
                            views::user_password_change(PasswordChangeForm::Standard, ctx.clone()),
                        ),
                    ],
                ),
            ],
        )
    }
}
