//! Top-level admin route table.

use std::sync::Arc;

use crate::admin::forms::PasswordChangeForm;
use crate::admin::{views, AdminContext, AdminSite};
use crate::gate::PasswordGate;
use crate::routing::{wrap_tree, RouteNode};

/// Final ordered table: the strict `password_change` and
/// `password_change_done` routes, then the wrapped admin tree.
///
/// The overrides must come first: the admin tree has its own routes at the
/// same paths and the first match wins. Without an admin tree the table is
/// empty.
pub fn build_routes(wrapped_admin: Option<RouteNode>, ctx: &AdminContext) -> Vec<RouteNode> {
    let Some(admin) = wrapped_admin else {
        return Vec::new();
    };

    vec![
        RouteNode::leaf(
            "password_change/",
            "password_change",
            views::password_change(PasswordChangeForm::Strict, ctx.clone()),
        ),
        RouteNode::leaf("password_change/done/", "password_change_done", views::password_change_done()),
        admin,
    ]
}

/// Wrap the site's routes with `gate` and assemble the table.
pub fn admin_routes(site: Option<&dyn AdminSite>, gate: &Arc<PasswordGate>, ctx: &AdminContext) -> Vec<RouteNode> {
    let wrapped = site.map(|site| wrap_tree(&site.urls(), gate));
    build_routes(wrapped, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin::DefaultAdminSite;
    use crate::auth::UserDirectory;
    use crate::config::PasswordExpirationConfig;
    use crate::gate::{SystemClock, ADMIN_MOUNT};
    use crate::routing::RouteTable;
    use chrono::Duration;

    fn ctx() -> AdminContext {
        AdminContext {
            directory: Arc::new(UserDirectory::new()),
            clock: Arc::new(SystemClock),
            password_max_age: Duration::days(90),
        }
    }

    fn gate() -> Arc<PasswordGate> {
        Arc::new(PasswordGate::new(&PasswordExpirationConfig::default(), Arc::new(SystemClock)))
    }

    #[test]
    fn test_overrides_precede_admin_tree() {
        let ctx = ctx();
        let site = DefaultAdminSite::new(ctx.clone());
        let table = RouteTable::new(ADMIN_MOUNT, &admin_routes(Some(&site), &gate(), &ctx));

        let names: Vec<_> = table.entries().iter().filter_map(|e| e.name.as_deref()).collect();
        assert_eq!(&names[..3], &["password_change", "password_change_done", "admin:index"]);

        let resolved = table.resolve("/admin/password_change/").unwrap();
        assert_eq!(resolved.entry.name.as_deref(), Some("password_change"));
        assert!(!resolved.entry.handler.is_guarded());

        let done = table.resolve("/admin/password_change/done/").unwrap();
        assert_eq!(done.entry.name.as_deref(), Some("password_change_done"));
    }

    #[test]
    fn test_every_admin_route_is_guarded() {
        let ctx = ctx();
        let site = DefaultAdminSite::new(ctx.clone());
        let table = RouteTable::new(ADMIN_MOUNT, &admin_routes(Some(&site), &gate(), &ctx));

        let admin_entries: Vec<_> = table
            .entries()
            .iter()
            .filter(|e| e.name.as_deref().is_some_and(|n| n.starts_with("admin:")))
            .collect();
        assert_eq!(admin_entries.len(), 8);
        assert!(admin_entries.iter().all(|e| e.handler.is_guarded()));
    }

    #[test]
    fn test_shadowed_admin_route_still_reversible() {
        let ctx = ctx();
        let site = DefaultAdminSite::new(ctx.clone());
        let table = RouteTable::new(ADMIN_MOUNT, &admin_routes(Some(&site), &gate(), &ctx));
        assert_eq!(
            table.reverse("admin:password_change", &[]).as_deref(),
            Some("/admin/password_change/")
        );
    }

    #[test]
    fn test_no_admin_means_no_routes() {
        assert!(admin_routes(None, &gate(), &ctx()).is_empty());
        assert!(build_routes(None, &ctx()).is_empty());
    }
}
