//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Flatten route trees into an ordered table
//! - Look up the first route matching a request path
//! - Reverse a qualified route name back into a path
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) ordered scan; admin tables are small
//! - Explicit NoMatch rather than silent default

use crate::routing::{Handler, PathParams, PathPattern, RouteNode};

/// A compiled route with its full path and namespace-qualified name.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    pub pattern: PathPattern,
    pub name: Option<String>,
    pub handler: Handler,
}

/// Result of a successful lookup.
#[derive(Debug)]
pub struct ResolvedRoute<'a> {
    pub entry: &'a RouteEntry,
    pub params: PathParams,
}

#[derive(Debug, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Compile `nodes` mounted at `mount` (e.g. `/admin/`), keeping order.
    pub fn new(mount: &str, nodes: &[RouteNode]) -> Self {
        let mut entries = Vec::new();
        for node in nodes {
            flatten(node, mount, None, &mut entries);
        }
        tracing::debug!(mount = %mount, routes = entries.len(), "Route table compiled");
        Self { entries }
    }

    /// First route whose pattern matches `path`.
    pub fn resolve(&self, path: &str) -> Option<ResolvedRoute<'_>> {
        self.entries.iter().find_map(|entry| {
            entry
                .pattern
                .matches(path)
                .map(|params| ResolvedRoute { entry, params })
        })
    }

    /// Path of the first route named `name`, with `params` substituted.
    pub fn reverse(&self, name: &str, params: &[(&str, &str)]) -> Option<String> {
        self.entries
            .iter()
            .filter(|e| e.name.as_deref() == Some(name))
            .find_map(|e| e.pattern.expand(params))
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn flatten(node: &RouteNode, prefix: &str, namespace: Option<&str>, out: &mut Vec<RouteEntry>) {
    match node {
        RouteNode::Leaf(route) => out.push(RouteEntry {
            pattern: PathPattern::parse(format!("{}{}", prefix, route.pattern)),
            name: route.name.as_ref().map(|name| qualify(namespace, name)),
            handler: route.handler.clone(),
        }),
        RouteNode::Group(group) => {
            let prefix = format!("{}{}", prefix, group.prefix);
            let namespace = match &group.namespace {
                Some(ns) => Some(qualify(namespace, ns)),
                None => namespace.map(str::to_string),
            };
            for child in &group.children {
                flatten(child, &prefix, namespace.as_deref(), out);
            }
        }
    }
}

fn qualify(namespace: Option<&str>, name: &str) -> String {
    match namespace {
        Some(ns) => format!("{}:{}", ns, name),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::View;
    use axum::response::IntoResponse;

    fn view() -> View {
        View::new(|_req, _params| async { "ok".into_response() })
    }

    fn table() -> RouteTable {
        RouteTable::new(
            "/admin/",
            &[
                RouteNode::leaf("password_change/", "password_change", view()),
                RouteNode::namespaced(
                    "",
                    "admin",
                    vec![
                        RouteNode::leaf("", "index", view()),
                        RouteNode::leaf("password_change/", "password_change", view()),
                        RouteNode::group(
                            "auth/user/",
                            vec![RouteNode::leaf("{id}/password/", "auth_user_password_change", view())],
                        ),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn test_flatten_joins_prefixes_and_namespaces() {
        let table = table();
        let listing: Vec<_> = table
            .entries()
            .iter()
            .map(|e| (e.pattern.as_str().to_string(), e.name.clone().unwrap()))
            .collect();

        assert_eq!(
            listing,
            vec![
                ("/admin/password_change/".to_string(), "password_change".to_string()),
                ("/admin/".to_string(), "admin:index".to_string()),
                ("/admin/password_change/".to_string(), "admin:password_change".to_string()),
                (
                    "/admin/auth/user/{id}/password/".to_string(),
                    "admin:auth_user_password_change".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_first_match_wins() {
        let table = table();
        let resolved = table.resolve("/admin/password_change/").unwrap();
        assert_eq!(resolved.entry.name.as_deref(), Some("password_change"));
    }

    #[test]
    fn test_resolve_captures_params() {
        let table = table();
        let resolved = table.resolve("/admin/auth/user/3/password/").unwrap();
        assert_eq!(resolved.params.get("id"), Some("3"));
        assert!(table.resolve("/admin/unknown/").is_none());
    }

    #[test]
    fn test_reverse() {
        let table = table();
        assert_eq!(
            table.reverse("admin:auth_user_password_change", &[("id", "3")]).as_deref(),
            Some("/admin/auth/user/3/password/")
        );
        assert_eq!(table.reverse("admin:password_change", &[]).as_deref(), Some("/admin/password_change/"));
        assert_eq!(table.reverse("missing", &[]), None);
    }

    #[test]
    fn test_empty_table() {
        let table = RouteTable::new("/admin/", &[]);
        assert!(table.is_empty());
        assert!(table.resolve("/admin/").is_none());
    }
}
