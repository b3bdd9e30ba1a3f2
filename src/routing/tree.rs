//! Route trees and the gate-wrapping transform.

use std::sync::Arc;

use crate::gate::PasswordGate;
use crate::routing::{Handler, View};

/// A single (pattern, handler, name) entry. Patterns are relative to the
/// enclosing group, e.g. `password_change/`.
#[derive(Debug, Clone)]
pub struct Route {
    pub pattern: String,
    pub name: Option<String>,
    pub handler: Handler,
}

/// Child nodes mounted under a shared prefix, optionally namespaced.
#[derive(Debug, Clone)]
pub struct RouteGroup {
    pub prefix: String,
    pub namespace: Option<String>,
    pub children: Vec<RouteNode>,
}

#[derive(Debug, Clone)]
pub enum RouteNode {
    Leaf(Route),
    Group(RouteGroup),
}

impl RouteNode {
    pub fn leaf(pattern: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        RouteNode::Leaf(Route {
            pattern: pattern.into(),
            name: Some(name.into()),
            handler: Handler::new(view),
        })
    }

    pub fn group(prefix: impl Into<String>, children: Vec<RouteNode>) -> Self {
        RouteNode::Group(RouteGroup {
            prefix: prefix.into(),
            namespace: None,
            children,
        })
    }

    pub fn namespaced(prefix: impl Into<String>, namespace: impl Into<String>, children: Vec<RouteNode>) -> Self {
        RouteNode::Group(RouteGroup {
            prefix: prefix.into(),
            namespace: Some(namespace.into()),
            children,
        })
    }

    /// Leaves in depth-first, declaration order.
    pub fn leaves(&self) -> Vec<&Route> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }
}

fn collect_leaves<'a>(node: &'a RouteNode, out: &mut Vec<&'a Route>) {
    match node {
        RouteNode::Leaf(route) => out.push(route),
        RouteNode::Group(group) => {
            for child in &group.children {
                collect_leaves(child, out);
            }
        }
    }
}

/// Copy of `node` in which every leaf handler runs behind `gate`.
///
/// Shape, patterns, names and namespaces are preserved. Leaves that are
/// already guarded are left as they are, so wrapping twice is a no-op.
pub fn wrap_tree(node: &RouteNode, gate: &Arc<PasswordGate>) -> RouteNode {
    match node {
        RouteNode::Leaf(route) => RouteNode::Leaf(Route {
            pattern: route.pattern.clone(),
            name: route.name.clone(),
            handler: route.handler.guarded(gate),
        }),
        RouteNode::Group(group) => RouteNode::Group(RouteGroup {
            prefix: group.prefix.clone(),
            namespace: group.namespace.clone(),
            children: group.children.iter().map(|c| wrap_tree(c, gate)).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PasswordExpirationConfig;
    use crate::gate::SystemClock;
    use axum::response::IntoResponse;

    fn view() -> View {
        View::new(|_req, _params| async { "ok".into_response() })
    }

    fn gate() -> Arc<PasswordGate> {
        Arc::new(PasswordGate::new(&PasswordExpirationConfig::default(), Arc::new(SystemClock)))
    }

    fn sample_tree() -> RouteNode {
        RouteNode::namespaced(
            "",
            "admin",
            vec![
                RouteNode::leaf("", "index", view()),
                RouteNode::group(
                    "auth/user/",
                    vec![
                        RouteNode::leaf("", "changelist", view()),
                        RouteNode::leaf("{id}/password/", "password", view()),
                    ],
                ),
                RouteNode::group("empty/", vec![]),
            ],
        )
    }

    fn shape(node: &RouteNode) -> Vec<(String, Option<String>)> {
        node.leaves()
            .into_iter()
            .map(|r| (r.pattern.clone(), r.name.clone()))
            .collect()
    }

    #[test]
    fn test_wrap_preserves_shape_and_guards_every_leaf() {
        let tree = sample_tree();
        let wrapped = wrap_tree(&tree, &gate());

        assert_eq!(shape(&tree), shape(&wrapped));
        for (original, guarded) in tree.leaves().into_iter().zip(wrapped.leaves()) {
            assert!(!original.handler.is_guarded());
            assert!(guarded.handler.is_guarded());
            assert!(guarded.handler.view().ptr_eq(original.handler.view()));
        }

        let RouteNode::Group(root) = &wrapped else { panic!("expected group") };
        assert_eq!(root.namespace.as_deref(), Some("admin"));
        let RouteNode::Group(empty) = &root.children[2] else { panic!("expected group") };
        assert_eq!(empty.prefix, "empty/");
        assert!(empty.children.is_empty());
    }

    #[test]
    fn test_wrap_leaves_input_untouched() {
        let tree = sample_tree();
        let _ = wrap_tree(&tree, &gate());
        assert!(tree.leaves().iter().all(|r| !r.handler.is_guarded()));
    }

    #[test]
    fn test_wrap_is_idempotent() {
        let gate = gate();
        let once = wrap_tree(&sample_tree(), &gate);
        let twice = wrap_tree(&once, &gate);

        assert_eq!(shape(&once), shape(&twice));
        for (a, b) in once.leaves().into_iter().zip(twice.leaves()) {
            assert!(b.handler.is_guarded());
            assert!(a.handler.view().ptr_eq(b.handler.view()));
        }
    }

    #[test]
    fn test_wrap_empty_group() {
        let wrapped = wrap_tree(&RouteNode::group("x/", vec![]), &gate());
        assert!(wrapped.leaves().is_empty());
    }
}
