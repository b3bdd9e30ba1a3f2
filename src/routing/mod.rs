//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     AdminSite::urls() → RouteNode tree
//!     → tree.rs (wrap_tree: guard every leaf)
//!     → router.rs (flatten groups, compile patterns)
//!     → Freeze as immutable RouteTable
//!
//! Incoming Request (path)
//!     → router.rs (ordered lookup)
//!     → matcher.rs (segment-by-segment pattern match)
//!     → Return: ResolvedRoute (handler + params) or NoMatch
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - No regex: literal segments and `{param}` segments only
//! - First match wins (table order), so earlier routes shadow later ones
//! - Tree transforms build new trees; nothing is mutated in place

pub mod handler;
pub mod matcher;
pub mod router;
pub mod tree;

pub use handler::{Handler, View};
pub use matcher::{PathParams, PathPattern};
pub use router::{ResolvedRoute, RouteEntry, RouteTable};
pub use tree::{wrap_tree, Route, RouteGroup, RouteNode};
