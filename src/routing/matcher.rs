//! Path pattern matching.
//!
//! # Design Decisions
//! - Patterns are split on `/`; a trailing slash is an empty final segment
//!   and therefore significant
//! - `{name}` matches exactly one non-empty segment
//! - Literal matching is case-sensitive

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// Compiled route pattern such as `/admin/auth/user/{id}/password/`.
#[derive(Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = raw
            .split('/')
            .map(|s| match s.strip_prefix('{').and_then(|s| s.strip_suffix('}')) {
                Some(name) if !name.is_empty() => Segment::Param(name.to_string()),
                _ => Segment::Literal(s.to_string()),
            })
            .collect();
        Self { raw, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match a request path, returning captured parameters.
    pub fn matches(&self, path: &str) -> Option<PathParams> {
        let mut params = PathParams::default();
        let mut parts = path.split('/');

        for segment in &self.segments {
            let part = parts.next()?;
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Param(name) if !part.is_empty() => params.push(name, part),
                _ => return None,
            }
        }

        if parts.next().is_some() {
            return None;
        }
        Some(params)
    }

    /// Substitute parameters into the pattern. `None` if one is missing.
    pub fn expand(&self, params: &[(&str, &str)]) -> Option<String> {
        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => parts.push(lit.clone()),
                Segment::Param(name) => {
                    let (_, value) = params.iter().find(|(k, _)| k == name)?;
                    parts.push((*value).to_string());
                }
            }
        }
        Some(parts.join("/"))
    }
}

impl fmt::Debug for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PathPattern({:?})", self.raw)
    }
}

/// Parameters captured by a pattern match, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams(Vec<(String, String)>);

impl PathParams {
    fn push(&mut self, name: &str, value: &str) {
        self.0.push((name.to_string(), value.to_string()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
