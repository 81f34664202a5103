use crate::routing::types::MiddlewareBinding;

/// Resolve the middleware applicable to a route's canonical pattern.
///
/// A binding applies when the canonical pattern starts with its
/// `path_prefix` as a literal string, not segment-aware: a prefix of
/// `/user` also applies to `/users`. Applicable bindings concatenate
/// in registration order, middleware within a binding in declaration
/// order, and nothing is deduplicated.
pub fn applicable_middleware(pattern: &str, bindings: &[MiddlewareBinding]) -> Vec<String> {
    let mut refs = Vec::new();
    for binding in bindings {
        if pattern.starts_with(&binding.path_prefix) {
            refs.extend(binding.middleware.iter().cloned());
        }
    }
    refs
}
