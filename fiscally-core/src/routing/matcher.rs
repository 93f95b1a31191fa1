//! Path matcher for the route gate
//!
//! Requests under the API and framework namespaces, and anything that looks
//! like a static asset (contains a dot), never reach the gate or locale
//! resolution.

/// Leading path text excluded from gating.
const EXCLUDED_PREFIXES: &[&str] = &["api", "trpc", "_next", "_vercel"];

/// Returns `true` when the gate and locale resolution apply to `path`.
pub fn is_gated(path: &str) -> bool {
    let rest = path.strip_prefix('/').unwrap_or(path);

    if EXCLUDED_PREFIXES.iter().any(|prefix| rest.starts_with(prefix)) {
        return false;
    }

    !rest.contains('.')
}
