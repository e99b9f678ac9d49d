//! Navigation link helpers.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Whether `href` should render as the active navigation link for the
/// current path. The root link matches only the root; other links match
/// themselves and their subpaths.
#[must_use]
pub fn is_active(current_path: &str, href: &str) -> bool {
    let current = current_path.trim_end_matches('/');
    let target = href.trim_end_matches('/');
    if target.is_empty() {
        return current.is_empty();
    }
    current == target || current.starts_with(&format!("{target}/"))
}
