use super::*;

#[test]
fn root_link_matches_only_root() {
    assert!(is_active("/", "/"));
    assert!(is_active("", "/"));
    assert!(!is_active("/rooms", "/"));
}

#[test]
fn section_link_matches_itself() {
    assert!(is_active("/rooms", "/rooms"));
    assert!(is_active("/rooms/", "/rooms"));
}

#[test]
fn section_link_matches_subpaths() {
    assert!(is_active("/rooms/garden-suite", "/rooms"));
}

#[test]
fn sibling_prefixes_do_not_match() {
    assert!(!is_active("/roomservice", "/rooms"));
    assert!(!is_active("/banquets", "/rooms"));
}
