use super::*;

#[test]
fn next_wraps_to_front() {
    assert_eq!(next_index(0, 4), 1);
    assert_eq!(next_index(3, 4), 0);
}

#[test]
fn prev_wraps_to_back() {
    assert_eq!(prev_index(1, 4), 0);
    assert_eq!(prev_index(0, 4), 3);
}

#[test]
fn empty_carousel_stays_at_zero() {
    assert_eq!(next_index(0, 0), 0);
    assert_eq!(prev_index(0, 0), 0);
}

#[test]
fn single_slide_never_moves() {
    assert_eq!(next_index(0, 1), 0);
    assert_eq!(prev_index(0, 1), 0);
}
