use super::*;

#[test]
fn venues_are_listed_largest_first() {
    let venues = banquet_venues();
    assert!(venues.len() >= 2);
    for pair in venues.windows(2) {
        assert!(pair[0].capacity >= pair[1].capacity);
    }
}

#[test]
fn every_venue_has_copy_and_capacity() {
    for venue in banquet_venues() {
        assert!(venue.capacity > 0);
        assert!(!venue.blurb.is_empty());
        assert!(!venue.style.is_empty());
    }
}
