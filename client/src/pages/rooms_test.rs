use super::*;
use std::collections::HashSet;

#[test]
fn catalogue_has_rooms() {
    assert!(room_catalogue().len() >= 3);
}

#[test]
fn room_names_are_unique() {
    let rooms = room_catalogue();
    let names: HashSet<_> = rooms.iter().map(|room| room.name).collect();
    assert_eq!(names.len(), rooms.len());
}

#[test]
fn room_photos_are_served_from_assets() {
    for room in room_catalogue() {
        assert!(room.image.starts_with("/assets/"), "unexpected image path {}", room.image);
    }
}

#[test]
fn every_room_states_capacity_and_rate() {
    for room in room_catalogue() {
        assert!(room.sleeps.starts_with("Sleeps "));
        assert!(!room.rate.is_empty());
        assert!(!room.blurb.is_empty());
    }
}
