use super::*;
use std::collections::HashSet;

#[test]
fn gallery_has_slides() {
    assert!(gallery_slides().len() >= 3);
}

#[test]
fn slide_sources_are_unique_asset_paths() {
    let slides = gallery_slides();
    let sources: HashSet<_> = slides.iter().map(|slide| slide.src).collect();
    assert_eq!(sources.len(), slides.len());
    for slide in &slides {
        assert!(slide.src.starts_with("/assets/"));
    }
}

#[test]
fn every_slide_has_alt_text() {
    for slide in gallery_slides() {
        assert!(!slide.alt.is_empty(), "missing alt for {}", slide.src);
        assert!(!slide.caption.is_empty());
    }
}
