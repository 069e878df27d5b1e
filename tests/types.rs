// ABOUTME: Integration tests for the image reference type.
// ABOUTME: Tests validation, trimming, and display round-trips.

use coco::types::{ImageRef, ImageRefError};
use proptest::prelude::*;

#[test]
fn accepts_typical_references() {
    for reference in [
        "nginx",
        "nginx:1.25",
        "ghcr.io/org/app:v1.2.3",
        "registry.example.com:5000/team/app@sha256:abc123",
    ] {
        let image = ImageRef::new(reference).unwrap();
        assert_eq!(image.as_str(), reference);
    }
}

#[test]
fn rejects_empty_and_blank_input() {
    assert_eq!(ImageRef::new("").unwrap_err(), ImageRefError::Empty);
    assert_eq!(ImageRef::new("   \t").unwrap_err(), ImageRefError::Empty);
}

#[test]
fn trims_surrounding_whitespace() {
    let image = ImageRef::new("  alpine:latest \n").unwrap();
    assert_eq!(image.as_str(), "alpine:latest");
}

#[test]
fn display_matches_inner_value() {
    let image = ImageRef::new("busybox:latest").unwrap();
    assert_eq!(image.to_string(), "busybox:latest");
}

proptest! {
    #[test]
    fn preserves_trimmed_content(reference in "[a-z0-9][a-z0-9:./_@-]{0,40}") {
        let image = ImageRef::new(&format!("  {reference}  ")).unwrap();
        prop_assert_eq!(image.as_str(), reference.as_str());
    }

    #[test]
    fn never_accepts_blank_input(padding in "[ \t]{0,8}") {
        prop_assert_eq!(ImageRef::new(&padding).unwrap_err(), ImageRefError::Empty);
    }
}
