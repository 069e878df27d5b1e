// ABOUTME: Validated container image reference newtype.
// ABOUTME: References are opaque strings; only non-emptiness is enforced.

use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageRefError {
    #[error("image reference cannot be empty")]
    Empty,
}

/// A container image reference such as `nginx:1.25` or `ghcr.io/org/app:v1`.
///
/// The reference is kept verbatim (surrounding whitespace trimmed) and handed
/// to the container engine as-is; the engine is the authority on whether it
/// names a real image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: &str) -> Result<Self, ImageRefError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ImageRefError::Empty);
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
