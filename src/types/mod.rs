// ABOUTME: Validated domain types.
// ABOUTME: Image references are the only domain identifier this tool needs.

mod image_ref;

pub use image_ref::{ImageRef, ImageRefError};
