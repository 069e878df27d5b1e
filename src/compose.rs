// ABOUTME: Compose file discovery, resolution, and image extraction.
// ABOUTME: Shells out to `engine compose convert` and walks the resolved YAML.

use crate::error::{Error, Result};
use crate::types::ImageRef;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Standard compose file names, checked in order.
pub const COMPOSE_CANDIDATES: [&str; 4] = [
    "compose.yaml",
    "compose.yml",
    "docker-compose.yaml",
    "docker-compose.yml",
];

/// A resolved compose document.
///
/// Only the `services` mapping is inspected; `serde_yaml::Mapping` preserves
/// document order, which fixes the output order of extracted images.
#[derive(Debug, Default, Deserialize)]
pub struct ComposeDocument {
    #[serde(default)]
    services: serde_yaml::Mapping,
}

impl ComposeDocument {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    /// Collect every service's `image` value, first occurrence wins.
    ///
    /// Services without an `image` field are skipped; an empty image value is
    /// skipped with a warning rather than aborting the extraction.
    pub fn images(&self) -> Vec<ImageRef> {
        let mut images = Vec::new();
        let mut seen = HashSet::new();
        for (service, definition) in &self.services {
            let Some(image) = definition.get("image") else {
                continue;
            };
            match image.as_str().map(ImageRef::new) {
                Some(Ok(image)) => {
                    if seen.insert(image.clone()) {
                        images.push(image);
                    }
                }
                _ => {
                    tracing::warn!(?service, "service declares an unusable image value, skipping");
                }
            }
        }
        images
    }
}

/// Find a standard compose file in `dir`, first candidate wins.
pub fn discover(dir: &Path) -> Result<PathBuf> {
    for candidate in COMPOSE_CANDIDATES {
        let path = dir.join(candidate);
        if path.exists() {
            return Ok(path);
        }
    }
    Err(Error::ComposeNotFound(dir.to_path_buf()))
}

/// Resolve a compose file to its normalized YAML form.
///
/// Runs `<engine> compose -f <file> convert` and captures its output; a
/// non-zero exit propagates the engine's stderr text.
pub async fn resolve(engine: &Path, compose_file: &Path) -> Result<String> {
    let output = Command::new(engine)
        .arg("compose")
        .arg("-f")
        .arg(compose_file)
        .arg("convert")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(Error::Resolution(stderr));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Write the image list, one reference per line, overwriting `path`.
pub fn write_image_list(path: &Path, images: &[ImageRef]) -> Result<()> {
    let mut content = images
        .iter()
        .map(ImageRef::as_str)
        .collect::<Vec<_>>()
        .join("\n");
    content.push('\n');
    std::fs::write(path, content)?;
    Ok(())
}

/// Read an image list written by [`write_image_list`], ignoring blank lines.
pub fn read_image_list(path: &Path) -> Result<Vec<ImageRef>> {
    if !path.exists() {
        return Err(Error::ImageListNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter_map(|line| ImageRef::new(line).ok())
        .collect())
}
