// ABOUTME: Test support utilities.
// ABOUTME: Provides fake container engine scripts so tests need no real docker.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Write an executable `docker` stand-in into `dir` and return its path.
///
/// The body is plain `sh`; tests prepend `dir` to PATH (or pass the returned
/// path directly) so the tool exercises its real subprocess handling against
/// a deterministic engine.
#[cfg(unix)]
pub fn write_engine_script(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("docker");
    // Tests replace the tool's PATH with the fixture dir, so the script pins
    // its own to keep shell utilities reachable.
    std::fs::write(
        &path,
        format!("#!/bin/sh\nPATH=/usr/bin:/bin\n{body}\n"),
    )
    .unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Engine whose `pull` always succeeds and whose `compose` emits `yaml`.
#[cfg(unix)]
pub fn cooperative_engine(dir: &Path, yaml: &str) -> PathBuf {
    let body = format!(
        r#"case "$1" in
  pull) exit 0 ;;
  compose) cat <<'EOF'
{yaml}
EOF
  ;;
esac"#
    );
    write_engine_script(dir, &body)
}

/// Engine whose `pull` fails (with stderr) for any image containing "bad".
#[cfg(unix)]
pub fn selective_engine(dir: &Path) -> PathBuf {
    write_engine_script(
        dir,
        r#"case "$1" in
  pull)
    case "$2" in
      *bad*) echo "pull access denied for $2" >&2; exit 1 ;;
      *) exit 0 ;;
    esac ;;
esac"#,
    )
}
