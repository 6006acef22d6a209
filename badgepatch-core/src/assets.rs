//! Locating the bundled icon directory.

use std::path::{Path, PathBuf};

pub const ASSETS_ENV: &str = "BADGEPATCH_ASSETS";
pub const ASSETS_DIR_NAME: &str = "assets";

/// Directories searched for icons, most specific first: an explicit override,
/// the environment, next to the installed executable, then the source tree.
pub fn candidate_dirs(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = explicit {
        candidates.push(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(ASSETS_ENV) {
        candidates.push(PathBuf::from(dir));
    }
    if let Some(dir) = exe_relative_dir() {
        candidates.push(dir);
    }
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    candidates.push(manifest_dir.join("..").join(ASSETS_DIR_NAME));
    candidates.push(manifest_dir.join(ASSETS_DIR_NAME));
    candidates
}

/// First existing candidate. Falls back to the executable-relative directory,
/// in which case every icon lookup reports a missing file.
pub fn locate_asset_dir(explicit: Option<&Path>) -> PathBuf {
    let candidates = candidate_dirs(explicit);
    for dir in &candidates {
        log::debug!("asset dir candidate: {}", dir.display());
        if dir.is_dir() {
            return dir.clone();
        }
    }
    let fallback = exe_relative_dir().unwrap_or_else(|| PathBuf::from(ASSETS_DIR_NAME));
    log::warn!("no icon asset directory found, using {}", fallback.display());
    fallback
}

fn exe_relative_dir() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(ASSETS_DIR_NAME))
}
