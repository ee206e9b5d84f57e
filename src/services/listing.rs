use crate::domain::error::ProbeError;
use crate::domain::models::{DirectoryListing, ListingMode, ListingOutcome, ListingReport};
use crate::services::filesystem::FileSystem;
use std::path::{Path, PathBuf};

/// List each directory in order. In `Shared` mode the first failure ends the
/// scope and every later directory is `Skipped` without touching the
/// filesystem.
pub fn list_directories(
    fs: &dyn FileSystem,
    dirs: &[PathBuf],
    mode: ListingMode,
) -> ListingReport {
    let mut listings = Vec::with_capacity(dirs.len());
    let mut scope_failed = false;

    for dir in dirs {
        let outcome = if scope_failed {
            tracing::debug!(path = %dir.display(), "listing skipped after earlier failure");
            ListingOutcome::Skipped
        } else {
            match list_one(fs, dir) {
                Ok(entries) => ListingOutcome::Ok(entries),
                Err(e) => {
                    tracing::warn!(path = %dir.display(), error = %e, "directory listing failed");
                    if mode == ListingMode::Shared {
                        scope_failed = true;
                    }
                    ListingOutcome::Failed(e.to_string())
                }
            }
        };
        listings.push(DirectoryListing {
            path: dir.display().to_string(),
            outcome,
        });
    }

    ListingReport { mode, listings }
}

fn list_one(fs: &dyn FileSystem, dir: &Path) -> Result<Vec<String>, ProbeError> {
    let entries = fs.list_dir(dir).map_err(|source| ProbeError::ListDir {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %dir.display(), count = entries.len(), "directory listed");
    Ok(entries)
}
