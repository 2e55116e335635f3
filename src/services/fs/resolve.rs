use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::{Error, Result};

/// Canonicalizes `input` and refuses the filesystem root.
pub fn resolve_dir(input: impl AsRef<Path>) -> Result<PathBuf> {
    let input = input.as_ref();
    let resolved = fs::canonicalize(input).map_err(|source| Error::Resolve {
        path: input.to_path_buf(),
        source,
    })?;

    if is_root(&resolved) {
        return Err(Error::RootPath);
    }
    tracing::debug!(path = %resolved.display(), "resolved listing path");
    Ok(resolved)
}

fn is_root(path: &Path) -> bool {
    path.has_root() && path.parent().is_none()
}
