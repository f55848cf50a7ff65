// src/discovery.rs
use std::path::{Path, PathBuf};

use tracing::warn;
use walkdir::WalkDir;

/// Yields every regular file under `roots` whose extension is in `extensions`.
///
/// Roots are walked in the given order and entries within a directory are
/// sorted by file name, so the sequence is stable between runs. Symlinks are
/// not followed. Extensions are compared case-insensitively and must include
/// the leading dot. Traversal errors are logged and skipped.
pub fn locate<'a>(
    roots: &'a [PathBuf],
    extensions: &'a [String],
) -> impl Iterator<Item = PathBuf> + 'a {
    roots.iter().flat_map(move |root| {
        WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(move |item| match item {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(
                        path = %e.path().map_or_else(|| root.display().to_string(), |p| p.display().to_string()),
                        error = %e,
                        "Skipping unreadable entry"
                    );
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .filter(move |path| has_allowed_extension(path, extensions))
    })
}

/// Case-insensitive extension check against a dot-prefixed allow-list.
#[must_use]
pub fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension() else {
        return false;
    };
    let dotted = format!(".{}", ext.to_string_lossy().to_lowercase());
    extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(&dotted))
}
