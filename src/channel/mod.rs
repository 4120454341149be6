//! Channel reference resolution.
//!
//! A channel reference given on the command line is either a literal
//! channel identifier (`UC` + 22 characters) or a handle such as
//! `@hubermanlab`. Handles are resolved through a local
//! [`ChannelDirectory`] loaded from `channels.json`.
//!
//! - [`id`] - Identifier shape check and handle normalization
//! - [`directory`] - Loading the handle directory file

mod directory;
mod id;

pub use directory::{ChannelDirectory, Directory, CHANNELS_FILE};
pub use id::{is_channel_id, normalize_handle};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while resolving a channel reference.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The reference was empty after trimming
    #[error("Usage: ytfeed CHANNEL_ID_or_@name [--json]")]
    Usage,
    /// A handle was given but no usable directory file exists
    #[error(
        "{} not found at {}. Add a file with {{ \"channels\": {{ \"@name\": \"UC...\" }} }} to use channel names.",
        file_label(.path),
        .path.display()
    )]
    DirectoryUnavailable { path: PathBuf },
    /// The directory exists but has no entry for the handle
    #[error(
        "Channel \"{handle}\" not found in {}. Add an entry like \"{handle}\": \"UC...\" to channels.",
        .path.display()
    )]
    HandleNotFound { handle: String, path: PathBuf },
}

/// File name shown in messages, e.g. `channels.json`.
fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| CHANNELS_FILE.to_string())
}

/// Resolves a channel reference to a channel identifier.
///
/// Identifier-shaped references are returned as-is without touching the
/// directory file. Anything else is normalized to an `@handle` and looked
/// up in the directory at `directory_path`, which is only read on this path.
///
/// # Errors
///
/// - [`ResolveError::Usage`] - `reference` is empty or whitespace
/// - [`ResolveError::DirectoryUnavailable`] - missing or malformed directory file
/// - [`ResolveError::HandleNotFound`] - handle absent from the directory
pub fn resolve_channel(reference: &str, directory_path: &Path) -> Result<String, ResolveError> {
    resolve_with(reference, directory_path, || Directory::load(directory_path))
}

/// Core resolution logic with the directory source injected.
///
/// `load` is called at most once, and only for handle-style references.
pub fn resolve_with<F>(
    reference: &str,
    directory_path: &Path,
    load: F,
) -> Result<String, ResolveError>
where
    F: FnOnce() -> Directory,
{
    let trimmed = reference.trim();
    if trimmed.is_empty() {
        return Err(ResolveError::Usage);
    }

    if is_channel_id(trimmed) {
        tracing::debug!(channel_id = %trimmed, "Reference is a literal channel ID");
        return Ok(trimmed.to_string());
    }

    let handle = normalize_handle(trimmed);
    let directory = match load() {
        Directory::Loaded(directory) => directory,
        Directory::Unavailable => {
            return Err(ResolveError::DirectoryUnavailable {
                path: directory_path.to_path_buf(),
            })
        }
    };

    let id = directory
        .get(&handle)
        .ok_or_else(|| ResolveError::HandleNotFound {
            handle: handle.clone(),
            path: directory_path.to_path_buf(),
        })?;

    if !is_channel_id(id) {
        tracing::warn!(
            handle = %handle,
            channel_id = %id,
            "Directory entry does not look like a channel ID, using it anyway"
        );
    }
    tracing::debug!(handle = %handle, channel_id = %id, "Resolved handle");
    Ok(id.to_string())
}
