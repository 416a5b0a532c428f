//! Persistence of per-volume mount metadata.
//!
//! Each attached volume keeps a small JSON object of string key/value pairs
//! describing its on-disk mount state, one file per volume instance, under
//! a plugin-owned directory keyed by a filesystem-safe form of the volume
//! identifier:
//!
//! - `<base>/volumeDevices/<escaped-id>/dev`: block-device symlink
//! - `<base>/volumeDevices/<escaped-id>/data/vol_data.json`: metadata file

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Conventional file name for a volume's metadata within its data directory.
pub const VOLUME_DATA_FILE: &str = "vol_data.json";

// =============================================================================
// MetadataError
// =============================================================================

/// Failure modes of the volume metadata store.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The data file does not exist.
    #[error("volume data file {} not found", path.display())]
    NotFound {
        /// Path that was probed.
        path: PathBuf,
    },
    /// The data file could not be read or written.
    #[error("failed to access volume data file {}", path.display())]
    Io {
        /// Path that was accessed.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: io::Error,
    },
    /// The data file is not a JSON object of string keys to string values.
    #[error("volume data file {} is malformed", path.display())]
    Malformed {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

// =============================================================================
// Save / load
// =============================================================================

/// Persists `data` as a JSON object at `dir`/`file_name`.
///
/// An existing file is replaced wholesale.
pub fn save_volume_data(
    dir: &Path,
    file_name: &str,
    data: &BTreeMap<String, String>,
) -> Result<(), MetadataError> {
    let path = dir.join(file_name);
    debug!(path = %path.display(), "saving volume data file");
    let file = fs::File::create(&path).map_err(|source| MetadataError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::to_writer(file, data).map_err(|source| MetadataError::Io {
        path,
        source: source.into(),
    })
}

/// Loads the JSON object at `dir`/`file_name`.
pub fn load_volume_data(
    dir: &Path,
    file_name: &str,
) -> Result<BTreeMap<String, String>, MetadataError> {
    let path = dir.join(file_name);
    debug!(path = %path.display(), "loading volume data file");
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Err(MetadataError::NotFound { path });
        }
        Err(source) => return Err(MetadataError::Io { path, source }),
    };
    serde_json::from_str(&contents).map_err(|source| MetadataError::Malformed { path, source })
}

// =============================================================================
// Volume identifier escaping and directory layout
// =============================================================================

/// Replaces path separators so a volume identifier can name a directory.
///
/// `/` maps to `~`. Identifiers are assumed not to contain `~` themselves
/// (qualified names never do), which keeps the mapping invertible via
/// [`unescape_volume_id`].
#[must_use]
pub fn escape_volume_id(volume_id: &str) -> String {
    volume_id.replace('/', "~")
}

/// Inverse of [`escape_volume_id`].
#[must_use]
pub fn unescape_volume_id(escaped: &str) -> String {
    escaped.replace('~', "/")
}

/// Directory holding the block-device symlink for `volume_id`.
#[must_use]
pub fn volume_device_dir(base: &Path, volume_id: &str) -> PathBuf {
    base.join("volumeDevices")
        .join(escape_volume_id(volume_id))
        .join("dev")
}

/// Directory holding the metadata file for `volume_id`.
#[must_use]
pub fn volume_device_data_dir(base: &Path, volume_id: &str) -> PathBuf {
    base.join("volumeDevices")
        .join(escape_volume_id(volume_id))
        .join("data")
}

// =============================================================================
// Tests
// =============================================================================
