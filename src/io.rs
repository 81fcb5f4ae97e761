//! Saving and loading of arbitrary serializable values

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{Error, Result};

/// Extension enforced on every saved blob
pub const BLOB_EXTENSION: &str = "json";

/// Replaces whatever extension `location` carries with [`BLOB_EXTENSION`]
pub fn blob_path(location: impl AsRef<Path>) -> PathBuf {
    location.as_ref().with_extension(BLOB_EXTENSION)
}

/// Writes `payload` to `location`, returning the path actually written
pub fn save<T>(payload: &T, location: impl AsRef<Path>) -> Result<PathBuf>
where
    T: Serialize + ?Sized,
{
    let path = blob_path(location);
    let io_err = |source| Error::Io {
        path: path.clone(),
        source,
    };

    let mut writer = BufWriter::new(File::create(&path).map_err(io_err)?);
    serde_json::to_writer(&mut writer, payload).map_err(|source| Error::Serde {
        path: path.clone(),
        source,
    })?;
    writer.flush().map_err(io_err)?;

    tracing::debug!(path = %path.display(), "saved blob");
    Ok(path)
}

/// Reads a value previously written by [`save`]
pub fn load<T>(location: impl AsRef<Path>) -> Result<T>
where
    T: DeserializeOwned,
{
    let path = location.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| Error::Serde {
        path: path.to_path_buf(),
        source,
    })
}
