//! On-disk JSON records, one file per list.

use indexmap::IndexMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{codec, ListStorage, StorageError};
use crate::lists::ListName;

/// Storage for list records in a data directory.
///
/// The directory is created on first save. Saves write a sibling `.tmp`
/// file and rename it over the record, so a failed write leaves the previous
/// record in place.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    data_dir: PathBuf,
}

impl JsonFileStorage {
    /// Creates a storage instance rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the full path for a list record.
    pub fn path(&self, list: ListName) -> PathBuf {
        self.data_dir.join(list.filename())
    }

    /// Checks if a list record exists on disk.
    pub fn exists(&self, list: ListName) -> bool {
        self.path(list).exists()
    }

    fn tmp_path(&self, list: ListName) -> PathBuf {
        self.data_dir.join(format!("{}.tmp", list.filename()))
    }
}

impl ListStorage for JsonFileStorage {
    fn load(&self, list: ListName) -> Result<Option<IndexMap<String, String>>, StorageError> {
        let path = self.path(list);

        match fs::read_to_string(&path) {
            Ok(text) => {
                let entries = codec::decode(&text)
                    .map_err(|e| StorageError::DecodeError(path.clone(), e.to_string()))?;
                tracing::debug!(path = %path.display(), count = entries.len(), "loaded list record");
                Ok(Some(entries))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::IoError(path, e)),
        }
    }

    fn save(
        &mut self,
        list: ListName,
        entries: &IndexMap<String, String>,
    ) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StorageError::IoError(self.data_dir.clone(), e))?;

        let path = self.path(list);
        let text = codec::encode(entries)
            .map_err(|e| StorageError::EncodeError(path.clone(), e.to_string()))?;

        let tmp_path = self.tmp_path(list);
        fs::write(&tmp_path, text).map_err(|e| StorageError::IoError(tmp_path.clone(), e))?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StorageError::IoError(path, e));
        }

        tracing::debug!(path = %path.display(), count = entries.len(), "saved list record");
        Ok(())
    }
}
