//! On-disk collection document

use crate::error::StoreError;
use crate::store::BookStore;
use async_trait::async_trait;
use shelf_model::{Book, BookCollection};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Collection stored as one pretty-printed JSON file
///
/// Writes go to a sibling `*.tmp` file which is then renamed over the
/// document, so a reader never sees a half-written collection.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path`; nothing is touched until first use
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Document location
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the document with an empty collection if it does not exist
    ///
    /// Returns `true` when a new document was written. An existing document
    /// is left alone even if it is malformed.
    pub async fn ensure_initialized(&self) -> Result<bool, StoreError> {
        let exists = tokio::fs::try_exists(&self.path)
            .await
            .map_err(|e| StoreError::io_error(&self.path, e))?;
        if exists {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::io_error(parent, e))?;
        }

        self.write_all(&[]).await?;
        tracing::info!(path = %self.path.display(), "initialized empty book collection");
        Ok(true)
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("books.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl BookStore for JsonFileStore {
    async fn read_all(&self) -> Result<Vec<Book>, StoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| StoreError::io_error(&self.path, e))?;

        let collection: BookCollection =
            serde_json::from_slice(&bytes).map_err(|e| StoreError::malformed(&self.path, e))?;

        tracing::debug!(
            path = %self.path.display(),
            count = collection.books.len(),
            "read book collection"
        );
        Ok(collection.into_books())
    }

    async fn write_all(&self, books: &[Book]) -> Result<(), StoreError> {
        let collection = BookCollection::new(books.to_vec());
        let mut bytes = serde_json::to_vec_pretty(&collection).map_err(StoreError::Encode)?;
        bytes.push(b'\n');

        let staging = self.staging_path();
        tokio::fs::write(&staging, &bytes)
            .await
            .map_err(|e| StoreError::io_error(&staging, e))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(|e| StoreError::io_error(&self.path, e))?;

        tracing::debug!(
            path = %self.path.display(),
            count = books.len(),
            "wrote book collection"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_model::BookId;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("books.json"))
    }

    #[tokio::test]
    async fn missing_document_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let err = store.read_all().await.unwrap_err();
        assert!(err.is_missing());
    }

    #[tokio::test]
    async fn malformed_document_is_an_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        tokio::fs::write(store.path(), b"{ not json").await.unwrap();

        let err = store.read_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[tokio::test]
    async fn ensure_initialized_writes_once() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/data/books.json"));

        assert!(store.ensure_initialized().await.unwrap());
        assert!(!store.ensure_initialized().await.unwrap());
        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn ensure_initialized_keeps_existing_records() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .write_all(&[Book::new(BookId(1), "Dune")])
            .await
            .unwrap();

        assert!(!store.ensure_initialized().await.unwrap());
        assert_eq!(store.read_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn write_leaves_no_staging_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.write_all(&[]).await.unwrap();

        assert!(!store.staging_path().exists());
        assert!(store.path().exists());
    }

    #[test]
    fn staging_path_is_sibling() {
        let store = JsonFileStore::new("/srv/shelf/books.json");
        assert_eq!(store.staging_path(), PathBuf::from("/srv/shelf/books.json.tmp"));
    }
}
