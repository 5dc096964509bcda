use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use business::domain::product::errors::PhotoError;
use business::domain::product::photo::PhotoName;
use business::domain::product::services::PhotoStorage;

/// Stores product photos as plain files directly under one base directory.
pub struct FilesystemPhotoStorage {
    base_dir: PathBuf,
}

impl FilesystemPhotoStorage {
    /// Creates the base directory when it does not exist yet.
    pub async fn new(base_dir: impl Into<PathBuf>) -> Result<Self, PhotoError> {
        let base_dir = base_dir.into();
        tokio::fs::create_dir_all(&base_dir)
            .await
            .map_err(PhotoError::Storage)?;
        let base_dir = tokio::fs::canonicalize(&base_dir)
            .await
            .map_err(PhotoError::Storage)?;

        tracing::info!(path = %base_dir.display(), "photo storage ready");
        Ok(Self { base_dir })
    }

    /// Resolves the name inside the base directory, refusing anything that escapes it.
    fn resolve(&self, name: &PhotoName) -> Result<PathBuf, PhotoError> {
        let path = self.base_dir.join(name.as_str());
        if path.parent() != Some(self.base_dir.as_path()) {
            tracing::warn!(name = %name, "photo path escapes upload directory");
            return Err(PhotoError::InvalidName);
        }
        Ok(path)
    }
}

#[async_trait]
impl PhotoStorage for FilesystemPhotoStorage {
    async fn store(&self, name: &PhotoName, content: &[u8]) -> Result<(), PhotoError> {
        let path = self.resolve(name)?;
        tokio::fs::write(&path, content)
            .await
            .map_err(PhotoError::Storage)?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "photo stored");
        Ok(())
    }

    async fn load(&self, name: &PhotoName) -> Result<Option<Vec<u8>>, PhotoError> {
        let path = self.resolve(name)?;
        match tokio::fs::read(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(PhotoError::Storage(err)),
        }
    }

    async fn remove(&self, name: &PhotoName) -> Result<(), PhotoError> {
        let path = self.resolve(name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(PhotoError::Storage(err)),
        }
    }
}
