use crate::core::Storage;
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Site files on the local disk, addressed relative to a project root.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        tracing::trace!("Reading {}", full_path.display());
        Ok(tokio::fs::read(&full_path).await?)
    }

    /// Missing parent directories of the output page are created.
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);
        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&full_path, data).await?;
        tracing::trace!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }
}
