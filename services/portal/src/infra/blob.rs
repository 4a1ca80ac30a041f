use std::path::{Component, Path, PathBuf};

use anyhow::Context as _;
use uuid::Uuid;

use crate::domain::repository::BlobStore;
use crate::error::PortalServiceError;

/// Blob store backed by a local directory. Handles are root-relative
/// paths of the form `{prefix}/{uuid}_{file_name}`; the workflow persists
/// only the handle string.
#[derive(Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, handle: &str) -> Result<PathBuf, PortalServiceError> {
        let relative = Path::new(handle);
        // Handles come back out of the database; still refuse anything
        // that would escape the root.
        let traversal = relative.components().any(|c| {
            !matches!(c, Component::Normal(_))
        });
        if traversal || relative.is_absolute() {
            return Err(PortalServiceError::MaterialNotFound);
        }
        Ok(self.root.join(relative))
    }
}

/// Strip path separators and other hostile characters out of an uploaded
/// file name before it becomes part of a handle.
fn sanitize_file_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "file".to_owned()
    } else {
        cleaned
    }
}

impl BlobStore for FsBlobStore {
    async fn store(
        &self,
        prefix: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, PortalServiceError> {
        let handle = format!("{prefix}/{}_{}", Uuid::new_v4(), sanitize_file_name(file_name));
        let path = self.resolve(&handle)?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("create blob directory")?;
        }
        tokio::fs::write(&path, bytes)
            .await
            .context("write blob")?;
        Ok(handle)
    }

    async fn retrieve(&self, handle: &str) -> Result<Vec<u8>, PortalServiceError> {
        let path = self.resolve(handle)?;
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(PortalServiceError::MaterialNotFound)
            }
            Err(e) => Err(anyhow::Error::new(e).context("read blob").into()),
        }
    }
}
