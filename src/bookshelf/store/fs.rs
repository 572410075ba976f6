use super::BookStore;
use crate::error::{CatalogError, Result};
use crate::model::Book;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build a store for `file_name` inside `data_dir`.
    pub fn in_dir(data_dir: &Path, file_name: &str) -> Self {
        Self::new(data_dir.join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| CatalogError::write(&self.path, e))?;
            }
        }
        Ok(())
    }

    /// The file a save must replace: symlinks are followed so the link
    /// itself survives. A path that does not exist yet is its own target.
    fn resolve_target(&self) -> Result<PathBuf> {
        match fs::canonicalize(&self.path) {
            Ok(target) => Ok(target),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(self.path.clone()),
            Err(e) => Err(CatalogError::write(&self.path, e)),
        }
    }
}

fn tmp_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "library".to_string());
    target.with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
}

impl BookStore for FileStore {
    fn load_books(&self) -> Result<Option<Vec<Book>>> {
        let exists = self
            .path
            .try_exists()
            .map_err(|e| CatalogError::read(&self.path, e))?;
        if !exists {
            debug!(path = %self.path.display(), "no catalog file yet");
            return Ok(None);
        }
        let content =
            fs::read_to_string(&self.path).map_err(|e| CatalogError::read(&self.path, e))?;
        let books: Vec<Book> =
            serde_json::from_str(&content).map_err(|e| CatalogError::read(&self.path, e))?;
        debug!(path = %self.path.display(), count = books.len(), "catalog file read");
        Ok(Some(books))
    }

    fn save_books(&self, books: &[Book]) -> Result<()> {
        self.ensure_parent()?;
        let content =
            serde_json::to_string_pretty(books).map_err(|e| CatalogError::write(&self.path, e))?;

        let target = self.resolve_target()?;
        let existing = match fs::metadata(&target) {
            Ok(meta) if meta.is_file() => Some(meta.permissions()),
            Ok(_) => None,
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => return Err(CatalogError::write(&self.path, e)),
        };
        if existing.as_ref().is_some_and(|perms| perms.readonly()) {
            return Err(CatalogError::write(
                &self.path,
                io::Error::new(io::ErrorKind::PermissionDenied, "catalog file is read-only"),
            ));
        }

        // Write to a sibling tmp file carrying the old mode, then rename over the target
        let tmp_file = tmp_path(&target);
        let written = fs::write(&tmp_file, content).and_then(|()| match existing {
            Some(perms) => fs::set_permissions(&tmp_file, perms),
            None => Ok(()),
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_file);
            return Err(CatalogError::write(&self.path, e));
        }
        if let Err(e) = fs::rename(&tmp_file, &target) {
            let _ = fs::remove_file(&tmp_file);
            return Err(CatalogError::write(&self.path, e));
        }

        debug!(path = %self.path.display(), count = books.len(), "catalog file written");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
