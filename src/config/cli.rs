use crate::domain::ports::Storage;
use crate::utils::error::{AssetError, Result};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn ensure_dir(&self, path: &str) -> Result<()> {
        let full_path = self.base_path.join(path);
        fs::create_dir_all(&full_path).map_err(|e| AssetError::io(full_path, e))
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.base_path.join(path);
        fs::write(&full_path, data).map_err(|e| AssetError::io(full_path, e))
    }
}
