use crate::domain::model::OutputFile;
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::cell::RefCell;

/// Records writes instead of performing them.
#[derive(Debug, Default)]
pub struct DryRunStorage {
    dirs: RefCell<Vec<String>>,
    files: RefCell<Vec<OutputFile>>,
}

impl DryRunStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dirs(&self) -> Vec<String> {
        self.dirs.borrow().clone()
    }

    pub fn files(&self) -> Vec<OutputFile> {
        self.files.borrow().clone()
    }
}

impl Storage for DryRunStorage {
    fn ensure_dir(&self, path: &str) -> Result<()> {
        tracing::debug!("[dry-run] mkdir -p {}", path);
        self.dirs.borrow_mut().push(path.to_string());
        Ok(())
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        tracing::debug!("[dry-run] write {} ({} bytes)", path, data.len());
        self.files.borrow_mut().push(OutputFile {
            path: path.to_string(),
            content: String::from_utf8_lossy(data).into_owned(),
        });
        Ok(())
    }
}
