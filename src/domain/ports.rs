use crate::utils::error::Result;

/// Where generated assets go. Paths are relative to the storage root.
pub trait Storage {
    /// Creates `path` and any missing parents; succeeds if it already exists.
    fn ensure_dir(&self, path: &str) -> Result<()>;

    /// Creates or overwrites `path`. The parent directory must exist.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
