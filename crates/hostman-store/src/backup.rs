//! Sibling `.backup` snapshot taken before destructive writes.
//!
//! A single generation is retained: each call overwrites the previous
//! backup. This is a pre-write safety net, not a history.

use hostman_core::Result;
use std::path::{Path, PathBuf};

/// Suffix appended to the config path to form the backup path.
pub const BACKUP_SUFFIX: &str = ".backup";

/// The backup path for a given config path.
pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut os = path.as_os_str().to_os_string();
    os.push(BACKUP_SUFFIX);
    PathBuf::from(os)
}

/// Copy `path` to its sibling backup, overwriting any prior backup.
///
/// Fails with an I/O error when the source is unreadable or the
/// destination is unwritable; callers abort the write in that case,
/// before the main file is touched.
pub async fn backup_file(path: &Path) -> Result<PathBuf> {
    let backup = backup_path_for(path);
    tokio::fs::copy(path, &backup).await?;
    log::debug!("backed up {} to {}", path.display(), backup.display());
    Ok(backup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_backup_path_keeps_full_name() {
        assert_eq!(
            backup_path_for(Path::new("/home/u/.ssh/config")),
            PathBuf::from("/home/u/.ssh/config.backup")
        );
    }

    #[tokio::test]
    async fn test_backup_copies_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        tokio::fs::write(&path, "Host a\n    HostName 1\n")
            .await
            .unwrap();

        let backup = backup_file(&path).await.unwrap();
        let copied = tokio::fs::read_to_string(&backup).await.unwrap();
        assert_eq!(copied, "Host a\n    HostName 1\n");
    }

    #[tokio::test]
    async fn test_backup_overwrites_previous_generation() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");

        tokio::fs::write(&path, "first\n").await.unwrap();
        backup_file(&path).await.unwrap();

        tokio::fs::write(&path, "second\n").await.unwrap();
        let backup = backup_file(&path).await.unwrap();

        let copied = tokio::fs::read_to_string(&backup).await.unwrap();
        assert_eq!(copied, "second\n");
    }

    #[tokio::test]
    async fn test_backup_of_missing_source_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config");
        assert!(backup_file(&path).await.is_err());
    }
}
