//! The [`HostStore`] facade: reads, guarded writes, and atomic rewrites.
//!
//! Reads re-parse the file on every call and take no lock; a read
//! concurrent with a write observes either the pre- or post-write state.
//! Writes (add/update/delete) are serialized through a per-store mutex
//! held for the whole backup + read + locate + rewrite sequence. Nothing
//! here guards against other OS processes editing the file; the last
//! writer wins.

use crate::backup::backup_file;
use crate::locate::locate_host;
use crate::parser::parse_hosts;
use crate::splice::{render_block, splice_delete, splice_update};
use hostman_core::{Error, HostEntry, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::instrument;

/// Default config location, tilde-expanded at construction time.
const DEFAULT_CONFIG_PATH: &str = "~/.ssh/config";

/// Structured store over one SSH config file.
///
/// The lock is owned by the instance, not the process, so stores over
/// different files (or separate stores in tests) never contend.
pub struct HostStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl HostStore {
    /// Create a store over an explicit config path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Create a store over the user's `~/.ssh/config`.
    pub fn default_location() -> Result<Self> {
        let expanded = shellexpand::tilde(DEFAULT_CONFIG_PATH);
        if expanded.starts_with('~') {
            return Err(Error::invalid_path(
                "home directory could not be resolved",
            ));
        }
        Ok(Self::new(expanded.into_owned()))
    }

    /// Path of the config file this store manages.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All hosts in the file, in declaration order.
    #[instrument(skip(self), fields(config = ?self.path), name = "store_list_hosts")]
    pub async fn list_hosts(&self) -> Result<Vec<HostEntry>> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(parse_hosts(&content))
    }

    /// One host by name.
    pub async fn get_host(&self, name: &str) -> Result<HostEntry> {
        self.list_hosts()
            .await?
            .into_iter()
            .find(|h| h.name == name)
            .ok_or_else(|| Error::host_not_found(name))
    }

    /// Whether a host with this name is present.
    pub async fn host_exists(&self, name: &str) -> Result<bool> {
        Ok(self.list_hosts().await?.iter().any(|h| h.name == name))
    }

    /// Append a new host block to the end of the file.
    ///
    /// The name collision check runs before anything is written; a
    /// missing file counts as an empty store and is created by the
    /// append. When the file already exists it is backed up first.
    #[instrument(skip(self, entry), fields(host = %entry.name), name = "store_add_host")]
    pub async fn add_host(&self, entry: &HostEntry) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let existing = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Some(content),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        if let Some(content) = existing.as_deref() {
            if parse_hosts(content).iter().any(|h| h.name == entry.name) {
                return Err(Error::host_already_exists(entry.name.as_str()));
            }
            backup_file(&self.path).await?;
        }

        let mut block = render_block(entry).join("\n");
        block.push('\n');

        let mut options = tokio::fs::OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        options.mode(0o600);
        let mut file = options.open(&self.path).await?;
        file.write_all(block.as_bytes()).await?;
        file.flush().await?;

        log::info!("added host '{}' to {}", entry.name, self.path.display());
        Ok(())
    }

    /// Replace the block declared under `old_name` with a fresh block
    /// for `entry`. Lines outside the block are carried over verbatim.
    #[instrument(
        skip(self, entry),
        fields(old = %old_name, new = %entry.name),
        name = "store_update_host"
    )]
    pub async fn update_host(&self, old_name: &str, entry: &HostEntry) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        backup_file(&self.path).await?;

        let content = tokio::fs::read_to_string(&self.path).await?;
        let lines = split_lines(&content);
        let span =
            locate_host(&lines, old_name).ok_or_else(|| Error::host_not_found(old_name))?;

        let updated = splice_update(&lines, span, entry);
        self.write_atomic(&updated.join("\n")).await?;

        log::info!(
            "updated host '{}' (now '{}') in {}",
            old_name,
            entry.name,
            self.path.display()
        );
        Ok(())
    }

    /// Remove the block declared under `name`, tag annotation included,
    /// plus at most one trailing blank line.
    #[instrument(skip(self), fields(host = %name), name = "store_delete_host")]
    pub async fn delete_host(&self, name: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        backup_file(&self.path).await?;

        let content = tokio::fs::read_to_string(&self.path).await?;
        let lines = split_lines(&content);
        let span = locate_host(&lines, name).ok_or_else(|| Error::host_not_found(name))?;

        let remaining = splice_delete(&lines, span);
        self.write_atomic(&remaining.join("\n")).await?;

        log::info!("deleted host '{}' from {}", name, self.path.display());
        Ok(())
    }

    /// Full-file rewrite via temp file + rename, so a crash mid-write
    /// never leaves a truncated config behind.
    async fn write_atomic(&self, content: &str) -> Result<()> {
        let temp = self.path.with_extension("tmp");
        tokio::fs::write(&temp, content).await?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&temp, std::fs::Permissions::from_mode(0o600)).await?;
        }
        tokio::fs::rename(&temp, &self.path).await?;
        Ok(())
    }
}

/// Split file content on `\n`, keeping the final empty element so the
/// trailing newline survives a rejoin.
fn split_lines(content: &str) -> Vec<String> {
    content.split('\n').map(str::to_string).collect()
}
