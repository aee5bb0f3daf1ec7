//! # hostman store
//!
//! The config store: a structured, mutable view over a personal SSH
//! client configuration file that preserves the file's human-editable
//! text format. Reads parse the file into ordered
//! [`HostEntry`](hostman_core::HostEntry) records;
//! writes perform line-level surgery so comments, ordering, whitespace,
//! and unmanaged directives outside the touched block survive
//! byte-for-byte.
//!
//! ## Modules
//!
//! - [`parser`] - line-by-line parse of config text into entries
//! - [`locate`] - span computation for a named host block in raw lines
//! - [`splice`] - pure block rendering and line-vector splicing
//! - [`backup`] - sibling `.backup` snapshot before destructive writes
//! - [`store`] - the [`HostStore`] facade tying the above together
//!
//! The splice pipeline is deliberately pure (`parse to line array →
//! compute span → replace/remove/insert → rejoin`) so every step is
//! unit-testable against raw-line fixtures without touching the disk.
//!
//! ## Example
//!
//! ```no_run
//! use hostman_core::HostEntry;
//! use hostman_store::HostStore;
//!
//! # async fn demo() -> hostman_core::Result<()> {
//! let store = HostStore::default_location()?;
//! store
//!     .add_host(&HostEntry::new("web", "203.0.113.7").with_user("deploy"))
//!     .await?;
//! for host in store.list_hosts().await? {
//!     println!("{} -> {}", host.name, host.hostname);
//! }
//! # Ok(())
//! # }
//! ```

pub mod backup;
pub mod locate;
pub mod parser;
pub mod splice;
pub mod store;

pub use backup::{BACKUP_SUFFIX, backup_file, backup_path_for};
pub use locate::{HostSpan, locate_host};
pub use parser::{TAG_PREFIX, parse_hosts};
pub use splice::{render_block, splice_delete, splice_update};
pub use store::HostStore;
