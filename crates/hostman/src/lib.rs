//! # hostman
//!
//! Command-line front end over the host store, plus the crate's public
//! re-export surface.

pub use hostman_core::prelude::*;
pub use hostman_store::{BACKUP_SUFFIX, HostStore, backup_path_for, parse_hosts};
