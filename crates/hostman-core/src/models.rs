//! Core data model for managed SSH hosts.
//!
//! A [`HostEntry`] is the structured view of one `Host` block in the
//! config file. Entries are materialized transiently on every read; the
//! file itself remains the single source of truth.

use serde::{Deserialize, Serialize};

/// Port implied when a host block carries no `Port` directive.
///
/// The serializer omits the directive entirely when the entry's port
/// equals this value (or is empty), so a host parsed without an explicit
/// port round-trips without gaining one.
pub const DEFAULT_PORT: &str = "22";

/// One managed connection target from the SSH config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HostEntry {
    /// Unique key, the second token of the `Host` line. No embedded whitespace.
    pub name: String,
    /// Target address (`HostName` directive). Empty if unset.
    #[serde(default)]
    pub hostname: String,
    /// Login user (`User` directive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Port as written in the file, `"22"` when absent
    #[serde(default = "default_port")]
    pub port: String,
    /// Private key path (`IdentityFile` directive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_file: Option<String>,
    /// Jump host (`ProxyJump` directive), `user@host[:port]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_jump: Option<String>,
    /// Labels sourced from a `# Tags:` comment preceding the block
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

fn default_port() -> String {
    DEFAULT_PORT.to_string()
}

impl Default for HostEntry {
    fn default() -> Self {
        Self {
            name: String::new(),
            hostname: String::new(),
            user: None,
            port: default_port(),
            identity_file: None,
            proxy_jump: None,
            tags: Vec::new(),
        }
    }
}

impl HostEntry {
    /// Create an entry with the default port and no optional fields.
    pub fn new(name: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hostname: hostname.into(),
            ..Default::default()
        }
    }

    /// Set the login user
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set an explicit port
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }

    /// Set the identity file path
    pub fn with_identity_file(mut self, path: impl Into<String>) -> Self {
        self.identity_file = Some(path.into());
        self
    }

    /// Set the jump host
    pub fn with_proxy_jump(mut self, jump: impl Into<String>) -> Self {
        self.proxy_jump = Some(jump.into());
        self
    }

    /// Set the tag list
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Whether the port differs from the implied default.
    pub fn has_explicit_port(&self) -> bool {
        !self.port.is_empty() && self.port != DEFAULT_PORT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_port_22() {
        let entry = HostEntry::new("web", "203.0.113.7");
        assert_eq!(entry.port, DEFAULT_PORT);
        assert!(!entry.has_explicit_port());
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn test_builder_helpers() {
        let entry = HostEntry::new("db", "10.0.0.5")
            .with_user("admin")
            .with_port("2222")
            .with_proxy_jump("bastion@192.0.2.1:22");
        assert_eq!(entry.user.as_deref(), Some("admin"));
        assert!(entry.has_explicit_port());
        assert_eq!(entry.proxy_jump.as_deref(), Some("bastion@192.0.2.1:22"));
    }

    #[test]
    fn test_deserialize_fills_default_port() {
        let entry: HostEntry =
            serde_json::from_str(r#"{"name":"web","hostname":"203.0.113.7"}"#).unwrap();
        assert_eq!(entry.port, "22");
        assert!(entry.user.is_none());
    }
}
