//! Field-syntax validation for host entries.
//!
//! The store itself enforces only name uniqueness; callers (the CLI,
//! interactive forms) run entries through [`validate_entry`] before
//! handing them to the store so malformed values never reach the file.

use crate::models::HostEntry;
use serde::{Deserialize, Serialize};

/// Severity level for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Informational message (not a problem)
    Info,
    /// Warning (should be addressed but not critical)
    Warning,
    /// Error (must be fixed before the entry is written)
    Error,
}

impl Severity {
    /// Check if this severity is considered a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// A validation issue found in an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Severity of the issue
    pub severity: Severity,
    /// Field the issue refers to (`name`, `port`, ...)
    pub field: String,
    /// Human-readable message
    pub message: String,
}

impl ValidationIssue {
    /// Create a new validation issue
    pub fn new(severity: Severity, field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result of validating an entry
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether validation passed (no error-level issues)
    pub passed: bool,
    /// All issues found
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Create an empty, passing report
    pub fn new() -> Self {
        Self {
            passed: true,
            issues: Vec::new(),
        }
    }

    /// Add an issue to the report
    pub fn add_issue(&mut self, issue: ValidationIssue) {
        if issue.severity.is_failure() {
            self.passed = false;
        }
        self.issues.push(issue);
    }

    /// Check if there are any failures
    pub fn has_failures(&self) -> bool {
        !self.passed
    }

    /// Get issues by severity
    pub fn issues_by_severity(&self, severity: Severity) -> Vec<&ValidationIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity == severity)
            .collect()
    }
}

/// Validate the field syntax of an entry.
///
/// Checks:
/// - `name` is non-empty and free of whitespace (it must survive
///   whitespace tokenization of the `Host` line)
/// - `port`, when explicit, is a number in `1..=65535`
/// - `proxy_jump`, when set, has the `[user@]host[:port]` shape
/// - `hostname` presence (warning only; an empty `HostName` is legal
///   in the file but rarely what the user meant)
pub fn validate_entry(entry: &HostEntry) -> ValidationReport {
    let mut report = ValidationReport::new();

    if entry.name.is_empty() {
        report.add_issue(ValidationIssue::new(
            Severity::Error,
            "name",
            "host name must not be empty",
        ));
    } else if entry.name.chars().any(char::is_whitespace) {
        report.add_issue(ValidationIssue::new(
            Severity::Error,
            "name",
            "host name must not contain whitespace",
        ));
    }

    if !entry.port.is_empty() {
        match entry.port.parse::<u32>() {
            Ok(p) if (1..=65535).contains(&p) => {}
            _ => report.add_issue(ValidationIssue::new(
                Severity::Error,
                "port",
                format!("'{}' is not a valid port number", entry.port),
            )),
        }
    }

    if let Some(jump) = entry.proxy_jump.as_deref() {
        if !is_valid_proxy_jump(jump) {
            report.add_issue(ValidationIssue::new(
                Severity::Error,
                "proxy_jump",
                format!("'{jump}' is not of the form [user@]host[:port]"),
            ));
        }
    }

    if entry.hostname.is_empty() {
        report.add_issue(ValidationIssue::new(
            Severity::Warning,
            "hostname",
            "entry has no HostName; ssh will treat the alias as the address",
        ));
    }

    report
}

/// Check the `[user@]host[:port]` shape of a ProxyJump value.
fn is_valid_proxy_jump(value: &str) -> bool {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return false;
    }

    let host_part = match value.rsplit_once('@') {
        Some((user, rest)) => {
            if user.is_empty() {
                return false;
            }
            rest
        }
        None => value,
    };

    match host_part.rsplit_once(':') {
        Some((host, port)) => {
            !host.is_empty() && port.parse::<u32>().is_ok_and(|p| (1..=65535).contains(&p))
        }
        None => !host_part.is_empty(),
    }
}
