//! Pure block rendering and line-vector splicing.
//!
//! These functions never touch the filesystem: they take the file
//! content as a line array (split on `\n`, final empty element kept so
//! a trailing newline survives the rejoin) and produce a new array.
//! [`crate::store::HostStore`] owns the read/rejoin/write around them.

use crate::locate::HostSpan;
use crate::parser::TAG_PREFIX;
use hostman_core::HostEntry;

/// Render an entry as config lines, leading blank separator included.
///
/// Field order and rules: optional tags annotation, `Host`, `HostName`,
/// then `User`, `Port`, `IdentityFile`, `ProxyJump` — each emitted only
/// when non-empty, and `Port` additionally only when it differs from
/// the implied `"22"`. Directive lines use four-space indentation.
pub fn render_block(entry: &HostEntry) -> Vec<String> {
    let mut block = vec![String::new()];

    if !entry.tags.is_empty() {
        block.push(format!("{} {}", TAG_PREFIX, entry.tags.join(", ")));
    }
    block.push(format!("Host {}", entry.name));
    block.push(format!("    HostName {}", entry.hostname));
    if let Some(user) = entry.user.as_deref().filter(|u| !u.is_empty()) {
        block.push(format!("    User {user}"));
    }
    if entry.has_explicit_port() {
        block.push(format!("    Port {}", entry.port));
    }
    if let Some(identity) = entry.identity_file.as_deref().filter(|i| !i.is_empty()) {
        block.push(format!("    IdentityFile {identity}"));
    }
    if let Some(jump) = entry.proxy_jump.as_deref().filter(|j| !j.is_empty()) {
        block.push(format!("    ProxyJump {jump}"));
    }

    block
}

/// Replace the located span with a freshly rendered block for `entry`.
///
/// Every line outside the span is carried over verbatim.
pub fn splice_update(lines: &[String], span: HostSpan, entry: &HostEntry) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() + 8);
    out.extend_from_slice(&lines[..span.start]);
    out.extend(render_block(entry));
    out.extend_from_slice(&lines[span.end..]);
    out
}

/// Remove the located span, consuming at most one trailing blank line
/// so deletions don't accumulate blank-line debris.
pub fn splice_delete(lines: &[String], span: HostSpan) -> Vec<String> {
    let mut resume = span.end;
    if resume < lines.len() && lines[resume].trim().is_empty() {
        resume += 1;
    }

    let mut out = Vec::with_capacity(lines.len());
    out.extend_from_slice(&lines[..span.start]);
    out.extend_from_slice(&lines[resume..]);
    out
}
