//! Line-by-line parse of SSH config text into ordered host entries.
//!
//! Only a fixed subset of directives is modeled (`Host`, `HostName`,
//! `User`, `Port`, `IdentityFile`, `ProxyJump`); everything else is
//! inert at this level and is preserved unchanged by the mutation
//! pipeline in [`crate::splice`]. Tag labels ride on a `# Tags:` comment
//! line preceding a `Host` declaration.

use hostman_core::{DEFAULT_PORT, HostEntry};

/// Marker for the tag-annotation comment line.
pub const TAG_PREFIX: &str = "# Tags:";

/// Parse config text into entries, in declaration order.
///
/// Scans lines with two pieces of state: the entry under construction
/// and the pending-tags accumulator. Pending tags survive blank lines
/// and unrelated comments until the next `Host` line consumes them —
/// the historical association policy, kept as-is (see DESIGN.md).
pub fn parse_hosts(content: &str) -> Vec<HostEntry> {
    let mut hosts = Vec::new();
    let mut current: Option<HostEntry> = None;
    let mut pending_tags: Vec<String> = Vec::new();

    for raw in content.lines() {
        let line = raw.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix(TAG_PREFIX) {
            pending_tags.extend(parse_tag_list(rest));
            continue;
        }

        if line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let (Some(key), Some(first)) = (tokens.next(), tokens.next()) else {
            // Fewer than two tokens: not a directive we can read.
            continue;
        };
        let mut value = first.to_string();
        for tok in tokens {
            value.push(' ');
            value.push_str(tok);
        }

        match key.to_ascii_lowercase().as_str() {
            "host" => {
                if let Some(done) = current.take() {
                    hosts.push(done);
                }
                current = Some(HostEntry {
                    name: value,
                    port: DEFAULT_PORT.to_string(),
                    tags: std::mem::take(&mut pending_tags),
                    ..Default::default()
                });
            }
            "hostname" => {
                if let Some(host) = current.as_mut() {
                    host.hostname = value;
                }
            }
            "user" => {
                if let Some(host) = current.as_mut() {
                    host.user = Some(value);
                }
            }
            "port" => {
                if let Some(host) = current.as_mut() {
                    host.port = value;
                }
            }
            "identityfile" => {
                if let Some(host) = current.as_mut() {
                    host.identity_file = Some(value);
                }
            }
            "proxyjump" => {
                if let Some(host) = current.as_mut() {
                    host.proxy_jump = Some(value);
                }
            }
            // Unrecognized keys pass through untouched in the raw text.
            _ => {}
        }
    }

    if let Some(done) = current {
        hosts.push(done);
    }

    hosts
}

/// Split a comma-separated tag list, trimming whitespace and dropping
/// empty labels.
fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_host() {
        let hosts = parse_hosts("Host web\n    HostName 203.0.113.7\n");
        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].name, "web");
        assert_eq!(hosts[0].hostname, "203.0.113.7");
        assert_eq!(hosts[0].port, "22");
    }

    #[test]
    fn test_all_directives() {
        let content = "\
Host db
    HostName 10.0.0.5
    User admin
    Port 2222
    IdentityFile ~/.ssh/id_ed25519
    ProxyJump bastion@192.0.2.1:22
";
        let hosts = parse_hosts(content);
        assert_eq!(hosts.len(), 1);
        let host = &hosts[0];
        assert_eq!(host.user.as_deref(), Some("admin"));
        assert_eq!(host.port, "2222");
        assert_eq!(host.identity_file.as_deref(), Some("~/.ssh/id_ed25519"));
        assert_eq!(host.proxy_jump.as_deref(), Some("bastion@192.0.2.1:22"));
    }

    #[test]
    fn test_declaration_order_preserved() {
        let content = "Host c\n    HostName 1\n\nHost a\n    HostName 2\n\nHost b\n    HostName 3\n";
        let names: Vec<_> = parse_hosts(content).into_iter().map(|h| h.name).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let hosts = parse_hosts("host web\n    HOSTNAME h\n    pOrT 8022\n");
        assert_eq!(hosts[0].name, "web");
        assert_eq!(hosts[0].hostname, "h");
        assert_eq!(hosts[0].port, "8022");
    }

    #[test]
    fn test_tag_association() {
        let hosts = parse_hosts("# Tags: prod, db\nHost x\n    HostName h\n");
        assert_eq!(hosts[0].tags, ["prod", "db"]);
    }

    #[test]
    fn test_tags_survive_blank_lines_and_comments() {
        // The accumulator is not cleared by blank lines or unrelated
        // comments, only consumed by the next Host line.
        let content = "# Tags: prod\n\n# unrelated comment\n\nHost x\n    HostName h\n";
        let hosts = parse_hosts(content);
        assert_eq!(hosts[0].tags, ["prod"]);
    }

    #[test]
    fn test_tag_list_trims_and_drops_empties() {
        let hosts = parse_hosts("# Tags:  a ,, b , \nHost x\n    HostName h\n");
        assert_eq!(hosts[0].tags, ["a", "b"]);
    }

    #[test]
    fn test_multiple_tag_lines_accumulate() {
        let hosts = parse_hosts("# Tags: a\n# Tags: b\nHost x\n    HostName h\n");
        assert_eq!(hosts[0].tags, ["a", "b"]);
    }

    #[test]
    fn test_tags_consumed_by_first_host_only() {
        let content = "# Tags: prod\nHost x\n    HostName h\n\nHost y\n    HostName i\n";
        let hosts = parse_hosts(content);
        assert_eq!(hosts[0].tags, ["prod"]);
        assert!(hosts[1].tags.is_empty());
    }

    #[test]
    fn test_comments_and_short_lines_ignored() {
        let content = "# plain comment\nCompression\nHost web\n    HostName h\n";
        let hosts = parse_hosts(content);
        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].name, "web");
    }

    #[test]
    fn test_unknown_directive_ignored() {
        let hosts = parse_hosts("Host web\n    HostName h\n    ServerAliveInterval 60\n");
        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].hostname, "h");
    }

    #[test]
    fn test_directive_outside_host_block_dropped() {
        let hosts = parse_hosts("HostName stray\nHost web\n    HostName h\n");
        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].hostname, "h");
    }

    #[test]
    fn test_value_tokens_rejoined_with_single_spaces() {
        let hosts = parse_hosts("Host web\n    IdentityFile C:\\keys\\id   rsa\n");
        assert_eq!(hosts[0].identity_file.as_deref(), Some("C:\\keys\\id rsa"));
    }

    #[test]
    fn test_trailing_host_flushed_at_eof() {
        let hosts = parse_hosts("Host a\n    HostName 1\n\nHost b");
        assert_eq!(hosts.len(), 2);
        assert_eq!(hosts[1].name, "b");
        assert_eq!(hosts[1].hostname, "");
    }

    #[test]
    fn test_empty_content() {
        assert!(parse_hosts("").is_empty());
        assert!(parse_hosts("\n\n# only comments\n").is_empty());
    }
}
