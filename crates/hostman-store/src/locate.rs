//! Span computation for a named host block in raw config lines.
//!
//! The locator works on the unmodified line array so the splice step can
//! carry every untouched line through byte-for-byte. A block's span
//! optionally opens at a `# Tags:` annotation when that comment is the
//! line immediately before the `Host` declaration, and closes at the
//! first blank line or the next `Host` declaration (exclusive).

use crate::parser::TAG_PREFIX;

/// The `[start, end)` line span occupied by one host block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostSpan {
    /// First line of the block (the tags line when present, else the `Host` line)
    pub start: usize,
    /// One past the last line of the block
    pub end: usize,
    /// Whether `start` points at a `# Tags:` annotation
    pub has_tag_prefix: bool,
}

/// Find the span of the block declaring `name`, or `None`.
///
/// A `Host` line matches only when its second whitespace token equals
/// `name` exactly; `Host web` never matches a lookup for `web2`.
pub fn locate_host(lines: &[String], name: &str) -> Option<HostSpan> {
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].trim();

        if line.starts_with(TAG_PREFIX)
            && i + 1 < lines.len()
            && is_host_decl(&lines[i + 1], name)
        {
            return Some(HostSpan {
                start: i,
                end: block_end(lines, i + 2),
                has_tag_prefix: true,
            });
        }

        if is_host_decl(&lines[i], name) {
            return Some(HostSpan {
                start: i,
                end: block_end(lines, i + 1),
                has_tag_prefix: false,
            });
        }

        i += 1;
    }
    None
}

/// First line at or after `from` that is blank or opens a new `Host`
/// declaration (exclusive block end).
fn block_end(lines: &[String], from: usize) -> usize {
    let mut j = from;
    while j < lines.len() {
        let line = lines[j].trim();
        if line.is_empty() || line.starts_with("Host ") {
            break;
        }
        j += 1;
    }
    j
}

/// Whether `line` declares exactly the host `name`.
fn is_host_decl(line: &str, name: &str) -> bool {
    let mut tokens = line.trim().split_whitespace();
    tokens.next() == Some("Host") && tokens.next() == Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(content: &str) -> Vec<String> {
        content.split('\n').map(str::to_string).collect()
    }

    #[test]
    fn test_bare_block() {
        let raw = lines("Host web\n    HostName h\n    User u\n");
        let span = locate_host(&raw, "web").unwrap();
        assert_eq!(span.start, 0);
        assert_eq!(span.end, 3);
        assert!(!span.has_tag_prefix);
    }

    #[test]
    fn test_tag_prefixed_block() {
        let raw = lines("# Tags: prod\nHost web\n    HostName h\n\nHost other\n");
        let span = locate_host(&raw, "web").unwrap();
        assert_eq!(span.start, 0);
        assert_eq!(span.end, 3);
        assert!(span.has_tag_prefix);
    }

    #[test]
    fn test_block_ends_at_next_host_without_separator() {
        let raw = lines("Host a\n    HostName 1\nHost b\n    HostName 2\n");
        let span = locate_host(&raw, "a").unwrap();
        assert_eq!((span.start, span.end), (0, 2));
    }

    #[test]
    fn test_block_in_middle_of_file() {
        let raw = lines("Host a\n    HostName 1\n\nHost b\n    HostName 2\n\nHost c\n");
        let span = locate_host(&raw, "b").unwrap();
        assert_eq!((span.start, span.end), (3, 5));
    }

    #[test]
    fn test_no_prefix_matching_on_names() {
        let raw = lines("Host web\n    HostName h\n\nHost web2\n    HostName i\n");
        let span = locate_host(&raw, "web2").unwrap();
        assert_eq!(span.start, 3);
        assert!(locate_host(&raw, "we").is_none());
    }

    #[test]
    fn test_not_found() {
        let raw = lines("Host a\n    HostName 1\n");
        assert!(locate_host(&raw, "missing").is_none());
    }

    #[test]
    fn test_block_runs_to_eof() {
        let raw = lines("Host a\n    HostName 1\n    User u");
        let span = locate_host(&raw, "a").unwrap();
        assert_eq!(span.end, 3);
    }

    #[test]
    fn test_tags_line_separated_by_blank_is_not_part_of_span() {
        // A gap between the annotation and the declaration breaks the
        // prefix association for the locator, even though the parser's
        // pending-tags accumulator still attributes the labels.
        let raw = lines("# Tags: prod\n\nHost web\n    HostName h\n");
        let span = locate_host(&raw, "web").unwrap();
        assert_eq!(span.start, 2);
        assert!(!span.has_tag_prefix);
    }

    #[test]
    fn test_indented_host_line_still_matches() {
        let raw = lines("  Host web\n    HostName h\n");
        let span = locate_host(&raw, "web").unwrap();
        assert_eq!(span.start, 0);
    }
}
