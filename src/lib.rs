//! dfilter - a DNS-aware trie for fast filtering of domain names
//!
//! Builds a match index from a list of criteria (exact domains and
//! wildcarded zone cuts) and tests arbitrary domain names against it under
//! two disciplines:
//! - Exact matching: only domains inserted verbatim match
//! - Wildcard matching: `*.zone` covers anything one or more labels below
//!   the cut, and `+.zone` additionally covers the zone apex itself
//!
//! The trie is keyed on reversed DNS labels (TLD first), so providing
//! `*.org`, `google.com`, and `*.mail.google.com` constructs:
//!
//! ```text
//! .
//! +-- org
//! |   +-- *
//! +-- com
//!     +-- google
//!         +-- mail
//!             +-- *
//! ```
//!
//! # Example
//!
//! ```rust
//! use dfilter_r::{DomainTrie, MatchMode};
//!
//! let patterns = vec![
//!     "*.google.com".to_string(),
//!     "www.google.org".to_string(),
//! ];
//! let trie = DomainTrie::new(&patterns);
//!
//! // Zone-cut wildcard covers any depth below the cut
//! assert!(trie.wildcard_match("foo.google.com"));
//! assert!(trie.wildcard_match("bar.foo.google.com"));
//! assert!(!trie.wildcard_match("google.com"));
//!
//! // Exact matching ignores wildcards entirely
//! assert!(trie.exact_match("www.google.org"));
//! assert!(!trie.exact_match("foo.google.com"));
//!
//! // Or pick the discipline at runtime
//! assert!(trie.matches("www.google.org", MatchMode::Exact));
//! ```
//!
//! Patterns ingested from untrusted sources can be vetted by a pluggable
//! [`DomainPolicy`]; see [`PublicSuffixPolicy`] for the strict variant that
//! rejects syntactically invalid domains and unknown suffixes.
//!
//! The companion `dfilter` binary reads domains from stdin, one per line,
//! and prints those covered by a match file (or, inverted, those that are
//! not).

pub mod domain;
pub mod error;
pub mod filter;
pub mod matcher;
pub mod parser;

// Re-export commonly used items
pub use domain::{
    has_listed_suffix, is_dns_name, normalize, DomainPolicy, NilPolicy, PublicSuffixPolicy,
};
pub use error::{FilterError, Result};
pub use filter::{DomainFilter, DEFAULT_CACHE_SIZE};
pub use matcher::{split_wildcard, DomainTrie, MatchMode, Wildcard};
pub use parser::{parse_patterns, parse_patterns_from_file};

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_full_workflow() {
        let match_list = r#"
# corporate block list
*.doubleclick.net
tracker.example.com
+.ads.example.net
"#;

        let patterns = parse_patterns(match_list);
        assert_eq!(patterns.len(), 3);

        let trie = DomainTrie::new(&patterns);
        assert_eq!(trie.len(), 3);

        let filter = DomainFilter::new(trie, MatchMode::Wildcard, false);

        let input = "\
stats.doubleclick.net
tracker.example.com
ads.example.net
banner.ads.example.net
www.example.org
";
        let mut out = Vec::new();
        let kept = filter.run(Cursor::new(input), &mut out).unwrap();

        assert_eq!(kept, 4);
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "stats.doubleclick.net\ntracker.example.com\nads.example.net\nbanner.ads.example.net\n"
        );
    }
}
