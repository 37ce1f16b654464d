pub mod labels;
mod trie;

pub use labels::{split_wildcard, Wildcard};
pub use trie::DomainTrie;

/// Domain matching discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Only fully qualified domains inserted verbatim match; zone wildcards
    /// are ignored.
    Exact,
    /// Zone wildcards apply: `*.example.com` covers `foo.example.com`,
    /// `bar.foo.example.com`, etc., at any depth below the cut.
    Wildcard,
}
