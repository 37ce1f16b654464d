//! DNS-aware trie keyed on reversed domain labels.
//!
//! Providing `*.org`, `google.com`, and `*.mail.google.com` builds:
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
//! where `google.com` and anything under (but not including) `org` or
//! `mail.google.com` matches with [`DomainTrie::wildcard_match`], and only
//! `google.com` matches with [`DomainTrie::exact_match`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::{debug, warn};

use super::labels::{self, APEX_LABEL, WILDCARD_LABEL};
use super::MatchMode;
use crate::domain::{DomainPolicy, NilPolicy};

/// One label position in the trie. Children are keyed by label, so sibling
/// labels are unique by construction; `terminal` marks that some inserted
/// pattern ends exactly here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct TrieNode {
    children: HashMap<String, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    fn child(&self, label: &str) -> Option<&TrieNode> {
        self.children.get(label)
    }
}

/// Immutable domain match index.
///
/// Built once from a list of pattern strings, read-only thereafter; all
/// query operations are pure traversals, so sharing a trie across threads
/// for concurrent matching needs no locking.
#[derive(Clone)]
pub struct DomainTrie {
    root: TrieNode,
    policy: Arc<dyn DomainPolicy>,
    len: usize,
}

impl DomainTrie {
    /// Build a trie that indexes every pattern as-is (no validation).
    pub fn new(patterns: &[String]) -> Self {
        Self::with_policy(patterns, Arc::new(NilPolicy))
    }

    /// Build a trie, consulting `policy` for each pattern. Rejected patterns
    /// are skipped with a warning; one bad line never voids the rest of the
    /// list. The same policy later vets query domains, which fail closed.
    pub fn with_policy(patterns: &[String], policy: Arc<dyn DomainPolicy>) -> Self {
        let mut trie = Self {
            root: TrieNode::default(),
            policy,
            len: 0,
        };
        let mut skipped = 0usize;
        for pattern in patterns {
            if !trie.insert(pattern) {
                skipped += 1;
            }
        }
        debug!("indexed {} patterns ({} skipped)", trie.len, skipped);
        trie
    }

    /// Insert a single pattern, creating nodes along its reversed label
    /// sequence and marking the final node terminal. Returns false if the
    /// policy rejected the pattern.
    fn insert(&mut self, pattern: &str) -> bool {
        let pattern = pattern.trim();
        let (base, wildcard) = labels::split_wildcard(pattern);
        if !self.policy.is_acceptable(base) {
            warn!("skipping unacceptable pattern: {pattern}");
            return false;
        }

        let mut node = &mut self.root;
        for label in base.rsplit('.') {
            node = node
                .children
                .entry(label.to_ascii_lowercase())
                .or_default();
        }
        if let Some(w) = wildcard {
            node = node.children.entry(w.label().to_string()).or_default();
        }
        // Marking an existing terminal again is a no-op
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
        true
    }

    /// Match only exactly fully qualified domain names, ignoring zone
    /// wildcards stored in the trie.
    pub fn exact_match(&self, domain: &str) -> bool {
        let Some(seq) = self.query_labels(domain) else {
            return false;
        };
        let mut node = &self.root;
        for label in &seq {
            match node.child(label) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.terminal
    }

    /// Match fully qualified domain names and zone wildcards. At every step
    /// a wildcard child short-circuits the walk: `*.google.com` covers
    /// `foo.google.com` and `bar.foo.google.com` alike, however many labels
    /// remain. A `+` sentinel additionally covers the zone apex itself.
    ///
    /// Note that `domain` should not itself contain a wildcard marker.
    pub fn wildcard_match(&self, domain: &str) -> bool {
        let Some(seq) = self.query_labels(domain) else {
            return false;
        };
        let mut node = &self.root;
        for label in &seq {
            if node.child(APEX_LABEL).is_some() || node.child(WILDCARD_LABEL).is_some() {
                return true;
            }
            match node.child(label) {
                Some(next) => node = next,
                None => return false,
            }
        }
        // The apex sentinel also covers the bare zone; `*` requires at least
        // one label below the cut and so does not trigger here.
        node.child(APEX_LABEL).is_some() || node.terminal
    }

    /// Match under the given discipline.
    pub fn matches(&self, domain: &str, mode: MatchMode) -> bool {
        match mode {
            MatchMode::Exact => self.exact_match(domain),
            MatchMode::Wildcard => self.wildcard_match(domain),
        }
    }

    /// True if nothing has been indexed (no patterns, or every pattern was
    /// rejected).
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty() && !self.root.terminal
    }

    /// Number of distinct patterns indexed.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Vet a query domain and split it into its reversed label sequence.
    /// A domain the policy rejects can never match anything.
    fn query_labels(&self, domain: &str) -> Option<Vec<String>> {
        let domain = domain.trim();
        if !self.policy.is_acceptable(domain) {
            return None;
        }
        Some(labels::reversed_labels(domain))
    }
}

impl fmt::Debug for DomainTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainTrie")
            .field("root", &self.root)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

/// Structural equality over the indexed patterns; the validation policy is
/// not compared.
impl PartialEq for DomainTrie {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}
