//! Line-filtering driver with match-decision caching.
//!
//! Wraps a [`DomainTrie`] with a matching discipline, optional inversion,
//! and an LRU cache so that streams with many repeated domains (typical for
//! DNS logs) only pay for one trie walk per distinct name.

use std::io::{BufRead, Write};
use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

use crate::error::Result;
use crate::matcher::{DomainTrie, MatchMode};

/// Default match-decision cache size.
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// Filters a stream of domain names against a match index.
pub struct DomainFilter {
    trie: DomainTrie,
    mode: MatchMode,
    invert: bool,
    cache: Mutex<LruCache<String, bool>>,
}

impl DomainFilter {
    /// Create a filter with the default cache size. With `invert` set, lines
    /// that do NOT match are kept.
    pub fn new(trie: DomainTrie, mode: MatchMode, invert: bool) -> Self {
        Self::with_cache_size(trie, mode, invert, DEFAULT_CACHE_SIZE)
    }

    /// Create a filter with an explicit cache size (clamped to at least 1).
    pub fn with_cache_size(
        trie: DomainTrie,
        mode: MatchMode,
        invert: bool,
        cache_size: usize,
    ) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self {
            trie,
            mode,
            invert,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Decide whether an input line should be kept. The line is trimmed
    /// before matching; inversion applies after the match decision.
    pub fn keep(&self, line: &str) -> bool {
        let domain = line.trim();

        let mut cache = self.cache.lock();
        let matched = match cache.get(domain) {
            Some(&hit) => hit,
            None => {
                let matched = self.trie.matches(domain, self.mode);
                cache.put(domain.to_string(), matched);
                matched
            }
        };

        matched != self.invert
    }

    /// Filter `reader` line by line into `writer`, printing kept lines
    /// verbatim (the original, non-normalized text). Returns the number of
    /// lines written.
    pub fn run<R: BufRead, W: Write>(&self, reader: R, writer: &mut W) -> Result<u64> {
        let mut kept = 0u64;
        for line in reader.lines() {
            let line = line?;
            if self.keep(&line) {
                writeln!(writer, "{line}")?;
                kept += 1;
            }
        }
        Ok(kept)
    }
}
