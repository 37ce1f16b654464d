//! Label-level pattern normalization: wildcard marker extraction and
//! reversed label splitting.

/// Wildcard marker stripped from the front of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wildcard {
    /// `*.zone` — matches one or more labels below the zone cut, never the
    /// zone apex itself.
    Below,
    /// `+.zone` — matches the zone apex and anything below it.
    Apex,
}

/// Synthetic label stored in the trie for `*.zone` entries.
pub(crate) const WILDCARD_LABEL: &str = "*";
/// Synthetic label stored in the trie for `+.zone` entries.
pub(crate) const APEX_LABEL: &str = "+";

impl Wildcard {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Wildcard::Below => WILDCARD_LABEL,
            Wildcard::Apex => APEX_LABEL,
        }
    }
}

/// Strip a leading `*.` or `+.` marker from a pattern.
///
/// Only the literal two-character prefix at position 0 counts; an embedded
/// `*` anywhere else stays a literal label. An input shorter than two
/// characters cannot carry a marker and passes through unchanged.
pub fn split_wildcard(pattern: &str) -> (&str, Option<Wildcard>) {
    if let Some(rest) = pattern.strip_prefix("*.") {
        (rest, Some(Wildcard::Below))
    } else if let Some(rest) = pattern.strip_prefix("+.") {
        (rest, Some(Wildcard::Apex))
    } else {
        (pattern, None)
    }
}

/// Split a pattern into its reversed label sequence: lowercased labels
/// ordered from the TLD down to the most specific, with the synthetic
/// sentinel label appended last when a wildcard marker was present.
pub fn reversed_labels(pattern: &str) -> Vec<String> {
    let (base, wildcard) = split_wildcard(pattern);
    let mut labels: Vec<String> = base.rsplit('.').map(|l| l.to_ascii_lowercase()).collect();
    if let Some(w) = wildcard {
        labels.push(w.label().to_string());
    }
    labels
}
