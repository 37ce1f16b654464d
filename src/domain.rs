//! Domain validity checks and normalization.
//!
//! The trie itself is agnostic about what a "domain" is; callers that ingest
//! patterns from untrusted or unreliable sources plug one of the policies
//! below into [`DomainTrie::with_policy`](crate::matcher::DomainTrie::with_policy)
//! to reject garbage before it enters the index. All checks accept punycode
//! and unicode (IDN) domains.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{FilterError, Result};

/// RFC 1035-ish domain name shape: dot-separated labels of up to 63
/// characters, each starting with an alphanumeric. Underscores are tolerated
/// since they show up in real DNS data (e.g. `_dmarc` records).
static DNS_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_-]{0,62}(\.[A-Za-z0-9_][A-Za-z0-9_-]{0,62})*\.?$")
        .expect("DNS_NAME_PATTERN: hardcoded regex is invalid")
});

/// Sanitize a domain name so common inconsistencies do not occur:
/// trims surrounding whitespace, lowercases, and converts to punycode.
///
/// Domains flowing in from 3rd parties should be normalized before storing
/// or further processing. Returns an error if the punycode conversion fails.
pub fn normalize(domain: &str) -> Result<String> {
    let lowered = domain.trim().to_lowercase();
    idna::domain_to_ascii(&lowered).map_err(|_| FilterError::InvalidDomain(lowered))
}

/// Check that a domain is syntactically plausible: non-empty, at most 253
/// characters, label charset per [`DNS_NAME_PATTERN`], and not a bare IP
/// address.
pub fn is_dns_name(domain: &str) -> bool {
    if domain.is_empty() || domain.len() > 253 {
        return false;
    }
    if domain.parse::<std::net::IpAddr>().is_ok() {
        return false;
    }
    DNS_NAME_PATTERN.is_match(domain)
}

/// Check whether the domain's effective TLD appears on the public suffix
/// list. ICANN-managed suffixes may be a single label; privately-managed
/// suffixes must be multi-label, so a known single-label private entry (or an
/// unknown suffix) does not count.
pub fn has_listed_suffix(domain: &str) -> bool {
    match psl::suffix(domain.as_bytes()) {
        Some(suffix) => match suffix.typ() {
            Some(psl::Type::Icann) => true,
            Some(psl::Type::Private) => suffix.as_bytes().contains(&b'.'),
            None => false,
        },
        None => false,
    }
}

/// Pluggable acceptance check consulted by the trie.
///
/// Construction asks the policy about each pattern (wildcard marker already
/// stripped) and skips rejected ones; queries are checked as-is and fail
/// closed, since a malformed query can never match anything.
pub trait DomainPolicy: Send + Sync {
    fn is_acceptable(&self, domain: &str) -> bool;
}

/// Policy that accepts any label sequence. This is the default: the trie
/// indexes whatever it is given, garbage included.
#[derive(Debug, Clone, Copy, Default)]
pub struct NilPolicy;

impl DomainPolicy for NilPolicy {
    fn is_acceptable(&self, _domain: &str) -> bool {
        true
    }
}

/// Policy that only accepts syntactically valid domains carrying a
/// recognized public suffix. IDN input is converted to ASCII first.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublicSuffixPolicy;

impl DomainPolicy for PublicSuffixPolicy {
    fn is_acceptable(&self, domain: &str) -> bool {
        let Ok(ascii) = normalize(domain) else {
            return false;
        };
        is_dns_name(&ascii) && has_listed_suffix(&ascii)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_and_lowercases() {
        assert_eq!(normalize("  WWW.Google.COM ").unwrap(), "www.google.com");
    }

    #[test]
    fn test_normalize_converts_idn_to_punycode() {
        assert_eq!(normalize("bücher.example").unwrap(), "xn--bcher-kva.example");
    }

    #[test]
    fn test_is_dns_name() {
        assert!(is_dns_name("www.google.com"));
        assert!(is_dns_name("com"));
        assert!(is_dns_name("foo.com.gza.com"));
        assert!(is_dns_name("_dmarc.example.com"));

        assert!(!is_dns_name(""));
        assert!(!is_dns_name("not.a.real.!@#.com"));
        assert!(!is_dns_name("*.foo.com"));
        assert!(!is_dns_name("192.168.1.1"));
        // A label longer than 63 characters is not a valid DNS label
        let long_label = format!("{}.com", "a".repeat(64));
        assert!(!is_dns_name(&long_label));
    }

    #[test]
    fn test_has_listed_suffix() {
        assert!(has_listed_suffix("google.com"));
        assert!(has_listed_suffix("example.co.uk"));
        assert!(has_listed_suffix("biz"));

        assert!(!has_listed_suffix("notarealdomain"));
        assert!(!has_listed_suffix("not.a.real.domain.asdashfkjah"));
    }

    #[test]
    fn test_nil_policy_accepts_everything() {
        assert!(NilPolicy.is_acceptable("google.com"));
        assert!(NilPolicy.is_acceptable("notarealdomain"));
        assert!(NilPolicy.is_acceptable(""));
        assert!(NilPolicy.is_acceptable("!@#$"));
    }

    #[test]
    fn test_public_suffix_policy() {
        let policy = PublicSuffixPolicy;
        assert!(policy.is_acceptable("google.com"));
        assert!(policy.is_acceptable("WWW.Google.COM"));
        assert!(policy.is_acceptable("onizuka.homelinux.org"));

        assert!(!policy.is_acceptable("notarealdomain"));
        assert!(!policy.is_acceptable("*.biz"));
        assert!(!policy.is_acceptable("*nadji.us"));
        assert!(!policy.is_acceptable(""));
    }
}
