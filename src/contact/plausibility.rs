//! Heuristic email plausibility filter.
//!
//! This is a guess based on deny and allow lists. Nothing here contacts a mail
//! server, so a `Plausible` verdict says nothing about deliverability.

use std::sync::LazyLock;

use regex::RegexSet;
use thiserror::Error;

const DENY_PATTERNS: &[&str] = &[
    // test and placeholder addresses
    r"^test",
    r"fake",
    r"dummy",
    r"sample",
    r"example",
    // keyboard runs
    r"123456",
    r"abcdef",
    r"qwerty",
    // misspelled providers
    r"gmail\.co$",
    r"yahoo\.co$",
    r"hotmail\.co$",
    r"gmial",
    r"yahooo",
    r"hotmial",
    r"outlok",
    // one or two letter local parts
    r"^[a-z]{1,2}@",
    // doubled or misplaced punctuation
    r"\.\.|@@|\.@|@\.",
];

const KNOWN_PROVIDERS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "icloud.com",
    "protonmail.com",
    "aol.com",
    "live.com",
    "msn.com",
    "rediffmail.com",
    "zoho.com",
    "yandex.com",
    "mail.com",
    "gmx.com",
    "fastmail.com",
];

const KNOWN_TLDS: &[&str] = &[
    "com", "org", "net", "edu", "gov", "mil", "int", "co", "in", "uk", "de", "fr", "jp", "au",
    "ca", "br", "mx", "ru", "cn", "it", "es", "nl", "se", "no", "dk", "fi", "pl", "cz", "hu", "ro",
    "bg", "hr", "si", "sk", "lt", "lv", "ee", "gr", "pt", "ie", "lu", "mt", "cy",
];

static DENY_SET: LazyLock<Result<RegexSet, regex::Error>> =
    LazyLock::new(|| RegexSet::new(DENY_PATTERNS));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Plausible,
    Suspicious,
    UnknownDomain,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlausibilityError {
    #[error("deny patterns unavailable: {0}")]
    PatternsUnavailable(String),
    #[error("address has no domain part")]
    MissingDomain,
}

/// Callers are expected to fail open on `Err`.
pub fn verify(email: &str) -> Result<Verdict, PlausibilityError> {
    let email = email.to_lowercase();
    let deny = DENY_SET
        .as_ref()
        .map_err(|e| PlausibilityError::PatternsUnavailable(e.to_string()))?;
    if deny.is_match(&email) {
        return Ok(Verdict::Suspicious);
    }

    let domain = match email.split_once('@') {
        Some((_, d)) if !d.is_empty() => d,
        _ => return Err(PlausibilityError::MissingDomain),
    };
    if KNOWN_PROVIDERS.contains(&domain) || has_known_tld(domain) {
        Ok(Verdict::Plausible)
    } else {
        Ok(Verdict::UnknownDomain)
    }
}

fn has_known_tld(domain: &str) -> bool {
    domain
        .rsplit_once('.')
        .is_some_and(|(_, tld)| KNOWN_TLDS.contains(&tld))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deny_patterns_compile() {
        assert!(DENY_SET.is_ok());
    }

    #[test]
    fn test_known_provider_is_plausible() {
        assert_eq!(verify("someone@gmail.com"), Ok(Verdict::Plausible));
        assert_eq!(verify("Someone@FastMail.com"), Ok(Verdict::Plausible));
    }

    #[test]
    fn test_known_tld_is_plausible() {
        assert_eq!(verify("jane.doe@university.edu"), Ok(Verdict::Plausible));
        assert_eq!(verify("ravi@company.co.in"), Ok(Verdict::Plausible));
        assert_eq!(verify("anna@firma.de"), Ok(Verdict::Plausible));
    }

    #[test]
    fn test_unknown_tld() {
        assert_eq!(verify("someone@startup.io"), Ok(Verdict::UnknownDomain));
        assert_eq!(verify("someone@localhost"), Ok(Verdict::UnknownDomain));
    }

    #[test]
    fn test_deny_patterns() {
        let denied = [
            "testing@gmail.com",
            "mr.fake@outlook.com",
            "john123456@gmail.com",
            "abcdefg@yahoo.com",
            "qwertyuser@gmail.com",
            "someone@gmail.co",
            "someone@yahoo.co",
            "someone@gmial.com",
            "someone@yahooo.com",
            "someone@hotmial.com",
            "someone@outlok.com",
            "ab@gmail.com",
            "x@gmail.com",
            "jane..doe@gmail.com",
            "jane.@gmail.com",
        ];
        for email in denied {
            assert_eq!(verify(email), Ok(Verdict::Suspicious), "{email}");
        }
    }

    #[test]
    fn test_short_local_part_only_letters() {
        // digits are not covered by the short local part rule
        assert_eq!(verify("a1@gmail.com"), Ok(Verdict::Plausible));
        assert_eq!(verify("abc@gmail.com"), Ok(Verdict::Plausible));
    }

    #[test]
    fn test_missing_domain() {
        assert_eq!(verify("nobody"), Err(PlausibilityError::MissingDomain));
        assert_eq!(verify("nobody@"), Err(PlausibilityError::MissingDomain));
    }
}
