//! # URL Scanner
//!
//! A URL is scanned in three steps:
//! 1. the head pattern matches an optional protocol and a dotted run of
//!    domain labels;
//! 2. the longest prefix of that run ending in a known TLD is kept;
//! 3. the tail pattern extends the domain with a port, path, and query.
//!
//! URLs without a protocol are held to the ASCII domain rule and, unless
//! [`ExtractorOptions::bare_domains`] is set, must carry a path.

use core::ops::Range;

use crate::{
    entities::{EntityKind, Subgroup},
    patterns::{PatternLibrary, RawMatch, TldKind},
    scanner::{
        Candidate,
        ExtractorOptions,
        boundaries::{
            char_before,
            is_ascii_domain_char,
            next_char_boundary,
            url_preceding_ok,
            url_without_protocol_preceding_ok,
        },
    },
};

/// Scan `text` for URLs.
///
/// ## Arguments
/// * `library` - the compiled patterns.
/// * `options` - protocol-less URL handling is read from here.
/// * `text` - the text to scan.
///
/// ## Returns
/// Non-overlapping candidates, in text order.
pub fn scan_urls(
    library: &PatternLibrary,
    options: &ExtractorOptions,
    text: &str,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(head) = library.url_head().match_at(text, pos) else {
            break;
        };
        let start = head.range.start;

        if !url_preceding_ok(char_before(text, start)) {
            log::trace!("url at {start}: invalid preceding character");
            pos = next_char_boundary(text, start);
            continue;
        }

        let Some(domain) = head.group(Subgroup::Domain) else {
            pos = next_char_boundary(text, start);
            continue;
        };
        let Some(domain_end) = resolve_tld(library, text, domain.clone()) else {
            log::trace!("url at {start}: no valid top-level domain");
            // A later start within the run sees the same labels; only the
            // last label may still begin a protocol (`foo.http://...`).
            pos = last_label_start(text, domain);
            continue;
        };

        let tail = library
            .url_tail()
            .match_at(text, domain_end)
            .filter(|tail| tail.range.start == domain_end)
            .unwrap_or_else(|| RawMatch::new(domain_end..domain_end));
        pos = tail.range.end;

        let mut raw = RawMatch::new(start..tail.range.end);
        let domain_start = match head.group(Subgroup::Protocol) {
            Some(protocol) => {
                let domain_start = protocol.end;
                raw = raw.with_group(Subgroup::Protocol, protocol);
                domain_start
            }
            None => {
                let Some(domain_start) =
                    accept_without_protocol(library, options, text, start..domain_end, &tail)
                else {
                    continue;
                };
                raw.range.start = domain_start;
                domain_start
            }
        };
        raw = raw.with_group(Subgroup::Domain, domain_start..domain_end);
        raw.groups.extend(tail.groups);

        candidates.push(Candidate::new(
            EntityKind::Url,
            truncate_short_link(library, text, raw),
        ));
    }

    candidates
}

/// Find the end of the longest valid domain within a run of labels.
///
/// A valid domain ends in a known TLD, has no `_` in the label before the
/// TLD, and is not followed by an at-sign.
///
/// ## Returns
/// The byte offset the domain ends at, or `None`.
fn resolve_tld(
    library: &PatternLibrary,
    text: &str,
    domain: Range<usize>,
) -> Option<usize> {
    let mut labels: Vec<Range<usize>> = Vec::new();
    let mut offset = domain.start;
    for label in text[domain.clone()].split('.') {
        labels.push(offset..offset + label.len());
        offset += label.len() + 1;
    }

    (2..=labels.len()).rev().find_map(|count| {
        let tld = labels[count - 1].clone();
        let name = labels[count - 2].clone();

        let valid = library.tld_kind(&text[tld.clone()]).is_some()
            && !text[name].contains('_')
            && !text[tld.end..].starts_with(['@', '\u{FF20}']);
        valid.then_some(tld.end)
    })
}

/// The byte offset of the last label of a dotted run.
fn last_label_start(
    text: &str,
    domain: Range<usize>,
) -> usize {
    text[domain.clone()]
        .rfind('.')
        .map_or(domain.end, |dot| domain.start + dot + 1)
}

/// Apply the protocol-less URL rules.
///
/// ## Returns
/// The start of the accepted ASCII domain, or `None` if rejected.
fn accept_without_protocol(
    library: &PatternLibrary,
    options: &ExtractorOptions,
    text: &str,
    domain: Range<usize>,
    tail: &RawMatch,
) -> Option<usize> {
    if !options.urls_without_protocol() {
        return None;
    }
    if !url_without_protocol_preceding_ok(char_before(text, domain.start)) {
        log::trace!("url at {}: invalid character before protocol-less domain", domain.start);
        return None;
    }

    let ascii_len: usize = text[domain.clone()]
        .chars()
        .rev()
        .take_while(|&ch| is_ascii_domain_char(ch))
        .map(char::len_utf8)
        .sum();
    let ascii = text[domain.end - ascii_len..domain.end].trim_start_matches(['.', '-', '_']);
    let labels: Vec<&str> = ascii.split('.').collect();
    if labels.len() < 2 {
        log::trace!("url at {}: no ASCII domain", domain.start);
        return None;
    }

    if tail.group(Subgroup::Path).is_none() {
        if !options.bare_domains() {
            log::trace!("url at {}: protocol-less domain without a path", domain.start);
            return None;
        }
        let tld = labels[labels.len() - 1];
        if labels.len() == 2
            && library.tld_kind(tld) == Some(TldKind::CountryCode)
            && !library.is_special_short_cctld(tld)
        {
            log::trace!("url at {}: bare country-code domain", domain.start);
            return None;
        }
    }

    Some(domain.end - ascii.len())
}

/// Cut a `t.co` short link down to its `/code` path.
fn truncate_short_link(
    library: &PatternLibrary,
    text: &str,
    raw: RawMatch,
) -> RawMatch {
    let Some(m) = library.short_link().find(&text[raw.range.clone()]) else {
        return raw;
    };
    let end = raw.range.start + m.end();

    RawMatch {
        range: raw.range.start..end,
        groups: raw
            .groups
            .into_iter()
            .filter(|(_, range)| range.start < end)
            .map(|(role, range)| (role, range.start..range.end.min(end)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn urls_with(
        options: &ExtractorOptions,
        text: &str,
    ) -> Vec<String> {
        scan_urls(PatternLibrary::global(), options, text)
            .iter()
            .map(|c| text[c.range()].to_string())
            .collect()
    }

    fn urls(text: &str) -> Vec<String> {
        urls_with(&ExtractorOptions::default(), text)
    }

    fn only(text: &str) -> Candidate {
        let found = scan_urls(PatternLibrary::global(), &ExtractorOptions::default(), text);
        assert_eq!(found.len(), 1, "{text}");
        found.into_iter().next().unwrap()
    }

    fn group<'a>(
        text: &'a str,
        c: &Candidate,
        role: Subgroup,
    ) -> Option<&'a str> {
        c.raw.group(role).map(|r| &text[r])
    }

    #[test]
    fn test_with_protocol() {
        assert_eq!(urls("see http://example.com now"), vec!["http://example.com"]);
        assert_eq!(urls("HTTPS://Example.COM/x"), vec!["HTTPS://Example.COM/x"]);
        assert_eq!(
            urls("a https://a.io b http://b.co.uk/c"),
            vec!["https://a.io", "http://b.co.uk/c"]
        );
    }

    #[test]
    fn test_subgroups() {
        let text = "go to https://www.example.com:8080/a/b?q=1&r=two now";
        let c = only(text);
        assert_eq!(group(text, &c, Subgroup::Protocol), Some("https://"));
        assert_eq!(group(text, &c, Subgroup::Domain), Some("www.example.com"));
        assert_eq!(group(text, &c, Subgroup::Port), Some("8080"));
        assert_eq!(group(text, &c, Subgroup::Path), Some("/a/b"));
        assert_eq!(group(text, &c, Subgroup::Query), Some("?q=1&r=two"));
    }

    #[test]
    fn test_path_endings() {
        let text = "check http://example.com/a_(b)/path.";
        let c = only(text);
        assert_eq!(group(text, &c, Subgroup::Path), Some("/a_(b)/path"));

        assert_eq!(
            urls("(see http://en.wikipedia.org/wiki/Primer_(film))"),
            vec!["http://en.wikipedia.org/wiki/Primer_(film)"]
        );
        assert_eq!(urls("http://example.com/?q=1."), vec!["http://example.com/?q=1"]);
    }

    #[test]
    fn test_tld_validation() {
        assert!(urls("http://example.notatld").is_empty());
        assert_eq!(urls("http://example.com.notatld/x"), vec!["http://example.com"]);
        assert_eq!(urls("http://xn--80ak6aa92e.xn--p1ai"), vec!["http://xn--80ak6aa92e.xn--p1ai"]);
        assert!(urls("http://foo_bar.com").is_empty());
        assert_eq!(urls("http://sub_domain.example.com"), vec!["http://sub_domain.example.com"]);
    }

    #[test]
    fn test_run_without_tld() {
        assert!(urls(&"a.".repeat(32_000)).is_empty());
        assert!(urls(&"label.".repeat(10_000)).is_empty());

        let text = format!("{}com/x", "a_b.".repeat(5_000));
        assert!(urls(&text).is_empty());

        assert_eq!(
            urls("foo.xyzzy.http://example.com"),
            vec!["http://example.com"]
        );
    }

    #[test]
    fn test_preceding() {
        assert!(urls("xhttp://example.com").is_empty());
        assert!(urls("$http://example.com").is_empty());
        assert!(urls("user@example.com/x").is_empty());
        assert_eq!(urls("(http://example.com)"), vec!["http://example.com"]);
    }

    #[test]
    fn test_without_protocol() {
        assert_eq!(urls("see example.com/path"), vec!["example.com/path"]);
        assert!(urls("see example.com").is_empty());
        assert!(urls("-example.com/path").is_empty());
        assert_eq!(urls("a-example.com/path"), vec!["a-example.com/path"]);
        assert!(urls("a.b_example.com/path").is_empty());
        assert_eq!(urls("日本example.com/x"), vec!["example.com/x"]);
        assert!(urls("日本.com/x").is_empty());

        let off = ExtractorOptions::default().with_urls_without_protocol(false);
        assert!(urls_with(&off, "see example.com/path").is_empty());
        assert_eq!(urls_with(&off, "see http://example.com"), vec!["http://example.com"]);
    }

    #[test]
    fn test_bare_domains() {
        let bare = ExtractorOptions::default().with_bare_domains(true);
        assert_eq!(urls_with(&bare, "see example.com."), vec!["example.com"]);
        assert_eq!(urls_with(&bare, "see example.co"), vec!["example.co"]);
        assert!(urls_with(&bare, "see example.jp").is_empty());
        assert_eq!(urls_with(&bare, "see example.jp/"), vec!["example.jp/"]);
        assert_eq!(urls_with(&bare, "see www.example.jp"), vec!["www.example.jp"]);
    }

    #[test]
    fn test_short_link() {
        let text = "http://t.co/abc123xyz?x=1";
        let c = only(text);
        assert_eq!(&text[c.range()], "http://t.co/abc123xyz");
        assert_eq!(group(text, &c, Subgroup::Path), Some("/abc123xyz"));
        assert_eq!(c.raw.group(Subgroup::Query), None);
    }
}
