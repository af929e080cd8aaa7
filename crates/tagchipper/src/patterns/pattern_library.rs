//! # Pattern Library

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::{
    chars::CharClassName::{self, *},
    entities::Subgroup,
    errors::TCResult,
    patterns::{
        EntityPattern,
        class_patterns::{
            AT_SIGNS,
            CTRL_BODY,
            HASH_SIGNS,
            PROTOCOL,
            URL_PATH_CHARS_BODY,
            URL_PATH_ENDING_BODY,
            URL_QUERY_CHARS,
            URL_QUERY_ENDING,
            class_pattern,
            negated_class_pattern,
            union_body,
        },
        tlds::{COUNTRY_CODE_TLDS, GENERIC_TLDS, SPECIAL_SHORT_CCTLDS, is_punycode_tld},
    },
    types::TCHashSet,
};

static HASHTAG_ROLES: &[(&str, Subgroup)] = &[("tag", Subgroup::Tag)];
static MENTION_ROLES: &[(&str, Subgroup)] = &[
    ("username", Subgroup::Username),
    ("list_slug", Subgroup::ListSlug),
];
static REPLY_ROLES: &[(&str, Subgroup)] = &[("username", Subgroup::Username)];
static URL_HEAD_ROLES: &[(&str, Subgroup)] = &[
    ("protocol", Subgroup::Protocol),
    ("domain", Subgroup::Domain),
];
static URL_TAIL_ROLES: &[(&str, Subgroup)] = &[
    ("port", Subgroup::Port),
    ("path", Subgroup::Path),
    ("query", Subgroup::Query),
];
static CASHTAG_ROLES: &[(&str, Subgroup)] = &[("symbol", Subgroup::Symbol)];

/// ASCII punctuation, less `-` and `_`; those may appear inside a domain label.
const PUNCTUATION_NO_HYPHEN_UNDERSCORE_BODY: &str = r##"!"#$%&'()*+,./:;<=>?@\[\]^`{|}~"##;

/// The classes which can never appear in a domain label.
const NON_DOMAIN_CLASSES: &[CharClassName] = &[UnicodeSpace, InvalidControl];

static GLOBAL_LIBRARY: LazyLock<Arc<PatternLibrary>> = LazyLock::new(|| {
    Arc::new(PatternLibrary::try_new().expect("built-in entity patterns must compile"))
});

/// The classification of a top-level domain label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TldKind {
    /// On the generic TLD list.
    Generic,

    /// On the country-code TLD list.
    CountryCode,

    /// An `xn--` punycode label.
    Punycode,
}

/// The compiled entity patterns.
///
/// Built once from the character-class tables; immutable afterwards and
/// safe to share across threads. Most callers want [`PatternLibrary::global`].
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    hashtag: EntityPattern,
    mention: EntityPattern,
    reply: EntityPattern,
    url_head: EntityPattern,
    url_tail: EntityPattern,
    cashtag: EntityPattern,
    cashtag_end: Regex,
    rtl: Regex,
    short_link: Regex,
    generic_tlds: TCHashSet<&'static str>,
    country_code_tlds: TCHashSet<&'static str>,
}

impl PatternLibrary {
    /// The process-wide library, built on first use.
    ///
    /// ## Panics
    /// If the built-in patterns fail to compile; see [`Self::try_new`].
    pub fn global() -> &'static Arc<PatternLibrary> {
        &GLOBAL_LIBRARY
    }

    /// Compile the library.
    pub fn try_new() -> TCResult<Self> {
        let library = Self {
            hashtag: EntityPattern::new(&hashtag_pattern(), HASHTAG_ROLES)?,
            mention: EntityPattern::new(&mention_pattern(), MENTION_ROLES)?,
            reply: EntityPattern::new(&reply_pattern(), REPLY_ROLES)?,
            url_head: EntityPattern::new(&url_head_pattern(), URL_HEAD_ROLES)?,
            url_tail: EntityPattern::new(&url_tail_pattern(), URL_TAIL_ROLES)?,
            cashtag: EntityPattern::new(&cashtag_pattern(), CASHTAG_ROLES)?,
            cashtag_end: Regex::new(r"\A[\s\p{P}]")?,
            rtl: Regex::new(&format!("{}+", class_pattern(&[RtlScripts], "")))?,
            short_link: Regex::new(&format!(r"\A{PROTOCOL}[tT]\.[cC][oO]/[a-zA-Z0-9]+"))?,
            generic_tlds: GENERIC_TLDS.iter().copied().collect(),
            country_code_tlds: COUNTRY_CODE_TLDS.iter().copied().collect(),
        };

        log::debug!(
            "built entity pattern library: hashtag={}B url_head={}B url_tail={}B tlds={}",
            library.hashtag.as_str().len(),
            library.url_head.as_str().len(),
            library.url_tail.as_str().len(),
            library.generic_tlds.len() + library.country_code_tlds.len(),
        );

        Ok(library)
    }

    /// `#tag`; the `tag` group is the body.
    pub fn hashtag(&self) -> &EntityPattern {
        &self.hashtag
    }

    /// `@user` or `@user/list`.
    pub fn mention(&self) -> &EntityPattern {
        &self.mention
    }

    /// `@user` anchored at the start of the text, after only whitespace.
    pub fn reply(&self) -> &EntityPattern {
        &self.reply
    }

    /// Optional protocol plus a dotted run of domain labels.
    ///
    /// The TLD is not validated by the regex; see [`Self::tld_kind`].
    pub fn url_head(&self) -> &EntityPattern {
        &self.url_head
    }

    /// Optional `:port`, `/path`, and `?query`; matches (possibly empty)
    /// at any position.
    pub fn url_tail(&self) -> &EntityPattern {
        &self.url_tail
    }

    /// `$SYMBOL` or `$SYMBOL.X`.
    pub fn cashtag(&self) -> &EntityPattern {
        &self.cashtag
    }

    /// Whitespace or Unicode punctuation, anchored at the start of the haystack.
    ///
    /// What may directly follow a cashtag, besides the end of the text.
    pub fn cashtag_end(&self) -> &Regex {
        &self.cashtag_end
    }

    /// Runs of right-to-left script characters.
    pub fn rtl(&self) -> &Regex {
        &self.rtl
    }

    /// A `t.co` short link, anchored at the start of the haystack.
    pub fn short_link(&self) -> &Regex {
        &self.short_link
    }

    /// Classify a domain label as a TLD, case-insensitively.
    ///
    /// ## Returns
    /// `None` if the label is on no list and is not punycode.
    pub fn tld_kind(
        &self,
        label: &str,
    ) -> Option<TldKind> {
        let lower = label.to_lowercase();
        let lower = lower.as_str();
        if self.generic_tlds.contains(lower) {
            Some(TldKind::Generic)
        } else if self.country_code_tlds.contains(lower) {
            Some(TldKind::CountryCode)
        } else if is_punycode_tld(lower) {
            Some(TldKind::Punycode)
        } else {
            None
        }
    }

    /// Is this country-code TLD allowed to stand alone without a path?
    pub fn is_special_short_cctld(
        &self,
        label: &str,
    ) -> bool {
        let lower = label.to_lowercase();
        SPECIAL_SHORT_CCTLDS.contains(&lower.as_str())
    }
}

fn hashtag_pattern() -> String {
    let alpha = class_pattern(&[HashtagEligibleAlpha], "");
    let alnum = class_pattern(&[HashtagEligibleAlpha, HashtagEligibleExtra], "");
    format!("{HASH_SIGNS}(?P<tag>{alnum}*{alpha}{alnum}*)")
}

fn mention_pattern() -> String {
    let word = class_pattern(&[Alnum], "_");
    let alpha = class_pattern(&[Alpha], "");
    let slug = class_pattern(&[Alnum], r"_\-");
    format!("{AT_SIGNS}(?P<username>{word}{{1,20}})(?P<list_slug>/{alpha}{slug}{{0,24}})?")
}

fn reply_pattern() -> String {
    let spaces = class_pattern(&[UnicodeSpace], "");
    let word = class_pattern(&[Alnum], "_");
    format!(r"\A{spaces}*{AT_SIGNS}(?P<username>{word}{{1,20}})")
}

fn url_head_pattern() -> String {
    let start_end = negated_class_pattern(NON_DOMAIN_CLASSES, &format!("{}{CTRL_BODY}", union_body(&[Punctuation])));
    let middle = negated_class_pattern(
        NON_DOMAIN_CLASSES,
        &format!("{PUNCTUATION_NO_HYPHEN_UNDERSCORE_BODY}{CTRL_BODY}"),
    );
    let label = format!("{start_end}(?:{middle}*{start_end})?");
    format!(r"(?P<protocol>{PROTOCOL})?(?P<domain>(?:{label}\.)+{label})")
}

fn url_tail_pattern() -> String {
    let accents = union_body(&[LatinAccents]);
    let general = format!("[{URL_PATH_CHARS_BODY}{accents}]");
    let balanced = format!(r"\((?:{general}+|\({general}+\))\)");
    let ending = format!("(?:[{URL_PATH_ENDING_BODY}{accents}]|{balanced})");
    let path = format!("(?:{general}*(?:{balanced}{general}*)*{ending}|{general}+/)");
    let digit = class_pattern(&[Digit], "");
    format!(
        r"(?::(?P<port>{digit}+))?(?P<path>/{path}*)?(?P<query>\?{URL_QUERY_CHARS}*{URL_QUERY_ENDING})?"
    )
}

fn cashtag_pattern() -> String {
    let alpha = class_pattern(&[Alpha], "");
    format!(r"\$(?P<symbol>{alpha}{{1,6}}(?:[._]{alpha}{{1,2}})?)")
}
