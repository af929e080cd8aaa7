//! # Extracted Entities

use core::ops::Range;

/// The kind of an extracted entity.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum EntityKind {
    /// `#tag`
    Hashtag,

    /// `@user`
    Mention,

    /// `@user/list`
    ListMention,

    /// `https://example.com/path?query`
    Url,

    /// `$TICKER`
    Cashtag,
}

impl EntityKind {
    /// Every kind, in precedence order.
    pub const ALL: &'static [EntityKind] = &[
        Self::Url,
        Self::Mention,
        Self::ListMention,
        Self::Hashtag,
        Self::Cashtag,
    ];

    /// The mention kinds.
    pub const MENTIONS: &'static [EntityKind] = &[Self::Mention, Self::ListMention];

    /// Overlap precedence; lower wins a residual tie.
    ///
    /// `Url > Mention/ListMention > Hashtag > Cashtag`.
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Url => 0,
            Self::Mention | Self::ListMention => 1,
            Self::Hashtag => 2,
            Self::Cashtag => 3,
        }
    }
}

/// The role of a classified sub-span of an entity.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::Display,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
#[non_exhaustive]
pub enum Subgroup {
    /// URL scheme, with the `://`.
    Protocol,

    /// URL host, through the TLD.
    Domain,

    /// URL port digits, without the `:`.
    Port,

    /// URL path, with the leading `/`.
    Path,

    /// URL query, with the leading `?`.
    Query,

    /// Mention username, without the at-sign.
    Username,

    /// List name, with the leading `/`.
    ListSlug,

    /// Hashtag body, without the hash.
    Tag,

    /// Cashtag symbol, without the dollar sign.
    Symbol,
}

/// A classified sub-span of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubgroupSpan {
    /// The role of the sub-span.
    pub role: Subgroup,

    /// Start offset, in the extractor's offset unit.
    pub start: usize,

    /// End offset (exclusive), in the extractor's offset unit.
    pub end: usize,

    /// The sub-span text.
    pub text: String,
}

/// A classified, offset-tagged span of text.
///
/// Offsets are `[start, end)` in the extractor's configured
/// [`OffsetUnit`](crate::offsets::OffsetUnit); code points by default.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    /// The entity kind.
    pub kind: EntityKind,

    /// Start offset, including any sigil (`#`, `@`, `$`).
    pub start: usize,

    /// End offset (exclusive).
    pub end: usize,

    /// The entity value without its sigil: the tag, the username,
    /// the URL text, or the ticker symbol.
    pub display_text: String,

    /// Classified sub-spans, in text order.
    pub subgroups: Vec<SubgroupSpan>,
}

impl Entity {
    /// The `[start, end)` range.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The span length, in offset units.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always `false`; no pattern matches zero-width content.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Does this entity's span intersect `other`'s?
    pub fn overlaps(
        &self,
        other: &Entity,
    ) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Look up a sub-span by role.
    pub fn subgroup(
        &self,
        role: Subgroup,
    ) -> Option<&SubgroupSpan> {
        self.subgroups.iter().find(|g| g.role == role)
    }

    fn subgroup_text(
        &self,
        role: Subgroup,
    ) -> Option<&str> {
        self.subgroup(role).map(|g| g.text.as_str())
    }

    /// The username of a `Mention` or `ListMention`.
    pub fn username(&self) -> Option<&str> {
        self.subgroup_text(Subgroup::Username)
    }

    /// The `/slug` of a `ListMention`.
    pub fn list_slug(&self) -> Option<&str> {
        self.subgroup_text(Subgroup::ListSlug)
    }

    /// The tag of a `Hashtag`.
    pub fn tag(&self) -> Option<&str> {
        self.subgroup_text(Subgroup::Tag)
    }

    /// The symbol of a `Cashtag`.
    pub fn symbol(&self) -> Option<&str> {
        self.subgroup_text(Subgroup::Symbol)
    }

    /// The `scheme://` of a `Url`, if present.
    pub fn protocol(&self) -> Option<&str> {
        self.subgroup_text(Subgroup::Protocol)
    }

    /// The host of a `Url`.
    pub fn domain(&self) -> Option<&str> {
        self.subgroup_text(Subgroup::Domain)
    }

    /// The port digits of a `Url`, if present.
    pub fn port(&self) -> Option<&str> {
        self.subgroup_text(Subgroup::Port)
    }

    /// The `/path` of a `Url`, if present.
    pub fn path(&self) -> Option<&str> {
        self.subgroup_text(Subgroup::Path)
    }

    /// The `?query` of a `Url`, if present.
    pub fn query(&self) -> Option<&str> {
        self.subgroup_text(Subgroup::Query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(
        kind: EntityKind,
        range: Range<usize>,
    ) -> Entity {
        Entity {
            kind,
            start: range.start,
            end: range.end,
            display_text: String::new(),
            subgroups: vec![],
        }
    }

    #[test]
    fn test_overlaps() {
        let a = entity(EntityKind::Hashtag, 0..4);
        let b = entity(EntityKind::Url, 3..9);
        let c = entity(EntityKind::Cashtag, 4..6);

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
        assert!(b.overlaps(&c));
        assert_eq!(b.len(), 6);
        assert_eq!(b.range(), 3..9);
    }

    #[test]
    fn test_precedence() {
        use EntityKind::*;
        assert!(Url.precedence() < Mention.precedence());
        assert_eq!(Mention.precedence(), ListMention.precedence());
        assert!(Mention.precedence() < Hashtag.precedence());
        assert!(Hashtag.precedence() < Cashtag.precedence());
    }

    #[test]
    fn test_subgroup_lookup() {
        let mut e = entity(EntityKind::ListMention, 0..10);
        e.subgroups = vec![
            SubgroupSpan {
                role: Subgroup::Username,
                start: 1,
                end: 5,
                text: "jack".to_string(),
            },
            SubgroupSpan {
                role: Subgroup::ListSlug,
                start: 5,
                end: 10,
                text: "/list".to_string(),
            },
        ];

        assert_eq!(e.username(), Some("jack"));
        assert_eq!(e.list_slug(), Some("/list"));
        assert_eq!(e.domain(), None);
        assert_eq!(EntityKind::ListMention.to_string(), "list_mention");
        assert_eq!(Subgroup::ListSlug.to_string(), "list_slug");
    }
}
