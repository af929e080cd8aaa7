//! # Entity Patterns

use core::ops::Range;

use regex::Regex;

use crate::{
    entities::Subgroup,
    errors::{TCResult, TagchipperError},
};

/// A transient match of one [`EntityPattern`]; byte offsets into the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    /// The full matched span.
    pub range: Range<usize>,

    /// The sub-groups which participated in the match, in pattern order.
    pub groups: Vec<(Subgroup, Range<usize>)>,
}

impl RawMatch {
    /// Create a raw match with no sub-groups.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            range,
            groups: Vec::new(),
        }
    }

    /// Append a sub-group.
    pub fn with_group(
        mut self,
        role: Subgroup,
        range: Range<usize>,
    ) -> Self {
        self.groups.push((role, range));
        self
    }

    /// The byte range of a sub-group, if it participated.
    pub fn group(
        &self,
        role: Subgroup,
    ) -> Option<Range<usize>> {
        self.groups
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, range)| range.clone())
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.range.len()
    }

    /// Is the match empty?
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// A compiled matcher plus the mapping from its named capture groups to
/// their [`Subgroup`] roles.
#[derive(Debug, Clone)]
pub struct EntityPattern {
    regex: Regex,
    roles: &'static [(&'static str, Subgroup)],
}

impl EntityPattern {
    /// Compile a pattern.
    ///
    /// ## Arguments
    /// * `pattern` - the regex source.
    /// * `roles` - `(capture name, role)` pairs; every name must be a group in `pattern`.
    pub fn new(
        pattern: &str,
        roles: &'static [(&'static str, Subgroup)],
    ) -> TCResult<Self> {
        let regex = Regex::new(pattern)?;
        for (name, _) in roles {
            if !regex.capture_names().flatten().any(|n| n == *name) {
                return Err(TagchipperError::Pattern(format!(
                    "capture group {name:?} not found in pattern"
                )));
            }
        }
        Ok(Self { regex, roles })
    }

    /// The underlying regex.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The regex source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Find the leftmost match starting at or after `start`.
    ///
    /// Anchors (`^`, `\A`) still refer to the start of `text`.
    ///
    /// ## Returns
    /// The match and its participating sub-groups, or `None`.
    pub fn match_at(
        &self,
        text: &str,
        start: usize,
    ) -> Option<RawMatch> {
        let caps = self.regex.captures_at(text, start)?;
        let full = caps.get(0)?;

        let mut raw = RawMatch::new(full.range());
        for (name, role) in self.roles {
            if let Some(m) = caps.name(name) {
                raw.groups.push((*role, m.range()));
            }
        }
        Some(raw)
    }
}
