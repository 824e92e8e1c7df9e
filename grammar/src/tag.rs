//! Exclusion tags.

use std::fmt;

/// A label used to forbid redundant fragment combinations within one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Color,
    Shape,
    Position,
}

impl Tag {
    pub const ALL: [Tag; 3] = [Tag::Color, Tag::Shape, Tag::Position];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Color => "color",
            Tag::Shape => "shape",
            Tag::Position => "position",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A small set of tags, passed by value through generation.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TagSet(u8);

impl TagSet {
    /// The empty set.
    pub const EMPTY: TagSet = TagSet(0);

    /// Build a set from a list of tags.
    pub fn of(tags: &[Tag]) -> Self {
        tags.iter().fold(Self::EMPTY, |set, &tag| set.with(tag))
    }

    pub fn contains(self, tag: Tag) -> bool {
        self.0 & tag.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// This set plus `tag`.
    pub fn with(self, tag: Tag) -> Self {
        Self(self.0 | tag.bit())
    }

    pub fn union(self, other: TagSet) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns true if the sets share any tag.
    pub fn intersects(self, other: TagSet) -> bool {
        self.0 & other.0 != 0
    }

    pub fn iter(self) -> impl Iterator<Item = Tag> {
        Tag::ALL.into_iter().filter(move |&t| self.contains(t))
    }
}

impl fmt::Debug for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
