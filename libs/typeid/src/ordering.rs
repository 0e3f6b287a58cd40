//! Sort orders for TypeIDs.

use std::cmp::Ordering;

use crate::{TypeId, TypeIdDecoded};

/// How to order two TypeIDs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// By type, then by UUID. Same order as comparing the canonical strings.
    #[default]
    Lexicographic,
    /// By UUID (and therefore timestamp), with type only as a tiebreaker.
    TimestampFirst,
}

impl SortOrder {
    /// Compares two decoded TypeIDs.
    #[must_use]
    pub fn compare(self, a: &TypeIdDecoded, b: &TypeIdDecoded) -> Ordering {
        match self {
            SortOrder::Lexicographic => cmp_lexicographic(a, b),
            SortOrder::TimestampFirst => cmp_timestamp_first(a, b),
        }
    }

    /// Compares two encoded TypeIDs without decoding them.
    ///
    /// Base32 suffixes sort like the UUID bytes they encode, so comparing
    /// suffix strings is enough for [`SortOrder::TimestampFirst`].
    #[must_use]
    pub fn compare_encoded(self, a: &TypeId, b: &TypeId) -> Ordering {
        match self {
            SortOrder::Lexicographic => a.as_str().cmp(b.as_str()),
            SortOrder::TimestampFirst => a
                .suffix()
                .cmp(b.suffix())
                .then_with(|| a.type_name().cmp(b.type_name())),
        }
    }
}

pub(crate) fn cmp_lexicographic(a: &TypeIdDecoded, b: &TypeIdDecoded) -> Ordering {
    a.type_name()
        .cmp(b.type_name())
        .then_with(|| a.uuid().cmp(&b.uuid()))
}

pub(crate) fn cmp_timestamp_first(a: &TypeIdDecoded, b: &TypeIdDecoded) -> Ordering {
    a.uuid()
        .cmp(&b.uuid())
        .then_with(|| a.type_name().cmp(b.type_name()))
}
