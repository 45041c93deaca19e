use std::fmt;

use super::wordset::WORDSET_COUNT;

/// Identifier of one of the built-in wordsets (0-based).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WordsetId(u8);

impl WordsetId {
    /// Creates a `WordsetId`, returning `None` when no built-in set has this index.
    #[must_use]
    pub fn new(id: u8) -> Option<Self> {
        (usize::from(id) < WORDSET_COUNT).then_some(Self(id))
    }

    /// Returns the underlying index.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    pub(crate) const fn from_index_unchecked(id: u8) -> Self {
        Self(id)
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Debug for WordsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WordsetId({})", self.0)
    }
}

// Shown to users 1-based, as "Wordset 1".."Wordset 3".
impl fmt::Display for WordsetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wordset {}", u16::from(self.0) + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wordset_id_rejects_out_of_range() {
        assert!(WordsetId::new(2).is_some());
        assert!(WordsetId::new(3).is_none());
    }

    #[test]
    fn wordset_id_display_is_one_based() {
        let id = WordsetId::new(0).unwrap();
        assert_eq!(id.to_string(), "Wordset 1");
        assert_eq!(format!("{id:?}"), "WordsetId(0)");
    }
}
