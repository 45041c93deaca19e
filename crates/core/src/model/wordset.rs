use super::ids::WordsetId;
use super::pair::WordPair;
use super::week::Week;

/// Number of pairs in every built-in wordset.
pub const PAIRS_PER_WORDSET: usize = 12;

pub(crate) const WORDSET_COUNT: usize = 3;

const fn p(left: &'static str, right: &'static str) -> WordPair {
    WordPair::new(left, right)
}

// Each set holds 12 one-syllable, unrelated pairs.
#[rustfmt::skip]
static WORDSETS: [[WordPair; PAIRS_PER_WORDSET]; WORDSET_COUNT] = [
    [
        p("cat", "ring"), p("sun", "jam"), p("bed", "rope"), p("fish", "bell"),
        p("tree", "mask"), p("star", "shoe"), p("book", "coal"), p("rain", "gold"),
        p("glass", "farm"), p("road", "leaf"), p("bread", "wave"), p("clock", "sand"),
    ],
    [
        p("ship", "barn"), p("salt", "glove"), p("stone", "card"), p("wind", "seat"),
        p("lamp", "knot"), p("foot", "surf"), p("milk", "twig"), p("ring", "cup"),
        p("seed", "mine"), p("bell", "sky"), p("leaf", "hook"), p("mask", "page"),
    ],
    [
        p("coal", "bed"), p("gate", "fish"), p("wave", "bread"), p("sand", "star"),
        p("chair", "rain"), p("hand", "glass"), p("card", "sun"), p("wheel", "book"),
        p("barn", "cat"), p("rope", "tree"), p("bird", "road"), p("jam", "ship"),
    ],
];

/// One of the fixed, built-in collections of word pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wordset {
    id: WordsetId,
    pairs: &'static [WordPair; PAIRS_PER_WORDSET],
}

impl Wordset {
    /// Looks up a built-in wordset.
    #[must_use]
    pub fn get(id: WordsetId) -> Self {
        Self {
            id,
            pairs: &WORDSETS[id.index()],
        }
    }

    /// The wordset assigned to a training week.
    #[must_use]
    pub fn for_week(week: Week) -> Self {
        Self::get(select_wordset(week))
    }

    #[must_use]
    pub fn id(&self) -> WordsetId {
        self.id
    }

    #[must_use]
    pub fn pairs(&self) -> &'static [WordPair] {
        self.pairs
    }

    /// All built-in wordsets in id order.
    pub fn all() -> impl Iterator<Item = Wordset> {
        (0..WORDSET_COUNT as u8).map(|i| Self::get(WordsetId::from_index_unchecked(i)))
    }
}

/// Maps a week to its wordset: weeks 1, 4, 7… use set 0, weeks 2, 5, 8… set 1,
/// weeks 3, 6, 9… set 2.
#[must_use]
pub fn select_wordset(week: Week) -> WordsetId {
    let residue = week.value() % 3;
    let id = match residue {
        1 => 0,
        2 => 1,
        _ => 2,
    };
    WordsetId::from_index_unchecked(id)
}
