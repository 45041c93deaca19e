//
// ─── CUE SIDE ─────────────────────────────────────────────────────────────────
//

/// Which member of a pair is shown as the cue in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CueSide {
    Left,
    Right,
}

impl CueSide {
    /// The side the user has to supply when `self` is the cue.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            CueSide::Left => CueSide::Right,
            CueSide::Right => CueSide::Left,
        }
    }

    /// Maps a coin flip to a side (`true` → left).
    #[must_use]
    pub fn from_coin(left: bool) -> Self {
        if left { CueSide::Left } else { CueSide::Right }
    }
}

//
// ─── WORD PAIR ────────────────────────────────────────────────────────────────
//

/// Two unrelated words linked for recall. Either side may act as the cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordPair {
    left: &'static str,
    right: &'static str,
}

impl WordPair {
    #[must_use]
    pub const fn new(left: &'static str, right: &'static str) -> Self {
        Self { left, right }
    }

    #[must_use]
    pub fn left(&self) -> &'static str {
        self.left
    }

    #[must_use]
    pub fn right(&self) -> &'static str {
        self.right
    }

    /// The word on the given side.
    #[must_use]
    pub fn word(&self, side: CueSide) -> &'static str {
        match side {
            CueSide::Left => self.left,
            CueSide::Right => self.right,
        }
    }

    /// The word to recall when `cue` is shown.
    #[must_use]
    pub fn target(&self, cue: CueSide) -> &'static str {
        self.word(cue.opposite())
    }
}
