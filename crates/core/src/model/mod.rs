mod ids;
mod pair;
mod round;
mod week;
mod wordset;

pub use ids::WordsetId;
pub use pair::{CueSide, WordPair};
pub use round::{ROUNDS, RoundEntry, RoundNumber, RoundRecord, Verdict};
pub use week::{Week, WeekError};
pub use wordset::{PAIRS_PER_WORDSET, Wordset, select_wordset};
