#![forbid(unsafe_code)]

pub mod model;
pub mod scoring;

pub use model::{
    CueSide, PAIRS_PER_WORDSET, ROUNDS, RoundEntry, RoundNumber, RoundRecord, Verdict, Week,
    WeekError, WordPair, Wordset, WordsetId, select_wordset,
};
pub use scoring::{normalize, score_round};
