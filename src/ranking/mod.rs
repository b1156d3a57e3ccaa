//! Relevance ranking of catalog entries against a free-text problem
//!
//! Purely lexical: phrase and word substring matches plus preference
//! bonuses. No fuzzy or semantic matching.

pub mod scorer;

pub use scorer::{
    rank, score_entry, HostingPreference, RankRequest, Ranker, Recommendation, ScoreWeights,
    DEFAULT_MAX_RESULTS,
};
