//! Lexical relevance scorer for catalog entries
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::catalog::{Entry, HostingType};
use crate::errors::{Result, ScoutError};

/// Number of results returned when the caller does not say
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Hosting preference of a recommendation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostingPreference {
    Cloud,
    Local,
    #[default]
    Any,
}

/// Points awarded by each scoring rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Whole query found in name, description or category
    pub phrase_match: u32,
    /// Per query word (longer than 2 chars) found
    pub word_match: u32,
    /// Whole query found in the category
    pub category_match: u32,
    /// A language tag contains the language preference
    pub language_match: u32,
    /// Entry declares the preferred hosting type
    pub hosting_match: u32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            phrase_match: 100,
            word_match: 10,
            category_match: 50,
            language_match: 20,
            hosting_match: 15,
        }
    }
}

/// Input of a recommendation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankRequest {
    /// Free-text description of what the caller needs
    pub problem: String,
    pub max_results: usize,
    pub language: Option<String>,
    pub hosting: HostingPreference,
}

/// Outcome of ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "entries", rename_all = "snake_case")]
pub enum Recommendation {
    /// Entries with a positive score, best first, scores populated
    Ranked(Vec<Entry>),
    /// Nothing scored above zero
    NoMatches,
}

impl HostingPreference {
    /// The hosting type this preference requires, `None` for any
    pub fn required(&self) -> Option<HostingType> {
        match self {
            HostingPreference::Cloud => Some(HostingType::Cloud),
            HostingPreference::Local => Some(HostingType::Local),
            HostingPreference::Any => None,
        }
    }

    /// Entries with no declared hosting pass every preference
    pub fn admits(&self, entry: &Entry) -> bool {
        match self.required() {
            Some(hosting) => entry.hosting_types.is_empty() || entry.has_hosting(hosting),
            None => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HostingPreference::Cloud => "cloud",
            HostingPreference::Local => "local",
            HostingPreference::Any => "any",
        }
    }
}

impl fmt::Display for HostingPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HostingPreference {
    type Err = ScoutError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cloud" => Ok(HostingPreference::Cloud),
            "local" => Ok(HostingPreference::Local),
            "any" => Ok(HostingPreference::Any),
            other => Err(ScoutError::InvalidArgument(format!(
                "hosting must be one of cloud, local, any (got '{}')",
                other
            ))),
        }
    }
}

impl RankRequest {
    /// Request with default max results and no preferences
    pub fn new(problem: impl Into<String>) -> Self {
        Self {
            problem: problem.into(),
            max_results: DEFAULT_MAX_RESULTS,
            language: None,
            hosting: HostingPreference::Any,
        }
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_hosting(mut self, hosting: HostingPreference) -> Self {
        self.hosting = hosting;
        self
    }

    /// Reject requests that can never produce a result
    pub fn validate(&self) -> Result<()> {
        if self.max_results < 1 {
            return Err(ScoutError::InvalidArgument(
                "max_results must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Recommendation {
    pub fn entries(&self) -> &[Entry] {
        match self {
            Recommendation::Ranked(entries) => entries,
            Recommendation::NoMatches => &[],
        }
    }
}

/// Ranker over parsed entries
pub struct Ranker {
    weights: ScoreWeights,
}

impl Ranker {
    /// Create ranker with default weights
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::default(),
        }
    }

    /// Create with custom weights
    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Filter, score, sort and truncate
    pub fn rank(&self, entries: &[Entry], request: &RankRequest) -> Recommendation {
        let mut ranked: Vec<Entry> = entries
            .iter()
            .filter(|entry| request.hosting.admits(entry))
            .filter_map(|entry| {
                let score = self.score(entry, request);
                (score > 0).then(|| entry.clone().with_score(score))
            })
            .collect();

        // Stable: equal scores keep catalog order
        ranked.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        ranked.truncate(request.max_results);

        debug!(
            candidates = entries.len(),
            matched = ranked.len(),
            hosting = %request.hosting,
            "Ranked catalog entries"
        );

        if ranked.is_empty() {
            Recommendation::NoMatches
        } else {
            Recommendation::Ranked(ranked)
        }
    }

    /// Compute the relevance score of one entry
    pub fn score(&self, entry: &Entry, request: &RankRequest) -> u32 {
        let query = request.problem.to_lowercase();
        let searchable =
            format!("{} {} {}", entry.name, entry.description, entry.category).to_lowercase();

        let mut score = 0;

        if searchable.contains(&query) {
            score += self.weights.phrase_match;
        }

        let word_hits = query
            .split_whitespace()
            .filter(|word| word.chars().count() > 2 && searchable.contains(*word))
            .count() as u32;
        score += word_hits * self.weights.word_match;

        if entry.category.to_lowercase().contains(&query) {
            score += self.weights.category_match;
        }

        if let Some(language) = &request.language {
            let language = language.to_lowercase();
            if entry
                .languages
                .iter()
                .any(|tag| tag.to_lowercase().contains(&language))
            {
                score += self.weights.language_match;
            }
        }

        if let Some(hosting) = request.hosting.required() {
            if entry.has_hosting(hosting) {
                score += self.weights.hosting_match;
            }
        }

        score
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank with default weights
pub fn rank(entries: &[Entry], request: &RankRequest) -> Recommendation {
    Ranker::new().rank(entries, request)
}

/// Score one entry with default weights
pub fn score_entry(entry: &Entry, request: &RankRequest) -> u32 {
    Ranker::new().score(entry, request)
}
