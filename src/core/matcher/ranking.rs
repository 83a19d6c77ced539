//! Candidate scoring and ranking

use super::catalog::CatalogItem;
use super::signals::MatchContext;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Maximum number of recommendations returned by `rank`
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Which signal produced a candidate's confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReasonTag {
    NameMatch,
    CategoryMatch,
    KeywordMatch,
    HeuristicMatch,
}

impl ReasonTag {
    /// Confidence assigned when this signal is the strongest one
    pub fn confidence(&self) -> f64 {
        match self {
            ReasonTag::NameMatch => 0.9,
            ReasonTag::HeuristicMatch => 0.85,
            ReasonTag::CategoryMatch => 0.8,
            ReasonTag::KeywordMatch => 0.7,
        }
    }
}

/// A ranked recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateScore {
    pub item_id: String,
    pub reason_tag: ReasonTag,
    pub confidence: f64,
}

/// Strongest signal an item satisfies, if any
pub fn score(context: &MatchContext, item: &CatalogItem) -> Option<CandidateScore> {
    // Highest confidence first
    let reason = if context.name_match(item) {
        ReasonTag::NameMatch
    } else if context.heuristic_match(item) {
        ReasonTag::HeuristicMatch
    } else if context.category_match(item) {
        ReasonTag::CategoryMatch
    } else if context.keyword_match(item) {
        ReasonTag::KeywordMatch
    } else {
        return None;
    };

    Some(CandidateScore {
        item_id: item.id.clone(),
        reason_tag: reason,
        confidence: reason.confidence(),
    })
}

/// Rank catalog items against the shopper and assistant text
///
/// Returns at most three candidates in non-increasing confidence. Equal
/// confidences keep catalog order. Items with no signal are left out; an
/// empty catalog or no match gives an empty list.
pub fn rank(user_text: &str, ai_text: &str, catalog: &[CatalogItem]) -> Vec<CandidateScore> {
    let context = MatchContext::new(user_text, ai_text);

    let mut scores: Vec<CandidateScore> = catalog
        .iter()
        .filter_map(|item| score(&context, item))
        .collect();

    // sort_by is stable
    scores.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
    });
    scores.truncate(MAX_RECOMMENDATIONS);
    scores
}
