//! Related-post ranking
//!
//! Scores every candidate against a reference post from shared category,
//! shared tags and publication recency. A candidate sharing nothing with
//! the reference is never "related", even when that leaves the requested
//! count unfilled.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Post;

/// Weights for the similarity score. Kept as configuration so the ranking
/// policy can be tuned without touching the aggregation logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Added when both posts share a category
    pub same_category_weight: u32,
    /// Added once per tag present on both posts
    pub shared_tag_weight: u32,
    /// Added when the posts were published close together
    pub recency_bonus: u32,
    /// Window for the recency bonus, in days
    pub recency_window_days: i64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            same_category_weight: 10,
            shared_tag_weight: 3,
            recency_bonus: 1,
            recency_window_days: 30,
        }
    }
}

/// A candidate paired with its score, alive only inside the ranking pass.
#[derive(Debug)]
struct RelatedPost {
    post: Post,
    similarity_score: u32,
}

/// Compute the similarity score between two posts. Pure and symmetric.
pub fn similarity_score(reference: &Post, candidate: &Post, config: &RankingConfig) -> u32 {
    let mut score = 0;

    if candidate.category == reference.category {
        score += config.same_category_weight;
    }

    // Each distinct shared tag counts once, regardless of duplicates
    let reference_tags: HashSet<&str> = reference.tags.iter().map(String::as_str).collect();
    let shared = candidate
        .tags
        .iter()
        .map(String::as_str)
        .collect::<HashSet<_>>()
        .intersection(&reference_tags)
        .count() as u32;
    score += shared * config.shared_tag_weight;

    let days_apart = (candidate.date_parsed - reference.date_parsed).num_days().abs();
    if days_apart < config.recency_window_days {
        score += config.recency_bonus;
    }

    score
}

/// Rank `candidates` by similarity to `reference` and keep the best `limit`.
///
/// The reference itself is excluded by slug. Zero-scoring candidates are
/// dropped before truncation, so the result can be shorter than `limit` or
/// empty. Ties keep the candidates' incoming order (the sort is stable).
pub fn related_posts(
    reference: &Post,
    candidates: Vec<Post>,
    limit: usize,
    config: &RankingConfig,
) -> Vec<Post> {
    let mut scored: Vec<RelatedPost> = candidates
        .into_iter()
        .filter(|post| post.slug != reference.slug)
        .map(|post| RelatedPost {
            similarity_score: similarity_score(reference, &post, config),
            post,
        })
        .filter(|related| related.similarity_score > 0)
        .collect();

    scored.sort_by(|a, b| b.similarity_score.cmp(&a.similarity_score));
    scored.truncate(limit);

    scored.into_iter().map(|related| related.post).collect()
}
