//! Cosine similarity between two embeddings and its mapping to a 0–100 match score.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::embedding_client::Embedding;

#[derive(Debug, Error, PartialEq)]
pub enum SimilarityError {
    #[error("Embedding dimensions differ: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Cannot compare empty embeddings")]
    Empty,

    #[error("Cosine similarity is undefined for a zero-norm embedding")]
    ZeroNorm,
}

/// Integer match score, always within 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub struct MatchScore(u8);

impl MatchScore {
    /// Clamps `value` into 0..=100.
    pub fn new(value: u32) -> Self {
        MatchScore(value.min(100) as u8)
    }

    /// Maps a raw cosine similarity to a percentage: ×100, clamp, truncate toward zero.
    pub fn from_similarity(similarity: f64) -> Self {
        if similarity.is_nan() {
            return MatchScore(0);
        }
        let pct = (similarity * 100.0).clamp(0.0, 100.0).trunc();
        MatchScore::new(pct as u32)
    }

    pub fn value(self) -> u32 {
        u32::from(self.0)
    }
}

impl From<MatchScore> for u32 {
    fn from(score: MatchScore) -> Self {
        score.value()
    }
}

impl TryFrom<u32> for MatchScore {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value > 100 {
            return Err(format!("match score {value} is outside 0..=100"));
        }
        Ok(MatchScore(value as u8))
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// dot(a, b) / sqrt(‖a‖²·‖b‖²). Taking a single square root keeps cos(a, a) at exactly 1.0.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> Result<f64, SimilarityError> {
    if a.len() != b.len() {
        return Err(SimilarityError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    if a.is_empty() {
        return Err(SimilarityError::Empty);
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for (&x, &y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = (norm_a * norm_b).sqrt();
    if denom == 0.0 {
        return Err(SimilarityError::ZeroNorm);
    }

    Ok(dot / denom)
}

/// Scores two embeddings. Symmetric in its arguments.
pub fn score(a: &Embedding, b: &Embedding) -> Result<MatchScore, SimilarityError> {
    cosine_similarity(&a.values, &b.values).map(MatchScore::from_similarity)
}
