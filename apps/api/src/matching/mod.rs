// Resume vs job description matching.
// Implements: embedding similarity score, keyword extraction, qualitative report.
// All embedding calls go through embedding_client.

pub mod analyzer;
pub mod evaluator;
pub mod handlers;
pub mod keywords;
pub mod similarity;
pub mod templates;
