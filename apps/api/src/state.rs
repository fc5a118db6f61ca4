use crate::matching::evaluator::Evaluator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every evaluation is independent.
#[derive(Clone)]
pub struct AppState {
    pub evaluator: Evaluator,
    /// Minimum trimmed character count for each input text.
    pub min_text_length: usize,
}
