//! Evaluation pipeline: embed job → embed resume → score → analyze.
//!
//! The two embedding calls run sequentially; any failure is returned as-is to the caller.

use thiserror::Error;
use tracing::info;

use crate::embedding_client::{EmbeddingClient, EmbeddingError};
use crate::matching::analyzer::{MatchAnalyzer, MatchReport};
use crate::matching::similarity::{self, SimilarityError};

#[derive(Debug, Error)]
pub enum EvaluateError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Similarity(#[from] SimilarityError),
}

#[derive(Clone)]
pub struct Evaluator {
    embedder: EmbeddingClient,
    analyzer: MatchAnalyzer,
}

impl Evaluator {
    pub fn new(embedder: EmbeddingClient, analyzer: MatchAnalyzer) -> Self {
        Self { embedder, analyzer }
    }

    pub async fn evaluate(
        &self,
        job_text: &str,
        resume_text: &str,
    ) -> Result<MatchReport, EvaluateError> {
        let job_embedding = self.embedder.embed(job_text).await?;
        let resume_embedding = self.embedder.embed(resume_text).await?;

        let match_score = similarity::score(&job_embedding, &resume_embedding)?;
        let report = self.analyzer.analyze(job_text, resume_text, match_score);

        info!(
            "Evaluation complete: score={} verdict={:?}",
            report.match_score, report.verdict
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use super::*;
    use crate::embedding_client::transport::testing::ScriptedTransport;
    use crate::embedding_client::{EmbeddingConfig, EmbeddingErrorKind};
    use crate::matching::analyzer::Verdict;

    const JOB: &str = "Looking for a backend developer skilled in Python Flask REST API development \
        and cloud deployments.";
    const RESUME: &str = "Software engineer with 5 years Python Django development experience \
        building web services.";

    fn evaluator(token: Option<&str>, transport: Arc<ScriptedTransport>) -> Evaluator {
        let config = EmbeddingConfig {
            api_url: "http://embeddings.test".to_string(),
            api_token: token.map(str::to_string),
            timeout: Duration::from_secs(5),
        };
        Evaluator::new(
            EmbeddingClient::with_transport(config, transport),
            MatchAnalyzer::default(),
        )
    }

    #[tokio::test]
    async fn test_similarity_0_82_yields_hire_at_82() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .respond_vector(&[1.0, 0.0])
                .respond_vector(&[0.82, (1.0_f64 - 0.82 * 0.82).sqrt()]),
        );
        let report = evaluator(Some("t"), transport.clone())
            .evaluate(JOB, RESUME)
            .await
            .unwrap();

        assert_eq!(report.match_score.value(), 82);
        assert_eq!(report.verdict, Verdict::Hire);
        assert!(report.strengths[0].contains("python"));
        assert!(report.reasons_for.iter().any(|r| r.contains("82%")));

        let calls = transport.recorded();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].inputs, JOB);
        assert_eq!(calls[1].inputs, RESUME);
    }

    #[tokio::test]
    async fn test_identical_texts_score_100_with_two_gaps() {
        let vector: [f64; 4] = [0.12, -0.4, 0.33, 0.9];
        let transport = Arc::new(
            ScriptedTransport::new()
                .respond_vector(&vector)
                .respond_vector(&vector),
        );
        let report = evaluator(Some("t"), transport)
            .evaluate(JOB, JOB)
            .await
            .unwrap();

        assert_eq!(report.match_score.value(), 100);
        assert_eq!(report.verdict, Verdict::Hire);
        assert_eq!(report.gaps.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_token_makes_no_calls() {
        let transport = Arc::new(ScriptedTransport::new().respond_vector(&[1.0]));
        let err = evaluator(None, transport.clone())
            .evaluate(JOB, RESUME)
            .await
            .unwrap_err();

        match err {
            EvaluateError::Embedding(e) => assert_eq!(e.kind(), EmbeddingErrorKind::Config),
            other => panic!("expected embedding error, got {other:?}"),
        }
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_job_embedding_failure_skips_resume_call() {
        let transport = Arc::new(ScriptedTransport::new().respond(503, "loading"));
        let err = evaluator(Some("t"), transport.clone())
            .evaluate(JOB, RESUME)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            EvaluateError::Embedding(EmbeddingError::ModelLoading)
        ));
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_dimension_mismatch_surfaces_as_similarity_error() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .respond_vector(&[1.0, 0.0])
                .respond_vector(&[1.0, 0.0, 0.0]),
        );
        let err = evaluator(Some("t"), transport)
            .evaluate(JOB, RESUME)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            EvaluateError::Similarity(SimilarityError::DimensionMismatch { .. })
        ));
    }
}
