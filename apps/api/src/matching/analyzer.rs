//! Match Analyzer — turns a match score plus keyword overlap into a qualitative report.
//!
//! Pure and deterministic: the same texts and score always produce the same report.
//! Keyword samples are the alphabetically first entries of each set.

use serde::Serialize;

use crate::matching::keywords::{KeywordExtractor, KeywordSet, DEFAULT_STOPWORDS};
use crate::matching::similarity::MatchScore;
use crate::matching::templates::{
    ReasonTemplates, GAP_MISSING_KEYWORDS, GAP_NOT_EXPLICIT, GAP_NO_QUANTIFIED_RESULTS,
    HIRE_REASONS, HOLD_REASONS, REJECT_REASONS, STRENGTH_EXPERIENCE, STRENGTH_MATCHED_KEYWORDS,
    STRENGTH_SCORE, SUGGESTION_MISSING_KEYWORDS, SUGGESTION_QUANTIFY,
};

const MAX_STRENGTHS: usize = 3;
const MAX_GAPS: usize = 3;
const MAX_SUGGESTIONS: usize = 2;
const KEYWORD_SAMPLE_SIZE: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

/// Inclusive lower bounds: score ≥ hire → Hire, score ≥ hold → Hold, else Reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerdictThresholds {
    pub hire: u32,
    pub hold: u32,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self { hire: 75, hold: 50 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub thresholds: VerdictThresholds,
    pub stopwords: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            thresholds: VerdictThresholds::default(),
            stopwords: DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Hire,
    Hold,
    Reject,
}

impl Verdict {
    pub fn from_score(score: MatchScore, thresholds: &VerdictThresholds) -> Self {
        let score = score.value();
        if score >= thresholds.hire {
            Verdict::Hire
        } else if score >= thresholds.hold {
            Verdict::Hold
        } else {
            Verdict::Reject
        }
    }

    fn reasons(self) -> &'static ReasonTemplates {
        match self {
            Verdict::Hire => &HIRE_REASONS,
            Verdict::Hold => &HOLD_REASONS,
            Verdict::Reject => &REJECT_REASONS,
        }
    }
}

/// Full evaluation report returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub match_score: MatchScore,
    pub strengths: Vec<String>,               // 2–3
    pub gaps: Vec<String>,                    // 2–3
    pub verdict: Verdict,
    pub reasons_for: Vec<String>,             // exactly 2
    pub reasons_against: Vec<String>,         // exactly 2
    pub improvement_suggestions: Vec<String>, // 1–2
}

// ────────────────────────────────────────────────────────────────────────────
// Analyzer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct MatchAnalyzer {
    extractor: KeywordExtractor,
    thresholds: VerdictThresholds,
}

impl Default for MatchAnalyzer {
    fn default() -> Self {
        Self::new(&AnalysisConfig::default())
    }
}

impl MatchAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            extractor: KeywordExtractor::new(&config.stopwords),
            thresholds: config.thresholds,
        }
    }

    pub fn analyze(&self, job_text: &str, resume_text: &str, score: MatchScore) -> MatchReport {
        let job_keywords = self.extractor.extract(job_text);
        let resume_keywords = self.extractor.extract(resume_text);

        let matching: KeywordSet = job_keywords.intersection(&resume_keywords).cloned().collect();
        let missing: KeywordSet = job_keywords.difference(&resume_keywords).cloned().collect();

        let verdict = Verdict::from_score(score, &self.thresholds);
        let reasons = verdict.reasons();

        MatchReport {
            match_score: score,
            strengths: build_strengths(&matching, score),
            gaps: build_gaps(&missing),
            verdict,
            reasons_for: fill_all(&reasons.reasons_for, score),
            reasons_against: fill_all(&reasons.reasons_against, score),
            improvement_suggestions: build_suggestions(&missing),
        }
    }
}

fn build_strengths(matching: &KeywordSet, score: MatchScore) -> Vec<String> {
    let mut strengths = Vec::with_capacity(MAX_STRENGTHS);
    if !matching.is_empty() {
        strengths.push(with_keywords(STRENGTH_MATCHED_KEYWORDS, matching));
    }
    strengths.push(with_score(STRENGTH_SCORE, score));
    strengths.push(STRENGTH_EXPERIENCE.to_string());
    strengths.truncate(MAX_STRENGTHS);
    strengths
}

fn build_gaps(missing: &KeywordSet) -> Vec<String> {
    let mut gaps = Vec::with_capacity(MAX_GAPS);
    if !missing.is_empty() {
        gaps.push(with_keywords(GAP_MISSING_KEYWORDS, missing));
    }
    gaps.push(GAP_NOT_EXPLICIT.to_string());
    gaps.push(GAP_NO_QUANTIFIED_RESULTS.to_string());
    gaps.truncate(MAX_GAPS);
    gaps
}

fn build_suggestions(missing: &KeywordSet) -> Vec<String> {
    let mut suggestions = Vec::with_capacity(MAX_SUGGESTIONS);
    if !missing.is_empty() {
        suggestions.push(with_keywords(SUGGESTION_MISSING_KEYWORDS, missing));
    }
    suggestions.push(SUGGESTION_QUANTIFY.to_string());
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

/// The first `KEYWORD_SAMPLE_SIZE` keywords in set order, comma separated.
fn sample_keywords(keywords: &KeywordSet) -> String {
    keywords
        .iter()
        .take(KEYWORD_SAMPLE_SIZE)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn with_keywords(template: &str, keywords: &KeywordSet) -> String {
    template.replace("{keywords}", &sample_keywords(keywords))
}

fn with_score(template: &str, score: MatchScore) -> String {
    template.replace("{score}", &score.to_string())
}

fn fill_all(templates: &[&str], score: MatchScore) -> Vec<String> {
    templates.iter().map(|t| with_score(t, score)).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
