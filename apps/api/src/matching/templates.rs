// Fixed report sentences. `{score}` and `{keywords}` are substituted by the analyzer.

pub const STRENGTH_MATCHED_KEYWORDS: &str = "Strong alignment with required skills: {keywords}";
pub const STRENGTH_SCORE: &str =
    "Overall semantic similarity score of {score}% indicates good potential fit";
pub const STRENGTH_EXPERIENCE: &str =
    "Resume demonstrates relevant experience matching job requirements";

pub const GAP_MISSING_KEYWORDS: &str = "Missing key skills or keywords: {keywords}";
pub const GAP_NOT_EXPLICIT: &str =
    "Some job requirements may not be explicitly addressed in the resume";
pub const GAP_NO_QUANTIFIED_RESULTS: &str =
    "Could benefit from more specific examples or quantifiable achievements";

pub const SUGGESTION_MISSING_KEYWORDS: &str =
    "Add experience or certifications related to: {keywords}";
pub const SUGGESTION_QUANTIFY: &str =
    "Include more quantifiable achievements and specific examples of relevant work";

/// Verdict rationale: two sentences for, two against.
pub struct ReasonTemplates {
    pub reasons_for: [&'static str; 2],
    pub reasons_against: [&'static str; 2],
}

pub const HIRE_REASONS: ReasonTemplates = ReasonTemplates {
    reasons_for: [
        "High match score of {score}% demonstrates strong alignment",
        "Candidate's qualifications closely match job requirements",
    ],
    reasons_against: [
        "Some minor skill gaps that may require on-the-job training",
        "Consider conducting technical assessment to validate claimed skills",
    ],
};

pub const HOLD_REASONS: ReasonTemplates = ReasonTemplates {
    reasons_for: [
        "Moderate match score of {score}% shows potential fit",
        "Candidate has some relevant experience worth exploring further",
    ],
    reasons_against: [
        "Several key requirements are not clearly demonstrated",
        "May require significant training or skill development",
    ],
};

pub const REJECT_REASONS: ReasonTemplates = ReasonTemplates {
    reasons_for: [
        "Candidate may have transferable skills not immediately obvious",
        "Could be suitable for a different role with modified requirements",
    ],
    reasons_against: [
        "Low match score of {score}% indicates significant gaps",
        "Resume does not demonstrate required qualifications for this position",
    ],
};
