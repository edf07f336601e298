//! Freedom self-assessment: the static questionnaire, answer aggregation, and
//! the result-page interpretation of the overall score.

mod insights;
mod questionnaire;
mod scoring;

pub use insights::{AssessmentInsights, CategoryAdvice, FreedomLevel};
pub use questionnaire::{Category, CategoryId, Questionnaire, LIKERT_SCORES};
pub use scoring::{
    answer_key, score_answers, AnswerSheet, AssessmentError, AssessmentScores, CategoryResult,
};
