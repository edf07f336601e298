use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::questionnaire::{CategoryId, Questionnaire, LIKERT_SCORES};

/// Answers keyed by `"{category}_{question_index}"`, exactly as the form submits them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    answers: BTreeMap<String, u8>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, u8)>,
        K: Into<String>,
    {
        Self {
            answers: pairs
                .into_iter()
                .map(|(key, score)| (key.into(), score))
                .collect(),
        }
    }

    /// Record (or overwrite) one answer after checking it against the questionnaire.
    pub fn record(
        &mut self,
        questionnaire: &Questionnaire,
        category: CategoryId,
        question_index: usize,
        score: u8,
    ) -> Result<(), AssessmentError> {
        let key = answer_key(category, question_index);
        validate_answer(questionnaire, &key, score)?;
        self.answers.insert(key, score);
        Ok(())
    }

    pub fn get(&self, category: CategoryId, question_index: usize) -> Option<u8> {
        self.answers
            .get(&answer_key(category, question_index))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// True when every question of the category has an answer.
    pub fn is_step_complete(&self, questionnaire: &Questionnaire, category: CategoryId) -> bool {
        questionnaire
            .category(category)
            .map(|definition| {
                (0..definition.questions.len())
                    .all(|index| self.get(category, index).is_some())
            })
            .unwrap_or(false)
    }
}

pub fn answer_key(category: CategoryId, question_index: usize) -> String {
    format!("{}_{}", category.key(), question_index)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub category: CategoryId,
    pub score: u8,
    pub answered: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentScores {
    pub categories: Vec<CategoryResult>,
    pub overall: u8,
}

impl AssessmentScores {
    pub fn score_for(&self, category: CategoryId) -> Option<u8> {
        self.categories
            .iter()
            .find(|result| result.category == category)
            .map(|result| result.score)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssessmentError {
    #[error("answer key '{0}' is not of the form <category>_<question>")]
    MalformedKey(String),
    #[error("answer key '{0}' names an unknown category")]
    UnknownCategory(String),
    #[error("answer key '{key}' points past the {available} questions of its category")]
    UnknownQuestion { key: String, available: usize },
    #[error("answer '{key}' has score {score}; expected one of 20, 40, 60, 80, 100")]
    InvalidScore { key: String, score: u8 },
}

/// Reduce an answer sheet to one rounded average per category plus the overall score.
///
/// Unanswered categories score 0 and still count toward the overall mean, so a sheet
/// with no answers yields an overall score of 0 rather than NaN.
pub fn score_answers(
    questionnaire: &Questionnaire,
    sheet: &AnswerSheet,
) -> Result<AssessmentScores, AssessmentError> {
    let mut grouped: BTreeMap<CategoryId, Vec<u8>> = BTreeMap::new();
    for (key, score) in &sheet.answers {
        let category = validate_answer(questionnaire, key, *score)?;
        grouped.entry(category).or_default().push(*score);
    }

    let categories: Vec<CategoryResult> = questionnaire
        .categories()
        .iter()
        .map(|definition| {
            let scores = grouped.get(&definition.id).map(Vec::as_slice).unwrap_or(&[]);
            CategoryResult {
                category: definition.id,
                score: rounded_mean(scores.iter().map(|score| u32::from(*score))),
                answered: scores.len(),
            }
        })
        .collect();

    let overall = rounded_mean(categories.iter().map(|result| u32::from(result.score)));
    debug!(answers = sheet.len(), overall, "scored assessment");

    Ok(AssessmentScores {
        categories,
        overall,
    })
}

fn rounded_mean<I>(values: I) -> u8
where
    I: Iterator<Item = u32>,
{
    let (sum, count) = values.fold((0u32, 0u32), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        return 0;
    }
    let mean = (f64::from(sum) / f64::from(count)).round();
    mean.clamp(0.0, 100.0) as u8
}

fn validate_answer(
    questionnaire: &Questionnaire,
    key: &str,
    score: u8,
) -> Result<CategoryId, AssessmentError> {
    let (prefix, index) = key
        .rsplit_once('_')
        .ok_or_else(|| AssessmentError::MalformedKey(key.to_string()))?;
    let index: usize = index
        .parse()
        .map_err(|_| AssessmentError::MalformedKey(key.to_string()))?;
    let category = CategoryId::from_key(prefix)
        .ok_or_else(|| AssessmentError::UnknownCategory(key.to_string()))?;
    let available = questionnaire
        .category(category)
        .map(|definition| definition.questions.len())
        .unwrap_or(0);

    if index >= available {
        return Err(AssessmentError::UnknownQuestion {
            key: key.to_string(),
            available,
        });
    }
    if !LIKERT_SCORES.contains(&score) {
        return Err(AssessmentError::InvalidScore {
            key: key.to_string(),
            score,
        });
    }

    Ok(category)
}
