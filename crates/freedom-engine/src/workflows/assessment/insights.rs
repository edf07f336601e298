use serde::Serialize;

use super::questionnaire::CategoryId;
use super::scoring::AssessmentScores;

/// Categories scoring below this receive targeted advice.
const RECOMMENDATION_THRESHOLD: u8 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FreedomLevel {
    HighlyFree,
    RelativelyFree,
    PartiallyFree,
    Constrained,
}

impl FreedomLevel {
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::HighlyFree
        } else if score >= 60 {
            Self::RelativelyFree
        } else if score >= 40 {
            Self::PartiallyFree
        } else {
            Self::Constrained
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HighlyFree => "Highly free",
            Self::RelativelyFree => "Relatively free",
            Self::PartiallyFree => "Partially free",
            Self::Constrained => "Constrained",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Self::HighlyFree => "Congratulations! You already enjoy a high degree of freedom.",
            Self::RelativelyFree => "Nice work! You are making good progress on the road to freedom.",
            Self::PartiallyFree => "There is room to grow. Keep going!",
            Self::Constrained => "More effort is needed to raise your freedom.",
        }
    }

    pub const fn next_milestone(self) -> &'static str {
        match self {
            Self::Constrained => "Reach partial freedom (40%)",
            Self::PartiallyFree => "Reach relative freedom (60%)",
            Self::RelativelyFree => "Reach high freedom (80%)",
            Self::HighlyFree => "Maintain and refine your current freedom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAdvice {
    pub category: CategoryId,
    pub score: u8,
    pub advice: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentInsights {
    pub level: FreedomLevel,
    pub level_label: &'static str,
    pub headline: &'static str,
    pub next_milestone: &'static str,
    pub improvement_priority: Option<CategoryId>,
    pub advice: Vec<CategoryAdvice>,
}

impl AssessmentScores {
    pub fn insights(&self) -> AssessmentInsights {
        let level = FreedomLevel::from_score(self.overall);

        // min_by_key keeps the first minimum, i.e. questionnaire order on ties.
        let improvement_priority = self
            .categories
            .iter()
            .min_by_key(|result| result.score)
            .map(|result| result.category);

        let advice = self
            .categories
            .iter()
            .filter(|result| result.score < RECOMMENDATION_THRESHOLD)
            .map(|result| CategoryAdvice {
                category: result.category,
                score: result.score,
                advice: advice_for(result.category),
            })
            .collect();

        AssessmentInsights {
            level,
            level_label: level.label(),
            headline: level.headline(),
            next_milestone: level.next_milestone(),
            improvement_priority,
            advice,
        }
    }
}

fn advice_for(category: CategoryId) -> Vec<&'static str> {
    match category {
        CategoryId::Financial => vec![
            "Build a passive income stream that covers at least 25% of monthly expenses.",
            "Set aside an emergency fund covering three or more months.",
            "Explore side projects to add another income source.",
        ],
        CategoryId::Time => vec![
            "Negotiate a flexible working arrangement with your employer.",
            "Look for efficiency gains that shorten your working week.",
        ],
        CategoryId::Location => vec![
            "Develop skills that can be delivered remotely.",
            "Seek employers or clients that support remote work.",
        ],
        CategoryId::Skill => vec![
            "Learn more transferable skills.",
            "Focus on skills with strong market demand.",
            "Build a habit of continuous learning.",
        ],
        CategoryId::Relationship => vec![
            "Invest time in widening your professional network.",
            "Nurture a few deep, supportive relationships.",
        ],
    }
}
