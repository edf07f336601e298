use serde::{Deserialize, Serialize};
use std::fmt;

/// Scores a single Likert answer may take (five buttons, `n * 20`).
pub const LIKERT_SCORES: [u8; 5] = [20, 40, 60, 80, 100];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    Financial,
    Time,
    Location,
    Skill,
    Relationship,
}

impl CategoryId {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Financial,
            Self::Time,
            Self::Location,
            Self::Skill,
            Self::Relationship,
        ]
    }

    /// Prefix used in answer keys (`financial_0`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::Time => "time",
            Self::Location => "location",
            Self::Skill => "skill",
            Self::Relationship => "relationship",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Financial => "Financial Freedom",
            Self::Time => "Time Freedom",
            Self::Location => "Location Freedom",
            Self::Skill => "Skill Freedom",
            Self::Relationship => "Relationship Freedom",
        }
    }

    pub fn from_key(raw: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.key() == raw)
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: &'static str,
    pub description: &'static str,
    pub questions: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Questionnaire {
    categories: Vec<Category>,
}

impl Questionnaire {
    pub fn standard() -> Self {
        Self {
            categories: standard_categories(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn question_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.questions.len())
            .sum()
    }
}

fn standard_categories() -> Vec<Category> {
    vec![
        Category {
            id: CategoryId::Financial,
            title: CategoryId::Financial.label(),
            description: "How well your finances and passive income support your choices.",
            questions: vec![
                "What share of your total income is passive?",
                "How many months of expenses does your emergency fund cover?",
                "How many distinct income streams do you have?",
            ],
        },
        Category {
            id: CategoryId::Time,
            title: CategoryId::Time.label(),
            description: "How much control you have over your own schedule.",
            questions: vec![
                "How flexible are your working hours?",
                "How many days off do you take each year?",
                "Can you work remotely?",
            ],
        },
        Category {
            id: CategoryId::Location,
            title: CategoryId::Location.label(),
            description: "How strongly your work ties you to one place.",
            questions: vec![
                "Is your work restricted to a specific location?",
                "How often do you travel?",
                "Could you work from anywhere?",
            ],
        },
        Category {
            id: CategoryId::Skill,
            title: CategoryId::Skill.label(),
            description: "How portable and in-demand your skills are.",
            questions: vec![
                "How strong is market demand for your skills?",
                "Do your skills transfer to other industries?",
                "Do you keep learning new skills?",
            ],
        },
        Category {
            id: CategoryId::Relationship,
            title: CategoryId::Relationship.label(),
            description: "The breadth of your network and your emotional independence.",
            questions: vec![
                "How broad is your social network?",
                "Are you emotionally independent?",
                "How would you rate the quality of your relationships?",
            ],
        },
    ]
}
