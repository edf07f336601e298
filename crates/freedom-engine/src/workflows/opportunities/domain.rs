use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OpportunityCategory {
    Freelancing,
    ContentCreation,
    Ecommerce,
    Consulting,
    Saas,
    Education,
}

impl OpportunityCategory {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Freelancing => "Freelancing",
            Self::ContentCreation => "Content Creation",
            Self::Ecommerce => "E-commerce",
            Self::Consulting => "Consulting",
            Self::Saas => "SaaS",
            Self::Education => "Online Education",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketTrend {
    Rising,
    Stable,
    Declining,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeRange {
    pub min: u32,
    pub max: u32,
    pub timeframe: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    pub skills: Vec<String>,
    /// Hours per week.
    pub time_commitment: u32,
    pub initial_investment: u32,
}

/// Read-only catalog entry describing an income-generating activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: u32,
    pub title: String,
    pub category: OpportunityCategory,
    pub potential_income: IncomeRange,
    pub requirements: Requirements,
    /// 1 (safe) to 10 (speculative).
    pub risk_level: u8,
    pub market_trend: MarketTrend,
    pub difficulty: Difficulty,
    /// Percentage of people who reach the low end of the income range.
    pub success_rate: u8,
    pub steps: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub real_examples: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    /// Highest opportunity risk level this tolerance admits; `None` admits everything.
    pub const fn ceiling(self) -> Option<u8> {
        match self {
            Self::Low => Some(3),
            Self::Medium => Some(6),
            Self::High => None,
        }
    }

    pub fn admits(self, risk_level: u8) -> bool {
        self.ceiling().map_or(true, |ceiling| risk_level <= ceiling)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    #[default]
    Beginner,
    Intermediate,
    Experienced,
}

/// Matching input assembled from the profile form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    #[serde(default)]
    pub experience: ExperienceLevel,
    /// Hours per week.
    pub time_available: u32,
    pub risk_tolerance: RiskTolerance,
    pub investment_capacity: u32,
}
