use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::workflows::Priority;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub current_level: u8,
    pub target_level: u8,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_market_demand")]
    pub market_demand: u8,
}

fn default_market_demand() -> u8 {
    5
}

impl Skill {
    pub fn validate(&self) -> Result<(), LearningError> {
        if self.name.trim().is_empty() {
            return Err(LearningError::MissingSkillName);
        }
        for (field, level) in [
            ("current_level", self.current_level),
            ("target_level", self.target_level),
            ("market_demand", self.market_demand),
        ] {
            if !(1..=10).contains(&level) {
                return Err(LearningError::LevelOutOfRange { field, level });
            }
        }
        Ok(())
    }

    /// May be zero or negative; the schedule floor still applies.
    pub fn level_gap(&self) -> i32 {
        i32::from(self.target_level) - i32::from(self.current_level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningPhase {
    pub title: String,
    pub weeks: u32,
    pub focus: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Course,
    Book,
    Practice,
    Community,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningResource {
    pub kind: ResourceKind,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub week: u32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningPath {
    pub skill: String,
    pub level_gap: i32,
    pub total_weeks: u32,
    pub weekly_hours: u32,
    pub phases: Vec<LearningPhase>,
    pub resources: Vec<LearningResource>,
    pub milestones: Vec<Milestone>,
    pub career_impact: String,
}

impl LearningPath {
    pub fn total_hours(&self) -> u32 {
        self.total_weeks * self.weekly_hours
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LearningError {
    #[error("skill name must not be empty")]
    MissingSkillName,
    #[error("{field} must be between 1 and 10, got {level}")]
    LevelOutOfRange { field: &'static str, level: u8 },
}
