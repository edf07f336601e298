//! Learning plans derived from a skill-level gap.

mod domain;
mod synthesizer;

pub use domain::{
    LearningError, LearningPath, LearningPhase, LearningResource, Milestone, ResourceKind, Skill,
};
pub use synthesizer::{
    synthesize, total_weeks, weekly_hours, CAREER_IMPACTS, MINIMUM_WEEKS, WEEKS_PER_LEVEL,
};
