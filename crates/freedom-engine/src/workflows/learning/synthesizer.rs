use chrono::{Duration, NaiveDate};
use tracing::debug;

use super::domain::{
    LearningError, LearningPath, LearningPhase, LearningResource, Milestone, ResourceKind, Skill,
};
use crate::selection::TemplateSelector;
use crate::workflows::Priority;

pub const WEEKS_PER_LEVEL: i32 = 4;
pub const MINIMUM_WEEKS: u32 = 8;

/// (share of total weeks in percent, title, focus)
const PHASES: [(u32, &str, &str); 3] = [
    (30, "Foundations", "core concepts and terminology"),
    (40, "Applied practice", "hands-on projects and exercises"),
    (30, "Mastery", "advanced techniques and real-world delivery"),
];

/// (cumulative percent of total weeks, title)
const MILESTONES: [(u32, &str); 3] = [
    (30, "Fundamentals in place"),
    (70, "First independent project shipped"),
    (100, "Target level reached"),
];

pub const CAREER_IMPACTS: [&str; 4] = [
    "Opens higher-paying roles that list this skill as a requirement",
    "Makes you eligible for freelance and contract work in this area",
    "Strengthens your position for a promotion or internal transfer",
    "Lets you automate or delegate parts of your current workload",
];

pub fn weekly_hours(priority: Priority) -> u32 {
    match priority {
        Priority::High => 10,
        Priority::Medium => 6,
        Priority::Low => 4,
    }
}

pub fn total_weeks(level_gap: i32) -> u32 {
    let weeks = level_gap.saturating_mul(WEEKS_PER_LEVEL).max(0) as u32;
    weeks.max(MINIMUM_WEEKS)
}

/// Ceiling of `total * percent / 100`. Shares are not renormalized, so
/// phase weeks can sum past the total.
fn share_of(total: u32, percent: u32) -> u32 {
    (total * percent).div_ceil(100)
}

/// Build a fresh plan for `skill`. Milestones carry dates only when `starts_on`
/// is given.
pub fn synthesize<S>(
    skill: &Skill,
    starts_on: Option<NaiveDate>,
    selector: &mut S,
) -> Result<LearningPath, LearningError>
where
    S: TemplateSelector + ?Sized,
{
    skill.validate()?;

    let level_gap = skill.level_gap();
    let total_weeks = total_weeks(level_gap);
    let name = skill.name.trim();

    let phases = PHASES
        .iter()
        .map(|(percent, title, focus)| LearningPhase {
            title: (*title).to_string(),
            weeks: share_of(total_weeks, *percent),
            focus: format!("{name}: {focus}"),
        })
        .collect();

    let milestones = MILESTONES
        .iter()
        .map(|(percent, title)| {
            let week = share_of(total_weeks, *percent);
            Milestone {
                week,
                title: (*title).to_string(),
                target_date: starts_on
                    .and_then(|start| start.checked_add_signed(Duration::weeks(i64::from(week)))),
            }
        })
        .collect();

    let career_impact =
        CAREER_IMPACTS[selector.select(CAREER_IMPACTS.len()) % CAREER_IMPACTS.len()].to_string();

    let path = LearningPath {
        skill: name.to_string(),
        level_gap,
        total_weeks,
        weekly_hours: weekly_hours(skill.priority),
        phases,
        resources: resources(name),
        milestones,
        career_impact,
    };

    debug!(
        skill = %path.skill,
        total_weeks = path.total_weeks,
        weekly_hours = path.weekly_hours,
        "synthesized learning path"
    );
    Ok(path)
}

fn resources(name: &str) -> Vec<LearningResource> {
    vec![
        LearningResource {
            kind: ResourceKind::Course,
            title: format!("{name} complete online course"),
        },
        LearningResource {
            kind: ResourceKind::Book,
            title: format!("{name} practical handbook"),
        },
        LearningResource {
            kind: ResourceKind::Practice,
            title: format!("{name} project exercises"),
        },
        LearningResource {
            kind: ResourceKind::Community,
            title: format!("{name} practitioner community"),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::FixedSelector;

    fn skill(current_level: u8, target_level: u8, priority: Priority) -> Skill {
        Skill {
            name: "Rust".to_string(),
            category: "programming".to_string(),
            current_level,
            target_level,
            priority,
            market_demand: 8,
        }
    }

    #[test]
    fn three_level_gap_takes_twelve_weeks() {
        let path = synthesize(&skill(2, 5, Priority::High), None, &mut FixedSelector(0))
            .expect("valid skill");

        assert_eq!(path.level_gap, 3);
        assert_eq!(path.total_weeks, 12);
        assert_eq!(path.weekly_hours, 10);
        assert_eq!(path.total_hours(), 120);

        let weeks: Vec<u32> = path.phases.iter().map(|phase| phase.weeks).collect();
        assert_eq!(weeks, vec![4, 5, 4]);

        let milestone_weeks: Vec<u32> = path.milestones.iter().map(|m| m.week).collect();
        assert_eq!(milestone_weeks, vec![4, 9, 12]);
        assert!(path.milestones.iter().all(|m| m.target_date.is_none()));
        assert_eq!(path.career_impact, CAREER_IMPACTS[0]);
    }

    #[test]
    fn small_or_negative_gaps_use_the_floor() {
        for (current, target) in [(5, 5), (7, 3), (4, 5)] {
            let low = skill(current, target, Priority::Low);
            let path = synthesize(&low, None, &mut FixedSelector(0)).expect("valid skill");
            assert_eq!(path.total_weeks, MINIMUM_WEEKS);
            assert_eq!(path.weekly_hours, 4);
        }
    }

    #[test]
    fn phase_rounding_is_not_renormalized() {
        // 10 weeks: ceil(3), ceil(4), ceil(3)
        assert_eq!(share_of(10, 30), 3);
        // 28 weeks: 8.4, 11.2, 8.4
        let path = synthesize(&skill(1, 8, Priority::Medium), None, &mut FixedSelector(0))
            .expect("valid skill");
        let weeks: Vec<u32> = path.phases.iter().map(|phase| phase.weeks).collect();
        assert_eq!(path.total_weeks, 28);
        assert_eq!(weeks, vec![9, 12, 9]);
        assert_eq!(weeks.iter().sum::<u32>(), 30);
    }

    #[test]
    fn milestones_are_dated_from_the_start() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date");
        let path = synthesize(&skill(2, 5, Priority::Medium), Some(start), &mut FixedSelector(2))
            .expect("valid skill");

        assert_eq!(
            path.milestones[0].target_date,
            NaiveDate::from_ymd_opt(2024, 1, 29)
        );
        assert_eq!(
            path.milestones[2].target_date,
            NaiveDate::from_ymd_opt(2024, 3, 25)
        );
        assert_eq!(path.career_impact, CAREER_IMPACTS[2]);
    }

    #[test]
    fn resources_mention_the_skill() {
        let path = synthesize(&skill(2, 5, Priority::Medium), None, &mut FixedSelector(0))
            .expect("valid skill");
        assert_eq!(path.resources.len(), 4);
        assert!(path.resources.iter().all(|r| r.title.contains("Rust")));
    }

    #[test]
    fn levels_must_be_in_range() {
        assert_eq!(
            synthesize(&skill(0, 5, Priority::High), None, &mut FixedSelector(0)),
            Err(LearningError::LevelOutOfRange {
                field: "current_level",
                level: 0
            })
        );
        assert_eq!(
            synthesize(&skill(2, 11, Priority::High), None, &mut FixedSelector(0)),
            Err(LearningError::LevelOutOfRange {
                field: "target_level",
                level: 11
            })
        );

        let mut unnamed = skill(2, 5, Priority::High);
        unnamed.name = " ".to_string();
        assert_eq!(
            synthesize(&unnamed, None, &mut FixedSelector(0)),
            Err(LearningError::MissingSkillName)
        );
    }
}
