use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use super::domain::{Opportunity, RiskTolerance, UserProfile};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("select at least one skill before matching opportunities")]
    MissingSkills,
    #[error("select at least one interest before matching opportunities")]
    MissingInterests,
}

/// Reason an opportunity was filtered out for a given profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExclusionReason {
    NoSharedSkill,
    TimeCommitment { required: u32, available: u32 },
    InitialInvestment { required: u32, capacity: u32 },
    RiskAboveTolerance { risk_level: u8, tolerance: RiskTolerance },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exclusion {
    pub opportunity_id: u32,
    pub title: String,
    pub reasons: Vec<ExclusionReason>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchReport {
    pub matches: Vec<Opportunity>,
    pub exclusions: Vec<Exclusion>,
}

/// Opportunities the profile qualifies for, best success rate first.
///
/// Ties keep catalog order; the catalog itself is never modified.
pub fn match_opportunities(
    catalog: &[Opportunity],
    profile: &UserProfile,
) -> Result<Vec<Opportunity>, MatchError> {
    explain_matches(catalog, profile).map(|report| report.matches)
}

/// Same filter as [`match_opportunities`], also listing why each other entry was dropped.
pub fn explain_matches(
    catalog: &[Opportunity],
    profile: &UserProfile,
) -> Result<MatchReport, MatchError> {
    let skills = normalized_skills(profile)?;

    let mut matches = Vec::new();
    let mut exclusions = Vec::new();
    for opportunity in catalog {
        let reasons = exclusion_reasons(opportunity, &skills, profile);
        if reasons.is_empty() {
            matches.push(opportunity.clone());
        } else {
            exclusions.push(Exclusion {
                opportunity_id: opportunity.id,
                title: opportunity.title.clone(),
                reasons,
            });
        }
    }

    // `sort_by` is stable, so equal success rates stay in catalog order.
    matches.sort_by(|a, b| b.success_rate.cmp(&a.success_rate));

    debug!(
        catalog = catalog.len(),
        matched = matches.len(),
        tolerance = ?profile.risk_tolerance,
        "matched opportunities"
    );

    Ok(MatchReport {
        matches,
        exclusions,
    })
}

fn normalized_skills(profile: &UserProfile) -> Result<HashSet<String>, MatchError> {
    let skills: HashSet<String> = profile
        .skills
        .iter()
        .map(|skill| normalize(skill))
        .filter(|skill| !skill.is_empty())
        .collect();
    if skills.is_empty() {
        return Err(MatchError::MissingSkills);
    }
    if profile
        .interests
        .iter()
        .all(|interest| interest.trim().is_empty())
    {
        return Err(MatchError::MissingInterests);
    }
    Ok(skills)
}

fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn exclusion_reasons(
    opportunity: &Opportunity,
    skills: &HashSet<String>,
    profile: &UserProfile,
) -> Vec<ExclusionReason> {
    let requirements = &opportunity.requirements;
    let mut reasons = Vec::new();

    if !requirements
        .skills
        .iter()
        .any(|skill| skills.contains(&normalize(skill)))
    {
        reasons.push(ExclusionReason::NoSharedSkill);
    }
    if requirements.time_commitment > profile.time_available {
        reasons.push(ExclusionReason::TimeCommitment {
            required: requirements.time_commitment,
            available: profile.time_available,
        });
    }
    if requirements.initial_investment > profile.investment_capacity {
        reasons.push(ExclusionReason::InitialInvestment {
            required: requirements.initial_investment,
            capacity: profile.investment_capacity,
        });
    }
    if !profile.risk_tolerance.admits(opportunity.risk_level) {
        reasons.push(ExclusionReason::RiskAboveTolerance {
            risk_level: opportunity.risk_level,
            tolerance: profile.risk_tolerance,
        });
    }

    reasons
}
