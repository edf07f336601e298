use serde::Serialize;
use tracing::info;

use super::domain::{DecisionError, DecisionOption};
use super::ranker::{rank_options, ScoredOption};

/// Fixed confidence reported alongside every recommendation.
pub const RECOMMENDATION_CONFIDENCE: f64 = 0.85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub const fn from_level(risk_level: u8) -> Self {
        if risk_level < 4 {
            Self::Low
        } else if risk_level < 7 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecisionRecommendation {
    pub recommended_option: String,
    pub confidence_score: f64,
    pub score: f64,
    pub risk_band: RiskBand,
    pub reasoning: String,
    pub risk_analysis: String,
    pub action_plan: Vec<String>,
    pub success_metrics: Vec<String>,
    pub fallback_plan: String,
    pub ranking: Vec<ScoredOption>,
}

/// Rank the options and narrate the winner.
pub fn recommend(options: &[DecisionOption]) -> Result<DecisionRecommendation, DecisionError> {
    let ranking = rank_options(options)?;
    let best = &options[ranking.best().index];
    let fallback = ranking.runner_up().map(|scored| &options[scored.index]);
    let risk_band = RiskBand::from_level(best.risk_level);

    info!(
        options = options.len(),
        recommended = %best.name,
        score = ranking.best().score,
        "decision analysis complete"
    );

    Ok(DecisionRecommendation {
        recommended_option: best.name.clone(),
        confidence_score: RECOMMENDATION_CONFIDENCE,
        score: ranking.best().score,
        risk_band,
        reasoning: reasoning(best),
        risk_analysis: format!(
            "Risk level: {} ({}/10). Draw up a detailed execution plan and put risk controls in place.",
            risk_band.label(),
            best.risk_level
        ),
        action_plan: action_plan(),
        success_metrics: success_metrics(best),
        fallback_plan: fallback_plan(fallback),
        ranking: ranking.into_ranked(),
    })
}

fn reasoning(best: &DecisionOption) -> String {
    format!(
        "Based on the data, \"{}\" is the recommended choice. It offers the best balance of \
         return potential, probability of success, and risk control: an expected return of \
         {:.0}, a {:.0}% chance of success, and a risk level of {}/10.",
        best.name,
        best.potential_return,
        best.success_probability * 100.0,
        best.risk_level
    )
}

fn action_plan() -> Vec<String> {
    [
        "Phase 1: prepare and plan",
        "- Draw up a detailed timeline",
        "- Set milestone goals",
        "Phase 2: execute and monitor",
        "- Start executing to plan",
        "- Review progress regularly",
        "Phase 3: optimize and expand",
        "- Capture lessons learned",
        "- Look for opportunities to scale",
    ]
    .iter()
    .map(|step| (*step).to_string())
    .collect()
}

fn success_metrics(best: &DecisionOption) -> Vec<String> {
    vec![
        format!("Return target: {:.0}", best.potential_return),
        format!(
            "Time efficiency: {:.0} per hour invested",
            best.potential_return / best.time_investment
        ),
        format!(
            "Success probability: reach the expected {:.0}%",
            best.success_probability * 100.0
        ),
        "Risk control: actual risk stays within expectations".to_string(),
    ]
}

fn fallback_plan(backup: Option<&DecisionOption>) -> String {
    match backup {
        Some(option) => format!(
            "Fallback: \"{}\". Switch to it if risk exceeds expectations, resources run short, \
             or the expected return drops sharply.",
            option.name
        ),
        None => "Re-evaluate the existing options or look for new opportunities.".to_string(),
    }
}
