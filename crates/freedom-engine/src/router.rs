//! JSON routes over the engines, mounted by the API service.

use std::io::Cursor;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::AnalysisScheduler;
use crate::config::AnalysisConfig;
use crate::error::AppError;
use crate::selection::RandomSelector;
use crate::workflows::assessment::{
    score_answers, AnswerSheet, AssessmentInsights, AssessmentScores, Questionnaire,
};
use crate::workflows::decision::{recommend, DecisionOption, DecisionRecommendation};
use crate::workflows::execution::{
    suggest_automations, total_time_saved, AutomationSuggestion, Task, TaskImporter,
};
use crate::workflows::learning::{synthesize, LearningPath, Skill};
use crate::workflows::opportunities::{
    explain_matches, MatchReport, Opportunity, OpportunityCatalog, OpportunityCategory,
    UserProfile,
};

/// Read-only catalogs plus the per-session analysis gates.
#[derive(Debug)]
pub struct EngineState {
    pub questionnaire: Questionnaire,
    pub catalog: OpportunityCatalog,
    pub analysis: AnalysisScheduler,
    pub selection_seed: Option<u64>,
}

impl EngineState {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            questionnaire: Questionnaire::standard(),
            catalog: OpportunityCatalog::standard(),
            analysis: AnalysisScheduler::new(config.delay()),
            selection_seed: config.selection_seed,
        }
    }

    fn selector(&self, seed: Option<u64>) -> RandomSelector<rand::rngs::StdRng> {
        RandomSelector::from_optional_seed(seed.or(self.selection_seed))
    }
}

pub fn engine_router(state: Arc<EngineState>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questionnaire", get(questionnaire_handler))
        .route("/api/v1/assessment/score", post(score_handler))
        .route("/api/v1/opportunities", get(search_opportunities_handler))
        .route("/api/v1/opportunities/match", post(match_handler))
        .route("/api/v1/decisions/recommend", post(recommend_handler))
        .route("/api/v1/execution/automation", post(automation_handler))
        .route("/api/v1/learning/path", post(learning_path_handler))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub answers: AnswerSheet,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub scores: AssessmentScores,
    pub insights: AssessmentInsights,
}

#[derive(Debug, Default, Deserialize)]
pub struct OpportunityQuery {
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub category: Option<OpportunityCategory>,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub profile: UserProfile,
    #[serde(default)]
    pub session_key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub options: Vec<DecisionOption>,
    #[serde(default)]
    pub session_key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AutomationRequest {
    #[serde(default)]
    pub tasks: Vec<Task>,
    /// Spreadsheet export used instead of `tasks` when present.
    #[serde(default)]
    pub tasks_csv: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub session_key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AutomationResponse {
    pub suggestions: Vec<AutomationSuggestion>,
    pub total_time_saved: u64,
}

#[derive(Debug, Deserialize)]
pub struct LearningPathRequest {
    pub skill: Skill,
    #[serde(default)]
    pub starts_on: Option<NaiveDate>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub session_key: Option<String>,
}

async fn questionnaire_handler(State(state): State<Arc<EngineState>>) -> Json<Questionnaire> {
    Json(state.questionnaire.clone())
}

async fn score_handler(
    State(state): State<Arc<EngineState>>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    let scores = score_answers(&state.questionnaire, &payload.answers)?;
    let insights = scores.insights();
    info!(
        answers = payload.answers.len(),
        overall = scores.overall,
        "assessment scored"
    );
    Ok(Json(ScoreResponse { scores, insights }))
}

async fn search_opportunities_handler(
    State(state): State<Arc<EngineState>>,
    Query(query): Query<OpportunityQuery>,
) -> Json<Vec<Opportunity>> {
    let term = query.term.as_deref().unwrap_or_default();
    let results = state
        .catalog
        .search(term, query.category)
        .into_iter()
        .cloned()
        .collect();
    Json(results)
}

async fn match_handler(
    State(state): State<Arc<EngineState>>,
    Json(payload): Json<MatchRequest>,
) -> Result<Json<MatchReport>, AppError> {
    let report = state
        .analysis
        .run(payload.session_key.as_deref(), || {
            explain_matches(state.catalog.opportunities(), &payload.profile)
        })
        .await??;
    Ok(Json(report))
}

async fn recommend_handler(
    State(state): State<Arc<EngineState>>,
    Json(payload): Json<RecommendRequest>,
) -> Result<Json<DecisionRecommendation>, AppError> {
    let recommendation = state
        .analysis
        .run(payload.session_key.as_deref(), || recommend(&payload.options))
        .await??;
    Ok(Json(recommendation))
}

async fn automation_handler(
    State(state): State<Arc<EngineState>>,
    Json(payload): Json<AutomationRequest>,
) -> Result<Json<AutomationResponse>, AppError> {
    let AutomationRequest {
        tasks,
        tasks_csv,
        seed,
        session_key,
    } = payload;

    let tasks = match tasks_csv {
        Some(csv) => TaskImporter::from_reader(Cursor::new(csv.into_bytes()))?
            .tasks()
            .to_vec(),
        None => tasks,
    };

    let suggestions = state
        .analysis
        .run(session_key.as_deref(), || {
            suggest_automations(&tasks, &mut state.selector(seed))
        })
        .await??;

    Ok(Json(AutomationResponse {
        total_time_saved: total_time_saved(&suggestions),
        suggestions,
    }))
}

async fn learning_path_handler(
    State(state): State<Arc<EngineState>>,
    Json(payload): Json<LearningPathRequest>,
) -> Result<Json<LearningPath>, AppError> {
    let LearningPathRequest {
        skill,
        starts_on,
        seed,
        session_key,
    } = payload;

    let path = state
        .analysis
        .run(session_key.as_deref(), || {
            synthesize(&skill, starts_on, &mut state.selector(seed))
        })
        .await??;
    Ok(Json(path))
}
