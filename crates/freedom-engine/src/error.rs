use crate::analysis::AnalysisError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::assessment::AssessmentError;
use crate::workflows::decision::DecisionError;
use crate::workflows::execution::{ExecutionError, TaskImportError};
use crate::workflows::learning::LearningError;
use crate::workflows::opportunities::MatchError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Assessment(AssessmentError),
    Matching(MatchError),
    Decision(DecisionError),
    Execution(ExecutionError),
    TaskImport(TaskImportError),
    Learning(LearningError),
    Analysis(AnalysisError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Assessment(_)
            | AppError::Matching(_)
            | AppError::Decision(_)
            | AppError::Execution(_)
            | AppError::Learning(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::TaskImport(TaskImportError::Io(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::TaskImport(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Analysis(_) => StatusCode::CONFLICT,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Assessment(err) => write!(f, "invalid answers: {}", err),
            AppError::Matching(err) => write!(f, "invalid profile: {}", err),
            AppError::Decision(err) => write!(f, "invalid decision options: {}", err),
            AppError::Execution(err) => write!(f, "invalid tasks: {}", err),
            AppError::TaskImport(err) => write!(f, "task import failed: {}", err),
            AppError::Learning(err) => write!(f, "invalid skill: {}", err),
            AppError::Analysis(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Assessment(err) => Some(err),
            AppError::Matching(err) => Some(err),
            AppError::Decision(err) => Some(err),
            AppError::Execution(err) => Some(err),
            AppError::TaskImport(err) => Some(err),
            AppError::Learning(err) => Some(err),
            AppError::Analysis(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<AssessmentError> for AppError {
    fn from(value: AssessmentError) -> Self {
        Self::Assessment(value)
    }
}

impl From<MatchError> for AppError {
    fn from(value: MatchError) -> Self {
        Self::Matching(value)
    }
}

impl From<DecisionError> for AppError {
    fn from(value: DecisionError) -> Self {
        Self::Decision(value)
    }
}

impl From<ExecutionError> for AppError {
    fn from(value: ExecutionError) -> Self {
        Self::Execution(value)
    }
}

impl From<TaskImportError> for AppError {
    fn from(value: TaskImportError) -> Self {
        Self::TaskImport(value)
    }
}

impl From<LearningError> for AppError {
    fn from(value: LearningError) -> Self {
        Self::Learning(value)
    }
}

impl From<AnalysisError> for AppError {
    fn from(value: AnalysisError) -> Self {
        Self::Analysis(value)
    }
}
