use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use freedom_engine::config::AnalysisConfig;
use freedom_engine::router::{engine_router, EngineState};
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn build_router(delay_ms: u64) -> axum::Router {
    let config = AnalysisConfig {
        delay_ms,
        selection_seed: Some(11),
    };
    engine_router(Arc::new(EngineState::new(&config)))
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).expect("serialize body")))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn send(router: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("router dispatch");
    let status = response.status();
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    let payload = serde_json::from_slice(&body).expect("json");
    (status, payload)
}

#[tokio::test]
async fn questionnaire_lists_five_categories() {
    let (status, payload) = send(build_router(0), get("/api/v1/assessment/questionnaire")).await;

    assert_eq!(status, StatusCode::OK);
    let categories = payload["categories"].as_array().expect("categories");
    assert_eq!(categories.len(), 5);
    assert_eq!(categories[0]["id"], json!("financial"));
}

#[tokio::test]
async fn scoring_averages_each_category() {
    let request = post(
        "/api/v1/assessment/score",
        json!({ "answers": { "financial_0": 80, "financial_1": 60, "financial_2": 100 } }),
    );
    let (status, payload) = send(build_router(0), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["scores"]["categories"][0]["score"], json!(80));
    assert_eq!(payload["scores"]["overall"], json!(16));
    assert_eq!(payload["insights"]["level"], json!("constrained"));
}

#[tokio::test]
async fn scoring_rejects_scores_off_the_likert_scale() {
    let request = post(
        "/api/v1/assessment/score",
        json!({ "answers": { "financial_0": 55 } }),
    );
    let (status, payload) = send(build_router(0), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(payload["error"].as_str().expect("message").contains("55"));
}

#[tokio::test]
async fn catalog_search_filters_by_term_and_category() {
    let (status, payload) = send(build_router(0), get("/api/v1/opportunities?term=blog")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload.as_array().map(Vec::len), Some(1));
    assert_eq!(payload[0]["id"], json!(2));

    let request = get("/api/v1/opportunities?category=consulting");
    let (_, payload) = send(build_router(0), request).await;
    let ids: Vec<u64> = payload
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|entry| entry["id"].as_u64())
        .collect();
    assert_eq!(ids, vec![5, 8]);
}

#[tokio::test]
async fn matching_orders_by_success_rate() {
    let request = post(
        "/api/v1/opportunities/match",
        json!({
            "profile": {
                "skills": ["programming"],
                "interests": ["remote work"],
                "time_available": 20,
                "risk_tolerance": "medium",
                "investment_capacity": 1000
            }
        }),
    );
    let (status, payload) = send(build_router(0), request).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = payload["matches"]
        .as_array()
        .expect("matches")
        .iter()
        .filter_map(|entry| entry["id"].as_u64())
        .collect();
    assert_eq!(ids, vec![1, 5, 2]);
    assert!(payload["exclusions"]
        .as_array()
        .expect("exclusions")
        .iter()
        .any(|exclusion| exclusion["opportunity_id"] == json!(6)));
}

#[tokio::test]
async fn decision_recommendation_picks_the_best_yield() {
    let request = post(
        "/api/v1/decisions/recommend",
        json!({
            "options": [
                { "name": "A", "description": "side business", "risk_level": 3,
                  "potential_return": 10000.0, "time_investment": 100.0, "success_probability": 0.8 },
                { "name": "B", "description": "freelance gig", "risk_level": 2,
                  "potential_return": 5000.0, "time_investment": 20.0, "success_probability": 0.9 }
            ]
        }),
    );
    let (status, payload) = send(build_router(0), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["recommended_option"], json!("B"));
    assert_eq!(payload["confidence_score"], json!(0.85));
    assert_eq!(payload["risk_band"], json!("low"));
}

#[tokio::test]
async fn decision_needs_two_options() {
    let request = post(
        "/api/v1/decisions/recommend",
        json!({
            "options": [
                { "name": "A", "description": "solo", "risk_level": 3,
                  "potential_return": 1.0, "time_investment": 1.0, "success_probability": 0.5 }
            ]
        }),
    );
    let (status, payload) = send(build_router(0), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(payload.get("error").is_some());
}

#[tokio::test]
async fn decision_rejects_options_whose_score_is_not_finite() {
    let request = post(
        "/api/v1/decisions/recommend",
        json!({
            "options": [
                { "name": "A", "description": "overflowing yield", "risk_level": 10,
                  "potential_return": 1e308, "time_investment": 1e-10, "success_probability": 0.5 },
                { "name": "B", "description": "steady", "risk_level": 5,
                  "potential_return": 100.0, "time_investment": 10.0, "success_probability": 0.5 }
            ]
        }),
    );
    let (status, payload) = send(build_router(0), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(payload["error"].as_str().expect("message").contains("'A'"));
}

#[tokio::test]
async fn automation_suggests_one_entry_per_task() {
    let request = post(
        "/api/v1/execution/automation",
        json!({
            "seed": 3,
            "tasks": [
                { "id": "task-0001", "title": "Weekly report", "description": "Compile KPIs",
                  "priority": "high", "category": "reporting", "estimated_time": 60 },
                { "id": "task-0002", "title": "Inbox triage", "description": "Sort mail",
                  "priority": "low", "category": "support", "estimated_time": 30 }
            ]
        }),
    );
    let (status, payload) = send(build_router(0), request).await;

    assert_eq!(status, StatusCode::OK);
    let suggestions = payload["suggestions"].as_array().expect("suggestions");
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0]["task_id"], json!("task-0001"));
    let total: u64 = suggestions
        .iter()
        .filter_map(|entry| entry["times_saved"].as_u64())
        .sum();
    assert_eq!(payload["total_time_saved"], json!(total));
}

#[tokio::test]
async fn automation_totals_large_estimates_without_overflow() {
    let request = post(
        "/api/v1/execution/automation",
        json!({
            "seed": 1,
            "tasks": [
                { "id": "task-0001", "title": "Archive sweep", "description": "Long batch",
                  "priority": "low", "category": "ops", "estimated_time": 4000000000u64 },
                { "id": "task-0002", "title": "Ledger rebuild", "description": "Long batch",
                  "priority": "low", "category": "ops", "estimated_time": 4000000000u64 }
            ]
        }),
    );
    let (status, payload) = send(build_router(0), request).await;

    assert_eq!(status, StatusCode::OK);
    let total: u64 = payload["suggestions"]
        .as_array()
        .expect("suggestions")
        .iter()
        .filter_map(|entry| entry["times_saved"].as_u64())
        .sum();
    assert!(total > u64::from(u32::MAX));
    assert_eq!(payload["total_time_saved"], json!(total));
}

#[tokio::test]
async fn automation_accepts_a_csv_export() {
    let request = post(
        "/api/v1/execution/automation",
        json!({
            "tasks_csv": "Title,Description,Priority,Category,Estimated Time\nWeekly report,Compile KPIs,high,reporting,60\n"
        }),
    );
    let (status, payload) = send(build_router(0), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["suggestions"][0]["task_id"], json!("task-0001"));
}

#[tokio::test]
async fn automation_without_tasks_is_rejected() {
    let request = post("/api/v1/execution/automation", json!({ "tasks": [] }));
    let (status, _) = send(build_router(0), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn learning_path_spans_the_level_gap() {
    let request = post(
        "/api/v1/learning/path",
        json!({
            "skill": { "name": "Rust", "category": "programming", "current_level": 2,
                       "target_level": 5, "priority": "high", "market_demand": 8 },
            "starts_on": "2024-01-01"
        }),
    );
    let (status, payload) = send(build_router(0), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(payload["total_weeks"], json!(12));
    assert_eq!(payload["weekly_hours"], json!(10));
    assert_eq!(payload["milestones"][2]["target_date"], json!("2024-03-25"));
}

#[tokio::test]
async fn newer_request_supersedes_the_pending_one() {
    let router = build_router(300);
    let body = json!({
        "session_key": "session-1",
        "options": [
            { "name": "A", "description": "a", "risk_level": 3,
              "potential_return": 100.0, "time_investment": 10.0, "success_probability": 0.5 },
            { "name": "B", "description": "b", "risk_level": 3,
              "potential_return": 200.0, "time_investment": 10.0, "success_probability": 0.5 }
        ]
    });

    let first = {
        let router = router.clone();
        let request = post("/api/v1/decisions/recommend", body.clone());
        tokio::spawn(async move { send(router, request).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;

    let (second_status, second) =
        send(router, post("/api/v1/decisions/recommend", body)).await;
    let (first_status, first) = first.await.expect("task joins");

    assert_eq!(first_status, StatusCode::CONFLICT);
    assert!(first["error"].as_str().expect("message").contains("superseded"));
    assert_eq!(second_status, StatusCode::OK);
    assert_eq!(second["recommended_option"], json!("B"));
}
