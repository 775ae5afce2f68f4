// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::Arc;

use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};
use serde_json::{Value, json};
use test_reports::{
    config::{Config, parse_upstream_url},
    routes,
    state::AppState,
    upstream::HttpReportSource,
    utils::jwt::issue_session_token,
};

pub const JWT_SECRET: &str = "test_secret_for_integration_tests";

/// The user most fixtures belong to.
pub const USER_ID: i64 = 7;
/// Owns result 502 only.
pub const OTHER_USER_ID: i64 = 8;

type Reply = (StatusCode, Json<Value>);

fn ok(body: Value) -> Reply {
    (StatusCode::OK, Json(body))
}

fn missing() -> Reply {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "not found" })))
}

fn broken() -> Reply {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "boom" })),
    )
}

async fn test_by_id(Path(id): Path<i64>) -> Reply {
    match id {
        // maxMarks as a string, the way some upstream rows store it
        1 => ok(json!({
            "testId": 1, "title": "Geography", "disc": "Capitals",
            "maxMarks": "100", "numberOfQuestions": 10, "active": true,
            "subject": { "subId": 3 }
        })),
        2 => ok(json!({ "testId": 2, "title": "History", "maxMarks": 50 })),
        3 => ok(json!({ "testId": 3, "title": "Broken", "maxMarks": 20 })),
        99 => broken(),
        _ => missing(),
    }
}

async fn question_by_id(Path(id): Path<i64>) -> Reply {
    match id {
        11 => ok(json!({
            "quesId": 11, "question": "Capital of France?",
            "option1": "Paris", "option2": "London", "answer": "Paris"
        })),
        12 => ok(json!({
            "quesId": 12, "question": "Capital of Italy?",
            "option1": "Madrid", "option2": "Rome", "option3": "Milan", "option4": "Naples",
            "answer": "Rome"
        })),
        13 => ok(json!({
            "quesId": 13, "question": "Capital of Spain?",
            "option1": "Madrid", "option2": "Lisbon", "option3": "Seville",
            "answer": "Madrid"
        })),
        15 => broken(),
        _ => missing(),
    }
}

fn selections(entries: &[(i64, Option<&str>)]) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|(id, choice)| json!({ "questionId": id, "selectedOption": choice }))
            .collect(),
    )
}

fn result_501() -> Value {
    json!({
        "id": 501, "userId": USER_ID, "testId": 1,
        "selectedOptions": selections(&[
            (12, Some("Milan")),
            (11, Some("Paris")),
            (14, Some("Oslo")),
            (13, None),
            (15, Some("x")),
        ]),
        "correctAnswers": 1, "wrongAnswers": 2, "unansweredQuestions": 2
    })
}

fn result_504() -> Value {
    let ids: Vec<(i64, Option<&str>)> = (0..10).map(|i| (100 + i, Some("A"))).collect();
    json!({
        "id": 504, "userId": USER_ID, "testId": 1,
        "selectedOptions": selections(&ids),
        "correctAnswers": 7, "wrongAnswers": 3, "unansweredQuestions": 0
    })
}

async fn result_by_id(Path(id): Path<i64>) -> Reply {
    match id {
        501 => ok(result_501()),
        502 => ok(json!({
            "id": 502, "userId": OTHER_USER_ID, "testId": 1,
            "selectedOptions": selections(&[(11, Some("Paris"))]),
            "correctAnswers": 1, "wrongAnswers": 0, "unansweredQuestions": 0
        })),
        503 => ok(json!({
            "id": 503, "userId": USER_ID, "testId": 99,
            "selectedOptions": selections(&[(11, Some("Paris"))]),
            "correctAnswers": 1, "wrongAnswers": 0, "unansweredQuestions": 0
        })),
        _ => missing(),
    }
}

async fn results_for_user(Path((user_id, test_id)): Path<(i64, i64)>) -> Reply {
    match (user_id, test_id) {
        (USER_ID, 1) => ok(json!([result_504(), result_501()])),
        (USER_ID, 2) => ok(json!([])),
        (USER_ID, 3) => ok(json!([{
            "id": 505, "userId": USER_ID, "testId": 3,
            "selectedOptions": [],
            "correctAnswers": 0, "wrongAnswers": 0, "unansweredQuestions": 0
        }])),
        _ => ok(json!([])),
    }
}

async fn user_by_id(Path(id): Path<i64>) -> Reply {
    match id {
        USER_ID => ok(json!({
            "username": "Ada Lovelace", "email": "ada@example.com", "phoneNo": "555-0100"
        })),
        _ => missing(),
    }
}

/// Spawns a stand-in for the upstream backend and returns its base URL.
async fn spawn_upstream() -> String {
    let app = Router::new()
        .route("/test/{id}", get(test_by_id))
        .route("/question/{id}", get(question_by_id))
        .route("/test-results/{id}", get(result_by_id))
        .route(
            "/test-results/user/{user_id}/test/{test_id}",
            get(results_for_user),
        )
        .route("/Admin/user/{id}", get(user_by_id));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind upstream port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

/// Spawns the app against a fresh fake upstream on random ports.
/// Returns the app's base URL (e.g., "http://127.0.0.1:12345").
pub async fn spawn_app() -> String {
    let upstream_url = parse_upstream_url(&spawn_upstream().await).unwrap();

    let config = Config {
        upstream_url: upstream_url.clone(),
        jwt_secret: JWT_SECRET.to_string(),
        upstream_timeout_secs: 5,
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        rust_log: "error".to_string(),
    };

    let source = HttpReportSource::new(upstream_url, std::time::Duration::from_secs(5))
        .expect("Failed to build upstream client");

    let state = AppState {
        source: Arc::new(source),
        config,
    };

    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");

    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

pub fn bearer(user_id: i64, role: &str) -> String {
    let token = issue_session_token(user_id, role, JWT_SECRET, 600).unwrap();
    format!("Bearer {}", token)
}
