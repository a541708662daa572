mod common;

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use common::*;
use server::{db, router, AppState};
use shared::{
    api::{
        payloads::{ErrorResponse, WorkoutResponse},
        Object,
    },
    configure_tracing_once,
};
use tower::ServiceExt;

fn app(test_db: &TestDb) -> Router {
    configure_tracing_once();
    let pool = db::create_pool(test_db.connection_string(), 4, BUSY_TIMEOUT).unwrap();
    router(AppState { pool }, Duration::from_secs(10))
}

fn json_request(method: Method, uri: &str, body: &impl serde::Serialize) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_reports_available() {
    let test_db = TestDb::new();
    let response = app(&test_db)
        .oneshot(empty_request(Method::GET, Object::Health.path()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"status is available\n");
}

#[tokio::test]
async fn workout_lifecycle_over_http() {
    let test_db = TestDb::new();
    let app = app(&test_db);

    let response = app
        .clone()
        .oneshot(json_request(Method::POST, Object::Workout.path(), &pull_workout()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let uri = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();
    let created: WorkoutResponse = body_json(response).await;
    let id = created.workout.id;
    assert_eq!(uri, format!("/api/workouts/{id}"));

    let response = app
        .clone()
        .oneshot(empty_request(Method::GET, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: WorkoutResponse = body_json(response).await;
    assert_eq!(fetched, created);

    let mut replacement = pull_workout();
    replacement.title = "Pull Day - Heavy".to_owned();
    replacement.entries.truncate(2);
    let response = app
        .clone()
        .oneshot(json_request(Method::PUT, &uri, &replacement))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated: WorkoutResponse = body_json(response).await;
    assert_eq!(updated.workout.title, "Pull Day - Heavy");
    assert_eq!(updated.workout.entries.len(), 2);

    let response = app
        .clone()
        .oneshot(empty_request(Method::DELETE, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(empty_request(Method::DELETE, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(empty_request(Method::GET, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = body_json(response).await;
    assert_eq!(error.error, format!("workout {id} not found"));
}

#[tokio::test]
async fn invalid_workout_is_a_bad_request() {
    let test_db = TestDb::new();

    let response = app(&test_db)
        .oneshot(json_request(Method::POST, Object::Workout.path(), &invalid_workout()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = body_json(response).await;
    assert!(error.error.contains("title must not be empty"), "{}", error.error);

    assert_eq!(workout_count(&test_db.connect()), 0);
}

#[tokio::test]
async fn update_of_missing_workout_is_not_found() {
    let test_db = TestDb::new();

    let response = app(&test_db)
        .oneshot(json_request(
            Method::PUT,
            &Object::WorkoutId.path_with_id(7),
            &pull_workout(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
