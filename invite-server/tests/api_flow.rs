//! API tests against an in-memory server state.
//!
//! Exercises the public guest lookup/RSVP surface and the admin gate the
//! way a real client would, via `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use invite_server::api;
use invite_server::core::{Config, ServerState};
use invite_server::db::DbService;
use invite_server::db::repository::{admin, guest};
use shared::client::{LoginRequest, LoginResponse};
use shared::models::{AdminCreate, GuestCreate, GuestSummary, RsvpRecord, RsvpSubmit};

async fn test_app() -> (Router, ServerState) {
    let db = DbService::open_in_memory().await.unwrap();
    let config = Config::with_overrides("/tmp/invite-test", ":memory:", 0);
    let state = ServerState::with_pool(config, db.pool);
    (api::router(state.clone()), state)
}

async fn seed_guest(state: &ServerState, first: &str, last: &str) -> i64 {
    guest::create(
        &state.pool,
        GuestCreate {
            first_name: first.to_string(),
            last_name: last.to_string(),
            title: None,
            message: Some("Vă așteptăm cu drag!".to_string()),
        },
    )
    .await
    .unwrap()
    .id
}

fn get(path: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap()
}

fn json_request(method: &str, path: &str, body: &impl serde::Serialize) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn with_bearer(mut request: Request<Body>, token: &str) -> Request<Body> {
    request.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    );
    request
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn guest_lookup_and_rsvp_round_trip() {
    let (app, state) = test_app().await;
    seed_guest(&state, "Ana", "Popescu").await;
    let ion = seed_guest(&state, "Ion", "Popescu").await;
    seed_guest(&state, "Maria", "Popeanu").await;

    // Distinct last names for the prefix
    let response = app
        .clone()
        .oneshot(get("/api/guests/last-names?prefix=Pope"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let names: Vec<serde_json::Value> = body_json(response).await;
    assert_eq!(names.len(), 2);

    // Full summaries for the prefix
    let response = app
        .clone()
        .oneshot(get("/api/guests/search?prefix=Popescu"))
        .await
        .unwrap();
    let summaries: Vec<GuestSummary> = body_json(response).await;
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].first_name, "Ana");

    // Unanswered guest: status read shows unset
    let response = app
        .clone()
        .oneshot(get(&format!("/api/guests/{ion}/rsvp")))
        .await
        .unwrap();
    let record: RsvpRecord = body_json(response).await;
    assert!(record.confirmed.is_none());

    // Submit once
    let submit = RsvpSubmit {
        confirmed: true,
        bringing_guests: false,
        guest_names: String::new(),
        song_request: "Perfect".to_string(),
    };
    let response = app
        .clone()
        .oneshot(json_request("PUT", &format!("/api/guests/{ion}/rsvp"), &submit))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let record: RsvpRecord = body_json(response).await;
    assert_eq!(record.confirmed, Some(true));

    // A second submission is rejected with 409
    let response = app
        .clone()
        .oneshot(json_request("PUT", &format!("/api/guests/{ion}/rsvp"), &submit))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // Unknown guest is a 404
    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/guests/999/rsvp", &submit))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_prefix_returns_no_matches() {
    let (app, state) = test_app().await;
    seed_guest(&state, "Ana", "Popescu").await;

    let response = app
        .clone()
        .oneshot(get("/api/guests/last-names?prefix="))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let names: Vec<serde_json::Value> = body_json(response).await;
    assert!(names.is_empty());
}

#[tokio::test]
async fn admin_surface_is_gated_by_the_allow_list() {
    let (app, state) = test_app().await;
    seed_guest(&state, "Ana", "Popescu").await;

    // No token: 401
    let response = app
        .clone()
        .oneshot(get("/api/admin/guests"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Garbage token: 401
    let response = app
        .clone()
        .oneshot(with_bearer(get("/api/admin/guests"), "not-a-token"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // Unknown email never gets a session
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            &LoginRequest {
                email: "stranger@example.com".to_string(),
                password: "whatever-password".to_string(),
            },
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Allow-listed admin logs in and reaches the surface
    admin::create(
        &state.pool,
        AdminCreate {
            email: "owner@example.com".to_string(),
            password: "hunter22hunter22".to_string(),
        },
    )
    .await
    .unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            &LoginRequest {
                email: "owner@example.com".to_string(),
                password: "hunter22hunter22".to_string(),
            },
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let login: LoginResponse = body_json(response).await;

    let response = app
        .clone()
        .oneshot(with_bearer(get("/api/admin/guests"), &login.token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Create and delete a guest through the admin API
    let response = app
        .clone()
        .oneshot(with_bearer(
            json_request(
                "POST",
                "/api/admin/guests",
                &GuestCreate {
                    first_name: "Dan".to_string(),
                    last_name: "Ionescu".to_string(),
                    title: Some("Dr.".to_string()),
                    message: None,
                },
            ),
            &login.token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created: shared::models::Guest = body_json(response).await;

    let response = app
        .clone()
        .oneshot(with_bearer(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/admin/guests/{}", created.id))
                .body(Body::empty())
                .unwrap(),
            &login.token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let deleted: bool = body_json(response).await;
    assert!(deleted);

    // Removing the identity from the allow-list kills the live session
    sqlx::query("UPDATE admin SET is_active = 0 WHERE email = 'owner@example.com'")
        .execute(&state.pool)
        .await
        .unwrap();
    let response = app
        .clone()
        .oneshot(with_bearer(get("/api/admin/guests"), &login.token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn wrong_password_and_disabled_account_are_rejected() {
    let (app, state) = test_app().await;

    let created = admin::create(
        &state.pool,
        AdminCreate {
            email: "owner@example.com".to_string(),
            password: "hunter22hunter22".to_string(),
        },
    )
    .await
    .unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            &LoginRequest {
                email: "owner@example.com".to_string(),
                password: "wrong-password!!".to_string(),
            },
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    sqlx::query("UPDATE admin SET is_active = 0 WHERE id = ?")
        .bind(created.id)
        .execute(&state.pool)
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            &LoginRequest {
                email: "owner@example.com".to_string(),
                password: "hunter22hunter22".to_string(),
            },
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}
