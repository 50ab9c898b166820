//! HTTP route tests, driven in-process through the router.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use circle_of_life::server::{router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(state: &AppState, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(match body {
            Some(json) => Body::from(json.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

async fn post(state: &AppState, uri: &str, body: Value) -> (StatusCode, Value) {
    send(state, "POST", uri, Some(body)).await
}

#[tokio::test]
async fn test_healthz() {
    let (status, body) = send(&AppState::default(), "GET", "/healthz", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("ok".into()));
}

#[tokio::test]
async fn test_list_cards() {
    let (status, body) = send(&AppState::default(), "GET", "/api/cards", None).await;
    assert_eq!(status, StatusCode::OK);

    let cards = body.as_array().unwrap();
    assert_eq!(cards.len(), 8);
    assert_eq!(cards[0]["identifier"], "ladybug1");
    assert_eq!(cards[0]["insectKind"], "LADYBUG");
    assert_eq!(cards[0]["stage"], 1);
    assert_eq!(cards[0]["imageRef"], "/ladybug1.png");
}

#[tokio::test]
async fn test_full_game_over_http() {
    let state = AppState::default();
    let (status, mut session) = post(
        &state,
        "/api/new_game",
        json!({"configuration": {"ladybug2": 1, "monarch3": 1}, "seed": 4}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["deckA"].as_array().unwrap().len(), 2);

    for round in 1..=2 {
        let (status, body) = post(&state, "/api/play_round", session).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["updatedDeckA"].as_array().unwrap().len(), 2 - round);
        assert_eq!(body["usedCardA"], body["roundOutcome"]["cardA"]);
        assert_eq!(body["allCardsUsed"], round == 2);
        session = body["session"].clone();
    }

    assert_eq!(session["isOver"], true);
    let verdict = session["finalVerdict"].as_str().unwrap().to_string();

    let (status, body) = post(&state, "/api/play_round", session.clone()).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "no_cards_remaining");

    let (status, body) = post(&state, "/api/end_game", session).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["finalVerdict"], verdict.as_str());
}

#[tokio::test]
async fn test_new_game_errors() {
    let state = AppState::default();

    let (status, body) = post(&state, "/api/new_game", json!({"configuration": {"beetle1": 2}})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown_card");

    let (status, body) = post(&state, "/api/new_game", json!({"configuration": {}})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "empty_configuration");
}

#[tokio::test]
async fn test_base_seed_makes_games_reproducible() {
    let (_, first) = post(&AppState::new(Some(31)), "/api/new_game", json!({})).await;
    let (_, second) = post(&AppState::new(Some(31)), "/api/new_game", json!({})).await;

    assert_eq!(first["deckA"], second["deckA"]);
    assert_eq!(first["seed"], second["seed"]);
}

#[tokio::test]
async fn test_compare() {
    let state = AppState::default();
    let (status, body) = post(
        &state,
        "/api/compare",
        json!({
            "cardA": {"identifier": "monarch4", "insectKind": "MONARCH", "stage": 4},
            "cardB": {"identifier": "ladybug2", "insectKind": "LADYBUG", "stage": 2}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["winner"], "A");

    let (status, body) = post(
        &state,
        "/api/compare",
        json!({"cardA": {"insectKind": "MONARCH", "stage": 7}, "cardB": {"insectKind": "LADYBUG", "stage": 2}}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_card");
}

#[tokio::test]
async fn test_tampered_snapshot_rejected() {
    let state = AppState::default();
    let (_, mut session) = post(&state, "/api/new_game", json!({"seed": 9})).await;
    session["scoreA"] = json!(3);

    let (status, body) = post(&state, "/api/play_round", session).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_snapshot");
}

#[tokio::test]
async fn test_calculate_final() {
    let (status, body) = post(
        &AppState::default(),
        "/api/calculate_final",
        json!({"roundLog": [{"winner": "B"}, {"winner": "DRAW"}, {"winner": "B"}]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["finalVerdict"], "Player B wins");
    assert_eq!(body["scoreline"], "0-2");
}

#[tokio::test]
async fn test_huge_configuration_rejected() {
    let state = AppState::default();
    let (status, body) = post(
        &state,
        "/api/new_game",
        json!({"configuration": {"ladybug1": 4294967295u64, "monarch1": 4294967295u64}}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "configuration_too_large");

    let (status, body) = post(
        &state,
        "/api/new_game",
        json!({"configuration": {"beetle9": 4294967295u64, "ladybug1": 4294967295u64}}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown_card");

    let (_, body) = send(&state, "GET", "/healthz", None).await;
    assert_eq!(body, Value::String("ok".into()));
}

#[tokio::test]
async fn test_out_of_range_stage_in_snapshot() {
    let state = AppState::default();
    let (_, mut session) = post(&state, "/api/new_game", json!({"seed": 12})).await;
    session["deckA"][0]["stage"] = json!(7);

    let (status, body) = post(&state, "/api/play_round", session.clone()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_snapshot");
    assert!(body["message"].as_str().unwrap().contains("stage 7"));

    let (status, body) = post(&state, "/api/end_game", session).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_snapshot");
}

#[tokio::test]
async fn test_malformed_bodies_use_error_body() {
    let state = AppState::default();

    let (status, body) = post(
        &state,
        "/api/compare",
        json!({"cardA": {"insectKind": "MONARCH", "stage": 3.0}, "cardB": {"insectKind": "LADYBUG", "stage": 2}}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_card");

    let (status, body) = post(&state, "/api/new_game", json!({"configuration": {"ladybug1": -1}})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_request");

    let (status, body) = post(&state, "/api/calculate_final", json!({"roundLog": [{"winner": "C"}]})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_request");
}
