//! HTTP routes over `GameService`.

use std::sync::{Arc, Mutex};

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::extract::ApiJson;
use crate::api::{
    CalculateFinalRequest, CompareRequest, ErrorBody, FinalResult, GameService, NewGameRequest,
    PlayRoundResponse,
};
use crate::cards::Card;
use crate::core::{GameError, GameRng};
use crate::games::war::SessionSnapshot;
use crate::rules::RoundOutcome;

/// Shared handler state.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    service: GameService,
    seeds: Option<Arc<Mutex<GameRng>>>,
}

impl AppState {
    /// With a base seed, games started without a seed get one drawn from it,
    /// so a server run is reproducible.
    pub fn new(base_seed: Option<u64>) -> Self {
        Self {
            service: GameService::default(),
            seeds: base_seed.map(|seed| Arc::new(Mutex::new(GameRng::new(seed)))),
        }
    }

    fn next_seed(&self) -> Option<u64> {
        let seeds = self.seeds.as_ref()?;
        match seeds.lock() {
            Ok(mut rng) => Some(rng.next_seed()),
            Err(_) => {
                warn!("Seed source poisoned, falling back to entropy");
                None
            }
        }
    }
}

/// `GameError` as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub GameError);

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self.0 {
            GameError::NoCardsRemaining | GameError::GameNotFinished => StatusCode::CONFLICT,
            GameError::UnknownCard(_)
            | GameError::EmptyConfiguration
            | GameError::ConfigurationTooLarge { .. }
            | GameError::InvalidCard(_)
            | GameError::InvalidSnapshot(_)
            | GameError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), error = %self.0, "Request rejected");
        (status, Json(ErrorBody::from(&self.0))).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health))
        .route("/api/cards", get(list_cards))
        .route("/api/new_game", post(new_game))
        .route("/api/compare", post(compare))
        .route("/api/play_round", post(play_round))
        .route("/api/end_game", post(end_game))
        .route("/api/calculate_final", post(calculate_final))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn list_cards(State(state): State<AppState>) -> Json<Vec<Card>> {
    Json(state.service.list_cards())
}

async fn new_game(
    State(state): State<AppState>,
    ApiJson(mut req): ApiJson<NewGameRequest>,
) -> ApiResult<SessionSnapshot> {
    if req.seed.is_none() {
        req.seed = state.next_seed();
    }
    Ok(Json(state.service.new_game(req)?))
}

async fn compare(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CompareRequest>,
) -> ApiResult<RoundOutcome> {
    Ok(Json(state.service.compare_cards(req)?))
}

async fn play_round(
    State(state): State<AppState>,
    ApiJson(snapshot): ApiJson<SessionSnapshot>,
) -> ApiResult<PlayRoundResponse> {
    Ok(Json(state.service.play_round(snapshot)?))
}

async fn end_game(
    State(state): State<AppState>,
    ApiJson(snapshot): ApiJson<SessionSnapshot>,
) -> ApiResult<FinalResult> {
    Ok(Json(state.service.end_game(snapshot)?))
}

async fn calculate_final(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CalculateFinalRequest>,
) -> Json<FinalResult> {
    Json(state.service.calculate_final(req))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_mapping() {
        assert_eq!(
            ApiError(GameError::NoCardsRemaining).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError(GameError::GameNotFinished).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError(GameError::UnknownCard("beetle1".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(GameError::InvalidSnapshot("x".into())).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(GameError::ConfigurationTooLarge { requested: 2000, limit: 1024 }).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_seed_source_is_deterministic() {
        let first = AppState::new(Some(5));
        let second = AppState::new(Some(5));

        let a: Vec<_> = (0..3).map(|_| first.next_seed()).collect();
        let b: Vec<_> = (0..3).map(|_| second.next_seed()).collect();
        assert_eq!(a, b);
        assert!(a.iter().all(Option::is_some));
        assert_eq!(AppState::new(None).next_seed(), None);
    }
}
