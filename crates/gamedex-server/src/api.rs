use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header, header::HeaderName};
use axum::response::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use gamedex_core::game::Game;
use gamedex_core::index::parse_index;
use gamedex_core::input::{GameDraft, GamePatch};

use crate::error::AppError;
use crate::state::AppState;

/// Query parameters for GET /api/games/filter.
#[derive(Debug, Deserialize)]
pub struct FilterParams {
    pub genre: Option<String>,
}

/// A game together with its positional identifier.
#[derive(Debug, Serialize)]
pub struct GameWithId {
    pub id: usize,
    #[serde(flatten)]
    pub game: Game,
}

/// Response for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    #[serde(rename = "deletedGame")]
    pub deleted_game: Game,
}

/// GET /api/games — the full catalog in order.
pub async fn list_games(State(state): State<AppState>) -> Json<Vec<Game>> {
    let store = state.games.read().await;
    Json(store.all().to_vec())
}

/// GET /api/games/filter — case-insensitive exact match on genre.
pub async fn filter_games(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> Result<Json<Vec<Game>>, AppError> {
    let genre = match params.genre {
        Some(g) if !g.is_empty() => g,
        _ => {
            return Err(AppError::BadRequest(
                "please provide a genre query parameter".to_string(),
            ));
        },
    };

    let store = state.games.read().await;
    let matches = store.by_genre(&genre);
    if matches.is_empty() {
        return Err(AppError::NotFound(format!(
            "no games found for genre: {genre}"
        )));
    }

    Ok(Json(matches))
}

/// GET /api/games/:id — lookup by positional identifier.
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Game>, AppError> {
    let index = parse_index(&id).ok_or_else(|| {
        AppError::BadRequest("invalid id. use a non-negative integer".to_string())
    })?;

    let store = state.games.read().await;
    match store.get(index) {
        Some(game) => Ok(Json(game.clone())),
        None => Err(AppError::NotFound(format!("game not found for id: {index}"))),
    }
}

/// POST /api/games — validate, append, and point at the new resource.
pub async fn create_game(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<GameWithId>), AppError> {
    let draft = GameDraft::from_value(&body)?;
    let game = draft.into_game();

    let mut store = state.games.write().await;
    let id = store.push(game.clone());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/games/{id}"))],
        Json(GameWithId { id, game }),
    ))
}

/// PUT /api/games/:id — partial update; absent fields are left untouched.
///
/// A malformed identifier reports NotFound here, not BadRequest as in
/// `get_game`. The asymmetry is part of the wire contract.
pub async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<GameWithId>, AppError> {
    let not_found = || AppError::NotFound(format!("game not found for id: {id}"));

    let index = parse_index(&id).ok_or_else(not_found)?;

    let mut store = state.games.write().await;
    // Bounds are checked before the body, so an out-of-range id wins over
    // an invalid year.
    if index >= store.len() {
        return Err(not_found());
    }

    let patch = GamePatch::from_value(&body)?;
    let game = store.patch(index, &patch).ok_or_else(not_found)?;

    Ok(Json(GameWithId { id: index, game }))
}

/// DELETE /api/games/:id — remove the record, shifting later identifiers.
pub async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let not_found = || AppError::NotFound(format!("game not found for id: {id}"));

    let index = parse_index(&id).ok_or_else(not_found)?;

    let mut store = state.games.write().await;
    let removed = store.remove(index).ok_or_else(not_found)?;

    Ok(Json(DeleteResponse {
        message: format!("game with id {index} deleted"),
        deleted_game: removed,
    }))
}
