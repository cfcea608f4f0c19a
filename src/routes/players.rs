use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::error::ApiError;
use crate::models::Player;
use crate::service::PlayerService;

// GET /players - List all players
pub async fn get_players(
    State(service): State<PlayerService>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = service.get_all_players().await?;

    Ok(Json(players))
}

// GET /players/{id} - Get player by ID; a missing id serializes as `null`
pub async fn get_player_by_id(
    State(service): State<PlayerService>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Player>>, ApiError> {
    let player = service.get_player(id).await?;

    Ok(Json(player))
}

// POST /players - Add a player; any client-supplied id is discarded
pub async fn add_player(
    State(service): State<PlayerService>,
    Json(mut player): Json<Player>,
) -> Result<Json<Player>, ApiError> {
    player.id = 0;
    let created = service.add_player(player).await?;

    Ok(Json(created))
}

// PUT /players/{id} - Replace the stored record wholesale
pub async fn update_player(
    State(service): State<PlayerService>,
    Path(id): Path<i64>,
    Json(player): Json<Player>,
) -> Result<Json<Player>, ApiError> {
    let updated = service.update_player(id, player).await?;

    Ok(Json(updated))
}
