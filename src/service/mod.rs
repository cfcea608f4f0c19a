use sqlx::sqlite::SqlitePool;

use crate::db;
use crate::error::ApiError;
use crate::models::Player;

/// Mediates between the HTTP handlers and the store, adding only existence
/// checks. Cloned into router state; the pool itself is the shared handle.
#[derive(Clone)]
pub struct PlayerService {
    pool: SqlitePool,
}

impl PlayerService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_all_players(&self) -> Result<Vec<Player>, ApiError> {
        Ok(db::find_all(&self.pool).await?)
    }

    /// Absence is not an error here: a missing id yields `Ok(None)`.
    pub async fn get_player(&self, id: i64) -> Result<Option<Player>, ApiError> {
        Ok(db::find_by_id(&self.pool, id).await?)
    }

    /// Callers clear any client-supplied id beforehand so the store assigns
    /// a fresh one.
    pub async fn add_player(&self, player: Player) -> Result<Player, ApiError> {
        Ok(db::save(&self.pool, player).await?)
    }

    /// Overwrites the stored record wholesale, forcing the payload's id to
    /// the given one. Two store round trips; a concurrent update to the same
    /// id can interleave between the lookup and the save.
    pub async fn update_player(&self, id: i64, mut player: Player) -> Result<Player, ApiError> {
        db::find_by_id(&self.pool, id)
            .await?
            .ok_or(ApiError::PlayerNotFound(id))?;

        player.id = id;
        Ok(db::save(&self.pool, player).await?)
    }
}
