use sqlx::sqlite::SqlitePool;
use crate::models::Player;

/// Create the players table on startup if it does not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS players (
               id INTEGER PRIMARY KEY AUTOINCREMENT,
               name TEXT,
               nationality TEXT,
               birth_date DATE,
               titles INTEGER NOT NULL DEFAULT 0
           )"#
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn find_all(pool: &SqlitePool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT * FROM players ORDER BY id"#
    )
    .fetch_all(pool)
    .await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT * FROM players WHERE id = ?"#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Insert the record when its id is unset (0), otherwise overwrite the row
/// with that id wholesale. Returns the stored record including its id.
pub async fn save(pool: &SqlitePool, player: Player) -> Result<Player, sqlx::Error> {
    if player.id == 0 {
        let id = sqlx::query(
            r#"INSERT INTO players (name, nationality, birth_date, titles)
               VALUES (?, ?, ?, ?)"#
        )
        .bind(&player.name)
        .bind(&player.nationality)
        .bind(player.birth_date)
        .bind(player.titles)
        .execute(pool)
        .await?
        .last_insert_rowid();

        Ok(Player { id, ..player })
    } else {
        sqlx::query(
            r#"UPDATE players SET name = ?, nationality = ?, birth_date = ?, titles = ?
               WHERE id = ?"#
        )
        .bind(&player.name)
        .bind(&player.nationality)
        .bind(player.birth_date)
        .bind(player.titles)
        .bind(player.id)
        .execute(pool)
        .await?;

        Ok(player)
    }
}
