use crate::models::{ResponseRecord, DATE_SEPARATOR};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

/// Opens (or creates) the store at `path` and makes sure the table exists.
pub async fn connect(path: &Path) -> Result<SqlitePool, sqlx::Error> {
    let connect_options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_options)
        .await?;
    tracing::info!(path = %path.display(), "Connected to the SQLite database");

    init_schema(&pool).await?;
    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // AUTOINCREMENT keeps deleted ids from being handed out again.
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS responses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            selected_dates TEXT NOT NULL,
            submitted_at DATETIME DEFAULT CURRENT_TIMESTAMP
        );",
    )
    .execute(pool)
    .await?;
    tracing::info!("Table 'responses' is ready");
    Ok(())
}

pub async fn insert_response(
    pool: &SqlitePool,
    name: &str,
    dates: &[String],
) -> Result<i64, sqlx::Error> {
    let selected_dates = dates.join(DATE_SEPARATOR);
    let id = sqlx::query("INSERT INTO responses (name, selected_dates) VALUES (?, ?)")
        .bind(name)
        .bind(selected_dates)
        .execute(pool)
        .await?
        .last_insert_rowid();
    Ok(id)
}

pub async fn list_responses(pool: &SqlitePool) -> Result<Vec<ResponseRecord>, sqlx::Error> {
    sqlx::query_as(
        "SELECT id, name, selected_dates, submitted_at FROM responses
         ORDER BY submitted_at DESC, id DESC",
    )
    .fetch_all(pool)
    .await
}

/// Returns how many rows went away; zero means `id` was not stored.
pub async fn delete_response(pool: &SqlitePool, id: i64) -> Result<u64, sqlx::Error> {
    let affected = sqlx::query("DELETE FROM responses WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?
        .rows_affected();
    Ok(affected)
}
