use sqlx::SqlitePool;

/// The single storage handle, handed to every handler through `State`.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
