use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};

/// Separator used for the denormalized `selected_dates` column.
pub const DATE_SEPARATOR: &str = ",";

const SUBMITTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One stored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ResponseRecord {
    pub id: i64,
    pub name: String,
    pub selected_dates: String,
    #[serde(serialize_with = "serialize_to_minute")]
    pub submitted_at: NaiveDateTime,
}

fn serialize_to_minute<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(SUBMITTED_AT_FORMAT))
}

#[derive(Debug, Deserialize)]
pub struct SubmitPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dates: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub message: &'static str,
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub id: String,
}
