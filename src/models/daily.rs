use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One row per (user, calendar date). Every metric is independently
/// optional; a saved day may be as sparse as a single field.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DailyResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub response_date: NaiveDate,
    pub sleep_quality: Option<i32>,
    pub sleep_hours: Option<f64>,
    pub mood: Option<i32>,
    pub anxiety: Option<i32>,
    pub stress_score: Option<i32>,
    pub resting_hr: Option<i32>,
    pub hrv: Option<i32>,
    pub depressed_mood: Option<i32>,
    pub euphoria: Option<i32>,
    pub irritability: Option<i32>,
    pub obsessions: Option<i32>,
    pub sensory_sensitivity: Option<i32>,
    pub social_masking: Option<i32>,
    pub suicide_risk: Option<i32>,
    pub spravatto_sessions: Option<i32>,
    pub medications_taken: bool,
    pub exercises_performed: bool,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A save replaces the whole record for the date; omitted fields become
/// null, not "keep the old value".
#[derive(Debug, Deserialize)]
pub struct SaveDailyRequest {
    pub response_date: Option<NaiveDate>,
    pub sleep_quality: Option<i32>,
    pub sleep_hours: Option<f64>,
    pub mood: Option<i32>,
    pub anxiety: Option<i32>,
    pub stress_score: Option<i32>,
    pub resting_hr: Option<i32>,
    pub hrv: Option<i32>,
    pub depressed_mood: Option<i32>,
    pub euphoria: Option<i32>,
    pub irritability: Option<i32>,
    pub obsessions: Option<i32>,
    pub sensory_sensitivity: Option<i32>,
    pub social_masking: Option<i32>,
    pub suicide_risk: Option<i32>,
    pub spravatto_sessions: Option<i32>,
    #[serde(default)]
    pub medications_taken: bool,
    #[serde(default)]
    pub exercises_performed: bool,
    pub notes: Option<String>,
}
