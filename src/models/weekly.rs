use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::scoring::ScoreMap;

/// One row per (user, week start). Totals are derived columns, recomputed
/// from their score map on every save.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct WeeklyResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub week_start: NaiveDate,
    pub phq9_scores: Json<ScoreMap>,
    pub gad7_scores: Json<ScoreMap>,
    pub asrm_scores: Json<ScoreMap>,
    pub phq9_total: i32,
    pub gad7_total: i32,
    pub asrm_total: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied totals are deliberately absent; the server computes them.
#[derive(Debug, Deserialize)]
pub struct SaveWeeklyRequest {
    pub response_date: Option<NaiveDate>,
    #[serde(default)]
    pub phq9_scores: ScoreMap,
    #[serde(default)]
    pub gad7_scores: ScoreMap,
    #[serde(default)]
    pub asrm_scores: ScoreMap,
}
