use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::scoring::ScoreMap;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MonthlyResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub month_start: NaiveDate,
    pub eq5d5l_scores: Json<ScoreMap>,
    pub ybocs_scores: Json<ScoreMap>,
    pub fast_scores: Json<ScoreMap>,
    pub eq5d5l_total: i32,
    pub ybocs_total: i32,
    pub fast_total: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct SaveMonthlyRequest {
    pub response_date: Option<NaiveDate>,
    #[serde(default)]
    pub eq5d5l_scores: ScoreMap,
    #[serde(default)]
    pub ybocs_scores: ScoreMap,
    #[serde(default)]
    pub fast_scores: ScoreMap,
}
