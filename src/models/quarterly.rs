use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::scoring::ScoreMap;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct QuarterlyResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub quarter_start: NaiveDate,
    pub catq_scores: Json<ScoreMap>,
    pub raadsr_scores: Json<ScoreMap>,
    pub catq_total: i32,
    pub raadsr_total: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct SaveQuarterlyRequest {
    pub response_date: Option<NaiveDate>,
    #[serde(default)]
    pub catq_scores: ScoreMap,
    #[serde(default)]
    pub raadsr_scores: ScoreMap,
}
