use chrono::NaiveDate;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::quarterly::{QuarterlyResponse, SaveQuarterlyRequest};
use crate::period::Granularity;
use crate::scoring::{self, CATQ, RAADSR};

pub async fn fetch(
    db: &PgPool,
    user_id: Uuid,
    date: NaiveDate,
) -> AppResult<Option<QuarterlyResponse>> {
    let anchor = Granularity::Quarter.anchor(date);
    let record = sqlx::query_as::<_, QuarterlyResponse>(
        "SELECT * FROM quarterly_responses WHERE user_id = $1 AND quarter_start = $2",
    )
    .bind(user_id)
    .bind(anchor)
    .fetch_optional(db)
    .await?;

    Ok(record)
}

pub async fn save(
    db: &PgPool,
    user_id: Uuid,
    date: NaiveDate,
    body: &SaveQuarterlyRequest,
) -> AppResult<QuarterlyResponse> {
    scoring::validate_scores(&body.catq_scores, &CATQ)?;
    scoring::validate_scores(&body.raadsr_scores, &RAADSR)?;

    let anchor = Granularity::Quarter.anchor(date);
    let catq_total = scoring::score(&body.catq_scores);
    let raadsr_total = scoring::score(&body.raadsr_scores);

    let record = sqlx::query_as::<_, QuarterlyResponse>(
        r#"
        INSERT INTO quarterly_responses (
            id, user_id, quarter_start,
            catq_scores, raadsr_scores, catq_total, raadsr_total
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (user_id, quarter_start) DO UPDATE SET
            catq_scores = EXCLUDED.catq_scores,
            raadsr_scores = EXCLUDED.raadsr_scores,
            catq_total = EXCLUDED.catq_total,
            raadsr_total = EXCLUDED.raadsr_total,
            updated_at = NOW()
        WHERE quarterly_responses.user_id = EXCLUDED.user_id
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(anchor)
    .bind(Json(&body.catq_scores))
    .bind(Json(&body.raadsr_scores))
    .bind(catq_total)
    .bind(raadsr_total)
    .fetch_one(db)
    .await?;

    Ok(record)
}
