use chrono::NaiveDate;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::monthly::{MonthlyResponse, SaveMonthlyRequest};
use crate::period::Granularity;
use crate::scoring::{self, EQ5D5L, FAST, YBOCS};

pub async fn fetch(
    db: &PgPool,
    user_id: Uuid,
    date: NaiveDate,
) -> AppResult<Option<MonthlyResponse>> {
    let anchor = Granularity::Month.anchor(date);
    let record = sqlx::query_as::<_, MonthlyResponse>(
        "SELECT * FROM monthly_responses WHERE user_id = $1 AND month_start = $2",
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
    body: &SaveMonthlyRequest,
) -> AppResult<MonthlyResponse> {
    scoring::validate_scores(&body.eq5d5l_scores, &EQ5D5L)?;
    scoring::validate_scores(&body.ybocs_scores, &YBOCS)?;
    scoring::validate_scores(&body.fast_scores, &FAST)?;

    let anchor = Granularity::Month.anchor(date);
    let (eq5d5l_total, ybocs_total, fast_total) = totals(body);

    let record = sqlx::query_as::<_, MonthlyResponse>(
        r#"
        INSERT INTO monthly_responses (
            id, user_id, month_start,
            eq5d5l_scores, ybocs_scores, fast_scores,
            eq5d5l_total, ybocs_total, fast_total
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (user_id, month_start) DO UPDATE SET
            eq5d5l_scores = EXCLUDED.eq5d5l_scores,
            ybocs_scores = EXCLUDED.ybocs_scores,
            fast_scores = EXCLUDED.fast_scores,
            eq5d5l_total = EXCLUDED.eq5d5l_total,
            ybocs_total = EXCLUDED.ybocs_total,
            fast_total = EXCLUDED.fast_total,
            updated_at = NOW()
        WHERE monthly_responses.user_id = EXCLUDED.user_id
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(anchor)
    .bind(Json(&body.eq5d5l_scores))
    .bind(Json(&body.ybocs_scores))
    .bind(Json(&body.fast_scores))
    .bind(eq5d5l_total)
    .bind(ybocs_total)
    .bind(fast_total)
    .fetch_one(db)
    .await?;

    Ok(record)
}

fn totals(body: &SaveMonthlyRequest) -> (i32, i32, i32) {
    (
        scoring::score(&body.eq5d5l_scores),
        scoring::score(&body.ybocs_scores),
        scoring::score(&body.fast_scores),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoreMap;

    #[test]
    fn totals_follow_the_monthly_scales() {
        let body = SaveMonthlyRequest {
            response_date: None,
            eq5d5l_scores: ScoreMap::from([("q1".into(), 5), ("q5".into(), 4)]),
            ybocs_scores: ScoreMap::new(),
            fast_scores: ScoreMap::from([("q6".into(), 6)]),
        };
        assert_eq!(totals(&body), (9, 0, 6));
    }
}
