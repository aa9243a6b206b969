use chrono::NaiveDate;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::weekly::{SaveWeeklyRequest, WeeklyResponse};
use crate::period::Granularity;
use crate::scoring::{self, ASRM, GAD7, PHQ9};

pub async fn fetch(
    db: &PgPool,
    user_id: Uuid,
    date: NaiveDate,
) -> AppResult<Option<WeeklyResponse>> {
    let anchor = Granularity::Week.anchor(date);
    let record = sqlx::query_as::<_, WeeklyResponse>(
        "SELECT * FROM weekly_responses WHERE user_id = $1 AND week_start = $2",
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
    body: &SaveWeeklyRequest,
) -> AppResult<WeeklyResponse> {
    scoring::validate_scores(&body.phq9_scores, &PHQ9)?;
    scoring::validate_scores(&body.gad7_scores, &GAD7)?;
    scoring::validate_scores(&body.asrm_scores, &ASRM)?;

    let anchor = Granularity::Week.anchor(date);
    let (phq9_total, gad7_total, asrm_total) = totals(body);

    let record = sqlx::query_as::<_, WeeklyResponse>(
        r#"
        INSERT INTO weekly_responses (
            id, user_id, week_start,
            phq9_scores, gad7_scores, asrm_scores,
            phq9_total, gad7_total, asrm_total
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        ON CONFLICT (user_id, week_start) DO UPDATE SET
            phq9_scores = EXCLUDED.phq9_scores,
            gad7_scores = EXCLUDED.gad7_scores,
            asrm_scores = EXCLUDED.asrm_scores,
            phq9_total = EXCLUDED.phq9_total,
            gad7_total = EXCLUDED.gad7_total,
            asrm_total = EXCLUDED.asrm_total,
            updated_at = NOW()
        WHERE weekly_responses.user_id = EXCLUDED.user_id
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(anchor)
    .bind(Json(&body.phq9_scores))
    .bind(Json(&body.gad7_scores))
    .bind(Json(&body.asrm_scores))
    .bind(phq9_total)
    .bind(gad7_total)
    .bind(asrm_total)
    .fetch_one(db)
    .await?;

    Ok(record)
}

fn totals(body: &SaveWeeklyRequest) -> (i32, i32, i32) {
    (
        scoring::score(&body.phq9_scores),
        scoring::score(&body.gad7_scores),
        scoring::score(&body.asrm_scores),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoreMap;

    #[test]
    fn totals_are_sums_of_their_maps() {
        let body = SaveWeeklyRequest {
            response_date: None,
            phq9_scores: ScoreMap::from([("q1".into(), 3), ("q2".into(), 2), ("q9".into(), 1)]),
            gad7_scores: ScoreMap::from([("q4".into(), 3)]),
            asrm_scores: ScoreMap::new(),
        };
        assert_eq!(totals(&body), (6, 3, 0));
    }
}
