use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::auth::middleware::AuthUser;
use crate::error::AppResult;
use crate::handlers::PeriodQuery;
use crate::models::daily::{DailyResponse, SaveDailyRequest};
use crate::period::{Granularity, PeriodEnvelope};
use crate::repo;
use crate::series::{fill_series, MoodRow, SeriesPoint};
use crate::AppState;

pub async fn get_daily(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<PeriodQuery>,
) -> AppResult<Json<PeriodEnvelope<DailyResponse>>> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let record = repo::daily::fetch(&state.db, auth_user.id, date).await?;

    Ok(Json(Granularity::Day.envelope(date, record)))
}

pub async fn save_daily(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<SaveDailyRequest>,
) -> AppResult<Json<DailyResponse>> {
    let date = body.response_date.unwrap_or_else(|| Utc::now().date_naive());
    let record = repo::daily::save(&state.db, auth_user.id, date, &body).await?;

    Ok(Json(record))
}

#[derive(Debug, Deserialize)]
pub struct SeriesQuery {
    pub end: Option<NaiveDate>,
    pub days: Option<i64>,
}

pub async fn get_series(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<SeriesQuery>,
) -> AppResult<Json<Vec<SeriesPoint>>> {
    let end = query.end.unwrap_or_else(|| Utc::now().date_naive());
    let days = query.days.unwrap_or(30).clamp(1, 365);
    let start = end - chrono::Duration::days(days - 1);

    let rows = sqlx::query_as::<_, MoodRow>(
        r#"
        SELECT response_date, mood, anxiety FROM daily_responses
        WHERE user_id = $1 AND response_date BETWEEN $2 AND $3
        ORDER BY response_date ASC
        "#,
    )
    .bind(auth_user.id)
    .bind(start)
    .bind(end)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(fill_series(&rows, end, days)))
}
