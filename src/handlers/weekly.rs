use axum::{
    extract::{Query, State},
    Extension, Json,
};
use chrono::Utc;

use crate::auth::middleware::AuthUser;
use crate::error::AppResult;
use crate::handlers::PeriodQuery;
use crate::models::weekly::{SaveWeeklyRequest, WeeklyResponse};
use crate::period::{Granularity, PeriodEnvelope};
use crate::repo;
use crate::AppState;

pub async fn get_weekly(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Query(query): Query<PeriodQuery>,
) -> AppResult<Json<PeriodEnvelope<WeeklyResponse>>> {
    let date = query.date.unwrap_or_else(|| Utc::now().date_naive());
    let record = repo::weekly::fetch(&state.db, auth_user.id, date).await?;

    Ok(Json(Granularity::Week.envelope(date, record)))
}

pub async fn save_weekly(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<SaveWeeklyRequest>,
) -> AppResult<Json<WeeklyResponse>> {
    let date = body.response_date.unwrap_or_else(|| Utc::now().date_naive());
    let record = repo::weekly::save(&state.db, auth_user.id, date, &body).await?;

    Ok(Json(record))
}
