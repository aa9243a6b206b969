use axum::{extract::State, Extension, Json};
use validator::Validate;

use crate::auth::middleware::AuthUser;
use crate::error::{AppError, AppResult};
use crate::models::profile::{Profile, UpdateProfileRequest};
use crate::repo;
use crate::AppState;

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> AppResult<Json<Profile>> {
    let profile = repo::profile::fetch(&state.db, auth_user.id)
        .await?
        .ok_or(AppError::NotFound("Profile not found".into()))?;

    Ok(Json(profile))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
    Json(body): Json<UpdateProfileRequest>,
) -> AppResult<Json<Profile>> {
    body.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let profile = repo::profile::update(&state.db, auth_user.id, &body).await?;
    Ok(Json(profile))
}
