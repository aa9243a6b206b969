use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::profile::{Profile, UpdateProfileRequest};

/// Called by the identity layer at registration. Idempotent.
pub async fn create(db: &PgPool, user_id: Uuid) -> AppResult<()> {
    sqlx::query("INSERT INTO profiles (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(())
}

pub async fn fetch(db: &PgPool, user_id: Uuid) -> AppResult<Option<Profile>> {
    let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
        .bind(user_id)
        .fetch_optional(db)
        .await?;
    Ok(profile)
}

pub async fn update(
    db: &PgPool,
    user_id: Uuid,
    body: &UpdateProfileRequest,
) -> AppResult<Profile> {
    let profile = sqlx::query_as::<_, Profile>(
        r#"
        UPDATE profiles SET
            first_name = $2,
            last_name = $3,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(&body.first_name)
    .bind(&body.last_name)
    .fetch_optional(db)
    .await?
    .ok_or(AppError::NotFound("Profile not found".into()))?;

    Ok(profile)
}
