use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::sheet::UserSheet;

pub async fn list(db: &PgPool, user_id: Uuid) -> AppResult<Vec<UserSheet>> {
    let sheets = sqlx::query_as::<_, UserSheet>(
        "SELECT * FROM user_sheets WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;
    Ok(sheets)
}

pub async fn insert(
    db: &PgPool,
    user_id: Uuid,
    sheet_id: &str,
    sheet_name: &str,
) -> AppResult<UserSheet> {
    let sheet = sqlx::query_as::<_, UserSheet>(
        r#"
        INSERT INTO user_sheets (id, user_id, sheet_id, sheet_name)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(sheet_id)
    .bind(sheet_name)
    .fetch_one(db)
    .await?;
    Ok(sheet)
}

/// Scoped to (id, user_id); a row belonging to another user is untouched.
/// Returns whether a row was actually removed.
pub async fn delete(db: &PgPool, user_id: Uuid, user_sheet_id: Uuid) -> AppResult<bool> {
    let result = sqlx::query("DELETE FROM user_sheets WHERE id = $1 AND user_id = $2")
        .bind(user_sheet_id)
        .bind(user_id)
        .execute(db)
        .await?;
    Ok(result.rows_affected() > 0)
}
