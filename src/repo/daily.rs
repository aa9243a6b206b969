use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::daily::{DailyResponse, SaveDailyRequest};
use crate::period::Granularity;

pub async fn fetch(
    db: &PgPool,
    user_id: Uuid,
    date: NaiveDate,
) -> AppResult<Option<DailyResponse>> {
    let anchor = Granularity::Day.anchor(date);
    let record = sqlx::query_as::<_, DailyResponse>(
        "SELECT * FROM daily_responses WHERE user_id = $1 AND response_date = $2",
    )
    .bind(user_id)
    .bind(anchor)
    .fetch_optional(db)
    .await?;

    Ok(record)
}

/// Full-record replace: one upsert keyed on (user_id, response_date). The
/// update arm re-asserts the ownership predicate even though the conflict
/// target already scopes by user.
pub async fn save(
    db: &PgPool,
    user_id: Uuid,
    date: NaiveDate,
    body: &SaveDailyRequest,
) -> AppResult<DailyResponse> {
    validate(body)?;
    let anchor = Granularity::Day.anchor(date);

    let record = sqlx::query_as::<_, DailyResponse>(
        r#"
        INSERT INTO daily_responses (
            id, user_id, response_date,
            sleep_quality, sleep_hours, mood, anxiety, stress_score,
            resting_hr, hrv, depressed_mood, euphoria, irritability,
            obsessions, sensory_sensitivity, social_masking, suicide_risk,
            spravatto_sessions, medications_taken, exercises_performed, notes
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13,
                $14, $15, $16, $17, $18, $19, $20, $21)
        ON CONFLICT (user_id, response_date) DO UPDATE SET
            sleep_quality = EXCLUDED.sleep_quality,
            sleep_hours = EXCLUDED.sleep_hours,
            mood = EXCLUDED.mood,
            anxiety = EXCLUDED.anxiety,
            stress_score = EXCLUDED.stress_score,
            resting_hr = EXCLUDED.resting_hr,
            hrv = EXCLUDED.hrv,
            depressed_mood = EXCLUDED.depressed_mood,
            euphoria = EXCLUDED.euphoria,
            irritability = EXCLUDED.irritability,
            obsessions = EXCLUDED.obsessions,
            sensory_sensitivity = EXCLUDED.sensory_sensitivity,
            social_masking = EXCLUDED.social_masking,
            suicide_risk = EXCLUDED.suicide_risk,
            spravatto_sessions = EXCLUDED.spravatto_sessions,
            medications_taken = EXCLUDED.medications_taken,
            exercises_performed = EXCLUDED.exercises_performed,
            notes = EXCLUDED.notes,
            updated_at = NOW()
        WHERE daily_responses.user_id = EXCLUDED.user_id
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(anchor)
    .bind(body.sleep_quality)
    .bind(body.sleep_hours)
    .bind(body.mood)
    .bind(body.anxiety)
    .bind(body.stress_score)
    .bind(body.resting_hr)
    .bind(body.hrv)
    .bind(body.depressed_mood)
    .bind(body.euphoria)
    .bind(body.irritability)
    .bind(body.obsessions)
    .bind(body.sensory_sensitivity)
    .bind(body.social_masking)
    .bind(body.suicide_risk)
    .bind(body.spravatto_sessions)
    .bind(body.medications_taken)
    .bind(body.exercises_performed)
    .bind(&body.notes)
    .fetch_one(db)
    .await?;

    Ok(record)
}

fn validate(body: &SaveDailyRequest) -> AppResult<()> {
    let ten_point_scales = [
        ("Mood", body.mood),
        ("Anxiety", body.anxiety),
        ("Stress score", body.stress_score),
        ("Depressed mood", body.depressed_mood),
        ("Euphoria", body.euphoria),
        ("Irritability", body.irritability),
        ("Obsessions", body.obsessions),
        ("Sensory sensitivity", body.sensory_sensitivity),
        ("Social masking", body.social_masking),
        ("Suicide risk", body.suicide_risk),
    ];
    for (name, value) in ten_point_scales {
        check_scale(name, value, 1, 10)?;
    }
    check_scale("Sleep quality", body.sleep_quality, 1, 5)?;

    let counts = [
        ("Resting heart rate", body.resting_hr),
        ("HRV", body.hrv),
        ("Spravatto sessions", body.spravatto_sessions),
    ];
    for (name, value) in counts {
        if let Some(v) = value {
            if v < 0 {
                return Err(AppError::Validation(format!("{name} must not be negative")));
            }
        }
    }

    if let Some(hours) = body.sleep_hours {
        if !hours.is_finite() {
            return Err(AppError::Validation(
                "Sleep hours must be a finite number".into(),
            ));
        }
        if !(0.0..=24.0).contains(&hours) {
            return Err(AppError::Validation(
                "Sleep hours must be between 0 and 24".into(),
            ));
        }
    }

    Ok(())
}

fn check_scale(name: &str, value: Option<i32>, min: i32, max: i32) -> AppResult<()> {
    if let Some(v) = value {
        if !(min..=max).contains(&v) {
            return Err(AppError::Validation(format!(
                "{name} must be between {min} and {max}"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_request() -> SaveDailyRequest {
        SaveDailyRequest {
            response_date: None,
            sleep_quality: None,
            sleep_hours: None,
            mood: None,
            anxiety: None,
            stress_score: None,
            resting_hr: None,
            hrv: None,
            depressed_mood: None,
            euphoria: None,
            irritability: None,
            obsessions: None,
            sensory_sensitivity: None,
            social_masking: None,
            suicide_risk: None,
            spravatto_sessions: None,
            medications_taken: false,
            exercises_performed: false,
            notes: None,
        }
    }

    #[test]
    fn sparse_payload_is_valid() {
        assert!(validate(&empty_request()).is_ok());
        let body = SaveDailyRequest {
            mood: Some(7),
            ..empty_request()
        };
        assert!(validate(&body).is_ok());
    }

    #[test]
    fn scale_bounds_enforced() {
        let body = SaveDailyRequest {
            mood: Some(11),
            ..empty_request()
        };
        assert!(validate(&body).is_err());

        let body = SaveDailyRequest {
            sleep_quality: Some(6),
            ..empty_request()
        };
        assert!(validate(&body).is_err());

        let body = SaveDailyRequest {
            resting_hr: Some(-3),
            ..empty_request()
        };
        assert!(validate(&body).is_err());
    }

    #[test]
    fn non_finite_sleep_hours_rejected() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let body = SaveDailyRequest {
                sleep_hours: Some(bad),
                ..empty_request()
            };
            assert!(validate(&body).is_err());
        }
        let body = SaveDailyRequest {
            sleep_hours: Some(7.5),
            ..empty_request()
        };
        assert!(validate(&body).is_ok());
    }
}
