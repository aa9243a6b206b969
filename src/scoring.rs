//! Questionnaire instruments and scoring.
//!
//! Answers arrive as a map of question id ("q1".."qN") to integer. A total
//! is always the plain sum of whatever answers are present — absent ids
//! contribute 0 and values are never clamped. Totals are recomputed from the
//! answer map on every save; client-supplied totals are ignored.

use std::collections::HashMap;

use crate::error::{AppError, AppResult};

pub type ScoreMap = HashMap<String, i32>;

/// One fixed questionnaire: `items` questions answered on a `0..=max` scale.
#[derive(Debug, Clone, Copy)]
pub struct Instrument {
    pub name: &'static str,
    pub items: u32,
    pub max: i32,
}

// Weekly
pub const PHQ9: Instrument = Instrument { name: "PHQ-9", items: 9, max: 3 };
pub const GAD7: Instrument = Instrument { name: "GAD-7", items: 7, max: 3 };
pub const ASRM: Instrument = Instrument { name: "ASRM", items: 10, max: 3 };

// Monthly
pub const EQ5D5L: Instrument = Instrument { name: "EQ-5D-5L", items: 5, max: 5 };
pub const YBOCS: Instrument = Instrument { name: "Y-BOCS", items: 10, max: 5 };
pub const FAST: Instrument = Instrument { name: "FAST", items: 6, max: 6 };

// Quarterly
pub const CATQ: Instrument = Instrument { name: "CAT-Q", items: 10, max: 3 };
pub const RAADSR: Instrument = Instrument { name: "RAADS-R", items: 10, max: 3 };

/// Sum of all present answers.
pub fn score(answers: &ScoreMap) -> i32 {
    answers.values().sum()
}

/// Rejects answer maps that do not fit the instrument: keys must be
/// `q1..qN` for its item count, values must be on its `0..=max` scale.
pub fn validate_scores(answers: &ScoreMap, instrument: &Instrument) -> AppResult<()> {
    for (key, value) in answers {
        let number = key
            .strip_prefix('q')
            .and_then(|n| n.parse::<u32>().ok())
            .filter(|n| (1..=instrument.items).contains(n));
        if number.is_none() {
            return Err(AppError::Validation(format!(
                "{}: unknown question id '{}'",
                instrument.name, key
            )));
        }
        if !(0..=instrument.max).contains(value) {
            return Err(AppError::Validation(format!(
                "{}: answer {} for {} must be between 0 and {}",
                instrument.name, value, key, instrument.max
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, i32)]) -> ScoreMap {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn score_of_empty_map_is_zero() {
        assert_eq!(score(&ScoreMap::new()), 0);
    }

    #[test]
    fn score_sums_present_answers() {
        assert_eq!(score(&map(&[("q1", 3), ("q2", 4)])), 7);
    }

    #[test]
    fn score_does_not_clamp() {
        assert_eq!(score(&map(&[("q1", -1)])), -1);
    }

    #[test]
    fn partial_answers_validate() {
        // Unanswered questions are fine; they just contribute nothing
        assert!(validate_scores(&map(&[("q1", 2), ("q9", 3)]), &PHQ9).is_ok());
        assert!(validate_scores(&ScoreMap::new(), &GAD7).is_ok());
    }

    #[test]
    fn question_id_outside_instrument_rejected() {
        // GAD-7 has seven items
        assert!(validate_scores(&map(&[("q8", 1)]), &GAD7).is_err());
        assert!(validate_scores(&map(&[("q0", 1)]), &GAD7).is_err());
        assert!(validate_scores(&map(&[("x1", 1)]), &GAD7).is_err());
    }

    #[test]
    fn answer_outside_scale_rejected() {
        assert!(validate_scores(&map(&[("q1", 4)]), &PHQ9).is_err());
        assert!(validate_scores(&map(&[("q1", -1)]), &PHQ9).is_err());
        // FAST items go up to 6
        assert!(validate_scores(&map(&[("q1", 6)]), &FAST).is_ok());
    }
}
