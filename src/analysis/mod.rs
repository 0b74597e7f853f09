//! The pure assessment pipeline
//!
//! Every function here is deterministic and free of I/O: one submission in,
//! one [`AnalysisResult`] out. The temperament and five-element classifiers
//! always run; name divination and the four-pillars chart run only when their
//! optional inputs are present.

pub mod four_pillars;
pub mod sanmei;
pub mod seimei;
pub mod strokes;
pub mod temperament;

use crate::core::{AnalysisResult, BirthDate, Gender, MbtiResponse, Result};
use crate::report;

pub use four_pillars::calculate_four_pillars;
pub use sanmei::classify_sanmei;
pub use seimei::calculate_seimei;
pub use strokes::{strokes_of, total_strokes, DEFAULT_STROKES};
pub use temperament::classify_temperament;

/// Run the full assessment pipeline over validated input.
///
/// Name divination requires both name parts; supplying one without the other
/// skips it. The four-pillars chart requires a birth hour.
pub fn run_assessment(
    responses: &[MbtiResponse],
    birth_date: &BirthDate,
    gender: Gender,
    last_name_kanji: Option<&str>,
    first_name_kanji: Option<&str>,
) -> Result<AnalysisResult> {
    let mbti = classify_temperament(responses);
    let sanmei = classify_sanmei(birth_date);

    let seimei = match (last_name_kanji, first_name_kanji) {
        (Some(last), Some(first)) => Some(calculate_seimei(last, first)?),
        _ => None,
    };

    let four_pillars = birth_date.hour.map(|hour| {
        calculate_four_pillars(
            birth_date.year,
            birth_date.month,
            birth_date.day,
            Some(hour),
        )
    });

    Ok(report::assemble(mbti, sanmei, gender, seimei, four_pillars))
}
