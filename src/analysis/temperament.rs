//! Temperament (MBTI-style) classification
//!
//! Tallies single-letter questionnaire answers into four axis scales and a
//! 4-letter type. Letters outside the eight recognized answers are ignored
//! rather than rejected.

use crate::core::{MbtiResponse, MbtiResult, TemperamentType};

#[derive(Debug, Default)]
struct AxisCounts {
    i: u32,
    e: u32,
    n: u32,
    s: u32,
    f: u32,
    t: u32,
    j: u32,
    p: u32,
}

fn tally(responses: &[MbtiResponse]) -> AxisCounts {
    responses.iter().fold(AxisCounts::default(), |mut acc, r| {
        match r.answer.to_lowercase().as_str() {
            "i" => acc.i += 1,
            "e" => acc.e += 1,
            "n" => acc.n += 1,
            "s" => acc.s += 1,
            "f" => acc.f += 1,
            "t" => acc.t += 1,
            "j" => acc.j += 1,
            "p" => acc.p += 1,
            _ => {}
        }
        acc
    })
}

/// Percentage of `numerator` within the axis, or the neutral 50 when the
/// axis received no answers
fn scale(numerator: u32, other: u32) -> u8 {
    let total = numerator + other;
    if total == 0 {
        return 50;
    }
    ((numerator as f64 / total as f64) * 100.0).round() as u8
}

/// Classify a sequence of questionnaire answers.
///
/// Ties (a scale of exactly 50) resolve toward I, N, T, and J. The F/T scale
/// counts T answers even though the axis is named F-first; higher ftScale
/// means a stronger T preference.
pub fn classify_temperament(responses: &[MbtiResponse]) -> MbtiResult {
    let counts = tally(responses);

    let ie_scale = scale(counts.i, counts.e);
    let ns_scale = scale(counts.n, counts.s);
    let ft_scale = scale(counts.t, counts.f);
    let jp_scale = scale(counts.j, counts.p);

    let temperament = TemperamentType::from_axes(
        ie_scale >= 50,
        ns_scale >= 50,
        ft_scale >= 50,
        jp_scale >= 50,
    );

    MbtiResult {
        temperament,
        ie_scale,
        ns_scale,
        ft_scale,
        jp_scale,
    }
}
