use pretty_assertions::assert_eq;
use proptest::prelude::*;

use seikaku::{
    classify_sanmei, classify_temperament, run_assessment, total_strokes, BirthDate, Element,
    Gender, MbtiResponse, Polarity, TemperamentType,
};

fn responses(answers: &[&str]) -> Vec<MbtiResponse> {
    answers
        .iter()
        .enumerate()
        .map(|(i, a)| MbtiResponse {
            question_id: i as i32 + 1,
            answer: a.to_string(),
        })
        .collect()
}

fn birth_date(year: i32, month: u32, day: u32, hour: Option<u32>) -> BirthDate {
    BirthDate {
        year,
        month,
        day,
        hour,
        minute: None,
    }
}

#[test]
fn unanimous_answers_produce_full_scales() {
    let result = classify_temperament(&responses(&["i", "n", "t", "j", "i", "n", "t", "j"]));
    assert_eq!(result.temperament.code(), "INTJ");
    assert_eq!(result.ie_scale, 100);
    assert_eq!(result.ns_scale, 100);
    assert_eq!(result.ft_scale, 100);
    assert_eq!(result.jp_scale, 100);
}

#[test]
fn empty_questionnaire_defaults_every_axis() {
    let result = classify_temperament(&[]);
    assert_eq!(result.temperament, TemperamentType::Intj);
    assert_eq!(result.ie_scale, 50);
    assert_eq!(result.ns_scale, 50);
    assert_eq!(result.ft_scale, 50);
    assert_eq!(result.jp_scale, 50);
}

#[test]
fn millennium_day_classifies_as_yin_earth() {
    let result = classify_sanmei(&birth_date(2000, 1, 1, None));
    assert_eq!(result.element, Element::Earth);
    assert_eq!(result.polarity, Polarity::Yin);
    assert_eq!(result.full_type, "土命・陰");
}

#[test]
fn full_pipeline_with_every_optional_input() {
    let result = run_assessment(
        &responses(&["i", "n", "t", "j"]),
        &birth_date(1990, 6, 15, Some(9)),
        Gender::Female,
        Some("山田"),
        Some("太郎"),
    )
    .unwrap();

    let seimei = result.sei_mei_result.as_ref().unwrap();
    assert_eq!(seimei.heaven_number, 8);
    assert_eq!(seimei.earth_number, 14);
    assert_eq!(seimei.name_total, 22);
    assert_eq!(seimei.human_number, 9);
    assert_eq!(seimei.characteristics.len(), 3);

    let pillars = result.four_pillars_result.as_ref().unwrap();
    let stems = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
    let branches = [
        "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
    ];
    assert!(stems.contains(&pillars.heavenly_stem.symbol()));
    assert!(branches.contains(&pillars.earthly_branch.symbol()));

    // The same input always produces the same chart
    let again = run_assessment(
        &responses(&["i", "n", "t", "j"]),
        &birth_date(1990, 6, 15, Some(9)),
        Gender::Female,
        Some("山田"),
        Some("太郎"),
    )
    .unwrap();
    assert_eq!(result, again);
}

#[test]
fn report_fields_are_populated() {
    let result = run_assessment(
        &responses(&["e", "s", "f", "p"]),
        &birth_date(1985, 3, 21, None),
        Gender::Male,
        None,
        None,
    )
    .unwrap();

    assert!(!result.type_nickname.is_empty());
    assert!(!result.overview.is_empty());
    assert!(!result.strengths.is_empty());
    assert!(!result.challenges.is_empty());
    assert!(!result.relationships.is_empty());
    assert!(!result.career.is_empty());
    assert!(!result.balance.energy_management.is_empty());
    assert!(!result.balance.perfectionism.is_empty());
    assert!(!result.relationship_tips.boundaries.is_empty());
    assert!(!result.relationship_tips.expression.is_empty());
    assert!(!result.relationship_tips.compatibility.is_empty());
    assert!(!result.future_outlook.is_empty());
}

#[test]
fn serialized_result_keeps_original_field_names() {
    let result = run_assessment(
        &responses(&["i", "n", "t", "j"]),
        &birth_date(2000, 1, 1, Some(0)),
        Gender::Other,
        Some("山田"),
        Some("太郎"),
    )
    .unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["mbtiResult"]["type"], "INTJ");
    assert_eq!(json["mbtiResult"]["ieScale"], 100);
    assert_eq!(json["sanmeiResult"]["fullType"], "土命・陰");
    assert_eq!(json["typeNickname"], "「建築家・戦略家」");
    assert_eq!(json["seiMeiResult"]["humanNumber"], 9);
    assert_eq!(json["fourPillarsResult"]["heavenlyStem"], "戊");
    assert_eq!(json["fourPillarsResult"]["earthlyBranch"], "申");
    assert_eq!(json["fourPillarsResult"]["dayMaster"], "土");
    assert!(json["balance"]["energyManagement"].is_string());
    assert!(json["relationshipTips"]["boundaries"].is_string());
}

fn answer_letter() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["i", "e", "n", "s", "t", "f", "j", "p"])
}

proptest! {
    #[test]
    fn scales_stay_within_bounds(answers in prop::collection::vec(answer_letter(), 0..60)) {
        let result = classify_temperament(&responses(&answers));
        prop_assert!(result.ie_scale <= 100);
        prop_assert!(result.ns_scale <= 100);
        prop_assert!(result.ft_scale <= 100);
        prop_assert!(result.jp_scale <= 100);
    }

    #[test]
    fn sanmei_depends_only_on_component_sum(
        year in 1900i32..2100,
        month in 1u32..=12,
        day in 1u32..=31,
    ) {
        let a = classify_sanmei(&birth_date(year, month, day, None));
        // Shift a month into days: same sum, same classification
        if month > 1 && day > 1 {
            let b = classify_sanmei(&birth_date(year, month - 1, day + 1, None));
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn stroke_totals_are_additive(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        let joined = format!("{a}{b}");
        prop_assert_eq!(total_strokes(&a) + total_strokes(&b), total_strokes(&joined));
    }
}
