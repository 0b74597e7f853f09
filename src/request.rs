//! The submission contract shared by the CLI and the HTTP API
//!
//! Field shapes and bounds mirror the public form: the engine itself assumes
//! validated input, so everything here runs before the pipeline does.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::run_assessment;
use crate::core::{AnalysisResult, BirthDate, Gender, MbtiResponse, Result};

/// A raw assessment submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    pub full_name: String,
    pub birth_year: i32,
    pub birth_month: u32,
    pub birth_day: u32,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_focus: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strengths: Option<String>,
    pub mbti_responses: Vec<MbtiResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name_kanji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name_kanji: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_hour: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_minute: Option<u32>,
}

/// Treat an absent or empty optional field the same way
fn cleaned(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl AssessmentRequest {
    /// Field-level validation; an empty list means the request is acceptable
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let current_year = Utc::now().year();

        if self.full_name.trim().is_empty() {
            errors.push("fullName: 名前を入力してください".to_string());
        }
        if self.birth_year < 1900 || self.birth_year > current_year {
            errors.push(format!(
                "birthYear: must be between 1900 and {current_year}"
            ));
        }
        if !(1..=12).contains(&self.birth_month) {
            errors.push("birthMonth: must be between 1 and 12".to_string());
        }
        if !(1..=31).contains(&self.birth_day) {
            errors.push("birthDay: must be between 1 and 31".to_string());
        }
        if let Some(hour) = self.birth_hour {
            if hour > 23 {
                errors.push("birthHour: must be between 0 and 23".to_string());
            }
        }
        if let Some(minute) = self.birth_minute {
            if minute > 59 {
                errors.push("birthMinute: must be between 0 and 59".to_string());
            }
        }

        errors
    }

    pub fn birth_date(&self) -> BirthDate {
        BirthDate {
            year: self.birth_year,
            month: self.birth_month,
            day: self.birth_day,
            hour: self.birth_hour,
            minute: self.birth_minute,
        }
    }

    /// Run the computation pipeline over this (validated) submission
    pub fn analyze(&self) -> Result<AnalysisResult> {
        run_assessment(
            &self.mbti_responses,
            &self.birth_date(),
            self.gender,
            cleaned(&self.last_name_kanji),
            cleaned(&self.first_name_kanji),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AssessmentRequest {
        AssessmentRequest {
            full_name: "山田 太郎".to_string(),
            birth_year: 1990,
            birth_month: 6,
            birth_day: 15,
            gender: Gender::Male,
            life_focus: None,
            challenges: None,
            strengths: None,
            mbti_responses: Vec::new(),
            first_name_kanji: None,
            last_name_kanji: None,
            birth_hour: None,
            birth_minute: None,
        }
    }

    #[test]
    fn test_valid_request_has_no_errors() {
        assert!(request().validate().is_empty());
    }

    #[test]
    fn test_out_of_range_fields_reported() {
        let mut bad = request();
        bad.full_name = "  ".to_string();
        bad.birth_year = 1850;
        bad.birth_month = 13;
        bad.birth_day = 0;
        bad.birth_hour = Some(24);
        bad.birth_minute = Some(60);
        assert_eq!(bad.validate().len(), 6);
    }

    #[test]
    fn test_empty_name_fields_skip_divination() {
        let mut req = request();
        req.first_name_kanji = Some(String::new());
        req.last_name_kanji = Some("山田".to_string());
        let result = req.analyze().unwrap();
        assert!(result.sei_mei_result.is_none());
    }

    #[test]
    fn test_deserializes_camel_case() {
        let req: AssessmentRequest = serde_json::from_str(
            r#"{
                "fullName": "山田 太郎",
                "birthYear": 2000,
                "birthMonth": 1,
                "birthDay": 1,
                "gender": "other",
                "mbtiResponses": [{ "questionId": 1, "answer": "i" }]
            }"#,
        )
        .unwrap();
        assert_eq!(req.mbti_responses.len(), 1);
        assert_eq!(req.gender, Gender::Other);
    }
}
