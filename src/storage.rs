//! Assessment persistence
//!
//! The computed result is stored verbatim as an opaque JSON value next to the
//! raw submission scalars; the store never interprets it. The in-memory
//! implementation hands out auto-incrementing ids, which trivially satisfies
//! the at-most-one-writer-per-id requirement.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::core::MbtiResponse;

/// A submission ready to be persisted, with the derived labels and result
/// blob already attached
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssessment {
    pub full_name: String,
    pub birth_year: i32,
    pub birth_month: u32,
    pub birth_day: u32,
    pub gender: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life_focus: Option<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
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
    pub mbti_type: String,
    pub sanmei_type: String,
    pub type_nickname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sei_mei_result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub four_pillars_result: Option<String>,
    pub result_json: serde_json::Value,
}

/// A stored assessment record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub id: u64,
    #[serde(flatten)]
    pub assessment: NewAssessment,
    pub created_at: DateTime<Utc>,
}

/// Create/fetch interface consumed by the HTTP layer
pub trait AssessmentStore: Send + Sync {
    fn create_assessment(&self, assessment: NewAssessment) -> AssessmentRecord;
    fn get_assessment(&self, id: u64) -> Option<AssessmentRecord>;
}

#[derive(Default)]
struct MemStorageInner {
    assessments: HashMap<u64, AssessmentRecord>,
    next_id: u64,
}

/// In-memory assessment store
pub struct MemStorage {
    inner: RwLock<MemStorageInner>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(MemStorageInner {
                assessments: HashMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentStore for MemStorage {
    fn create_assessment(&self, assessment: NewAssessment) -> AssessmentRecord {
        let mut inner = self.inner.write();
        let id = inner.next_id;
        inner.next_id += 1;

        let record = AssessmentRecord {
            id,
            assessment,
            created_at: Utc::now(),
        };
        inner.assessments.insert(id, record.clone());
        record
    }

    fn get_assessment(&self, id: u64) -> Option<AssessmentRecord> {
        self.inner.read().assessments.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(full_name: &str) -> NewAssessment {
        NewAssessment {
            full_name: full_name.to_string(),
            birth_year: 1990,
            birth_month: 6,
            birth_day: 15,
            gender: "female".to_string(),
            life_focus: None,
            challenges: Vec::new(),
            strengths: None,
            mbti_responses: Vec::new(),
            first_name_kanji: None,
            last_name_kanji: None,
            birth_hour: None,
            birth_minute: None,
            mbti_type: "INTJ".to_string(),
            sanmei_type: "土命・陰".to_string(),
            type_nickname: "「建築家・戦略家」".to_string(),
            sei_mei_result: None,
            four_pillars_result: None,
            result_json: serde_json::json!({ "ok": true }),
        }
    }

    #[test]
    fn test_ids_increment_from_one() {
        let store = MemStorage::new();
        let first = store.create_assessment(sample("一人目"));
        let second = store.create_assessment(sample("二人目"));
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[test]
    fn test_round_trip() {
        let store = MemStorage::new();
        let created = store.create_assessment(sample("山田太郎"));
        let fetched = store.get_assessment(created.id).unwrap();
        assert_eq!(fetched.assessment.full_name, "山田太郎");
        assert_eq!(fetched.assessment.result_json, created.assessment.result_json);
    }

    #[test]
    fn test_missing_id_is_none() {
        let store = MemStorage::new();
        assert!(store.get_assessment(42).is_none());
    }
}
