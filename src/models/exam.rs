//! Exam model.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::EntityId;

/// Kind of examination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ExamType {
    #[serde(rename = "MIDTERM")]
    Midterm,
    #[serde(rename = "SEMESTER")]
    Semester,
}

impl ExamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamType::Midterm => "MIDTERM",
            ExamType::Semester => "SEMESTER",
        }
    }
}

/// Exam paper variant label, used for anti-cheating seat alternation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SetType {
    #[serde(rename = "NO_SET")]
    NoSet,
    #[serde(rename = "SET1")]
    Set1,
    #[serde(rename = "SET2")]
    Set2,
}

impl SetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetType::NoSet => "NO_SET",
            SetType::Set1 => "SET1",
            SetType::Set2 => "SET2",
        }
    }

    /// Human label with the underscore dropped, e.g. `"NO SET"`.
    pub fn display_label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

/// A scheduled exam spanning one or more branches and sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: EntityId,
    pub exam_name: String,
    pub exam_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub subject_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_name: Option<String>,
    pub exam_type: ExamType,
    pub set_type: SetType,
    pub program_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
    pub year_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year_name: Option<String>,
    #[serde(default)]
    pub branch_ids: Vec<EntityId>,
    #[serde(default)]
    pub section_ids: Vec<EntityId>,
    /// For display purposes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch_names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_names: Option<Vec<String>>,
}

/// Request body for scheduling or updating an exam.
///
/// Dates serialize as ISO `YYYY-MM-DD`, times as `HH:MM:SS`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamRequest {
    pub exam_name: String,
    pub exam_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub subject_id: EntityId,
    pub exam_type: ExamType,
    pub set_type: SetType,
    pub program_id: EntityId,
    pub year_id: EntityId,
    pub branch_ids: Vec<EntityId>,
    pub section_ids: Vec<EntityId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_type_display_label() {
        assert_eq!(SetType::NoSet.display_label(), "NO SET");
        assert_eq!(SetType::Set1.display_label(), "SET1");
    }

    #[test]
    fn test_request_wire_shape() {
        let req = ExamRequest {
            exam_name: "CS301 - Operating Systems - MIDTERM".to_string(),
            exam_date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
            subject_id: 1,
            exam_type: ExamType::Midterm,
            set_type: SetType::Set1,
            program_id: 2,
            year_id: 3,
            branch_ids: vec![4],
            section_ids: vec![5, 6],
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["examDate"], "2025-03-01");
        assert_eq!(value["startTime"], "09:00:00");
        assert_eq!(value["endTime"], "12:00:00");
        assert_eq!(value["setType"], "SET1");
        assert_eq!(value["branchIds"], serde_json::json!([4]));
    }
}
