//! Academic year model.

use serde::{Deserialize, Serialize};

use super::EntityId;
use crate::format::derive_year_name;

/// Position of a year within its program.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum YearNumber {
    First,
    Second,
    Third,
    Fourth,
}

impl YearNumber {
    pub fn as_str(&self) -> &'static str {
        match self {
            YearNumber::First => "First",
            YearNumber::Second => "Second",
            YearNumber::Third => "Third",
            YearNumber::Fourth => "Fourth",
        }
    }
}

/// An academic year ("2022-2026") within a program.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AcademicYear {
    pub id: EntityId,
    pub year_name: String,
    pub year_number: YearNumber,
    pub program_id: EntityId,
    /// For display purposes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_name: Option<String>,
}

/// Request body for creating or updating a year.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRequest {
    pub year_name: String,
    pub year_number: YearNumber,
    pub program_id: EntityId,
}

impl YearRequest {
    /// Build a request from a start year, deriving the "start-(start+4)" name.
    pub fn from_start_year(start_year: i32, year_number: YearNumber, program_id: EntityId) -> Self {
        Self {
            year_name: derive_year_name(start_year),
            year_number,
            program_id,
        }
    }
}
