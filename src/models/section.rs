//! Section model.

use serde::{Deserialize, Serialize};

use super::EntityId;
use crate::format::format_section_display_name;

/// A section of students within a branch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: EntityId,
    pub section_name: String,
    /// Server-computed "{branch}-{section}" label, when provided.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formatted_name: Option<String>,
    pub capacity: i32,
    pub branch_id: EntityId,
}

impl Section {
    /// Display label: the server-provided formatted name, or one derived from
    /// the branch name, falling back to the bare section name.
    pub fn display_name(&self, branch_name: Option<&str>) -> String {
        if let Some(formatted) = &self.formatted_name {
            return formatted.clone();
        }
        match branch_name {
            Some(branch) => format_section_display_name(branch, &self.section_name),
            None => self.section_name.clone(),
        }
    }
}

/// Request body for creating or updating a section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRequest {
    pub section_name: String,
    pub capacity: i32,
    pub branch_id: EntityId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_server_value() {
        let section = Section {
            id: 1,
            section_name: "A".to_string(),
            formatted_name: Some("CSE-A".to_string()),
            capacity: 60,
            branch_id: 2,
        };
        assert_eq!(section.display_name(Some("ECE")), "CSE-A");
    }

    #[test]
    fn test_display_name_derived() {
        let section = Section {
            id: 1,
            section_name: "B".to_string(),
            formatted_name: None,
            capacity: 60,
            branch_id: 2,
        };
        assert_eq!(section.display_name(Some("CSE")), "CSE-B");
        assert_eq!(section.display_name(None), "B");
    }
}
