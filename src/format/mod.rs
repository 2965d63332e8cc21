//! Derived display names.
//!
//! Pure, deterministic string functions shared by the facility and exam
//! screens. Every formatter is idempotent: applying it twice yields the same
//! result as applying it once.

use crate::models::{ExamType, Subject};

/// Suffix a block name with `-Block` unless it already mentions a block.
///
/// `"W"` becomes `"W-Block"`; `"W-Block"` and `"West block"` are unchanged.
pub fn format_block_name(raw: &str) -> String {
    if raw.to_lowercase().contains("block") {
        raw.to_string()
    } else {
        format!("{raw}-Block")
    }
}

/// Strip a trailing `-Block` (case-insensitive) to recover the block prefix.
pub fn block_prefix(block_name: &str) -> &str {
    let len = block_name.len();
    if len >= 6
        && block_name.is_char_boundary(len - 6)
        && block_name[len - 6..].eq_ignore_ascii_case("-block")
    {
        &block_name[..len - 6]
    } else {
        block_name
    }
}

/// Prefix a room number with its block code unless it is already prefixed.
///
/// `("W-Block", "201")` becomes `"W-201"`; `("W-Block", "W-201")` stays
/// `"W-201"`.
pub fn format_room_number(block_name: &str, raw: &str) -> String {
    let prefix = block_prefix(block_name);
    if raw.to_lowercase().starts_with(&prefix.to_lowercase()) {
        raw.to_string()
    } else {
        format!("{prefix}-{raw}")
    }
}

/// Compose the section display name from its branch, e.g. `"CSE-A"`.
pub fn format_section_display_name(branch_name: &str, section_name: &str) -> String {
    format!("{branch_name}-{section_name}")
}

/// Ordinal floor label: `1` -> `"1st"`, `22` -> `"22nd"`, `13` -> `"13th"`.
///
/// The 11-13 exception applies to the last two digits, so `111` -> `"111th"`
/// but `101` -> `"101st"`.
pub fn format_floor_label(n: i32) -> String {
    let suffix = match n.abs() % 100 {
        11..=13 => "th",
        m => match m % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{n}{suffix}")
}

/// Academic year name from its start year, e.g. `2022` -> `"2022-2026"`.
pub fn derive_year_name(start_year: i32) -> String {
    format!("{}-{}", start_year, start_year + 4)
}

/// Generated exam name used when the form leaves the name blank.
pub fn default_exam_name(subject: &Subject, exam_type: ExamType) -> String {
    format!("{} - {} - {}", subject.code, subject.name, exam_type.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subject;

    #[test]
    fn test_block_name_suffix() {
        assert_eq!(format_block_name("W"), "W-Block");
        assert_eq!(format_block_name("W-Block"), "W-Block");
        assert_eq!(format_block_name("East block"), "East block");
    }

    #[test]
    fn test_block_name_idempotent() {
        for raw in ["W", "W-Block", "block", "", "North Wing"] {
            let once = format_block_name(raw);
            assert_eq!(format_block_name(&once), once);
        }
    }

    #[test]
    fn test_block_prefix() {
        assert_eq!(block_prefix("W-Block"), "W");
        assert_eq!(block_prefix("W-block"), "W");
        assert_eq!(block_prefix("W"), "W");
    }

    #[test]
    fn test_room_number_prefix() {
        assert_eq!(format_room_number("W-Block", "201"), "W-201");
        assert_eq!(format_room_number("W-Block", "W-201"), "W-201");
        assert_eq!(format_room_number("W-Block", "w-201"), "w-201");
    }

    #[test]
    fn test_room_number_idempotent() {
        let once = format_room_number("AB-Block", "305");
        assert_eq!(format_room_number("AB-Block", &once), once);
    }

    #[test]
    fn test_section_display_name() {
        assert_eq!(format_section_display_name("CSE", "A"), "CSE-A");
    }

    #[test]
    fn test_floor_label_ordinals() {
        assert_eq!(format_floor_label(1), "1st");
        assert_eq!(format_floor_label(2), "2nd");
        assert_eq!(format_floor_label(3), "3rd");
        assert_eq!(format_floor_label(4), "4th");
        assert_eq!(format_floor_label(11), "11th");
        assert_eq!(format_floor_label(12), "12th");
        assert_eq!(format_floor_label(13), "13th");
        assert_eq!(format_floor_label(22), "22nd");
        assert_eq!(format_floor_label(101), "101st");
        assert_eq!(format_floor_label(111), "111th");
    }

    #[test]
    fn test_year_name() {
        assert_eq!(derive_year_name(2022), "2022-2026");
    }

    #[test]
    fn test_default_exam_name() {
        let subject = Subject {
            id: 1,
            code: "CS301".to_string(),
            name: "Operating Systems".to_string(),
        };
        assert_eq!(
            default_exam_name(&subject, ExamType::Midterm),
            "CS301 - Operating Systems - MIDTERM"
        );
    }
}
