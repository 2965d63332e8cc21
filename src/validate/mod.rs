//! Form validation.
//!
//! Pure predicate functions returning `None` when valid, and whole-form
//! checks returning a field-name -> message map (empty map = valid form).
//! Submit validation runs every check without short-circuiting; the
//! per-field functions double as on-blur checks for immediate feedback.
//! Validation failures are handled locally and never reach the network.

use std::collections::BTreeMap;

use crate::format::default_exam_name;
use crate::models::{
    EntityId, ExamRequest, ExamType, LoginRequest, RegisterRequest, SetType, Subject,
};
use chrono::{NaiveDate, NaiveTime};

/// Per-field validation errors keyed by wire field name.
pub type FieldErrors = BTreeMap<&'static str, String>;

const PASSWORD_SPECIALS: &str = "!@#$%^&*";

/// Loose email check: an `@` with a `.` somewhere after it.
pub fn validate_email(value: &str) -> Option<String> {
    let ok = value
        .find('@')
        .map(|at| value[at + 1..].contains('.'))
        .unwrap_or(false);
    if ok {
        None
    } else {
        Some("Please enter a valid email".to_string())
    }
}

/// Exactly 10 ASCII digits.
pub fn validate_phone(value: &str) -> Option<String> {
    if value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()) {
        None
    } else {
        Some("Phone number must be exactly 10 digits".to_string())
    }
}

/// 4-12 characters from `[A-Za-z0-9!@#$%^&*]` with at least one uppercase
/// letter, one digit, and one special character.
pub fn validate_password(value: &str) -> Option<String> {
    let allowed = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SPECIALS.contains(c));
    let has_upper = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    let has_special = value.chars().any(|c| PASSWORD_SPECIALS.contains(c));

    if (4..=12).contains(&value.len()) && allowed && has_upper && has_digit && has_special {
        None
    } else {
        Some(
            "Password must be 4-12 characters with at least one uppercase letter, \
             one number, and one special character (!@#$%^&*)"
                .to_string(),
        )
    }
}

/// Exact equality with the password field.
pub fn validate_confirm_password(password: &str, confirm: &str) -> Option<String> {
    if password == confirm {
        None
    } else {
        Some("Passwords do not match".to_string())
    }
}

/// Program duration must be between 1 and 6 years.
pub fn validate_duration_years(years: i32) -> Option<String> {
    if (1..=6).contains(&years) {
        None
    } else {
        Some("Duration must be between 1 and 6 years".to_string())
    }
}

/// The single combined login identifier: a valid email or a 10-digit phone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginIdentifier {
    Email(String),
    Phone(String),
}

impl LoginIdentifier {
    /// Classify a raw identifier, or `None` when it is neither.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if validate_phone(trimmed).is_none() {
            Some(LoginIdentifier::Phone(trimmed.to_string()))
        } else if validate_email(trimmed).is_none() {
            Some(LoginIdentifier::Email(trimmed.to_string()))
        } else {
            None
        }
    }

    /// Build the login payload, filling exactly one of email/phonenumber.
    pub fn into_request(self, password: impl Into<String>) -> LoginRequest {
        match self {
            LoginIdentifier::Email(email) => LoginRequest {
                email: Some(email),
                phonenumber: None,
                password: password.into(),
            },
            LoginIdentifier::Phone(phone) => LoginRequest {
                email: None,
                phonenumber: Some(phone),
                password: password.into(),
            },
        }
    }
}

/// Registration form state.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phonenumber: String,
    pub password: String,
    pub confirm_password: String,
    pub role: String,
}

impl RegistrationForm {
    /// Validate every field; an empty map means the form may be submitted.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.trim().is_empty() {
            errors.insert("name", "Name is required".to_string());
        }
        if let Some(msg) = validate_email(&self.email) {
            errors.insert("email", msg);
        }
        if let Some(msg) = validate_phone(&self.phonenumber) {
            errors.insert("phonenumber", msg);
        }
        if let Some(msg) = validate_password(&self.password) {
            errors.insert("password", msg);
        }
        if let Some(msg) = validate_confirm_password(&self.password, &self.confirm_password) {
            errors.insert("confirmPassword", msg);
        }
        errors
    }

    /// Convert into the registration payload; fails with the field errors
    /// when invalid.
    pub fn to_request(&self) -> Result<RegisterRequest, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.clone(),
            phonenumber: self.phonenumber.clone(),
            password: self.password.clone(),
            role: self.role.clone(),
        })
    }
}

/// Exam scheduling form state. `exam_name` is optional; when blank the name
/// is generated from the subject and exam type.
#[derive(Debug, Clone, Default)]
pub struct ExamForm {
    pub exam_name: String,
    pub exam_type: Option<ExamType>,
    pub subject_id: Option<EntityId>,
    pub set_type: Option<SetType>,
    pub exam_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub program_id: Option<EntityId>,
    pub year_id: Option<EntityId>,
    pub branch_ids: Vec<EntityId>,
    pub section_ids: Vec<EntityId>,
}

impl ExamForm {
    /// Run every check; no short-circuit, so the caller gets all field
    /// errors at once.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.exam_type.is_none() {
            errors.insert("examType", "Exam type is required".to_string());
        }
        if self.subject_id.is_none() {
            errors.insert("subjectId", "Subject is required".to_string());
        }
        if self.set_type.is_none() {
            errors.insert("setType", "Set type is required".to_string());
        }
        if self.exam_date.is_none() {
            errors.insert("examDate", "Exam date is required".to_string());
        }
        if self.start_time.is_none() {
            errors.insert("startTime", "Start time is required".to_string());
        }
        if self.end_time.is_none() {
            errors.insert("endTime", "End time is required".to_string());
        }
        if self.program_id.is_none() {
            errors.insert("programId", "Program is required".to_string());
        }
        if self.year_id.is_none() {
            errors.insert("yearId", "Year is required".to_string());
        }
        if self.branch_ids.is_empty() {
            errors.insert("branchIds", "At least one branch is required".to_string());
        }
        if self.section_ids.is_empty() {
            errors.insert("sectionIds", "At least one section is required".to_string());
        }
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            if start >= end {
                errors.insert("endTime", "End time must be after start time".to_string());
            }
        }
        errors
    }

    /// The exam name to submit: the entered name, or one generated from the
    /// selected subject when blank.
    pub fn resolved_name(&self, subjects: &[Subject]) -> String {
        let trimmed = self.exam_name.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
        match (self.subject_id, self.exam_type) {
            (Some(subject_id), Some(exam_type)) => subjects
                .iter()
                .find(|s| s.id == subject_id)
                .map(|subject| default_exam_name(subject, exam_type))
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    /// Convert into the wire payload; fails with the field errors when
    /// invalid.
    pub fn to_request(&self, subjects: &[Subject]) -> Result<ExamRequest, FieldErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let (
            Some(exam_type),
            Some(subject_id),
            Some(set_type),
            Some(exam_date),
            Some(start_time),
            Some(end_time),
            Some(program_id),
            Some(year_id),
        ) = (
            self.exam_type,
            self.subject_id,
            self.set_type,
            self.exam_date,
            self.start_time,
            self.end_time,
            self.program_id,
            self.year_id,
        )
        else {
            return Err(errors);
        };

        Ok(ExamRequest {
            exam_name: self.resolved_name(subjects),
            exam_date,
            start_time,
            end_time,
            subject_id,
            exam_type,
            set_type,
            program_id,
            year_id,
            branch_ids: self.branch_ids.clone(),
            section_ids: self.section_ids.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(validate_email("user@example.com").is_none());
        assert!(validate_email("user@sub.example.co").is_none());
        assert!(validate_email("userexample.com").is_some());
        assert!(validate_email("user@examplecom").is_some());
        assert!(validate_email("").is_some());
    }

    #[test]
    fn test_phone() {
        assert!(validate_phone("9876543210").is_none());
        assert!(validate_phone("987654321").is_some());
        assert!(validate_phone("98765432100").is_some());
        assert!(validate_phone("98765o4321").is_some());
    }

    #[test]
    fn test_password() {
        assert!(validate_password("Abc1!").is_none());
        assert!(validate_password("A1!a").is_none());
        // Missing character classes
        assert!(validate_password("abc1!").is_some());
        assert!(validate_password("Abcd!").is_some());
        assert!(validate_password("Abc12").is_some());
        // Length bounds
        assert!(validate_password("A1!").is_some());
        assert!(validate_password("Abcdefghij1!x").is_some());
        // Disallowed character class
        assert!(validate_password("Abc1! ").is_some());
        assert!(validate_password("Abc1?").is_some());
    }

    #[test]
    fn test_confirm_password() {
        assert!(validate_confirm_password("Abc1!", "Abc1!").is_none());
        assert!(validate_confirm_password("Abc1!", "Abc1").is_some());
    }

    #[test]
    fn test_duration_years() {
        assert!(validate_duration_years(1).is_none());
        assert!(validate_duration_years(6).is_none());
        assert!(validate_duration_years(0).is_some());
        assert!(validate_duration_years(7).is_some());
    }

    #[test]
    fn test_login_identifier() {
        assert_eq!(
            LoginIdentifier::parse("9876543210"),
            Some(LoginIdentifier::Phone("9876543210".to_string()))
        );
        assert_eq!(
            LoginIdentifier::parse("admin@example.com"),
            Some(LoginIdentifier::Email("admin@example.com".to_string()))
        );
        assert_eq!(LoginIdentifier::parse("not-an-identifier"), None);

        let request = LoginIdentifier::parse("9876543210")
            .unwrap()
            .into_request("Abc1!");
        assert_eq!(request.email, None);
        assert_eq!(request.phonenumber.as_deref(), Some("9876543210"));
    }

    #[test]
    fn test_registration_form() {
        let form = RegistrationForm {
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            phonenumber: "9876543210".to_string(),
            password: "Abc1!".to_string(),
            confirm_password: "Abc1!".to_string(),
            role: "ADMIN".to_string(),
        };
        assert!(form.validate().is_empty());
        assert!(form.to_request().is_ok());

        let mut bad = form.clone();
        bad.confirm_password = "other".to_string();
        let errors = bad.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key("confirmPassword"));
    }

    fn filled_exam_form() -> ExamForm {
        ExamForm {
            exam_name: String::new(),
            exam_type: Some(ExamType::Midterm),
            subject_id: Some(1),
            set_type: Some(SetType::NoSet),
            exam_date: NaiveDate::from_ymd_opt(2025, 3, 1),
            start_time: NaiveTime::from_hms_opt(9, 0, 0),
            end_time: NaiveTime::from_hms_opt(12, 0, 0),
            program_id: Some(2),
            year_id: Some(3),
            branch_ids: vec![4],
            section_ids: vec![5],
        }
    }

    fn subjects() -> Vec<Subject> {
        vec![Subject {
            id: 1,
            code: "CS301".to_string(),
            name: "Operating Systems".to_string(),
        }]
    }

    #[test]
    fn test_exam_form_empty_reports_every_required_field() {
        let errors = ExamForm::default().validate();
        let keys: Vec<_> = errors.keys().copied().collect();
        // BTreeMap keys come out sorted.
        assert_eq!(
            keys,
            vec![
                "branchIds",
                "endTime",
                "examDate",
                "examType",
                "programId",
                "sectionIds",
                "setType",
                "startTime",
                "subjectId",
                "yearId",
            ]
        );
    }

    #[test]
    fn test_exam_form_end_before_start() {
        let mut form = filled_exam_form();
        form.start_time = NaiveTime::from_hms_opt(10, 0, 0);
        form.end_time = NaiveTime::from_hms_opt(9, 0, 0);
        let errors = form.validate();
        assert_eq!(
            errors.get("endTime").map(String::as_str),
            Some("End time must be after start time")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_exam_form_equal_times_invalid() {
        let mut form = filled_exam_form();
        form.end_time = form.start_time;
        assert!(form.validate().contains_key("endTime"));
    }

    #[test]
    fn test_exam_form_generates_name_when_blank() {
        let form = filled_exam_form();
        let request = form.to_request(&subjects()).unwrap();
        assert_eq!(request.exam_name, "CS301 - Operating Systems - MIDTERM");
    }

    #[test]
    fn test_exam_form_keeps_entered_name() {
        let mut form = filled_exam_form();
        form.exam_name = "  Custom Exam  ".to_string();
        let request = form.to_request(&subjects()).unwrap();
        assert_eq!(request.exam_name, "Custom Exam");
    }

    #[test]
    fn test_exam_form_invalid_to_request_fails() {
        let errors = ExamForm::default().to_request(&subjects()).unwrap_err();
        assert!(errors.contains_key("subjectId"));
    }
}
