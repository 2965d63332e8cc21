//! Client-side list filtering.
//!
//! Every screen fetches its full list and filters it locally by a search
//! string; matching is a case-insensitive substring test over an entity's
//! searchable fields.

use crate::models::{Exam, Invigilator, Student, Subject};

/// An entity that can be matched against a search query.
pub trait Searchable {
    /// The strings a query is matched against.
    fn haystacks(&self) -> Vec<&str>;

    fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.haystacks()
            .iter()
            .any(|hay| hay.to_lowercase().contains(&query))
    }
}

/// Filter a list by a query; an empty query passes everything.
pub fn filter_by_query<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    if query.trim().is_empty() {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.matches(query)).collect()
}

impl Searchable for Exam {
    fn haystacks(&self) -> Vec<&str> {
        let mut hays = vec![self.exam_name.as_str()];
        if let Some(name) = &self.subject_name {
            hays.push(name);
        }
        if let Some(code) = &self.subject_code {
            hays.push(code);
        }
        hays
    }
}

impl Searchable for Student {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.registration_number]
    }
}

impl Searchable for Subject {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.code, &self.name]
    }
}

impl Searchable for Invigilator {
    fn haystacks(&self) -> Vec<&str> {
        vec![&self.name, &self.email, &self.employee_id, &self.department]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subjects() -> Vec<Subject> {
        vec![
            Subject {
                id: 1,
                code: "CS301".to_string(),
                name: "Operating Systems".to_string(),
            },
            Subject {
                id: 2,
                code: "EC204".to_string(),
                name: "Signals".to_string(),
            },
        ]
    }

    #[test]
    fn test_empty_query_passes_everything() {
        let all = subjects();
        assert_eq!(filter_by_query(&all, "").len(), 2);
        assert_eq!(filter_by_query(&all, "   ").len(), 2);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let all = subjects();
        let hits = filter_by_query(&all, "operating");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);

        let hits = filter_by_query(&all, "ec2");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 2);

        assert!(filter_by_query(&all, "chemistry").is_empty());
    }
}
