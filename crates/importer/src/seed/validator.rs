use std::collections::HashSet;

use tracing::warn;

use super::models::SeedFile;
use crate::{ImporterError, Result};

const DIFFICULTY_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

pub struct SeedValidator;

impl SeedValidator {
    pub fn validate(seed: &SeedFile) -> Result<ValidationReport> {
        let mut report = ValidationReport::default();

        if seed.categories.is_empty() && seed.questions.is_empty() {
            report
                .warnings
                .push("Seed file contains no categories and no questions".to_string());
        }

        let mut category_ids = HashSet::new();
        for category in &seed.categories {
            if category.kind.trim().is_empty() {
                report
                    .errors
                    .push(format!("Category {} has an empty type", category.id));
            }
            if !category_ids.insert(category.id) {
                report
                    .errors
                    .push(format!("Category id {} is listed more than once", category.id));
            }
        }

        for (index, question) in seed.questions.iter().enumerate() {
            let label = index + 1;

            if question.question.trim().is_empty() {
                report
                    .errors
                    .push(format!("Question #{}: question text is empty", label));
            }
            if question.answer.is_none() {
                report
                    .warnings
                    .push(format!("Question #{}: no answer given", label));
            }
            if !category_ids.contains(&question.category) {
                report.warnings.push(format!(
                    "Question #{}: category {} is not part of this seed file",
                    label, question.category
                ));
            }
            if !DIFFICULTY_RANGE.contains(&question.difficulty) {
                report.warnings.push(format!(
                    "Question #{}: difficulty {} is outside {}..={}",
                    label,
                    question.difficulty,
                    DIFFICULTY_RANGE.start(),
                    DIFFICULTY_RANGE.end()
                ));
            }
        }

        if !report.errors.is_empty() {
            Err(ImporterError::ValidationError(format!(
                "Validation failed with {} error(s): {}",
                report.errors.len(),
                report.errors.join("; ")
            )))
        } else {
            Ok(report)
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(json: &str) -> SeedFile {
        SeedFile::from_json(json).unwrap()
    }

    #[test]
    fn test_valid_seed_has_no_warnings() {
        let report = SeedValidator::validate(&seed(
            r#"{
                "categories": [{"id": 1, "type": "Science"}, {"id": 2, "type": "Art"}],
                "questions": [
                    {"question": "What is H2O?", "answer": "Water", "category": 1, "difficulty": 1},
                    {"question": "Who painted Guernica?", "answer": "Picasso", "category": 2, "difficulty": 3}
                ]
            }"#,
        ))
        .unwrap();

        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_duplicate_category_is_an_error() {
        let result = SeedValidator::validate(&seed(
            r#"{"categories": [{"id": 1, "type": "Science"}, {"id": 1, "type": "Art"}]}"#,
        ));

        assert!(matches!(
            result,
            Err(ImporterError::ValidationError(msg)) if msg.contains("more than once")
        ));
    }

    #[test]
    fn test_empty_question_text_is_an_error() {
        let result = SeedValidator::validate(&seed(
            r#"{
                "categories": [{"id": 1, "type": "Science"}],
                "questions": [{"question": "  ", "answer": "Nothing", "category": 1}]
            }"#,
        ));

        assert!(result.is_err());
    }

    #[test]
    fn test_loose_references_are_warnings() {
        let report = SeedValidator::validate(&seed(
            r#"{
                "categories": [{"id": 1, "type": "Science"}],
                "questions": [{"question": "Orphan?", "category": 9, "difficulty": 12}]
            }"#,
        ))
        .unwrap();

        assert_eq!(report.warnings.len(), 3);
        assert!(report.warnings.iter().any(|w| w.contains("category 9")));
        assert!(report.warnings.iter().any(|w| w.contains("difficulty 12")));
    }

    #[test]
    fn test_question_defaults() {
        let seed = seed(r#"{"questions": [{"question": "Default?"}]}"#);

        assert_eq!(seed.questions[0].category, 1);
        assert_eq!(seed.questions[0].difficulty, 1);
        assert!(seed.categories.is_empty());
    }

    #[test]
    fn test_bundled_seed_file_is_valid() {
        let seed = seed(include_str!("../../seeds/trivia.json"));
        let report = SeedValidator::validate(&seed).unwrap();

        assert_eq!(seed.categories.len(), 6);
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    }
}
