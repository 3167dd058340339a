use serde::{Deserialize, Serialize};
use storage::models::{Category, NewQuestion};

/// JSON document holding the categories and questions to load.
///
/// ```json
/// {
///   "categories": [{"id": 1, "type": "Science"}],
///   "questions": [{"question": "...", "answer": "...", "category": 1, "difficulty": 2}]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub categories: Vec<SeedCategory>,
    #[serde(default)]
    pub questions: Vec<SeedQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCategory {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedQuestion {
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default = "default_category")]
    pub category: i32,
    #[serde(default = "default_difficulty")]
    pub difficulty: i32,
}

fn default_category() -> i32 {
    storage::dto::question::DEFAULT_CATEGORY
}

fn default_difficulty() -> i32 {
    storage::dto::question::DEFAULT_DIFFICULTY
}

impl SeedFile {
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&SeedCategory> for Category {
    fn from(category: &SeedCategory) -> Self {
        Self {
            id: category.id,
            kind: category.kind.clone(),
        }
    }
}

impl From<&SeedQuestion> for NewQuestion {
    fn from(question: &SeedQuestion) -> Self {
        Self {
            question: question.question.clone(),
            answer: question.answer.clone(),
            category: question.category,
            difficulty: question.difficulty,
        }
    }
}
