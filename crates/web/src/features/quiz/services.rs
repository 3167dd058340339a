use rand::Rng;
use storage::{TriviaStore, dto::quiz::QuizRequest, error::Result, models::Question};

/// Picks a random question the player has not seen yet, if any is left
pub async fn next_question(
    store: &dyn TriviaStore,
    request: &QuizRequest,
) -> Result<Option<Question>> {
    let previous = request.previous_questions.as_deref().unwrap_or_default();
    let candidates = store
        .quiz_candidates(previous, request.quiz_category.id)
        .await?;

    tracing::debug!(
        candidates = candidates.len(),
        category = ?request.quiz_category.id,
        "Selecting quiz question"
    );

    Ok(choose_question(candidates, &mut rand::rng()))
}

/// Uniform draw over the candidates
pub fn choose_question<R: Rng>(
    mut candidates: Vec<Question>,
    rng: &mut R,
) -> Option<Question> {
    if candidates.is_empty() {
        return None;
    }

    let index = rng.random_range(0..candidates.len());
    Some(candidates.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn question(id: i32) -> Question {
        Question {
            id,
            question: format!("Question {id}?"),
            answer: None,
            category: 3,
            difficulty: 1,
        }
    }

    #[test]
    fn test_no_candidates_yields_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(choose_question(Vec::new(), &mut rng), None);
    }

    #[test]
    fn test_single_candidate_is_always_chosen() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let chosen = choose_question(vec![question(9)], &mut rng);
            assert_eq!(chosen.map(|q| q.id), Some(9));
        }
    }

    #[test]
    fn test_every_candidate_can_be_drawn() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::BTreeSet::new();

        for _ in 0..200 {
            let candidates = vec![question(7), question(8), question(9)];
            if let Some(chosen) = choose_question(candidates, &mut rng) {
                seen.insert(chosen.id);
            }
        }

        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![7, 8, 9]);
    }
}
