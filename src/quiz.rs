use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::db::Question;

/// Category id clients send to mean "no filter", same as omitting it.
pub const ALL_CATEGORIES: i64 = 0;

/// Pick one unseen question uniformly at random. `None` means the round is
/// over: every candidate has already been played. An unknown category also
/// comes back as `None`, existence checks are the caller's job.
pub fn select_quiz_question<'a, R: Rng + ?Sized>(
    category: Option<i64>,
    previous: &HashSet<i64>,
    questions: &'a [Question],
    rng: &mut R,
) -> Option<&'a Question> {
    let filter = category.filter(|id| *id != ALL_CATEGORIES);
    let remaining: Vec<&Question> = questions
        .iter()
        .filter(|q| filter.is_none_or(|id| q.category == id))
        .filter(|q| !previous.contains(&q.id))
        .collect();
    remaining.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i64, category: i64) -> Question {
        Question {
            id,
            question: format!("question {id}"),
            answer: format!("answer {id}"),
            category,
            difficulty: 1,
        }
    }

    #[test]
    fn never_repeats_a_previous_question() {
        let questions: Vec<Question> = (1..=10).map(|id| question(id, 1)).collect();
        let previous: HashSet<i64> = [1, 3, 5, 7, 9].into();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select_quiz_question(None, &previous, &questions, &mut rng)
                .expect("unseen questions remain");
            assert!(!previous.contains(&picked.id));
        }
    }

    #[test]
    fn exhausted_pool_yields_none() {
        let questions: Vec<Question> = (1..=4).map(|id| question(id, 1)).collect();
        let previous: HashSet<i64> = (1..=4).collect();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(select_quiz_question(None, &previous, &questions, &mut rng).is_none());
    }

    #[test]
    fn category_filter_narrows_the_pool() {
        let mut questions: Vec<Question> = (1..=5).map(|id| question(id, 1)).collect();
        questions.extend((6..=8).map(|id| question(id, 2)));
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = select_quiz_question(Some(2), &HashSet::new(), &questions, &mut rng)
                .expect("category has questions");
            assert_eq!(picked.category, 2);
        }
    }

    #[test]
    fn zero_category_means_all() {
        let questions = vec![question(1, 1), question(2, 2)];
        let previous: HashSet<i64> = [1].into();
        let mut rng = StdRng::seed_from_u64(0);
        let picked =
            select_quiz_question(Some(ALL_CATEGORIES), &previous, &questions, &mut rng)
                .expect("one question left across all categories");
        assert_eq!(picked.id, 2);
    }

    #[test]
    fn empty_pool_yields_none() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(select_quiz_question(None, &HashSet::new(), &[], &mut rng).is_none());
        let questions = vec![question(1, 1)];
        assert!(select_quiz_question(Some(9), &HashSet::new(), &questions, &mut rng).is_none());
    }
}
