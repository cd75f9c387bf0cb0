//! Paging over ordered question lists and random quiz draws.

use rand::{seq::SliceRandom, Rng};

use crate::{
    db::{CategoryFilter, Question},
    names,
};

/// Returns page `page` (1-based) of `items`, `names::QUESTIONS_PER_PAGE` at a time.
///
/// Pages before the first or past the last are empty rather than an error.
pub fn paginate<T>(items: &[T], page: i64) -> &[T] {
    if page < 1 {
        return &[];
    }
    let Some(start) = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(names::QUESTIONS_PER_PAGE))
    else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start
        .saturating_add(names::QUESTIONS_PER_PAGE)
        .min(items.len());
    &items[start..end]
}

/// Whether `question` may be drawn for `filter` given the ids already shown.
pub fn is_eligible(question: &Question, filter: CategoryFilter, previous: &[i32]) -> bool {
    filter.matches(question) && !previous.contains(&question.id)
}

/// Draws one question uniformly from the eligible pool.
///
/// `None` means the pool is exhausted for this filter.
pub fn pick<R: Rng + ?Sized>(pool: &[Question], rng: &mut R) -> Option<Question> {
    pool.choose(rng).cloned()
}
