use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};
use trivia_db::models::Question;

/// Choose a question from `pool` that is not in `previous`, uniformly at random.
///
/// Returns `None` once every question of the pool has been seen.
pub fn pick_question<'a, R>(
    pool: &'a [Question],
    previous: &[i64],
    rng: &mut R,
) -> Option<&'a Question>
where
    R: Rng + ?Sized,
{
    let seen: HashSet<i64> = previous.iter().copied().collect();
    let candidates: Vec<&Question> = pool.iter().filter(|q| !seen.contains(&q.id)).collect();

    candidates.choose(rng).copied()
}
