use rand::seq::IndexedRandom;
use std::collections::HashSet;

use crate::models::Question;

/// Outcome of a single quiz draw.
#[derive(Debug)]
pub enum QuizDraw {
    Selected(Question),
    Exhausted,
}

/// Picks the next quiz question uniformly from the pool members that have not
/// been asked yet.
///
/// The unasked subset is materialized before drawing, so an exhausted pool
/// (including an empty one) is detected up front and never reaches the random
/// draw, and the draw itself needs no retries. Ids in `asked` that do not
/// occur in the pool are ignored.
pub fn pick_question(pool: &[Question], asked: &HashSet<i64>) -> QuizDraw {
    let unasked: Vec<&Question> = pool.iter().filter(|q| !asked.contains(&q.id)).collect();

    match unasked.choose(&mut rand::rng()) {
        Some(question) => QuizDraw::Selected((*question).clone()),
        None => QuizDraw::Exhausted,
    }
}
