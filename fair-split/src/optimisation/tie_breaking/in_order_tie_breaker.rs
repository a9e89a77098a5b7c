use super::tie_breaker::improves;
use super::TieBreaker;

/// Keeps the earliest candidate with the highest score.
///
/// Fed with the allocations of an [`AllocationSet`](crate::basic_types::AllocationSet), this
/// selects the best allocation which comes first in canonical order, so that the selection does
/// not depend on how the search reached the allocations.
#[derive(Debug)]
pub struct InOrderTieBreaker<Candidate, Score> {
    best: Option<(Candidate, Score)>,
}

impl<Candidate, Score> Default for InOrderTieBreaker<Candidate, Score> {
    fn default() -> Self {
        Self { best: None }
    }
}

impl<Candidate, Score> InOrderTieBreaker<Candidate, Score> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Candidate, Score: PartialOrd> TieBreaker<Candidate, Score>
    for InOrderTieBreaker<Candidate, Score>
{
    fn consider(&mut self, candidate: Candidate, score: Score) {
        let replaces_best = match &self.best {
            Some((_, best_score)) => improves(&score, best_score),
            None => true,
        };

        if replaces_best {
            self.best = Some((candidate, score));
        }
    }

    fn select(&mut self) -> Option<Candidate> {
        self.best.take().map(|(candidate, _)| candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::InOrderTieBreaker;
    use crate::optimisation::TieBreaker;

    #[test]
    fn equal_scores_keep_the_earliest_candidate() {
        let mut breaker = InOrderTieBreaker::new();

        for candidate in ["first", "second", "third"] {
            breaker.consider(candidate, 15.0);
        }

        assert_eq!(breaker.select(), Some("first"));
    }

    #[test]
    fn a_strictly_higher_score_replaces_the_candidate() {
        let mut breaker = InOrderTieBreaker::new();

        for (candidate, score) in [(0, 10.0), (1, 15.0), (2, 5.0), (3, 15.0)] {
            breaker.consider(candidate, score);
        }

        assert_eq!(breaker.select(), Some(1));
        assert_eq!(breaker.select(), None);
    }

    #[test]
    fn a_later_nan_score_is_ignored() {
        let mut breaker = InOrderTieBreaker::new();

        breaker.consider('a', 1.0);
        breaker.consider('b', f64::NAN);

        assert_eq!(breaker.select(), Some('a'));
    }

    #[test]
    fn a_leading_nan_score_is_replaced() {
        let mut breaker = InOrderTieBreaker::new();

        breaker.consider('a', f64::NAN);
        breaker.consider('b', 0.0);
        breaker.consider('c', f64::MAX);

        assert_eq!(breaker.select(), Some('c'));
    }
}
