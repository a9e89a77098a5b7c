/// Tracks the best candidate out of a stream of scored candidates, deciding which candidate to
/// keep when several share the highest score.
pub trait TieBreaker<Candidate, Score> {
    /// Offers the next candidate together with its score.
    fn consider(&mut self, candidate: Candidate, score: Score);

    /// Returns the selected candidate, if any, and clears the tie-breaker so it can be reused.
    fn select(&mut self) -> Option<Candidate>;
}

/// Returns true if `score` should replace `incumbent` as the best score.
///
/// Only strictly higher scores improve; an incumbent which is not comparable with itself (such as
/// NaN) is replaced by any comparable score, and an incomparable score never replaces anything.
pub(crate) fn improves<Score: PartialOrd>(score: &Score, incumbent: &Score) -> bool {
    let is_comparable = |value: &Score| value.partial_cmp(value).is_some();

    if !is_comparable(score) {
        return false;
    }
    !is_comparable(incumbent) || score > incumbent
}
