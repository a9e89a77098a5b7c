use std::collections::VecDeque;

use super::AllocationState;
use crate::basic_types::hash_structures::HashSet;

/// The FIFO queue of states which still have to be processed.
///
/// When duplicate suppression is enabled, a state is only enqueued if no state with the same
/// canonical content is currently pending. Membership is tracked in a hash set which mirrors the
/// queue: a state leaves the set when it is dequeued.
#[derive(Debug)]
pub struct Frontier {
    queue: VecDeque<AllocationState>,
    /// The pending states; [`None`] if duplicate suppression is disabled
    pending: Option<HashSet<AllocationState>>,
}

impl Frontier {
    pub fn new(duplicate_suppression: bool) -> Self {
        Self {
            queue: VecDeque::new(),
            pending: duplicate_suppression.then(HashSet::default),
        }
    }

    /// Adds `state` to the back of the queue; returns false if it was suppressed because an
    /// equivalent state is already pending.
    pub fn push(&mut self, state: AllocationState) -> bool {
        if let Some(pending) = self.pending.as_mut() {
            if !pending.insert(state) {
                return false;
            }
        }

        self.queue.push_back(state);
        true
    }

    /// Removes the state at the front of the queue.
    pub fn pop(&mut self) -> Option<AllocationState> {
        let state = self.queue.pop_front()?;

        if let Some(pending) = self.pending.as_mut() {
            let was_pending = pending.remove(&state);
            crate::fair_split_assert_advanced!(was_pending);
        }

        Some(state)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Frontier;
    use crate::basic_types::Player;
    use crate::search::AllocationState;

    fn state_reached_via_item_order(items: [usize; 2]) -> AllocationState {
        AllocationState::initial()
            .assign(items[0], Player::A)
            .assign(items[1], Player::A)
    }

    #[test]
    fn equivalent_pending_states_are_suppressed() {
        let mut frontier = Frontier::new(true);

        assert!(frontier.push(state_reached_via_item_order([0, 1])));
        assert!(!frontier.push(state_reached_via_item_order([1, 0])));
        assert_eq!(frontier.len(), 1);
    }

    #[test]
    fn duplicates_are_kept_without_suppression() {
        let mut frontier = Frontier::new(false);

        assert!(frontier.push(state_reached_via_item_order([0, 1])));
        assert!(frontier.push(state_reached_via_item_order([1, 0])));
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn a_dequeued_state_can_be_enqueued_again() {
        let mut frontier = Frontier::new(true);
        let state = state_reached_via_item_order([0, 1]);

        assert!(frontier.push(state));
        assert_eq!(frontier.pop(), Some(state));
        assert!(frontier.is_empty());
        assert!(frontier.push(state));
    }

    #[test]
    fn states_are_processed_first_in_first_out() {
        let mut frontier = Frontier::new(true);
        let first = AllocationState::initial().assign(0, Player::A);
        let second = AllocationState::initial().assign(0, Player::B);

        let _ = frontier.push(first);
        let _ = frontier.push(second);

        assert_eq!(frontier.pop(), Some(first));
        assert_eq!(frontier.pop(), Some(second));
        assert_eq!(frontier.pop(), None);
    }
}
