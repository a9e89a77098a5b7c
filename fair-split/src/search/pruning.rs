//! Rules which decide whether a state of the search can still lead to an acceptable allocation.
//!
//! A [`PruningRule`] is consulted for every state which is taken from the frontier; when it
//! rejects a state, none of the allocations below that state are explored. Duplicate suppression
//! is not a [`PruningRule`] since it acts on the frontier rather than on individual states (see
//! [`Frontier`]).

use super::AllocationState;
#[cfg(doc)]
use super::Frontier;
use crate::basic_types::ItemSet;
use crate::basic_types::Player;
use crate::basic_types::Valuations;

/// The fraction of their total value which each player should be able to obtain.
const PROPORTIONAL_SHARE: f64 = 0.5;

/// A cheap feasibility test used to discard unpromising branches.
pub trait PruningRule {
    /// The name of the rule, used when logging.
    fn name(&self) -> &str;

    /// Returns true if the branch rooted at `state` may still be worth exploring, where
    /// `remaining` contains the items which have not been assigned to either player.
    fn should_explore(
        &self,
        state: &AllocationState,
        remaining: ItemSet,
        valuations: &Valuations,
    ) -> bool;
}

/// Keeps a state only if each player could still reach half of their total value.
///
/// The optimistic value of a player is the value of the items it already holds plus the value of
/// *every* remaining item, as if the player received all of them. This is a proportionality
/// bound: it does not guarantee that the max-min optimal allocation survives for every valuation.
#[derive(Clone, Copy, Debug, Default)]
pub struct OptimisticFeasibility;

impl OptimisticFeasibility {
    /// The best value `player` could still obtain from `state`.
    pub fn optimistic_value(
        state: &AllocationState,
        remaining: ItemSet,
        valuations: &Valuations,
        player: Player,
    ) -> f64 {
        valuations.value_of(player, state.items_of(player))
            + valuations.value_of(player, remaining)
    }
}

impl PruningRule for OptimisticFeasibility {
    fn name(&self) -> &str {
        "OptimisticFeasibility"
    }

    fn should_explore(
        &self,
        state: &AllocationState,
        remaining: ItemSet,
        valuations: &Valuations,
    ) -> bool {
        Player::BOTH.into_iter().all(|player| {
            Self::optimistic_value(state, remaining, valuations, player)
                >= PROPORTIONAL_SHARE * valuations.total_value(player)
        })
    }
}

/// Accepts every state.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPruning;

impl PruningRule for NoPruning {
    fn name(&self) -> &str {
        "NoPruning"
    }

    fn should_explore(
        &self,
        _state: &AllocationState,
        _remaining: ItemSet,
        _valuations: &Valuations,
    ) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::NoPruning;
    use super::OptimisticFeasibility;
    use super::PruningRule;
    use crate::basic_types::Player;
    use crate::basic_types::Valuations;
    use crate::search::AllocationState;

    fn valuations() -> Valuations {
        Valuations::new(vec![vec![4.0, 5.0, 6.0, 7.0, 8.0], vec![8.0, 7.0, 6.0, 5.0, 4.0]])
            .expect("valid input")
    }

    #[test]
    fn the_root_is_always_feasible() {
        let valuations = valuations();
        let root = AllocationState::initial();

        assert!(OptimisticFeasibility.should_explore(&root, valuations.items(), &valuations));
    }

    #[test]
    fn giving_away_too_much_is_pruned() {
        let valuations = valuations();
        // Player A keeps at most 4 + 5 = 9 < 15
        let state = AllocationState::initial()
            .assign(2, Player::B)
            .assign(3, Player::B)
            .assign(4, Player::B);
        let remaining = valuations.items().difference(state.assigned());

        assert_eq!(
            OptimisticFeasibility::optimistic_value(&state, remaining, &valuations, Player::A),
            9.0
        );
        assert!(!OptimisticFeasibility.should_explore(&state, remaining, &valuations));
        assert!(NoPruning.should_explore(&state, remaining, &valuations));
    }

    #[test]
    fn reaching_exactly_half_is_enough() {
        let valuations = valuations();
        // Player A ends with 7 + 8 = 15, exactly half of 30
        let state = AllocationState::initial()
            .assign(0, Player::B)
            .assign(1, Player::B)
            .assign(2, Player::B)
            .assign(3, Player::A)
            .assign(4, Player::A);
        let remaining = valuations.items().difference(state.assigned());

        assert!(remaining.is_empty());
        assert!(OptimisticFeasibility.should_explore(&state, remaining, &valuations));
    }
}
