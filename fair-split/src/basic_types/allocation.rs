use std::collections::BTreeSet;

use super::ItemSet;
use super::Player;
use super::Valuations;

/// The complete allocations found by a search, in canonical order.
pub type AllocationSet = BTreeSet<CompleteAllocation>;

/// An allocation in which every item has been given to exactly one of the two players.
///
/// Equality, hashing and ordering only depend on the two bundles, so the same split reached via
/// different branching orders is a single allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CompleteAllocation {
    player_a: ItemSet,
    player_b: ItemSet,
}

impl CompleteAllocation {
    pub(crate) fn new(player_a: ItemSet, player_b: ItemSet) -> Self {
        crate::fair_split_assert_simple!(
            player_a.is_disjoint(&player_b),
            "an item cannot be given to both players"
        );
        Self { player_a, player_b }
    }

    /// The bundle received by `player`.
    pub fn items_of(&self, player: Player) -> ItemSet {
        match player {
            Player::A => self.player_a,
            Player::B => self.player_b,
        }
    }

    /// The number of allocated items.
    pub fn num_items(&self) -> usize {
        self.player_a.len() + self.player_b.len()
    }

    /// Returns true if neither player ends up empty-handed.
    pub fn gives_both_players_items(&self) -> bool {
        !self.player_a.is_empty() && !self.player_b.is_empty()
    }

    /// The value `player` assigns to its own bundle.
    pub fn value_for(&self, player: Player, valuations: &Valuations) -> f64 {
        valuations.value_of(player, self.items_of(player))
    }
}

/// The allocation selected by an objective, together with its objective value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BestAllocation {
    allocation: CompleteAllocation,
    score: f64,
}

impl BestAllocation {
    pub(crate) fn new(allocation: CompleteAllocation, score: f64) -> Self {
        Self { allocation, score }
    }

    pub fn allocation(&self) -> &CompleteAllocation {
        &self.allocation
    }

    /// The value of the objective for this allocation.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn items_of(&self, player: Player) -> ItemSet {
        self.allocation.items_of(player)
    }
}
