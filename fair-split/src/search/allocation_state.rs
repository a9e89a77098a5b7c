use crate::basic_types::CompleteAllocation;
use crate::basic_types::Item;
use crate::basic_types::ItemSet;
use crate::basic_types::Player;

/// A node of the search space: the items given to each player so far.
///
/// Equality and hashing are determined by the content of the two bundles, which is the canonical
/// form used to recognise duplicate states.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AllocationState {
    /// The number of items which have been assigned
    depth: usize,
    player_a: ItemSet,
    player_b: ItemSet,
}

impl AllocationState {
    /// The root of the search: nothing has been assigned yet.
    pub fn initial() -> Self {
        Self {
            depth: 0,
            player_a: ItemSet::empty(),
            player_b: ItemSet::empty(),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn items_of(&self, player: Player) -> ItemSet {
        match player {
            Player::A => self.player_a,
            Player::B => self.player_b,
        }
    }

    /// The items held by either player.
    pub fn assigned(&self) -> ItemSet {
        self.player_a.union(self.player_b)
    }

    /// Returns true if all `num_items` items have been assigned.
    pub fn is_complete(&self, num_items: usize) -> bool {
        self.depth == num_items
    }

    /// Creates the child state in which `item` is given to `player`; the other bundle is left
    /// untouched.
    pub fn assign(&self, item: Item, player: Player) -> Self {
        crate::fair_split_assert_simple!(
            !self.assigned().contains(item),
            "item {item} has already been assigned"
        );

        let (player_a, player_b) = match player {
            Player::A => (self.player_a.with(item), self.player_b),
            Player::B => (self.player_a, self.player_b.with(item)),
        };
        let child = Self {
            depth: self.depth + 1,
            player_a,
            player_b,
        };

        crate::fair_split_assert_moderate!(child.player_a.is_disjoint(&child.player_b));
        crate::fair_split_assert_moderate!(
            child.depth == child.player_a.len() + child.player_b.len()
        );
        child
    }

    /// Converts a complete state into the allocation it represents.
    pub(crate) fn into_complete_allocation(self) -> CompleteAllocation {
        CompleteAllocation::new(self.player_a, self.player_b)
    }
}

#[cfg(test)]
mod tests {
    use super::AllocationState;
    use crate::basic_types::Player;

    #[test]
    fn children_extend_exactly_one_bundle() {
        let root = AllocationState::initial();

        let child = root.assign(2, Player::B);

        assert_eq!(child.depth(), 1);
        assert!(child.items_of(Player::A).is_empty());
        assert!(child.items_of(Player::B).contains(2));
        assert!(child.items_of(Player::A).is_disjoint(&child.items_of(Player::B)));
    }

    #[test]
    fn states_reached_in_different_orders_are_equal() {
        let first = AllocationState::initial()
            .assign(0, Player::A)
            .assign(1, Player::B)
            .assign(2, Player::A);
        let second = AllocationState::initial()
            .assign(2, Player::A)
            .assign(0, Player::A)
            .assign(1, Player::B);

        assert_eq!(first, second);
        assert!(first.is_complete(3));
    }

    #[test]
    #[should_panic]
    fn an_item_cannot_be_assigned_twice() {
        let _ = AllocationState::initial()
            .assign(0, Player::A)
            .assign(0, Player::B);
    }
}
