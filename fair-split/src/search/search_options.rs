#[cfg(doc)]
use super::Frontier;
#[cfg(doc)]
use super::OptimisticFeasibility;

/// Determines which of the two pruning rules the search applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchOptions {
    /// Whether states which cannot even optimistically give both players half of their total
    /// value are discarded (see [`OptimisticFeasibility`]).
    pub optimistic_pruning: bool,
    /// Whether a state is kept out of the frontier when an equivalent state is already pending
    /// (see [`Frontier`]).
    pub duplicate_suppression: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            optimistic_pruning: true,
            duplicate_suppression: true,
        }
    }
}

impl SearchOptions {
    /// Every combination of the two pruning rules, both rules enabled first.
    pub const ALL_COMBINATIONS: [SearchOptions; 4] = [
        SearchOptions {
            optimistic_pruning: true,
            duplicate_suppression: true,
        },
        SearchOptions {
            optimistic_pruning: false,
            duplicate_suppression: true,
        },
        SearchOptions {
            optimistic_pruning: true,
            duplicate_suppression: false,
        },
        SearchOptions {
            optimistic_pruning: false,
            duplicate_suppression: false,
        },
    ];
}
