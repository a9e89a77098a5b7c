use std::time::Instant;

use log::debug;
use log::info;

use super::AllocationState;
use super::Frontier;
use super::NoPruning;
use super::OptimisticFeasibility;
use super::PruningRule;
use super::SearchOptions;
use super::SearchStatistics;
use crate::basic_types::AllocationSet;
use crate::basic_types::Player;
use crate::basic_types::Valuations;
use crate::statistics::log_statistic_postfix;
use crate::statistics::should_log_statistics;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// Returns every complete allocation which survives the pruning rules selected by `options`.
///
/// ```rust
/// # use fair_split::basic_types::Valuations;
/// # use fair_split::search::search_allocations;
/// # use fair_split::search::SearchOptions;
/// let valuations = Valuations::new(vec![vec![], vec![]]).unwrap();
///
/// let allocations = search_allocations(&valuations, SearchOptions::default());
///
/// assert_eq!(allocations.len(), 1);
/// ```
pub fn search_allocations(valuations: &Valuations, options: SearchOptions) -> AllocationSet {
    StateExplorer::new(options).explore(valuations)
}

/// Breadth-first traversal of every way to split the items between the two players.
///
/// Starting from the empty allocation, each state taken from the [`Frontier`] is checked against
/// the [`PruningRule`]; a surviving complete state is recorded, and any other surviving state is
/// branched on by giving each remaining item to either player.
///
/// ```rust
/// # use fair_split::basic_types::Valuations;
/// # use fair_split::search::SearchOptions;
/// # use fair_split::search::StateExplorer;
/// let valuations = Valuations::new(vec![vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap();
///
/// let mut explorer = StateExplorer::new(SearchOptions::default());
/// let allocations = explorer.explore(&valuations);
///
/// // Only the splits in which both players receive an item give each at least half
/// assert_eq!(allocations.len(), 2);
/// assert_eq!(explorer.statistics().num_complete_allocations, 2);
/// ```
pub struct StateExplorer {
    pruning_rule: Box<dyn PruningRule>,
    duplicate_suppression: bool,
    statistics: SearchStatistics,
}

impl std::fmt::Debug for StateExplorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateExplorer")
            .field("pruning_rule", &self.pruning_rule.name())
            .field("duplicate_suppression", &self.duplicate_suppression)
            .field("statistics", &self.statistics)
            .finish()
    }
}

impl StateExplorer {
    pub fn new(options: SearchOptions) -> Self {
        if options.optimistic_pruning {
            Self::with_pruning_rule(OptimisticFeasibility, options.duplicate_suppression)
        } else {
            Self::with_pruning_rule(NoPruning, options.duplicate_suppression)
        }
    }

    pub fn with_pruning_rule(
        pruning_rule: impl PruningRule + 'static,
        duplicate_suppression: bool,
    ) -> Self {
        Self {
            pruning_rule: Box::new(pruning_rule),
            duplicate_suppression,
            statistics: SearchStatistics::default(),
        }
    }

    /// The statistics of the most recent call to [`StateExplorer::explore`].
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Explores the search space until the frontier is empty and returns every complete
    /// allocation which survived pruning.
    pub fn explore(&mut self, valuations: &Valuations) -> AllocationSet {
        self.statistics = SearchStatistics::default();
        let start_time = Instant::now();

        let num_items = valuations.num_items();
        let all_items = valuations.items();

        let mut frontier = Frontier::new(self.duplicate_suppression);
        let mut allocations = AllocationSet::new();

        let _ = frontier.push(AllocationState::initial());
        self.statistics.num_states_enqueued += 1;
        self.statistics.peak_frontier_size = 1;

        let mut current_depth = 0;

        while let Some(state) = frontier.pop() {
            self.statistics.num_states_explored += 1;

            if state.depth() > current_depth {
                current_depth = state.depth();
                debug!(
                    "Reached depth {current_depth} with {} states pending",
                    frontier.len() + 1
                );
            }

            let remaining = all_items.difference(state.assigned());

            if !self
                .pruning_rule
                .should_explore(&state, remaining, valuations)
            {
                self.statistics.num_states_pruned += 1;
                continue;
            }

            if state.is_complete(num_items) {
                crate::fair_split_assert_simple!(remaining.is_empty());
                let _ = allocations.insert(state.into_complete_allocation());
                continue;
            }

            let mut num_children = 0;
            for item in remaining {
                for player in Player::BOTH {
                    let child = state.assign(item, player);
                    crate::fair_split_assert_eq_simple!(
                        child.depth(),
                        state.depth() + 1,
                        "the depth should strictly increase when branching"
                    );

                    if frontier.push(child) {
                        num_children += 1;
                    } else {
                        self.statistics.num_duplicates_suppressed += 1;
                    }
                }
            }

            self.statistics.num_states_enqueued += num_children;
            self.statistics
                .average_branching_factor
                .add_term(num_children);
            self.statistics.peak_frontier_size = self
                .statistics
                .peak_frontier_size
                .max(frontier.len() as u64);
        }

        self.statistics.num_complete_allocations = allocations.len() as u64;
        self.statistics.time_spent_searching_ms = start_time.elapsed().as_millis() as u64;

        info!(
            "Explored {} states using {} (duplicate suppression: {}) and found {} complete allocations",
            self.statistics.num_states_explored,
            self.pruning_rule.name(),
            self.duplicate_suppression,
            allocations.len()
        );

        allocations
    }

    /// Logs the statistics of the most recent search, if statistic logging has been configured.
    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics.log(StatisticLogger::new(["search"]));
            log_statistic_postfix();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StateExplorer;
    use crate::basic_types::ItemSet;
    use crate::basic_types::Player;
    use crate::basic_types::Valuations;
    use crate::search::NoPruning;
    use crate::search::SearchOptions;

    fn explore(rows: Vec<Vec<f64>>, options: SearchOptions) -> (StateExplorer, usize) {
        let valuations = Valuations::new(rows).expect("valid input");
        let mut explorer = StateExplorer::new(options);
        let num_allocations = explorer.explore(&valuations).len();
        (explorer, num_allocations)
    }

    #[test]
    fn no_items_yields_the_empty_allocation() {
        let valuations = Valuations::new(vec![vec![], vec![]]).expect("valid input");
        let mut explorer = StateExplorer::new(SearchOptions::default());

        let allocations = explorer.explore(&valuations);

        assert_eq!(allocations.len(), 1);
        let allocation = allocations.first().expect("one allocation");
        assert!(allocation.items_of(Player::A).is_empty());
        assert!(allocation.items_of(Player::B).is_empty());
        assert_eq!(explorer.statistics().num_states_explored, 1);
    }

    #[test]
    fn without_pruning_every_split_is_found() {
        let options = SearchOptions {
            optimistic_pruning: false,
            duplicate_suppression: true,
        };
        let (_, num_allocations) = explore(vec![vec![1.0; 4], vec![2.0; 4]], options);

        assert_eq!(num_allocations, 16);
    }

    #[test]
    fn duplicate_suppression_visits_each_state_once() {
        let options = SearchOptions {
            optimistic_pruning: false,
            duplicate_suppression: true,
        };
        let (explorer, _) = explore(vec![vec![1.0; 3], vec![1.0; 3]], options);

        // Every item is unassigned, given to A or given to B: 3^3 distinct states
        assert_eq!(explorer.statistics().num_states_explored, 27);
        assert!(explorer.statistics().num_duplicates_suppressed > 0);
    }

    #[test]
    fn without_duplicate_suppression_states_are_revisited() {
        let options = SearchOptions {
            optimistic_pruning: false,
            duplicate_suppression: false,
        };
        let (explorer, num_allocations) = explore(vec![vec![1.0; 3], vec![1.0; 3]], options);

        // 1 + 6 + 24 + 48 states: at depth k there are 2^k * 3!/(3-k)! orderings
        assert_eq!(explorer.statistics().num_states_explored, 79);
        assert_eq!(explorer.statistics().num_duplicates_suppressed, 0);
        assert_eq!(num_allocations, 8);
    }

    #[test]
    fn pruned_states_are_counted() {
        let (explorer, num_allocations) = explore(
            vec![vec![4.0, 5.0, 6.0, 7.0, 8.0], vec![8.0, 7.0, 6.0, 5.0, 4.0]],
            SearchOptions::default(),
        );

        assert!(explorer.statistics().num_states_pruned > 0);
        assert_eq!(
            explorer.statistics().num_complete_allocations,
            num_allocations as u64
        );
    }

    #[test]
    fn custom_pruning_rules_are_used() {
        let valuations = Valuations::new(vec![vec![1.0; 2], vec![1.0; 2]]).expect("valid input");
        let mut explorer = StateExplorer::with_pruning_rule(NoPruning, true);

        let allocations = explorer.explore(&valuations);

        assert_eq!(allocations.len(), 4);
        assert!(allocations
            .iter()
            .any(|allocation| allocation.items_of(Player::A) == ItemSet::all(2)));
    }
}
