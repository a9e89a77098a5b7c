use crate::basic_types::CumulativeMovingAverage;
use crate::create_statistics_struct;
#[cfg(doc)]
use crate::search::StateExplorer;

create_statistics_struct!(
    /// Statistics of a single run of the [`StateExplorer`].
    SearchStatistics {
        /// The number of states taken from the frontier
        num_states_explored: u64,
        /// The number of states added to the frontier, including the initial state
        num_states_enqueued: u64,
        /// The number of states discarded by the pruning rule
        num_states_pruned: u64,
        /// The number of children which were not enqueued because an equivalent state was pending
        num_duplicates_suppressed: u64,
        /// The number of distinct complete allocations which survived pruning
        num_complete_allocations: u64,
        /// The largest number of states simultaneously present in the frontier
        peak_frontier_size: u64,
        /// The average number of children enqueued per branched state
        average_branching_factor: CumulativeMovingAverage,
        /// The time spent searching, in milliseconds
        time_spent_searching_ms: u64,
});
