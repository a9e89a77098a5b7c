//! The exhaustive search over the ways of splitting the items between the two players.
//!
//! The [`StateExplorer`] performs a breadth-first traversal of [`AllocationState`]s. Two rules
//! keep the traversal tractable, and both can be toggled through [`SearchOptions`]:
//! - [`OptimisticFeasibility`] discards states in which a player can no longer reach half of its
//!   total value, even when receiving every remaining item;
//! - the [`Frontier`] suppresses states for which an equivalent state is already pending.
//!
//! Disabling both rules results in a plain breadth-first enumeration which visits every ordering
//! of the item assignments, which quickly becomes infeasible beyond a handful of items.
mod allocation_state;
mod frontier;
mod pruning;
mod search_options;
mod search_statistics;
mod state_explorer;

pub use allocation_state::AllocationState;
pub use frontier::Frontier;
pub use pruning::NoPruning;
pub use pruning::OptimisticFeasibility;
pub use pruning::PruningRule;
pub use search_options::SearchOptions;
pub use search_statistics::SearchStatistics;
pub use state_explorer::search_allocations;
pub use state_explorer::StateExplorer;
