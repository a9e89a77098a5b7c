//! # Fair Split
//! Fair Split finds the best way of dividing a set of indivisible items between two players. It
//! enumerates the possible allocations with a breadth-first search, prunes the branches which can
//! no longer be fair, and selects the allocation that is best according to a welfare objective.
//!
//! Two objectives are supported:
//! * [Egalitarian welfare][crate::optimisation::Egalitarian]: maximise the value of the worst-off
//!   player.
//! * [Nash welfare][crate::optimisation::NashWelfare]: maximise the product of the values of the
//!   two players.
//!
//! # Using Fair Split
//! The first step is to **validate the valuations** of the two players; each player assigns a
//! non-negative value to every item:
//! ```rust
//! # use fair_split::basic_types::Valuations;
//! let valuations = Valuations::new(vec![
//!     vec![4.0, 5.0, 6.0, 7.0, 8.0],
//!     vec![8.0, 7.0, 6.0, 5.0, 4.0],
//! ])
//! .expect("the valuations are well-formed");
//! ```
//!
//! Then the **search** produces every complete allocation which survives the pruning rules (see
//! [`search`] for the rules and how to toggle them):
//! ```rust
//! # use fair_split::basic_types::Valuations;
//! # use fair_split::search_allocations;
//! # use fair_split::search::SearchOptions;
//! # let valuations = Valuations::new(vec![vec![4.0, 5.0, 6.0, 7.0, 8.0], vec![8.0, 7.0, 6.0, 5.0, 4.0]]).unwrap();
//! let allocations = search_allocations(&valuations, SearchOptions::default());
//! assert!(!allocations.is_empty());
//! ```
//!
//! Finally, an **objective selects** the best allocation, which can be **reported**:
//! ```rust
//! # use fair_split::basic_types::Valuations;
//! # use fair_split::search_allocations;
//! # use fair_split::search::SearchOptions;
//! # use fair_split::select_egalitarian;
//! # use fair_split::format_report;
//! # let valuations = Valuations::new(vec![vec![4.0, 5.0, 6.0, 7.0, 8.0], vec![8.0, 7.0, 6.0, 5.0, 4.0]]).unwrap();
//! # let allocations = search_allocations(&valuations, SearchOptions::default());
//! let best = select_egalitarian(&allocations, &valuations);
//!
//! print!("{}", format_report(best.as_ref(), &valuations));
//! ```
//!
//! When no allocation gives both players at least one item, the selection returns [`None`] and
//! the report states that no fair allocation exists.

pub mod asserts;
pub mod basic_types;
pub mod optimisation;
pub mod report;
pub mod search;
pub mod statistics;

pub use optimisation::select_egalitarian;
pub use optimisation::select_product;
pub use report::format_report;
pub use search::search_allocations;
