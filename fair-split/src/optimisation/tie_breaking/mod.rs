//! Selection of a single best candidate out of a stream of scored candidates.
//!
//! Objectives frequently score several allocations equally (e.g. mirror-image splits under
//! identical valuations); a [`TieBreaker`] decides which one is reported.
//!
//! ```rust
//! # use fair_split::optimisation::InOrderTieBreaker;
//! # use fair_split::optimisation::TieBreaker;
//! let mut breaker = InOrderTieBreaker::new();
//!
//! breaker.consider("first", 10.0);
//! breaker.consider("second", 15.0);
//! breaker.consider("third", 15.0);
//!
//! assert_eq!(breaker.select(), Some("second"));
//! ```

mod in_order_tie_breaker;
mod tie_breaker;

pub use in_order_tie_breaker::InOrderTieBreaker;
pub use tie_breaker::TieBreaker;
