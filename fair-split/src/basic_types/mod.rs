//! The basic data types shared by the search, the objectives and the reporting.
mod allocation;
mod cumulative_moving_average;
pub(crate) mod hash_structures;
mod item_set;
mod valuation_error;
mod valuations;

pub use allocation::AllocationSet;
pub use allocation::BestAllocation;
pub use allocation::CompleteAllocation;
pub use cumulative_moving_average::CumulativeMovingAverage;
pub use item_set::Item;
pub use item_set::ItemSet;
pub use item_set::ItemSetIter;
pub use valuation_error::ValuationError;
pub use valuations::Player;
pub use valuations::Valuations;
