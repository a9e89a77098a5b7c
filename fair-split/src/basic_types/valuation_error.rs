use thiserror::Error;

use super::Player;
#[cfg(doc)]
use super::Valuations;

/// Errors raised when constructing [`Valuations`] from malformed input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    /// The valuation matrix does not have exactly one row per player.
    #[error("Expected valuations for exactly 2 players, but {0} were provided")]
    WrongNumberOfPlayers(usize),
    /// The players value a different number of items.
    #[error("Player 0 values {player_a} items but player 1 values {player_b} items")]
    MismatchedRowLengths { player_a: usize, player_b: usize },
    /// A valuation is negative, infinite or not a number.
    #[error("{player} has an invalid value {value} for item {item}; values must be finite and non-negative")]
    InvalidValue {
        player: Player,
        item: usize,
        value: f64,
    },
    /// The values of a player add up to more than a floating-point number can represent.
    #[error("The values of {player} add up to a total that is not finite")]
    UnboundedTotal { player: Player },
    /// There are more items than an item set can represent.
    #[error("{num_items} items were provided but at most {max_items} are supported")]
    TooManyItems { num_items: usize, max_items: usize },
}
