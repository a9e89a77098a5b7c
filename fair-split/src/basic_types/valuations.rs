use std::fmt::Display;

use super::Item;
use super::ItemSet;
use super::ValuationError;

/// One of the two players between which the items are split.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::A, Player::B];

    /// The row of the valuation matrix belonging to this player.
    pub fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index())
    }
}

/// The validated valuation matrix: one row per player, one column per item.
///
/// Every value is finite and non-negative, both rows have the same length, and there are at most
/// [`ItemSet::CAPACITY`] items.
#[derive(Clone, Debug, PartialEq)]
pub struct Valuations {
    rows: [Vec<f64>; 2],
    /// The value of all items, per player
    totals: [f64; 2],
}

impl Valuations {
    /// Validates the provided matrix, rejecting anything that is not a well-formed two-player
    /// valuation.
    ///
    /// ```rust
    /// # use fair_split::basic_types::Valuations;
    /// # use fair_split::basic_types::ValuationError;
    /// let valuations = Valuations::new(vec![vec![4.0, 5.0], vec![5.0, 4.0]]);
    /// assert!(valuations.is_ok());
    ///
    /// let three_players = Valuations::new(vec![vec![1.0], vec![1.0], vec![1.0]]);
    /// assert_eq!(three_players, Err(ValuationError::WrongNumberOfPlayers(3)));
    /// ```
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Valuations, ValuationError> {
        let num_players = rows.len();
        let Ok([player_a, player_b]) = <[Vec<f64>; 2]>::try_from(rows) else {
            return Err(ValuationError::WrongNumberOfPlayers(num_players));
        };
        Valuations::from_players(player_a, player_b)
    }

    /// Validates the valuations of player A and player B.
    pub fn from_players(
        player_a: Vec<f64>,
        player_b: Vec<f64>,
    ) -> Result<Valuations, ValuationError> {
        if player_a.len() != player_b.len() {
            return Err(ValuationError::MismatchedRowLengths {
                player_a: player_a.len(),
                player_b: player_b.len(),
            });
        }

        if player_a.len() > ItemSet::CAPACITY {
            return Err(ValuationError::TooManyItems {
                num_items: player_a.len(),
                max_items: ItemSet::CAPACITY,
            });
        }

        let rows = [player_a, player_b];
        for player in Player::BOTH {
            if let Some((item, &value)) = rows[player.index()]
                .iter()
                .enumerate()
                .find(|(_, value)| !value.is_finite() || **value < 0.0)
            {
                return Err(ValuationError::InvalidValue {
                    player,
                    item,
                    value,
                });
            }
        }

        let totals: [f64; 2] = [rows[0].iter().sum(), rows[1].iter().sum()];
        // Bundle values never exceed the totals
        if let Some(player) = Player::BOTH
            .into_iter()
            .find(|player| !totals[player.index()].is_finite())
        {
            return Err(ValuationError::UnboundedTotal { player });
        }

        Ok(Valuations { rows, totals })
    }

    pub fn num_items(&self) -> usize {
        self.rows[0].len()
    }

    /// The set of all items.
    pub fn items(&self) -> ItemSet {
        ItemSet::all(self.num_items())
    }

    pub fn value_of_item(&self, player: Player, item: Item) -> f64 {
        self.rows[player.index()][item]
    }

    /// The additive value which `player` assigns to the bundle `items`.
    pub fn value_of(&self, player: Player, items: ItemSet) -> f64 {
        items
            .iter()
            .map(|item| self.value_of_item(player, item))
            .sum()
    }

    /// The value which `player` assigns to receiving every item.
    pub fn total_value(&self, player: Player) -> f64 {
        self.totals[player.index()]
    }
}
