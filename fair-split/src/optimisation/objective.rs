use std::fmt::Display;

use clap::ValueEnum;

use crate::basic_types::CompleteAllocation;
use crate::basic_types::Player;
use crate::basic_types::Valuations;

/// A welfare function which is maximised over the complete allocations.
pub trait Objective {
    /// The name of the objective, used when logging.
    fn name(&self) -> &str;

    /// The welfare of `allocation`; higher is better.
    fn score(&self, allocation: &CompleteAllocation, valuations: &Valuations) -> f64;
}

/// Egalitarian welfare: the value of the worst-off player.
#[derive(Clone, Copy, Debug, Default)]
pub struct Egalitarian;

impl Objective for Egalitarian {
    fn name(&self) -> &str {
        "egalitarian"
    }

    fn score(&self, allocation: &CompleteAllocation, valuations: &Valuations) -> f64 {
        allocation
            .value_for(Player::A, valuations)
            .min(allocation.value_for(Player::B, valuations))
    }
}

/// Nash welfare: the product of the (additive) values of the two players.
#[derive(Clone, Copy, Debug, Default)]
pub struct NashWelfare;

impl Objective for NashWelfare {
    fn name(&self) -> &str {
        "product"
    }

    fn score(&self, allocation: &CompleteAllocation, valuations: &Valuations) -> f64 {
        allocation.value_for(Player::A, valuations) * allocation.value_for(Player::B, valuations)
    }
}

/// The objectives which can be selected from the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ObjectiveKind {
    /// Maximise the minimum value received by either player.
    #[default]
    Egalitarian,
    /// Maximise the product of the values of both players.
    Product,
}

impl ObjectiveKind {
    pub fn objective(self) -> &'static dyn Objective {
        match self {
            ObjectiveKind::Egalitarian => &Egalitarian,
            ObjectiveKind::Product => &NashWelfare,
        }
    }
}

impl Display for ObjectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.objective().name())
    }
}

#[cfg(test)]
mod tests {
    use super::Egalitarian;
    use super::NashWelfare;
    use super::Objective;
    use super::ObjectiveKind;
    use crate::basic_types::CompleteAllocation;
    use crate::basic_types::Valuations;

    #[test]
    fn scores_use_the_sum_of_item_values() {
        let valuations =
            Valuations::new(vec![vec![2.0, 3.0, 4.0], vec![4.0, 3.0, 2.0]]).expect("valid input");
        let allocation =
            CompleteAllocation::new([1, 2].into_iter().collect(), [0].into_iter().collect());

        assert_eq!(Egalitarian.score(&allocation, &valuations), 4.0);
        assert_eq!(NashWelfare.score(&allocation, &valuations), 28.0);
    }

    #[test]
    fn kinds_map_to_their_objective() {
        assert_eq!(ObjectiveKind::Egalitarian.to_string(), "egalitarian");
        assert_eq!(ObjectiveKind::Product.to_string(), "product");
        assert_eq!(ObjectiveKind::default(), ObjectiveKind::Egalitarian);
    }
}
