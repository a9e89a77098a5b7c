//! Textual presentation of the selected allocation.

use std::fmt::Write;

use crate::basic_types::BestAllocation;
use crate::basic_types::Player;
use crate::basic_types::Valuations;

/// The message reported when no allocation gives both players a non-empty bundle.
pub const NO_FAIR_ALLOCATION: &str = "No fair allocation exists";

/// Formats the bundle and value of each player, one line per player; or [`NO_FAIR_ALLOCATION`]
/// if `best` is [`None`].
///
/// ```rust
/// # use fair_split::basic_types::Valuations;
/// # use fair_split::optimisation::select_egalitarian;
/// # use fair_split::report::format_report;
/// # use fair_split::search::search_allocations;
/// # use fair_split::search::SearchOptions;
/// let valuations = Valuations::new(vec![
///     vec![4.0, 5.0, 6.0, 7.0, 8.0],
///     vec![8.0, 7.0, 6.0, 5.0, 4.0],
/// ])
/// .unwrap();
/// let allocations = search_allocations(&valuations, SearchOptions::default());
/// let best = select_egalitarian(&allocations, &valuations);
///
/// assert_eq!(
///     format_report(best.as_ref(), &valuations),
///     "Player 0 gets items [3, 4] with value 15\nPlayer 1 gets items [0, 1, 2] with value 21\n"
/// );
/// ```
pub fn format_report(best: Option<&BestAllocation>, valuations: &Valuations) -> String {
    let Some(best) = best else {
        return format!("{NO_FAIR_ALLOCATION}\n");
    };

    let mut report = String::new();
    for player in Player::BOTH {
        let items = best.items_of(player);
        // Writing to a String cannot fail
        let _ = writeln!(
            report,
            "{player} gets items {items} with value {}",
            valuations.value_of(player, items)
        );
    }
    report
}

#[cfg(test)]
mod tests {
    use super::format_report;
    use crate::basic_types::BestAllocation;
    use crate::basic_types::CompleteAllocation;
    use crate::basic_types::Valuations;

    #[test]
    fn fractional_values_are_reported() {
        let valuations =
            Valuations::new(vec![vec![0.5, 1.25], vec![2.0, 0.0]]).expect("valid input");
        let allocation =
            CompleteAllocation::new([1].into_iter().collect(), [0].into_iter().collect());
        let best = BestAllocation::new(allocation, 1.25);

        assert_eq!(
            format_report(Some(&best), &valuations),
            "Player 0 gets items [1] with value 1.25\nPlayer 1 gets items [0] with value 2\n"
        );
    }

    #[test]
    fn a_missing_allocation_is_reported() {
        let valuations = Valuations::new(vec![vec![1.0], vec![1.0]]).expect("valid input");

        assert_eq!(
            format_report(None, &valuations),
            "No fair allocation exists\n"
        );
    }
}
