use log::debug;

use super::Egalitarian;
use super::InOrderTieBreaker;
use super::NashWelfare;
use super::Objective;
use super::TieBreaker;
use crate::basic_types::AllocationSet;
use crate::basic_types::BestAllocation;
use crate::basic_types::Valuations;

/// Selects the allocation which maximises `objective`.
///
/// Allocations in which either player receives nothing are not considered; [`None`] is returned
/// if no allocation remains. Among allocations with the same score, the first one in the
/// canonical order of the [`AllocationSet`] is selected.
pub fn select_best(
    allocations: &AllocationSet,
    valuations: &Valuations,
    objective: &dyn Objective,
) -> Option<BestAllocation> {
    let mut tie_breaker = InOrderTieBreaker::new();

    allocations
        .iter()
        .filter(|allocation| allocation.gives_both_players_items())
        .for_each(|allocation| {
            tie_breaker.consider(allocation, objective.score(allocation, valuations))
        });

    let best = tie_breaker.select()?;
    let score = objective.score(best, valuations);
    debug!("Selected {best:?} with {} welfare {score}", objective.name());

    Some(BestAllocation::new(*best, score))
}

/// Selects the allocation maximising the minimum value received by either player.
///
/// ```rust
/// # use fair_split::basic_types::Player;
/// # use fair_split::basic_types::Valuations;
/// # use fair_split::optimisation::select_egalitarian;
/// # use fair_split::search::search_allocations;
/// # use fair_split::search::SearchOptions;
/// let valuations = Valuations::new(vec![
///     vec![4.0, 5.0, 6.0, 7.0, 8.0],
///     vec![8.0, 7.0, 6.0, 5.0, 4.0],
/// ])
/// .unwrap();
///
/// let allocations = search_allocations(&valuations, SearchOptions::default());
/// let best = select_egalitarian(&allocations, &valuations).unwrap();
///
/// assert_eq!(best.score(), 15.0);
/// assert_eq!(best.items_of(Player::A).iter().collect::<Vec<_>>(), vec![3, 4]);
/// ```
pub fn select_egalitarian(
    allocations: &AllocationSet,
    valuations: &Valuations,
) -> Option<BestAllocation> {
    select_best(allocations, valuations, &Egalitarian)
}

/// Selects the allocation maximising the product of the values of the two players.
pub fn select_product(
    allocations: &AllocationSet,
    valuations: &Valuations,
) -> Option<BestAllocation> {
    select_best(allocations, valuations, &NashWelfare)
}

#[cfg(test)]
mod tests {
    use super::select_egalitarian;
    use super::select_product;
    use crate::basic_types::AllocationSet;
    use crate::basic_types::CompleteAllocation;
    use crate::basic_types::ItemSet;
    use crate::basic_types::Player;
    use crate::basic_types::Valuations;

    fn allocation(player_a: &[usize], player_b: &[usize]) -> CompleteAllocation {
        CompleteAllocation::new(
            player_a.iter().copied().collect(),
            player_b.iter().copied().collect(),
        )
    }

    #[test]
    fn one_sided_allocations_are_ignored() {
        let valuations = Valuations::new(vec![vec![3.0, 1.0], vec![1.0, 3.0]]).expect("valid input");
        let allocations: AllocationSet = [allocation(&[0, 1], &[]), allocation(&[], &[0, 1])]
            .into_iter()
            .collect();

        assert_eq!(select_egalitarian(&allocations, &valuations), None);
        assert_eq!(select_product(&allocations, &valuations), None);
    }

    #[test]
    fn the_objectives_can_disagree() {
        let valuations =
            Valuations::new(vec![vec![3.0, 7.0, 1.0], vec![2.0, 1.0, 2.0]]).expect("valid input");
        let balanced = allocation(&[0], &[1, 2]);
        let unbalanced = allocation(&[0, 1], &[2]);
        let allocations: AllocationSet = [balanced, unbalanced].into_iter().collect();

        let egalitarian = select_egalitarian(&allocations, &valuations).expect("feasible");
        let product = select_product(&allocations, &valuations).expect("feasible");

        // (3, 3) against (10, 2)
        assert_eq!(egalitarian.allocation(), &balanced);
        assert_eq!(egalitarian.score(), 3.0);
        assert_eq!(product.allocation(), &unbalanced);
        assert_eq!(product.score(), 20.0);
    }

    #[test]
    fn ties_are_broken_by_canonical_order() {
        let valuations = Valuations::new(vec![vec![1.0; 2], vec![1.0; 2]]).expect("valid input");
        let allocations: AllocationSet = [allocation(&[1], &[0]), allocation(&[0], &[1])]
            .into_iter()
            .collect();

        let best = select_egalitarian(&allocations, &valuations).expect("feasible");

        assert_eq!(best.items_of(Player::A), ItemSet::empty().with(0));
    }
}
