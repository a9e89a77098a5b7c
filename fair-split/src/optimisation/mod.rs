//! Selection of the best complete allocation according to a welfare objective.
mod objective;
mod selector;
mod tie_breaking;

pub use objective::Egalitarian;
pub use objective::NashWelfare;
pub use objective::Objective;
pub use objective::ObjectiveKind;
pub use selector::select_best;
pub use selector::select_egalitarian;
pub use selector::select_product;
pub use tie_breaking::InOrderTieBreaker;
pub use tie_breaking::TieBreaker;
