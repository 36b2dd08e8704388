//! Provides the [`ValueSelector`] trait which is required for value selectors to implement; the
//! main method in this trait is the [`ValueSelector::select_value`] method.
mod in_domain_max;
mod in_domain_min;

pub use in_domain_max::InDomainMax;
pub use in_domain_min::InDomainMin;

use crate::branching::SelectionContext;
use crate::engine::predicates::Predicate;

/// A trait containing the interface for [`ValueSelector`]s, specifying the appropriate hooks into
/// the solver and the methods required for selecting a value for a given variable.
pub trait ValueSelector<Var> {
    /// Determines which value in the domain of `decision_variable` to branch next on. The
    /// returned [`Predicate`] is the decision; its negation is explored on backtracking.
    fn select_value(&mut self, context: &mut SelectionContext, decision_variable: Var)
        -> Predicate;
}
