use std::fmt::Debug;

use crate::basic_types::Inconsistency;
use crate::engine::variables::DomainId;
use crate::engine::Assignments;

/// A trait specifying the required behaviour of an integer variable such as retrieving a
/// lower-bound ([`IntegerVariable::lower_bound`]) or the underlying domain
/// ([`IntegerVariable::domain_id`]).
///
/// Bounds are reported as `i64` so that views with large coefficients do not overflow.
///
/// The trait is sealed; it is implemented by [`DomainId`] and
/// [`AffineView`](crate::variables::AffineView) only.
pub trait IntegerVariable: sealed::Sealed + Clone + Debug + 'static {
    /// Get the lower bound of the variable.
    fn lower_bound(&self, assignments: &Assignments) -> i64;

    /// Get the upper bound of the variable.
    fn upper_bound(&self, assignments: &Assignments) -> i64;

    /// The domain underlying this variable.
    fn domain_id(&self) -> DomainId;
}

/// The bound updates of an [`IntegerVariable`], which are only performed by the engine itself.
pub(crate) trait TightenableVariable: IntegerVariable {
    /// Tighten the lower bound of the variable to `bound`. Returns whether the domain changed.
    fn set_lower_bound(&self, assignments: &mut Assignments, bound: i64)
        -> Result<bool, Inconsistency>;

    /// Tighten the upper bound of the variable to `bound`. Returns whether the domain changed.
    fn set_upper_bound(&self, assignments: &mut Assignments, bound: i64)
        -> Result<bool, Inconsistency>;
}

mod sealed {
    #[allow(unreachable_pub, reason = "seals IntegerVariable outside of this crate")]
    pub trait Sealed {}

    impl Sealed for crate::engine::variables::DomainId {}
    impl Sealed for crate::engine::variables::AffineView {}
}
