//! Contains the propagators which are used by the [`crate::constraints`].
pub(crate) mod arithmetic;

use std::fmt::Debug;

use crate::basic_types::PropagationStatusCP;
use crate::engine::variables::DomainId;
use crate::engine::Assignments;

/// A propagator removes values from the domains of its variables which cannot be part of a
/// solution of its constraint.
///
/// A propagator is re-run whenever the bounds of one of the domains reported by
/// [`Propagator::watched_domains`] change. It does not need to reach its own fixpoint in a single
/// call: its own modifications also cause it to be scheduled again.
pub(crate) trait Propagator: Debug {
    /// The name of the propagator, used for logging.
    fn name(&self) -> &str;

    /// The domains which should trigger this propagator when their bounds change.
    fn watched_domains(&self) -> Vec<DomainId>;

    /// Tighten the bounds of the variables in `assignments`. Returns an error if the current
    /// bounds cannot satisfy the constraint.
    fn propagate(&mut self, assignments: &mut Assignments) -> PropagationStatusCP;
}
