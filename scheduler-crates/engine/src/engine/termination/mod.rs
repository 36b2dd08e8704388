//! Conditions which end a search before it reaches a conclusion.

pub(crate) mod combinator;
pub(crate) mod decision_budget;
pub(crate) mod indefinite;
pub(crate) mod time_budget;

/// Polled by the solver before every decision. Once it returns `true` the search stops and reports
/// what it has found so far.
pub trait TerminationCondition {
    fn should_stop(&mut self) -> bool;

    /// Notifies the condition that the solver branched.
    fn decision_has_been_made(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        self.as_mut().is_some_and(TerminationCondition::should_stop)
    }

    fn decision_has_been_made(&mut self) {
        if let Some(condition) = self {
            condition.decision_has_been_made();
        }
    }
}
