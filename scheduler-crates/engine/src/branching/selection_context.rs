use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::Assignments;
#[cfg(doc)]
use crate::branching::Brancher;

/// The read-only view on the current domains which is provided to a [`Brancher`].
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    assignments: &'a Assignments,
}

impl<'a> SelectionContext<'a> {
    pub(crate) fn new(assignments: &'a Assignments) -> Self {
        SelectionContext { assignments }
    }

    /// Returns the difference between the upper-bound and the lower-bound of the provided
    /// variable.
    pub fn get_size_of_domain<Var: IntegerVariable>(&self, var: Var) -> i64 {
        var.upper_bound(self.assignments) - var.lower_bound(self.assignments)
    }

    /// Returns the lower bound of the provided variable.
    pub fn lower_bound<Var: IntegerVariable>(&self, var: Var) -> i64 {
        var.lower_bound(self.assignments)
    }

    /// Returns the upper bound of the provided variable.
    pub fn upper_bound<Var: IntegerVariable>(&self, var: Var) -> i64 {
        var.upper_bound(self.assignments)
    }

    /// Returns whether the provided variable is fixed to a single value.
    pub fn is_integer_fixed<Var: IntegerVariable>(&self, var: Var) -> bool {
        self.lower_bound(var.clone()) == self.upper_bound(var)
    }

    /// Returns all currently defined [`DomainId`]s.
    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> + '_ {
        self.assignments.get_domains()
    }
}

#[cfg(test)]
impl SelectionContext<'_> {
    pub(crate) fn create_for_testing(domains: Vec<(i32, i32)>) -> Assignments {
        let mut assignments = Assignments::default();

        for (lower_bound, upper_bound) in domains {
            let _ = assignments.grow(lower_bound, upper_bound);
        }

        assignments
    }
}
