use crate::basic_types::Inconsistency;
use crate::engine::variables::DomainId;
use crate::engine::variables::TightenableVariable;
use crate::engine::Assignments;

/// A bound on a single integer variable, either `[x >= c]` or `[x <= c]`.
///
/// Decisions of a [`crate::branching::Brancher`] are expressed as predicates.
#[derive(Clone, PartialEq, Eq, Copy, Hash)]
pub enum Predicate {
    LowerBound {
        domain_id: DomainId,
        lower_bound: i32,
    },
    UpperBound {
        domain_id: DomainId,
        upper_bound: i32,
    },
}

impl Predicate {
    pub fn get_domain(&self) -> DomainId {
        match *self {
            Predicate::LowerBound { domain_id, .. } | Predicate::UpperBound { domain_id, .. } => {
                domain_id
            }
        }
    }

    /// Returns the predicate which holds exactly when `self` does not.
    pub fn negate(&self) -> Predicate {
        match *self {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => Predicate::UpperBound {
                domain_id,
                upper_bound: lower_bound - 1,
            },
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => Predicate::LowerBound {
                domain_id,
                lower_bound: upper_bound + 1,
            },
        }
    }

    /// Whether the predicate holds for every value left in the domain.
    pub(crate) fn is_satisfied(&self, assignments: &Assignments) -> bool {
        match *self {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => assignments.get_lower_bound(domain_id) >= lower_bound,
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => assignments.get_upper_bound(domain_id) <= upper_bound,
        }
    }

    /// Restricts the domain so that the predicate holds.
    pub(crate) fn apply(&self, assignments: &mut Assignments) -> Result<bool, Inconsistency> {
        match *self {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => domain_id.set_lower_bound(assignments, i64::from(lower_bound)),
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => domain_id.set_upper_bound(assignments, i64::from(upper_bound)),
        }
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => write!(f, "[{domain_id} >= {lower_bound}]"),
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => write!(f, "[{domain_id} <= {upper_bound}]"),
        }
    }
}

impl std::fmt::Debug for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_splits_the_domain() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 5);

        let predicate = Predicate::LowerBound {
            domain_id: x,
            lower_bound: 5,
        };
        let negated = predicate.negate();

        assert_eq!(
            negated,
            Predicate::UpperBound {
                domain_id: x,
                upper_bound: 4
            }
        );
        assert_eq!(negated.negate(), predicate);

        let _ = negated.apply(&mut assignments).expect("non-empty domain");
        assert!(negated.is_satisfied(&assignments));
        assert!(!predicate.is_satisfied(&assignments));
        assert_eq!(predicate.apply(&mut assignments), Err(Inconsistency));
    }

    #[test]
    fn display_names_the_domain() {
        let predicate = Predicate::UpperBound {
            domain_id: DomainId::new(3),
            upper_bound: -1,
        };

        assert_eq!(predicate.to_string(), "[x3 <= -1]");
    }
}
