use crate::containers::KeyedVec;
use crate::engine::variables::DomainId;
use crate::engine::Assignments;
use crate::engine_assert_simple;

/// The values of all variables at the moment a solution was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    integer_values: KeyedVec<DomainId, i32>,
}

impl Solution {
    pub(crate) fn new(assignments: &Assignments) -> Solution {
        let integer_values = assignments
            .get_domains()
            .map(|domain_id| {
                engine_assert_simple!(
                    assignments.is_domain_assigned(domain_id),
                    "The solution struct expects that all integer variables are assigned."
                );
                assignments.get_lower_bound(domain_id)
            })
            .collect();

        Solution { integer_values }
    }

    pub fn num_domains(&self) -> usize {
        self.integer_values.len()
    }

    pub fn get_integer_value(&self, domain: DomainId) -> i32 {
        self.integer_values[domain]
    }
}
