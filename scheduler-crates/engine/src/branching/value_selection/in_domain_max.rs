use crate::branching::value_selection::ValueSelector;
use crate::branching::SelectionContext;
use crate::engine::predicates::Predicate;
use crate::engine::variables::DomainId;

/// [`ValueSelector`] which chooses to assign the provided variable to its upper-bound.
#[derive(Debug, Copy, Clone)]
pub struct InDomainMax;

impl ValueSelector<DomainId> for InDomainMax {
    fn select_value(
        &mut self,
        context: &mut SelectionContext,
        decision_variable: DomainId,
    ) -> Predicate {
        Predicate::LowerBound {
            domain_id: decision_variable,
            lower_bound: context.upper_bound(decision_variable) as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_correct_predicate() {
        let assignments = SelectionContext::create_for_testing(vec![(0, 10)]);
        let mut context = SelectionContext::new(&assignments);
        let domain_ids = context.get_domains().collect::<Vec<_>>();

        let mut selector = InDomainMax;

        let selected_predicate = selector.select_value(&mut context, domain_ids[0]);
        assert_eq!(
            selected_predicate,
            Predicate::LowerBound {
                domain_id: domain_ids[0],
                lower_bound: 10
            }
        );
    }
}
