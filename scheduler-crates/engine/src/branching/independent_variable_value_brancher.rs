use std::marker::PhantomData;

use crate::branching::value_selection::InDomainMax;
use crate::branching::value_selection::ValueSelector;
use crate::branching::variable_selection::InputOrder;
use crate::branching::variable_selection::VariableSelector;
use crate::branching::Brancher;
use crate::branching::SelectionContext;
use crate::engine::predicates::Predicate;
use crate::engine::variables::DomainId;
use crate::engine::Assignments;

/// Picks a variable with its [`VariableSelector`], then asks its [`ValueSelector`] how to split
/// the domain of that variable. The value choice does not influence the variable choice.
#[derive(Debug)]
pub struct IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect> {
    variable_selector: VariableSelect,
    value_selector: ValueSelect,
    variable_type: PhantomData<Var>,
}

impl<Var, VariableSelect, ValueSelect>
    IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector<Var>,
    ValueSelect: ValueSelector<Var>,
{
    pub fn new(variable_selector: VariableSelect, value_selector: ValueSelect) -> Self {
        IndependentVariableValueBrancher {
            variable_selector,
            value_selector,
            variable_type: PhantomData,
        }
    }
}

impl IndependentVariableValueBrancher<DomainId, InputOrder<DomainId>, InDomainMax> {
    /// Creates a [`Brancher`] which branches on every variable known to `assignments` in the order
    /// in which they were created, assigning each to its upper bound.
    pub(crate) fn default_over_all_variables(assignments: &Assignments) -> Self {
        let variables = assignments.get_domains().collect::<Vec<_>>();
        IndependentVariableValueBrancher::new(InputOrder::new(&variables), InDomainMax)
    }
}

impl<Var, VariableSelect, ValueSelect> Brancher
    for IndependentVariableValueBrancher<Var, VariableSelect, ValueSelect>
where
    VariableSelect: VariableSelector<Var>,
    ValueSelect: ValueSelector<Var>,
{
    fn next_decision(&mut self, context: &mut SelectionContext) -> Option<Predicate> {
        self.variable_selector
            .select_variable(context)
            .map(|variable| self.value_selector.select_value(context, variable))
    }
}
