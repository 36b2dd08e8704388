//! An integer linear program with a maximised objective. This is the form in which a
//! [`SolvingEngine`](crate::solving_engine::SolvingEngine) receives the scheduling model.

/// Index of a variable in a [`LinearProblem`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId(usize);

impl VariableId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariableKind {
    /// A variable which is either 0 or 1.
    Binary,
    /// An integer variable within `[lower, upper]`.
    Integer { lower: i64, upper: i64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub kind: VariableKind,
}

impl Variable {
    pub fn bounds(&self) -> (i64, i64) {
        match self.kind {
            VariableKind::Binary => (0, 1),
            VariableKind::Integer { lower, upper } => (lower, upper),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relation {
    LessThanOrEqual,
    Equal,
    GreaterThanOrEqual,
}

/// A weighted sum of variables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinearExpression {
    terms: Vec<(i64, VariableId)>,
}

impl LinearExpression {
    pub fn new() -> Self {
        LinearExpression::default()
    }

    pub fn with_term(mut self, coefficient: i64, variable: VariableId) -> Self {
        self.add_term(coefficient, variable);
        self
    }

    pub fn add_term(&mut self, coefficient: i64, variable: VariableId) {
        self.terms.push((coefficient, variable));
    }

    pub fn terms(&self) -> &[(i64, VariableId)] {
        &self.terms
    }

    /// The value of the expression for the given variable values.
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|&(coefficient, variable)| coefficient as f64 * values[variable.index()])
            .sum()
    }
}

impl FromIterator<(i64, VariableId)> for LinearExpression {
    fn from_iter<T: IntoIterator<Item = (i64, VariableId)>>(iter: T) -> Self {
        LinearExpression {
            terms: iter.into_iter().collect(),
        }
    }
}

/// `expression (<= | = | >=) rhs`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearConstraint {
    pub expression: LinearExpression,
    pub relation: Relation,
    pub rhs: i64,
}

impl LinearConstraint {
    pub fn is_satisfied_by(&self, values: &[f64]) -> bool {
        let lhs = self.expression.evaluate(values);
        let rhs = self.rhs as f64;
        match self.relation {
            Relation::LessThanOrEqual => lhs <= rhs,
            Relation::Equal => lhs == rhs,
            Relation::GreaterThanOrEqual => lhs >= rhs,
        }
    }
}

/// Variables, linear constraints and a linear objective which is maximised.
///
/// A problem may also carry a branching order: the variables an engine should decide on first, in
/// that order. It does not change the solutions of the problem, and engines are free to ignore it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinearProblem {
    variables: Vec<Variable>,
    constraints: Vec<LinearConstraint>,
    objective: LinearExpression,
    branching_order: Vec<VariableId>,
}

impl LinearProblem {
    pub fn new() -> Self {
        LinearProblem::default()
    }

    pub fn add_binary(&mut self, name: impl Into<String>) -> VariableId {
        self.add_variable(name.into(), VariableKind::Binary)
    }

    pub fn add_integer(&mut self, name: impl Into<String>, lower: i64, upper: i64) -> VariableId {
        self.add_variable(name.into(), VariableKind::Integer { lower, upper })
    }

    fn add_variable(&mut self, name: String, kind: VariableKind) -> VariableId {
        self.variables.push(Variable { name, kind });
        VariableId(self.variables.len() - 1)
    }

    pub fn add_constraint(&mut self, expression: LinearExpression, relation: Relation, rhs: i64) {
        self.constraints.push(LinearConstraint {
            expression,
            relation,
            rhs,
        });
    }

    /// Replace the objective which is maximised.
    pub fn maximise(&mut self, objective: LinearExpression) {
        self.objective = objective;
    }

    pub fn set_branching_order(&mut self, variables: Vec<VariableId>) {
        self.branching_order = variables;
    }

    pub fn branching_order(&self) -> &[VariableId] {
        &self.branching_order
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, variable: VariableId) -> &Variable {
        &self.variables[variable.index()]
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn constraints(&self) -> &[LinearConstraint] {
        &self.constraints
    }

    pub fn objective(&self) -> &LinearExpression {
        &self.objective
    }
}
