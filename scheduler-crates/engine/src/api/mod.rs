mod outputs;
pub(crate) mod solver;

pub mod results {
    //! What [`Solver::satisfy`] and [`Solver::optimise`] return.
    //!
    //! Both results carry a [`Solution`] when one was found. [`OptimisationResult::Satisfiable`]
    //! holds the best solution of a search which stopped before proving it optimal.
    #[cfg(doc)]
    use crate::Solver;

    pub use crate::api::outputs::OptimisationResult;
    pub use crate::api::outputs::SatisfactionResult;
    pub use crate::basic_types::Solution;
}

pub mod variables {
    //! Contains the variables which can be used with the [`Solver`].
    //!
    //! A [`DomainId`] is created with [`Solver::new_bounded_integer`]. An [`AffineView`] scales a
    //! [`DomainId`] by a constant, which is how the terms of linear [`crate::constraints`] are
    //! expressed.
    #[cfg(doc)]
    use crate::Solver;

    pub use crate::engine::variables::AffineView;
    pub use crate::engine::variables::DomainId;
    pub use crate::engine::variables::IntegerVariable;
    pub use crate::engine::variables::TransformableVariable;
}

pub mod termination {
    //! Limits on the search of the [`Solver`].
    //!
    //! [`Option`] of a condition is itself a condition, which never stops when it is [`None`]. Use
    //! [`Combinator`] to stop on whichever of two conditions comes first.
    #[cfg(doc)]
    use crate::Solver;

    pub use crate::engine::termination::combinator::*;
    pub use crate::engine::termination::decision_budget::*;
    pub use crate::engine::termination::indefinite::*;
    pub use crate::engine::termination::time_budget::*;
    pub use crate::engine::termination::TerminationCondition;
}

pub mod predicates {
    //! Contains the bounds which the [`Solver`] branches on.
    #[cfg(doc)]
    use crate::Solver;

    pub use crate::engine::predicates::Predicate;
}
