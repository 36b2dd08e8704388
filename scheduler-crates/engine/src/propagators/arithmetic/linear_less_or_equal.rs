use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatusCP;
use crate::engine::variables::DomainId;
use crate::engine::variables::TightenableVariable;
use crate::engine::Assignments;
use crate::propagators::Propagator;

/// Propagator for the constraint `\sum x_i <= c`.
#[derive(Clone, Debug)]
pub(crate) struct LinearLessOrEqualPropagator<Var> {
    x: Box<[Var]>,
    c: i64,
}

impl<Var> LinearLessOrEqualPropagator<Var>
where
    Var: TightenableVariable,
{
    pub(crate) fn new(x: Box<[Var]>, c: i32) -> Self {
        LinearLessOrEqualPropagator {
            x,
            c: i64::from(c),
        }
    }

    fn lower_bound_left_hand_side(&self, assignments: &Assignments) -> i64 {
        self.x.iter().map(|var| var.lower_bound(assignments)).sum()
    }
}

impl<Var> Propagator for LinearLessOrEqualPropagator<Var>
where
    Var: TightenableVariable,
{
    fn name(&self) -> &str {
        "LinearLeq"
    }

    fn watched_domains(&self) -> Vec<DomainId> {
        self.x.iter().map(|var| var.domain_id()).collect()
    }

    fn propagate(&mut self, assignments: &mut Assignments) -> PropagationStatusCP {
        let lower_bound_left_hand_side = self.lower_bound_left_hand_side(assignments);
        if self.c < lower_bound_left_hand_side {
            return Err(Inconsistency);
        }

        // Tightening an upper bound leaves the lower bound of the left-hand side unchanged, so a
        // single pass reaches the fixpoint.
        for x_i in self.x.iter() {
            let bound = self.c - (lower_bound_left_hand_side - x_i.lower_bound(assignments));

            if x_i.upper_bound(assignments) > bound {
                let _ = x_i.set_upper_bound(assignments, bound)?;
            }
        }

        Ok(())
    }
}
