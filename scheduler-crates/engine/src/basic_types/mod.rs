mod constraint_operation_error;
mod csp_solver_execution_flag;
mod propagation_status_cp;
mod solution;
mod trail;

pub use constraint_operation_error::ConstraintOperationError;
pub(crate) use csp_solver_execution_flag::CSPSolverExecutionFlag;
pub(crate) use propagation_status_cp::Inconsistency;
pub(crate) use propagation_status_cp::PropagationStatusCP;
pub use solution::Solution;
pub(crate) use trail::Trail;
