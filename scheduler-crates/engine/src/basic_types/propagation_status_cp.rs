/// Indicates that a propagator emptied the domain of a variable, or that it detected that the
/// current bounds cannot satisfy its constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Inconsistency;

pub(crate) type PropagationStatusCP = Result<(), Inconsistency>;
