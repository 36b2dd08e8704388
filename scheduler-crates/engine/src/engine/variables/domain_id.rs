use std::fmt::Display;

use crate::basic_types::Inconsistency;
use crate::containers::StorageKey;
use crate::engine::variables::AffineView;
use crate::engine::variables::IntegerVariable;
use crate::engine::variables::TightenableVariable;
use crate::engine::variables::TransformableVariable;
use crate::engine::Assignments;

/// A structure which represents the most basic [`IntegerVariable`]; it is simply the id which
/// links to a domain (hence the name).
#[derive(Clone, PartialEq, Eq, Copy, Hash, PartialOrd, Ord)]
pub struct DomainId {
    pub id: u32,
}

impl DomainId {
    pub fn new(id: u32) -> Self {
        DomainId { id }
    }
}

impl IntegerVariable for DomainId {
    fn lower_bound(&self, assignments: &Assignments) -> i64 {
        i64::from(assignments.get_lower_bound(*self))
    }

    fn upper_bound(&self, assignments: &Assignments) -> i64 {
        i64::from(assignments.get_upper_bound(*self))
    }

    fn domain_id(&self) -> DomainId {
        *self
    }
}

impl TightenableVariable for DomainId {
    fn set_lower_bound(
        &self,
        assignments: &mut Assignments,
        bound: i64,
    ) -> Result<bool, Inconsistency> {
        assignments.tighten_lower_bound(*self, bound)
    }

    fn set_upper_bound(
        &self,
        assignments: &mut Assignments,
        bound: i64,
    ) -> Result<bool, Inconsistency> {
        assignments.tighten_upper_bound(*self, bound)
    }
}

impl TransformableVariable for DomainId {
    fn scaled(&self, scale: i32) -> AffineView {
        AffineView::new(*self, scale)
    }
}

impl StorageKey for DomainId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        DomainId { id: index as u32 }
    }
}

impl Display for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}

impl std::fmt::Debug for DomainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}
