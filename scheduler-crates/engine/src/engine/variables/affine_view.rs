use crate::basic_types::Inconsistency;
use crate::engine::variables::DomainId;
use crate::engine::variables::IntegerVariable;
use crate::engine::variables::TightenableVariable;
use crate::engine::variables::TransformableVariable;
use crate::engine::Assignments;
use crate::math::num_ext::NumExt;

/// Models the constraint `y = ax`, where `x` is the underlying domain and `a` the scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AffineView {
    inner: DomainId,
    scale: i32,
}

impl AffineView {
    pub fn new(inner: DomainId, scale: i32) -> Self {
        AffineView { inner, scale }
    }

    pub fn scale(&self) -> i32 {
        self.scale
    }
}

impl IntegerVariable for AffineView {
    fn lower_bound(&self, assignments: &Assignments) -> i64 {
        let scale = i64::from(self.scale);
        if scale < 0 {
            scale * self.inner.upper_bound(assignments)
        } else {
            scale * self.inner.lower_bound(assignments)
        }
    }

    fn upper_bound(&self, assignments: &Assignments) -> i64 {
        let scale = i64::from(self.scale);
        if scale < 0 {
            scale * self.inner.lower_bound(assignments)
        } else {
            scale * self.inner.upper_bound(assignments)
        }
    }

    fn domain_id(&self) -> DomainId {
        self.inner
    }
}

impl TightenableVariable for AffineView {
    fn set_lower_bound(
        &self,
        assignments: &mut Assignments,
        bound: i64,
    ) -> Result<bool, Inconsistency> {
        let scale = i64::from(self.scale);
        match scale {
            0 if bound > 0 => Err(Inconsistency),
            0 => Ok(false),
            _ if scale > 0 => self
                .inner
                .set_lower_bound(assignments, NumExt::div_ceil(bound, scale)),
            _ => self
                .inner
                .set_upper_bound(assignments, NumExt::div_floor(bound, scale)),
        }
    }

    fn set_upper_bound(
        &self,
        assignments: &mut Assignments,
        bound: i64,
    ) -> Result<bool, Inconsistency> {
        let scale = i64::from(self.scale);
        match scale {
            0 if bound < 0 => Err(Inconsistency),
            0 => Ok(false),
            _ if scale > 0 => self
                .inner
                .set_upper_bound(assignments, NumExt::div_floor(bound, scale)),
            _ => self
                .inner
                .set_lower_bound(assignments, NumExt::div_ceil(bound, scale)),
        }
    }
}

impl TransformableVariable for AffineView {
    fn scaled(&self, scale: i32) -> AffineView {
        AffineView::new(self.inner, self.scale * scale)
    }
}
