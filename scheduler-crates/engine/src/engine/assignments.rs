use crate::basic_types::Inconsistency;
use crate::basic_types::Trail;
use crate::containers::KeyedVec;
use crate::engine::variables::DomainId;
use crate::engine_assert_moderate;

/// The bounds of every integer variable, together with the trail which allows the bounds to be
/// restored when backtracking.
#[derive(Clone, Default, Debug)]
pub struct Assignments {
    trail: Trail<TrailEntry>,
    domains: KeyedVec<DomainId, IntegerDomain>,
    /// The domains which were modified since the last call to
    /// [`Assignments::drain_domain_events`].
    events: Vec<DomainId>,
    is_event_pending: KeyedVec<DomainId, bool>,
}

#[derive(Clone, Copy, Debug)]
struct IntegerDomain {
    lower_bound: i32,
    upper_bound: i32,
}

/// The bounds of a domain before it was modified.
#[derive(Clone, Copy, Debug)]
struct TrailEntry {
    domain_id: DomainId,
    old_lower_bound: i32,
    old_upper_bound: i32,
}

impl Assignments {
    pub(crate) fn increase_decision_level(&mut self) {
        self.trail.increase_decision_level()
    }

    pub(crate) fn get_decision_level(&self) -> usize {
        self.trail.get_decision_level()
    }

    pub fn num_domains(&self) -> u32 {
        self.domains.len() as u32
    }

    pub fn get_domains(&self) -> impl Iterator<Item = DomainId> {
        self.domains.keys()
    }

    /// Registers the domain of a new integer variable.
    ///
    /// Note that this does _not_ allocate the information necessary for propagation; use
    /// [`crate::Solver::new_bounded_integer`] to create variables.
    pub(crate) fn grow(&mut self, lower_bound: i32, upper_bound: i32) -> DomainId {
        engine_assert_moderate!(lower_bound <= upper_bound);

        let _ = self.is_event_pending.push(false);
        self.domains.push(IntegerDomain {
            lower_bound,
            upper_bound,
        })
    }

    /// Returns the domains which were modified since the previous call, each at most once.
    pub(crate) fn drain_domain_events(&mut self) -> impl Iterator<Item = DomainId> + '_ {
        for &domain_id in self.events.iter() {
            self.is_event_pending[domain_id] = false;
        }
        self.events.drain(..)
    }
}

// methods for getting info about the domains
impl Assignments {
    pub fn get_lower_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].lower_bound
    }

    pub fn get_upper_bound(&self, domain_id: DomainId) -> i32 {
        self.domains[domain_id].upper_bound
    }

    pub fn is_domain_assigned(&self, domain_id: DomainId) -> bool {
        self.get_lower_bound(domain_id) == self.get_upper_bound(domain_id)
    }

    /// Returns the value of the domain if it is assigned, otherwise [`None`].
    pub fn get_assigned_value(&self, domain_id: DomainId) -> Option<i32> {
        self.is_domain_assigned(domain_id)
            .then(|| self.get_lower_bound(domain_id))
    }
}

// methods to change the domains
impl Assignments {
    /// Raise the lower bound of `domain_id` to `bound`.
    ///
    /// Returns `Ok(false)` if the domain already satisfies the bound and an [`Inconsistency`] if
    /// the domain would become empty.
    pub(crate) fn tighten_lower_bound(
        &mut self,
        domain_id: DomainId,
        bound: i64,
    ) -> Result<bool, Inconsistency> {
        let domain = self.domains[domain_id];
        if bound <= i64::from(domain.lower_bound) {
            return Ok(false);
        }
        if bound > i64::from(domain.upper_bound) {
            return Err(Inconsistency);
        }

        // The bound lies within the current domain and therefore fits in an i32.
        self.record_change(domain_id, domain);
        self.domains[domain_id].lower_bound = bound as i32;
        Ok(true)
    }

    /// Lower the upper bound of `domain_id` to `bound`.
    ///
    /// Returns `Ok(false)` if the domain already satisfies the bound and an [`Inconsistency`] if
    /// the domain would become empty.
    pub(crate) fn tighten_upper_bound(
        &mut self,
        domain_id: DomainId,
        bound: i64,
    ) -> Result<bool, Inconsistency> {
        let domain = self.domains[domain_id];
        if bound >= i64::from(domain.upper_bound) {
            return Ok(false);
        }
        if bound < i64::from(domain.lower_bound) {
            return Err(Inconsistency);
        }

        self.record_change(domain_id, domain);
        self.domains[domain_id].upper_bound = bound as i32;
        Ok(true)
    }

    fn record_change(&mut self, domain_id: DomainId, old_domain: IntegerDomain) {
        self.trail.push(TrailEntry {
            domain_id,
            old_lower_bound: old_domain.lower_bound,
            old_upper_bound: old_domain.upper_bound,
        });

        if !self.is_event_pending[domain_id] {
            self.is_event_pending[domain_id] = true;
            self.events.push(domain_id);
        }
    }

    /// Restore every bound which was changed above `new_decision_level`.
    pub(crate) fn synchronise(&mut self, new_decision_level: usize) {
        let domains = &mut self.domains;
        self.trail.synchronise(new_decision_level, |entry| {
            let domain = &mut domains[entry.domain_id];
            domain.lower_bound = entry.old_lower_bound;
            domain.upper_bound = entry.old_upper_bound;
        });

        // Pending events refer to changes which no longer exist.
        for domain_id in self.events.drain(..) {
            self.is_event_pending[domain_id] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tightening_is_reported_only_when_the_domain_changes() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 10);

        assert_eq!(assignments.tighten_lower_bound(x, 0), Ok(false));
        assert_eq!(assignments.tighten_lower_bound(x, 3), Ok(true));
        assert_eq!(assignments.tighten_upper_bound(x, 12), Ok(false));
        assert_eq!(assignments.tighten_upper_bound(x, 2), Err(Inconsistency));

        assert_eq!(assignments.get_lower_bound(x), 3);
        assert_eq!(assignments.get_upper_bound(x), 10);
    }

    #[test]
    fn synchronise_restores_bounds_of_higher_levels() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 10);
        let y = assignments.grow(-5, 5);

        let _ = assignments.tighten_lower_bound(x, 1);
        assignments.increase_decision_level();
        let _ = assignments.tighten_lower_bound(x, 4);
        let _ = assignments.tighten_upper_bound(y, 0);
        assignments.increase_decision_level();
        let _ = assignments.tighten_upper_bound(x, 4);

        assert_eq!(assignments.get_assigned_value(x), Some(4));

        assignments.synchronise(0);

        assert_eq!(assignments.get_decision_level(), 0);
        assert_eq!(assignments.get_lower_bound(x), 1);
        assert_eq!(assignments.get_upper_bound(x), 10);
        assert_eq!(assignments.get_upper_bound(y), 5);
    }

    #[test]
    fn domain_events_are_deduplicated() {
        let mut assignments = Assignments::default();
        let x = assignments.grow(0, 10);
        let y = assignments.grow(0, 10);

        let _ = assignments.tighten_lower_bound(x, 1);
        let _ = assignments.tighten_lower_bound(x, 2);
        let _ = assignments.tighten_upper_bound(y, 8);

        let events = assignments.drain_domain_events().collect::<Vec<_>>();
        assert_eq!(events, vec![x, y]);
        assert_eq!(assignments.drain_domain_events().count(), 0);
    }
}
