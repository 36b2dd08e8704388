use std::collections::VecDeque;

use crate::containers::StorageKey;

/// Identifies a propagator which was added to the
/// [`ConstraintSatisfactionSolver`](crate::engine::ConstraintSatisfactionSolver).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct PropagatorId(pub(crate) u32);

impl StorageKey for PropagatorId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        PropagatorId(index as u32)
    }
}

/// A first-in first-out queue of propagators which contains each propagator at most once.
#[derive(Debug, Default)]
pub(crate) struct PropagatorQueue {
    queue: VecDeque<PropagatorId>,
    is_enqueued: Vec<bool>,
}

impl PropagatorQueue {
    pub(crate) fn enqueue(&mut self, propagator_id: PropagatorId) {
        let index = propagator_id.index();
        if index >= self.is_enqueued.len() {
            self.is_enqueued.resize(index + 1, false);
        }

        if !self.is_enqueued[index] {
            self.is_enqueued[index] = true;
            self.queue.push_back(propagator_id);
        }
    }

    pub(crate) fn pop(&mut self) -> Option<PropagatorId> {
        let propagator_id = self.queue.pop_front()?;
        self.is_enqueued[propagator_id.index()] = false;
        Some(propagator_id)
    }

    pub(crate) fn clear(&mut self) {
        while self.pop().is_some() {}
    }
}
