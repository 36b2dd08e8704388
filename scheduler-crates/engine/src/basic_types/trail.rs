/// A stack of changes, split into one segment per decision level.
///
/// Level 0 is the root. Entries pushed at level `i` are undone when the trail is synchronised to
/// any level below `i`.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    entries: Vec<T>,
    /// `level_starts[i]` is the length of `entries` when level `i + 1` was entered.
    level_starts: Vec<usize>,
}

impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            entries: vec![],
            level_starts: vec![],
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn increase_decision_level(&mut self) {
        self.level_starts.push(self.entries.len());
    }

    pub(crate) fn get_decision_level(&self) -> usize {
        self.level_starts.len()
    }

    pub(crate) fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Go back to `decision_level`, handing every removed entry to `undo`, newest first.
    pub(crate) fn synchronise(&mut self, decision_level: usize, mut undo: impl FnMut(T)) {
        if decision_level >= self.get_decision_level() {
            return;
        }

        let keep = self.level_starts[decision_level];
        self.level_starts.truncate(decision_level);
        while self.entries.len() > keep {
            if let Some(entry) = self.entries.pop() {
                undo(entry);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_are_undone_newest_first() {
        let mut trail = Trail::default();
        trail.push(1);
        trail.increase_decision_level();
        trail.push(2);
        trail.increase_decision_level();
        trail.push(3);
        trail.push(4);

        let mut undone = vec![];
        trail.synchronise(0, |entry| undone.push(entry));

        assert_eq!(undone, vec![4, 3, 2]);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.get_decision_level(), 0);
    }

    #[test]
    fn root_entries_survive_synchronisation() {
        let mut trail = Trail::default();
        trail.push('a');
        trail.increase_decision_level();
        trail.increase_decision_level();
        trail.push('b');

        let mut undone = vec![];
        trail.synchronise(1, |entry| undone.push(entry));

        assert_eq!(undone, vec!['b']);
        assert_eq!(trail.get_decision_level(), 1);

        trail.synchronise(1, |_| panic!("nothing is left above level 1"));
        assert_eq!(trail.len(), 1);
    }
}
