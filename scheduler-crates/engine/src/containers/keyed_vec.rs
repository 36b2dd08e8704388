use std::marker::PhantomData;
use std::ops::Index;
use std::ops::IndexMut;

/// A vector which is indexed by a typed key rather than a `usize`, so that, for example, a
/// [`crate::variables::DomainId`] cannot be used to look up a propagator.
///
/// ```rust
/// # use scheduler_engine::containers::KeyedVec;
/// # use scheduler_engine::variables::DomainId;
/// let mut lower_bounds: KeyedVec<DomainId, i32> = KeyedVec::default();
///
/// let x = lower_bounds.push(3);
/// let y = lower_bounds.push(-1);
///
/// assert_eq!(lower_bounds[x], 3);
/// assert_eq!(lower_bounds[y], -1);
/// assert_eq!(lower_bounds.keys().collect::<Vec<_>>(), vec![x, y]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyedVec<Key, Value> {
    values: Vec<Value>,
    key: PhantomData<Key>,
}

impl<Key, Value> Default for KeyedVec<Key, Value> {
    fn default() -> Self {
        KeyedVec {
            values: vec![],
            key: PhantomData,
        }
    }
}

impl<Key: StorageKey, Value> KeyedVec<Key, Value> {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Appends `value` and returns its key.
    pub fn push(&mut self, value: Value) -> Key {
        let key = Key::create_from_index(self.values.len());
        self.values.push(value);
        key
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> {
        (0..self.values.len()).map(Key::create_from_index)
    }
}

impl<Key, Value> FromIterator<Value> for KeyedVec<Key, Value> {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        KeyedVec {
            values: iter.into_iter().collect(),
            key: PhantomData,
        }
    }
}

impl<Key: StorageKey, Value> Index<Key> for KeyedVec<Key, Value> {
    type Output = Value;

    fn index(&self, key: Key) -> &Value {
        &self.values[key.index()]
    }
}

impl<Key: StorageKey, Value> IndexMut<Key> for KeyedVec<Key, Value> {
    fn index_mut(&mut self, key: Key) -> &mut Value {
        &mut self.values[key.index()]
    }
}

/// A handle which refers to a position in a [`KeyedVec`].
pub trait StorageKey: Copy {
    fn index(&self) -> usize;

    fn create_from_index(index: usize) -> Self;
}

impl StorageKey for usize {
    fn index(&self) -> usize {
        *self
    }

    fn create_from_index(index: usize) -> Self {
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collected_values_keep_their_order() {
        let keyed_vec = ["a", "b", "c"].into_iter().collect::<KeyedVec<usize, _>>();

        assert_eq!(keyed_vec.len(), 3);
        assert_eq!(keyed_vec[2], "c");
        assert!(KeyedVec::<usize, ()>::default().is_empty());
    }
}
