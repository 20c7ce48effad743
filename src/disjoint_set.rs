use std::{collections::HashMap, hash::Hash};

/// A disjoint-set (union-find) forest over elements of type `K`, stored as a
/// map from each element to its parent.  Roots are their own parents.
///
/// Elements not yet seen are treated as singleton sets and added on first
/// use, so [`Self::find`] and [`Self::union`] never fail.
#[derive(Clone, Debug)]
pub struct DisjointSet<K> {
    parent: HashMap<K, K>,
    num_sets: usize,
}

impl<K> DisjointSet<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates a forest in which every given element is its own set.
    pub fn new(elements: impl IntoIterator<Item = K>) -> Self {
        let mut set = Self {
            parent: HashMap::new(),
            num_sets: 0,
        };
        for element in elements {
            set.insert(element);
        }
        set
    }

    /// Adds `element` as a singleton set.  Returns false if it was already
    /// present.
    pub fn insert(&mut self, element: K) -> bool {
        if self.parent.contains_key(&element) {
            return false;
        }
        self.parent.insert(element.clone(), element);
        self.num_sets += 1;
        true
    }

    /// Gets the number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Gets the number of disjoint sets.
    pub fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Returns the representative root of the set containing `element`,
    /// compressing the path so that every element visited points straight at
    /// the root afterwards.
    pub fn find(&mut self, element: &K) -> K {
        self.insert(element.clone());

        let mut root = element.clone();
        while let Some(parent) = self.parent.get(&root)
            && *parent != root
        {
            root = parent.clone();
        }

        let mut current = element.clone();
        while current != root
            && let Some(parent) = self.parent.get_mut(&current)
        {
            current = std::mem::replace(parent, root.clone());
        }
        root
    }

    /// Merges the sets containing `a` and `b` by re-parenting `a`'s root
    /// under `b`'s root.  Returns false if they were already in the same set.
    pub fn union(&mut self, a: &K, b: &K) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent.insert(root_a, root_b);
        self.num_sets -= 1;
        true
    }

    /// Checks whether `a` and `b` are in the same set.
    pub fn same_set(&mut self, a: &K, b: &K) -> bool {
        self.find(a) == self.find(b)
    }
}
