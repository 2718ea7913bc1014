//! Dependency ordering of tables.

use std::collections::HashSet;
use std::hash::Hash;

#[derive(Debug, Clone)]
struct Dependency<T> {
    item: T,
    num_prec: usize,
    succ: HashSet<T>,
}

/// Performs topological sorting, preferring insertion order among ready items.
#[derive(Debug, Clone)]
pub(crate) struct TopologicalSort<T> {
    top: Vec<Dependency<T>>,
}

impl<T> Default for TopologicalSort<T> {
    fn default() -> Self {
        Self { top: Vec::new() }
    }
}

impl<T: Hash + Eq + Clone> TopologicalSort<T> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.top.len()
    }

    fn position(&self, item: &T) -> Option<usize> {
        self.top.iter().position(|d| &d.item == item)
    }

    /// Inserts an element, returns false if it was already present
    pub(crate) fn insert(&mut self, item: T) -> bool {
        if self.position(&item).is_some() {
            return false;
        }
        self.top.push(Dependency {
            item,
            num_prec: 0,
            succ: HashSet::new(),
        });
        true
    }

    /// `prec` has to come before `succ`
    pub(crate) fn add_dependency(&mut self, prec: T, succ: T) {
        self.insert(prec.clone());
        self.insert(succ.clone());
        let Some(p) = self.position(&prec) else {
            return;
        };
        if !self.top[p].succ.insert(succ.clone()) {
            // Already registered
            return;
        }
        if let Some(s) = self.position(&succ) {
            self.top[s].num_prec += 1;
        }
    }

    /// Removes the earliest inserted item that nothing still precedes.
    ///
    /// Returns `None` with a non-zero `len` when the remaining items form a cycle.
    pub(crate) fn pop(&mut self) -> Option<T> {
        let idx = self.top.iter().position(|d| d.num_prec == 0)?;
        let dep = self.top.remove(idx);
        for s in dep.succ.iter() {
            if let Some(i) = self.position(s) {
                self.top[i].num_prec -= 1;
            }
        }
        Some(dep.item)
    }

    /// Drains the remaining items in insertion order, ignoring dependencies
    pub(crate) fn drain_remaining(&mut self) -> Vec<T> {
        self.top.drain(..).map(|d| d.item).collect()
    }
}

#[cfg(test)]
mod test {
    use super::TopologicalSort;

    #[test]
    fn iter() {
        let mut ts = TopologicalSort::<i32>::new();
        ts.add_dependency(1, 2);
        ts.add_dependency(2, 3);
        ts.add_dependency(3, 4);
        assert_eq!(Some(1), ts.pop());
        assert_eq!(Some(2), ts.pop());
        assert_eq!(Some(3), ts.pop());
        assert_eq!(Some(4), ts.pop());
        assert_eq!(None, ts.pop());
    }

    #[test]
    fn insertion_order_breaks_ties() {
        let mut ts = TopologicalSort::new();
        ts.insert("player");
        ts.insert("item");
        ts.insert("team");
        ts.add_dependency("team", "player");
        ts.add_dependency("player", "item");
        assert_eq!(ts.len(), 3);
        assert_eq!(ts.pop(), Some("team"));
        assert_eq!(ts.pop(), Some("player"));
        assert_eq!(ts.pop(), Some("item"));
    }

    #[test]
    fn cyclic_deadlock() {
        let mut ts = TopologicalSort::new();
        ts.add_dependency("stone", "sharp");
        ts.add_dependency("sharp", "water");
        ts.add_dependency("water", "sharp");
        assert_eq!(ts.pop(), Some("stone"));
        assert!(ts.pop().is_none());
        assert_eq!(ts.drain_remaining(), ["sharp", "water"]);
        assert_eq!(ts.len(), 0);
    }
}
