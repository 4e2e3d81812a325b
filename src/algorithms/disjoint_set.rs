/// Implements a disjoint-set (union-find) structure over the integers 0..n
///
/// Union by size and path halving give near-constant amortized cost per operation.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    count: usize,
}

impl DisjointSet {
    /// Allocates a new instance with n singleton sets
    pub fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
            size: vec![1; n],
            count: n,
        }
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Indicates whether there are no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets
    pub fn n_sets(&self) -> usize {
        self.count
    }

    /// Returns the representative of the set containing x
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Returns the representative of the set containing x without compressing the path
    pub fn root(&self, mut x: usize) -> usize {
        while self.parent[x] != x {
            x = self.parent[x];
        }
        x
    }

    /// Merges the sets containing a and b; returns false if they were already merged
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let (mut ra, mut rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.count -= 1;
        true
    }

    /// Indicates whether a and b are in the same set
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Returns the number of elements in the set containing x
    pub fn set_size(&mut self, x: usize) -> usize {
        let r = self.find(x);
        self.size[r]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::DisjointSet;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    #[test]
    fn union_and_find_work() {
        let mut ds = DisjointSet::new(6);
        assert_eq!(ds.len(), 6);
        assert!(!ds.is_empty());
        assert_eq!(ds.n_sets(), 6);
        assert!(ds.union(0, 1));
        assert!(ds.union(2, 3));
        assert!(!ds.union(1, 0));
        assert_eq!(ds.n_sets(), 4);
        assert!(ds.connected(0, 1));
        assert!(!ds.connected(1, 2));
        assert!(ds.union(1, 3));
        assert!(ds.connected(0, 2));
        assert_eq!(ds.set_size(3), 4);
        assert_eq!(ds.set_size(5), 1);
        assert_eq!(ds.root(0), ds.root(2));
        assert_ne!(ds.root(4), ds.root(5));
        assert!(DisjointSet::new(0).is_empty());
    }

    // labels the connected components with a breadth-first search
    fn components(n: usize, edges: &[(usize, usize)]) -> Vec<usize> {
        let mut adj = vec![Vec::new(); n];
        for &(a, b) in edges {
            adj[a].push(b);
            adj[b].push(a);
        }
        let mut label = vec![usize::MAX; n];
        for s in 0..n {
            if label[s] != usize::MAX {
                continue;
            }
            label[s] = s;
            let mut queue = VecDeque::from([s]);
            while let Some(u) = queue.pop_front() {
                for &v in &adj[u] {
                    if label[v] == usize::MAX {
                        label[v] = s;
                        queue.push_back(v);
                    }
                }
            }
        }
        label
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Property: union-find connectivity equals graph connectivity
        #[test]
        fn connectivity_matches_breadth_first_search(
            n in 1usize..40,
            raw in prop::collection::vec((0usize..40, 0usize..40), 0..60),
        ) {
            let edges: Vec<_> = raw.into_iter().map(|(a, b)| (a % n, b % n)).collect();
            let mut ds = DisjointSet::new(n);
            for &(a, b) in &edges {
                ds.union(a, b);
            }
            let label = components(n, &edges);
            for a in 0..n {
                for b in 0..n {
                    prop_assert_eq!(ds.connected(a, b), label[a] == label[b]);
                }
            }
            let mut distinct = label.clone();
            distinct.sort();
            distinct.dedup();
            prop_assert_eq!(ds.n_sets(), distinct.len());
        }
    }
}
