use crate::graph::NodeId;

/// Union-find over node indices with path compression and union by rank.
///
/// Both operations advance an internal counter as documented on the methods;
/// the Kruskal engine folds that counter into its reported operation count.
pub struct DisjointSet {
    parent: Vec<NodeId>,
    rank: Vec<u32>,
    operations: u64,
}

impl DisjointSet {
    pub fn new(num_nodes: usize) -> Self {
        Self {
            parent: (0..num_nodes).collect(),
            rank: vec![0; num_nodes],
            operations: 0,
        }
    }

    /// Returns the representative of `node`'s component, counting one
    /// operation per node on the walked path (the node itself included), then
    /// re-parents the path directly to the representative.
    pub fn find(&mut self, node: NodeId) -> NodeId {
        self.operations += 1;
        let mut root = node;
        while self.parent[root] != root {
            self.operations += 1;
            root = self.parent[root];
        }
        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the components of `x` and `y`, attaching the lower-rank root
    /// under the higher-rank one; on equal ranks `y`'s root goes under `x`'s.
    /// Returns false if both were already in the same component. Counts one
    /// operation for the call itself; the two `find`s count their own.
    pub fn union(&mut self, x: NodeId, y: NodeId) -> bool {
        self.operations += 1;
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
        } else if self.rank[root_x] > self.rank[root_y] {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_y] = root_x;
            self.rank[root_x] += 1;
        }

        true
    }

    pub fn operations(&self) -> u64 {
        self.operations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_nodes_are_their_own_representative() {
        let mut sets = DisjointSet::new(3);
        assert_eq!(sets.find(0), 0);
        assert_eq!(sets.find(2), 2);
    }

    #[test]
    fn union_connects_transitively() {
        let mut sets = DisjointSet::new(4);
        assert!(sets.union(0, 1));
        assert!(sets.union(1, 2));
        assert_eq!(sets.find(0), sets.find(2));
        assert!(!sets.union(0, 2));
    }

    #[test]
    fn union_of_connected_nodes_changes_nothing() {
        let mut sets = DisjointSet::new(3);
        sets.union(0, 1);
        let root = sets.find(0);
        assert!(!sets.union(0, 1));
        assert_eq!(sets.find(0), root);
        assert_eq!(sets.find(1), root);
    }

    #[test]
    fn tie_unions_keep_the_first_arguments_root() {
        let mut sets = DisjointSet::new(2);
        assert!(sets.union(1, 0));
        assert_eq!(sets.find(0), 1);
        assert_eq!(sets.find(1), 1);
    }

    #[test]
    fn unions_attach_the_lower_rank_root_under_the_higher() {
        let mut sets = DisjointSet::new(3);
        sets.union(0, 1);
        assert!(sets.union(2, 0));
        assert_eq!(sets.find(2), 0);
    }

    #[test]
    fn counts_one_operation_per_node_on_the_find_path() {
        let mut sets = DisjointSet::new(2);
        sets.find(0);
        assert_eq!(sets.operations(), 1);
        // 1 for the union call plus one single-node find per argument
        sets.union(0, 1);
        assert_eq!(sets.operations(), 4);
        // 1 now hangs under 0, so this find walks two nodes
        sets.find(1);
        assert_eq!(sets.operations(), 6);
    }

    #[test]
    fn path_compression_shortens_later_finds() {
        let mut sets = DisjointSet::new(4);
        sets.union(0, 1);
        sets.union(2, 3);
        sets.union(1, 3);
        // 3 still points at 2, which now hangs under 0
        let before = sets.operations();
        assert_eq!(sets.find(3), 0);
        assert_eq!(sets.operations() - before, 3);
        let after_compression = sets.operations();
        assert_eq!(sets.find(3), 0);
        assert_eq!(sets.operations() - after_compression, 2);
    }
}
