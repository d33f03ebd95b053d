use std::collections::VecDeque;

use petgraph::graph::{EdgeIndex, NodeIndex};

use crate::mol::Molecule;

/// Upper bound on the ring sizes the bounded path search will look for.
/// Closures whose smallest ring is larger fall back to the spanning-tree
/// path, so macrocycles are still reported.
pub const DEFAULT_RING_SIZE_CAP: usize = 12;

/// Smallest set of smallest rings, derived once per molecule.
///
/// One ring per non-tree edge of a BFS spanning forest: the shortest path
/// between the edge's endpoints that avoids the edge itself, closed by the
/// edge. Traversal visits nodes in parse order and neighbors in index
/// order, so the output is deterministic for a given input string.
#[derive(Debug, Clone)]
pub struct RingInfo {
    rings: Vec<Vec<NodeIndex>>,
}

impl RingInfo {
    pub fn find(mol: &Molecule) -> Self {
        Self::find_with_cap(mol, DEFAULT_RING_SIZE_CAP)
    }

    pub fn find_with_cap(mol: &Molecule, cap: usize) -> Self {
        let n = mol.atom_count();
        if n == 0 || mol.bond_count() == 0 {
            return Self { rings: vec![] };
        }

        let (parent, tree_edges) = spanning_forest(mol);

        let mut rings: Vec<Vec<NodeIndex>> = Vec::new();
        let mut seen: Vec<Vec<usize>> = Vec::new();

        for edge in mol.bonds() {
            if tree_edges[edge.index()] {
                continue;
            }
            let (u, v) = match mol.bond_endpoints(edge) {
                Some(pair) => pair,
                None => continue,
            };
            let (u, v) = if u.index() <= v.index() { (u, v) } else { (v, u) };

            let ring = match shortest_path_avoiding(mol, u, v, edge, cap) {
                Some(path) => path,
                None => tree_path(&parent, u, v),
            };
            if ring.len() < 3 {
                continue;
            }

            let mut key: Vec<usize> = ring.iter().map(|i| i.index()).collect();
            key.sort_unstable();
            if seen.contains(&key) {
                continue;
            }
            seen.push(key);
            rings.push(normalize_ring(&ring));
        }

        rings.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        Self { rings }
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// Rings as cyclic atom paths, sorted by (size, atom indices).
    pub fn rings(&self) -> &[Vec<NodeIndex>] {
        &self.rings
    }

    pub fn is_ring_atom(&self, atom: NodeIndex) -> bool {
        self.rings.iter().any(|ring| ring.contains(&atom))
    }

    pub fn is_ring_bond(&self, a: NodeIndex, b: NodeIndex) -> bool {
        self.rings.iter().any(|ring| {
            let len = ring.len();
            (0..len).any(|i| {
                let j = (i + 1) % len;
                (ring[i] == a && ring[j] == b) || (ring[i] == b && ring[j] == a)
            })
        })
    }
}

/// BFS forest over nodes in index order; returns parent pointers and a
/// tree-membership flag per edge.
fn spanning_forest(mol: &Molecule) -> (Vec<Option<NodeIndex>>, Vec<bool>) {
    let n = mol.atom_count();
    let mut parent: Vec<Option<NodeIndex>> = vec![None; n];
    let mut visited = vec![false; n];
    let mut tree_edges = vec![false; mol.bond_count()];

    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut queue = VecDeque::new();
        queue.push_back(NodeIndex::new(start));
        while let Some(cur) = queue.pop_front() {
            for nb in sorted_neighbors(mol, cur) {
                if !visited[nb.index()] {
                    visited[nb.index()] = true;
                    parent[nb.index()] = Some(cur);
                    if let Some(e) = mol.bond_between(cur, nb) {
                        tree_edges[e.index()] = true;
                    }
                    queue.push_back(nb);
                }
            }
        }
    }

    (parent, tree_edges)
}

fn sorted_neighbors(mol: &Molecule, idx: NodeIndex) -> Vec<NodeIndex> {
    let mut n: Vec<NodeIndex> = mol.neighbors(idx).collect();
    n.sort_unstable();
    n
}

/// Shortest `from` → `to` path not using `avoid`, as a node list including
/// both endpoints. `None` when no path of at most `cap` nodes exists.
fn shortest_path_avoiding(
    mol: &Molecule,
    from: NodeIndex,
    to: NodeIndex,
    avoid: EdgeIndex,
    cap: usize,
) -> Option<Vec<NodeIndex>> {
    let n = mol.atom_count();
    let mut dist = vec![u32::MAX; n];
    let mut pred: Vec<Option<NodeIndex>> = vec![None; n];
    dist[from.index()] = 0;

    let mut queue = VecDeque::new();
    queue.push_back(from);

    while let Some(cur) = queue.pop_front() {
        let d = dist[cur.index()];
        // Ring size is path length in nodes; stop expanding at the cap.
        if d as usize + 1 >= cap {
            continue;
        }
        for nb in sorted_neighbors(mol, cur) {
            if mol.bond_between(cur, nb) == Some(avoid) {
                continue;
            }
            if dist[nb.index()] == u32::MAX {
                dist[nb.index()] = d + 1;
                pred[nb.index()] = Some(cur);
                if nb == to {
                    let mut path = vec![to];
                    let mut walk = to;
                    while let Some(p) = pred[walk.index()] {
                        path.push(p);
                        walk = p;
                    }
                    path.reverse();
                    return Some(path);
                }
                queue.push_back(nb);
            }
        }
    }

    None
}

/// Path between two nodes of the same BFS tree, via their lowest common
/// ancestor.
fn tree_path(parent: &[Option<NodeIndex>], u: NodeIndex, v: NodeIndex) -> Vec<NodeIndex> {
    let ancestors = |mut x: NodeIndex| -> Vec<NodeIndex> {
        let mut chain = vec![x];
        while let Some(p) = parent[x.index()] {
            chain.push(p);
            x = p;
        }
        chain
    };

    let up = ancestors(u);
    let vp = ancestors(v);

    let lca_pos = vp
        .iter()
        .position(|a| up.contains(a))
        .unwrap_or(vp.len() - 1);
    let lca = vp[lca_pos];

    let mut path: Vec<NodeIndex> = up.iter().take_while(|&&a| a != lca).copied().collect();
    path.push(lca);
    for &a in vp[..lca_pos].iter().rev() {
        path.push(a);
    }
    path
}

/// Rotates the cycle to start at its smallest atom index and fixes the
/// direction, so equal rings compare equal.
fn normalize_ring(ring: &[NodeIndex]) -> Vec<NodeIndex> {
    if ring.is_empty() {
        return vec![];
    }
    let min_pos = ring
        .iter()
        .enumerate()
        .min_by_key(|&(_, idx)| idx)
        .map(|(i, _)| i)
        .unwrap_or(0);

    let len = ring.len();
    let mut normalized = Vec::with_capacity(len);
    for i in 0..len {
        normalized.push(ring[(min_pos + i) % len]);
    }

    if len > 2 && normalized[1] > normalized[len - 1] {
        normalized[1..].reverse();
    }

    normalized
}
