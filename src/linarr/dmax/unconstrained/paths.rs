use crate::graph::{FreeTree, GraphView};
use crate::Node;

/// A maximal chain whose internal vertices all have degree 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PathKind {
    /// One endpoint is a leaf.
    Antenna,
    /// Both endpoints are hubs (degree >= 3).
    Bridge,
}

#[derive(Debug, Clone)]
pub(crate) struct PathInTree {
    pub kind: PathKind,
    /// Endpoint-to-endpoint vertex list, endpoints included.
    pub vertices: Vec<Node>,
    /// Number of internal (degree-2) vertices.
    pub num_internal: usize,
}

/// The decomposition of a tree into antennas and bridges.
#[derive(Debug, Clone)]
pub(crate) struct PathDecomposition {
    /// Path index of each internal vertex; `usize::MAX` for endpoints.
    pub path_of: Vec<usize>,
    /// Position of each internal vertex along its path's vertex list.
    pub index_in_path: Vec<usize>,
    pub paths: Vec<PathInTree>,
}

/// Decompose the tree into its maximal degree-2 chains.
///
/// Hubs and leaves are the chain terminals; a tree that is itself a
/// path forms a single antenna.
pub(crate) fn decompose(t: &FreeTree) -> PathDecomposition {
    let n = t.num_nodes();
    let mut path_of = vec![usize::MAX; n];
    let mut index_in_path = vec![0usize; n];
    let mut paths = Vec::new();
    if n <= 1 {
        return PathDecomposition {
            path_of,
            index_in_path,
            paths,
        };
    }
    let terminal = |u: Node| t.degree(u) != 2;
    let mut walked = vec![false; n]; // internal vertices already assigned

    for start in 0..n {
        if !terminal(start) {
            continue;
        }
        for &first in t.neighbors(start) {
            if terminal(first) {
                // a bare edge between two terminals: record it once
                if start < first {
                    let kind = if t.degree(start) == 1 || t.degree(first) == 1 {
                        PathKind::Antenna
                    } else {
                        PathKind::Bridge
                    };
                    paths.push(PathInTree {
                        kind,
                        vertices: vec![start, first],
                        num_internal: 0,
                    });
                }
                continue;
            }
            if walked[first] {
                continue;
            }
            // walk the chain of degree-2 vertices
            let mut vertices = vec![start];
            let mut prev = start;
            let mut cur = first;
            let index = paths.len();
            while !terminal(cur) {
                walked[cur] = true;
                path_of[cur] = index;
                vertices.push(cur);
                let next = t
                    .neighbors(cur)
                    .iter()
                    .copied()
                    .find(|&w| w != prev)
                    .expect("degree-2 vertex has another neighbor");
                prev = cur;
                cur = next;
            }
            vertices.push(cur);
            let kind = if t.degree(start) == 1 || t.degree(cur) == 1 {
                PathKind::Antenna
            } else {
                PathKind::Bridge
            };
            let num_internal = vertices.len() - 2;
            for (i, &v) in vertices.iter().enumerate().skip(1).take(num_internal) {
                index_in_path[v] = i;
            }
            paths.push(PathInTree {
                kind,
                vertices,
                num_internal,
            });
        }
    }
    PathDecomposition {
        path_of,
        index_in_path,
        paths,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spider_decomposes_into_antennas() {
        // hub 0 with legs 0-1-2 and 0-3, 0-4
        let t = FreeTree::from_edges(5, &[(0, 1), (1, 2), (0, 3), (0, 4)]).unwrap();
        let d = decompose(&t);
        assert_eq!(d.paths.len(), 3);
        assert!(d.paths.iter().all(|p| p.kind == PathKind::Antenna));
        assert_eq!(d.path_of[1], d.paths.iter().position(|p| p.num_internal == 1).unwrap());
    }

    #[test]
    fn double_spider_has_a_bridge() {
        // hubs 2 and 5 joined through 3-4
        let t = FreeTree::from_edges(
            9,
            &[(0, 2), (1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (5, 7), (7, 8)],
        )
        .unwrap();
        let d = decompose(&t);
        let bridge = d.paths.iter().find(|p| p.kind == PathKind::Bridge).unwrap();
        assert_eq!(bridge.num_internal, 2);
        assert_eq!(d.path_of[3], d.path_of[4]);
    }
}
