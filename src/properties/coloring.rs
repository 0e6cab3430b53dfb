use crate::graph::{GraphView, UndirectedGraph};
use crate::Node;

/// A vertex color in a 2-coloring.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Red,
    Blue,
    /// Not assigned; also the sentinel of an invalid coloring.
    Invalid,
}

/// A proper 2-coloring of a bipartite graph.
#[derive(Clone, Debug)]
pub struct BipartiteColoring {
    colors: Vec<Color>,
}

impl BipartiteColoring {
    /// Color of vertex `u`.
    pub fn color(&self, u: Node) -> Color {
        self.colors[u]
    }

    /// Whether every vertex is colored and adjacent vertices disagree.
    pub fn is_valid<G: GraphView>(&self, g: &G) -> bool {
        (0..g.num_nodes()).all(|u| {
            self.colors[u] != Color::Invalid
                && g.neighbors(u).iter().all(|&v| self.colors[v] != self.colors[u])
        })
    }

    /// The vertices of the given color, ascending.
    pub fn class_of(&self, color: Color) -> Vec<Node> {
        (0..self.colors.len())
            .filter(|&u| self.colors[u] == color)
            .collect()
    }
}

/// 2-color the graph by breadth-first search with alternating colors.
///
/// The result is undefined for non-bipartite graphs; the caller asserts
/// bipartiteness (trees always qualify).
pub fn bipartite_coloring(g: &UndirectedGraph) -> BipartiteColoring {
    let n = g.num_nodes();
    let mut colors = vec![Color::Invalid; n];
    let mut queue = std::collections::VecDeque::new();
    for s in 0..n {
        if colors[s] != Color::Invalid {
            continue;
        }
        colors[s] = Color::Red;
        queue.push_back(s);
        while let Some(u) = queue.pop_front() {
            let next = match colors[u] {
                Color::Red => Color::Blue,
                _ => Color::Red,
            };
            for &v in g.neighbors(u) {
                if colors[v] == Color::Invalid {
                    colors[v] = next;
                    queue.push_back(v);
                }
            }
        }
    }
    BipartiteColoring { colors }
}
