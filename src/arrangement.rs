//! Linear arrangements: bijections between vertices and positions.

use core::fmt;

use crate::{Node, Position};

/// A linear arrangement of `n` vertices.
///
/// Two parallel arrays are kept in sync: the *direct* array maps a vertex
/// to its position and the *inverse* array maps a position back to its
/// vertex, so both lookups are O(1).
///
/// An arrangement of size 0 is a sentinel meaning "the identity
/// arrangement of whatever graph it accompanies"; every consumer in the
/// library honors it.
#[derive(Clone, PartialEq, Eq)]
pub struct Arrangement {
    direct: Vec<Position>,
    inverse: Vec<Node>,
}

impl Arrangement {
    /// The identity arrangement on `n` vertices.
    pub fn identity(n: usize) -> Self {
        Arrangement {
            direct: (0..n).collect(),
            inverse: (0..n).collect(),
        }
    }

    /// The size-0 sentinel standing for the identity arrangement.
    pub fn sentinel() -> Self {
        Arrangement {
            direct: Vec::new(),
            inverse: Vec::new(),
        }
    }

    /// Build from a vertex → position map.
    ///
    /// `direct` must be a permutation of `0..n`, which is debug-asserted.
    pub fn from_direct(direct: Vec<Position>) -> Self {
        let mut inverse = vec![0; direct.len()];
        let mut seen = vec![false; direct.len()];
        for (u, &p) in direct.iter().enumerate() {
            debug_assert!(p < direct.len() && !seen[p], "not a permutation");
            seen[p] = true;
            inverse[p] = u;
        }
        Arrangement { direct, inverse }
    }

    /// Build from a position → vertex map.
    pub fn from_inverse(inverse: Vec<Node>) -> Self {
        let mut direct = vec![0; inverse.len()];
        let mut seen = vec![false; inverse.len()];
        for (p, &u) in inverse.iter().enumerate() {
            debug_assert!(u < inverse.len() && !seen[u], "not a permutation");
            seen[u] = true;
            direct[u] = p;
        }
        Arrangement { direct, inverse }
    }

    /// Number of vertices arranged; 0 for the sentinel.
    pub fn len(&self) -> usize {
        self.direct.len()
    }

    /// Whether this is the size-0 identity sentinel.
    pub fn is_empty(&self) -> bool {
        self.direct.is_empty()
    }

    /// Position of vertex `u`.
    pub fn position(&self, u: Node) -> Position {
        if self.direct.is_empty() {
            u
        } else {
            self.direct[u]
        }
    }

    /// Vertex at position `p`.
    pub fn node_at(&self, p: Position) -> Node {
        if self.inverse.is_empty() {
            p
        } else {
            self.inverse[p]
        }
    }

    /// Put vertex `u` at position `p`, updating both sides.
    ///
    /// The previous occupant of `p` and the previous position of `u` are
    /// swapped, so the arrangement stays a bijection.
    pub fn assign(&mut self, u: Node, p: Position) {
        let old_p = self.direct[u];
        let other = self.inverse[p];
        self.direct.swap(u, other);
        self.inverse.swap(p, old_p);
    }

    /// Reverse the arrangement: position `p` becomes `n - 1 - p`.
    pub fn mirror(&self) -> Arrangement {
        let n = self.len();
        Arrangement::from_direct(self.direct.iter().map(|&p| n - 1 - p).collect())
    }

    /// Whether `self` is a valid arrangement of `n` vertices: either the
    /// sentinel or a permutation of `0..n`.
    pub fn is_arrangement(&self, n: usize) -> bool {
        if self.is_empty() {
            return true;
        }
        if self.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &p in &self.direct {
            if p >= n || seen[p] {
                return false;
            }
            seen[p] = true;
        }
        (0..n).all(|p| self.direct[self.inverse[p]] == p)
    }

    /// The direct (vertex → position) array.
    pub fn direct(&self) -> &[Position] {
        &self.direct
    }

    /// The inverse (position → vertex) array.
    pub fn inverse(&self) -> &[Node] {
        &self.inverse
    }
}

impl fmt::Debug for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("Arrangement(identity)")
        } else {
            write!(f, "Arrangement({:?})", self.inverse)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_and_inverse_stay_in_sync() {
        let mut arr = Arrangement::from_inverse(vec![2, 0, 4, 1, 3]);
        assert_eq!(arr.position(2), 0);
        assert_eq!(arr.node_at(0), 2);
        assert!(arr.is_arrangement(5));
        arr.assign(2, 4);
        assert_eq!(arr.position(2), 4);
        assert!(arr.is_arrangement(5));
    }

    #[test]
    fn sentinel_acts_as_identity() {
        let arr = Arrangement::sentinel();
        assert_eq!(arr.position(3), 3);
        assert_eq!(arr.node_at(7), 7);
        assert!(arr.is_arrangement(42));
    }

    #[test]
    fn mirror_reverses() {
        let arr = Arrangement::identity(4).mirror();
        assert_eq!(arr.inverse(), &[3, 2, 1, 0]);
    }
}
