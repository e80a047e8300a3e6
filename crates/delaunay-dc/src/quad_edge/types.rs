/// Handle to one directed, rotation-indexed dart of a quad-edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dart(pub(crate) usize);

impl Dart {
    /// Unique id, assigned in creation order.
    #[inline]
    pub fn id(self) -> usize {
        self.0
    }

    /// Index of the owning quad-edge.
    #[inline]
    pub fn quad(self) -> usize {
        self.0 >> 2
    }

    /// Rotation index 0..=3 within the quad-edge.
    #[inline]
    pub fn rot_index(self) -> usize {
        self.0 & 3
    }

    /// Primal darts (0 and 2) carry vertices; 1 and 3 are the dual pair.
    #[inline]
    pub fn is_primal(self) -> bool {
        self.0 & 1 == 0
    }

    /// Dual of the edge, directed from its right face to its left face.
    #[inline]
    pub fn rot(self) -> Dart {
        Dart((self.0 & !3) | ((self.0 + 1) & 3))
    }

    #[inline]
    pub fn sym(self) -> Dart {
        Dart((self.0 & !3) | ((self.0 + 2) & 3))
    }

    #[inline]
    pub fn inv_rot(self) -> Dart {
        Dart((self.0 & !3) | ((self.0 + 3) & 3))
    }
}
