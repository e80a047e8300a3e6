use super::types::Dart;

/// Arena of quad-edges: a parallel `onext` table plus per-dart origins.
///
/// Invariants (after every public operation):
/// - `onext` is a permutation of the darts, so every ring is closed.
/// - `e.rot().onext().rot().onext() == e` for every dart `e`.
/// - Only primal darts carry an origin.
#[derive(Clone, Debug, Default)]
pub struct QuadEdgeArena {
    next: Vec<Dart>,
    org: Vec<Option<usize>>,
    alive: Vec<bool>,
}

impl QuadEdgeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size for `edges` quad-edges.
    pub fn with_capacity(edges: usize) -> Self {
        Self {
            next: Vec::with_capacity(4 * edges),
            org: Vec::with_capacity(4 * edges),
            alive: Vec::with_capacity(edges),
        }
    }

    /// Quad-edges ever created, deleted ones included.
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.alive.len()
    }

    #[inline]
    pub fn dart_count(&self) -> usize {
        self.next.len()
    }

    /// Quad-edges not yet deleted.
    pub fn live_edge_count(&self) -> usize {
        self.alive.iter().filter(|&&a| a).count()
    }

    #[inline]
    pub fn is_deleted(&self, e: Dart) -> bool {
        !self.alive[e.quad()]
    }

    /// Canonical primal dart of every live quad-edge.
    pub fn edges(&self) -> impl Iterator<Item = Dart> + '_ {
        self.alive
            .iter()
            .enumerate()
            .filter(|(_, &a)| a)
            .map(|(q, _)| Dart(4 * q))
    }

    // ──────────────── Primitives ────────────────

    /// New isolated edge: darts 0 and 2 each form a ring of one, 1 and 3 ring
    /// with each other. Returns dart 0 with unassigned origins.
    pub fn make_edge(&mut self) -> Dart {
        let base = self.next.len();
        self.next.extend([
            Dart(base),
            Dart(base + 3),
            Dart(base + 2),
            Dart(base + 1),
        ]);
        self.org.extend([None; 4]);
        self.alive.push(true);
        Dart(base)
    }

    /// Merge the rings of `a` and `b` if distinct, split them if shared.
    ///
    /// Exchanges `a.onext`/`b.onext` and the `onext` of their rotated
    /// counterparts, which keeps the dual rings consistent.
    pub fn splice(&mut self, a: Dart, b: Dart) {
        let alpha = self.onext(a).rot();
        let beta = self.onext(b).rot();

        let t1 = self.onext(b);
        let t2 = self.onext(a);
        let t3 = self.onext(beta);
        let t4 = self.onext(alpha);

        self.next[a.0] = t1;
        self.next[b.0] = t2;
        self.next[alpha.0] = t3;
        self.next[beta.0] = t4;
    }

    /// New edge from `a.dest()` to `b.org()` whose left face is the common
    /// left face of `a` and `b`.
    pub fn connect(&mut self, a: Dart, b: Dart) -> Dart {
        let e = self.make_edge();
        let from = self.dest(a);
        let to = self.org(b);
        self.set_org(e, from);
        self.set_dest(e, to);
        let a_lnext = self.lnext(a);
        self.splice(e, a_lnext);
        self.splice(e.sym(), b);
        e
    }

    /// Detach `e` from both endpoint rings; its quad-edge becomes unreachable.
    pub fn delete(&mut self, e: Dart) {
        let e_oprev = self.oprev(e);
        self.splice(e, e_oprev);
        let s = e.sym();
        let s_oprev = self.oprev(s);
        self.splice(s, s_oprev);
        self.alive[e.quad()] = false;
    }

    // ──────────────── Vertices ────────────────

    /// Origin vertex, or `None` when unassigned (and always for dual darts).
    #[inline]
    pub fn org_opt(&self, e: Dart) -> Option<usize> {
        self.org[e.0]
    }

    /// Origin vertex.
    ///
    /// Panics when the origin was never assigned; the triangulator assigns
    /// both endpoints of every primal edge it creates.
    #[inline]
    pub fn org(&self, e: Dart) -> usize {
        self.org[e.0].unwrap_or_else(|| panic!("dart {} has no origin", e.0))
    }

    #[inline]
    pub fn dest(&self, e: Dart) -> usize {
        self.org(e.sym())
    }

    #[inline]
    pub fn set_org(&mut self, e: Dart, v: usize) {
        self.org[e.0] = Some(v);
    }

    #[inline]
    pub fn set_dest(&mut self, e: Dart, v: usize) {
        self.org[e.sym().0] = Some(v);
    }

    // ──────────────── Navigation ────────────────

    /// Next dart counterclockwise around the origin.
    #[inline]
    pub fn onext(&self, e: Dart) -> Dart {
        self.next[e.0]
    }

    /// Next dart clockwise around the origin.
    #[inline]
    pub fn oprev(&self, e: Dart) -> Dart {
        self.onext(e.rot()).rot()
    }

    /// Next dart counterclockwise around the left face.
    #[inline]
    pub fn lnext(&self, e: Dart) -> Dart {
        self.onext(e.inv_rot()).rot()
    }

    #[inline]
    pub fn lprev(&self, e: Dart) -> Dart {
        self.onext(e).sym()
    }

    /// Next dart counterclockwise around the right face.
    #[inline]
    pub fn rnext(&self, e: Dart) -> Dart {
        self.onext(e.rot()).inv_rot()
    }

    #[inline]
    pub fn rprev(&self, e: Dart) -> Dart {
        self.onext(e.sym())
    }

    /// Next dart counterclockwise around the destination.
    #[inline]
    pub fn dnext(&self, e: Dart) -> Dart {
        self.onext(e.sym()).sym()
    }

    #[inline]
    pub fn dprev(&self, e: Dart) -> Dart {
        self.onext(e.inv_rot()).inv_rot()
    }

    /// Darts of the `onext` ring starting at `e` (inclusive), in ring order.
    pub fn ring(&self, e: Dart) -> Ring<'_> {
        Ring {
            arena: self,
            start: e,
            cur: Some(e),
        }
    }

    /// Darts of the left face of `e`, following `lnext`.
    pub fn left_face(&self, e: Dart) -> Vec<Dart> {
        let mut out = vec![e];
        let mut cur = self.lnext(e);
        while cur != e {
            out.push(cur);
            cur = self.lnext(cur);
        }
        out
    }
}

/// Iterator over one `onext` ring; ends when the ring returns to its start.
pub struct Ring<'a> {
    arena: &'a QuadEdgeArena,
    start: Dart,
    cur: Option<Dart>,
}

impl Iterator for Ring<'_> {
    type Item = Dart;

    fn next(&mut self) -> Option<Dart> {
        let cur = self.cur?;
        let nxt = self.arena.onext(cur);
        self.cur = if nxt == self.start { None } else { Some(nxt) };
        Some(cur)
    }
}
