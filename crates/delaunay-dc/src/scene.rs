//! Interactive point set: the surface a renderer and an input handler talk to.
//!
//! Every accepted insertion or move rebuilds the triangulation from scratch.
//! Rejected mutations leave both the points and the last mesh untouched.
//!
//! Gesture model
//! - `press` clears all selection flags, then selects the lowest-index point
//!   whose pick box contains the position, or inserts a new (selected) point.
//!   A rejected press changes no flag and ends any held gesture.
//! - `drag` moves the pressed point; `release` ends the gesture.

use std::fmt;

use crate::cfg::PICK_RADIUS;
use crate::points::{Point, PointId, PointStore};
use crate::triangulate::{InvalidInput, Mesh, Triangulator};

/// Scene configuration.
#[derive(Clone, Copy, Debug)]
pub struct SceneCfg {
    /// Half-width of the square pick box.
    pub pick_radius: f64,
    /// Seed for the per-point presentation scalar.
    pub seed: u64,
}

impl Default for SceneCfg {
    fn default() -> Self {
        Self {
            pick_radius: PICK_RADIUS,
            seed: 0,
        }
    }
}

/// Errors surfaced by `PointSet` mutators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneError {
    Invalid(InvalidInput),
    UnknownPoint(PointId),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Invalid(e) => write!(f, "invalid input: {e}"),
            SceneError::UnknownPoint(id) => write!(f, "no point with index {}", id.0),
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SceneError::Invalid(e) => Some(e),
            SceneError::UnknownPoint(_) => None,
        }
    }
}

impl From<InvalidInput> for SceneError {
    fn from(e: InvalidInput) -> Self {
        SceneError::Invalid(e)
    }
}

/// Points plus the mesh of their current positions.
#[derive(Clone, Debug)]
pub struct PointSet {
    cfg: SceneCfg,
    store: PointStore,
    mesh: Mesh,
    held: Option<PointId>,
}

impl Default for PointSet {
    fn default() -> Self {
        Self::with_cfg(SceneCfg::default())
    }
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cfg(cfg: SceneCfg) -> Self {
        Self {
            cfg,
            store: PointStore::new(cfg.seed),
            mesh: Mesh::default(),
            held: None,
        }
    }

    #[inline]
    pub fn store(&self) -> &PointStore {
        &self.store
    }

    #[inline]
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.store.count()
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.mesh.line_count()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.mesh.triangle_count()
    }

    /// Interleaved `(x, y, scalar, selected)` per point.
    pub fn attribute_buffer(&self) -> Vec<f32> {
        self.store.attribute_buffer()
    }

    pub fn line_indices(&self) -> Vec<u32> {
        self.mesh.line_indices()
    }

    pub fn triangle_indices(&self) -> Vec<u32> {
        self.mesh.triangle_indices()
    }

    /// Insert a point and retriangulate.
    pub fn add_point(&mut self, x: f64, y: f64) -> Result<Point, SceneError> {
        let index = self.store.count();
        self.check_position(x, y, index, None)?;
        let point = self.store.add_point(x, y);
        self.retriangulate()?;
        Ok(point)
    }

    /// Move an existing point and retriangulate.
    pub fn move_point(&mut self, id: PointId, x: f64, y: f64) -> Result<(), SceneError> {
        if self.store.get(id).is_none() {
            return Err(SceneError::UnknownPoint(id));
        }
        self.check_position(x, y, id.0, Some(id))?;
        self.store.move_point(id, x, y);
        self.retriangulate()?;
        Ok(())
    }

    /// Start a gesture at `(x, y)`: select the point under it or insert one.
    ///
    /// A rejected press keeps every selection flag and drops the held point.
    pub fn press(&mut self, x: f64, y: f64) -> Result<PointId, SceneError> {
        let hit = self.store.pick(x, y, self.cfg.pick_radius);
        if hit.is_none() {
            if let Err(e) = self.check_position(x, y, self.store.count(), None) {
                self.held = None;
                return Err(e.into());
            }
        }
        self.store.clear_selection();
        let id = match hit {
            Some(id) => {
                self.store.set_selected(id, true);
                id
            }
            None => self.add_point(x, y)?.id(),
        };
        self.held = Some(id);
        Ok(id)
    }

    /// Move the pressed point, if any.
    pub fn drag(&mut self, x: f64, y: f64) -> Result<Option<PointId>, SceneError> {
        match self.held {
            Some(id) => {
                self.move_point(id, x, y)?;
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }

    /// End the gesture; returns the point that was held.
    pub fn release(&mut self) -> Option<PointId> {
        self.held.take()
    }

    /// Rebuild the mesh from the current positions.
    pub fn retriangulate(&mut self) -> Result<(), InvalidInput> {
        let tri = Triangulator::new(&self.store).run()?;
        self.mesh = tri.mesh();
        Ok(())
    }

    fn check_position(
        &self,
        x: f64,
        y: f64,
        index: usize,
        except: Option<PointId>,
    ) -> Result<(), InvalidInput> {
        let res = if !(x.is_finite() && y.is_finite()) {
            Err(InvalidInput::NonFinite { index })
        } else if let Some(other) = self.store.find_coincident(x, y, except) {
            Err(InvalidInput::DuplicatePoint {
                first: other.0.min(index),
                second: other.0.max(index),
            })
        } else {
            Ok(())
        };
        if let Err(e) = &res {
            tracing::warn!(x, y, error = %e, "rejected point position");
        }
        res
    }
}
