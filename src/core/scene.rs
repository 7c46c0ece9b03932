use glam::Vec3;

/// GPU-side objects that must be released explicitly rather than left to drop.
pub trait Dispose {
    fn dispose(self);
}

/// Scene graph holding the single textured plane.
///
/// The camera lives with the effect state; the scene only owns the mesh and
/// its transform, which survives rebuilds.
pub struct Scene<M: Dispose> {
    mesh: Option<M>,
    scale: Vec3,
    builds: u32,
}

impl<M: Dispose> Default for Scene<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Dispose> Scene<M> {
    pub fn new() -> Self {
        Self {
            mesh: None,
            scale: Vec3::ONE,
            builds: 0,
        }
    }

    /// Dispose and remove the current mesh (if any), then add a fresh one.
    ///
    /// The old mesh is released before `build` runs so at most one
    /// geometry/material pair is alive at any time.
    pub fn rebuild_mesh(&mut self, build: impl FnOnce() -> M) -> &mut M {
        if let Some(old) = self.mesh.take() {
            old.dispose();
        }
        self.builds += 1;
        self.mesh.insert(build())
    }

    pub fn mesh(&self) -> Option<&M> {
        self.mesh.as_ref()
    }

    pub fn mesh_mut(&mut self) -> Option<&mut M> {
        self.mesh.as_mut()
    }

    pub fn mesh_count(&self) -> usize {
        usize::from(self.mesh.is_some())
    }

    pub fn builds(&self) -> u32 {
        self.builds
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Release everything; used on teardown.
    pub fn clear(&mut self) {
        if let Some(old) = self.mesh.take() {
            old.dispose();
        }
    }
}
