// Host-side tests for mesh rebuild and disposal bookkeeping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scene {
    include!("../src/core/scene.rs");
}

use glam::Vec3;
use scene::{Dispose, Scene};
use std::cell::Cell;
use std::rc::Rc;

/// Stand-in for the GPU plane: tracks how many instances are alive.
struct FakeMesh {
    id: u32,
    live: Rc<Cell<i32>>,
    disposed: Rc<Cell<u32>>,
}

impl FakeMesh {
    fn new(id: u32, live: &Rc<Cell<i32>>, disposed: &Rc<Cell<u32>>) -> Self {
        live.set(live.get() + 1);
        Self {
            id,
            live: live.clone(),
            disposed: disposed.clone(),
        }
    }
}

impl Dispose for FakeMesh {
    fn dispose(self) {
        self.live.set(self.live.get() - 1);
        self.disposed.set(self.disposed.get() + 1);
    }
}

fn counters() -> (Rc<Cell<i32>>, Rc<Cell<u32>>) {
    (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)))
}

#[test]
fn new_scene_is_empty() {
    let scene: Scene<FakeMesh> = Scene::new();
    assert_eq!(scene.mesh_count(), 0);
    assert_eq!(scene.builds(), 0);
    assert_eq!(scene.scale(), Vec3::ONE);
    assert!(scene.mesh().is_none());
}

#[test]
fn repeated_rebuilds_keep_one_mesh() {
    let (live, disposed) = counters();
    let mut scene = Scene::new();
    for id in 0..5 {
        scene.rebuild_mesh(|| FakeMesh::new(id, &live, &disposed));
        assert_eq!(scene.mesh_count(), 1);
        assert_eq!(live.get(), 1);
    }
    assert_eq!(scene.builds(), 5);
    assert_eq!(disposed.get(), 4);
    assert_eq!(scene.mesh().map(|m| m.id), Some(4));
}

#[test]
fn old_mesh_is_disposed_before_build() {
    let (live, disposed) = counters();
    let mut scene = Scene::new();
    scene.rebuild_mesh(|| FakeMesh::new(0, &live, &disposed));

    let seen = Cell::new(-1);
    scene.rebuild_mesh(|| {
        seen.set(live.get());
        FakeMesh::new(1, &live, &disposed)
    });
    assert_eq!(seen.get(), 0, "previous mesh still alive during build");
    assert_eq!(live.get(), 1);
}

#[test]
fn scale_survives_rebuild() {
    let (live, disposed) = counters();
    let mut scene = Scene::new();
    scene.set_scale(Vec3::new(1.6, 1.07, 1.0));
    scene.rebuild_mesh(|| FakeMesh::new(0, &live, &disposed));
    assert_eq!(scene.scale(), Vec3::new(1.6, 1.07, 1.0));
}

#[test]
fn clear_disposes_current_mesh() {
    let (live, disposed) = counters();
    let mut scene = Scene::new();
    scene.rebuild_mesh(|| FakeMesh::new(0, &live, &disposed));
    scene.clear();
    assert_eq!(scene.mesh_count(), 0);
    assert_eq!(live.get(), 0);
    assert_eq!(disposed.get(), 1);

    // Clearing an empty scene is a no-op
    scene.clear();
    assert_eq!(disposed.get(), 1);
}

#[test]
fn rebuild_returns_the_new_mesh() {
    let (live, disposed) = counters();
    let mut scene = Scene::new();
    let mesh = scene.rebuild_mesh(|| FakeMesh::new(7, &live, &disposed));
    mesh.id = 8;
    assert_eq!(scene.mesh_mut().map(|m| m.id), Some(8));
}
