//! Scene-object storage for the editor.
//!
//! Objects live in a [`hecs::World`]; a [`hecs::Entity`] is the only handle
//! anything outside this module ever holds. Entities are generation-checked,
//! so a handle to a despawned object resolves to "no object" instead of
//! aliasing whatever reused its slot, and every accessor here returns
//! `Option`/`bool` rather than trusting the caller's handle.
//!
//! Each object carries:
//!
//! - [`Name`] — display name for the hierarchy panel
//! - [`WorldMatrix`] — the world transform the renderer consumes; owned by
//!   the object, read and written only through [`Scene::world_matrix`] and
//!   [`Scene::set_world_matrix`]
//! - [`DirtyFrames`] — how many in-flight frame resources still hold a stale
//!   copy of the world matrix; set on every write, decremented by the
//!   renderer as it re-uploads
//!
//! A [`Collider`] can be attached for mouse picking. The raw world is
//! reachable through [`Scene::world`] / [`Scene::world_mut`] when the
//! renderer needs to query components directly.

use glam::Mat4;
use hecs::{Entity, World};

use crate::picking::Collider;
use crate::transform::Transform;

/// Display name of a scene object.
#[derive(Clone, Debug)]
pub struct Name(pub String);

impl Name {
    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The object's world transform, consumed by the renderer.
#[derive(Clone, Copy, Debug)]
pub struct WorldMatrix(pub Mat4);

/// Count of in-flight frame resources whose uploaded copy of the world
/// matrix is stale. Nonzero means the renderer still has uploading to do.
#[derive(Clone, Copy, Debug)]
pub struct DirtyFrames(pub u32);

/// Frame resources assumed in flight when none is configured.
pub const DEFAULT_FRAMES_IN_FLIGHT: u32 = 3;

/// Container of editable scene objects.
///
/// Iteration order is spawn order, which is also the order the hierarchy
/// panel lists objects in.
///
/// # Example
///
/// ```
/// use maquette::{Scene, Transform, Vec3};
///
/// let mut scene = Scene::new();
/// let cube = scene.spawn("Cube", Transform::from_position(Vec3::new(1.0, 2.0, 3.0)));
///
/// let world = scene.world_matrix(cube).unwrap();
/// assert_eq!(world.w_axis.truncate(), Vec3::new(1.0, 2.0, 3.0));
/// ```
pub struct Scene {
    world: World,
    order: Vec<Entity>,
    frames_in_flight: u32,
}

impl Scene {
    /// Creates an empty scene with [`DEFAULT_FRAMES_IN_FLIGHT`] dirty-frame
    /// tracking.
    pub fn new() -> Self {
        Self::with_frames_in_flight(DEFAULT_FRAMES_IN_FLIGHT)
    }

    /// Creates an empty scene tracking the given number of in-flight frame
    /// resources.
    pub fn with_frames_in_flight(frames_in_flight: u32) -> Self {
        Self {
            world: World::new(),
            order: Vec::new(),
            frames_in_flight: frames_in_flight.max(1),
        }
    }

    /// Adds an object to the scene and returns its handle.
    ///
    /// The object starts fully dirty so the renderer uploads its matrix into
    /// every frame resource before first use.
    pub fn spawn(&mut self, name: impl Into<String>, transform: Transform) -> Entity {
        let entity = self.world.spawn((
            Name(name.into()),
            WorldMatrix(transform.matrix()),
            DirtyFrames(self.frames_in_flight),
        ));
        self.order.push(entity);
        entity
    }

    /// Removes an object. Returns `false` if the handle was already dead.
    pub fn despawn(&mut self, entity: Entity) -> bool {
        if self.world.despawn(entity).is_err() {
            return false;
        }
        self.order.retain(|&e| e != entity);
        true
    }

    /// Whether the handle refers to a live object.
    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the scene has no objects.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Objects in spawn order, for the hierarchy panel.
    ///
    /// Objects despawned through [`Scene::world_mut`] rather than
    /// [`Scene::despawn`] are skipped.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.order
            .iter()
            .copied()
            .filter(|&entity| self.world.contains(entity))
    }

    /// The object's display name, or `None` for a dead handle.
    pub fn name(&self, entity: Entity) -> Option<hecs::Ref<'_, Name>> {
        self.world.get::<&Name>(entity).ok()
    }

    /// Reads a copy of the object's world matrix.
    pub fn world_matrix(&self, entity: Entity) -> Option<Mat4> {
        self.world
            .get::<&WorldMatrix>(entity)
            .ok()
            .map(|world| world.0)
    }

    /// Replaces the object's world matrix and marks it dirty for every
    /// in-flight frame resource. Returns `false` for a dead handle.
    pub fn set_world_matrix(&mut self, entity: Entity, world_matrix: Mat4) -> bool {
        let frames = self.frames_in_flight;
        let Ok((world, dirty)) = self
            .world
            .query_one_mut::<(&mut WorldMatrix, &mut DirtyFrames)>(entity)
        else {
            return false;
        };
        world.0 = world_matrix;
        dirty.0 = frames;
        true
    }

    /// How many frame resources still hold a stale copy of the object's
    /// world matrix.
    pub fn dirty_frames(&self, entity: Entity) -> Option<u32> {
        self.world
            .get::<&DirtyFrames>(entity)
            .ok()
            .map(|dirty| dirty.0)
    }

    /// Records that the renderer uploaded the object's matrix into one more
    /// frame resource.
    pub fn mark_uploaded(&mut self, entity: Entity) {
        if let Ok(dirty) = self.world.query_one_mut::<&mut DirtyFrames>(entity) {
            dirty.0 = dirty.0.saturating_sub(1);
        }
    }

    /// Attaches a picking collider to the object. Returns `false` for a dead
    /// handle.
    pub fn attach_collider(&mut self, entity: Entity, collider: Collider) -> bool {
        self.world.insert_one(entity, collider).is_ok()
    }

    /// The raw component world, for renderer-side queries.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the raw component world.
    ///
    /// Escape hatch: objects mutated this way bypass dirty tracking, so
    /// prefer [`Scene::set_world_matrix`] for transform changes.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn spawn_order_is_iteration_order() {
        let mut scene = Scene::new();
        let a = scene.spawn("A", Transform::new());
        let b = scene.spawn("B", Transform::new());
        let c = scene.spawn("C", Transform::new());

        let order: Vec<Entity> = scene.iter().collect();
        assert_eq!(order, vec![a, b, c]);
        assert_eq!(scene.name(b).unwrap().as_str(), "B");
    }

    #[test]
    fn despawn_removes_from_iteration_and_kills_the_handle() {
        let mut scene = Scene::new();
        let a = scene.spawn("A", Transform::new());
        let b = scene.spawn("B", Transform::new());

        assert!(scene.despawn(a));
        assert!(!scene.despawn(a), "double despawn must report failure");

        assert_eq!(scene.iter().collect::<Vec<_>>(), vec![b]);
        assert!(!scene.contains(a));
        assert!(scene.world_matrix(a).is_none());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn world_matrix_writes_mark_dirty_and_uploads_drain() {
        let mut scene = Scene::with_frames_in_flight(2);
        let cube = scene.spawn("Cube", Transform::new());
        assert_eq!(scene.dirty_frames(cube), Some(2), "spawns start dirty");

        scene.mark_uploaded(cube);
        scene.mark_uploaded(cube);
        assert_eq!(scene.dirty_frames(cube), Some(0));
        scene.mark_uploaded(cube);
        assert_eq!(scene.dirty_frames(cube), Some(0), "must not underflow");

        let moved = Transform::from_position(Vec3::X).matrix();
        assert!(scene.set_world_matrix(cube, moved));
        assert_eq!(scene.dirty_frames(cube), Some(2));
        assert_eq!(scene.world_matrix(cube), Some(moved));
    }

    #[test]
    fn writes_to_dead_handles_fail_cleanly() {
        let mut scene = Scene::new();
        let ghost = scene.spawn("Ghost", Transform::new());
        scene.despawn(ghost);

        assert!(!scene.set_world_matrix(ghost, Mat4::IDENTITY));
        assert!(!scene.attach_collider(ghost, Collider::unit_box()));
        assert!(scene.dirty_frames(ghost).is_none());
    }
}
