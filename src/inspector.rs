//! The transform inspector: the edit session behind the inspector panel.
//!
//! The inspector shows position/rotation/scale fields for the selected
//! object and writes a recomposed world matrix back on every edit. The one
//! piece of real state is the **Euler cache**: Euler angles are not uniquely
//! recoverable from a quaternion, so re-deriving them from the object every
//! frame would make the displayed rotation drift or jump at gimbal lock.
//! Instead the cache is decomposed from the world matrix exactly once, when
//! the selection changes, and edits mutate the cached angles directly from
//! then on.
//!
//! Rotation fields are degrees at this boundary, `(pitch, yaw, roll)` in the
//! `x`, `y`, `z` components; conversion to radians and quaternions happens
//! inside.
//!
//! # Example
//!
//! ```
//! use maquette::{EditField, Inspector, Scene, Transform, Vec3};
//!
//! let mut scene = Scene::new();
//! let cube = scene.spawn("Cube", Transform::from_position(Vec3::new(1.0, 2.0, 3.0)));
//!
//! let mut inspector = Inspector::new();
//! inspector.select(&scene, Some(cube));
//! assert_eq!(inspector.rotation(), Some(Vec3::ZERO));
//!
//! inspector.edit(&mut scene, EditField::Rotation, Vec3::new(0.0, 90.0, 0.0));
//! ```

use glam::{Mat4, Vec3};
use hecs::Entity;

use crate::angles::wrap_angle_360;
use crate::rotation::euler_to_quaternion;
use crate::scene::Scene;
use crate::transform::Transform;

/// Which transform channel an edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditField {
    /// World-space position.
    Position,
    /// Rotation as `(pitch, yaw, roll)` degrees.
    Rotation,
    /// Per-axis scale.
    Scale,
}

/// Cached transform channels for the selected object. Valid only while that
/// object stays selected.
#[derive(Clone, Copy, Debug)]
struct TransformCache {
    position: Vec3,
    /// `(pitch, yaw, roll)` in degrees.
    rotation: Vec3,
    scale: Vec3,
}

impl TransformCache {
    fn from_world_matrix(world: Mat4) -> Self {
        let transform = Transform::from_matrix(world);
        Self {
            position: transform.position,
            rotation: transform.to_euler_degrees(),
            scale: transform.scale,
        }
    }

    fn world_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            self.scale,
            euler_to_quaternion(Vec3::new(
                self.rotation.x.to_radians(),
                self.rotation.y.to_radians(),
                self.rotation.z.to_radians(),
            )),
            self.position,
        )
    }
}

/// Edit session for the selected object's transform.
///
/// Either idle (nothing selected, no cache) or editing (one selected object
/// plus its cached channels). Selection handles are generation-checked; if
/// the selected object is despawned out from under the session, the next
/// operation reports failure and the session falls back to idle instead of
/// touching a stale object.
#[derive(Debug, Default)]
pub struct Inspector {
    selected: Option<Entity>,
    cache: Option<TransformCache>,
}

impl Inspector {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected object, if any.
    pub fn selection(&self) -> Option<Entity> {
        self.selected
    }

    /// Cached position of the selected object.
    pub fn position(&self) -> Option<Vec3> {
        self.cache.map(|cache| cache.position)
    }

    /// Cached rotation of the selected object, `(pitch, yaw, roll)` degrees.
    pub fn rotation(&self) -> Option<Vec3> {
        self.cache.map(|cache| cache.rotation)
    }

    /// Cached scale of the selected object.
    pub fn scale(&self) -> Option<Vec3> {
        self.cache.map(|cache| cache.scale)
    }

    /// Changes the selection.
    ///
    /// Selecting the object that is already selected keeps the cache as-is;
    /// this is the rule that makes rotation editing stable across frames.
    /// Selecting a different object (or `Some` after idle) decomposes that
    /// object's world matrix into a fresh cache. Selecting `None` discards
    /// the cache.
    pub fn select(&mut self, scene: &Scene, target: Option<Entity>) {
        if self.selected == target {
            return;
        }

        self.selected = None;
        self.cache = None;

        if let Some(entity) = target {
            match scene.world_matrix(entity) {
                Some(world) => {
                    self.selected = Some(entity);
                    self.cache = Some(TransformCache::from_world_matrix(world));
                }
                None => {
                    log::warn!("selected object {entity:?} does not exist; staying idle");
                }
            }
        }
    }

    /// Applies an edit to one channel of the selected object.
    ///
    /// Updates the cache (rotation components are wrapped into `[0, 360)`
    /// first), recomposes the world matrix from the full cached triple, and
    /// writes it back through the scene. Returns `false` (leaving the
    /// session idle) when nothing is selected or the selected object no
    /// longer exists.
    pub fn edit(&mut self, scene: &mut Scene, field: EditField, value: Vec3) -> bool {
        let Some(entity) = self.selected else {
            return false;
        };
        let Some(cache) = self.cache.as_mut() else {
            return false;
        };

        match field {
            EditField::Position => cache.position = value,
            EditField::Rotation => {
                cache.rotation = Vec3::new(
                    wrap_angle_360(value.x),
                    wrap_angle_360(value.y),
                    wrap_angle_360(value.z),
                );
            }
            EditField::Scale => cache.scale = value,
        }

        let world = cache.world_matrix();
        if !scene.set_world_matrix(entity, world) {
            log::warn!("selected object {entity:?} was despawned; clearing selection");
            self.selected = None;
            self.cache = None;
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    fn assert_vec3_near(a: Vec3, b: Vec3, eps: f32) {
        assert!((a - b).length() < eps, "expected {b:?}, got {a:?}");
    }

    #[test]
    fn selecting_decomposes_the_world_matrix() {
        let mut scene = Scene::new();
        let cube = scene.spawn(
            "Cube",
            Transform::from_position(Vec3::new(1.0, 2.0, 3.0)),
        );

        let mut inspector = Inspector::new();
        inspector.select(&scene, Some(cube));

        assert_eq!(inspector.selection(), Some(cube));
        assert_vec3_near(inspector.position().unwrap(), Vec3::new(1.0, 2.0, 3.0), 1e-5);
        assert_eq!(inspector.rotation().unwrap(), Vec3::ZERO);
        assert_vec3_near(inspector.scale().unwrap(), Vec3::ONE, 1e-5);
    }

    #[test]
    fn yaw_edit_recomposes_a_yaw_rotation_block() {
        let mut scene = Scene::new();
        let cube = scene.spawn(
            "Cube",
            Transform::from_position(Vec3::new(1.0, 2.0, 3.0)),
        );

        let mut inspector = Inspector::new();
        inspector.select(&scene, Some(cube));
        assert!(inspector.edit(&mut scene, EditField::Rotation, Vec3::new(0.0, 90.0, 0.0)));

        let world = scene.world_matrix(cube).unwrap();
        let (scale, rotation, position) = world.to_scale_rotation_translation();

        assert_vec3_near(position, Vec3::new(1.0, 2.0, 3.0), 1e-4);
        assert_vec3_near(scale, Vec3::ONE, 1e-4);
        let expected = Quat::from_rotation_z(90.0f32.to_radians());
        assert!(
            rotation.dot(expected).abs() > 1.0 - 1e-5,
            "rotation block is not a 90 degree yaw: {rotation:?}"
        );
    }

    #[test]
    fn rotation_edits_are_wrapped_into_range() {
        let mut scene = Scene::new();
        let cube = scene.spawn("Cube", Transform::new());

        let mut inspector = Inspector::new();
        inspector.select(&scene, Some(cube));
        inspector.edit(&mut scene, EditField::Rotation, Vec3::new(370.0, -30.0, 720.0));

        assert_vec3_near(
            inspector.rotation().unwrap(),
            Vec3::new(10.0, 330.0, 0.0),
            1e-4,
        );
    }

    #[test]
    fn switching_selection_recomputes_the_cache() {
        let mut scene = Scene::new();
        let a = scene.spawn("A", Transform::new().euler_degrees(Vec3::new(0.0, 45.0, 0.0)));
        let b = scene.spawn("B", Transform::new().euler_degrees(Vec3::new(30.0, 0.0, 0.0)));

        let mut inspector = Inspector::new();
        inspector.select(&scene, Some(a));
        assert_vec3_near(inspector.rotation().unwrap(), Vec3::new(0.0, 45.0, 0.0), 1e-3);

        inspector.select(&scene, Some(b));
        assert_vec3_near(inspector.rotation().unwrap(), Vec3::new(30.0, 0.0, 0.0), 1e-3);
    }

    #[test]
    fn reselecting_the_same_object_keeps_the_cache() {
        let mut scene = Scene::new();
        let cube = scene.spawn("Cube", Transform::new());

        let mut inspector = Inspector::new();
        inspector.select(&scene, Some(cube));
        inspector.edit(&mut scene, EditField::Rotation, Vec3::new(0.0, 370.0, 0.0));
        assert_vec3_near(inspector.rotation().unwrap(), Vec3::new(0.0, 10.0, 0.0), 1e-4);

        // A second click on the same hierarchy row must not rebuild the
        // cache from the quaternion.
        inspector.select(&scene, Some(cube));
        assert_vec3_near(inspector.rotation().unwrap(), Vec3::new(0.0, 10.0, 0.0), 1e-4);
    }

    #[test]
    fn edits_within_a_selection_never_rederive_euler_angles() {
        // Drive pitch through the gimbal-lock boundary; a cache that was
        // re-decomposed from the quaternion would jump to a different
        // (pitch, yaw, roll) representation at 90 degrees.
        let mut scene = Scene::new();
        let cube = scene.spawn("Cube", Transform::new());

        let mut inspector = Inspector::new();
        inspector.select(&scene, Some(cube));
        for pitch in [80.0, 85.0, 90.0, 95.0] {
            assert!(inspector.edit(
                &mut scene,
                EditField::Rotation,
                Vec3::new(pitch, 20.0, 0.0)
            ));
            assert_vec3_near(
                inspector.rotation().unwrap(),
                Vec3::new(pitch, 20.0, 0.0),
                1e-4,
            );
        }
    }

    #[test]
    fn clearing_the_selection_goes_idle() {
        let mut scene = Scene::new();
        let cube = scene.spawn("Cube", Transform::new());

        let mut inspector = Inspector::new();
        inspector.select(&scene, Some(cube));
        inspector.select(&scene, None);

        assert_eq!(inspector.selection(), None);
        assert!(inspector.position().is_none());
        assert!(!inspector.edit(&mut scene, EditField::Position, Vec3::X));
    }

    #[test]
    fn despawned_selection_fails_cleanly_and_clears() {
        let mut scene = Scene::new();
        let cube = scene.spawn("Cube", Transform::new());

        let mut inspector = Inspector::new();
        inspector.select(&scene, Some(cube));
        scene.despawn(cube);

        assert!(!inspector.edit(&mut scene, EditField::Position, Vec3::X));
        assert_eq!(inspector.selection(), None);
        assert!(inspector.rotation().is_none());
    }

    #[test]
    fn selecting_a_dead_handle_stays_idle() {
        let mut scene = Scene::new();
        let ghost = scene.spawn("Ghost", Transform::new());
        scene.despawn(ghost);

        let mut inspector = Inspector::new();
        inspector.select(&scene, Some(ghost));
        assert_eq!(inspector.selection(), None);
    }

    #[test]
    fn position_edit_preserves_rotation_and_scale() {
        let mut scene = Scene::new();
        let cube = scene.spawn(
            "Cube",
            Transform::new()
                .euler_degrees(Vec3::new(0.0, 45.0, 0.0))
                .scale(Vec3::new(2.0, 2.0, 2.0)),
        );

        let mut inspector = Inspector::new();
        inspector.select(&scene, Some(cube));
        inspector.edit(&mut scene, EditField::Position, Vec3::new(5.0, 0.0, -1.0));

        let (scale, rotation, position) =
            scene.world_matrix(cube).unwrap().to_scale_rotation_translation();
        assert_vec3_near(position, Vec3::new(5.0, 0.0, -1.0), 1e-4);
        assert_vec3_near(scale, Vec3::splat(2.0), 1e-4);
        let expected = Quat::from_rotation_z(45.0f32.to_radians());
        assert!(rotation.dot(expected).abs() > 1.0 - 1e-5);
    }
}
