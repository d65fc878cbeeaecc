//! # Maquette
//!
//! **The editing core of a 3D scene editor, with the renderer left out.**
//!
//! Maquette is the part of a scene editor that is actual logic: scene
//! objects with generation-checked handles, mouse picking, an orbiting
//! scene-view camera, and a transform inspector that decomposes world
//! matrices into position/rotation/scale, takes edits in degrees, and
//! recomposes. Rendering, windowing, and GUI widgets are collaborators you
//! bring yourself: the crate hands you world matrices and dirty flags and
//! expects pixels and input events in return.
//!
//! ## Quick Start
//!
//! ```
//! use maquette::*;
//!
//! let mut editor = Editor::new();
//!
//! // Populate the scene.
//! let cube = editor.scene_mut().spawn(
//!     "Cube",
//!     Transform::from_position(Vec3::new(0.0, 1.0, 0.0)),
//! );
//! editor.scene_mut().attach_collider(cube, Collider::unit_box());
//!
//! // A hierarchy click and an inspector drag, as the GUI would deliver them.
//! editor.handle(EditorEvent::Select(Some(cube)));
//! editor.handle(EditorEvent::Edit(EditField::Rotation, Vec3::new(0.0, 90.0, 0.0)));
//!
//! // The renderer reads the result back.
//! let world = editor.scene().world_matrix(cube).unwrap();
//! ```
//!
//! ## Design notes
//!
//! - **Rotation editing is cached.** Euler angles are decomposed from the
//!   selected object's quaternion once per selection change and mutated
//!   directly afterwards, so the displayed angles never jump at gimbal
//!   lock. See [`Inspector`].
//! - **Handles, not pointers.** Objects live in a [`hecs::World`]; a stale
//!   [`Entity`] resolves to "no object" instead of aliasing reused memory.
//! - **One matrix convention.** World matrices compose scale → rotation →
//!   translation through [`Transform::matrix`], everywhere.

mod angles;
mod camera;
mod editor;
mod inspector;
pub mod picking;
mod rotation;
pub mod sampling;
mod scene;
mod transform;

pub use angles::{angle_from_xy, wrap_angle_360};
pub use camera::OrbitCamera;
pub use editor::{DisplayMode, Editor, EditorConfig, EditorEvent};
pub use inspector::{EditField, Inspector};
pub use picking::{Collider, Ray, RayHit};
pub use rotation::{euler_to_quaternion, quaternion_to_euler};
pub use sampling::{unit_hemisphere, unit_sphere};
pub use scene::{DEFAULT_FRAMES_IN_FLIGHT, DirtyFrames, Name, Scene, WorldMatrix};
pub use transform::Transform;

// Re-export glam math types for convenience
pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

// Scene-object handles come straight from hecs
pub use hecs::{Entity, World};
