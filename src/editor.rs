//! The editor shell: scene, selection, camera, and display mode in one
//! place, driven by the events the GUI layer produces.
//!
//! The GUI itself (panels, drag widgets, docking) lives outside this crate.
//! What arrives here is already data: "the user selected this object",
//! "the user dragged this field to this value", "the user clicked at this
//! pixel". [`Editor::handle`] and [`Editor::pick_at`] consume those and keep
//! the scene, the inspector session, and the view state consistent.

use glam::Vec3;
use hecs::Entity;

use crate::camera::OrbitCamera;
use crate::inspector::{EditField, Inspector};
use crate::picking::{self, Ray};
use crate::scene::Scene;

/// How the scene view draws objects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Filled triangles.
    #[default]
    Solid,
    /// Wireframe only.
    Wireframe,
}

/// Editor behavior knobs.
///
/// # Example
///
/// ```
/// use maquette::EditorConfig;
///
/// let config = EditorConfig::new().frames_in_flight(2).scale_limits(0.1, 50.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EditorConfig {
    /// Frame resources the renderer keeps in flight; drives dirty tracking.
    pub frames_in_flight: u32,
    /// Lower bound applied to scale edits.
    pub min_scale: f32,
    /// Upper bound applied to scale edits.
    pub max_scale: f32,
    /// Near plane for picking rays.
    pub near: f32,
    /// Far plane for picking rays.
    pub far: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            frames_in_flight: crate::scene::DEFAULT_FRAMES_IN_FLIGHT,
            min_scale: 0.0,
            max_scale: 100.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many frame resources the renderer keeps in flight.
    pub fn frames_in_flight(mut self, frames: u32) -> Self {
        self.frames_in_flight = frames;
        self
    }

    /// Set the bounds applied to scale edits.
    pub fn scale_limits(mut self, min: f32, max: f32) -> Self {
        self.min_scale = min;
        self.max_scale = max;
        self
    }
}

/// An input event from the GUI layer.
#[derive(Clone, Copy, Debug)]
pub enum EditorEvent {
    /// The user picked an object in the hierarchy (or cleared the
    /// selection).
    Select(Option<Entity>),
    /// The user dragged an inspector field to a new value.
    Edit(EditField, Vec3),
    /// The user toggled the scene-view draw mode.
    SetDisplayMode(DisplayMode),
}

/// The editor shell.
///
/// Owns the [`Scene`], the [`Inspector`] session, the scene-view
/// [`OrbitCamera`], and the display mode. The renderer reads the scene and
/// display mode; the GUI reads the inspector and writes events.
pub struct Editor {
    scene: Scene,
    inspector: Inspector,
    camera: OrbitCamera,
    display_mode: DisplayMode,
    config: EditorConfig,
}

impl Editor {
    /// Creates an editor with default configuration and an empty scene.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    /// Creates an editor with the given configuration.
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            scene: Scene::with_frames_in_flight(config.frames_in_flight),
            inspector: Inspector::new(),
            camera: OrbitCamera::new(),
            display_mode: DisplayMode::default(),
            config,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn inspector(&self) -> &Inspector {
        &self.inspector
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    /// Applies one GUI event. Returns `false` when the event had no effect
    /// (an edit with nothing selected, or a stale selection handle).
    pub fn handle(&mut self, event: EditorEvent) -> bool {
        match event {
            EditorEvent::Select(target) => {
                self.inspector.select(&self.scene, target);
                self.inspector.selection() == target
            }
            EditorEvent::Edit(field, value) => {
                let value = if field == EditField::Scale {
                    value.clamp(
                        Vec3::splat(self.config.min_scale),
                        Vec3::splat(self.config.max_scale),
                    )
                } else {
                    value
                };
                self.inspector.edit(&mut self.scene, field, value)
            }
            EditorEvent::SetDisplayMode(mode) => {
                self.display_mode = mode;
                true
            }
        }
    }

    /// Picks the object under a scene-view pixel and makes it the selection.
    ///
    /// A miss clears the selection, matching the click-on-empty-space
    /// behavior of the scene view. Returns the new selection.
    pub fn pick_at(
        &mut self,
        screen_x: f32,
        screen_y: f32,
        screen_width: f32,
        screen_height: f32,
    ) -> Option<Entity> {
        let aspect = screen_width / screen_height;
        let ray = Ray::from_screen(
            screen_x,
            screen_y,
            screen_width,
            screen_height,
            self.camera.view_matrix(),
            self.camera.projection_matrix(aspect, self.config.near, self.config.far),
        );

        let picked = picking::raycast(&self.scene, &ray).map(|hit| hit.entity);
        self.inspector.select(&self.scene, picked);
        self.inspector.selection()
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
