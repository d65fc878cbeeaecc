//! Headless tour of the editing core: build a scene, pick, edit, and print
//! the world matrices a renderer would consume.

use maquette::{
    Collider, EditField, Editor, EditorConfig, EditorEvent, Transform, Vec3, sampling,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn main() {
    env_logger::init();

    let mut editor = Editor::with_config(EditorConfig::new().frames_in_flight(3));

    // The ground grid is not pickable, so it carries no collider.
    editor
        .scene_mut()
        .spawn("Grid", Transform::new().scale(Vec3::new(20.0, 0.01, 20.0)));

    let cube = editor
        .scene_mut()
        .spawn("Cube", Transform::from_position(Vec3::new(0.0, 1.0, 0.0)));
    editor.scene_mut().attach_collider(cube, Collider::unit_box());
    editor.camera_mut().target = Vec3::new(0.0, 1.0, 0.0);

    // A ring of satellites in random directions around the cube.
    let mut rng = SmallRng::seed_from_u64(2026);
    for i in 0..5 {
        let direction = sampling::unit_hemisphere(&mut rng, Vec3::Y);
        let satellite = editor.scene_mut().spawn(
            format!("Satellite {i}"),
            Transform::from_position(direction * 6.0).uniform_scale(0.5),
        );
        editor
            .scene_mut()
            .attach_collider(satellite, Collider::unit_sphere());
    }

    println!("hierarchy:");
    let entries: Vec<_> = editor.scene().iter().collect();
    for entity in &entries {
        if let Some(name) = editor.scene().name(*entity) {
            println!("  {}", name.as_str());
        }
    }

    // Click in the middle of the scene view: the cube is dead center.
    let picked = editor.pick_at(640.0, 360.0, 1280.0, 720.0);
    match picked {
        Some(entity) => println!(
            "\npicked: {}",
            editor
                .scene()
                .name(entity)
                .map(|n| n.as_str().to_owned())
                .unwrap_or_default()
        ),
        None => println!("\npicked: nothing"),
    }

    // Drag the inspector fields.
    editor.handle(EditorEvent::Edit(EditField::Position, Vec3::new(2.0, 1.0, 0.0)));
    editor.handle(EditorEvent::Edit(EditField::Rotation, Vec3::new(0.0, 90.0, 0.0)));
    editor.handle(EditorEvent::Edit(EditField::Scale, Vec3::splat(1.5)));

    if let Some(entity) = editor.inspector().selection() {
        println!(
            "position {:?}  rotation {:?}  scale {:?}",
            editor.inspector().position().unwrap_or_default(),
            editor.inspector().rotation().unwrap_or_default(),
            editor.inspector().scale().unwrap_or_default(),
        );
        if let Some(world) = editor.scene().world_matrix(entity) {
            println!("world matrix after edits:");
            for row in 0..4 {
                let r = world.row(row);
                println!("  [{:8.3} {:8.3} {:8.3} {:8.3}]", r.x, r.y, r.z, r.w);
            }
        }
        println!(
            "dirty for {} more frame uploads",
            editor.scene().dirty_frames(entity).unwrap_or(0)
        );
    }
}
