//! Mouse picking: casting rays from the scene view into the scene.
//!
//! A click in the scene view becomes a [`Ray`] via [`Ray::from_screen`],
//! which is tested against every object carrying a [`Collider`]. Colliders
//! are coarse shapes (box or sphere) positioned and scaled by the object's
//! world matrix; picking never touches mesh geometry.
//!
//! # Example
//!
//! ```
//! use maquette::{Collider, Ray, Scene, Transform, Vec3, picking};
//!
//! let mut scene = Scene::new();
//! let cube = scene.spawn("Cube", Transform::from_position(Vec3::new(0.0, 0.0, -5.0)));
//! scene.attach_collider(cube, Collider::unit_box());
//!
//! let ray = Ray::new(Vec3::ZERO, Vec3::NEG_Z);
//! let hit = picking::raycast(&scene, &ray).unwrap();
//! assert_eq!(hit.entity, cube);
//! ```

use glam::{Mat4, Vec3, Vec4};
use hecs::Entity;

use crate::scene::{Scene, WorldMatrix};

/// A ray in world space, with origin and normalized direction.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    /// The starting point of the ray.
    pub origin: Vec3,
    /// The normalized direction of the ray.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray with the given origin and direction.
    ///
    /// The direction is normalized automatically.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Creates a picking ray from a position in the scene view.
    ///
    /// Screen coordinates are in pixels with the origin at the top left;
    /// `view` and `projection` come from the scene-view camera. The ray
    /// starts on the near plane and points through the clicked pixel.
    pub fn from_screen(
        screen_x: f32,
        screen_y: f32,
        screen_width: f32,
        screen_height: f32,
        view: Mat4,
        projection: Mat4,
    ) -> Self {
        // Pixel -> normalized device coordinates, flipping Y.
        let ndc_x = (2.0 * screen_x / screen_width) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen_y / screen_height);

        let inv_view_proj = (projection * view).inverse();

        let near_world = inv_view_proj * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let far_world = inv_view_proj * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let near_point = near_world.truncate() / near_world.w;
        let far_point = far_world.truncate() / far_world.w;

        Self {
            origin: near_point,
            direction: (far_point - near_point).normalize_or_zero(),
        }
    }

    /// The point at the given distance along the ray.
    #[inline]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance to the nearest intersection with an axis-aligned box, or
    /// `None` when the ray misses it.
    pub fn intersect_aabb(&self, min: Vec3, max: Vec3) -> Option<f32> {
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;

        for i in 0..3 {
            let origin = self.origin[i];
            let dir = self.direction[i];

            if dir.abs() < f32::EPSILON {
                // Parallel to this slab: inside or out for good.
                if origin < min[i] || origin > max[i] {
                    return None;
                }
            } else {
                let inv_dir = 1.0 / dir;
                let mut t1 = (min[i] - origin) * inv_dir;
                let mut t2 = (max[i] - origin) * inv_dir;
                if t1 > t2 {
                    std::mem::swap(&mut t1, &mut t2);
                }
                t_min = t_min.max(t1);
                t_max = t_max.min(t2);
                if t_min > t_max {
                    return None;
                }
            }
        }

        if t_min > 0.0 {
            Some(t_min)
        } else if t_max > 0.0 {
            Some(t_max)
        } else {
            None
        }
    }

    /// Distance to the nearest intersection with a sphere, or `None` when
    /// the ray misses it.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let a = self.direction.dot(self.direction);
        let b = 2.0 * oc.dot(self.direction);
        let c = oc.dot(oc) - radius * radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return None;
        }

        let sqrt_disc = discriminant.sqrt();
        let t1 = (-b - sqrt_disc) / (2.0 * a);
        let t2 = (-b + sqrt_disc) / (2.0 * a);

        if t1 > 0.0 {
            Some(t1)
        } else if t2 > 0.0 {
            Some(t2)
        } else {
            None
        }
    }
}

/// Coarse collision shape used for picking.
///
/// Boxes are axis-aligned; both shapes are centered on the object's world
/// position and scaled by its world scale. Rotation is deliberately
/// ignored: these are pick targets, not physics.
#[derive(Clone, Copy, Debug)]
pub enum Collider {
    /// Axis-aligned box defined by half-extents.
    Box {
        /// Half the size of the box on each axis.
        half_extents: Vec3,
    },
    /// Sphere defined by radius.
    Sphere {
        /// Radius of the sphere.
        radius: f32,
    },
}

impl Collider {
    /// Box collider from full dimensions.
    pub fn box_collider(size: Vec3) -> Self {
        Self::Box {
            half_extents: size * 0.5,
        }
    }

    /// Sphere collider with the given radius.
    pub fn sphere(radius: f32) -> Self {
        Self::Sphere { radius }
    }

    /// A 1×1×1 box collider.
    pub fn unit_box() -> Self {
        Self::box_collider(Vec3::ONE)
    }

    /// A sphere collider of radius 0.5.
    pub fn unit_sphere() -> Self {
        Self::Sphere { radius: 0.5 }
    }

    /// Tests the ray against this collider placed at `position` with
    /// `scale`, returning the hit distance.
    pub fn intersect(&self, ray: &Ray, position: Vec3, scale: Vec3) -> Option<f32> {
        match self {
            Collider::Box { half_extents } => {
                let scaled_half = *half_extents * scale;
                ray.intersect_aabb(position - scaled_half, position + scaled_half)
            }
            Collider::Sphere { radius } => {
                // Non-uniform scale on a sphere picks by the average.
                let avg_scale = (scale.x + scale.y + scale.z) / 3.0;
                ray.intersect_sphere(position, radius * avg_scale)
            }
        }
    }
}

impl Default for Collider {
    fn default() -> Self {
        Self::unit_box()
    }
}

/// A ray-collider intersection.
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    /// The object that was hit.
    pub entity: Entity,
    /// Distance from ray origin to the hit point.
    pub distance: f32,
    /// World-space position of the hit point.
    pub point: Vec3,
}

/// Casts a ray against every object with a collider.
///
/// Position and scale are taken from each object's world matrix. Hits come
/// back sorted nearest-first.
pub fn raycast_all(scene: &Scene, ray: &Ray) -> Vec<RayHit> {
    let mut hits = Vec::new();

    for (entity, (world, collider)) in scene.world().query::<(&WorldMatrix, &Collider)>().iter() {
        let (scale, _rotation, position) = world.0.to_scale_rotation_translation();
        if let Some(distance) = collider.intersect(ray, position, scale) {
            hits.push(RayHit {
                entity,
                distance,
                point: ray.point_at(distance),
            });
        }
    }

    hits.sort_by(|a, b| {
        a.distance
            .partial_cmp(&b.distance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    hits
}

/// Casts a ray and returns the nearest hit, if any.
pub fn raycast(scene: &Scene, ray: &Ray) -> Option<RayHit> {
    raycast_all(scene, ray).into_iter().next()
}
