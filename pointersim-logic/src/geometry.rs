//! Pointer geometry construction
//!
//! The pointer is a directional line segment inflated into a circular
//! cross-section tube: one ring of vertices around each endpoint, side quads
//! split into triangles, no caps. A per-vertex "DistanceToOrigin" scalar
//! field drives the fade-out gradient along the rod.

use crate::ramp::{ColorRamp, COLOR_TABLE_NAME};
use pointersim_core::{Error, Point3d, Result, TriangleMesh, UnitVector3d, Vector3d};
use pointersim_scene::{
    ColorTableEntity, DisplayProperties, Entity, EntityId, EventLog, ModelEntity, SceneRegistry,
};

/// Scene name of the pointer model entity
pub const POINTER_MODEL_NAME: &str = "PointerModel";

/// Name of the per-vertex fade scalar field
pub const FADE_SCALAR_NAME: &str = "DistanceToOrigin";

/// Default tube radius
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Default number of polygon facets around the tube circumference
pub const DEFAULT_TUBE_SIDES: usize = 50;

/// Builds the pointer tube model and registers it into the scene.
///
/// Construction is idempotent per scene: if a pointer model is already
/// registered, `build` is a check-and-skip no-op returning the existing id.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerBuilder {
    pub origin: Point3d,
    pub direction: Vector3d,
    pub length: f64,
    pub radius: f64,
    pub tube_sides: usize,
}

impl PointerBuilder {
    pub fn new(origin: Point3d, direction: Vector3d, length: f64) -> Self {
        Self {
            origin,
            direction,
            length,
            radius: DEFAULT_RADIUS,
            tube_sides: DEFAULT_TUBE_SIDES,
        }
    }

    /// The direction normalized to unit length
    pub fn normalized_direction(&self) -> Result<UnitVector3d> {
        UnitVector3d::try_new(self.direction, 1e-12).ok_or(Error::DegenerateDirection)
    }

    /// Far tip of the segment, `origin + normalize(direction) * length`
    pub fn end_point(&self) -> Result<Point3d> {
        Ok(self.origin + self.normalized_direction()?.into_inner() * self.length)
    }

    /// Build the tube mesh, attach the fade scalars and register the model,
    /// its display properties and its color ramp into the scene.
    pub fn build(&self, scene: &mut dyn SceneRegistry, log: &dyn EventLog) -> Result<EntityId> {
        if let Some(existing) = scene.find_by_name(POINTER_MODEL_NAME) {
            log.info("pointer model already exists, skipping rebuild");
            return Ok(existing);
        }

        let axis = self.normalized_direction()?;
        let end = self.origin + axis.into_inner() * self.length;

        let mut mesh = inflate_tube(&self.origin, &end, &axis, self.radius, self.tube_sides);
        let fade = compute_fade(&mesh, &self.origin)?;
        mesh.set_scalar_field(FADE_SCALAR_NAME, fade);

        let color_table = match scene.find_by_name(COLOR_TABLE_NAME) {
            Some(id) => id,
            None => scene.add_entity(Entity::ColorTable(ColorTableEntity {
                name: COLOR_TABLE_NAME.to_string(),
                colors: ColorRamp::build().into_entries(),
            }))?,
        };

        let mut model = ModelEntity::new(POINTER_MODEL_NAME, mesh);
        model.display = DisplayProperties {
            color: [1.0, 0.0, 0.0],
            opacity: 1.0,
            slice_intersection_visible: true,
            scalar_visibility: true,
            selectable: false,
        };
        model.color_table = Some(color_table);
        model.active_scalar = Some(FADE_SCALAR_NAME.to_string());

        scene.add_entity(Entity::Model(model))
    }
}

/// Compute the inverted normalized distance-to-origin scalar for every
/// vertex: 1.0 at the vertex nearest the origin, 0.0 at the farthest.
pub fn compute_fade(mesh: &TriangleMesh, origin: &Point3d) -> Result<Vec<f64>> {
    if mesh.vertices.is_empty() {
        return Err(Error::DegenerateMesh);
    }

    let distances: Vec<f64> = mesh.vertices.iter().map(|v| (v - origin).norm()).collect();
    let min = distances.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = distances.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let spread = max - min;
    if spread <= 0.0 {
        return Err(Error::DegenerateMesh);
    }

    Ok(distances.iter().map(|d| 1.0 - (d - min) / spread).collect())
}

/// Two unit vectors spanning the plane perpendicular to the tube axis
fn tube_basis(axis: &UnitVector3d) -> (Vector3d, Vector3d) {
    let helper = if axis.x.abs() < 0.9 {
        Vector3d::x()
    } else {
        Vector3d::y()
    };
    let u = axis.cross(&helper).normalize();
    let v = axis.cross(&u);
    (u, v)
}

/// Sweep a regular polygon along the segment: one ring per endpoint,
/// `sides` vertices per ring, side quads as two triangles each.
fn inflate_tube(
    start: &Point3d,
    end: &Point3d,
    axis: &UnitVector3d,
    radius: f64,
    sides: usize,
) -> TriangleMesh {
    let (u, v) = tube_basis(axis);

    let mut vertices = Vec::with_capacity(2 * sides);
    for center in [start, end] {
        for i in 0..sides {
            let angle = std::f64::consts::TAU * i as f64 / sides as f64;
            vertices.push(center + (u * angle.cos() + v * angle.sin()) * radius);
        }
    }

    let mut faces = Vec::with_capacity(2 * sides);
    for i in 0..sides {
        let a = i;
        let b = (i + 1) % sides;
        let c = sides + i;
        let d = sides + b;
        faces.push([a, b, d]);
        faces.push([a, d, c]);
    }

    TriangleMesh::from_vertices_and_faces(vertices, faces)
}
