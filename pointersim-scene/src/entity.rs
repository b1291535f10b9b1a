//! Scene entity types

use pointersim_core::{Rgba, Transform3D, TriangleMesh};
use serde::{Deserialize, Serialize};

/// Identifier assigned to an entity by the scene registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Display properties of a model entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayProperties {
    pub color: [f64; 3],
    pub opacity: f64,
    pub slice_intersection_visible: bool,
    pub scalar_visibility: bool,
    pub selectable: bool,
}

impl Default for DisplayProperties {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            opacity: 1.0,
            slice_intersection_visible: false,
            scalar_visibility: false,
            selectable: true,
        }
    }
}

/// A renderable mesh entity with display properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntity {
    pub name: String,
    pub mesh: TriangleMesh,
    pub display: DisplayProperties,
    /// Transform node this model observes, if any
    pub transform: Option<EntityId>,
    /// Color table driving the active scalar field, if any
    pub color_table: Option<EntityId>,
    /// Name of the scalar field used for coloring
    pub active_scalar: Option<String>,
}

impl ModelEntity {
    pub fn new(name: &str, mesh: TriangleMesh) -> Self {
        Self {
            name: name.to_string(),
            mesh,
            display: DisplayProperties::default(),
            transform: None,
            color_table: None,
            active_scalar: None,
        }
    }
}

/// A transform node in the scene's transform graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformEntity {
    pub name: String,
    pub local: Transform3D,
    /// Parent transform node; the effective world matrix composes the chain
    pub parent: Option<EntityId>,
}

impl TransformEntity {
    pub fn new(name: &str, local: Transform3D) -> Self {
        Self {
            name: name.to_string(),
            local,
            parent: None,
        }
    }
}

/// A color lookup table entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorTableEntity {
    pub name: String,
    pub colors: Vec<Rgba>,
}

/// Any entity the scene registry can hold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entity {
    Model(ModelEntity),
    Transform(TransformEntity),
    ColorTable(ColorTableEntity),
}

impl Entity {
    /// User-facing name of the entity
    pub fn name(&self) -> &str {
        match self {
            Entity::Model(m) => &m.name,
            Entity::Transform(t) => &t.name,
            Entity::ColorTable(c) => &c.name,
        }
    }
}
