//! Mesh data structures and functionality

use crate::point::*;
use serde::{Deserialize, Serialize};

/// A named per-vertex scalar field, one value per mesh vertex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalarField {
    pub name: String,
    pub values: Vec<f64>,
}

/// A triangle mesh with vertices, faces and optional per-vertex scalar fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3d>,
    pub faces: Vec<[usize; 3]>,
    pub scalars: Vec<ScalarField>,
}

impl TriangleMesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            scalars: Vec::new(),
        }
    }

    /// Create a mesh from vertices and faces
    pub fn from_vertices_and_faces(vertices: Vec<Point3d>, faces: Vec<[usize; 3]>) -> Self {
        Self {
            vertices,
            faces,
            scalars: Vec::new(),
        }
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh is empty
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Attach a named per-vertex scalar field. The field is ignored when its
    /// length does not match the vertex count; an existing field with the
    /// same name is replaced.
    pub fn set_scalar_field(&mut self, name: &str, values: Vec<f64>) {
        if values.len() != self.vertices.len() {
            return;
        }
        if let Some(field) = self.scalars.iter_mut().find(|f| f.name == name) {
            field.values = values;
        } else {
            self.scalars.push(ScalarField {
                name: name.to_string(),
                values,
            });
        }
    }

    /// Look up a scalar field by name
    pub fn scalar_field(&self, name: &str) -> Option<&ScalarField> {
        self.scalars.iter().find(|f| f.name == name)
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}
