//! Core data structures for pointersim
//!
//! This crate provides the fundamental types shared by the pointer plugin:
//! points and colors, triangle meshes with named per-vertex scalar fields,
//! linear transforms, and the error taxonomy.

pub mod error;
pub mod mesh;
pub mod point;
pub mod transform;

pub use error::*;
pub use mesh::*;
pub use point::*;
pub use transform::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Matrix4, Point3, Unit, Vector3};

/// Common result type for pointersim operations
pub type Result<T> = std::result::Result<T, Error>;
