//! Point, vector and color types

use nalgebra::{Point3, Unit, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with double precision coordinates
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;

/// A unit-length 3D direction
pub type UnitVector3d = Unit<Vector3<f64>>;

/// An RGBA color with channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque red, the pointer's base color
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// Opaque black
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}
