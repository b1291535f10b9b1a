//! Pointer plugin logic
//!
//! This crate implements the two components of the pointer plugin: the
//! geometry builder, which inflates a directional segment into a tube mesh
//! with a distance-fade color ramp, and the pose composer, which places the
//! pointer in world space from manual translation values or an attached
//! tracked-controller transform. It also carries the module descriptors,
//! persisted parameter state and the virtual-reality stub module.

pub mod geometry;
pub mod module;
pub mod params;
pub mod pose;
pub mod ramp;
pub mod vr_stub;

pub use geometry::*;
pub use module::*;
pub use params::*;
pub use pose::*;
pub use ramp::*;
