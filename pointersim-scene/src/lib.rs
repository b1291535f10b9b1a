//! Scene registry and transform graph contracts for pointersim
//!
//! The visualization host owns the scene: a generic object store keyed by
//! name and id, holding model, transform and color-table entities. This
//! crate models that boundary as the [`SceneRegistry`] trait, provides an
//! in-memory implementation for tests and headless use, and defines the
//! injected [`EventLog`] capability used for soft-failure reporting.

pub mod entity;
pub mod graph;
pub mod log;
pub mod registry;

pub use entity::*;
pub use graph::*;
pub use log::*;
pub use registry::*;
