//! Module registration metadata and the setup sequence
//!
//! The host triggers [`set_up_pointer`] from a single UI button; everything
//! else on the widget side (slider bindings, lifecycle observers) stays in
//! the host adapter layer.

use crate::geometry::PointerBuilder;
use crate::params::ParameterState;
use crate::pose::PoseComposer;
use pointersim_core::{Point3d, Result, Vector3d};
use pointersim_scene::{EntityId, EventLog, SceneRegistry};

/// Metadata the host displays for a plugin module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub title: &'static str,
    pub category: &'static str,
}

/// Descriptor of the pointer simulator module
pub const POINTER_SIMULATOR: ModuleDescriptor = ModuleDescriptor {
    title: "PointerSimulator",
    category: "Virtual Reality",
};

/// Default segment length of the pointer rod, in scene units
pub const DEFAULT_LENGTH: f64 = 500.0;

/// Default segment origin
pub fn default_origin() -> Point3d {
    Point3d::origin()
}

/// Default pointing direction, straight into the screen
pub fn default_direction() -> Vector3d {
    Vector3d::new(0.0, 0.0, -1.0)
}

/// Run the full setup sequence: write parameter defaults, build the pointer
/// model, apply the stored manual translation, then try to attach to the
/// controller. Controller absence is a soft failure and leaves a usable
/// manually-placed pointer.
pub fn set_up_pointer(
    scene: &mut dyn SceneRegistry,
    log: &dyn EventLog,
    params: &mut ParameterState,
    composer: &mut PoseComposer,
) -> Result<EntityId> {
    params.apply_translation_defaults();

    let builder = PointerBuilder::new(default_origin(), default_direction(), DEFAULT_LENGTH);
    let model_id = builder.build(scene, log)?;

    let (rl, ap, si) = params.translation();
    composer.set_manual_translation(scene, log, rl, ap, si);
    composer.attach_to_controller(scene, log);

    Ok(model_id)
}
