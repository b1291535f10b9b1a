//! Pointer pose composition
//!
//! The composer owns the pointer's local transform node and decides which of
//! two sources places the pointer in world space: the manual translation
//! values, or an externally owned tracked-controller transform the node is
//! reparented under. Exactly one source is active at any time; attachment is
//! a reparenting operation, not a blend.
//!
//! Soft failures (missing model, missing controller) are logged through the
//! injected [`EventLog`] and leave all state untouched, so the caller can
//! retry on a later user action.

use crate::geometry::POINTER_MODEL_NAME;
use pointersim_core::{Error, Transform3D, Vector3d};
use pointersim_scene::{Entity, EntityId, EventLog, SceneRegistry, TransformEntity};

/// Scene name of the pointer's local transform entity
pub const POINTER_TRANSFORM_NAME: &str = "PointerTransform";

/// Well-known scene name of the tracked right-controller transform
pub const RIGHT_CONTROLLER_NAME: &str = "VirtualReality.RightController";

/// Which source currently determines the pointer's world pose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseSource {
    /// No transform exists yet
    Uninitialized,
    /// The manual translation values place the pointer
    ManualOnly,
    /// The controller transform places the pointer
    Attached,
}

/// Manages placement of the pointer model in world space
#[derive(Debug)]
pub struct PoseComposer {
    state: PoseSource,
    transform_id: Option<EntityId>,
    controller_id: Option<EntityId>,
    translation: Vector3d,
}

impl PoseComposer {
    pub fn new() -> Self {
        Self {
            state: PoseSource::Uninitialized,
            transform_id: None,
            controller_id: None,
            translation: Vector3d::zeros(),
        }
    }

    pub fn state(&self) -> PoseSource {
        self.state
    }

    /// The stored manual translation `(rl, ap, si)`
    pub fn translation(&self) -> Vector3d {
        self.translation
    }

    /// Id of the pointer's local transform entity, once created
    pub fn transform_id(&self) -> Option<EntityId> {
        self.transform_id
    }

    /// Id of the controller transform, while attached
    pub fn controller_id(&self) -> Option<EntityId> {
        self.controller_id
    }

    /// Set the manual translation. The first successful call creates the
    /// local transform entity and links the pointer model to it; later calls
    /// replace the translation matrix in place. While a controller is
    /// attached the value is stored but the node is left alone, so it takes
    /// effect again only on detach.
    pub fn set_manual_translation(
        &mut self,
        scene: &mut dyn SceneRegistry,
        log: &dyn EventLog,
        rl: f64,
        ap: f64,
        si: f64,
    ) {
        let translation = Vector3d::new(rl, ap, si);

        let Some(transform_id) = self.transform_id else {
            let model_id = match scene.find_by_name(POINTER_MODEL_NAME) {
                Some(id) if scene.model(id).is_some() => id,
                _ => {
                    log.error(&Error::ModelNotInitialized.to_string());
                    return;
                }
            };

            let node =
                TransformEntity::new(POINTER_TRANSFORM_NAME, Transform3D::translation(translation));
            let transform_id = match scene.add_entity(Entity::Transform(node)) {
                Ok(id) => id,
                Err(err) => {
                    log.error(&err.to_string());
                    return;
                }
            };
            if let Some(model) = scene.model_mut(model_id) {
                model.transform = Some(transform_id);
            }

            self.transform_id = Some(transform_id);
            self.translation = translation;
            self.state = PoseSource::ManualOnly;
            return;
        };

        self.translation = translation;
        if self.state == PoseSource::Attached {
            return;
        }
        match scene.transform_mut(transform_id) {
            Some(node) => node.local = Transform3D::translation(translation),
            None => log.error(&Error::EntityNotFound(POINTER_TRANSFORM_NAME.to_string()).to_string()),
        }
    }

    /// Attach the pointer to the tracked controller transform, looked up by
    /// its well-known name. On success the local transform is reparented
    /// under the controller and its matrix reset to identity, so the
    /// effective world pose becomes the controller pose. Absence of the
    /// controller is logged and leaves the composer unchanged.
    pub fn attach_to_controller(&mut self, scene: &mut dyn SceneRegistry, log: &dyn EventLog) {
        let controller_id = match scene.find_by_name(RIGHT_CONTROLLER_NAME) {
            Some(id) if scene.transform(id).is_some() => id,
            _ => {
                log.error(
                    &Error::ControllerNotFound(RIGHT_CONTROLLER_NAME.to_string()).to_string(),
                );
                return;
            }
        };

        let Some(transform_id) = self.transform_id else {
            log.error(&Error::ModelNotInitialized.to_string());
            return;
        };
        let Some(node) = scene.transform_mut(transform_id) else {
            log.error(&Error::EntityNotFound(POINTER_TRANSFORM_NAME.to_string()).to_string());
            return;
        };

        node.parent = Some(controller_id);
        node.local = Transform3D::identity();
        self.controller_id = Some(controller_id);
        self.state = PoseSource::Attached;
        log.info("pointer attached to controller transform");
    }

    /// Detach from the controller and reapply the stored manual translation.
    /// A no-op (with a warning) when no controller is attached.
    pub fn detach_controller(&mut self, scene: &mut dyn SceneRegistry, log: &dyn EventLog) {
        if self.state != PoseSource::Attached {
            log.warning("no controller attached, nothing to detach");
            return;
        }
        let Some(transform_id) = self.transform_id else {
            log.error(&Error::EntityNotFound(POINTER_TRANSFORM_NAME.to_string()).to_string());
            return;
        };
        let Some(node) = scene.transform_mut(transform_id) else {
            log.error(&Error::EntityNotFound(POINTER_TRANSFORM_NAME.to_string()).to_string());
            return;
        };

        node.parent = None;
        node.local = Transform3D::translation(self.translation);
        self.controller_id = None;
        self.state = PoseSource::ManualOnly;
        log.info("pointer detached from controller transform");
    }

    /// Forget all entity references and return to the initial state. Called
    /// from the host's scene-close hook; the entities themselves are owned
    /// and torn down by the host.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for PoseComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::PointerBuilder;
    use approx::assert_relative_eq;
    use pointersim_core::Point3d;
    use pointersim_scene::{world_transform, InMemoryScene, RecordingLog};

    fn build_pointer(scene: &mut InMemoryScene) -> EntityId {
        let log = RecordingLog::new();
        PointerBuilder::new(Point3d::origin(), Vector3d::new(0.0, 0.0, -1.0), 500.0)
            .build(scene, &log)
            .unwrap()
    }

    fn add_controller(scene: &mut InMemoryScene, translation: Vector3d) -> EntityId {
        scene
            .add_entity(Entity::Transform(TransformEntity::new(
                RIGHT_CONTROLLER_NAME,
                Transform3D::translation(translation),
            )))
            .unwrap()
    }

    #[test]
    fn test_manual_translation_before_build_is_refused() {
        let mut scene = InMemoryScene::new();
        let log = RecordingLog::new();
        let mut composer = PoseComposer::new();

        composer.set_manual_translation(&mut scene, &log, 10.0, 0.0, 0.0);

        assert_eq!(composer.state(), PoseSource::Uninitialized);
        assert!(composer.transform_id().is_none());
        assert!(scene.find_by_name(POINTER_TRANSFORM_NAME).is_none());
        assert_eq!(log.errors().len(), 1);
    }

    #[test]
    fn test_first_manual_translation_creates_transform() {
        let mut scene = InMemoryScene::new();
        let log = RecordingLog::new();
        let mut composer = PoseComposer::new();
        let model_id = build_pointer(&mut scene);

        composer.set_manual_translation(&mut scene, &log, 10.0, 0.0, 0.0);

        assert_eq!(composer.state(), PoseSource::ManualOnly);
        let transform_id = composer.transform_id().unwrap();
        assert_eq!(scene.model(model_id).unwrap().transform, Some(transform_id));
        assert_relative_eq!(
            scene.transform(transform_id).unwrap().local.translation_part(),
            Vector3d::new(10.0, 0.0, 0.0),
            epsilon = 1e-12
        );
        assert!(log.errors().is_empty());
    }

    #[test]
    fn test_repeated_manual_translation_is_idempotent() {
        let mut scene = InMemoryScene::new();
        let log = RecordingLog::new();
        let mut composer = PoseComposer::new();
        build_pointer(&mut scene);

        composer.set_manual_translation(&mut scene, &log, 1.0, 2.0, 3.0);
        let first = scene.transform(composer.transform_id().unwrap()).unwrap().clone();
        composer.set_manual_translation(&mut scene, &log, 1.0, 2.0, 3.0);
        let second = scene.transform(composer.transform_id().unwrap()).unwrap().clone();

        assert_eq!(first, second);
        assert_eq!(scene.entity_count(), 3); // model + color table + transform
    }

    #[test]
    fn test_attach_without_controller_is_refused() {
        let mut scene = InMemoryScene::new();
        let log = RecordingLog::new();
        let mut composer = PoseComposer::new();
        build_pointer(&mut scene);
        composer.set_manual_translation(&mut scene, &log, 10.0, 0.0, 0.0);

        composer.attach_to_controller(&mut scene, &log);

        assert_eq!(composer.state(), PoseSource::ManualOnly);
        assert!(scene
            .transform(composer.transform_id().unwrap())
            .unwrap()
            .parent
            .is_none());
        assert_eq!(log.errors().len(), 1);
    }

    #[test]
    fn test_attach_before_transform_exists_is_refused() {
        let mut scene = InMemoryScene::new();
        let log = RecordingLog::new();
        let mut composer = PoseComposer::new();
        add_controller(&mut scene, Vector3d::new(5.0, 5.0, 5.0));

        composer.attach_to_controller(&mut scene, &log);

        assert_eq!(composer.state(), PoseSource::Uninitialized);
        assert_eq!(log.errors().len(), 1);
    }

    #[test]
    fn test_attach_takes_over_world_pose() {
        let mut scene = InMemoryScene::new();
        let log = RecordingLog::new();
        let mut composer = PoseComposer::new();
        build_pointer(&mut scene);
        composer.set_manual_translation(&mut scene, &log, 10.0, 0.0, 0.0);
        let controller_id = add_controller(&mut scene, Vector3d::new(0.0, -20.0, 4.0));

        composer.attach_to_controller(&mut scene, &log);

        assert_eq!(composer.state(), PoseSource::Attached);
        assert_eq!(composer.controller_id(), Some(controller_id));
        let transform_id = composer.transform_id().unwrap();
        assert_eq!(
            scene.transform(transform_id).unwrap().parent,
            Some(controller_id)
        );

        // World pose equals the controller pose, independent of the manual
        // translation stored before attaching
        let world = world_transform(&scene, transform_id).unwrap();
        assert_relative_eq!(
            world.translation_part(),
            Vector3d::new(0.0, -20.0, 4.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_manual_translation_while_attached_does_not_move_pointer() {
        let mut scene = InMemoryScene::new();
        let log = RecordingLog::new();
        let mut composer = PoseComposer::new();
        build_pointer(&mut scene);
        composer.set_manual_translation(&mut scene, &log, 10.0, 0.0, 0.0);
        add_controller(&mut scene, Vector3d::new(1.0, 2.0, 3.0));
        composer.attach_to_controller(&mut scene, &log);

        composer.set_manual_translation(&mut scene, &log, 99.0, 99.0, 99.0);

        let transform_id = composer.transform_id().unwrap();
        let world = world_transform(&scene, transform_id).unwrap();
        assert_relative_eq!(
            world.translation_part(),
            Vector3d::new(1.0, 2.0, 3.0),
            epsilon = 1e-12
        );
        // The value is stored for later detach
        assert_relative_eq!(
            composer.translation(),
            Vector3d::new(99.0, 99.0, 99.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_detach_restores_stored_translation() {
        let mut scene = InMemoryScene::new();
        let log = RecordingLog::new();
        let mut composer = PoseComposer::new();
        build_pointer(&mut scene);
        composer.set_manual_translation(&mut scene, &log, 10.0, 0.0, 0.0);
        add_controller(&mut scene, Vector3d::new(1.0, 2.0, 3.0));
        composer.attach_to_controller(&mut scene, &log);
        composer.set_manual_translation(&mut scene, &log, 7.0, 8.0, 9.0);

        composer.detach_controller(&mut scene, &log);

        assert_eq!(composer.state(), PoseSource::ManualOnly);
        assert!(composer.controller_id().is_none());
        let transform_id = composer.transform_id().unwrap();
        let node = scene.transform(transform_id).unwrap();
        assert!(node.parent.is_none());
        let world = world_transform(&scene, transform_id).unwrap();
        assert_relative_eq!(
            world.translation_part(),
            Vector3d::new(7.0, 8.0, 9.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_detach_without_attachment_is_a_noop() {
        let mut scene = InMemoryScene::new();
        let log = RecordingLog::new();
        let mut composer = PoseComposer::new();
        build_pointer(&mut scene);
        composer.set_manual_translation(&mut scene, &log, 1.0, 0.0, 0.0);

        composer.detach_controller(&mut scene, &log);

        assert_eq!(composer.state(), PoseSource::ManualOnly);
        assert!(log.errors().is_empty());
    }

    #[test]
    fn test_reset_returns_to_uninitialized() {
        let mut scene = InMemoryScene::new();
        let log = RecordingLog::new();
        let mut composer = PoseComposer::new();
        build_pointer(&mut scene);
        composer.set_manual_translation(&mut scene, &log, 1.0, 0.0, 0.0);

        composer.reset();

        assert_eq!(composer.state(), PoseSource::Uninitialized);
        assert!(composer.transform_id().is_none());
    }
}
