//! Transform graph composition
//!
//! Transform entities form a parent/child graph; a node's effective world
//! matrix is its own local matrix pre-multiplied by the parent chain. The
//! composition is recomputed on every read, so a parent that moves (e.g. a
//! live controller feed) is picked up without any invalidation protocol.

use crate::entity::EntityId;
use crate::registry::SceneRegistry;
use pointersim_core::{Error, Result, Transform3D};

/// Compute the effective world transform of a transform entity by walking
/// its parent chain. Fails when `id` is not a transform entity or when the
/// parent chain loops back on itself.
pub fn world_transform(scene: &dyn SceneRegistry, id: EntityId) -> Result<Transform3D> {
    let node = scene
        .transform(id)
        .ok_or_else(|| Error::EntityNotFound(format!("{:?}", id)))?;

    let mut world = node.local;
    let mut visited = vec![id];
    let mut current = node.parent;

    while let Some(parent_id) = current {
        if visited.contains(&parent_id) {
            return Err(Error::CyclicTransform(node.name.clone()));
        }
        let parent = scene
            .transform(parent_id)
            .ok_or_else(|| Error::EntityNotFound(format!("{:?}", parent_id)))?;
        world = parent.local * world;
        visited.push(parent_id);
        current = parent.parent;
    }

    Ok(world)
}
