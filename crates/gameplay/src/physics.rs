//! Position integration and rigid attachments.

use bevy::prelude::*;
use tracing::warn;

use crate::components::{FixedJoint, Velocity};

/// System that applies velocity to position.
///
/// The horizontal component is already a per-frame displacement, the
/// vertical component is a speed integrated over the frame time.
pub fn apply_velocity(mut query: Query<(&mut Transform, &Velocity)>, time: Res<Time>) {
    let dt = time.delta_secs();
    for (mut transform, velocity) in &mut query {
        transform.translation.x += velocity.linear.x;
        transform.translation.y += velocity.linear.y * dt;
    }
}

/// System that moves jointed bodies along with the body they are attached to.
pub fn follow_joints(
    mut commands: Commands,
    mut jointed: Query<(Entity, &FixedJoint, &mut Transform)>,
    bodies: Query<&Transform, Without<FixedJoint>>,
) {
    for (entity, joint, mut transform) in &mut jointed {
        match bodies.get(joint.connected) {
            Ok(body) => {
                let target = body.translation + joint.offset;
                transform.translation.x = target.x;
                transform.translation.y = target.y;
            }
            Err(_) => {
                warn!(
                    "Joint of {entity} points at missing body {}, removing it",
                    joint.connected
                );
                commands.entity(entity).remove::<FixedJoint>();
            }
        }
    }
}
