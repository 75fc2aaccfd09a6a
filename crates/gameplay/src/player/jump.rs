//! Jumping and gravity.
//!
//! Grounding is driven by floor trigger contacts (see [`super::sensing`]); this
//! module only integrates the vertical speed and tracks the jump.

use bevy::prelude::*;
use tracing::debug;

use crate::components::{Player, PlayerInput, Velocity};
use crate::settings::PlayerSettings;

/// Vertical state of the player after one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalStep {
    pub velocity: f32,
    pub jumping: bool,
}

/// Advances the vertical state by one frame.
///
/// `grounded` is an input here: only floor contacts change it. A jump starts
/// on the input edge when the player is grounded, not grabbing and not already
/// jumping. While still touching the floor after take-off, the rising player
/// keeps decelerating; once its speed is no longer upward it has landed, so
/// `jumping` ends and the grounded pin applies again. Airborne frames lose
/// `gravity * dt` without any clamp.
pub fn vertical_step(
    velocity: f32,
    grounded: bool,
    jumping: bool,
    jump_pressed: bool,
    grabbing: bool,
    settings: &PlayerSettings,
    dt: f32,
) -> VerticalStep {
    if grounded && jump_pressed && !grabbing && !jumping {
        return VerticalStep {
            velocity: settings.jump_height,
            jumping: true,
        };
    }

    if !grounded || (jumping && velocity > 0.0) {
        return VerticalStep {
            velocity: velocity - settings.gravity * dt,
            jumping,
        };
    }

    VerticalStep {
        velocity: 0.0,
        jumping: false,
    }
}

/// System that applies jumping and gravity to the player's vertical velocity.
pub fn update_vertical_velocity(
    mut players: Query<(Entity, &mut Player, &PlayerInput, &mut Velocity)>,
    settings: Res<PlayerSettings>,
    time: Res<Time>,
) {
    let dt = time.delta_secs();
    for (entity, mut player, input, mut velocity) in &mut players {
        let step = vertical_step(
            velocity.linear.y,
            player.grounded,
            player.jumping,
            input.jump_pressed,
            player.grabbing,
            &settings,
            dt,
        );

        if step.jumping && !player.jumping {
            debug!("Player {entity} jumps");
        } else if player.jumping && !step.jumping {
            debug!("Player {entity} landed");
        }

        player.jumping = step.jumping;
        velocity.linear.y = step.velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> PlayerSettings {
        PlayerSettings {
            walk_speed: 10.0,
            gravity: 20.0,
            jump_height: 8.0,
        }
    }

    #[test]
    fn grounded_pins_vertical_speed() {
        for prior in [-50.0, -0.1, 0.0, 3.0] {
            let step = vertical_step(prior, true, false, false, false, &settings(), 0.1);
            assert_eq!(step.velocity, 0.0);
            assert!(!step.jumping);
        }
    }

    #[test]
    fn airborne_speed_decreases_by_gravity_each_frame() {
        let mut velocity = 0.0;
        for _ in 0..100 {
            let step = vertical_step(velocity, false, true, false, false, &settings(), 0.1);
            assert!((step.velocity - (velocity - 2.0)).abs() < 1e-4);
            velocity = step.velocity;
        }
        // No terminal velocity.
        assert!(velocity < -199.0);
    }

    #[test]
    fn jump_edge_starts_a_jump() {
        let step = vertical_step(0.0, true, false, true, false, &settings(), 0.1);
        assert!(step.jumping);
        assert_eq!(step.velocity, 8.0);
    }

    #[test]
    fn no_jump_while_grabbing() {
        let step = vertical_step(0.0, true, false, true, true, &settings(), 0.1);
        assert!(!step.jumping);
        assert_eq!(step.velocity, 0.0);
    }

    #[test]
    fn no_jump_while_already_jumping() {
        let step = vertical_step(3.0, false, true, true, false, &settings(), 0.1);
        assert!(step.jumping);
        assert!((step.velocity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn no_jump_in_mid_air() {
        let step = vertical_step(-1.0, false, false, true, false, &settings(), 0.1);
        assert!(!step.jumping);
        assert!((step.velocity - (-3.0)).abs() < 1e-6);
    }

    #[test]
    fn rising_while_touching_the_floor_is_not_pinned() {
        let step = vertical_step(8.0, true, true, false, false, &settings(), 0.1);
        assert!(step.jumping);
        assert!((step.velocity - 6.0).abs() < 1e-6);
    }

    #[test]
    fn falling_back_onto_the_floor_lands() {
        for prior in [0.0, -0.5, -12.0] {
            let step = vertical_step(prior, true, true, false, false, &settings(), 0.1);
            assert!(!step.jumping);
            assert_eq!(step.velocity, 0.0);
        }
    }
}
