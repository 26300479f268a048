//! Arcade physics world
//!
//! Stand-in for the host engine's rigid-body physics so rounds can run
//! headless: gravity, per-axis linear drag, bouncy world bounds and a flat
//! ground whose middle stretch is the landing zone.

use glam::Vec2;

use super::state::{FlightBody, TerrainId};
use crate::tuning::WorldTuning;

/// Move `v` toward zero by `amount` without overshooting
fn apply_drag(v: f32, amount: f32) -> f32 {
    if v.abs() <= amount {
        0.0
    } else {
        v - amount * v.signum()
    }
}

#[derive(Debug, Clone)]
pub struct ArcadeWorld {
    pub tuning: WorldTuning,
}

impl ArcadeWorld {
    pub fn new(tuning: WorldTuning) -> Self {
        Self { tuning }
    }

    /// Horizontal extent of the landing zone (min, max)
    pub fn landing_zone_span(&self) -> (f32, f32) {
        let half = self.tuning.landing_zone_width / 2.0;
        (self.tuning.landing_zone_x - half, self.tuning.landing_zone_x + half)
    }

    /// Which terrain body lies under `x`
    pub fn terrain_at(&self, x: f32) -> TerrainId {
        let (min, max) = self.landing_zone_span();
        if (min..=max).contains(&x) {
            TerrainId::LANDING_ZONE
        } else {
            TerrainId::GROUND
        }
    }

    /// Integrate one step. Returns the terrain the body is touching, if any.
    pub fn step(&self, body: &mut FlightBody, dt: f32) -> Option<TerrainId> {
        let t = &self.tuning;
        let r = t.plane_radius;

        body.velocity += t.gravity * dt;
        body.velocity = Vec2::new(
            apply_drag(body.velocity.x, t.drag * dt),
            apply_drag(body.velocity.y, t.drag * dt),
        );
        body.position += body.velocity * dt;
        body.attitude += body.angular_rate * dt;

        // Side walls and ceiling
        if body.position.x < r {
            body.position.x = r;
            body.velocity.x = -body.velocity.x * t.bounce;
        } else if body.position.x > t.width - r {
            body.position.x = t.width - r;
            body.velocity.x = -body.velocity.x * t.bounce;
        }
        if body.position.y < r {
            body.position.y = r;
            body.velocity.y = -body.velocity.y * t.bounce;
        }

        let ground = t.ground_top();
        if body.position.y + r >= ground {
            body.position.y = ground - r;
            if body.velocity.y > 0.0 {
                body.velocity.y = -body.velocity.y * t.bounce;
            }
            return Some(self.terrain_at(body.position.x));
        }

        None
    }
}
