//! Movement domain: floor and wall contact sensing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ContactFlags, GameLayer, Player};

/// Reach of the contact rays beyond the collider edge.
const RAY_REACH: f32 = 4.0;

/// Ray cast from the player's feet and sides after physics has moved it.
/// The flags feed the next motion tick.
pub(crate) fn detect_contacts(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut ContactFlags), With<Player>>,
) {
    // Filter to only hit the layer being cast against (not the player itself)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);

    for (transform, collider, mut contacts) in &mut query {
        let half_extents = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => Vec2::new(12.0, 24.0),
        };

        let origin = transform.translation.truncate();
        let feet = origin - Vec2::new(0.0, half_extents.y);

        let on_floor = spatial_query
            .cast_ray(feet, Dir2::NEG_Y, RAY_REACH, true, &ground_filter)
            .is_some();

        let side_reach = half_extents.x + RAY_REACH;
        let on_wall = [Dir2::NEG_X, Dir2::X].into_iter().any(|dir| {
            spatial_query
                .cast_ray(origin, dir, side_reach, true, &wall_filter)
                .is_some()
        });

        let next = ContactFlags { on_floor, on_wall };
        if *contacts != next {
            debug!(
                "Contacts changed: on_floor={}, on_wall={}",
                next.on_floor, next.on_wall
            );
            *contacts = next;
        }
    }
}
