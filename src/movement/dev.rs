//! Movement domain: static test room for exercising locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, Wall};

#[derive(Clone, Copy)]
enum Surface {
    Floor,
    Platform,
    Wall,
}

impl Surface {
    fn color(self) -> Color {
        match self {
            Surface::Floor => Color::srgb(0.4, 0.5, 0.4),
            Surface::Platform => Color::srgb(0.5, 0.4, 0.3),
            Surface::Wall => Color::srgb(0.3, 0.3, 0.4),
        }
    }
}

/// (surface, center, size)
const LAYOUT: [(Surface, Vec2, Vec2); 7] = [
    (Surface::Floor, Vec2::new(0.0, -200.0), Vec2::new(800.0, 40.0)),
    (Surface::Wall, Vec2::new(-420.0, 50.0), Vec2::new(40.0, 500.0)),
    (Surface::Wall, Vec2::new(420.0, 50.0), Vec2::new(40.0, 500.0)),
    (Surface::Platform, Vec2::new(-250.0, -50.0), Vec2::new(150.0, 20.0)),
    (Surface::Platform, Vec2::new(250.0, 50.0), Vec2::new(150.0, 20.0)),
    (Surface::Platform, Vec2::new(0.0, 150.0), Vec2::new(120.0, 20.0)),
    // Pillar for cling practice
    (Surface::Wall, Vec2::new(-100.0, -80.0), Vec2::new(30.0, 200.0)),
];

/// Thickness of the standable strip laid on top of each wall.
const CAP_THICKNESS: f32 = 4.0;

/// Center and size of a thin floor strip sitting on a wall's top edge, so the
/// top of a wall counts as floor while its sides stay clingable.
fn wall_cap(center: Vec2, size: Vec2) -> (Vec2, Vec2) {
    let cap_center = Vec2::new(center.x, center.y + (size.y + CAP_THICKNESS) / 2.0);
    (cap_center, Vec2::new(size.x, CAP_THICKNESS))
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    for (surface, center, size) in LAYOUT {
        let mut entity = commands.spawn((
            Sprite {
                color: surface.color(),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
        ));

        match surface {
            Surface::Floor | Surface::Platform => {
                entity.insert((Ground, ground_layers));
            }
            Surface::Wall => {
                entity.insert((Wall, wall_layers));

                let (cap_center, cap_size) = wall_cap(center, size);
                commands.spawn((
                    Sprite {
                        color: Surface::Platform.color(),
                        custom_size: Some(cap_size),
                        ..default()
                    },
                    Transform::from_translation(cap_center.extend(0.0)),
                    RigidBody::Static,
                    Collider::rectangle(cap_size.x, cap_size.y),
                    Ground,
                    ground_layers,
                ));
            }
        }
    }

    debug!("Spawned test room with {} surfaces", LAYOUT.len());
}
