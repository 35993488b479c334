//! Static catalogs: building types and the starting character roster.

use crate::constants::GROUND_HEIGHT;
use crate::enums::{BuildingKind, CharacterRole};
use crate::types::{Extents, Position};

/// Construction data for one building kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingSpec {
    pub kind: BuildingKind,
    pub name: &'static str,
    pub size: Extents,
    pub health: f64,
    pub cost: u32,
    pub color: &'static str,
    /// Whether players may place this kind. The castle is pre-spawned only.
    pub placeable: bool,
}

/// Look up the catalog entry for a building kind.
pub fn building_spec(kind: BuildingKind) -> BuildingSpec {
    match kind {
        BuildingKind::Castle => BuildingSpec {
            kind,
            name: "Castle",
            size: Extents::new(8.0, 6.0, 8.0),
            health: 500.0,
            cost: 0,
            color: "#808080",
            placeable: false,
        },
        BuildingKind::Wall => BuildingSpec {
            kind,
            name: "Wall",
            size: Extents::new(4.0, 2.0, 0.5),
            health: 100.0,
            cost: 10,
            color: "#696969",
            placeable: true,
        },
        BuildingKind::Tower => BuildingSpec {
            kind,
            name: "Tower",
            size: Extents::new(2.0, 5.0, 2.0),
            health: 150.0,
            cost: 25,
            color: "#A9A9A9",
            placeable: true,
        },
        BuildingKind::Barracks => BuildingSpec {
            kind,
            name: "Barracks",
            size: Extents::new(4.0, 2.0, 4.0),
            health: 200.0,
            cost: 40,
            color: "#8B4513",
            placeable: true,
        },
    }
}

/// Kinds a player can pick in build mode, in menu order.
pub const PLACEABLE_BUILDINGS: [BuildingKind; 3] = [
    BuildingKind::Wall,
    BuildingKind::Tower,
    BuildingKind::Barracks,
];

/// Starting stats for one roster character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterSpec {
    pub name: &'static str,
    pub role: CharacterRole,
    pub color: &'static str,
    pub position: Position,
    pub health: f64,
    pub speed: f64,
    pub damage: f64,
    pub attack_range: f64,
}

/// The four characters every session starts with. The first entry is the
/// leader and starts as the controlled character.
pub const ROSTER: [CharacterSpec; 4] = [
    CharacterSpec {
        name: "King",
        role: CharacterRole::Leader,
        color: "#FFD700",
        position: Position {
            x: 0.0,
            y: GROUND_HEIGHT,
            z: 0.0,
        },
        health: 100.0,
        speed: 1.0,
        damage: 10.0,
        attack_range: 3.0,
    },
    CharacterSpec {
        name: "Builder",
        role: CharacterRole::Construction,
        color: "#8B4513",
        position: Position {
            x: 5.0,
            y: GROUND_HEIGHT,
            z: 2.0,
        },
        health: 80.0,
        speed: 1.2,
        damage: 5.0,
        attack_range: 2.5,
    },
    CharacterSpec {
        name: "Archer",
        role: CharacterRole::Defense,
        color: "#228B22",
        position: Position {
            x: -5.0,
            y: GROUND_HEIGHT,
            z: 2.0,
        },
        health: 70.0,
        speed: 1.3,
        damage: 8.0,
        attack_range: 12.0,
    },
    CharacterSpec {
        name: "Knight",
        role: CharacterRole::Combat,
        color: "#4682B4",
        position: Position {
            x: 0.0,
            y: GROUND_HEIGHT,
            z: 5.0,
        },
        health: 120.0,
        speed: 0.9,
        damage: 15.0,
        attack_range: 3.0,
    },
];

/// Cosmetic color of every enemy.
pub const ENEMY_COLOR: &str = "#FF0000";
