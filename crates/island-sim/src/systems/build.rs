//! Construction: affordability checks, placement and the preview ghost.

use island_ai::placement::snap_to_grid;
use island_core::catalog::building_spec;
use island_core::constants::BUILD_GRID_SIZE;
use island_core::enums::BuildingKind;
use island_core::error::Rejection;
use island_core::state::BuildPreview;
use island_core::types::{EntityId, Position};

use crate::ledger::ResourceLedger;
use crate::registry::Registry;
use crate::world_setup;

pub fn can_place(ledger: &ResourceLedger, kind: BuildingKind) -> bool {
    let spec = building_spec(kind);
    spec.placeable && ledger.can_afford(spec.cost)
}

/// Snap, pay and spawn. On rejection neither the registry nor the ledger
/// is touched.
pub fn place(
    registry: &mut Registry,
    ledger: &mut ResourceLedger,
    kind: BuildingKind,
    raw: Position,
) -> Result<EntityId, Rejection> {
    let spec = building_spec(kind);
    if !spec.placeable {
        return Err(Rejection::NotPlaceable);
    }
    ledger.try_debit(spec.cost)?;
    let position = snap_to_grid(raw, BUILD_GRID_SIZE);
    Ok(world_setup::spawn_building(registry, kind, position))
}

pub fn preview(ledger: &ResourceLedger, kind: BuildingKind, raw: Position) -> BuildPreview {
    let spec = building_spec(kind);
    BuildPreview {
        kind,
        position: snap_to_grid(raw, BUILD_GRID_SIZE),
        size: spec.size,
        color: spec.color.to_string(),
        affordable: can_place(ledger, kind),
    }
}
