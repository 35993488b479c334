//! Player control state: who is controlled, what they are asking to do,
//! and the build-mode cursor.

use island_core::enums::BuildingKind;
use island_core::types::{EntityId, Position};

/// Latest movement intent, each axis in `[-1, 1]`. Held until replaced.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveIntent {
    pub right: f64,
    pub forward: f64,
}

impl MoveIntent {
    pub fn new(right: f64, forward: f64) -> Self {
        Self {
            right: right.clamp(-1.0, 1.0),
            forward: forward.clamp(-1.0, 1.0),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ControlState {
    pub controlled: EntityId,
    pub intent: MoveIntent,
    /// Set by an `Attack` command, consumed by the next combat pass.
    pub attack_requested: bool,
    pub build_mode: bool,
    pub selected_building: BuildingKind,
    /// Last ground point reported under the build cursor.
    pub build_cursor: Option<Position>,
}

impl ControlState {
    pub fn new(controlled: EntityId) -> Self {
        Self {
            controlled,
            intent: MoveIntent::default(),
            attack_requested: false,
            build_mode: false,
            selected_building: BuildingKind::default(),
            build_cursor: None,
        }
    }

    pub fn set_build_mode(&mut self, enabled: bool) {
        self.build_mode = enabled;
        if !enabled {
            self.build_cursor = None;
        }
    }
}
