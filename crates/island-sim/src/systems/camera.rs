//! Camera rig for the two control modes.

use glam::{DQuat, DVec3};

use island_core::constants::{EYE_HEIGHT, PITCH_LIMIT, THIRD_PERSON_DISTANCE, THIRD_PERSON_HEIGHT};
use island_core::enums::ControlMode;
use island_core::state::CameraView;
use island_core::types::Position;

/// Camera state that is not stored on the controlled character.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraRig {
    pub mode: ControlMode,
    /// First-person look pitch. Positive looks up.
    pub pitch: f64,
    /// Yaw reported by the external orbit controller in third-person.
    pub orbit_yaw: f64,
}

impl CameraRig {
    pub fn look(&mut self, delta_pitch: f64) {
        self.pitch = (self.pitch + delta_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Yaw that "forward" movement is expressed in.
    pub fn movement_yaw(&self, character_yaw: f64) -> f64 {
        match self.mode {
            ControlMode::FirstPerson => character_yaw,
            ControlMode::ThirdPerson => self.orbit_yaw,
        }
    }
}

/// Camera pose for a character standing at `position` facing `yaw`.
pub fn derive_view(rig: &CameraRig, position: Position, yaw: f64) -> CameraView {
    let origin = position.to_dvec();
    match rig.mode {
        ControlMode::FirstPerson => {
            let eye = origin + DVec3::Y * EYE_HEIGHT;
            let look = DQuat::from_rotation_y(yaw) * DQuat::from_rotation_x(rig.pitch) * DVec3::NEG_Z;
            CameraView {
                mode: rig.mode,
                position: eye.into(),
                target: (eye + look).into(),
                yaw,
                pitch: rig.pitch,
            }
        }
        ControlMode::ThirdPerson => {
            let offset = DVec3::new(0.0, THIRD_PERSON_HEIGHT, THIRD_PERSON_DISTANCE);
            CameraView {
                mode: rig.mode,
                position: (origin + offset).into(),
                target: position,
                yaw: rig.orbit_yaw,
                pitch: -(THIRD_PERSON_HEIGHT / THIRD_PERSON_DISTANCE).atan(),
            }
        }
    }
}
