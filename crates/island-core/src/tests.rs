#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::catalog::*;
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::error::Rejection;
    use crate::events::GameEvent;
    use crate::state::GameStateSnapshot;
    use crate::tuning::{CombatTuning, WaveTuning};
    use crate::types::{EntityId, Position, SimTime, Velocity};

    #[test]
    fn test_command_wire_format_is_tagged() {
        let cmd = PlayerCommand::Place {
            position: Position::new(3.1, 0.0, 4.9),
        };
        let json = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["type"], "Place");
        assert_eq!(json["position"]["x"], 3.1);

        let parsed: PlayerCommand =
            serde_json::from_str(r#"{"type":"SelectCharacter","id":3}"#).unwrap();
        assert_eq!(parsed, PlayerCommand::SelectCharacter { id: EntityId(3) });
    }

    #[test]
    fn test_event_wire_format_is_tagged() {
        let event = GameEvent::WaveSpawned {
            wave_number: 2,
            enemy_count: 5,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "WaveSpawned");
        assert_eq!(json["enemy_count"], 5);
    }

    #[test]
    fn test_sim_time_advance_has_no_drift() {
        let mut time = SimTime::default();
        let dt = 1.0 / 30.0;
        for _ in 0..(30 * 3600) {
            time.advance(dt);
        }
        assert_eq!(time.tick, 108_000);
        assert!((time.elapsed_secs - 3600.0).abs() < 1e-9);
        assert_eq!(time.clock_secs(), 3600);
    }

    #[test]
    fn test_clock_secs_floors() {
        let time = SimTime {
            tick: 59,
            elapsed_secs: 1.9666,
        };
        assert_eq!(time.clock_secs(), 1);
    }

    #[test]
    fn test_position_ranges() {
        let a = Position::new(0.0, 1.0, 0.0);
        let b = Position::new(3.0, 5.0, 4.0);
        assert!((a.horizontal_range_to(&b) - 5.0).abs() < 1e-12);
        assert!((a.range_to(&b) - (9.0_f64 + 16.0 + 16.0).sqrt()).abs() < 1e-12);
        assert!((b.distance_from_center() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_velocity_heading_zero_faces_negative_z() {
        assert!(Velocity::new(0.0, 0.0, -1.0).heading().abs() < 1e-12);
        let left = Velocity::new(-1.0, 0.0, 0.0).heading();
        assert!((left - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn test_castle_is_the_only_unplaceable_building() {
        assert!(!building_spec(BuildingKind::Castle).placeable);
        for kind in PLACEABLE_BUILDINGS {
            let spec = building_spec(kind);
            assert!(spec.placeable);
            assert!(spec.cost > 0);
            assert_eq!(spec.kind, kind);
        }
    }

    #[rstest]
    #[case(BuildingKind::Wall, 10, 100.0)]
    #[case(BuildingKind::Tower, 25, 150.0)]
    #[case(BuildingKind::Barracks, 40, 200.0)]
    #[case(BuildingKind::Castle, 0, 500.0)]
    fn test_building_catalog_values(
        #[case] kind: BuildingKind,
        #[case] cost: u32,
        #[case] health: f64,
    ) {
        let spec = building_spec(kind);
        assert_eq!(spec.cost, cost);
        assert_eq!(spec.health, health);
    }

    #[test]
    fn test_roster_starts_with_single_leader() {
        assert_eq!(ROSTER[0].role, CharacterRole::Leader);
        let leaders = ROSTER
            .iter()
            .filter(|c| c.role == CharacterRole::Leader)
            .count();
        assert_eq!(leaders, 1);
        assert!(ROSTER.iter().all(|c| c.health > 0.0 && c.attack_range > 0.0));
    }

    #[test]
    fn test_tuning_partial_override_keeps_defaults() {
        let waves: WaveTuning = serde_json::from_str(r#"{"warning_secs": 2.5}"#).unwrap();
        assert_eq!(waves.warning_secs, 2.5);
        assert_eq!(waves.cooldown_secs, 60.0);
        assert_eq!(waves.max_count, 15);

        let combat: CombatTuning = serde_json::from_str("{}").unwrap();
        assert_eq!(combat, CombatTuning::default());
    }

    #[test]
    fn test_rejection_messages() {
        let r = Rejection::InsufficientResources {
            cost: 40,
            balance: 12,
        };
        assert_eq!(r.to_string(), "insufficient resources: cost 40, balance 12");
        assert_eq!(
            Rejection::OnCooldown(EntityId(7)).to_string(),
            "attacker #7 is still on cooldown"
        );
    }

    #[test]
    fn test_default_snapshot_is_pre_game() {
        let snap = GameStateSnapshot::default();
        assert_eq!(snap.phase, GamePhase::NotStarted);
        assert_eq!(snap.wave.phase, WavePhase::Idle);
        assert!(!snap.wave.incoming);
        assert!(snap.enemies.is_empty());
    }
}
