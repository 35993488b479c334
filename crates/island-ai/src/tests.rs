#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    use island_core::components::JumpState;
    use island_core::constants::*;
    use island_core::enums::WavePhase;
    use island_core::tuning::WaveTuning;
    use island_core::types::{EntityId, Position};

    use crate::placement::{snap_axis, snap_to_grid};
    use crate::profiles::{enemy_count, enemy_stats, spawn_ring};
    use crate::steering::*;
    use crate::wave_fsm::{evaluate, WaveContext, WaveState};

    fn ctx(phase: WavePhase, elapsed: f64, game_over: bool) -> WaveContext {
        WaveContext {
            phase,
            elapsed_in_phase_secs: elapsed,
            game_over,
        }
    }

    // ---- Wave FSM ----

    #[test]
    fn test_idle_never_advances_on_its_own() {
        let update = evaluate(&ctx(WavePhase::Idle, 1_000.0, false), &WaveTuning::default());
        assert!(!update.phase_changed);
        assert_eq!(update.new_phase, WavePhase::Idle);
    }

    #[test]
    fn test_warning_holds_until_delay_elapses() {
        let tuning = WaveTuning::default();
        let early = evaluate(&ctx(WavePhase::Warning, 9.9, false), &tuning);
        assert!(!early.phase_changed);

        let due = evaluate(&ctx(WavePhase::Warning, 10.0, false), &tuning);
        assert!(due.phase_changed);
        assert_eq!(due.new_phase, WavePhase::Spawning);
    }

    #[test]
    fn test_spawning_is_instantaneous() {
        let update = evaluate(&ctx(WavePhase::Spawning, 0.0, false), &WaveTuning::default());
        assert_eq!(update.new_phase, WavePhase::Cooldown);
    }

    #[test]
    fn test_cooldown_returns_to_warning() {
        let tuning = WaveTuning::default();
        assert!(!evaluate(&ctx(WavePhase::Cooldown, 59.0, false), &tuning).phase_changed);
        let update = evaluate(&ctx(WavePhase::Cooldown, 60.0, false), &tuning);
        assert_eq!(update.new_phase, WavePhase::Warning);
    }

    #[rstest]
    #[case(WavePhase::Warning)]
    #[case(WavePhase::Spawning)]
    #[case(WavePhase::Cooldown)]
    fn test_game_over_freezes_every_phase(#[case] phase: WavePhase) {
        let update = evaluate(&ctx(phase, 1_000.0, true), &WaveTuning::default());
        assert!(!update.phase_changed);
        assert_eq!(update.new_phase, phase);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut state = WaveState::default();
        assert!(state.start(2.0));
        assert_eq!(state.phase, WavePhase::Warning);
        assert!(state.incoming());
        assert!(!state.start(5.0));
        assert_eq!(state.phase_entered_secs, 2.0);
        assert_abs_diff_eq!(state.elapsed_in_phase(3.5), 1.5);
    }

    // ---- Profiles ----

    #[rstest]
    #[case(1, 4, 60.0, 12.0)]
    #[case(2, 5, 70.0, 14.0)]
    #[case(5, 8, 100.0, 20.0)]
    #[case(12, 15, 170.0, 34.0)]
    #[case(30, 15, 350.0, 70.0)]
    fn test_wave_scaling(
        #[case] wave: u32,
        #[case] count: u32,
        #[case] health: f64,
        #[case] damage: f64,
    ) {
        let tuning = WaveTuning::default();
        assert_eq!(enemy_count(&tuning, wave), count);
        let stats = enemy_stats(&tuning, wave);
        assert_abs_diff_eq!(stats.health, health);
        assert_abs_diff_eq!(stats.damage, damage);
        assert!(stats.speed > tuning.base_speed);
    }

    #[test]
    fn test_spawn_ring_even_spacing() {
        let ring = spawn_ring(35.0, 4);
        assert_eq!(ring.len(), 4);
        assert_abs_diff_eq!(ring[0].x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ring[0].z, 35.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ring[1].x, 35.0, epsilon = 1e-9);
        assert_abs_diff_eq!(ring[2].z, -35.0, epsilon = 1e-9);
        for p in &ring {
            assert_abs_diff_eq!(p.distance_from_center(), 35.0, epsilon = 1e-9);
            assert_eq!(p.y, GROUND_HEIGHT);
        }
    }

    // ---- Steering ----

    #[test]
    fn test_pursuit_points_at_target_horizontally() {
        let vel = pursuit_velocity(
            Position::new(10.0, 3.0, 0.0),
            Position::new(0.0, 1.0, 0.0),
            2.0,
        );
        assert_abs_diff_eq!(vel.x, -2.0, epsilon = 1e-12);
        assert_eq!(vel.y, 0.0);
        assert_abs_diff_eq!(vel.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pursuit_at_target_is_zero() {
        let p = Position::new(1.0, 1.0, 1.0);
        let vel = pursuit_velocity(p, p, 5.0);
        assert_eq!(vel.speed(), 0.0);
    }

    #[test]
    fn test_movement_basis_yaw_zero() {
        let dir = compose_movement(0.0, 1.0, 0.0);
        assert_abs_diff_eq!(dir.z, -1.0, epsilon = 1e-12);
        let dir = compose_movement(1.0, 0.0, 0.0);
        assert_abs_diff_eq!(dir.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_movement_basis_follows_yaw() {
        // Quarter turn left: forward becomes -X.
        let dir = compose_movement(0.0, 1.0, std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(dir.x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dir.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_diagonal_intent_is_normalized() {
        let dir = compose_movement(1.0, 1.0, 0.3);
        assert_abs_diff_eq!(dir.length(), 1.0, epsilon = 1e-12);
        assert_eq!(compose_movement(0.0, 0.0, 1.0).length(), 0.0);
    }

    #[test]
    fn test_clamp_projects_onto_boundary_same_angle() {
        let limit = ISLAND_RADIUS - ISLAND_EDGE_MARGIN;
        let outside = Position::new(30.0, 1.4, 40.0);
        let clamped = clamp_to_island(outside, limit);
        assert_abs_diff_eq!(clamped.distance_from_center(), limit, epsilon = 1e-9);
        assert_abs_diff_eq!(
            clamped.z.atan2(clamped.x),
            outside.z.atan2(outside.x),
            epsilon = 1e-12
        );
        assert_eq!(clamped.y, 1.4);

        let inside = Position::new(3.0, 1.0, -4.0);
        assert_eq!(clamp_to_island(inside, limit), inside);
    }

    #[test]
    fn test_jump_arc_returns_to_ground() {
        let dt = 1.0 / 30.0;
        let jump = launch_jump(JumpState::default()).unwrap();
        assert!(launch_jump(jump).is_none(), "no double jump");

        let (mut y, mut state) = (GROUND_HEIGHT, jump);
        let mut peak = y;
        let mut ticks = 0;
        while state.airborne {
            (y, state) = step_jump(y, state, dt);
            peak = peak.max(y);
            ticks += 1;
            assert!(ticks < 1_000, "jump never landed");
        }
        assert_eq!(y, GROUND_HEIGHT);
        assert_eq!(state.vertical_velocity, 0.0);
        assert!(peak > GROUND_HEIGHT + 4.0);
        // Symmetric arc: launch speed / gravity up, same down.
        let expected = 2.0 * JUMP_LAUNCH_SPEED / JUMP_GRAVITY / dt;
        assert!((ticks as f64 - expected).abs() <= 2.0);
    }

    #[test]
    fn test_nearest_in_range_picks_closest() {
        let origin = Position::new(0.0, 1.0, 0.0);
        let candidates = vec![
            (EntityId(4), Position::new(2.5, 1.0, 0.0)),
            (EntityId(5), Position::new(1.0, 1.0, 1.0)),
            (EntityId(6), Position::new(0.5, 1.0, 0.0)),
            (EntityId(7), Position::new(9.0, 1.0, 0.0)),
        ];
        assert_eq!(nearest_in_range(origin, 3.0, candidates.clone()), Some(EntityId(6)));
        assert_eq!(nearest_in_range(origin, 0.1, candidates), None);
    }

    #[test]
    fn test_nearest_tie_goes_to_lower_id() {
        let origin = Position::default();
        let candidates = [
            (EntityId(9), Position::new(1.0, 0.0, 0.0)),
            (EntityId(3), Position::new(-1.0, 0.0, 0.0)),
        ];
        assert_eq!(nearest_in_range(origin, 2.0, candidates), Some(EntityId(3)));
    }

    // ---- Placement ----

    #[rstest]
    #[case(3.1, 4.9, 4.0, 4.0)]
    #[case(0.9, -0.9, 0.0, 0.0)]
    #[case(1.0, -1.0, 2.0, 0.0)]
    #[case(-3.2, 7.0, -4.0, 8.0)]
    fn test_snap_to_grid(#[case] x: f64, #[case] z: f64, #[case] sx: f64, #[case] sz: f64) {
        let snapped = snap_to_grid(Position::new(x, 0.0, z), BUILD_GRID_SIZE);
        assert_eq!(snapped.x, sx);
        assert_eq!(snapped.z, sz);
        assert_eq!(snapped.y, GROUND_HEIGHT);
    }

    #[test]
    fn test_snap_axis_is_idempotent() {
        let once = snap_axis(13.37, 2.0);
        assert_eq!(snap_axis(once, 2.0), once);
    }
}
