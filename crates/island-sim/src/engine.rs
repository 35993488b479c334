//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the entity registry, processes player commands
//! and physics feedback, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic
//! testing.

use std::collections::VecDeque;

use log::{debug, info, trace};

use island_ai::steering;
use island_ai::wave_fsm::WaveState;
use island_core::catalog::building_spec;
use island_core::commands::PlayerCommand;
use island_core::components::{AssignedTask, CharacterProfile, Facing, Health, JumpState};
use island_core::constants::TIME_EPSILON;
use island_core::enums::{BuildingKind, CharacterRole, ControlMode, EntityKind, GamePhase, TaskKind};
use island_core::error::Rejection;
use island_core::events::GameEvent;
use island_core::state::{BuildPreview, CameraView, GameStateSnapshot};
use island_core::types::{EntityId, Position, SimTime};

use crate::config::{PhysicsMode, SimConfig};
use crate::control::{ControlState, MoveIntent};
use crate::ledger::ResourceLedger;
use crate::physics::{self, BodyCommand, BodyFeedback};
use crate::registry::Registry;
use crate::systems;
use crate::systems::camera::CameraRig;
use crate::systems::snapshot::SnapshotInput;
use crate::world_setup;

/// The simulation engine. Owns the registry and all sim state.
pub struct SimulationEngine {
    registry: Registry,
    config: SimConfig,
    time: SimTime,
    phase: GamePhase,
    ledger: ResourceLedger,
    wave: WaveState,
    control: ControlState,
    camera: CameraRig,
    castle: EntityId,
    next_auto_attack_secs: f64,
    command_queue: VecDeque<PlayerCommand>,
    feedback_queue: VecDeque<BodyFeedback>,
    body_commands: Vec<BodyCommand>,
    despawn_buffer: Vec<EntityId>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine with the castle and roster already in place.
    /// The game itself waits for `StartGame`.
    pub fn new(config: SimConfig) -> Self {
        let mut registry = Registry::new();
        let castle = world_setup::spawn_castle(&mut registry);
        let roster = world_setup::spawn_roster(&mut registry);
        let leader = roster[0];

        Self {
            registry,
            time: SimTime::default(),
            phase: GamePhase::default(),
            ledger: ResourceLedger::new(config.starting_resources),
            wave: WaveState::default(),
            control: ControlState::new(leader),
            camera: CameraRig::default(),
            castle,
            next_auto_attack_secs: 0.0,
            command_queue: VecDeque::new(),
            feedback_queue: VecDeque::new(),
            body_commands: Vec::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Queue a pose report from the physics collaborator.
    pub fn queue_body_feedback(&mut self, feedback: BodyFeedback) {
        self.feedback_queue.push_back(feedback);
    }

    /// Drain the body commands published by the most recent tick.
    pub fn take_body_commands(&mut self) -> Vec<BodyCommand> {
        std::mem::take(&mut self.body_commands)
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();
        let applied = physics::apply_feedback(&mut self.registry, self.feedback_queue.drain(..));
        if applied > 0 {
            trace!("applied {applied} body poses");
        }

        self.body_commands.clear();
        if self.phase == GamePhase::Active {
            self.run_systems();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.registry,
            &SnapshotInput {
                time: self.time,
                phase: self.phase,
                ledger: &self.ledger,
                wave: &self.wave,
                control: &self.control,
                camera: &self.camera,
            },
            events,
        )
    }

    /// Attempt an attack. Rejections are logged and reported as `false`.
    pub fn attack(&mut self, attacker: EntityId, target: EntityId) -> bool {
        match self.try_attack(attacker, target) {
            Ok(()) => true,
            Err(rejection) => {
                debug!("attack {attacker} -> {target} rejected: {rejection}");
                false
            }
        }
    }

    pub fn try_attack(&mut self, attacker: EntityId, target: EntityId) -> Result<(), Rejection> {
        if self.phase == GamePhase::GameOver {
            return Err(Rejection::GameNotActive);
        }
        systems::combat::resolve_attack(
            &mut self.registry,
            &mut self.ledger,
            &mut self.events,
            &self.config.combat,
            self.time.elapsed_secs,
            attacker,
            target,
        )
    }

    /// Whether `kind` is placeable and currently affordable.
    pub fn can_place(&self, kind: BuildingKind) -> bool {
        systems::build::can_place(&self.ledger, kind)
    }

    /// Place a building at the grid cell nearest `raw`, paying its cost.
    pub fn place(&mut self, kind: BuildingKind, raw: Position) -> Result<EntityId, Rejection> {
        if self.phase == GamePhase::GameOver {
            return Err(Rejection::GameNotActive);
        }
        let building = systems::build::place(&mut self.registry, &mut self.ledger, kind, raw)?;
        let cost = building_spec(kind).cost;
        self.events.push(GameEvent::BuildingPlaced {
            building,
            kind,
            cost,
        });
        debug!(
            "placed {kind:?} {building}, {} resources left",
            self.ledger.balance()
        );
        Ok(building)
    }

    /// Where a building of `kind` would land for `raw`, without placing it.
    pub fn preview(&self, kind: BuildingKind, raw: Position) -> BuildPreview {
        systems::build::preview(&self.ledger, kind, raw)
    }

    /// End the session. Only the first call has any effect.
    pub fn declare_game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.control.attack_requested = false;
        self.events.push(GameEvent::GameOver {
            waves_survived: self.wave.wave_number,
        });
        info!(
            "game over at {:.1}s after {} waves",
            self.time.elapsed_secs, self.wave.wave_number
        );
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn resources(&self) -> u32 {
        self.ledger.balance()
    }

    pub fn wave(&self) -> WaveState {
        self.wave
    }

    pub fn controlled(&self) -> EntityId {
        self.control.controlled
    }

    pub fn control_mode(&self) -> ControlMode {
        self.camera.mode
    }

    pub fn castle(&self) -> EntityId {
        self.castle
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn camera_view(&self) -> CameraView {
        systems::snapshot::camera_view(&self.registry, self.control.controlled, &self.camera)
    }

    /// Get a read-only reference to the registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Mutable registry access for tests that stage specific situations.
    #[cfg(test)]
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            trace!("command {command:?}");
            if let Err(rejection) = self.handle_command(command) {
                debug!("command rejected: {rejection}");
            }
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) -> Result<(), Rejection> {
        if self.phase == GamePhase::GameOver {
            return Err(Rejection::GameNotActive);
        }

        match command {
            PlayerCommand::StartGame => {
                if self.phase == GamePhase::NotStarted {
                    self.phase = GamePhase::Active;
                    let now = self.time.elapsed_secs;
                    self.next_auto_attack_secs = now + self.config.combat.auto_attack_interval_secs;
                    self.events.push(GameEvent::GameStarted);
                    info!("game started");
                    systems::wave_spawner::start(
                        &mut self.wave,
                        &self.config.waves,
                        now,
                        &mut self.events,
                    );
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetControlMode { mode } => {
                self.camera.mode = mode;
            }
            PlayerCommand::SelectCharacter { id } => {
                if self.registry.kind_of(id) != Some(EntityKind::Character) {
                    return Err(Rejection::UnknownEntity(id));
                }
                if id != self.control.controlled {
                    self.control.controlled = id;
                    self.events.push(GameEvent::CharacterSelected { character: id });
                    debug!("controlling {id}");
                }
            }
            PlayerCommand::Move { right, forward } => {
                self.control.intent = MoveIntent::new(right, forward);
            }
            PlayerCommand::Jump => {
                self.require_active()?;
                let controlled = self.control.controlled;
                if systems::combat::is_incapacitated(&self.registry, controlled) {
                    return Err(Rejection::Incapacitated(controlled));
                }
                let jump = self
                    .registry
                    .get::<JumpState>(controlled)
                    .ok_or(Rejection::UnknownEntity(controlled))?;
                if let Some(launched) = steering::launch_jump(jump) {
                    self.registry
                        .update::<JumpState>(controlled, |j| *j = launched);
                }
            }
            PlayerCommand::Attack => {
                self.require_active()?;
                self.control.attack_requested = true;
            }
            PlayerCommand::Look {
                delta_yaw,
                delta_pitch,
            } => {
                if self.camera.mode == ControlMode::FirstPerson {
                    self.registry
                        .update::<Facing>(self.control.controlled, |f| f.yaw += delta_yaw);
                    self.camera.look(delta_pitch);
                }
            }
            PlayerCommand::OrbitCamera { yaw } => {
                self.camera.orbit_yaw = yaw;
            }
            PlayerCommand::SetBuildMode { enabled } => {
                self.control.set_build_mode(enabled);
            }
            PlayerCommand::SelectBuildingType { kind } => {
                if !building_spec(kind).placeable {
                    return Err(Rejection::NotPlaceable);
                }
                self.control.selected_building = kind;
            }
            PlayerCommand::PointBuildCursor { position } => {
                self.control.build_cursor = Some(position);
            }
            PlayerCommand::Place { position } => {
                self.require_active()?;
                if !self.control.build_mode {
                    return Err(Rejection::BuildModeOff);
                }
                let kind = self.control.selected_building;
                self.place(kind, position)?;
            }
            PlayerCommand::AssignTask { character, task } => {
                self.assign_task(character, task)?;
            }
        }
        Ok(())
    }

    fn require_active(&self) -> Result<(), Rejection> {
        if self.phase == GamePhase::Active {
            Ok(())
        } else {
            Err(Rejection::GameNotActive)
        }
    }

    /// Record a task for `character`. Only the leader hands out tasks, and
    /// only while under player control.
    fn assign_task(&mut self, character: EntityId, task: TaskKind) -> Result<(), Rejection> {
        let leader_in_control = self
            .registry
            .get_cloned::<CharacterProfile>(self.control.controlled)
            .is_some_and(|p| p.role == CharacterRole::Leader);
        if !leader_in_control {
            return Err(Rejection::NotLeader);
        }
        let profile = self
            .registry
            .get_cloned::<CharacterProfile>(character)
            .ok_or(Rejection::UnknownEntity(character))?;
        if profile.role == CharacterRole::Leader {
            return Err(Rejection::NotLeader);
        }
        self.registry
            .update::<AssignedTask>(character, |t| t.task = Some(task));
        self.events.push(GameEvent::TaskAssigned { character, task });
        debug!("{} assigned {task:?}", profile.name);
        Ok(())
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let dt = self.config.dt();
        self.time.advance(dt);
        let now = self.time.elapsed_secs;
        let controlled = self.control.controlled;

        // 1. Movement
        systems::movement::run_jumps(&mut self.registry, dt);
        let character_yaw = self.registry.get::<Facing>(controlled).unwrap_or_default().yaw;
        systems::movement::move_controlled(
            &mut self.registry,
            controlled,
            self.control.intent,
            self.camera.movement_yaw(character_yaw),
            dt,
            &mut self.body_commands,
        );
        systems::movement::steer_enemies(&mut self.registry, &mut self.body_commands);
        if self.config.physics == PhysicsMode::Kinematic {
            physics::integrate(&mut self.registry, dt);
        }

        // 2. Proximity damage
        systems::proximity::run(
            &mut self.registry,
            &mut self.ledger,
            &mut self.events,
            &self.config.combat,
        );
        if self.castle_fallen() {
            systems::cleanup::run(&mut self.registry, now, &mut self.despawn_buffer);
            return;
        }

        // 3. Combat
        if std::mem::take(&mut self.control.attack_requested) {
            match systems::combat::player_attack(
                &mut self.registry,
                &mut self.ledger,
                &mut self.events,
                &self.config.combat,
                now,
                controlled,
            ) {
                Ok(target) => trace!("player attack hit {target}"),
                Err(rejection) => debug!("player attack rejected: {rejection}"),
            }
        }
        if now + TIME_EPSILON >= self.next_auto_attack_secs {
            systems::combat::run_autonomous(
                &mut self.registry,
                &mut self.ledger,
                &mut self.events,
                &self.config.combat,
                now,
                controlled,
            );
            self.next_auto_attack_secs += self.config.combat.auto_attack_interval_secs;
        }

        // 4. Cleanup (expired effects, dead enemies)
        systems::cleanup::run(&mut self.registry, now, &mut self.despawn_buffer);
        if self.castle_fallen() {
            return;
        }

        // 5. Waves
        systems::wave_spawner::run(
            &mut self.registry,
            &mut self.wave,
            &self.config.waves,
            self.castle,
            now,
            self.phase == GamePhase::GameOver,
            &mut self.events,
        );
    }

    /// Ends the game once the castle is gone; a fallen castle stops the rest of the tick.
    fn castle_fallen(&mut self) -> bool {
        let standing = self
            .registry
            .get::<Health>(self.castle)
            .is_some_and(|h| h.current > 0.0);
        if !standing {
            self.declare_game_over();
        }
        !standing
    }
}
