//! Game engine: command processing, system scheduling, snapshots.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands at
//! tick boundaries, runs all systems, and produces `GameStateSnapshot`s.
//! Contact notifications from the external physics collaborator arrive
//! through `register_contact` at arbitrary points in the frame and are
//! buffered; everything destructive happens inside `tick`.

use std::collections::VecDeque;

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::commands::PlayerCommand;
use skystrike_core::components::{Enemy, Health, Lifecycle, PlayerCraft};
use skystrike_core::constants::*;
use skystrike_core::enums::{GamePhase, LifecyclePhase, PickupKind, WeaponLevel};
use skystrike_core::events::{AudioEvent, UiEvent};
use skystrike_core::state::GameStateSnapshot;
use skystrike_core::types::{PlayArea, Position, SimTime};

use crate::highscore::ScoreStore;
use crate::systems;
use crate::systems::contact;
use crate::systems::lifecycle;
use crate::systems::spawner::SpawnDirector;
use crate::world_setup;

/// Configuration for a new engine.
pub struct GameConfig {
    /// RNG seed for determinism. Same seed + same inputs = same run.
    pub seed: u64,
    /// Visible play-area geometry; destruction thresholds derive from it.
    pub play_area: PlayArea,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            play_area: PlayArea::default(),
        }
    }
}

/// Run-wide counters.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    pub score: u32,
    pub bombs: u32,
}

/// Single-finger drag ownership.
#[derive(Debug, Clone, Copy, Default)]
struct DragState {
    active_touch: Option<u64>,
}

/// The gameplay engine. Owns the ECS world and all run state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    play_area: PlayArea,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    ui_events: Vec<UiEvent>,
    audio_events: Vec<AudioEvent>,
    score: ScoreState,
    director: SpawnDirector,
    player: Option<Entity>,
    drag: DragState,
    last_tap_secs: Option<f32>,
    high_score: u32,
    store: Box<dyn ScoreStore>,
}

impl GameEngine {
    /// Create a new engine. The score store is injected so persistence
    /// stays an explicit collaborator rather than a global.
    pub fn new(config: GameConfig, store: Box<dyn ScoreStore>) -> Self {
        let high_score = store.load();
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            play_area: config.play_area,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            ui_events: Vec::new(),
            audio_events: Vec::new(),
            score: ScoreState::default(),
            director: SpawnDirector::default(),
            player: None,
            drag: DragState::default(),
            last_tap_secs: None,
            high_score,
            store,
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

    /// Advance the simulation by one frame of `dt` seconds and return the
    /// resulting snapshot. While paused or after game over, commands are
    /// still processed but time and systems stand still.
    pub fn tick(&mut self, dt: f32) -> GameStateSnapshot {
        let dt = dt.max(0.0);
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let ui_events = std::mem::take(&mut self.ui_events);
        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.score,
            self.high_score,
            ui_events,
            audio_events,
        )
    }

    // --- Collaborator notifications ---

    /// Capture a begin-contact notification from the physics collaborator.
    ///
    /// Safe to call at any point during the frame, including from inside
    /// the physics solver's callback: nothing is destroyed or settled
    /// here, the contact is only buffered for the next tick's drain.
    /// Stale handles and unknown pairings are silently ignored.
    pub fn register_contact(&mut self, actor: Entity, other: Entity) {
        if self.phase != GamePhase::Active {
            return;
        }
        contact::register(&mut self.world, actor, other);
    }

    /// The gating animation of a reacting actor finished. Races the
    /// fallback removal timer; whichever fires second is a no-op.
    pub fn animation_finished(&mut self, entity: Entity) {
        let Ok(mut lc) = self.world.get::<&mut Lifecycle>(entity) else {
            return;
        };
        if lc.phase != LifecyclePhase::Reacting {
            return;
        }
        lifecycle::mark_removed(&mut lc);
    }

    // --- Exposed gameplay operations ---

    /// Force an enemy into its death sequence (scores once, idempotent).
    pub fn force_enemy_down(&mut self, entity: Entity) {
        lifecycle::enemy_down(
            &mut self.world,
            entity,
            &mut self.score,
            &mut self.ui_events,
            &mut self.audio_events,
        );
    }

    pub fn add_score(&mut self, amount: u32) {
        self.score.score += amount;
        self.ui_events.push(UiEvent::ScoreChanged {
            score: self.score.score,
        });
    }

    pub fn add_bomb(&mut self, amount: u32) {
        self.score.bombs = (self.score.bombs + amount).min(MAX_BOMBS);
        self.ui_events.push(UiEvent::BombCountChanged {
            count: self.score.bombs,
        });
    }

    /// Grant a power-up to the player directly (the same effect pickups
    /// apply on collection).
    pub fn apply_power_up(&mut self, kind: PickupKind) {
        match kind {
            PickupKind::WeaponUpgrade => {
                let Some(player) = self.player else { return };
                if let Ok(craft) = self.world.query_one_mut::<&mut PlayerCraft>(player) {
                    craft.weapon_level = WeaponLevel::Level2;
                    craft.level_up_remaining = LEVEL_UP_SECS;
                }
            }
            PickupKind::Bomb => self.add_bomb(1),
        }
    }

    /// Spend one bomb to force every live enemy into its death sequence.
    /// Returns false when no bomb is available or no run is active.
    pub fn try_use_bomb(&mut self) -> bool {
        if self.phase != GamePhase::Active || self.score.bombs == 0 {
            return false;
        }
        self.score.bombs -= 1;
        self.ui_events.push(UiEvent::BombCountChanged {
            count: self.score.bombs,
        });
        self.audio_events.push(AudioEvent::BombUsed);
        log::info!("bomb used, {} remaining", self.score.bombs);

        let targets: Vec<Entity> = self
            .world
            .query_mut::<&Enemy>()
            .into_iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in targets {
            lifecycle::enemy_down(
                &mut self.world,
                entity,
                &mut self.score,
                &mut self.ui_events,
                &mut self.audio_events,
            );
        }
        true
    }

    // --- Accessors ---

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn score(&self) -> u32 {
        self.score.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn bomb_count(&self) -> u32 {
        self.score.bombs
    }

    /// Current and maximum player HP, if the player is still in the world.
    pub fn player_hp(&self) -> Option<(i32, i32)> {
        let player = self.player?;
        let health = self.world.get::<&Health>(player).ok()?;
        Some((health.hp, health.max_hp))
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player entity handle, while alive.
    pub fn player_entity(&self) -> Option<Entity> {
        self.player
    }

    // --- Internals ---

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Start => {
                if self.phase == GamePhase::Ready {
                    self.start_run();
                }
            }
            PlayerCommand::Restart => {
                self.start_run();
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
            PlayerCommand::TouchStart { id } => {
                if self.phase != GamePhase::Active {
                    return;
                }
                // Only one finger drags; later touches are ignored.
                if self.drag.active_touch.is_none() {
                    self.drag.active_touch = Some(id);
                }
            }
            PlayerCommand::TouchMove { id, delta } => {
                if self.phase != GamePhase::Active {
                    return;
                }
                if self.drag.active_touch == Some(id) {
                    self.move_player(delta);
                }
            }
            PlayerCommand::TouchEnd { id } => {
                if self.drag.active_touch == Some(id) {
                    self.drag.active_touch = None;
                }
                self.register_tap();
            }
            PlayerCommand::TouchCancel { id } => {
                if self.drag.active_touch == Some(id) {
                    self.drag.active_touch = None;
                }
            }
            PlayerCommand::UseBomb => {
                self.try_use_bomb();
            }
        }
    }

    /// Apply a drag delta to the player, clamped to its movement box.
    fn move_player(&mut self, delta: Vec2) {
        let Some(player) = self.player else { return };
        let Ok((pos, lc)) = self
            .world
            .query_one_mut::<(&mut Position, &Lifecycle)>(player)
        else {
            return;
        };
        if lc.phase != LifecyclePhase::Active {
            return;
        }
        pos.0 = (pos.0 + delta).clamp(PLAYER_MIN, PLAYER_MAX);
    }

    /// Two taps within the double-tap window detonate a bomb.
    fn register_tap(&mut self) {
        let now = self.time.elapsed_secs;
        let last = self.last_tap_secs.replace(now);
        if let Some(last) = last {
            let gap = now - last;
            if gap > 0.0 && gap <= DOUBLE_TAP_SECS {
                self.try_use_bomb();
            }
        }
    }

    /// Tear down any previous run and start fresh. The persisted high
    /// score and the RNG stream carry over.
    fn start_run(&mut self) {
        self.world.clear();
        self.despawn_buffer.clear();
        self.time = SimTime::default();
        self.score = ScoreState::default();
        self.director = SpawnDirector::default();
        self.drag = DragState::default();
        self.last_tap_secs = None;

        let player = world_setup::spawn_player(&mut self.world);
        self.player = Some(player);
        self.phase = GamePhase::Active;

        self.ui_events.push(UiEvent::HpChanged {
            hp: PLAYER_MAX_HP,
            max_hp: PLAYER_MAX_HP,
        });
        self.ui_events.push(UiEvent::BombCountChanged { count: 0 });
        log::debug!("run started");
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Settle buffered contacts before anything else moves or dies.
        contact::drain(
            &mut self.world,
            &mut self.score,
            &mut self.ui_events,
            &mut self.audio_events,
        );
        // 2. Fallback removal timers for reacting actors.
        lifecycle::run(&mut self.world, dt);
        // 3. Kinematics and boundary removal.
        systems::movement::run(&mut self.world, dt);
        // 4. Player fire scheduling and timers.
        systems::weapon::run(&mut self.world, dt, &mut self.audio_events, &self.play_area);
        // 5. Enemy/pickup generation.
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.director,
            &self.play_area,
            dt,
        );
        // 6. Despawn everything whose removal is pending.
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        self.check_game_over();
    }

    /// The run ends when the player craft has actually left the world
    /// (after its crash gate resolved).
    fn check_game_over(&mut self) {
        let Some(player) = self.player else { return };
        if self.world.contains(player) {
            return;
        }
        self.player = None;
        self.phase = GamePhase::GameOver;

        let latest = self.score.score;
        self.high_score = self.high_score.max(latest);
        self.store.save(self.high_score);

        self.ui_events.push(UiEvent::GameOver {
            latest_score: latest,
            highest_score: self.high_score,
        });
        self.audio_events.push(AudioEvent::GameOver);
        log::info!("game over: score {latest}, best {}", self.high_score);
    }
}
