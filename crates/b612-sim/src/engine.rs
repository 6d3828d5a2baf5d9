//! Scene engine — the core of the vignette.
//!
//! `SceneEngine` owns the hecs ECS world, processes viewer commands,
//! runs all systems, and produces `SceneSnapshot`s. Completely headless
//! (no Tauri dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use b612_core::commands::ViewerCommand;
use b612_core::components::{
    CharacterSlot, CharacterSwap, HoverScale, OrbitBoost, OrbitPath, Planet, RollAnimation, Spin,
    SpinKick, Transform,
};
use b612_core::constants::*;
use b612_core::enums::{PlanetId, ScenePhase, SwapPhase};
use b612_core::events::SceneEvent;
use b612_core::state::SceneSnapshot;
use b612_core::types::{Ease, SceneTime, Tween};
use b612_sky::Starfield;

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new scene.
pub struct SceneConfig {
    /// RNG seed for determinism. Same seed = same scene.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Number of stars in the dome.
    pub star_count: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            star_count: STARFIELD_COUNT,
        }
    }
}

/// The scene engine. Owns the ECS world and all scene state.
pub struct SceneEngine {
    world: World,
    time: SceneTime,
    phase: ScenePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<ViewerCommand>,
    events: Vec<SceneEvent>,
    starfield: Starfield,
}

impl SceneEngine {
    /// Create a new scene engine with the given config.
    ///
    /// The world is fully populated here; the scene starts in `Loading`
    /// with the clock held at zero until `StartScene` arrives.
    pub fn new(config: SceneConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        // Draw order matters for determinism: starfield first, then pool.
        let starfield = Starfield::generate(config.star_count, STARFIELD_RADIUS, &mut rng);
        let mut world = World::new();
        world_setup::setup_scene(&mut world, &mut rng);

        Self {
            world,
            time: SceneTime::default(),
            phase: ScenePhase::default(),
            time_scale: config.time_scale,
            rng,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            starfield,
        }
    }

    /// Queue a viewer command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: ViewerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = ViewerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the scene by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SceneSnapshot {
        self.process_commands();

        if self.phase == ScenePhase::Active {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.time_scale,
            self.starfield.star_count(),
            events,
        )
    }

    /// Get the current scene phase.
    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    /// Get the current scene time.
    pub fn time(&self) -> SceneTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The static starfield generated for this scene's seed.
    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single viewer command.
    ///
    /// Scene-control commands always apply; interaction commands only
    /// land while the scene is `Active` (there is nothing to click
    /// during loading and a paused scene should stay exactly as it is).
    fn handle_command(&mut self, command: ViewerCommand) {
        match command {
            ViewerCommand::StartScene => {
                if self.phase == ScenePhase::Loading {
                    self.phase = ScenePhase::Active;
                    self.events.push(SceneEvent::SceneStarted);
                }
            }
            ViewerCommand::Pause => {
                if self.phase == ScenePhase::Active {
                    self.phase = ScenePhase::Paused;
                }
            }
            ViewerCommand::Resume => {
                if self.phase == ScenePhase::Paused {
                    self.phase = ScenePhase::Active;
                }
            }
            ViewerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
            }
            ViewerCommand::ClickMoon => {
                if self.phase == ScenePhase::Active {
                    self.click_moon();
                }
            }
            ViewerCommand::ClickPlanet { planet } => {
                if self.phase == ScenePhase::Active {
                    self.click_planet(planet);
                }
            }
            ViewerCommand::SetPlanetHover { planet, hovered } => {
                if self.phase == ScenePhase::Active {
                    self.set_planet_hover(planet, hovered);
                }
            }
        }
    }

    /// Moon click: start (or retarget) the roll tween and, if no swap
    /// is in flight, kick off the character cross-fade.
    fn click_moon(&mut self) {
        for (_entity, (roll, transform)) in
            self.world.query_mut::<(&mut RollAnimation, &Transform)>()
        {
            // A click mid-roll retargets from the animated angle and
            // still delivers the full remaining step.
            let (current, target) = match roll.tween {
                Some(t) => (t.value_at(&self.time), t.to + roll.step),
                None => (transform.rotation.z, transform.rotation.z + roll.step),
            };
            roll.tween = Some(Tween::new(
                current,
                target,
                self.time.tick,
                roll.duration_secs,
                Ease::CubicInOut,
            ));
            self.events.push(SceneEvent::MoonRolled {
                target_roll: target,
            });
        }

        for (_entity, slot) in self.world.query_mut::<&mut CharacterSlot>() {
            // Single-flight: clicks during a swap are ignored.
            if slot.swap.is_none() {
                slot.swap = Some(CharacterSwap {
                    phase: SwapPhase::FadeOut,
                    phase_start_tick: self.time.tick,
                });
            }
        }
    }

    /// Planet click: inject a spin kick; the anchor planet also
    /// (re)starts the shooting star's orbit boost.
    fn click_planet(&mut self, planet: PlanetId) {
        let mut boost_orbit = false;
        for (_entity, (p, spin)) in self.world.query_mut::<(&Planet, &mut Spin)>() {
            if p.id != planet {
                continue;
            }
            spin.kick = Some(SpinKick {
                start_tick: self.time.tick,
                total_angle: spin.direction * PLANET_KICK_ANGLE,
                applied: 0.0,
            });
            boost_orbit = p.orbit_anchor;
            self.events.push(SceneEvent::PlanetKicked { planet });
        }

        if boost_orbit {
            for (_entity, path) in self.world.query_mut::<&mut OrbitPath>() {
                path.boost = Some(OrbitBoost {
                    start_tick: self.time.tick,
                });
            }
            self.events.push(SceneEvent::OrbitBoosted {
                peak_multiplier: ORBIT_BOOST_PEAK,
            });
        }
    }

    /// Hover change: retarget the scale tween from its current value.
    fn set_planet_hover(&mut self, planet: PlanetId, hovered: bool) {
        for (_entity, (p, hover, transform)) in self
            .world
            .query_mut::<(&Planet, &mut HoverScale, &Transform)>()
        {
            if p.id != planet || hover.hovered == hovered {
                continue;
            }
            hover.hovered = hovered;
            let current = match hover.tween {
                Some(t) => t.value_at(&self.time),
                None => transform.scale.x,
            };
            let target = if hovered {
                hover.base * PLANET_HOVER_SCALE
            } else {
                hover.base
            };
            hover.tween = Some(Tween::new(
                current,
                target,
                self.time.tick,
                PLANET_HOVER_SECS,
                Ease::CubicOut,
            ));
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Interaction tweens (hover scale, moon roll)
        systems::tweens::run(&mut self.world, &self.time);
        // 2. Idle spin + click kicks
        systems::spin::run(&mut self.world, &self.time);
        // 3. Shooting star orbit (boost envelope, angle, position)
        systems::orbit::run(&mut self.world, &self.time);
        // 4. Falling-star pool (age, exit, reseed)
        systems::falling_stars::run(&mut self.world, &mut self.rng, &self.time);
        // 5. Sky dome rotation
        systems::sky::run(&mut self.world, &self.time);
        // 6. Character carousel cross-fade
        systems::carousel::run(&mut self.world, &self.time, &mut self.events);
    }
}
