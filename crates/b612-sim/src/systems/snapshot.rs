//! Snapshot system: queries the ECS world and builds a complete SceneSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use b612_core::components::*;
use b612_core::constants::SHOOTING_STAR_SIZE;
use b612_core::enums::*;
use b612_core::events::SceneEvent;
use b612_core::state::*;
use b612_core::types::SceneTime;

use crate::cast;

/// Build a complete SceneSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SceneTime,
    phase: ScenePhase,
    time_scale: f64,
    star_count: usize,
    events: Vec<SceneEvent>,
) -> SceneSnapshot {
    SceneSnapshot {
        time: *time,
        phase,
        time_scale,
        moon: build_moon(world),
        planets: build_planets(world),
        shooting_star: build_shooting_star(world),
        falling_stars: build_falling_stars(world),
        sky: build_sky(world, time, star_count),
        character: build_character(world),
        events,
    }
}

/// Build MoonView from the moon singleton.
fn build_moon(world: &World) -> MoonView {
    world
        .query::<(&Moon, &Transform, &RollAnimation)>()
        .iter()
        .next()
        .map(|(_, (_, transform, roll))| MoonView {
            position: transform.translation,
            rotation: transform.rotation,
            scale: transform.scale.x,
            rolling: roll.tween.is_some(),
        })
        .unwrap_or_default()
}

/// Build PlanetView list, ordered by id for stable output.
fn build_planets(world: &World) -> Vec<PlanetView> {
    let mut planets: Vec<PlanetView> = world
        .query::<(&Planet, &Transform, &Spin, &HoverScale)>()
        .iter()
        .map(|(_, (planet, transform, spin, hover))| PlanetView {
            id: planet.id,
            position: transform.translation,
            rotation_y: transform.rotation.y,
            scale: transform.scale.x,
            hovered: hover.hovered,
            kicking: spin.kick.is_some(),
        })
        .collect();

    planets.sort_by_key(|p| match p.id {
        PlanetId::One => 0,
        PlanetId::Two => 1,
    });
    planets
}

/// Build ShootingStarView from the shooting star singleton.
fn build_shooting_star(world: &World) -> ShootingStarView {
    world
        .query::<(&ShootingStar, &Transform, &OrbitPath)>()
        .iter()
        .next()
        .map(|(_, (_, transform, path))| ShootingStarView {
            position: transform.translation,
            size: SHOOTING_STAR_SIZE,
            speed_multiplier: path.multiplier,
            boosted: path.boost.is_some(),
        })
        .unwrap_or_default()
}

/// Build FallingStarView list in pool order.
fn build_falling_stars(world: &World) -> Vec<FallingStarView> {
    world
        .query::<(&FallingStar, &Transform)>()
        .iter()
        .map(|(_, (star, transform))| FallingStarView {
            position: transform.translation,
            size: star.size,
            visible: star.visible,
        })
        .collect()
}

/// Build SkyView from the dome singleton.
fn build_sky(world: &World, time: &SceneTime, star_count: usize) -> SkyView {
    world
        .query::<(&SkyDome, &Transform)>()
        .iter()
        .next()
        .map(|(_, (_, transform))| SkyView {
            rotation_y: transform.rotation.y,
            pulse_time: time.elapsed_secs,
            star_count: star_count as u32,
        })
        .unwrap_or_default()
}

/// Build CharacterView by joining the slot with the cast list.
fn build_character(world: &World) -> CharacterView {
    world
        .query::<&CharacterSlot>()
        .iter()
        .next()
        .map(|(_, slot)| {
            let entry = cast::entry(slot.index);
            CharacterView {
                index: slot.index,
                name: entry.name.to_string(),
                description: entry.description.to_string(),
                quote: entry.quote.to_string(),
                model: entry.model.to_string(),
                position: entry.position,
                rotation: entry.rotation,
                scale: entry.scale,
                opacity: slot.opacity,
                swapping: slot.swap.is_some(),
            }
        })
        .unwrap_or_default()
}
