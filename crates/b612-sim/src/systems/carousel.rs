//! Character carousel system.
//!
//! A swap is a two-phase cross-fade: the current character eases out,
//! the index advances, the next character eases in. The swap state on
//! the slot also acts as the in-flight guard; clicks while it is set
//! are ignored by the engine.

use hecs::World;

use b612_core::components::{CharacterSlot, CharacterSwap};
use b612_core::constants::{CHARACTER_FADE_IN_SECS, CHARACTER_FADE_OUT_SECS};
use b612_core::enums::SwapPhase;
use b612_core::events::SceneEvent;
use b612_core::types::{Ease, SceneTime};

use crate::cast;

/// Advance any in-flight character swap.
pub fn run(world: &mut World, time: &SceneTime, events: &mut Vec<SceneEvent>) {
    for (_entity, slot) in world.query_mut::<&mut CharacterSlot>() {
        let Some(swap) = slot.swap else { continue };
        let elapsed = time.elapsed_secs - SceneTime::secs_at(swap.phase_start_tick);

        match swap.phase {
            SwapPhase::FadeOut => {
                let progress = (elapsed / CHARACTER_FADE_OUT_SECS).clamp(0.0, 1.0);
                slot.opacity = 1.0 - Ease::CubicInOut.apply(progress);
                if progress >= 1.0 {
                    // Fully transparent: advance to the next character
                    // and start fading back in.
                    slot.index = (slot.index + 1) % cast::CAST.len();
                    events.push(SceneEvent::CharacterChanged {
                        index: slot.index,
                        name: cast::entry(slot.index).name.to_string(),
                    });
                    slot.swap = Some(CharacterSwap {
                        phase: SwapPhase::FadeIn,
                        phase_start_tick: time.tick,
                    });
                }
            }
            SwapPhase::FadeIn => {
                let progress = (elapsed / CHARACTER_FADE_IN_SECS).clamp(0.0, 1.0);
                slot.opacity = Ease::CubicInOut.apply(progress);
                if progress >= 1.0 {
                    slot.opacity = 1.0;
                    slot.swap = None;
                }
            }
        }
    }
}
