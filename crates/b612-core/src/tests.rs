#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::commands::ViewerCommand;
    use crate::enums::*;
    use crate::events::SceneEvent;
    use crate::state::SceneSnapshot;
    use crate::types::{Ease, SceneTime, Tween};

    /// Verify ViewerCommand round-trips through serde (tagged union).
    #[test]
    fn test_viewer_command_serde() {
        let commands = vec![
            ViewerCommand::ClickMoon,
            ViewerCommand::ClickPlanet {
                planet: PlanetId::Two,
            },
            ViewerCommand::SetPlanetHover {
                planet: PlanetId::One,
                hovered: true,
            },
            ViewerCommand::StartScene,
            ViewerCommand::SetTimeScale { scale: 2.0 },
            ViewerCommand::Pause,
            ViewerCommand::Resume,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: ViewerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since ViewerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// The tag field is what the frontend dispatches on.
    #[test]
    fn test_viewer_command_tag() {
        let json = serde_json::to_string(&ViewerCommand::ClickPlanet {
            planet: PlanetId::One,
        })
        .unwrap();
        assert!(json.contains("\"type\":\"ClickPlanet\""), "got {json}");
    }

    /// Verify SceneEvent round-trips through serde.
    #[test]
    fn test_scene_event_serde() {
        let events = vec![
            SceneEvent::SceneStarted,
            SceneEvent::MoonRolled { target_roll: 0.785 },
            SceneEvent::CharacterChanged {
                index: 3,
                name: "Le Mouton".to_string(),
            },
            SceneEvent::OrbitBoosted {
                peak_multiplier: 3.0,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: SceneEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify SceneSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = SceneSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SceneSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    /// glam's serde feature encodes Vec3 as a bare [x, y, z] array,
    /// which is what the frontend expects.
    #[test]
    fn test_vec3_serde_shape() {
        let v = Vec3::new(17.0, 4.0, -30.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "[17.0,4.0,-30.0]");
    }

    /// Verify SceneTime advancement stays exact over long runs.
    #[test]
    fn test_scene_time_advance() {
        let mut time = SceneTime::default();
        assert_eq!(time.tick, 0);
        assert_eq!(time.elapsed_secs, 0.0);

        for _ in 0..60 {
            time.advance();
        }
        assert_eq!(time.tick, 60);
        // 60 ticks at 60Hz = 1 second
        assert!((time.elapsed_secs - 1.0).abs() < 1e-6);

        // One hour of ticks: derived elapsed time must not drift.
        let mut long = SceneTime::default();
        for _ in 0..(60 * 60 * 60) {
            long.advance();
        }
        assert!((long.elapsed_secs - 3600.0).abs() < 0.5);
    }

    #[test]
    fn test_ease_endpoints() {
        for ease in [Ease::Linear, Ease::CubicOut, Ease::CubicInOut] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-6);
            // Out-of-range inputs clamp rather than extrapolate.
            assert_eq!(ease.apply(-1.0), 0.0);
            assert!((ease.apply(2.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_ease_shapes() {
        // CubicOut front-loads progress; CubicInOut is symmetric around 0.5.
        assert!(Ease::CubicOut.apply(0.5) > 0.5);
        assert!((Ease::CubicInOut.apply(0.5) - 0.5).abs() < 1e-6);
        assert!(Ease::CubicInOut.apply(0.25) < 0.25);

        // Monotonic non-decreasing over the unit interval.
        for ease in [Ease::CubicOut, Ease::CubicInOut] {
            let mut prev = 0.0;
            for i in 0..=100 {
                let v = ease.apply(i as f32 / 100.0);
                assert!(v >= prev - 1e-6, "{ease:?} dipped at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_tween_value() {
        let mut time = SceneTime::default();
        let tween = Tween::new(1.0, 3.0, 0, 1.0, Ease::Linear);

        assert_eq!(tween.value_at(&time), 1.0);
        assert!(!tween.finished(&time));

        for _ in 0..30 {
            time.advance();
        }
        assert!((tween.value_at(&time) - 2.0).abs() < 1e-4);

        for _ in 0..30 {
            time.advance();
        }
        assert!((tween.value_at(&time) - 3.0).abs() < 1e-4);
        assert!(tween.finished(&time));

        // Past the end the value holds at the target.
        for _ in 0..120 {
            time.advance();
        }
        assert_eq!(tween.value_at(&time), 3.0);
    }

    /// Retargeting replaces the tween starting from its current value,
    /// so a hover that reverses mid-flight never jumps.
    #[test]
    fn test_tween_retarget_midflight() {
        let mut time = SceneTime::default();
        let grow = Tween::new(4.0, 4.4, 0, 0.3, Ease::CubicOut);

        for _ in 0..9 {
            time.advance();
        }
        let midway = grow.value_at(&time);
        assert!(midway > 4.0 && midway < 4.4);

        let shrink = Tween::new(midway, 4.0, time.tick, 0.3, Ease::CubicOut);
        assert!((shrink.value_at(&time) - midway).abs() < 1e-6);

        for _ in 0..30 {
            time.advance();
        }
        assert_eq!(shrink.value_at(&time), 4.0);
    }

    /// Zero-duration tweens snap straight to the target.
    #[test]
    fn test_tween_zero_duration() {
        let time = SceneTime::default();
        let tween = Tween::new(0.0, 5.0, 0, 0.0, Ease::CubicInOut);
        assert_eq!(tween.value_at(&time), 5.0);
        assert!(tween.finished(&time));
    }
}
