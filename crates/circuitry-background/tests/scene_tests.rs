use circuitry_background::{
    CONNECTOR_COUNT, FrameAnimator, FrameTime, NODE_COUNT, TRACE_COUNT, generate_scene,
};
use circuitry_core::{
    AnimationParams, CONNECTOR_SAMPLES, DataFlow, ObjectKind, Scene, SceneObject, TracePulse,
};

#[cfg(test)]
mod generation_tests {
    use super::*;

    #[test]
    fn test_exact_counts_for_any_seed() {
        for seed in [0, 1, 2, 42, 1234, u64::MAX] {
            let scene = generate_scene(seed);
            assert_eq!(scene.len(), 52, "seed {seed}");
            assert_eq!(scene.count(ObjectKind::Trace), TRACE_COUNT);
            assert_eq!(scene.count(ObjectKind::DataConnector), CONNECTOR_COUNT);
            assert_eq!(scene.count(ObjectKind::DeviceNode), NODE_COUNT);
        }
    }

    #[test]
    fn test_objects_are_grouped_by_kind() {
        let scene = generate_scene(8);
        let kinds: Vec<ObjectKind> = scene.objects().iter().map(SceneObject::kind).collect();
        assert!(kinds[..TRACE_COUNT].iter().all(|k| *k == ObjectKind::Trace));
        assert!(
            kinds[TRACE_COUNT..TRACE_COUNT + CONNECTOR_COUNT]
                .iter()
                .all(|k| *k == ObjectKind::DataConnector)
        );
        assert!(
            kinds[TRACE_COUNT + CONNECTOR_COUNT..]
                .iter()
                .all(|k| *k == ObjectKind::DeviceNode)
        );
    }

    #[test]
    fn test_point_counts() {
        for seed in 0..16 {
            for object in generate_scene(seed).objects() {
                match object {
                    SceneObject::Trace(trace) => assert!(matches!(trace.points.len(), 2 | 3)),
                    SceneObject::DataConnector(connector) => {
                        assert_eq!(connector.samples.len(), CONNECTOR_SAMPLES)
                    }
                    SceneObject::DeviceNode(_) => {}
                }
            }
        }
    }

    #[test]
    fn test_creation_ranges() {
        for seed in 0..16 {
            for object in generate_scene(seed).objects() {
                let material = object.material();
                let (opacity, hue) = match object {
                    SceneObject::Trace(_) => (0.4..=0.7, 0.6..=0.7),
                    SceneObject::DataConnector(_) => (0.3..=0.3, 0.55..=0.65),
                    SceneObject::DeviceNode(_) => (0.6..=0.6, 0.58..=0.66),
                };
                assert!(opacity.contains(&material.opacity), "{object:?}");
                assert!(hue.contains(&material.color.h), "{object:?}");
            }
        }
    }

    #[test]
    fn test_same_seed_same_scene() {
        assert_eq!(generate_scene(99), generate_scene(99));
        assert_ne!(generate_scene(99), generate_scene(100));
    }
}

#[cfg(test)]
mod animation_tests {
    use super::*;

    fn at(tick: u64, seconds: f64) -> FrameTime {
        FrameTime { tick, seconds }
    }

    /// Opacity and colour of every object, for comparing non-accumulating fields.
    fn looks(scene: &Scene) -> Vec<(f32, f32)> {
        scene
            .objects()
            .iter()
            .map(|o| (o.material().opacity, o.material().color.h))
            .collect()
    }

    #[test]
    fn test_trace_at_time_zero() {
        let mut scene = generate_scene(5);
        if let SceneObject::Trace(trace) = &mut scene.objects_mut()[0] {
            trace.pulse = TracePulse {
                pulse_speed: 1.0,
                phase: 0.0,
                original_opacity: 0.5,
            };
        }
        FrameAnimator::new().tick(&mut scene, at(0, 0.0));

        let SceneObject::Trace(trace) = &scene.objects()[0] else {
            panic!("first object should be a trace");
        };
        assert_eq!(trace.material.opacity, 0.5);
    }

    #[test]
    fn test_connector_half_cycle() {
        let mut scene = generate_scene(5);
        for object in scene.objects_mut() {
            if let SceneObject::DataConnector(connector) = object {
                connector.flow = DataFlow {
                    flow_position: 0.25,
                    flow_speed: 0.0,
                };
            }
        }
        FrameAnimator::new().tick(&mut scene, at(1, 3.0));

        for object in scene.objects() {
            if let SceneObject::DataConnector(connector) = object {
                assert!((connector.material.opacity - 0.3).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_time_derived_fields_are_deterministic() {
        let mut a = generate_scene(12);
        let mut b = generate_scene(12);
        let mut animator_a = FrameAnimator::new();
        let mut animator_b = FrameAnimator::new();

        for tick in 1..=30 {
            let time = at(tick, tick as f64 / 60.0);
            animator_a.tick(&mut a, time);
            animator_b.tick(&mut b, time);
        }
        assert_eq!(a, b);

        let before = looks(&a);
        animator_a.tick(&mut a, at(31, 0.75));
        let first = a.clone();
        animator_a.tick(&mut a, at(31, 0.75));
        assert_eq!(a, first, "re-running a tick must not step again");
        assert_ne!(looks(&first), before);
    }

    #[test]
    fn test_animation_params_survive_ticks() {
        let mut scene = generate_scene(6);
        let speeds = |scene: &Scene| -> Vec<f32> {
            scene
                .objects()
                .iter()
                .map(|o| match o.animation() {
                    AnimationParams::Pulse(p) => p.pulse_speed,
                    AnimationParams::Flow(f) => f.flow_speed,
                    AnimationParams::Activity(a) => a.rotation_speed,
                })
                .collect()
        };
        let initial = speeds(&scene);
        let mut animator = FrameAnimator::new();
        for tick in 1..=100 {
            animator.tick(&mut scene, at(tick, tick as f64 * 0.016));
        }
        assert_eq!(speeds(&scene), initial);
        assert_eq!(scene.len(), 52);
    }

    #[test]
    fn test_flow_stays_wrapped() {
        let mut scene = generate_scene(31);
        let mut animator = FrameAnimator::new();
        for tick in 1..=500 {
            animator.tick(&mut scene, at(tick, tick as f64 * 0.016));
        }
        for object in scene.objects() {
            if let AnimationParams::Flow(flow) = object.animation() {
                assert!((0.0..1.0).contains(&flow.flow_position));
            }
        }
    }
}

#[cfg(test)]
mod snapshot_tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let mut scene = generate_scene(77);
        let mut animator = FrameAnimator::new();
        for tick in 1..=10 {
            animator.tick(&mut scene, FrameTime { tick, seconds: tick as f64 * 0.1 });
        }

        let json = serde_json::to_string(&scene).unwrap();
        let restored: Scene = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, scene);
        for kind in [ObjectKind::Trace, ObjectKind::DataConnector, ObjectKind::DeviceNode] {
            assert_eq!(restored.count(kind), scene.count(kind));
        }
        let params: Vec<AnimationParams> = scene.objects().iter().map(|o| o.animation()).collect();
        let restored_params: Vec<AnimationParams> =
            restored.objects().iter().map(|o| o.animation()).collect();
        assert_eq!(restored_params, params);
    }
}
