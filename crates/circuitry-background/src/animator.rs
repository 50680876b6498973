//! Per-tick scene animation.

use circuitry_core::{Scene, SceneObject};

use crate::primitives::{
    advance_connector, advance_node, animate_connector, animate_node, animate_trace,
};

/// Time of one logical tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Tick number, increasing by one per displayed frame.
    pub tick: u64,
    /// Animation time in seconds.
    pub seconds: f64,
}

/// Advances every scene object once per tick.
///
/// Opacity, colour and scale are pure functions of the tick time. Node
/// rotation and connector flow integrate instead, one step per tick; running
/// the same tick twice re-derives the former without stepping the latter
/// again.
#[derive(Debug, Default)]
pub struct FrameAnimator {
    last_tick: Option<u64>,
}

impl FrameAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update every object in the scene for the given tick.
    pub fn tick(&mut self, scene: &mut Scene, time: FrameTime) {
        let step = self.last_tick != Some(time.tick);
        self.last_tick = Some(time.tick);

        for object in scene.objects_mut() {
            match object {
                SceneObject::Trace(trace) => animate_trace(trace, time.seconds),
                SceneObject::DataConnector(connector) => {
                    if step {
                        advance_connector(connector);
                    }
                    animate_connector(connector);
                }
                SceneObject::DeviceNode(node) => {
                    if step {
                        advance_node(node);
                    }
                    animate_node(node, time.seconds);
                }
            }
        }
    }

    /// Forget the last tick, e.g. after the scene was replaced.
    pub fn reset(&mut self) {
        self.last_tick = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::generate_scene;

    fn at(tick: u64, seconds: f64) -> FrameTime {
        FrameTime { tick, seconds }
    }

    #[test]
    fn repeated_tick_does_not_step_twice() {
        let mut scene = generate_scene(17);
        let mut animator = FrameAnimator::new();
        animator.tick(&mut scene, at(1, 0.5));
        let once = scene.clone();
        animator.tick(&mut scene, at(1, 0.5));
        assert_eq!(scene, once);
    }

    #[test]
    fn new_tick_steps_again() {
        let mut scene = generate_scene(17);
        let mut animator = FrameAnimator::new();
        animator.tick(&mut scene, at(1, 0.5));
        let once = scene.clone();
        animator.tick(&mut scene, at(2, 0.5));
        assert_ne!(scene, once);
    }

    #[test]
    fn reset_allows_stepping_same_tick() {
        let mut scene = generate_scene(3);
        let mut animator = FrameAnimator::new();
        animator.tick(&mut scene, at(0, 0.0));
        let once = scene.clone();
        animator.reset();
        animator.tick(&mut scene, at(0, 0.0));
        assert_ne!(scene, once);
    }
}
