//! Scene primitives: generation, per-tick animation and drawing.
//!
//! Each primitive kind keeps its generation, animation and drawing in one module.

mod connector;
mod node;
mod trace;

use circuitry_core::{Scene, SceneObject};

use crate::rng::SceneRng;

pub(crate) use connector::{
    advance as advance_connector, animate as animate_connector, draw as draw_connector,
};
pub use connector::curve as connector_curve;
pub(crate) use node::{advance as advance_node, animate as animate_node, draw as draw_node};
pub use node::edges as node_edges;
pub(crate) use trace::{animate as animate_trace, draw as draw_trace};

/// Number of circuit traces in a scene.
pub const TRACE_COUNT: usize = 25;
/// Number of data connectors in a scene.
pub const CONNECTOR_COUNT: usize = 15;
/// Number of device nodes in a scene.
pub const NODE_COUNT: usize = 12;

/// Generate the background scene for a seed.
///
/// Traces come first, then connectors, then nodes. Generation cannot fail.
pub fn generate_scene(seed: u64) -> Scene {
    let mut rng = SceneRng::seeded(seed);
    let mut objects = Vec::with_capacity(TRACE_COUNT + CONNECTOR_COUNT + NODE_COUNT);

    objects.extend((0..TRACE_COUNT).map(|_| SceneObject::Trace(trace::generate(&mut rng))));
    objects.extend(
        (0..CONNECTOR_COUNT).map(|_| SceneObject::DataConnector(connector::generate(&mut rng))),
    );
    objects.extend((0..NODE_COUNT).map(|_| SceneObject::DeviceNode(node::generate(&mut rng))));

    log::info!(
        "generated scene from seed {seed}: {TRACE_COUNT} traces, {CONNECTOR_COUNT} connectors, {NODE_COUNT} nodes"
    );
    Scene::new(seed, objects)
}

/// `sin(t * speed + phase)` evaluated in double precision.
///
/// `t` grows without bound, so it stays `f64` until the final value.
pub(crate) fn pulse(seconds: f64, speed: f32, phase: f32) -> f32 {
    (seconds * speed as f64 + phase as f64).sin() as f32
}
