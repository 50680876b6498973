//! Animated circuit-board background for circuitry.
//!
//! The scene is generated once from a seed (traces, data connectors and
//! device nodes), advanced every tick by the [`FrameAnimator`] and drawn
//! through a perspective [`Projector`] whose camera drifts toward the
//! pointer. [`BackgroundState`] bundles all of it for the host loop.

mod animator;
mod clock;
mod color;
mod primitives;
mod projector;
mod rng;
mod state;

pub use animator::{FrameAnimator, FrameTime};
pub use clock::FrameClock;
pub use color::{hsl_to_rgb, material_color};
pub use primitives::{
    CONNECTOR_COUNT, NODE_COUNT, TRACE_COUNT, connector_curve, generate_scene, node_edges,
};
pub use projector::{Projector, RESIZE_THROTTLE_MS, ResizeThrottle};
pub use rng::SceneRng;
pub use state::BackgroundState;
