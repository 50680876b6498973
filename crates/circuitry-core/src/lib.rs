//! Core types for the circuitry animated background.
//!
//! Everything here is plain data: the scene graph produced by the primitive
//! factory, the camera that looks at it and the viewport it is drawn into.
//! Behaviour lives in `circuitry-background`.

mod camera;
mod color;
mod scene;
mod viewport;

pub use camera::CameraState;
pub use color::Hsl;
pub use glam::{Vec2, Vec3};
pub use scene::{
    AnimationParams, CONNECTOR_SAMPLES, DataConnector, DataFlow, DeviceNode, Material,
    NodeActivity, NodeShape, ObjectKind, Scene, SceneObject, Trace, TracePulse,
};
pub use viewport::{PointerOffset, Viewport};
