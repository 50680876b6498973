//! Scene container and object variants.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color::Hsl;

/// Number of points a data connector curve is sampled into.
pub const CONNECTOR_SAMPLES: usize = 21;

/// Surface properties shared by every object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Current colour.
    pub color: Hsl,
    /// Current opacity. Animation may push this outside 0.0-1.0.
    pub opacity: f32,
    /// Draw edges only.
    pub wireframe: bool,
}

impl Material {
    /// A line material (lines are always drawn as edges).
    pub const fn line(color: Hsl, opacity: f32) -> Self {
        Self {
            color,
            opacity,
            wireframe: true,
        }
    }
}

/// Pulse parameters for a circuit trace.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TracePulse {
    /// Angular speed of the pulse (radians per second).
    pub pulse_speed: f32,
    /// Phase offset (radians).
    pub phase: f32,
    /// Opacity the pulse oscillates around.
    pub original_opacity: f32,
}

/// Flow parameters for a data connector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataFlow {
    /// Position of the flow along its cycle, kept in `0.0..1.0`.
    pub flow_position: f32,
    /// Advance of `flow_position` per tick.
    pub flow_speed: f32,
}

/// Activity parameters for a device node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeActivity {
    /// Angular speed of the scale pulse (radians per second).
    pub pulse_speed: f32,
    /// Rotation added around Y per tick (half of it around X).
    pub rotation_speed: f32,
    /// Phase offset (radians).
    pub phase: f32,
    /// Activity level (0.0 - 1.0).
    pub activity_level: f32,
}

/// Per-kind animation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnimationParams {
    Pulse(TracePulse),
    Flow(DataFlow),
    Activity(NodeActivity),
}

/// A short straight or right-angled circuit trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    /// Two points (straight) or three points (L-shaped).
    pub points: Vec<Vec3>,
    pub material: Material,
    pub pulse: TracePulse,
}

impl Trace {
    /// Whether the trace bends at a right angle.
    pub fn is_l_shaped(&self) -> bool {
        self.points.len() == 3
    }
}

/// A curved link between two points, sampled into a polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataConnector {
    /// Exactly [`CONNECTOR_SAMPLES`] points along a quadratic curve.
    pub samples: Vec<Vec3>,
    pub material: Material,
    pub flow: DataFlow,
}

/// Mesh kind of a device node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeShape {
    /// Six-sided flat prism (sensors).
    HexPrism,
    /// Small cube (microcontrollers).
    Cube,
    /// Octahedron (communication hubs).
    Octahedron,
}

/// A small solid representing a device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceNode {
    pub shape: NodeShape,
    pub position: Vec3,
    /// Euler rotation in radians (XYZ order).
    pub rotation: Vec3,
    /// Uniform scale.
    pub scale: f32,
    pub material: Material,
    pub activity: NodeActivity,
}

/// Discriminant of [`SceneObject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Trace,
    DataConnector,
    DeviceNode,
}

/// Anything that lives in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneObject {
    Trace(Trace),
    DataConnector(DataConnector),
    DeviceNode(DeviceNode),
}

impl SceneObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            SceneObject::Trace(_) => ObjectKind::Trace,
            SceneObject::DataConnector(_) => ObjectKind::DataConnector,
            SceneObject::DeviceNode(_) => ObjectKind::DeviceNode,
        }
    }

    pub fn material(&self) -> &Material {
        match self {
            SceneObject::Trace(t) => &t.material,
            SceneObject::DataConnector(c) => &c.material,
            SceneObject::DeviceNode(n) => &n.material,
        }
    }

    /// The object's animation parameters as a tagged value.
    pub fn animation(&self) -> AnimationParams {
        match self {
            SceneObject::Trace(t) => AnimationParams::Pulse(t.pulse),
            SceneObject::DataConnector(c) => AnimationParams::Flow(c.flow),
            SceneObject::DeviceNode(n) => AnimationParams::Activity(n.activity),
        }
    }
}

/// The full set of background objects.
///
/// Built once; objects are never added or removed afterwards, only their
/// animated fields change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Seed the scene was generated from.
    pub seed: u64,
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Wrap a generated object list.
    pub fn new(seed: u64, objects: Vec<SceneObject>) -> Self {
        Self { seed, objects }
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Mutable access to the objects. The slice cannot grow or shrink.
    pub fn objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Number of objects of the given kind.
    pub fn count(&self, kind: ObjectKind) -> usize {
        self.objects.iter().filter(|o| o.kind() == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace() -> SceneObject {
        SceneObject::Trace(Trace {
            points: vec![Vec3::ZERO, Vec3::X],
            material: Material::line(Hsl::new(0.6, 0.8, 0.6), 0.5),
            pulse: TracePulse {
                pulse_speed: 1.0,
                phase: 0.0,
                original_opacity: 0.5,
            },
        })
    }

    #[test]
    fn counts_by_kind() {
        let scene = Scene::new(7, vec![trace(), trace()]);
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.count(ObjectKind::Trace), 2);
        assert_eq!(scene.count(ObjectKind::DeviceNode), 0);
    }

    #[test]
    fn animation_matches_variant() {
        let obj = trace();
        assert!(matches!(obj.animation(), AnimationParams::Pulse(p) if p.pulse_speed == 1.0));
    }

    #[test]
    fn serializes_vectors_as_arrays() {
        let json = serde_json::to_string(&trace()).unwrap();
        assert!(json.contains("\"points\":[[0.0,0.0,0.0],[1.0,0.0,0.0]]"));
    }
}
