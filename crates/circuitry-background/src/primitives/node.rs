//! Device nodes: small rotating meshes that pulse in size.

use std::f32::consts::{PI, TAU};

use circuitry_core::{DeviceNode, Hsl, Material, NodeActivity, NodeShape, Vec3};
use glam::{EulerRot, Quat};
use ratatui::widgets::canvas::{Context, Line};

use crate::color::material_color;
use crate::projector::Projector;
use crate::rng::SceneRng;

/// Half extents of the box node positions are drawn from.
const POSITION_BOUNDS: Vec3 = Vec3::new(400.0, 250.0, 100.0);

const HEX_RADIUS: f32 = 8.0;
const HEX_HEIGHT: f32 = 3.0;
const HEX_SIDES: usize = 6;
const CUBE_EDGE: f32 = 6.0;
const OCTAHEDRON_RADIUS: f32 = 5.0;

const BASE_OPACITY: f32 = 0.6;

/// Build one randomized node.
pub fn generate(rng: &mut SceneRng) -> DeviceNode {
    let shape = match rng.unit() {
        u if u < 0.4 => NodeShape::HexPrism,
        u if u < 0.7 => NodeShape::Cube,
        _ => NodeShape::Octahedron,
    };

    let hue = 0.58 + rng.up_to(0.08);
    let wireframe = rng.exceeds(0.5);
    let position = rng.point_in(POSITION_BOUNDS);
    let rotation = Vec3::new(rng.up_to(PI), rng.up_to(PI), rng.up_to(PI));

    DeviceNode {
        shape,
        position,
        rotation,
        scale: 1.0,
        material: Material {
            color: Hsl::new(hue, 0.8, 0.6),
            opacity: BASE_OPACITY,
            wireframe,
        },
        activity: NodeActivity {
            pulse_speed: 0.5 + rng.up_to(1.5),
            rotation_speed: 0.01 + rng.up_to(0.02),
            phase: rng.up_to(TAU),
            activity_level: rng.unit(),
        },
    }
}

/// Spin the node by one tick.
pub fn advance(node: &mut DeviceNode) {
    let speed = node.activity.rotation_speed;
    node.rotation.y += speed;
    node.rotation.x += speed * 0.5;
}

/// Pulse scale and opacity. A pure function of `seconds`.
pub fn animate(node: &mut DeviceNode, seconds: f64) {
    let activity = node.activity;
    let pulse = super::pulse(seconds, activity.pulse_speed, activity.phase);
    node.scale = 1.0 + pulse * 0.2;
    node.material.opacity = BASE_OPACITY + super::pulse(seconds, 2.0, activity.phase) * 0.2;
}

/// Edges of a node mesh in local space, at unit scale.
pub fn edges(shape: NodeShape) -> Vec<(Vec3, Vec3)> {
    match shape {
        NodeShape::HexPrism => {
            let half = HEX_HEIGHT / 2.0;
            let ring = |i: usize, y: f32| {
                let theta = i as f32 / HEX_SIDES as f32 * TAU;
                Vec3::new(HEX_RADIUS * theta.sin(), y, HEX_RADIUS * theta.cos())
            };
            (0..HEX_SIDES)
                .flat_map(|i| {
                    let next = (i + 1) % HEX_SIDES;
                    [
                        (ring(i, half), ring(next, half)),
                        (ring(i, -half), ring(next, -half)),
                        (ring(i, half), ring(i, -half)),
                    ]
                })
                .collect()
        }
        NodeShape::Cube => {
            let h = CUBE_EDGE / 2.0;
            let corners = [
                Vec3::new(-h, -h, -h),
                Vec3::new(h, -h, -h),
                Vec3::new(h, h, -h),
                Vec3::new(-h, h, -h),
                Vec3::new(-h, -h, h),
                Vec3::new(h, -h, h),
                Vec3::new(h, h, h),
                Vec3::new(-h, h, h),
            ];
            const CUBE_EDGES: [(usize, usize); 12] = [
                (0, 1),
                (1, 2),
                (2, 3),
                (3, 0),
                (4, 5),
                (5, 6),
                (6, 7),
                (7, 4),
                (0, 4),
                (1, 5),
                (2, 6),
                (3, 7),
            ];
            CUBE_EDGES.iter().map(|&(a, b)| (corners[a], corners[b])).collect()
        }
        NodeShape::Octahedron => {
            let r = OCTAHEDRON_RADIUS;
            let poles = [Vec3::new(0.0, r, 0.0), Vec3::new(0.0, -r, 0.0)];
            let equator = [
                Vec3::new(r, 0.0, 0.0),
                Vec3::new(0.0, 0.0, r),
                Vec3::new(-r, 0.0, 0.0),
                Vec3::new(0.0, 0.0, -r),
            ];
            let spokes = poles
                .iter()
                .flat_map(|&pole| equator.iter().map(move |&v| (pole, v)));
            let belt = (0..equator.len()).map(|i| (equator[i], equator[(i + 1) % equator.len()]));
            spokes.chain(belt).collect()
        }
    }
}

/// Draw the node's edges. Solid nodes also get spokes from the centre to
/// every vertex as a cheap fill. `mesh_scale` enlarges meshes so they stay
/// visible at terminal resolution.
pub fn draw(ctx: &mut Context, node: &DeviceNode, projector: &Projector, mesh_scale: f32) {
    let Some(color) = material_color(&node.material) else {
        return;
    };

    let orientation = Quat::from_euler(
        EulerRot::XYZ,
        node.rotation.x,
        node.rotation.y,
        node.rotation.z,
    );
    let to_world = |local: Vec3| node.position + orientation * (local * node.scale * mesh_scale);

    let mut draw_segment = |a: Vec3, b: Vec3| {
        if let Some(((x1, y1), (x2, y2))) = projector.project_segment(a, b) {
            ctx.draw(&Line::new(x1, y1, x2, y2, color));
        }
    };

    for (a, b) in edges(node.shape) {
        let (a, b) = (to_world(a), to_world(b));
        draw_segment(a, b);
        if !node.material.wireframe {
            draw_segment(node.position, a);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_edge_counts() {
        assert_eq!(edges(NodeShape::HexPrism).len(), 18);
        assert_eq!(edges(NodeShape::Cube).len(), 12);
        assert_eq!(edges(NodeShape::Octahedron).len(), 12);
    }

    #[test]
    fn octahedron_vertices_on_sphere() {
        for (a, b) in edges(NodeShape::Octahedron) {
            assert!((a.length() - OCTAHEDRON_RADIUS).abs() < 1e-5);
            assert!((b.length() - OCTAHEDRON_RADIUS).abs() < 1e-5);
        }
    }

    #[test]
    fn generated_nodes_respect_ranges() {
        let mut rng = SceneRng::seeded(21);
        for _ in 0..200 {
            let node = generate(&mut rng);
            assert!(node.position.abs().cmple(POSITION_BOUNDS).all());
            assert!(node.rotation.cmpge(Vec3::ZERO).all());
            assert!(node.rotation.cmple(Vec3::splat(PI)).all());
            assert_eq!(node.scale, 1.0);
            assert_eq!(node.material.opacity, BASE_OPACITY);
            assert!((0.58..=0.66).contains(&node.material.color.h));
            assert!((0.5..=2.0).contains(&node.activity.pulse_speed));
            assert!((0.01..=0.03).contains(&node.activity.rotation_speed));
            assert!((0.0..=1.0).contains(&node.activity.activity_level));
        }
    }

    #[test]
    fn all_shapes_appear() {
        let mut rng = SceneRng::seeded(2);
        let shapes: Vec<NodeShape> = (0..200).map(|_| generate(&mut rng).shape).collect();
        for shape in [NodeShape::HexPrism, NodeShape::Cube, NodeShape::Octahedron] {
            assert!(shapes.contains(&shape), "{shape:?} never generated");
        }
    }

    #[test]
    fn rotation_accumulates_per_tick() {
        let mut node = generate(&mut SceneRng::seeded(4));
        node.rotation = Vec3::ZERO;
        node.activity.rotation_speed = 0.02;
        advance(&mut node);
        advance(&mut node);
        assert!((node.rotation.y - 0.04).abs() < 1e-6);
        assert!((node.rotation.x - 0.02).abs() < 1e-6);
        assert_eq!(node.rotation.z, 0.0);
    }

    #[test]
    fn scale_and_opacity_follow_time() {
        let mut node = generate(&mut SceneRng::seeded(4));
        node.activity.phase = 0.0;
        node.activity.pulse_speed = 1.0;
        animate(&mut node, 0.0);
        assert_eq!(node.scale, 1.0);
        assert_eq!(node.material.opacity, BASE_OPACITY);

        animate(&mut node, std::f64::consts::FRAC_PI_2);
        assert!((node.scale - 1.2).abs() < 1e-5);
        // sin(2 * pi/2) = sin(pi) ~ 0
        assert!((node.material.opacity - BASE_OPACITY).abs() < 1e-5);
    }
}
