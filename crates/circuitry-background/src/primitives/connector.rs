//! Data connectors: curved links with a travelling brightness wave.

use std::f32::consts::PI;

use circuitry_core::{CONNECTOR_SAMPLES, DataConnector, DataFlow, Hsl, Material, Vec3};
use ratatui::widgets::canvas::{Context, Line};

use crate::color::material_color;
use crate::projector::Projector;
use crate::rng::SceneRng;

/// Half extents of the box connector endpoints are drawn from.
const ENDPOINT_BOUNDS: Vec3 = Vec3::new(500.0, 300.0, 150.0);
/// Maximum x/y offset of the curve's control point from the midpoint.
const CONTROL_JITTER: f32 = 50.0;

const BASE_HUE: f32 = 0.55;
const SATURATION: f32 = 0.9;
const LIGHTNESS: f32 = 0.7;
const BASE_OPACITY: f32 = 0.3;

/// Sample the quadratic Bézier through `start`, `control` and `end` at
/// [`CONNECTOR_SAMPLES`] evenly spaced parameters, endpoints included.
pub fn curve(start: Vec3, control: Vec3, end: Vec3) -> Vec<Vec3> {
    let divisions = (CONNECTOR_SAMPLES - 1) as f32;
    (0..CONNECTOR_SAMPLES)
        .map(|i| {
            let t = i as f32 / divisions;
            let u = 1.0 - t;
            start * (u * u) + control * (2.0 * u * t) + end * (t * t)
        })
        .collect()
}

/// Build one randomized connector.
pub fn generate(rng: &mut SceneRng) -> DataConnector {
    let start = rng.point_in(ENDPOINT_BOUNDS);
    let end = rng.point_in(ENDPOINT_BOUNDS);

    let midpoint = (start + end) / 2.0;
    let control = Vec3::new(
        midpoint.x + rng.centered(CONTROL_JITTER),
        midpoint.y + rng.centered(CONTROL_JITTER),
        midpoint.z,
    );

    let hue = BASE_HUE + rng.up_to(0.1);

    DataConnector {
        samples: curve(start, control, end),
        material: Material::line(Hsl::new(hue, SATURATION, LIGHTNESS), BASE_OPACITY),
        flow: DataFlow {
            flow_position: rng.unit(),
            flow_speed: 0.01 + rng.up_to(0.02),
        },
    }
}

/// Move the flow forward by one tick, wrapping into `0.0..1.0`.
pub fn advance(connector: &mut DataConnector) {
    let flow = &mut connector.flow;
    flow.flow_position = (flow.flow_position + flow.flow_speed).rem_euclid(1.0);
}

/// Derive opacity and hue from the current flow position.
pub fn animate(connector: &mut DataConnector) {
    let position = connector.flow.flow_position;
    connector.material.opacity = BASE_OPACITY + (position * 4.0 * PI).sin() * 0.4;
    let hue = (BASE_HUE + position * 0.08).rem_euclid(1.0);
    connector.material.color = Hsl::new(hue, SATURATION, LIGHTNESS);
}

pub fn draw(ctx: &mut Context, connector: &DataConnector, projector: &Projector) {
    let Some(color) = material_color(&connector.material) else {
        return;
    };
    for segment in connector.samples.windows(2) {
        if let Some(((x1, y1), (x2, y2))) = projector.project_segment(segment[0], segment[1]) {
            ctx.draw(&Line::new(x1, y1, x2, y2, color));
        }
    }
}
