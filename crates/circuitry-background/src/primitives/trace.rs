//! Circuit traces: short straight or L-shaped lines that pulse.

use std::f32::consts::TAU;

use circuitry_core::{Hsl, Material, Trace, TracePulse, Vec3};
use ratatui::widgets::canvas::{Context, Line};

use crate::color::material_color;
use crate::projector::Projector;
use crate::rng::SceneRng;

/// Half extents of the box trace start points are drawn from.
const START_BOUNDS: Vec3 = Vec3::new(600.0, 400.0, 200.0);
/// Maximum offset of each leg of an L-shaped trace.
const L_LEG_JITTER: f32 = 100.0;
/// Maximum offset of the far end of a straight trace.
const STRAIGHT_JITTER: f32 = 150.0;

const BASE_HUE: f32 = 0.6;
const SATURATION: f32 = 0.8;
const LIGHTNESS: f32 = 0.6;

/// Build one randomized trace.
pub fn generate(rng: &mut SceneRng) -> Trace {
    let start = rng.point_in(START_BOUNDS);

    let points = if rng.exceeds(0.5) {
        let mid_x = start.x + rng.centered(L_LEG_JITTER);
        let end_y = start.y + rng.centered(L_LEG_JITTER);
        vec![
            start,
            Vec3::new(mid_x, start.y, start.z),
            Vec3::new(mid_x, end_y, start.z),
        ]
    } else {
        let end_x = start.x + rng.centered(STRAIGHT_JITTER);
        let end_y = start.y + rng.centered(STRAIGHT_JITTER);
        vec![start, Vec3::new(end_x, end_y, start.z)]
    };

    let hue = BASE_HUE + rng.up_to(0.1);
    let opacity = 0.4 + rng.up_to(0.3);

    Trace {
        points,
        material: Material::line(Hsl::new(hue, SATURATION, LIGHTNESS), opacity),
        pulse: TracePulse {
            pulse_speed: 1.0 + rng.up_to(2.0),
            phase: rng.up_to(TAU),
            original_opacity: opacity,
        },
    }
}

/// Pulse opacity and hue. A pure function of `seconds`.
pub fn animate(trace: &mut Trace, seconds: f64) {
    let pulse = super::pulse(seconds, trace.pulse.pulse_speed, trace.pulse.phase);
    trace.material.opacity = trace.pulse.original_opacity + pulse * 0.3;

    // Shift slightly toward cyan with the pulse for an "electrical" flicker
    let hue = (BASE_HUE + pulse * 0.05).rem_euclid(1.0);
    trace.material.color = Hsl::new(hue, SATURATION, LIGHTNESS);
}

pub fn draw(ctx: &mut Context, trace: &Trace, projector: &Projector) {
    let Some(color) = material_color(&trace.material) else {
        return;
    };
    for segment in trace.points.windows(2) {
        if let Some(((x1, y1), (x2, y2))) = projector.project_segment(segment[0], segment[1]) {
            ctx.draw(&Line::new(x1, y1, x2, y2, color));
        }
    }
}
