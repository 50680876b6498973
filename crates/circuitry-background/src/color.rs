//! Colour conversion for drawing scene materials.

use circuitry_core::Material;
use ratatui::style::Color;

/// Materials at or below this opacity are not drawn.
const MIN_VISIBLE_OPACITY: f32 = 0.02;

/// Terminal colour for a material, or `None` if it is effectively invisible.
///
/// Terminals have no alpha channel, so opacity fades the colour toward black.
/// The stored opacity may leave 0.0-1.0 during animation; it is clamped here.
pub fn material_color(material: &Material) -> Option<Color> {
    let alpha = material.opacity.clamp(0.0, 1.0);
    if alpha <= MIN_VISIBLE_OPACITY {
        return None;
    }

    let color = material.color;
    let lightness = color.l.clamp(0.0, 1.0) * alpha;
    Some(hsl_to_rgb(color.hue_degrees(), color.s.clamp(0.0, 1.0), lightness))
}

/// Convert HSL (hue in degrees) to RGB color.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Color {
    if s == 0.0 {
        let v = (l * 255.0) as u8;
        return Color::Rgb(v, v, v);
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    let h = h / 360.0;

    let r = hue_to_rgb(p, q, h + 1.0 / 3.0);
    let g = hue_to_rgb(p, q, h);
    let b = hue_to_rgb(p, q, h - 1.0 / 3.0);

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
