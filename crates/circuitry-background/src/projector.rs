//! Perspective projection of the scene onto the viewport.

use circuitry_core::{CameraState, Vec3, Viewport};
use glam::Mat4;

/// Vertical field of view in degrees.
const FOV_Y_DEGREES: f32 = 75.0;
const NEAR: f32 = 1.0;
const FAR: f32 = 1000.0;

/// Minimum time between two applied resizes.
pub const RESIZE_THROTTLE_MS: u64 = 250;

/// Maps world coordinates to normalised device coordinates (`-1.0..=1.0`
/// on both axes, y up) for the current camera and viewport.
#[derive(Debug, Clone)]
pub struct Projector {
    viewport: Viewport,
    aspect: f32,
    view_proj: Mat4,
}

impl Projector {
    /// Create a projector for a viewport, looking from the default camera.
    pub fn new(viewport: Viewport) -> Self {
        let mut projector = Self {
            viewport: Viewport::default(),
            aspect: 1.0,
            view_proj: Mat4::IDENTITY,
        };
        projector.resize(viewport);
        projector.update_camera(&CameraState::default());
        projector
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Adopt new viewport dimensions, effective from the next
    /// [`update_camera`](Self::update_camera). A zero-sized viewport is ignored
    /// and the previous dimensions stay in effect; returns whether it was applied.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        let Some(aspect) = viewport.aspect() else {
            log::debug!("ignoring degenerate viewport {viewport:?}");
            return false;
        };
        self.viewport = viewport;
        self.aspect = aspect;
        true
    }

    /// Rebuild the view-projection matrix. The camera always looks at the origin.
    pub fn update_camera(&mut self, camera: &CameraState) {
        let view = Mat4::look_at_rh(camera.position, Vec3::ZERO, Vec3::Y);
        let projection =
            Mat4::perspective_rh_gl(FOV_Y_DEGREES.to_radians(), self.aspect, NEAR, FAR);
        self.view_proj = projection * view;
    }

    /// Project a world point. `None` if it is behind the camera or outside
    /// the depth range.
    pub fn project(&self, point: Vec3) -> Option<(f64, f64)> {
        let clip = self.view_proj * point.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        if !(-1.0..=1.0).contains(&ndc.z) {
            return None;
        }
        Some((ndc.x as f64, ndc.y as f64))
    }

    /// Project both ends of a segment; `None` unless both are visible.
    pub fn project_segment(&self, a: Vec3, b: Vec3) -> Option<((f64, f64), (f64, f64))> {
        Some((self.project(a)?, self.project(b)?))
    }
}

/// Rate-limits viewport changes.
///
/// The first request applies immediately; later ones are held until the
/// throttle window has passed, and only the most recent size is applied.
#[derive(Debug, Clone, Default)]
pub struct ResizeThrottle {
    pending: Option<Viewport>,
    last_applied_ms: Option<u64>,
}

impl ResizeThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resize notification.
    pub fn request(&mut self, viewport: Viewport) {
        self.pending = Some(viewport);
    }

    /// The most recent request not yet applied.
    pub fn pending(&self) -> Option<Viewport> {
        self.pending
    }

    /// The viewport to apply now, if any.
    pub fn poll(&mut self, now_ms: u64) -> Option<Viewport> {
        let ready = match self.last_applied_ms {
            Some(last) => now_ms.saturating_sub(last) >= RESIZE_THROTTLE_MS,
            None => true,
        };
        if !ready {
            return None;
        }
        let viewport = self.pending.take()?;
        self.last_applied_ms = Some(now_ms);
        Some(viewport)
    }
}
