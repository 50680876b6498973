//! Background animation state management.

use circuitry_core::{CameraState, PointerOffset, Scene, SceneObject, Viewport};
use ratatui::{
    Frame,
    symbols::Marker,
    widgets::canvas::{Canvas, Context},
};

use crate::animator::{FrameAnimator, FrameTime};
use crate::primitives::{draw_connector, draw_node, draw_trace};
use crate::projector::{Projector, ResizeThrottle};

/// Node meshes are this many times their scene size unless configured.
const DEFAULT_MESH_SCALE: f32 = 1.0;

/// Everything the background needs from one tick to the next.
///
/// Pointer and resize notifications only record the latest value; they are
/// picked up at the start of the next [`tick`](Self::tick).
#[derive(Debug)]
pub struct BackgroundState {
    /// Generated objects.
    scene: Scene,
    /// Steps the scene each tick.
    animator: FrameAnimator,
    /// Camera drifting toward the pointer.
    camera: CameraState,
    /// Current projection.
    projector: Projector,
    /// Pending viewport changes.
    resize: ResizeThrottle,
    /// Latest pointer offset from the viewport centre.
    pointer: PointerOffset,
    /// Whether the camera follows the pointer at all.
    follow_pointer: bool,
    /// Last tick the camera moved on.
    camera_tick: Option<u64>,
    /// Enlargement applied to node meshes when drawing.
    mesh_scale: f32,
}

impl BackgroundState {
    /// Create a background for a scene drawn into `viewport`.
    pub fn new(scene: Scene, viewport: Viewport) -> Self {
        Self {
            scene,
            animator: FrameAnimator::new(),
            camera: CameraState::default(),
            projector: Projector::new(viewport),
            resize: ResizeThrottle::new(),
            pointer: PointerOffset::default(),
            follow_pointer: true,
            camera_tick: None,
            mesh_scale: DEFAULT_MESH_SCALE,
        }
    }

    /// Set the node mesh enlargement.
    pub fn with_mesh_scale(mut self, mesh_scale: f32) -> Self {
        self.mesh_scale = mesh_scale;
        self
    }

    /// Enable or disable camera pointer tracking. When disabled the camera
    /// stays wherever it last drifted to.
    pub fn set_pointer_follow(&mut self, follow_pointer: bool) {
        self.follow_pointer = follow_pointer;
    }

    pub fn follows_pointer(&self) -> bool {
        self.follow_pointer
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn viewport(&self) -> Viewport {
        self.projector.viewport()
    }

    pub fn pointer(&self) -> PointerOffset {
        self.pointer
    }

    /// Swap in a new scene. Camera and viewport are kept.
    pub fn replace_scene(&mut self, scene: Scene) {
        self.scene = scene;
        self.animator.reset();
    }

    /// Record a pointer position in viewport pixels.
    ///
    /// Measured against the newest requested viewport, even while its resize
    /// is still held back by the throttle.
    pub fn point_at(&mut self, x: f32, y: f32) {
        let viewport = self
            .resize
            .pending()
            .filter(|v| !v.is_degenerate())
            .unwrap_or_else(|| self.projector.viewport());
        self.pointer = viewport.offset_from_center(x, y);
    }

    /// Record a viewport resize notification.
    pub fn request_resize(&mut self, viewport: Viewport) {
        self.resize.request(viewport);
    }

    /// Run one tick: apply a due resize, animate the scene and move the camera.
    ///
    /// `now_ms` is wall-clock time used only for resize throttling. A repeated
    /// tick number (e.g. while paused) leaves the camera where it is.
    pub fn tick(&mut self, time: FrameTime, now_ms: u64) {
        if let Some(viewport) = self.resize.poll(now_ms)
            && self.projector.resize(viewport)
        {
            log::debug!("viewport resized to {}x{}", viewport.width, viewport.height);
        }

        self.animator.tick(&mut self.scene, time);

        let new_tick = self.camera_tick != Some(time.tick);
        self.camera_tick = Some(time.tick);
        if self.follow_pointer && new_tick {
            self.camera.follow(self.pointer);
        }
        self.projector.update_camera(&self.camera);
    }

    /// Render the background to the frame.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        if area.width == 0 || area.height == 0 {
            return;
        }

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| self.paint(ctx));

        frame.render_widget(canvas, area);
    }

    fn paint(&self, ctx: &mut Context) {
        for object in self.scene.objects() {
            match object {
                SceneObject::Trace(trace) => draw_trace(ctx, trace, &self.projector),
                SceneObject::DataConnector(connector) => {
                    draw_connector(ctx, connector, &self.projector)
                }
                SceneObject::DeviceNode(node) => {
                    draw_node(ctx, node, &self.projector, self.mesh_scale)
                }
            }
        }
    }
}
