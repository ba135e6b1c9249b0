use kurbo::Affine;

use crate::foundation::core::Canvas;
use crate::foundation::error::{VexelError, VexelResult};

/// A square view box over scene space, mapping it to normalized device
/// coordinates and on to screen space.
///
/// The view box is centered at `(center_x, center_y)` and spans `vspan` scene
/// units in each direction, so scene coordinates in
/// `[center - vspan, center + vspan]` land in `[0, 1]` per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    center_x: f64,
    center_y: f64,
    vspan: f64,
    scene_to_norm: Affine,
}

impl Viewport {
    /// Create a viewport; `vspan` must be positive.
    pub fn new(center_x: f64, center_y: f64, vspan: f64) -> VexelResult<Self> {
        if vspan <= 0.0 {
            return Err(VexelError::validation("viewport span must be > 0"));
        }
        let mut vp = Self {
            center_x,
            center_y,
            vspan,
            scene_to_norm: Affine::IDENTITY,
        };
        vp.set_viewbox(center_x, center_y, vspan);
        Ok(vp)
    }

    /// A viewport fitted to a whole scene of the given dimensions.
    pub fn fit(width: f64, height: f64) -> VexelResult<Self> {
        Self::new(width / 2.0, height / 2.0, width.max(height) / 2.0)
    }

    /// Re-aim the view box at a new center and span.
    pub fn set_viewbox(&mut self, center_x: f64, center_y: f64, vspan: f64) {
        self.center_x = center_x;
        self.center_y = center_y;
        self.vspan = vspan;

        let scale = 1.0 / (vspan * 2.0);
        self.scene_to_norm = Affine::new([
            scale,
            0.0,
            0.0,
            scale,
            -(center_x - vspan) * scale,
            -(center_y - vspan) * scale,
        ]);
    }

    /// Pan by `(dx, dy)` scene units and zoom the span by `scale`.
    pub fn update_viewbox(&mut self, dx: f64, dy: f64, scale: f64) {
        self.set_viewbox(self.center_x - dx, self.center_y - dy, self.vspan * scale);
    }

    /// Scene space to normalized device coordinates.
    pub fn scene_to_norm(&self) -> Affine {
        self.scene_to_norm
    }

    /// Scene space straight to screen space for the given canvas.
    pub fn scene_to_screen(&self, canvas: Canvas) -> Affine {
        Affine::scale_non_uniform(f64::from(canvas.width), f64::from(canvas.height))
            * self.scene_to_norm
    }
}
