use crate::foundation::core::{Canvas, Color};
use crate::foundation::error::{VexelError, VexelResult};
use crate::foundation::math::cross;
use crate::render::FrameRgba;
use crate::render::supersample::SupersampleBuffer;
use crate::texture::mip::Texture;
use crate::texture::sampler::sample_trilinear;

/// Supersampling rasterizer for screen-space primitives.
///
/// The rasterizer owns its supersample buffer and reallocates it whenever the
/// render target dimensions or the sample rate change. Input coordinates are
/// already in screen space (the caller resolves all transforms); pixel `(i, j)`
/// covers `[i, i+1) x [j, j+1)` with its center at `(i+0.5, j+0.5)`.
/// Coordinates outside the target are silently dropped, never an error.
#[derive(Clone, Debug)]
pub struct SoftwareRasterizer {
    target: Canvas,
    sample_rate: u32,
    samples: SupersampleBuffer,
}

impl SoftwareRasterizer {
    /// Create a rasterizer for the given target dimensions and sample rate.
    pub fn new(target: Canvas, sample_rate: u32) -> VexelResult<Self> {
        if sample_rate == 0 {
            return Err(VexelError::validation("sample rate must be >= 1"));
        }
        Ok(Self {
            target,
            sample_rate,
            samples: SupersampleBuffer::new(target, sample_rate),
        })
    }

    /// Current render-target dimensions.
    pub fn target(&self) -> Canvas {
        self.target
    }

    /// Current samples per output pixel, per axis.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// The internal supersample buffer (read-only).
    pub fn samples(&self) -> &SupersampleBuffer {
        &self.samples
    }

    /// Reconfigure the supersampling resolution.
    ///
    /// Reallocates and clears the sample buffer; any drawn-but-unresolved
    /// coverage is discarded.
    pub fn set_sample_rate(&mut self, sample_rate: u32) -> VexelResult<()> {
        if sample_rate == 0 {
            return Err(VexelError::validation("sample rate must be >= 1"));
        }
        self.sample_rate = sample_rate;
        self.samples = SupersampleBuffer::new(self.target, sample_rate);
        Ok(())
    }

    /// Rebind the render-target dimensions, reallocating the sample buffer to
    /// match.
    pub fn set_render_target(&mut self, target: Canvas) {
        self.target = target;
        self.samples = SupersampleBuffer::new(target, self.sample_rate);
    }

    /// Fill the output pixel containing `(x, y)` with `color`.
    ///
    /// Writes all `sample_rate^2` cells of pixel `(floor(x), floor(y))`;
    /// positions outside the target are silently dropped.
    pub fn rasterize_point(&mut self, x: f32, y: f32, color: Color) {
        self.fill_pixel(x.floor() as i64, y.floor() as i64, color);
    }

    /// Draw an anti-aliased line of width 1.
    pub fn rasterize_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, color: Color) {
        self.rasterize_line_width(x0, y0, x1, y1, color, 1);
    }

    /// Draw an anti-aliased line, stepping along the major axis and splitting
    /// coverage between the two pixels straddling the ideal line.
    ///
    /// `width` (minimum 1) inserts fully covered rows between the split
    /// boundary pixels for wider strokes. An endpoint landing exactly on a
    /// pixel boundary closes the span: its pixel receives full coverage. A
    /// zero-length line still writes both endpoint coverages at its single
    /// location.
    pub fn rasterize_line_width(
        &mut self,
        mut x0: f32,
        mut y0: f32,
        mut x1: f32,
        mut y1: f32,
        color: Color,
        width: u32,
    ) {
        let width = width.max(1) as i64;

        // step along the axis of greater extent
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
        }
        if x1 < x0 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        // recenter so pixel centers sit at integer coordinates
        x0 -= 0.5;
        y0 -= 0.5;
        x1 -= 0.5;
        y1 -= 0.5;

        let dx = x1 - x0;
        let dy = y1 - y0;
        let gradient = if dx == 0.0 { 1.0 } else { dy / dx };

        // first endpoint
        let px0 = (x0 + 0.5).floor();
        let y_end0 = y0 + gradient * (px0 - x0);
        let gap0 = 1.0 - (x0 + 0.5 - px0);
        self.split_coverage(steep, px0 as i64, y_end0, color, gap0, width);

        // second endpoint; a boundary hit closes the span at full coverage
        let px1 = (x1 + 0.5).floor();
        let y_end1 = y1 + gradient * (px1 - x1);
        let mut gap1 = x1 + 0.5 - px1;
        if gap1 == 0.0 {
            gap1 = 1.0;
        }
        self.split_coverage(steep, px1 as i64, y_end1, color, gap1, width);

        // interior steps advance the intersection by the gradient; columns
        // that cannot touch the target are skipped up front
        let extent = i64::from(self.target.width.max(self.target.height)) + 1;
        let start = ((px0 as i64).saturating_add(1)).max(-1);
        let end = (px1 as i64).min(extent);
        let mut y_cross = y_end0 + gradient * (start as f32 - px0);
        for x in start..end {
            self.split_coverage(steep, x, y_cross, color, 1.0, width);
            y_cross += gradient;
        }
    }

    /// Fill a triangle by half-plane testing every sample in its bounding
    /// box, directly at supersample resolution.
    ///
    /// The winding sign fixes which strict inequality denotes "inside" for
    /// all three edge functions, so the covered set is independent of vertex
    /// order. Samples exactly on an edge follow the top-left fill rule: a
    /// sample on a top or left edge belongs to the triangle, one on a right
    /// or bottom edge does not. Two triangles sharing an edge therefore
    /// partition its samples exactly, with neither gaps nor double blends.
    pub fn rasterize_triangle(
        &mut self,
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
    ) {
        let s = self.sample_rate as f32;
        // recenter, then scale into supersample space
        let (x0, y0) = ((x0 - 0.5) * s, (y0 - 0.5) * s);
        let (x1, y1) = ((x1 - 0.5) * s, (y1 - 0.5) * s);
        let (x2, y2) = ((x2 - 0.5) * s, (y2 - 0.5) * s);

        // outward-rounded bounding box, clipped to the sample buffer
        let min_x = (x0.min(x1).min(x2).floor() as i64).max(0);
        let max_x = (x0.max(x1).max(x2).ceil() as i64).min(i64::from(self.samples.width()) - 1);
        let min_y = (y0.min(y1).min(y2).floor() as i64).max(0);
        let max_y = (y0.max(y1).max(y2).ceil() as i64).min(i64::from(self.samples.height()) - 1);

        let (e0x, e0y) = (x1 - x0, y1 - y0);
        let (e1x, e1y) = (x2 - x1, y2 - y1);
        let (e2x, e2y) = (x0 - x2, y0 - y2);
        let counter_clockwise = cross(e0x, e0y, -e2x, -e2y) > 0.0;

        let covers = |c: f32, ex: f32, ey: f32| -> bool {
            if counter_clockwise {
                c < 0.0 || (c == 0.0 && top_left_edge(ex, ey))
            } else {
                c > 0.0 || (c == 0.0 && top_left_edge(-ex, -ey))
            }
        };

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let (sx, sy) = (x as f32, y as f32);
                let c0 = cross(sx - x0, sy - y0, e0x, e0y);
                let c1 = cross(sx - x1, sy - y1, e1x, e1y);
                let c2 = cross(sx - x2, sy - y2, e2x, e2y);
                if covers(c0, e0x, e0y) && covers(c1, e1x, e1y) && covers(c2, e2x, e2y) {
                    self.samples.blend_sample(x, y, color);
                }
            }
        }
    }

    /// Fill the destination rectangle `(x0, y0)-(x1, y1)` with texture color.
    ///
    /// The rectangle maps to `[0, 1]^2` texture space; every covered sample
    /// is trilinearly sampled (level of detail from the screen-pixel texture
    /// coordinate derivatives) and blended with the same over-compositing
    /// rule as triangle fill. An empty rectangle draws nothing.
    pub fn rasterize_image(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, tex: &Texture) {
        if !(x1 > x0 && y1 > y0) {
            return;
        }
        let s = self.sample_rate as f32;
        let u_scale = 1.0 / (x1 - x0);
        let v_scale = 1.0 / (y1 - y0);

        let sx0 = (((x0 - 0.5) * s).ceil() as i64).max(0);
        let sx1 = (((x1 - 0.5) * s).floor() as i64).min(i64::from(self.samples.width()) - 1);
        let sy0 = (((y0 - 0.5) * s).ceil() as i64).max(0);
        let sy1 = (((y1 - 0.5) * s).floor() as i64).min(i64::from(self.samples.height()) - 1);

        for sy in sy0..=sy1 {
            let py = sy as f32 / s + 0.5;
            let v = (py - y0) * v_scale;
            for sx in sx0..=sx1 {
                let px = sx as f32 / s + 0.5;
                let u = (px - x0) * u_scale;
                let color = sample_trilinear(tex, u, v, u_scale, v_scale);
                self.samples.blend_sample(sx, sy, color);
            }
        }
    }

    /// Box-filter the sample buffer into the externally owned render target,
    /// then reset the buffer to opaque white for the next frame.
    ///
    /// `target` must be row-major RGBA8 of exactly the bound dimensions.
    pub fn resolve_into(&mut self, target: &mut [u8]) -> VexelResult<()> {
        let expected = 4 * self.target.num_pixels();
        if target.len() != expected {
            return Err(VexelError::raster(format!(
                "render target length {} does not match {}x{} RGBA8 ({expected} bytes)",
                target.len(),
                self.target.width,
                self.target.height,
            )));
        }
        self.samples.resolve_into(target);
        Ok(())
    }

    /// Resolve into a freshly allocated frame.
    pub fn resolve(&mut self) -> FrameRgba {
        let mut data = vec![0; 4 * self.target.num_pixels()];
        self.samples.resolve_into(&mut data);
        FrameRgba {
            width: self.target.width,
            height: self.target.height,
            data,
        }
    }

    /// Write `color` into every sample cell of output pixel `(px, py)`.
    fn fill_pixel(&mut self, px: i64, py: i64, color: Color) {
        if px < 0 || py < 0 || px >= i64::from(self.target.width) || py >= i64::from(self.target.height)
        {
            return;
        }
        let s = i64::from(self.sample_rate);
        for sy in 0..s {
            for sx in 0..s {
                self.samples.blend_sample(px * s + sx, py * s + sy, color);
            }
        }
    }

    /// Distribute one major-axis step's coverage across the two pixels
    /// straddling the ideal line, with `width - 1` fully covered rows between
    /// them. `major` is the pixel index along the stepping axis, `minor` the
    /// continuous cross-axis position in recentred space.
    fn split_coverage(
        &mut self,
        steep: bool,
        major: i64,
        minor: f32,
        color: Color,
        weight: f32,
        width: i64,
    ) {
        let row = (minor + 0.5).floor();
        let frac = minor + 0.5 - row;
        let row = row as i64;

        let mut emit = |m: i64, r: i64, c: Color| {
            if steep {
                self.fill_pixel(r, m, c);
            } else {
                self.fill_pixel(m, r, c);
            }
        };
        emit(major, row, color * (weight * (1.0 - frac)));
        for i in 1..width {
            emit(major, row + i, color * weight);
        }
        emit(major, row + width, color * (weight * frac));
    }
}

/// Fill-rule tie-break for samples exactly on an edge. Edge vectors are taken
/// in the winding where the interior tests `cross < 0`; there a top edge runs
/// along +x and a left edge along -y (y-down screen space).
fn top_left_edge(ex: f32, ey: f32) -> bool {
    ey < 0.0 || (ey == 0.0 && ex > 0.0)
}

#[cfg(test)]
#[path = "../../tests/unit/render/rasterizer.rs"]
mod tests;
