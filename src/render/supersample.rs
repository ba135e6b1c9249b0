use crate::foundation::core::{Canvas, Color};

/// Internal sample buffer at `sample_rate`x the render-target resolution per
/// axis.
///
/// Every cell is an RGBA8 accumulator that starts fully opaque white and is
/// reset to that state after every resolve. The buffer never tracks
/// translucency across draws: blending always composites against whatever
/// opaque color a cell currently holds, and the cell's alpha is forced back
/// to opaque after each write. The cell area is exactly `sample_rate^2` times
/// the render target's pixel area.
#[derive(Clone, Debug)]
pub struct SupersampleBuffer {
    width: u32,
    height: u32,
    sample_rate: u32,
    data: Vec<u8>,
}

impl SupersampleBuffer {
    /// Allocate a buffer for the given target at the given sample rate,
    /// initialized fully opaque white.
    pub fn new(target: Canvas, sample_rate: u32) -> Self {
        let width = target.width * sample_rate;
        let height = target.height * sample_rate;
        tracing::debug!(width, height, sample_rate, "allocating supersample buffer");
        Self {
            width,
            height,
            sample_rate,
            data: vec![255; 4 * width as usize * height as usize],
        }
    }

    /// Buffer width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Samples per render-target pixel, per axis.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Reset every cell to fully opaque white.
    pub fn clear(&mut self) {
        self.data.fill(255);
    }

    /// Composite `color` over the cell at `(x, y)` with the premultiplied
    /// "over" law: `out = src.rgb * src.a + (1 - src.a) * dst.rgb`.
    ///
    /// The cell's alpha is forced back to opaque afterwards. Cells outside
    /// the buffer are silently dropped.
    pub fn blend_sample(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let idx = 4 * (x as usize + y as usize * self.width as usize);
        let a = color.a.clamp(0.0, 1.0);
        let dst = &mut self.data[idx..idx + 4];
        for (ch, src) in [color.r, color.g, color.b].into_iter().enumerate() {
            let d = f32::from(dst[ch]) / 255.0;
            dst[ch] = ((src * a + (1.0 - a) * d) * 255.0).round() as u8;
        }
        dst[3] = 255;
    }

    /// Raw cell bytes (row-major RGBA8).
    pub fn cells(&self) -> &[u8] {
        &self.data
    }

    /// Box-filter the buffer down into `target` (row-major RGBA8 at the
    /// render-target resolution), then reset every cell to opaque white.
    ///
    /// Each output channel is the sum of its `sample_rate^2` cell values
    /// divided by `sample_rate^2` with integer division; the fractional
    /// remainder is truncated. `target` length must already be validated by
    /// the caller.
    pub fn resolve_into(&mut self, target: &mut [u8]) {
        let s = self.sample_rate as usize;
        let area = (s * s) as u64;
        let target_w = (self.width / self.sample_rate) as usize;
        let target_h = (self.height / self.sample_rate) as usize;

        for ty in 0..target_h {
            for tx in 0..target_w {
                let mut sums = [0u64; 4];
                for sy in 0..s {
                    let row = (ty * s + sy) * self.width as usize;
                    for sx in 0..s {
                        let idx = 4 * (row + tx * s + sx);
                        for (ch, sum) in sums.iter_mut().enumerate() {
                            *sum += u64::from(self.data[idx + ch]);
                        }
                    }
                }
                let out = 4 * (tx + ty * target_w);
                for (ch, sum) in sums.into_iter().enumerate() {
                    target[out + ch] = (sum / area) as u8;
                }
            }
        }

        self.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/supersample.rs"]
mod tests;
