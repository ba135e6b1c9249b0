use crate::foundation::error::{VexelError, VexelResult};

/// Maximum depth of a mip pyramid, including the base level.
pub const MAX_MIP_LEVELS: usize = 14;

/// One level of a mip pyramid: RGBA8 texels in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MipLevel {
    /// Level width in texels.
    pub width: u32,
    /// Level height in texels.
    pub height: u32,
    /// Texel bytes, `4 * width * height` long.
    pub texels: Vec<u8>,
}

impl MipLevel {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            texels: vec![0; 4 * width as usize * height as usize],
        }
    }

    /// Bounds-checked texel fetch.
    pub(crate) fn texel(&self, x: i64, y: i64) -> Option<[u8; 4]> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        let idx = 4 * (x as usize + y as usize * self.width as usize);
        Some([
            self.texels[idx],
            self.texels[idx + 1],
            self.texels[idx + 2],
            self.texels[idx + 3],
        ])
    }

    /// Texel fetch with coordinates clamped to the level bounds.
    pub(crate) fn texel_clamped(&self, x: i64, y: i64) -> [u8; 4] {
        let cx = x.clamp(0, i64::from(self.width) - 1);
        let cy = y.clamp(0, i64::from(self.height) - 1);
        let idx = 4 * (cx as usize + cy as usize * self.width as usize);
        [
            self.texels[idx],
            self.texels[idx + 1],
            self.texels[idx + 2],
            self.texels[idx + 3],
        ]
    }
}

/// A mip-mapped texture: level 0 is the base image, each further level is a
/// box-downsampled copy with halved (floor, minimum 1) dimensions.
///
/// Level dimensions strictly decrease past level 0; levels are immutable once
/// built and read-only during sampling.
#[derive(Clone, Debug)]
pub struct Texture {
    pub(crate) levels: Vec<MipLevel>,
}

impl Texture {
    /// Build a single-level texture from straight RGBA8 bytes.
    pub fn from_rgba8(width: u32, height: u32, texels: Vec<u8>) -> VexelResult<Self> {
        if width == 0 || height == 0 {
            return Err(VexelError::texture("texture dimensions must be non-zero"));
        }
        let expected = 4 * width as usize * height as usize;
        if texels.len() != expected {
            return Err(VexelError::texture(format!(
                "texel buffer length {} does not match {}x{} RGBA8 ({expected} bytes)",
                texels.len(),
                width,
                height,
            )));
        }
        Ok(Self {
            levels: vec![MipLevel {
                width,
                height,
                texels,
            }],
        })
    }

    /// All pyramid levels, base first.
    pub fn levels(&self) -> &[MipLevel] {
        &self.levels
    }

    /// A single pyramid level, if it exists.
    pub fn level(&self, level: usize) -> Option<&MipLevel> {
        self.levels.get(level)
    }

    /// Derive the sublevels of the pyramid below `start_level`.
    ///
    /// Existing levels above and including `start_level` are kept; everything
    /// below is rebuilt by 2x2 box downsampling, one level at a time, with the
    /// source footprint clamped at odd edges. The number of derived sublevels
    /// is `floor(log2(max(w, h)))` of the start level, capped so the total
    /// never exceeds [`MAX_MIP_LEVELS`]. A 1x1 start level is terminal and
    /// derives nothing.
    ///
    /// An out-of-range `start_level` is reported and aborts without mutating
    /// the pyramid.
    #[tracing::instrument(skip(self))]
    pub fn generate_mips(&mut self, start_level: usize) -> VexelResult<()> {
        if start_level >= self.levels.len() {
            tracing::error!(
                start_level,
                levels = self.levels.len(),
                "invalid mip start level"
            );
            return Err(VexelError::texture(format!(
                "mip start level {start_level} outside pyramid of {} levels",
                self.levels.len()
            )));
        }

        let base = &self.levels[start_level];
        let num_sublevels = (base.width.max(base.height).ilog2() as usize)
            .min(MAX_MIP_LEVELS.saturating_sub(start_level + 1));

        self.levels.truncate(start_level + 1);
        for i in 0..num_sublevels {
            let src = &self.levels[start_level + i];
            let width = (src.width / 2).max(1);
            let height = (src.height / 2).max(1);
            self.levels.push(downsample(src, width, height));
        }
        Ok(())
    }
}

/// Box-downsample `src` into a new level of the given dimensions, averaging
/// each 2x2 texel block. Odd-edge texels clamp the footprint to the source.
fn downsample(src: &MipLevel, width: u32, height: u32) -> MipLevel {
    let mut level = MipLevel::new(width, height);
    for y in 0..height as i64 {
        for x in 0..width as i64 {
            let x1 = (2 * x + 1).min(i64::from(src.width) - 1);
            let y1 = (2 * y + 1).min(i64::from(src.height) - 1);
            let taps = [
                src.texel_clamped(2 * x, 2 * y),
                src.texel_clamped(x1, 2 * y),
                src.texel_clamped(2 * x, y1),
                src.texel_clamped(x1, y1),
            ];
            let idx = 4 * (x as usize + y as usize * width as usize);
            for ch in 0..4 {
                let sum: u32 = taps.iter().map(|t| u32::from(t[ch])).sum();
                level.texels[idx + ch] = ((sum + 2) / 4) as u8;
            }
        }
    }
    level
}

#[cfg(test)]
#[path = "../../tests/unit/texture/mip.rs"]
mod tests;
