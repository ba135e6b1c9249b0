//! Filtered texture sampling over a mip pyramid.
//!
//! All samplers are stateless and total: an invalid level or an out-of-bounds
//! texel never faults, it answers the reserved [`INVALID_SAMPLE`] sentinel.

use crate::foundation::core::Color;
use crate::foundation::math::lerp;
use crate::texture::mip::{MipLevel, Texture};

/// Reserved magenta sentinel returned for invalid levels and out-of-bounds
/// texel lookups.
pub const INVALID_SAMPLE: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Sample the nearest texel of one pyramid level.
///
/// `(u, v)` in `[0, 1]^2` maps to texel `(floor(u * width), floor(v * height))`.
/// An invalid `level` or a texel index outside the level yields the sentinel.
pub fn sample_nearest(tex: &Texture, u: f32, v: f32, level: usize) -> Color {
    let Some(mip) = tex.level(level) else {
        return INVALID_SAMPLE;
    };
    let x = (u * mip.width as f32).floor() as i64;
    let y = (v * mip.height as f32).floor() as i64;
    match mip.texel(x, y) {
        Some(px) => Color::from_rgba8(px),
        None => INVALID_SAMPLE,
    }
}

/// Bilinearly sample one pyramid level.
///
/// `(u, v)` maps to continuous texel space with a half-texel offset (clamped
/// to zero); the four neighboring texels blend with weights from the
/// fractional position. Neighbor fetches clamp to the level edge, so the
/// filter footprint never reads outside the level.
pub fn sample_bilinear(tex: &Texture, u: f32, v: f32, level: usize) -> Color {
    let Some(mip) = tex.level(level) else {
        return INVALID_SAMPLE;
    };
    bilinear(mip, u, v)
}

fn bilinear(mip: &MipLevel, u: f32, v: f32) -> Color {
    let fx = (u * mip.width as f32 - 0.5).max(0.0);
    let fy = (v * mip.height as f32 - 0.5).max(0.0);
    let x0 = fx.floor();
    let y0 = fy.floor();
    let s = fx - x0;
    let t = fy - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let c00 = Color::from_rgba8(mip.texel_clamped(x0, y0));
    let c10 = Color::from_rgba8(mip.texel_clamped(x0 + 1, y0));
    let c01 = Color::from_rgba8(mip.texel_clamped(x0, y0 + 1));
    let c11 = Color::from_rgba8(mip.texel_clamped(x0 + 1, y0 + 1));

    (c00 * (1.0 - s) + c10 * s) * (1.0 - t) + (c01 * (1.0 - s) + c11 * s) * t
}

/// Trilinearly sample the pyramid with level-of-detail selection.
///
/// `u_scale` and `v_scale` are the rates of change of the texture coordinates
/// per screen pixel. The level of detail is `log2` of the larger texel
/// footprint they imply on the base level; the two bracketing levels are
/// bilinearly sampled and blended by the fractional level of detail. A
/// magnification footprint (at most one texel per pixel) samples the base
/// level directly; a computed level past the bottom of the pyramid yields the
/// sentinel.
pub fn sample_trilinear(tex: &Texture, u: f32, v: f32, u_scale: f32, v_scale: f32) -> Color {
    let Some(base) = tex.level(0) else {
        return INVALID_SAMPLE;
    };

    let footprint = (u_scale * base.width as f32)
        .abs()
        .max((v_scale * base.height as f32).abs());
    if !footprint.is_finite() || footprint <= 1.0 {
        return sample_bilinear(tex, u, v, 0);
    }

    let lod = footprint.log2();
    let lo = lod.floor() as usize;
    let frac = lod - lod.floor();
    if lo >= tex.levels().len() {
        return INVALID_SAMPLE;
    }
    let hi = (lo + 1).min(tex.levels().len() - 1);

    let c_lo = sample_bilinear(tex, u, v, lo);
    let c_hi = sample_bilinear(tex, u, v, hi);
    Color {
        r: lerp(c_lo.r, c_hi.r, frac),
        g: lerp(c_lo.g, c_hi.g, frac),
        b: lerp(c_lo.b, c_hi.b, frac),
        a: lerp(c_lo.a, c_hi.a, frac),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/sampler.rs"]
mod tests;
