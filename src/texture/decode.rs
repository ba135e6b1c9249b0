use anyhow::Context;

use crate::foundation::error::VexelResult;
use crate::texture::mip::Texture;

/// Decode encoded image bytes into a single-level texture.
///
/// Texels stay straight (non-premultiplied) RGBA8: the compositor
/// premultiplies at write time. Call [`Texture::generate_mips`] afterwards to
/// build the pyramid.
pub fn decode_image(bytes: &[u8]) -> VexelResult<Texture> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Texture::from_rgba8(width, height, rgba.into_raw())
}
