//! Vexel is a supersampling CPU rasterizer for 2D vector scenes.
//!
//! A scene of points, lines, polygons, and images is rasterized into an
//! oversampled RGBA8 buffer and box-filtered down to the final frame; image
//! fills sample a mip-mapped texture pyramid with nearest, bilinear, or
//! trilinear filtering.
//!
//! # Pipeline overview
//!
//! 1. **Traverse**: `Scene -> screen-space primitives` (transform stack,
//!    exhaustive element dispatch)
//! 2. **Rasterize**: primitives -> supersample buffer
//!    ([`SoftwareRasterizer`], premultiplied-over compositing against an
//!    opaque backdrop)
//! 3. **Resolve**: supersample buffer -> [`FrameRgba`] (box filter, once per
//!    frame)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single-threaded and synchronous**: every rasterization or sampling
//!   call completes before returning.
//! - **Total hot paths**: out-of-range writes are dropped and invalid
//!   sampler reads answer a sentinel color; errors are reserved for
//!   configuration and I/O boundaries.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod render;
mod scene;
mod texture;
mod transform;

pub use foundation::core::{Affine, Canvas, Color, Point, Vec2};
pub use foundation::error::{VexelError, VexelResult};
pub use render::FrameRgba;
pub use render::pipeline::{TextureStore, render_scene};
pub use render::rasterizer::SoftwareRasterizer;
pub use render::supersample::SupersampleBuffer;
pub use scene::model::{
    Element, EllipseElement, GroupElement, ImageElement, LineElement, PointElement,
    PolygonElement, PolylineElement, RectElement, Scene, Style,
};
pub use scene::triangulate::triangulate;
pub use texture::decode::decode_image;
pub use texture::mip::{MAX_MIP_LEVELS, MipLevel, Texture};
pub use texture::sampler::{
    INVALID_SAMPLE, sample_bilinear, sample_nearest, sample_trilinear,
};
pub use transform::viewport::Viewport;
