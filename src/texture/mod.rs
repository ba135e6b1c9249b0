//! Mip-mapped textures: pyramid construction, filtered sampling, decoding.

pub mod decode;
pub mod mip;
pub mod sampler;
