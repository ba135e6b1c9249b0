//! Transform helpers between scene, normalized-device, and screen space.

pub mod viewport;
