//! The vector scene: element tree, styles, triangulation.

pub mod model;
pub mod triangulate;
