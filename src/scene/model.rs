use kurbo::{Affine, Point};

use crate::foundation::core::Color;

fn identity_affine() -> Affine {
    Affine::IDENTITY
}

fn default_stroke_width() -> u32 {
    1
}

/// A complete vector scene.
///
/// The scene is a pure data model: it can be built programmatically or
/// serialized/deserialized via Serde (JSON). Rendering is performed by
/// [`crate::render_scene`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Scene width in scene units.
    pub width: f64,
    /// Scene height in scene units.
    pub height: f64,
    /// Top-level elements in draw order.
    pub elements: Vec<Element>,
}

/// Fill and stroke styling for an element.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
pub struct Style {
    /// Interior fill color; `None` fills nothing.
    #[serde(default)]
    pub fill: Option<Color>,
    /// Outline stroke color; `None` strokes nothing.
    #[serde(default)]
    pub stroke: Option<Color>,
    /// Stroke width in pixels, minimum 1.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: u32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: None,
            stroke: None,
            stroke_width: 1,
        }
    }
}

/// The closed set of scene element kinds.
///
/// Dispatch over elements is an exhaustive match: a new kind is a
/// compile-time change at every draw site, never a silently ignored tag.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Element {
    /// A single filled pixel.
    Point(PointElement),
    /// A stroked line segment.
    Line(LineElement),
    /// An open chain of stroked line segments.
    Polyline(PolylineElement),
    /// An axis-aligned rectangle (fill and/or outline).
    Rect(RectElement),
    /// A closed polygon (fill and/or outline).
    Polygon(PolygonElement),
    /// An ellipse. Accepted by the model; rasterization is a documented
    /// no-op.
    Ellipse(EllipseElement),
    /// A textured axis-aligned rectangle.
    Image(ImageElement),
    /// A group of child elements sharing a transform.
    Group(GroupElement),
}

/// A single point.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PointElement {
    /// Position in scene units.
    pub position: Point,
    /// Styling; only the fill color applies.
    #[serde(default)]
    pub style: Style,
    /// Element-local transform.
    #[serde(default = "identity_affine")]
    pub transform: Affine,
}

/// A line segment.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LineElement {
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Styling; only the stroke applies.
    #[serde(default)]
    pub style: Style,
    /// Element-local transform.
    #[serde(default = "identity_affine")]
    pub transform: Affine,
}

/// An open polyline.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PolylineElement {
    /// Vertices in order.
    pub points: Vec<Point>,
    /// Styling; only the stroke applies.
    #[serde(default)]
    pub style: Style,
    /// Element-local transform.
    #[serde(default = "identity_affine")]
    pub transform: Affine,
}

/// An axis-aligned rectangle.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RectElement {
    /// Top-left corner.
    pub position: Point,
    /// Width and height in scene units.
    pub dimension: kurbo::Vec2,
    /// Styling.
    #[serde(default)]
    pub style: Style,
    /// Element-local transform.
    #[serde(default = "identity_affine")]
    pub transform: Affine,
}

/// A closed polygon.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PolygonElement {
    /// Vertices in order; the outline closes back to the first vertex.
    pub points: Vec<Point>,
    /// Styling.
    #[serde(default)]
    pub style: Style,
    /// Element-local transform.
    #[serde(default = "identity_affine")]
    pub transform: Affine,
}

/// An ellipse (unrasterized).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct EllipseElement {
    /// Center point.
    pub center: Point,
    /// Semi-axis lengths.
    pub radius: kurbo::Vec2,
    /// Styling (unused while rasterization is a no-op).
    #[serde(default)]
    pub style: Style,
    /// Element-local transform.
    #[serde(default = "identity_affine")]
    pub transform: Affine,
}

/// A textured rectangle.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ImageElement {
    /// Top-left corner.
    pub position: Point,
    /// Width and height in scene units.
    pub dimension: kurbo::Vec2,
    /// Key of the texture in the render call's texture store.
    pub src: String,
    /// Element-local transform.
    #[serde(default = "identity_affine")]
    pub transform: Affine,
}

/// A group of elements.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct GroupElement {
    /// Child elements in draw order.
    pub elements: Vec<Element>,
    /// Transform applied to every child.
    #[serde(default = "identity_affine")]
    pub transform: Affine,
}
