use std::collections::BTreeMap;

use kurbo::{Affine, Point};

use crate::foundation::core::{Canvas, Color};
use crate::foundation::error::{VexelError, VexelResult};
use crate::render::FrameRgba;
use crate::render::rasterizer::SoftwareRasterizer;
use crate::scene::model::{
    Element, GroupElement, ImageElement, LineElement, PointElement, PolygonElement,
    PolylineElement, RectElement, Scene,
};
use crate::scene::triangulate::triangulate;
use crate::texture::mip::Texture;
use crate::transform::viewport::Viewport;

/// Prepared textures keyed by the scene's `src` strings.
#[derive(Debug, Default)]
pub struct TextureStore {
    textures: BTreeMap<String, Texture>,
}

impl TextureStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a texture under a key.
    pub fn insert(&mut self, key: impl Into<String>, texture: Texture) {
        self.textures.insert(key.into(), texture);
    }

    /// Look up a texture by key.
    pub fn get(&self, key: &str) -> Option<&Texture> {
        self.textures.get(key)
    }
}

/// Render a scene into a fresh frame.
///
/// The scene is fitted to the canvas through a [`Viewport`], every element is
/// drawn in order through the supersampling rasterizer, the canvas outline is
/// stroked, and the sample buffer is resolved once.
#[tracing::instrument(skip(scene, textures))]
pub fn render_scene(
    scene: &Scene,
    textures: &TextureStore,
    canvas: Canvas,
    sample_rate: u32,
) -> VexelResult<FrameRgba> {
    let mut raster = SoftwareRasterizer::new(canvas, sample_rate)?;
    let viewport = Viewport::fit(scene.width, scene.height)?;
    let screen = viewport.scene_to_screen(canvas);

    for element in &scene.elements {
        draw_element(&mut raster, textures, element, screen)?;
    }
    draw_canvas_outline(&mut raster, scene, screen);

    Ok(raster.resolve())
}

/// Dispatch one element. The match is exhaustive on purpose: adding an
/// element kind must break this site at compile time.
fn draw_element(
    raster: &mut SoftwareRasterizer,
    textures: &TextureStore,
    element: &Element,
    transform: Affine,
) -> VexelResult<()> {
    match element {
        Element::Point(p) => draw_point(raster, p, transform),
        Element::Line(l) => draw_line(raster, l, transform),
        Element::Polyline(p) => draw_polyline(raster, p, transform),
        Element::Rect(r) => draw_rect(raster, r, transform),
        Element::Polygon(p) => draw_polygon(raster, p, transform),
        // ellipse rasterization is a documented no-op
        Element::Ellipse(_) => {}
        Element::Image(i) => draw_image(raster, textures, i, transform)?,
        Element::Group(g) => draw_group(raster, textures, g, transform)?,
    }
    Ok(())
}

fn draw_point(raster: &mut SoftwareRasterizer, point: &PointElement, transform: Affine) {
    if let Some(fill) = point.style.fill {
        let p = (transform * point.transform) * point.position;
        raster.rasterize_point(p.x as f32, p.y as f32, fill);
    }
}

fn draw_line(raster: &mut SoftwareRasterizer, line: &LineElement, transform: Affine) {
    if let Some(stroke) = line.style.stroke {
        let t = transform * line.transform;
        let p0 = t * line.from;
        let p1 = t * line.to;
        raster.rasterize_line_width(
            p0.x as f32,
            p0.y as f32,
            p1.x as f32,
            p1.y as f32,
            stroke,
            line.style.stroke_width,
        );
    }
}

fn draw_polyline(raster: &mut SoftwareRasterizer, polyline: &PolylineElement, transform: Affine) {
    if let Some(stroke) = polyline.style.stroke {
        let t = transform * polyline.transform;
        let points: Vec<Point> = polyline.points.iter().map(|&p| t * p).collect();
        for pair in points.windows(2) {
            raster.rasterize_line_width(
                pair[0].x as f32,
                pair[0].y as f32,
                pair[1].x as f32,
                pair[1].y as f32,
                stroke,
                polyline.style.stroke_width,
            );
        }
    }
}

fn draw_rect(raster: &mut SoftwareRasterizer, rect: &RectElement, transform: Affine) {
    let t = transform * rect.transform;
    let (x, y) = (rect.position.x, rect.position.y);
    let (w, h) = (rect.dimension.x, rect.dimension.y);
    let p0 = t * Point::new(x, y);
    let p1 = t * Point::new(x + w, y);
    let p2 = t * Point::new(x, y + h);
    let p3 = t * Point::new(x + w, y + h);

    if let Some(fill) = rect.style.fill {
        fill_triangle(raster, p0, p1, p2, fill);
        fill_triangle(raster, p2, p1, p3, fill);
    }
    if let Some(stroke) = rect.style.stroke {
        for (a, b) in [(p0, p1), (p1, p3), (p3, p2), (p2, p0)] {
            raster.rasterize_line_width(
                a.x as f32,
                a.y as f32,
                b.x as f32,
                b.y as f32,
                stroke,
                rect.style.stroke_width,
            );
        }
    }
}

fn draw_polygon(raster: &mut SoftwareRasterizer, polygon: &PolygonElement, transform: Affine) {
    let t = transform * polygon.transform;

    if let Some(fill) = polygon.style.fill {
        for tri in triangulate(&polygon.points).chunks_exact(3) {
            fill_triangle(raster, t * tri[0], t * tri[1], t * tri[2], fill);
        }
    }
    if let Some(stroke) = polygon.style.stroke {
        let n = polygon.points.len();
        for i in 0..n {
            let a = t * polygon.points[i];
            let b = t * polygon.points[(i + 1) % n];
            raster.rasterize_line_width(
                a.x as f32,
                a.y as f32,
                b.x as f32,
                b.y as f32,
                stroke,
                polygon.style.stroke_width,
            );
        }
    }
}

fn draw_image(
    raster: &mut SoftwareRasterizer,
    textures: &TextureStore,
    image: &ImageElement,
    transform: Affine,
) -> VexelResult<()> {
    let texture = textures.get(&image.src).ok_or_else(|| {
        VexelError::validation(format!("scene references unknown texture {:?}", image.src))
    })?;
    let t = transform * image.transform;
    let p0 = t * image.position;
    let p1 = t * (image.position + image.dimension);
    raster.rasterize_image(p0.x as f32, p0.y as f32, p1.x as f32, p1.y as f32, texture);
    Ok(())
}

fn draw_group(
    raster: &mut SoftwareRasterizer,
    textures: &TextureStore,
    group: &GroupElement,
    transform: Affine,
) -> VexelResult<()> {
    let t = transform * group.transform;
    for child in &group.elements {
        draw_element(raster, textures, child, t)?;
    }
    Ok(())
}

fn fill_triangle(raster: &mut SoftwareRasterizer, a: Point, b: Point, c: Point, color: Color) {
    raster.rasterize_triangle(
        a.x as f32,
        a.y as f32,
        b.x as f32,
        b.y as f32,
        c.x as f32,
        c.y as f32,
        color,
    );
}

/// Stroke a black outline one pixel outside the scene's screen-space bounds.
fn draw_canvas_outline(raster: &mut SoftwareRasterizer, scene: &Scene, screen: Affine) {
    let mut a = screen * Point::new(0.0, 0.0);
    let mut b = screen * Point::new(scene.width, 0.0);
    let mut c = screen * Point::new(0.0, scene.height);
    let mut d = screen * Point::new(scene.width, scene.height);
    a.x -= 1.0;
    a.y -= 1.0;
    b.x += 1.0;
    b.y -= 1.0;
    c.x -= 1.0;
    c.y += 1.0;
    d.x += 1.0;
    d.y += 1.0;

    for (p, q) in [(a, b), (a, c), (d, b), (d, c)] {
        raster.rasterize_line(
            p.x as f32,
            p.y as f32,
            q.x as f32,
            q.y as f32,
            Color::BLACK,
        );
    }
}
