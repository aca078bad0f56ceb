//! Scene renderer and PNG export.
//! Paints the scene onto an image buffer using tiny-skia, applying the current
//! pan/zoom, the in-progress draw preview and the selection highlight.
//!
//! Rectangles with negative extents are normalized the same way hit testing
//! normalizes them, so what is drawn is exactly what can be clicked.

use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Rect, Stroke, StrokeDash, Transform};
use voxsketch_core::{Error, Result};

use crate::designer_state::DesignerState;
use crate::model::{DesignerShape, Shape};
use crate::viewport::Viewport;

/// Stroke width of shapes in device pixels.
const STROKE_WIDTH: f32 = 2.0;

/// Gap between a selected shape and its highlight box, in device pixels.
const SELECTION_PADDING: f32 = 4.0;

fn selection_color() -> Color {
    Color::from_rgba8(0, 120, 215, 255)
}

fn preview_color() -> Color {
    Color::from_rgba8(128, 128, 128, 255)
}

/// Resolves a palette name or `#rrggbb` string.
pub fn parse_color(name: &str) -> Option<Color> {
    let rgb = match name.trim().to_lowercase().as_str() {
        "red" => (255, 0, 0),
        "blue" => (0, 0, 255),
        "green" => (0, 128, 0),
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "yellow" => (255, 255, 0),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "gray" | "grey" => (128, 128, 128),
        hex => {
            let digits = hex.strip_prefix('#')?;
            if digits.len() != 6 {
                return None;
            }
            let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
            (channel(0)?, channel(2)?, channel(4)?)
        }
    };
    Some(Color::from_rgba8(rgb.0, rgb.1, rgb.2, 255))
}

fn shape_color(shape: &Shape) -> Color {
    shape.color().and_then(parse_color).unwrap_or(Color::BLACK)
}

fn view_transform(viewport: &Viewport) -> Transform {
    let zoom = viewport.zoom() as f32;
    let offset = viewport.offset();
    // device = logical * zoom + offset
    Transform::from_scale(zoom, zoom).post_translate(offset.x as f32, offset.y as f32)
}

fn shape_path(shape: &Shape) -> Option<tiny_skia::Path> {
    match shape {
        Shape::Rectangle(rect) => {
            let (x, y, w, h) = rect.normalized();
            let r = Rect::from_xywh(x as f32, y as f32, w as f32, h as f32)?;
            Some(PathBuilder::from_rect(r))
        }
        Shape::Circle(circle) => {
            PathBuilder::from_circle(circle.x as f32, circle.y as f32, circle.r as f32)
        }
        Shape::Line(line) => {
            let mut pb = PathBuilder::new();
            pb.move_to(line.x1 as f32, line.y1 as f32);
            pb.line_to(line.x2 as f32, line.y2 as f32);
            pb.finish()
        }
    }
}

fn stroke_shape(
    pixmap: &mut Pixmap,
    shape: &Shape,
    color: Color,
    transform: Transform,
    zoom: f32,
) {
    let Some(path) = shape_path(shape) else {
        return;
    };
    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    let stroke = Stroke {
        width: STROKE_WIDTH / zoom,
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, transform, None);
}

fn draw_selection(pixmap: &mut Pixmap, shape: &Shape, transform: Transform, zoom: f32) {
    let (x1, y1, x2, y2) = shape.bounds();
    let pad = SELECTION_PADDING / zoom;
    let Some(rect) = Rect::from_ltrb(
        x1 as f32 - pad,
        y1 as f32 - pad,
        x2 as f32 + pad,
        y2 as f32 + pad,
    ) else {
        return;
    };

    let path = PathBuilder::from_rect(rect);
    let mut paint = Paint::default();
    paint.set_color(selection_color());
    let stroke = Stroke {
        width: 1.0 / zoom,
        dash: StrokeDash::new(vec![4.0 / zoom, 4.0 / zoom], 0.0),
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, transform, None);
}

/// Render the designer's scene to an image buffer of the given size.
pub fn render_scene(
    state: &DesignerState,
    width: u32,
    height: u32,
    background: &str,
) -> Result<RgbImage> {
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| Error::Render(format!("invalid image size {width}x{height}")))?;
    pixmap.fill(parse_color(background).unwrap_or(Color::WHITE));

    let viewport = state.viewport();
    let zoom = viewport.zoom() as f32;
    let transform = view_transform(viewport);

    for shape in state.scene().shapes() {
        stroke_shape(&mut pixmap, shape, shape_color(shape), transform, zoom);
    }

    if let Some(preview) = state.preview_shape() {
        stroke_shape(&mut pixmap, &preview, preview_color(), transform, zoom);
    }

    if let Some(selected) = state.selected_shape() {
        draw_selection(&mut pixmap, selected, transform, zoom);
    }

    let data = pixmap.data();
    Ok(RgbImage::from_fn(width, height, |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        // Background is opaque, so premultiplied and straight RGB agree.
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    }))
}

/// Render the scene and write it to `path` as PNG.
pub fn export_png(
    state: &DesignerState,
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
    background: &str,
) -> Result<()> {
    let image = render_scene(state, width, height, background)?;
    image
        .save_with_format(path.as_ref(), ImageFormat::Png)
        .map_err(|e| Error::Render(format!("failed to write PNG: {e}")))?;
    tracing::info!(
        "Exported {}x{} PNG to {}",
        width,
        height,
        path.as_ref().display()
    );
    Ok(())
}
