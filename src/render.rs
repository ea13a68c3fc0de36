//! Overlay rendering of detected segments.
//!
//! Segments are drawn onto an RGBA copy of the input. One segment may be
//! marked as selected: it gets its own color, a heavier stroke and filled
//! endpoint markers, and is drawn after the others so it stays on top.
//!
//! Segment coordinates follow [`LineSegment`]'s convention (pixel centers at
//! `i + 0.5`); they are shifted by half a pixel before rasterization.

use crate::line::LineSegment;
use image::{DynamicImage, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use log::debug;
use serde::{Deserialize, Serialize};

/// Upper bound on stroke widths and marker radii, in pixels.
pub const MAX_STROKE_PX: u32 = 64;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawStyle {
    /// RGBA color of unselected segments.
    pub line_color: [u8; 4],
    pub selected_color: [u8; 4],
    /// Stroke width in pixels, at most [`MAX_STROKE_PX`].
    pub thickness: u32,
    pub selected_thickness: u32,
    /// Radius of the endpoint markers on the selected segment; 0 disables them.
    pub endpoint_radius: u32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            line_color: [0, 255, 0, 255],
            selected_color: [255, 0, 0, 255],
            thickness: 2,
            selected_thickness: 4,
            endpoint_radius: 4,
        }
    }
}

/// Draw `lines` over a copy of `image` with the default style.
///
/// `selected` indexes into `lines`; `None` or an out-of-range index leaves
/// every segment unselected.
pub fn draw_lines(
    image: &DynamicImage,
    lines: &[LineSegment],
    selected: Option<usize>,
) -> RgbaImage {
    draw_lines_with_style(image, lines, selected, &DrawStyle::default())
}

pub fn draw_lines_with_style(
    image: &DynamicImage,
    lines: &[LineSegment],
    selected: Option<usize>,
    style: &DrawStyle,
) -> RgbaImage {
    let mut canvas = image.to_rgba8();
    draw_lines_mut(&mut canvas, lines, selected, style);
    canvas
}

/// In-place variant of [`draw_lines_with_style`].
pub fn draw_lines_mut(
    canvas: &mut RgbaImage,
    lines: &[LineSegment],
    selected: Option<usize>,
    style: &DrawStyle,
) {
    let selected = selected.filter(|&i| {
        let in_range = i < lines.len();
        if !in_range {
            debug!("draw_lines: selected index {i} out of range for {} lines", lines.len());
        }
        in_range
    });

    let line_color = Rgba(style.line_color);
    for (i, line) in lines.iter().enumerate() {
        if Some(i) == selected {
            continue;
        }
        draw_thick_segment(canvas, line, line_color, style.thickness);
    }

    if let Some(line) = selected.map(|i| &lines[i]) {
        let color = Rgba(style.selected_color);
        draw_thick_segment(canvas, line, color, style.selected_thickness);
        if style.endpoint_radius > 0 && line.is_finite() {
            for [x, y] in [line.start(), line.end()] {
                let center = ((x - 0.5).round() as i32, (y - 0.5).round() as i32);
                let radius = style.endpoint_radius.min(MAX_STROKE_PX) as i32;
                draw_filled_circle_mut(canvas, center, radius, color);
            }
        }
    }
}

/// Stroke a segment as parallel one-pixel lines spaced half a pixel apart
/// along its normal.
fn draw_thick_segment(
    canvas: &mut RgbaImage,
    line: &LineSegment,
    color: Rgba<u8>,
    thickness: u32,
) {
    if !line.is_finite() {
        debug!("draw_lines: skipping non-finite segment {line:?}");
        return;
    }
    let (x1, y1) = (line.x1 - 0.5, line.y1 - 0.5);
    let (x2, y2) = (line.x2 - 0.5, line.y2 - 0.5);
    let half = (thickness.clamp(1, MAX_STROKE_PX) as f32 - 1.0) * 0.5;

    let len = line.length();
    if len < 1e-6 {
        let center = (x1.round() as i32, y1.round() as i32);
        draw_filled_circle_mut(canvas, center, half.round() as i32, color);
        return;
    }
    let (nx, ny) = (-(y2 - y1) / len, (x2 - x1) / len);

    let steps = (2.0 * half).ceil() as i32;
    for k in -steps..=steps {
        let offset = k as f32 * 0.5;
        draw_line_segment_mut(
            canvas,
            (x1 + nx * offset, y1 + ny * offset),
            (x2 + nx * offset, y2 + ny * offset),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    fn black(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(width, height, BLACK))
    }

    fn horizontal() -> LineSegment {
        LineSegment::new(2.5, 10.5, 17.5, 10.5)
    }

    #[test]
    fn unselected_lines_use_line_color() {
        let input = black(20, 20);
        let out = draw_lines(&input, &[horizontal()], None);
        assert_eq!(out.get_pixel(10, 10), &GREEN);
        assert_eq!(out.get_pixel(10, 2), &BLACK);
        assert_eq!(input.to_rgba8().get_pixel(10, 10), &BLACK, "input is untouched");
    }

    #[test]
    fn selected_line_is_highlighted_with_markers() {
        let other = LineSegment::new(10.5, 2.5, 10.5, 17.5);
        let out = draw_lines(&black(20, 20), &[other, horizontal()], Some(1));
        assert_eq!(out.get_pixel(10, 10), &RED, "selected segment is drawn on top");
        assert_eq!(out.get_pixel(2, 10), &RED);
        assert_eq!(out.get_pixel(2, 13), &RED, "endpoint marker extends past the stroke");
        assert_eq!(out.get_pixel(10, 3), &GREEN);
    }

    #[test]
    fn out_of_range_selection_highlights_nothing() {
        let out = draw_lines(&black(20, 20), &[horizontal()], Some(5));
        assert_eq!(out.get_pixel(10, 10), &GREEN);
        assert_eq!(out.get_pixel(2, 13), &BLACK);
    }

    #[test]
    fn non_finite_and_offscreen_segments_are_harmless() {
        let lines = [
            LineSegment::new(f32::NAN, 0.0, 5.0, 5.0),
            LineSegment::new(-50.0, -50.0, 100.0, 100.0),
            LineSegment::new(4.5, 4.5, 4.5, 4.5),
        ];
        let out = draw_lines(&black(8, 8), &lines, Some(0));
        assert_eq!(out.dimensions(), (8, 8));
        assert_eq!(out.get_pixel(4, 4), &GREEN);
    }

    #[test]
    fn thickness_widens_the_stroke() {
        let thin = DrawStyle {
            thickness: 1,
            ..DrawStyle::default()
        };
        let out = draw_lines_with_style(&black(20, 20), &[horizontal()], None, &thin);
        assert_eq!(out.get_pixel(10, 10), &GREEN);
        assert_eq!(out.get_pixel(10, 9), &BLACK);
        assert_eq!(out.get_pixel(10, 12), &BLACK);

        let wide = DrawStyle {
            thickness: 5,
            ..DrawStyle::default()
        };
        let out = draw_lines_with_style(&black(20, 20), &[horizontal()], None, &wide);
        assert_eq!(out.get_pixel(10, 8), &GREEN);
        assert_eq!(out.get_pixel(10, 12), &GREEN);
        assert_eq!(out.get_pixel(10, 13), &BLACK);
        assert_eq!(out.get_pixel(10, 7), &BLACK);
    }

    #[test]
    fn selected_thickness_applies_to_the_selection_only() {
        let style = DrawStyle {
            thickness: 1,
            selected_thickness: 5,
            endpoint_radius: 0,
            ..DrawStyle::default()
        };
        let other = LineSegment::new(2.5, 4.5, 17.5, 4.5);
        let out = draw_lines_with_style(&black(20, 20), &[other, horizontal()], Some(1), &style);
        assert_eq!(out.get_pixel(10, 12), &RED);
        assert_eq!(out.get_pixel(10, 4), &GREEN);
        assert_eq!(out.get_pixel(10, 6), &BLACK);
    }

    #[test]
    fn oversized_thickness_is_clamped() {
        let style = DrawStyle {
            thickness: 10_000_000,
            ..DrawStyle::default()
        };
        let line = LineSegment::new(0.5, 4.5, 7.5, 4.5);
        let out = draw_lines_with_style(&black(8, 8), &[line], None, &style);
        assert!(out.pixels().all(|p| *p == GREEN));
    }

    #[test]
    fn style_fills_missing_fields_with_defaults() {
        let style: DrawStyle = serde_json::from_str(r#"{ "thickness": 1 }"#).unwrap();
        assert_eq!(style.thickness, 1);
        assert_eq!(style.selected_color, [255, 0, 0, 255]);
    }
}
