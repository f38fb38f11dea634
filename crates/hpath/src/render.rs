//! Image rendering helpers used by the CLI.
//!
//! This module includes small drawing primitives and the functions that
//! rasterize a Hilbert path as a gradient-colored polyline.

use std::str::FromStr;

use hilbertpath::CurvePath;
use image::{Rgba, RgbaImage};

/// Hue interval in degrees over which segment colors are interpolated.
#[derive(Clone, Copy, Debug)]
pub struct HueRange {
    /// Hue at the start of the path.
    pub start: f32,
    /// Hue at the end of the path.
    pub end: f32,
}

impl Default for HueRange {
    fn default() -> Self {
        // Full color wheel.
        Self {
            start: 0.0,
            end: 360.0,
        }
    }
}

impl FromStr for HueRange {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (start, end) = value
            .split_once(':')
            .ok_or_else(|| "hue range must be in START:END form".to_string())?;

        let parse_bound = |label: &str, bound: &str| -> Result<f32, String> {
            let degrees: f32 = bound
                .trim()
                .parse()
                .map_err(|_| format!("invalid {label} hue '{bound}': expected degrees"))?;
            if !(0.0..=360.0).contains(&degrees) {
                return Err(format!("{label} hue {degrees} is outside 0-360"));
            }
            Ok(degrees)
        };

        let start = parse_bound("start", start)?;
        let end = parse_bound("end", end)?;

        if start >= end {
            return Err(format!("hue start ({start}) must be less than end ({end})"));
        }

        Ok(Self { start, end })
    }
}

/// Stroke styling options for path rendering.
#[derive(Clone, Copy, Debug)]
pub struct StrokeOptions {
    /// Stroke width in pixels.
    pub line_width: u32,
    /// Background fill color.
    pub background: Rgba<u8>,
    /// Hue interval for the segment gradient.
    pub hue: HueRange,
}

/// Convert a grid coordinate to image space.
fn scale(v: u32, margin: u32, side: u32, innerw: f64) -> f64 {
    if side <= 1 {
        return f64::from(margin);
    }

    let sc = innerw / f64::from(side - 1);
    f64::from(margin) + (f64::from(v) * sc)
}

/// Put a pixel if the coordinates are inside the image bounds.
fn put_pixel_safe(img: &mut RgbaImage, x: i64, y: i64, col: Rgba<u8>) {
    let w = i64::from(img.width());
    let h = i64::from(img.height());
    if x >= 0 && y >= 0 && x < w && y < h {
        img.put_pixel(x as u32, y as u32, col);
    }
}

/// Stamp a filled square centered on `(cx, cy)` with a given side length.
fn stamp_square(img: &mut RgbaImage, cx: i64, cy: i64, size: u32, col: Rgba<u8>) {
    let radius = (i64::from(size) - 1) / 2;
    let extra = if size.is_multiple_of(2) { 1 } else { 0 };
    let x_start = cx - radius;
    let x_end = cx + radius + i64::from(extra);
    let y_start = cy - radius;
    let y_end = cy + radius + i64::from(extra);

    for y in y_start..=y_end {
        for x in x_start..=x_end {
            put_pixel_safe(img, x, y, col);
        }
    }
}

/// Draw a 4-connected Bresenham line into `img` with color `col`.
fn draw_line(
    img: &mut RgbaImage,
    mut x0: i64,
    mut y0: i64,
    x1: i64,
    y1: i64,
    col: Rgba<u8>,
    line_width: u32,
) {
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        stamp_square(img, x0, y0, line_width, col);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Color for the segment whose endpoint sits at `endpoint` along a path of
/// `total` points.
///
/// The endpoint index is interpolated linearly over the hue range, so color
/// encodes position along the traversal.
pub fn segment_color(endpoint: u32, total: u32, hue: HueRange) -> Rgba<u8> {
    let t = endpoint as f32 / total as f32;
    hsv_to_rgba(hue.start + (hue.end - hue.start) * t, 1.0, 1.0)
}

/// Convert an HSV color (hue in degrees, saturation/value in `[0, 1]`) to
/// opaque RGBA.
fn hsv_to_rgba(hue: f32, saturation: f32, value: f32) -> Rgba<u8> {
    let hue = hue.rem_euclid(360.0);
    let chroma = value * saturation;
    let secondary = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let base = value - chroma;

    let (red, green, blue) = match (hue / 60.0) as u32 {
        0 => (chroma, secondary, 0.0),
        1 => (secondary, chroma, 0.0),
        2 => (0.0, chroma, secondary),
        3 => (0.0, secondary, chroma),
        4 => (secondary, 0.0, chroma),
        _ => (chroma, 0.0, secondary),
    };

    Rgba([
        ((red + base) * 255.0).round() as u8,
        ((green + base) * 255.0).round() as u8,
        ((blue + base) * 255.0).round() as u8,
        0xff,
    ])
}

/// Draw the first `segment_count` segments of `path` into `img`.
///
/// The existing image contents are preserved and the segments are painted on
/// top, each in its gradient color.
fn draw_segments(
    img: &mut RgbaImage,
    size: u32,
    path: &CurvePath,
    segment_count: u32,
    stroke: StrokeOptions,
) {
    let stroke_width = stroke.line_width.max(1);
    let margin = 10_u32.saturating_add(stroke_width / 2);
    let innerw = f64::from(size.saturating_sub(margin.saturating_mul(2))).max(1.0);

    let side = path.side();
    let total = path.len() as u32;
    if total < 2 {
        return;
    }

    for (offset, (here, next)) in path.segments().take(segment_count as usize).enumerate() {
        let col = segment_color(offset as u32 + 1, total, stroke.hue);
        let x0 = scale(here.x, margin, side, innerw).round() as i64;
        let y0 = scale(here.y, margin, side, innerw).round() as i64;
        let x1 = scale(next.x, margin, side, innerw).round() as i64;
        let y1 = scale(next.y, margin, side, innerw).round() as i64;
        draw_line(img, x0, y0, x1, y1, col, stroke_width);
    }
}

/// Render a square image showing the first `segment_count` segments of the
/// path over the background color.
pub fn render_partial_image(
    size: u32,
    path: &CurvePath,
    segment_count: u32,
    stroke: StrokeOptions,
) -> RgbaImage {
    let mut imgbuf: RgbaImage = image::ImageBuffer::from_pixel(size, size, stroke.background);
    draw_segments(&mut imgbuf, size, path, segment_count, stroke);
    imgbuf
}

/// Render a square `size×size` image of the complete path.
pub fn render_path_image(size: u32, path: &CurvePath, stroke: StrokeOptions) -> RgbaImage {
    render_partial_image(size, path, path.len().saturating_sub(1) as u32, stroke)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Stroke setup used across the rendering tests: 1px lines on a
    /// transparent background, default hue wheel.
    fn test_stroke() -> StrokeOptions {
        StrokeOptions {
            line_width: 1,
            background: Rgba([0, 0, 0, 0]),
            hue: HueRange::default(),
        }
    }

    #[test]
    fn hsv_primaries() {
        assert_eq!(hsv_to_rgba(0.0, 1.0, 1.0), Rgba([255, 0, 0, 255]));
        assert_eq!(hsv_to_rgba(120.0, 1.0, 1.0), Rgba([0, 255, 0, 255]));
        assert_eq!(hsv_to_rgba(240.0, 1.0, 1.0), Rgba([0, 0, 255, 255]));
        // The wheel wraps at 360.
        assert_eq!(hsv_to_rgba(360.0, 1.0, 1.0), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn segments_land_on_scaled_cells() {
        // Order 1 in a 32px image: margin 10, inner width 12, so cells map
        // to pixels 10 and 22.
        let path = CurvePath::generate(1).expect("order 1");
        let stroke = test_stroke();
        let image = render_path_image(32, &path, stroke);

        assert_eq!(
            image.get_pixel(10, 16),
            &segment_color(1, 4, stroke.hue),
            "first segment midpoint"
        );
        assert_eq!(
            image.get_pixel(16, 22),
            &segment_color(2, 4, stroke.hue),
            "second segment midpoint"
        );
        assert_eq!(
            image.get_pixel(22, 16),
            &segment_color(3, 4, stroke.hue),
            "third segment midpoint"
        );
        assert_eq!(image.get_pixel(16, 16), &stroke.background, "grid center");
    }

    #[test]
    fn partial_render_stops_after_requested_segments() {
        let path = CurvePath::generate(1).expect("order 1");
        let stroke = test_stroke();

        let partial = render_partial_image(32, &path, 1, stroke);
        assert_eq!(partial.get_pixel(10, 16), &segment_color(1, 4, stroke.hue));
        assert_eq!(partial.get_pixel(16, 22), &stroke.background);
    }

    #[test]
    fn parses_hue_ranges() {
        let hue: HueRange = "0:180".parse().unwrap();
        assert_eq!(hue.start, 0.0);
        assert_eq!(hue.end, 180.0);

        let hue: HueRange = "90.5:270".parse().unwrap();
        assert_eq!(hue.start, 90.5);
    }

    #[test]
    fn rejects_invalid_hue_ranges() {
        assert!("180:0".parse::<HueRange>().is_err());
        assert!("abc".parse::<HueRange>().is_err());
        assert!("0:".parse::<HueRange>().is_err());
        assert!("-10:90".parse::<HueRange>().is_err());
        assert!("0:400".parse::<HueRange>().is_err());
    }
}
