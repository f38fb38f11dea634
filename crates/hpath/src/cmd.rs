//! Command handlers for the `hpath` CLI.
//!
//! These functions implement the top-level subcommands and write the
//! resulting images to disk.

use std::{fs::File, path::Path};

use anyhow::{Result, bail};
use gif::{Encoder, Frame, Repeat};
use hilbertpath::CurvePath;
use log::{debug, info};

use crate::render::{self, StrokeOptions};

/// Render a full-path image for `order`.
///
/// The returned image is square with the requested `size`.
pub fn render(order: u32, size: u32, stroke: StrokeOptions) -> Result<image::RgbaImage> {
    if stroke.line_width == 0 {
        bail!("line width must be >= 1");
    }

    let path = CurvePath::generate(order)?;
    debug!(
        "generated {} points for order {order} ({}x{} grid)",
        path.len(),
        path.side(),
        path.side()
    );
    Ok(render::render_path_image(size, &path, stroke))
}

/// Parameters controlling trace animation rendering.
pub struct TraceOptions<'a> {
    /// Output image size in pixels.
    pub size: u32,
    /// Curve order to trace.
    pub order: u32,
    /// Frames per second for the GIF.
    pub fps: u16,
    /// Number of animation frames.
    pub frames: u32,
    /// Stroke styling for the gradient polyline.
    pub stroke: StrokeOptions,
    /// Output GIF path.
    pub output: &'a Path,
}

/// Generate an animated GIF in which the path is progressively traced.
///
/// Each frame draws a longer prefix of the path; the final frame shows the
/// complete curve.
pub fn trace(options: TraceOptions<'_>) -> Result<()> {
    let TraceOptions {
        size,
        order,
        fps,
        frames,
        stroke,
        output,
    } = options;

    if stroke.line_width == 0 {
        bail!("line width must be >= 1");
    }

    if size > u16::MAX as u32 {
        bail!("size {} exceeds GIF limits ({}).", size, u16::MAX);
    }

    if frames == 0 {
        bail!("frame count must be >= 1");
    }

    let path = CurvePath::generate(order)?;
    let total_segments = path.len() as u32 - 1;
    let frames = frames.min(total_segments);

    let mut file = File::create(output)?;
    let mut encoder = Encoder::new(&mut file, size as u16, size as u16, &[])?;
    encoder.set_repeat(Repeat::Infinite)?;

    let frame_delay = frame_delay_from_fps(fps);

    for step in 1..=frames {
        // Integer scaling keeps the final frame exactly complete.
        let drawn = (u64::from(total_segments) * u64::from(step) / u64::from(frames)) as u32;
        let frame_image = render::render_partial_image(size, &path, drawn, stroke);

        let mut raw = frame_image.into_raw();
        let mut frame = Frame::from_rgba_speed(size as u16, size as u16, &mut raw, 10);
        frame.delay = frame_delay;
        encoder.write_frame(&frame)?;
    }

    info!("wrote {frames} frames to {}", output.display());
    Ok(())
}

/// Convert frames-per-second into a GIF frame delay (hundredths of a second).
fn frame_delay_from_fps(fps: u16) -> u16 {
    // GIF delays are centiseconds; clamp to at least 1cs to avoid zero-delay frames.
    let fps = fps.max(1);
    ((100 + (fps / 2)) / fps).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_delays() {
        assert_eq!(frame_delay_from_fps(20), 5);
        assert_eq!(frame_delay_from_fps(1), 100);
        assert_eq!(frame_delay_from_fps(120), 1);
        assert_eq!(frame_delay_from_fps(0), 100);
    }
}
