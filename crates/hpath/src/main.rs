//! Command-line entry point for the `hpath` tool.
//!
//! Provides subcommands to render the Hilbert curve, animate its tracing,
//! inspect curve geometry, and launch the GUI.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
    process,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colornames::Color;
use hilbertpath::{HilbertCurve, curve::MAX_ORDER};
use image::Rgba;
use log::LevelFilter;

/// CLI command implementations.
mod cmd;
/// Rendering helpers shared by the CLI.
mod render;

use crate::render::{HueRange, StrokeOptions};

/// Validate a curve order against the supported range.
fn parse_order(value: &str) -> Result<u32, String> {
    let order: u32 = value
        .parse()
        .map_err(|_| format!("invalid order '{value}': expected a positive integer"))?;
    if !(1..=MAX_ORDER).contains(&order) {
        return Err(format!(
            "order must be between 1 and {MAX_ORDER}, got {order}"
        ));
    }
    Ok(order)
}

/// Parse a named or hex color into an `Rgba` value (alpha defaults to 0xff).
///
/// Supports CSS color names via `colornames` and RRGGBB hex with optional
/// alpha (RRGGBBAA), with or without a leading `#`.
fn parse_rgba_color(input: &str) -> Result<Rgba<u8>, String> {
    /// Parse an RRGGBB or RRGGBBAA hex string (leading `#` optional).
    fn parse_hex_rgba(hex: &str) -> Option<Rgba<u8>> {
        let raw = hex.trim_start_matches('#');
        if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let from_pair = |idx: usize| u8::from_str_radix(&raw[idx..idx + 2], 16).ok();

        match raw.len() {
            6 => Some(Rgba([from_pair(0)?, from_pair(2)?, from_pair(4)?, 0xff])),
            8 => Some(Rgba([
                from_pair(0)?,
                from_pair(2)?,
                from_pair(4)?,
                from_pair(6)?,
            ])),
            _ => None,
        }
    }

    let trimmed = input.trim();
    if let Some(rgba) = parse_hex_rgba(trimmed) {
        return Ok(rgba);
    }

    let color: Color = trimmed.try_into().map_err(|_| {
        format!(
            "invalid color '{input}': use a named color or RRGGBB hex (optional alpha, leading '#' optional)"
        )
    })?;
    let (red, green, blue) = color.rgb();
    Ok(Rgba([red, green, blue, 0xff]))
}

#[derive(Parser)]
#[command(name = "hpath")]
#[command(version = env!("CARGO_PKG_VERSION"))]
/// Top-level CLI options and subcommands.
struct Cli {
    /// Sets the level of verbosity (`-v`, `-vv`, ...).
    #[arg(short, action = clap::ArgAction::Count, help = "Sets the level of verbosity")]
    v: u8,

    /// Command to execute.
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
/// Subcommands supported by the `hpath` tool.
enum Commands {
    #[command(about = "Render the curve to a PNG image")]
    /// Render the curve as a gradient polyline.
    Render {
        #[arg(short = 's', long = "size", help = "Square image size in pixels")]
        /// Image size in pixels (square output).
        size: Option<u32>,

        #[arg(
            short = 'w',
            long = "line-width",
            value_name = "PIXELS",
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Line width in pixels for the curve stroke"
        )]
        /// Stroke width for the rendered curve.
        line_width: u32,

        #[arg(
            long = "bg",
            visible_alias = "background",
            value_parser = parse_rgba_color,
            default_value = "#060814",
            value_name = "COLOR",
            help = "Background color (name or hex; RRGGBB with optional alpha, '#' optional)"
        )]
        /// Background color for the image.
        background: Rgba<u8>,

        #[arg(
            long = "hue",
            value_name = "START:END",
            help = "Hue range in degrees for the gradient (default 0:360)"
        )]
        /// Optional hue interval for the segment gradient.
        hue: Option<HueRange>,

        #[arg(value_parser = parse_order, help = "Curve order (grid side is 2^ORDER)")]
        /// Curve order.
        order: u32,

        #[arg(help = "Output PNG file path")]
        /// Output image path.
        output: PathBuf,
    },

    #[command(about = "Generate an animated GIF tracing the curve")]
    /// Generate an animated GIF in which the curve is progressively drawn.
    Trace {
        #[arg(short = 's', long = "size", help = "Square image size in pixels")]
        /// Image size in pixels (square output).
        size: Option<u32>,

        #[arg(
            short = 'w',
            long = "line-width",
            value_name = "PIXELS",
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Line width in pixels for the curve stroke"
        )]
        /// Stroke width for the rendered curve.
        line_width: u32,

        #[arg(
            long = "bg",
            visible_alias = "background",
            value_parser = parse_rgba_color,
            default_value = "#060814",
            value_name = "COLOR",
            help = "Background color (name or hex; RRGGBB with optional alpha, '#' optional)"
        )]
        /// Background color for the frames.
        background: Rgba<u8>,

        #[arg(
            long = "hue",
            value_name = "START:END",
            help = "Hue range in degrees for the gradient (default 0:360)"
        )]
        /// Optional hue interval for the segment gradient.
        hue: Option<HueRange>,

        #[arg(
            long = "fps",
            default_value_t = 20,
            value_parser = clap::value_parser!(u16).range(1..=120),
            help = "Frames per second for the animated GIF"
        )]
        /// Frames per second for the animation (1-120).
        fps: u16,

        #[arg(
            long = "frames",
            default_value_t = 96,
            value_parser = clap::value_parser!(u32).range(1..),
            help = "Number of animation frames"
        )]
        /// Number of frames in the animation.
        frames: u32,

        #[arg(value_parser = parse_order, help = "Curve order (grid side is 2^ORDER)")]
        /// Curve order.
        order: u32,

        #[arg(help = "Output GIF file path")]
        /// Output GIF path.
        output: PathBuf,
    },

    #[command(about = "Print grid and point counts for an order")]
    /// Print curve geometry for an order.
    Info {
        #[arg(value_parser = parse_order, help = "Curve order (grid side is 2^ORDER)")]
        /// Curve order.
        order: u32,
    },

    #[command(about = "Open GUI window")]
    /// Launch the interactive GUI.
    Gui,
}

/// Print a success message or exit with an error.
fn report_ok<E: Display>(result: Result<(), E>, ok_msg: &str) {
    match result {
        Ok(()) => println!("{ok_msg}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

/// Initialize `env_logger` at a level derived from the `-v` count.
///
/// `RUST_LOG` still takes precedence when set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}

/// Handle the `render` subcommand.
fn handle_render(
    size: Option<u32>,
    order: u32,
    output: &Path,
    stroke: StrokeOptions,
) -> Result<()> {
    let size = size.unwrap_or(512);
    let image = cmd::render(order, size, stroke)?;
    image.save(output)?;
    Ok(())
}

/// Handle the `info` subcommand.
fn handle_info(order: u32) -> Result<()> {
    let curve = HilbertCurve::new(order)?;
    println!(
        "Hilbert curve order {}: {}x{} grid, {} points",
        curve.order(),
        curve.side(),
        curve.side(),
        curve.length()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.v);

    match cli.command {
        Commands::Render {
            size,
            line_width,
            background,
            hue,
            order,
            output,
        } => report_ok(
            handle_render(
                size,
                order,
                &output,
                StrokeOptions {
                    line_width,
                    background,
                    hue: hue.unwrap_or_default(),
                },
            ),
            "OK!",
        ),
        Commands::Trace {
            size,
            line_width,
            background,
            hue,
            fps,
            frames,
            order,
            output,
        } => report_ok(
            cmd::trace(cmd::TraceOptions {
                size: size.unwrap_or(512),
                order,
                fps,
                frames,
                stroke: StrokeOptions {
                    line_width,
                    background,
                    hue: hue.unwrap_or_default(),
                },
                output: &output,
            }),
            "Saved trace GIF!",
        ),
        Commands::Info { order } => {
            if let Err(e) = handle_info(order) {
                eprintln!("{e}");
                process::exit(1);
            }
        }
        Commands::Gui => report_ok(hpath_gui::gui(), "OK!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_orders() {
        assert_eq!(parse_order("1"), Ok(1));
        assert_eq!(parse_order("15"), Ok(15));
        assert!(parse_order("0").is_err());
        assert!(parse_order("16").is_err());
        assert!(parse_order("four").is_err());
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_rgba_color("#ff0080"), Ok(Rgba([255, 0, 128, 255])));
        assert_eq!(parse_rgba_color("00ff0040"), Ok(Rgba([0, 255, 0, 64])));
    }

    #[test]
    fn parses_named_colors() {
        assert_eq!(parse_rgba_color("black"), Ok(Rgba([0, 0, 0, 255])));
    }

    #[test]
    fn rejects_invalid_colors() {
        assert!(parse_rgba_color("#12345").is_err());
        assert!(parse_rgba_color("notacolor").is_err());
    }
}
