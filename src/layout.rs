//! Geometry of the extension icon.
//!
//! The icon is a dark square with a cyan ring, a cyan "play" triangle and a
//! red slash on top. Every position is derived from the edge length with
//! integer division, so the same size always yields the same pixels.

use image::Rgb;

/// Dark blue canvas fill (#0f3460)
pub const BACKGROUND: Rgb<u8> = Rgb([15, 52, 96]);
/// Ring and play glyph (#00d4ff)
pub const ACCENT: Rgb<u8> = Rgb([0, 212, 255]);
/// Slash overlay (#ff6b6b)
pub const SLASH: Rgb<u8> = Rgb([255, 107, 107]);

pub const RING_STROKE: u32 = 2;
pub const SLASH_STROKE: u32 = 3;

/// Largest edge length accepted for one icon
pub const MAX_SIZE: u32 = 8192;

/// Sizes written by a default run, in generation order.
pub const DEFAULT_SIZES: [u32; 3] = [128, 48, 16];

/// A pixel coordinate. Signed so that shapes may reach past the canvas edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }
}

/// Every shape of one icon, resolved for a given edge length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconLayout {
    pub size: u32,
    pub ring_margin: i64,
    pub play_margin: i64,
    pub line_margin: i64,
    /// Inclusive bounding box of the ring, top-left then bottom-right
    pub ring_bounds: (Point, Point),
    pub triangle: [Point; 3],
    pub slash: (Point, Point),
}

impl IconLayout {
    pub fn new(size: u32) -> Self {
        let s = i64::from(size);
        let half = s / 2;

        let ring_margin = s / 4;
        let play_margin = s / 3;
        let line_margin = s / 4;

        let triangle = [
            Point::new(half - play_margin / 2, half - play_margin),
            Point::new(half - play_margin / 2, half + play_margin),
            Point::new(half + play_margin, half),
        ];

        IconLayout {
            size,
            ring_margin,
            play_margin,
            line_margin,
            ring_bounds: (
                Point::new(ring_margin, ring_margin),
                Point::new(s - ring_margin, s - ring_margin),
            ),
            triangle,
            slash: (
                Point::new(line_margin, s - line_margin),
                Point::new(s - line_margin, line_margin),
            ),
        }
    }
}
