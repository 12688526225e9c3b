//! Aliased drawing primitives over an RGB canvas.
//!
//! Coordinates name pixels directly: the point `(x, y)` is the center of
//! pixel `(x, y)`. Shapes may extend past the canvas and are clipped.

use crate::layout::Point;
use image::{Rgb, RgbImage};
use std::ops::Range;

/// Paint every pixel of the canvas.
pub fn fill(img: &mut RgbImage, color: Rgb<u8>) {
    for pixel in img.pixels_mut() {
        *pixel = color;
    }
}

/// Stroke an unfilled ellipse inscribed in the inclusive box `bounds`.
///
/// The stroke grows inward from the box edge, so a box of width `w` covers
/// exactly `w + 1` columns.
pub fn stroke_ellipse(img: &mut RgbImage, bounds: (Point, Point), width: u32, color: Rgb<u8>) {
    let (min, max) = bounds;
    let cx = (min.x + max.x) as f64 / 2.0;
    let cy = (min.y + max.y) as f64 / 2.0;
    let outer_x = (max.x - min.x) as f64 / 2.0 + 0.5;
    let outer_y = (max.y - min.y) as f64 / 2.0 + 0.5;
    let inner_x = outer_x - width as f64;
    let inner_y = outer_y - width as f64;

    let Some((xs, ys)) = clip(img, min, max) else {
        return;
    };

    for y in ys {
        for x in xs.clone() {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if !within_ellipse(dx, dy, outer_x, outer_y) {
                continue;
            }
            // A stroke thicker than the radius leaves no hole
            let in_hole =
                inner_x > 0.0 && inner_y > 0.0 && within_ellipse(dx, dy, inner_x, inner_y);
            if !in_hole {
                img.put_pixel(x, y, color);
            }
        }
    }
}

fn within_ellipse(dx: f64, dy: f64, rx: f64, ry: f64) -> bool {
    (dx / rx).powi(2) + (dy / ry).powi(2) <= 1.0
}

/// Fill a triangle, edges included.
///
/// A triangle collapsed onto a line or a point still paints the pixels it
/// touches.
pub fn fill_triangle(img: &mut RgbImage, vertices: [Point; 3], color: Rgb<u8>) {
    let [a, b, c] = vertices;
    let min = Point::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y));
    let max = Point::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y));

    let Some((xs, ys)) = clip(img, min, max) else {
        return;
    };

    let edges = [(a, b), (b, c), (c, a)];
    for y in ys {
        for x in xs.clone() {
            let p = Point::new(i64::from(x), i64::from(y));
            let covered = inside_triangle(p, a, b, c)
                || edges
                    .iter()
                    .any(|&(from, to)| distance_to_segment(p, from, to).is_some_and(|d| d <= 0.5));
            if covered {
                img.put_pixel(x, y, color);
            }
        }
    }
}

fn inside_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);

    if cross(a, b, c) == 0 {
        return false;
    }

    let has_neg = d1 < 0 || d2 < 0 || d3 < 0;
    let has_pos = d1 > 0 || d2 > 0 || d3 > 0;
    !(has_neg && has_pos)
}

fn cross(o: Point, a: Point, b: Point) -> i64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

/// Stroke a straight line of the given width with flat ends.
pub fn stroke_line(img: &mut RgbImage, from: Point, to: Point, width: u32, color: Rgb<u8>) {
    let half = width as f64 / 2.0;
    let pad = half.ceil() as i64;
    let min = Point::new(from.x.min(to.x) - pad, from.y.min(to.y) - pad);
    let max = Point::new(from.x.max(to.x) + pad, from.y.max(to.y) + pad);

    let Some((xs, ys)) = clip(img, min, max) else {
        return;
    };

    for y in ys {
        for x in xs.clone() {
            let p = Point::new(i64::from(x), i64::from(y));
            if distance_to_segment(p, from, to).is_some_and(|d| d <= half) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Perpendicular distance from `p` to the segment, or `None` when `p` lies
/// beyond either end. A zero-length segment measures plain distance.
fn distance_to_segment(p: Point, from: Point, to: Point) -> Option<f64> {
    let dx = (to.x - from.x) as f64;
    let dy = (to.y - from.y) as f64;
    let px = (p.x - from.x) as f64;
    let py = (p.y - from.y) as f64;
    let len2 = dx * dx + dy * dy;

    if len2 == 0.0 {
        return Some((px * px + py * py).sqrt());
    }

    let t = (px * dx + py * dy) / len2;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }

    Some((dx * py - dy * px).abs() / len2.sqrt())
}

/// Intersect an inclusive box with the canvas.
fn clip(img: &RgbImage, min: Point, max: Point) -> Option<(Range<u32>, Range<u32>)> {
    let x0 = min.x.max(0);
    let y0 = min.y.max(0);
    let x1 = max.x.min(i64::from(img.width()) - 1);
    let y1 = max.y.min(i64::from(img.height()) - 1);

    if x0 > x1 || y0 > y1 {
        return None;
    }

    Some((x0 as u32..x1 as u32 + 1, y0 as u32..y1 as u32 + 1))
}
