use crate::error::IconError;
use crate::layout::{self, IconLayout};
use crate::raster;
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, RgbImage,
};
use std::io::Write;

/// A backend able to draw icons.
///
/// The driver probes the backend once before touching the filesystem and
/// then asks it for each size in turn.
pub trait Painter {
    /// Human readable backend name, used in diagnostics.
    fn name(&self) -> &str;

    /// Confirm the backend is usable.
    fn probe(&self) -> Result<(), IconError>;

    fn paint(&self, size: u32) -> Result<RgbImage, IconError>;
}

/// The built-in software rasterizer.
#[derive(Debug, Default, Clone, Copy)]
pub struct RasterPainter;

impl Painter for RasterPainter {
    fn name(&self) -> &str {
        "image"
    }

    /// Round-trips a single pixel through the PNG codec.
    fn probe(&self) -> Result<(), IconError> {
        let pixel = RgbImage::new(1, 1);
        encode_png(&pixel)
            .and_then(|bytes| {
                image::load_from_memory(&bytes)
                    .map(|_| ())
                    .map_err(|source| IconError::Encode { size: 1, source })
            })
            .map_err(|err| {
                tracing::debug!(error = %err, "png codec probe failed");
                IconError::DependencyMissing {
                    backend: self.name().to_string(),
                }
            })
    }

    fn paint(&self, size: u32) -> Result<RgbImage, IconError> {
        render(size)
    }
}

/// Draw the icon at `size`x`size` pixels.
///
/// Layers go bottom to top: background, ring, play glyph, slash.
pub fn render(size: u32) -> Result<RgbImage, IconError> {
    if size == 0 {
        return Err(IconError::render(size, "size must be positive"));
    }
    if size > layout::MAX_SIZE {
        return Err(IconError::render(
            size,
            format!("size must be at most {}", layout::MAX_SIZE),
        ));
    }

    let layout = IconLayout::new(size);
    tracing::debug!(
        size = layout.size,
        ring_margin = layout.ring_margin,
        play_margin = layout.play_margin,
        line_margin = layout.line_margin,
        "rendering icon"
    );

    let mut img = RgbImage::new(size, size);
    raster::fill(&mut img, layout::BACKGROUND);
    raster::stroke_ellipse(
        &mut img,
        layout.ring_bounds,
        layout::RING_STROKE,
        layout::ACCENT,
    );
    raster::fill_triangle(&mut img, layout.triangle, layout::ACCENT);
    let (from, to) = layout.slash;
    raster::stroke_line(&mut img, from, to, layout::SLASH_STROKE, layout::SLASH);

    Ok(img)
}

/// Encode a rendered icon as PNG into `w`.
///
/// Uses fixed compression settings, so equal images produce equal bytes.
pub fn write_png<W: Write>(img: &RgbImage, w: W) -> Result<(), IconError> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder
        .write_image(img.as_raw(), img.width(), img.height(), ColorType::Rgb8)
        .map_err(|source| IconError::Encode {
            size: img.width(),
            source,
        })
}

pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>, IconError> {
    let mut buf = Vec::new();
    write_png(img, &mut buf)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ACCENT, BACKGROUND, SLASH};

    #[test]
    fn test_render_dimensions() {
        for size in [1, 2, 3, 7, 16, 48, 128, 129] {
            let img = render(size).unwrap();
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn test_render_rejects_zero() {
        let err = render(0).unwrap_err();
        assert!(matches!(err, IconError::Render { size: 0, .. }));
    }

    #[test]
    fn test_render_rejects_oversized() {
        for size in [layout::MAX_SIZE + 1, 100_000, u32::MAX] {
            let err = render(size).unwrap_err();
            assert!(matches!(err, IconError::Render { size: s, .. } if s == size));
        }
    }

    #[test]
    fn test_render_128_layers() {
        let img = render(128).unwrap();

        // Background in the corners
        assert_eq!(*img.get_pixel(0, 0), BACKGROUND);
        assert_eq!(*img.get_pixel(127, 127), BACKGROUND);
        assert_eq!(*img.get_pixel(127, 0), BACKGROUND);

        // Ring top and left, clear of the slash and triangle
        assert_eq!(*img.get_pixel(64, 30), BACKGROUND);
        assert_eq!(*img.get_pixel(64, 32), ACCENT);
        assert_eq!(*img.get_pixel(64, 33), ACCENT);
        assert_eq!(*img.get_pixel(32, 64), ACCENT);

        // Inside the ring but off the glyph
        assert_eq!(*img.get_pixel(64, 34), BACKGROUND);
        assert_eq!(*img.get_pixel(38, 64), BACKGROUND);

        // Play glyph body and tip
        assert_eq!(*img.get_pixel(50, 60), ACCENT);
        assert_eq!(*img.get_pixel(106, 64), ACCENT);

        // Slash drawn over everything
        assert_eq!(*img.get_pixel(64, 64), SLASH);
        assert_eq!(*img.get_pixel(32, 96), SLASH);
        assert_eq!(*img.get_pixel(96, 32), SLASH);
    }

    #[test]
    fn test_render_single_pixel() {
        let img = render(1).unwrap();
        assert_eq!(img.dimensions(), (1, 1));
        let bytes = encode_png(&img).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (1, 1));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let first = encode_png(&render(48).unwrap()).unwrap();
        let second = encode_png(&render(48).unwrap()).unwrap();
        assert_eq!(first, second);
        assert_eq!(&first[..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_encoded_png_decodes_to_same_pixels() {
        let img = render(16).unwrap();
        let bytes = encode_png(&img).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded, img);
    }

    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_png_surfaces_writer_failure() {
        let img = render(16).unwrap();
        let err = write_png(&img, BrokenWriter).unwrap_err();
        assert!(matches!(err, IconError::Encode { size: 16, .. }));
    }

    #[test]
    fn test_raster_painter() {
        let painter = RasterPainter;
        assert!(painter.probe().is_ok());
        assert_eq!(painter.paint(16).unwrap().dimensions(), (16, 16));
        assert!(painter.paint(0).is_err());
    }
}
