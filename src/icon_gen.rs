use crate::error::IconError;
use crate::layout::DEFAULT_SIZES;
use crate::manifest::ManifestIcons;
use crate::render::{write_png, Painter, RasterPainter};
use anyhow::{Context, Result};
use image::RgbImage;
use std::{
    fs::{self, create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

const RULE_WIDTH: usize = 40;

/// Options for one generation run
#[derive(Debug, Clone)]
pub struct Args {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub manifest: bool,
}

pub fn generate_icons(args: Args) -> Result<()> {
    generate_with(&RasterPainter, &args)
}

/// Render every requested size with `painter` and write the PNGs.
///
/// Sizes are processed in order and the run stops at the first failure, so
/// later sizes are never attempted. Nothing is written when the painter
/// fails its probe.
pub fn generate_with<P: Painter>(painter: &P, args: &Args) -> Result<()> {
    println!("YouTube Distraction-Free Icon Generator");
    println!("{}", "=".repeat(RULE_WIDTH));

    if let Err(err) = painter.probe() {
        print_install_guidance(painter.name());
        return Err(err).context("Can't start icon generation");
    }
    tracing::debug!(backend = painter.name(), "raster backend ready");

    create_dir_all(&args.output).context("Can't create output directory")?;
    let output = args
        .output
        .canonicalize()
        .context("Can't resolve output directory")?;
    let dir_name = match output.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => anyhow::bail!(
            "Output directory {} must have a name inside the extension folder",
            output.display()
        ),
    };

    println!("\nGenerating PNG icons...");

    for &size in &args.sizes {
        let filename = format!("icon{size}.png");
        print!("\nCreating {filename} ({size}x{size})... ");
        let _ = std::io::stdout().flush();

        match generate_one(painter, size, &output.join(&filename)) {
            Ok(()) => println!("✓"),
            Err(err) => {
                println!("✗");
                tracing::warn!(size, error = %err, "aborting remaining sizes");
                return Err(err).with_context(|| format!("Failed to generate {filename}"));
            }
        }
    }

    if args.manifest {
        ManifestIcons::new(&dir_name, &args.sizes).save(&output.join("icons.json"))?;
        println!("\n✓ Generated icons.json");
    }

    print_summary(&output);
    Ok(())
}

fn generate_one<P: Painter>(painter: &P, size: u32, path: &Path) -> Result<(), IconError> {
    let img = painter.paint(size)?;
    if img.dimensions() != (size, size) {
        return Err(IconError::render(
            size,
            format!("backend produced a {}x{} canvas", img.width(), img.height()),
        ));
    }
    save_png(&img, path)
}

/// Write the PNG beside its destination, then move it into place.
///
/// A failed write removes the partial file and leaves any previous icon
/// untouched.
fn save_png(img: &RgbImage, path: &Path) -> Result<(), IconError> {
    let tmp = path.with_extension("png.tmp");

    let result = File::create(&tmp)
        .map_err(|e| IconError::io(&tmp, e))
        .and_then(|file| {
            let mut out = BufWriter::new(file);
            write_png(img, &mut out)?;
            out.flush().map_err(|e| IconError::io(&tmp, e))
        })
        .and_then(|()| fs::rename(&tmp, path).map_err(|e| IconError::io(path, e)));

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn print_install_guidance(backend: &str) {
    println!("\n⚠ {backend} raster backend not available!");
    println!("\nRebuild the generator with its default features:");
    println!("  cargo install --path .");
    println!("\nOr export the icons by hand and place them in images/:");
    for size in DEFAULT_SIZES {
        println!("  - icon{size}.png");
    }
}

fn print_summary(output: &Path) {
    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("✓ All icons generated successfully!");

    // Manifest paths are relative to this folder
    let extension_dir = output.parent().unwrap_or(output);

    println!("\nYou can now load the extension in Chrome:");
    println!("1. Go to chrome://extensions/");
    println!("2. Enable Developer mode");
    println!("3. Click 'Load unpacked'");
    println!("4. Select: {}", extension_dir.display());
}
