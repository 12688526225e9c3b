use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;

mod error;
mod icon_gen;
mod layout;
mod manifest;
mod raster;
mod render;

#[derive(Debug, Parser)]
#[clap(
    name = "ext-icon-gen",
    about = "Draw the PNG icon set for the distraction-free browser extension"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "images")]
    output: PathBuf,

    /// Icon sizes to generate, in order. Generation stops at the first failure.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        default_values_t = layout::DEFAULT_SIZES
    )]
    sizes: Vec<u32>,

    /// Also write icons.json, the icon section of the extension manifest
    #[clap(long)]
    manifest: bool,

    /// Print debug diagnostics to stderr
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .init();

    icon_gen::generate_icons(icon_gen::Args {
        output: args.output,
        sizes: args.sizes,
        manifest: args.manifest,
    })
}
