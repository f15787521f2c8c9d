use std::path::PathBuf;

use clap::Parser;
use image::{GrayImage, Luma};
use log::info;

/// Writes a low-contrast grayscale test image: a diagonal ramp squeezed into
/// `[low, high]` with a brighter square in the middle.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Parameters {
    #[arg(long)]
    height: u32,
    #[arg(long)]
    width: u32,
    ///Darkest level used by the ramp.
    #[arg(long, default_value_t = 40)]
    low: u8,
    ///Brightest level used by the ramp and the square.
    #[arg(long, default_value_t = 90)]
    high: u8,
    ///Output file path
    #[arg(long, default_value = "/tmp/test_low_contrast.png")]
    output: PathBuf,
}

fn main() -> Result<(), image::ImageError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let params = Parameters::parse();
    let (low, high) = (params.low.min(params.high), params.low.max(params.high));
    let span = f32::from(high - low);
    let diag = (params.width + params.height).max(2) as f32 - 2.0;

    let mut img_out = GrayImage::new(params.width, params.height);
    let (sq_x, sq_y) = (params.width / 3, params.height / 3);

    for y in 0..params.height {
        for x in 0..params.width {
            let in_square = (sq_x..2 * sq_x).contains(&x) && (sq_y..2 * sq_y).contains(&y);
            let level = if in_square {
                high
            } else {
                let t = if diag > 0.0 { (x + y) as f32 / diag } else { 0.0 };
                low + (t * span).round() as u8
            };
            img_out.put_pixel(x, y, Luma([level]));
        }
    }
    img_out.save(&params.output)?;
    info!(
        "wrote {}x{} image with levels {}..={} to {}",
        params.width,
        params.height,
        low,
        high,
        params.output.display()
    );
    Ok(())
}
