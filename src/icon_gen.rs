use crate::{
    png,
    raster::{self, Palette},
};
use anyhow::{Context, Result};
use std::{
    fs::create_dir_all,
    path::{Path, PathBuf},
    str::FromStr,
};

/// Sizes produced when none are requested
pub const DEFAULT_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Background color of the badge, in CSS color format
pub const DEFAULT_COLOR: &str = "#ff6d00";

#[derive(Debug)]
pub struct Args {
    pub output: PathBuf,
    pub sizes: Vec<u32>,
    pub color: String,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from("./icons"),
            sizes: DEFAULT_SIZES.to_vec(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

/// File name used for the icon of the given size
pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

pub fn generate_icons(args: Args) -> Result<()> {
    let background = parse_color(&args.color)?;
    let palette = Palette::default().with_background(background);

    // Ensure the output directory exists
    create_dir_all(&args.output).with_context(|| {
        format!(
            "Can't create output directory {}",
            args.output.display()
        )
    })?;

    for &size in &args.sizes {
        generate_icon(size, &palette, &args.output)?;
    }

    println!("\n✓ All icons generated successfully.");
    Ok(())
}

fn generate_icon(size: u32, palette: &Palette, out_dir: &Path) -> Result<()> {
    println!("Generating {size}x{size} icon...");

    let rgba = raster::generate_with_palette(size, palette);
    let png_data = png::encode(size, size, &rgba)
        .with_context(|| format!("Failed to encode {size}x{size} icon"))?;

    let output_path = out_dir.join(icon_file_name(size));
    std::fs::write(&output_path, &png_data)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!(
        "  ✓ Wrote {} ({} bytes)",
        output_path.display(),
        png_data.len()
    );
    Ok(())
}

fn parse_color(color: &str) -> Result<[u8; 3]> {
    css_color::Srgb::from_str(color)
        .map(|color| {
            [
                (color.red * 255.).round() as u8,
                (color.green * 255.).round() as u8,
                (color.blue * 255.).round() as u8,
            ]
        })
        .map_err(|_| anyhow::anyhow!("Invalid color: {color}"))
}
