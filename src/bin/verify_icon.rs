use annotate_icons::icon_gen::{icon_file_name, DEFAULT_SIZES};
use anyhow::{ensure, Context, Result};
use image::{io::Reader as ImageReader, ColorType};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let mut paths: Vec<PathBuf> = std::env::args().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        paths = DEFAULT_SIZES
            .iter()
            .map(|&size| Path::new("icons").join(icon_file_name(size)))
            .collect();
    }

    for path in &paths {
        verify_icon(path)?;
    }

    println!("\n✓ All {} icons look like badge icons", paths.len());
    Ok(())
}

fn verify_icon(path: &Path) -> Result<()> {
    let img = ImageReader::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .decode()
        .with_context(|| format!("Failed to decode {}", path.display()))?;

    println!("Checking icon: {}", path.display());

    ensure!(
        img.color() == ColorType::Rgba8,
        "{} should be 8-bit RGBA, found {:?}",
        path.display(),
        img.color()
    );

    let width = img.width();
    let height = img.height();
    println!("  Image dimensions: {}x{}", width, height);
    ensure!(width == height, "{} is not square", path.display());

    let rgba_img = img.to_rgba8();

    // The rounded corners must leave the outermost pixels transparent
    let corners = [
        (0, 0),
        (width - 1, 0),
        (0, height - 1),
        (width - 1, height - 1),
    ];
    let opaque_corners = corners
        .iter()
        .filter(|&&(x, y)| rgba_img.get_pixel(x, y)[3] != 0)
        .count();
    println!("  {} out of 4 corners are transparent", 4 - opaque_corners);
    ensure!(
        opaque_corners == 0,
        "{} has {} opaque corner pixels",
        path.display(),
        opaque_corners
    );

    let center = rgba_img.get_pixel(width / 2, height / 2);
    println!(
        "  Center pixel RGBA: [{}, {}, {}, {}]",
        center[0], center[1], center[2], center[3]
    );
    ensure!(center[3] == 255, "{} has a translucent center", path.display());

    println!("✓ {} verified", path.display());
    Ok(())
}
