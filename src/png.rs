//! Minimal PNG writer for 8-bit RGBA images.
//!
//! Emits the signature followed by exactly three chunks: IHDR, a single IDAT
//! holding the zlib-compressed scanlines (filter type None on every row) and
//! an empty IEND.

use anyhow::{ensure, Context, Result};
use flate2::{write::ZlibEncoder, Compression};
use std::io::Write;

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;
const FILTER_NONE: u8 = 0;
const BYTES_PER_PIXEL: usize = 4;
const MAX_CHUNK_LEN: u32 = (1 << 31) - 1;

/// Encode a row-major RGBA buffer as a PNG byte stream.
pub fn encode(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>> {
    ensure!(
        width > 0 && height > 0,
        "PNG dimensions must be non-zero, got {width}x{height}"
    );
    let expected = width as usize * height as usize * BYTES_PER_PIXEL;
    ensure!(
        rgba.len() == expected,
        "RGBA buffer holds {} bytes, expected {expected} for {width}x{height}",
        rgba.len()
    );

    let compressed = compress(&scanlines(width, rgba)).context("Failed to compress image data")?;

    // 8 signature bytes + 12 framing bytes per chunk + 13 IHDR bytes
    let mut png = Vec::with_capacity(PNG_SIGNATURE.len() + 3 * 12 + 13 + compressed.len());
    png.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut png, b"IHDR", &ihdr(width, height))?;
    write_chunk(&mut png, b"IDAT", &compressed)?;
    write_chunk(&mut png, b"IEND", &[])?;

    Ok(png)
}

fn ihdr(width: u32, height: u32) -> [u8; 13] {
    let mut data = [0u8; 13];
    data[0..4].copy_from_slice(&width.to_be_bytes());
    data[4..8].copy_from_slice(&height.to_be_bytes());
    data[8] = BIT_DEPTH;
    data[9] = COLOR_TYPE_RGBA;
    // compression, filter and interlace methods stay 0
    data
}

/// Prefix every row with its filter type byte.
fn scanlines(width: u32, rgba: &[u8]) -> Vec<u8> {
    let stride = width as usize * BYTES_PER_PIXEL;
    let mut raw = Vec::with_capacity(rgba.len() + rgba.len() / stride);
    for row in rgba.chunks_exact(stride) {
        raw.push(FILTER_NONE);
        raw.extend_from_slice(row);
    }
    raw
}

fn compress(raw: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(raw)?;
    Ok(encoder.finish()?)
}

/// Append a chunk: length, type, data and the CRC-32 of type + data.
fn write_chunk(out: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) -> Result<()> {
    out.extend_from_slice(&chunk_length(chunk_type, data.len())?.to_be_bytes());
    out.extend_from_slice(chunk_type);
    out.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    out.extend_from_slice(&hasher.finalize().to_be_bytes());
    Ok(())
}

// Chunk lengths are limited to 2^31 - 1 bytes
fn chunk_length(chunk_type: &[u8; 4], len: usize) -> Result<u32> {
    u32::try_from(len)
        .ok()
        .filter(|&len| len <= MAX_CHUNK_LEN)
        .with_context(|| {
            format!(
                "{} chunk of {len} bytes exceeds the PNG chunk size limit",
                String::from_utf8_lossy(chunk_type)
            )
        })
}
