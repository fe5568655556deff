//! Procedural generator for the pencil badge toolbar icons.
//!
//! [`raster`] paints the badge into an RGBA buffer, [`png`] wraps the buffer
//! into a PNG byte stream and [`icon_gen`] writes one file per requested size.

pub mod icon_gen;
pub mod png;
pub mod raster;
