//! Color to grayscale conversion by plain channel averaging.
//!
//! `gray = (r + g + b) / 3`, floored. Alpha is dropped; PGM has no alpha
//! channel. The result always declares maxval 255.

use alloc::vec::Vec;
use imgref::ImgRef;

use crate::error::PgmError;
use crate::pgm_image::PgmImage;

/// Floor average of three channels.
#[inline]
pub fn average(r: u8, g: u8, b: u8) -> u8 {
    ((u16::from(r) + u16::from(g) + u16::from(b)) / 3) as u8
}

/// Split a packed `0xAARRGGBB` pixel into `(r, g, b)`.
#[inline]
pub fn unpack_argb(p: u32) -> (u8, u8, u8) {
    let [_a, r, g, b] = p.to_be_bytes();
    (r, g, b)
}

/// Convert packed `0xAARRGGBB` pixels to grayscale.
///
/// Fails only for an empty grid.
pub fn argb_to_gray(img: ImgRef<'_, u32>) -> Result<PgmImage, PgmError> {
    convert(img, |&p| {
        let (r, g, b) = unpack_argb(p);
        average(r, g, b)
    })
}

/// Convert RGB8 pixels to grayscale.
#[cfg(feature = "rgb")]
pub fn rgb8_to_gray(img: ImgRef<'_, rgb::RGB8>) -> Result<PgmImage, PgmError> {
    convert(img, |p| average(p.r, p.g, p.b))
}

/// Convert RGBA8 pixels to grayscale, ignoring alpha.
#[cfg(feature = "rgb")]
pub fn rgba8_to_gray(img: ImgRef<'_, rgb::RGBA8>) -> Result<PgmImage, PgmError> {
    convert(img, |p| average(p.r, p.g, p.b))
}

fn convert<P>(img: ImgRef<'_, P>, to_gray: impl Fn(&P) -> u8) -> Result<PgmImage, PgmError> {
    let (w, h) = (img.width(), img.height());
    crate::pgm_image::check_dimensions(w, h)?;
    let mut buf = Vec::with_capacity(w * h);
    for row in img.rows() {
        buf.extend(row.iter().map(&to_gray));
    }
    Ok(PgmImage::from_validated(buf, w, h, u8::MAX))
}
