//! Binary PGM (P5) codec core.
//!
//! Header tokens may be separated by any whitespace run and interleaved with
//! `#` comments; the raster starts right after the single whitespace byte
//! that ends the maxval token. Output is always the canonical
//! `P5\n<w> <h>\n<maxval>\n` form.

mod decode;
mod encode;
mod tokenizer;

use crate::error::PgmError;
use crate::limits::Limits;
use crate::pgm_image::PgmImage;
use crate::sample::GraySample;
use alloc::vec::Vec;
use enough::Stop;
use imgref::ImgRef;

/// Magic token identifying a binary PGM.
pub const MAGIC: &[u8] = b"P5";

/// Largest maxval an 8-bit PGM can declare.
pub const MAX_MAXVAL: u32 = 255;

/// Parsed P5 header (internal).
pub(crate) struct PgmHeader {
    pub width: u32,
    pub height: u32,
    pub maxval: u8,
    pub data_offset: usize,
}

/// Decode P5 data (called from DecodeRequest).
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<PgmImage, PgmError> {
    let header = decode::parse_header(data)?;
    decode::decode_raster(data, &header, limits, stop)
}

/// Encode to P5 (called from EncodeRequest).
pub(crate) fn encode<S: GraySample>(
    img: ImgRef<'_, S>,
    maxval: u32,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PgmError> {
    encode::encode_to_vec(img, maxval, stop)
}

/// Encode to P5, handing the header and each row to `sink` as produced.
#[cfg(feature = "std")]
pub(crate) fn encode_streaming<S: GraySample>(
    img: ImgRef<'_, S>,
    maxval: u32,
    stop: &dyn Stop,
    sink: &mut dyn FnMut(&[u8]) -> Result<(), PgmError>,
) -> Result<usize, PgmError> {
    encode::encode_pgm(img, maxval, stop, sink)
}
