//! P5 decoder: header parsing and bounds-checked raster read.

use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

use super::tokenizer::Tokenizer;
use super::{MAGIC, MAX_MAXVAL, PgmHeader};
use crate::error::PgmError;
use crate::limits::Limits;
use crate::pgm_image::PgmImage;

/// Parse the P5 header: magic, width, height, maxval.
pub(crate) fn parse_header(data: &[u8]) -> Result<PgmHeader, PgmError> {
    let mut tokens = Tokenizer::new(data);

    if tokens.next_token() != MAGIC {
        return Err(PgmError::UnrecognizedFormat);
    }
    let width = parse_int(tokens.next_token(), "width")?;
    let height = parse_int(tokens.next_token(), "height")?;
    let maxval = parse_int(tokens.next_token(), "maxval")?;

    let width = dimension(width, "width")?;
    let height = dimension(height, "height")?;
    let maxval = u8::try_from(maxval).map_err(|_| {
        PgmError::InvalidHeader(format!(
            "maximum gray value {maxval} must be in range [0, {MAX_MAXVAL}]"
        ))
    })?;

    Ok(PgmHeader {
        width,
        height,
        maxval,
        data_offset: tokens.position(),
    })
}

fn parse_int(token: &[u8], field: &str) -> Result<i64, PgmError> {
    if token.is_empty() {
        return Err(PgmError::InvalidHeader(format!(
            "header ended before {field}"
        )));
    }
    core::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| {
            PgmError::InvalidHeader(format!(
                "{field} {:?} is not an integer",
                alloc::string::String::from_utf8_lossy(token)
            ))
        })
}

fn dimension(value: i64, field: &str) -> Result<u32, PgmError> {
    u32::try_from(value)
        .ok()
        .filter(|&v| v > 0)
        .ok_or_else(|| PgmError::InvalidHeader(format!("{field} {value} must be positive")))
}

/// Read `width * height` raster bytes, checking each against maxval.
pub(crate) fn decode_raster(
    data: &[u8],
    header: &PgmHeader,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<PgmImage, PgmError> {
    let w = header.width as usize;
    let h = header.height as usize;
    let expected = w.checked_mul(h).ok_or(PgmError::DimensionsTooLarge {
        width: header.width,
        height: header.height,
    })?;

    if let Some(limits) = limits {
        limits.check_header(header)?;
    }

    stop.check()?;

    let raster = data.get(header.data_offset..).unwrap_or(&[]);
    let maxval = header.maxval;

    // A lying header must not drive the allocation past what is present.
    let mut pixels = Vec::with_capacity(expected.min(raster.len()));
    let mut rows = raster.chunks(w);

    for y in 0..h {
        stop.check()?;
        let row = rows.next().unwrap_or(&[]);
        for (x, &p) in row.iter().enumerate() {
            if p > maxval {
                return Err(PgmError::PixelOutOfRange {
                    value: i64::from(p),
                    maxval: u32::from(maxval),
                    x,
                    y,
                });
            }
        }
        if row.len() < w {
            return Err(PgmError::UnexpectedEof {
                expected,
                actual: y * w + row.len(),
            });
        }
        pixels.extend_from_slice(row);
    }

    Ok(PgmImage::from_validated(pixels, w, h, maxval))
}
