//! P5 encoder: canonical header, bounds-checked raster.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use enough::Stop;
use imgref::ImgRef;

use super::MAX_MAXVAL;
use crate::error::PgmError;
use crate::pgm_image::check_dimensions;
use crate::sample::GraySample;

/// Canonical header: `P5\n<width> <height>\n<maxval>\n`.
pub(crate) fn header(width: usize, height: usize, maxval: u32) -> String {
    format!("P5\n{width} {height}\n{maxval}\n")
}

/// Validate the request, then emit the header and one chunk per row.
///
/// Each sample is range-checked as its row is built; a failing row is not
/// emitted, but rows before it already are. Returns the total byte count.
pub(crate) fn encode_pgm<S: GraySample>(
    img: ImgRef<'_, S>,
    maxval: u32,
    stop: &dyn Stop,
    sink: &mut dyn FnMut(&[u8]) -> Result<(), PgmError>,
) -> Result<usize, PgmError> {
    if maxval > MAX_MAXVAL {
        return Err(PgmError::InvalidMaxval(maxval));
    }
    let (w, h) = (img.width(), img.height());
    check_dimensions(w, h)?;
    let raster_len = w.checked_mul(h).ok_or(PgmError::DimensionsTooLarge {
        width: u32::try_from(w).unwrap_or(u32::MAX),
        height: u32::try_from(h).unwrap_or(u32::MAX),
    })?;

    stop.check()?;

    let header = header(w, h, maxval);
    sink(header.as_bytes())?;

    let limit = i64::from(maxval);
    let mut row_buf = Vec::with_capacity(w);
    for (y, row) in img.rows().enumerate() {
        stop.check()?;
        row_buf.clear();
        for (x, &sample) in row.iter().enumerate() {
            let value = sample.to_i64();
            if !(0..=limit).contains(&value) {
                return Err(PgmError::PixelOutOfRange {
                    value,
                    maxval,
                    x,
                    y,
                });
            }
            row_buf.push(value as u8);
        }
        sink(&row_buf)?;
    }

    Ok(header.len() + raster_len)
}

/// Encode into a freshly allocated buffer.
pub(crate) fn encode_to_vec<S: GraySample>(
    img: ImgRef<'_, S>,
    maxval: u32,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PgmError> {
    let mut out = Vec::new();
    encode_pgm(img, maxval, stop, &mut |bytes| {
        out.extend_from_slice(bytes);
        Ok(())
    })?;
    Ok(out)
}
